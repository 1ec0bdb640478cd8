//! Synthetic CRM dataset generation.
//!
//! Produces the in-memory entity graph (contacts, deals grouped by pipeline
//! stage, automation workflows, a sorted activity timeline) from fixed German
//! lookup tables and an injectable random source, plus the static reference
//! tables (analytics, AI-lab modules, dashboard figures) the demo pages read.
//!
//! Counts, field ranges and relationships are deterministic; sampled values are
//! not, unless the generator is seeded.

pub mod activity;
pub mod ai_module;
pub mod analytics;
pub mod config;
pub mod contact;
pub mod dashboard;
pub mod dataset;
pub mod deal;
pub mod format;
pub mod generator;
pub mod lexicon;
pub mod session;
pub mod workflow;

pub use activity::{Activity, ActivityType};
pub use ai_module::{AiModule, AiSetting, AiSettings, ModuleParameter, ai_module_catalog};
pub use analytics::{AnalyticsData, CampaignConversion, Kpi, MonthlyRevenue};
pub use config::{GeneratorConfig, ScoreRange, StageCounts};
pub use contact::{Contact, ContactSortKey, SortConfig, SortDirection, search_contacts, sort_contacts};
pub use dashboard::{DashboardKpis, ai_insights};
pub use dataset::Dataset;
pub use deal::{DEAL_VALUES, Deal, DealStage, HeatTier, Pipeline, probability_band_for_label};
pub use format::{format_eur, relative_time_de};
pub use generator::MockDataGenerator;
pub use lexicon::Lexicon;
pub use workflow::{StepType, Workflow, WorkflowPerformance, WorkflowStep, WorkflowType};
