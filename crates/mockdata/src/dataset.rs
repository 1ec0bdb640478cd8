//! The complete demo dataset, built once at startup.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use democrm_core::DomainResult;

use crate::activity::Activity;
use crate::ai_module::{AiModule, AiSettings, ai_module_catalog};
use crate::analytics::AnalyticsData;
use crate::contact::Contact;
use crate::dashboard::{DashboardKpis, ai_insights};
use crate::deal::Pipeline;
use crate::generator::MockDataGenerator;
use crate::workflow::Workflow;

/// Everything the demo pages consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub contacts: Vec<Contact>,
    pub pipeline: Pipeline,
    pub workflows: Vec<Workflow>,
    /// Newest first.
    pub activities: Vec<Activity>,
    pub analytics: AnalyticsData,
    pub ai_modules: Vec<AiModule>,
    pub ai_settings: AiSettings,
    pub ai_insights: Vec<String>,
    pub dashboard: DashboardKpis,
}

impl<R: Rng> MockDataGenerator<R> {
    /// Generate the full dataset: contacts first, then the deals and
    /// activities that reference them.
    pub fn generate_dataset(&mut self) -> DomainResult<Dataset> {
        let config = self.config.clone();

        let contacts = self.generate_contacts(config.contact_count);
        let pipeline = self.generate_deals_by_stage(&contacts)?;
        let workflows = self.generate_workflows(config.workflow_count);
        let activities = self.generate_activities(config.activity_count, &contacts)?;

        info!(
            contacts = contacts.len(),
            deals = pipeline.len(),
            workflows = workflows.len(),
            activities = activities.len(),
            "generated demo dataset"
        );

        Ok(Dataset {
            contacts,
            pipeline,
            workflows,
            activities,
            analytics: AnalyticsData::reference(),
            ai_modules: ai_module_catalog(),
            ai_settings: AiSettings::default(),
            ai_insights: ai_insights(),
            dashboard: DashboardKpis::reference(),
        })
    }
}
