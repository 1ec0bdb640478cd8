//! Generator configuration (counts, ranges, time windows).

use serde::{Deserialize, Serialize};
use tracing::warn;

use democrm_core::{DomainError, DomainResult};

use crate::deal::DealStage;

/// Inclusive integer range for 0..=100 style scores.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, name: &str) -> DomainResult<()> {
        if self.min > self.max {
            return Err(DomainError::validation(format!(
                "{name}: min {} exceeds max {}",
                self.min, self.max
            )));
        }
        if self.max > 100 {
            return Err(DomainError::validation(format!(
                "{name}: max {} exceeds 100",
                self.max
            )));
        }
        Ok(())
    }
}

/// Number of deals generated per pipeline stage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCounts {
    pub new: u32,
    pub qualified: u32,
    pub proposal: u32,
    pub closed: u32,
}

impl StageCounts {
    pub fn get(&self, stage: DealStage) -> u32 {
        match stage {
            DealStage::New => self.new,
            DealStage::Qualified => self.qualified,
            DealStage::Proposal => self.proposal,
            DealStage::Closed => self.closed,
        }
    }

    /// Deals across all stages; `None` if the sum does not fit a `u32`.
    pub fn total(&self) -> Option<u32> {
        self.new
            .checked_add(self.qualified)?
            .checked_add(self.proposal)?
            .checked_add(self.closed)
    }
}

impl Default for StageCounts {
    fn default() -> Self {
        Self {
            new: 5,
            qualified: 5,
            proposal: 4,
            closed: 5,
        }
    }
}

/// Configuration for [`crate::MockDataGenerator`].
///
/// All time windows are in whole days relative to the generator's reference
/// instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Seed for a reproducible dataset; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub contact_count: u32,
    pub deals_per_stage: StageCounts,
    pub workflow_count: u32,
    pub activity_count: u32,
    pub score_range: ScoreRange,
    pub ai_score_range: ScoreRange,
    pub interaction_window_days: u32,
    pub activity_window_days: u32,
    pub workflow_run_window_days: u32,
    pub deal_update_window_days: u32,
    pub max_closing_offset_days: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            contact_count: 25,
            deals_per_stage: StageCounts::default(),
            workflow_count: 5,
            activity_count: 15,
            score_range: ScoreRange::new(30, 98),
            ai_score_range: ScoreRange::new(10, 100),
            interaction_window_days: 20,
            activity_window_days: 10,
            workflow_run_window_days: 7,
            deal_update_window_days: 10,
            max_closing_offset_days: 60,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Defaults overlaid with `DEMOCRM_SEED`, `DEMOCRM_CONTACTS` and
    /// `DEMOCRM_ACTIVITIES` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`. Unparsable values are
    /// logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = parse_var(&lookup, "DEMOCRM_SEED") {
            config.seed = Some(seed);
        }
        if let Some(count) = parse_var(&lookup, "DEMOCRM_CONTACTS") {
            config.contact_count = count;
        }
        if let Some(count) = parse_var(&lookup, "DEMOCRM_ACTIVITIES") {
            config.activity_count = count;
        }

        config
    }

    /// Reject degenerate configurations before any generation happens.
    pub fn validate(&self) -> DomainResult<()> {
        self.score_range.validate("score_range")?;
        self.ai_score_range.validate("ai_score_range")?;

        let deal_count = self
            .deals_per_stage
            .total()
            .ok_or_else(|| DomainError::validation("deals_per_stage total overflows"))?;
        let needs_contacts = deal_count > 0 || self.activity_count > 0;
        if needs_contacts && self.contact_count == 0 {
            return Err(DomainError::validation(
                "contact_count must be at least 1 when deals or activities are generated",
            ));
        }

        for (name, days) in [
            ("interaction_window_days", self.interaction_window_days),
            ("activity_window_days", self.activity_window_days),
            ("workflow_run_window_days", self.workflow_run_window_days),
            ("deal_update_window_days", self.deal_update_window_days),
            ("max_closing_offset_days", self.max_closing_offset_days),
        ] {
            if days == 0 {
                return Err(DomainError::validation(format!("{name} must be at least 1")));
            }
        }

        Ok(())
    }
}

fn parse_var<T: core::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable configuration value");
            None
        }
    }
}
