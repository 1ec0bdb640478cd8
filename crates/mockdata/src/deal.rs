//! Deals and the stage-partitioned sales pipeline.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use democrm_core::{DealId, DomainError, DomainResult, Entity, find_by_id};

use crate::contact::Contact;
use crate::generator::{MockDataGenerator, pick};

/// Discrete deal amounts in whole euros.
pub const DEAL_VALUES: [u64; 8] = [15_000, 25_000, 38_000, 45_000, 75_000, 120_000, 150_000, 200_000];

/// Probability band for a stage label the pipeline does not know.
pub const UNSTAGED_PROBABILITY_BAND: RangeInclusive<u8> = 10..=99;

/// Pipeline phase, in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStage {
    New,
    Qualified,
    Proposal,
    Closed,
}

impl DealStage {
    pub const ALL: [DealStage; 4] = [
        DealStage::New,
        DealStage::Qualified,
        DealStage::Proposal,
        DealStage::Closed,
    ];

    /// German board column label.
    pub fn label(self) -> &'static str {
        match self {
            DealStage::New => "Neu",
            DealStage::Qualified => "Qualifiziert",
            DealStage::Proposal => "Angebot",
            DealStage::Closed => "Abschluss",
        }
    }

    /// Closing probability (percent) a deal in this stage may carry.
    pub fn probability_band(self) -> RangeInclusive<u8> {
        match self {
            DealStage::New => 10..=30,
            DealStage::Qualified => 31..=60,
            DealStage::Proposal => 61..=85,
            DealStage::Closed => 86..=99,
        }
    }

    /// Accepts the German label or the English name, case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        DealStage::ALL.into_iter().find(|stage| {
            stage.label().eq_ignore_ascii_case(label)
                || format!("{stage:?}").eq_ignore_ascii_case(label)
        })
    }
}

impl core::fmt::Display for DealStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::str::FromStr for DealStage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DealStage::from_label(s)
            .ok_or_else(|| DomainError::validation(format!("unknown deal stage: {s}")))
    }
}

/// Probability band keyed by a free-form stage label, falling back to
/// [`UNSTAGED_PROBABILITY_BAND`].
pub fn probability_band_for_label(label: &str) -> RangeInclusive<u8> {
    DealStage::from_label(label)
        .map(DealStage::probability_band)
        .unwrap_or(UNSTAGED_PROBABILITY_BAND)
}

/// Colour tier a board card gets from its AI potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatTier {
    Hot,
    Warm,
    Neutral,
    Cool,
    Cold,
}

impl HeatTier {
    pub fn from_potential(potential: u8) -> Self {
        match potential {
            80..=u8::MAX => HeatTier::Hot,
            60..=79 => HeatTier::Warm,
            40..=59 => HeatTier::Neutral,
            20..=39 => HeatTier::Cool,
            _ => HeatTier::Cold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: DealId,
    /// `"{company} - {product}"`.
    pub title: String,
    /// Whole euros, one of [`DEAL_VALUES`].
    pub value: u64,
    pub stage: DealStage,
    /// Full name of the contact the deal was drawn from.
    pub contact: String,
    pub company: String,
    /// Percent; always inside `stage.probability_band()`.
    pub probability: u8,
    pub ai_recommendation: String,
    pub expected_closing: DateTime<Utc>,
    pub expected_closing_text: String,
    pub ai_potential: u8,
    pub last_update: DateTime<Utc>,
    pub last_update_text: String,
}

impl Deal {
    pub fn heat_tier(&self) -> HeatTier {
        HeatTier::from_potential(self.ai_potential)
    }
}

impl Entity for Deal {
    type Id = DealId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Deals partitioned by stage. Every stage is always present (possibly empty)
/// and iteration follows board order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    stages: BTreeMap<DealStage, Vec<Deal>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            stages: DealStage::ALL.into_iter().map(|s| (s, Vec::new())).collect(),
        }
    }

    pub fn stage(&self, stage: DealStage) -> &[Deal] {
        self.stages.get(&stage).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All deals, stage by stage, in board order.
    pub fn deals(&self) -> impl Iterator<Item = &Deal> {
        self.stages.values().flatten()
    }

    /// Flattened copy of every stage, in board order.
    pub fn all_deals(&self) -> Vec<Deal> {
        self.deals().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.stages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, id: DealId) -> Option<&Deal> {
        self.stages.values().find_map(|deals| find_by_id(deals, id))
    }

    /// Sum of deal values in one stage.
    pub fn stage_total(&self, stage: DealStage) -> u64 {
        self.stage(stage).iter().map(|d| d.value).sum()
    }

    pub fn total_value(&self) -> u64 {
        self.deals().map(|d| d.value).sum()
    }

    /// The `n` most valuable deals; ties keep board order.
    pub fn top_deals(&self, n: usize) -> Vec<&Deal> {
        let mut deals: Vec<&Deal> = self.deals().collect();
        deals.sort_by(|a, b| b.value.cmp(&a.value));
        deals.truncate(n);
        deals
    }

    pub(crate) fn push(&mut self, deal: Deal) {
        self.stages.entry(deal.stage).or_default().push(deal);
    }

    pub(crate) fn remove(&mut self, id: DealId) -> Option<Deal> {
        self.stages.values_mut().find_map(|deals| {
            let index = deals.iter().position(|d| d.id == id)?;
            Some(deals.remove(index))
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MockDataGenerator<R> {
    /// Generate one deal in `stage`, referencing a random contact.
    ///
    /// Contacts must be generated first; an empty slice is an invariant
    /// violation.
    pub fn generate_deal(
        &mut self,
        id: DealId,
        stage: DealStage,
        contacts: &[Contact],
    ) -> DomainResult<Deal> {
        if contacts.is_empty() {
            return Err(DomainError::invariant(
                "deals reference a contact; generate contacts first",
            ));
        }

        let contact = pick(&mut self.rng, contacts);
        let value = *pick(&mut self.rng, &DEAL_VALUES);
        let probability = self.rng.gen_range(stage.probability_band());
        let ai_recommendation = pick(&mut self.rng, &self.lexicon.ai_recommendations).clone();

        let closing_in = self.rng.gen_range(1..=self.config.max_closing_offset_days);
        let expected_closing = self.now + Duration::days(i64::from(closing_in));

        // CRM-System half the time, the other two a quarter each.
        let product = if self.rng.gen_bool(0.5) {
            "CRM-System"
        } else if self.rng.gen_bool(0.5) {
            "Consulting"
        } else {
            "Lizenzupgrade"
        };

        let ai_potential = self.rng.gen_range(1..=100);
        let last_update = self.days_ago(self.config.deal_update_window_days);

        Ok(Deal {
            id,
            title: format!("{} - {}", contact.company, product),
            value,
            stage,
            contact: contact.name.clone(),
            company: contact.company.clone(),
            probability,
            ai_recommendation,
            expected_closing,
            expected_closing_text: self.relative(expected_closing),
            ai_potential,
            last_update,
            last_update_text: self.relative(last_update),
        })
    }

    /// Generate the configured number of deals per stage. Ids run
    /// contiguously from 1 across stages in board order.
    pub fn generate_deals_by_stage(&mut self, contacts: &[Contact]) -> DomainResult<Pipeline> {
        let counts = self.config.deals_per_stage;
        let mut pipeline = Pipeline::new();
        let mut next_id = 1;

        for stage in DealStage::ALL {
            for _ in 0..counts.get(stage) {
                pipeline.push(self.generate_deal(DealId::new(next_id), stage, contacts)?);
                next_id += 1;
            }
        }

        debug!(count = pipeline.len(), "generated deals");
        Ok(pipeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
    }

    fn generate(seed: u64) -> (Vec<Contact>, Pipeline) {
        let mut generator = MockDataGenerator::seeded(seed).at(test_time());
        let contacts = generator.generate_contacts(25);
        let pipeline = generator.generate_deals_by_stage(&contacts).unwrap();
        (contacts, pipeline)
    }

    #[test]
    fn deals_by_stage_has_reference_counts() {
        let (_, pipeline) = generate(1);
        assert_eq!(pipeline.stage(DealStage::New).len(), 5);
        assert_eq!(pipeline.stage(DealStage::Qualified).len(), 5);
        assert_eq!(pipeline.stage(DealStage::Proposal).len(), 4);
        assert_eq!(pipeline.stage(DealStage::Closed).len(), 5);
        assert_eq!(pipeline.len(), 19);
    }

    #[test]
    fn deals_by_stage_yields_contiguous_ids() {
        let (_, pipeline) = generate(2);
        let ids: Vec<u32> = pipeline.deals().map(|d| d.id.get()).collect();
        assert_eq!(ids, (1..=19).collect::<Vec<_>>());
        assert_eq!(pipeline.stage(DealStage::Proposal)[0].id, DealId::new(11));
        assert_eq!(pipeline.stage(DealStage::Closed)[0].id, DealId::new(15));
    }

    #[test]
    fn probability_stays_inside_stage_band() {
        let (_, pipeline) = generate(3);
        for stage in DealStage::ALL {
            for deal in pipeline.stage(stage) {
                assert_eq!(deal.stage, stage);
                assert!(stage.probability_band().contains(&deal.probability));
            }
        }
    }

    #[test]
    fn deal_fields_reference_an_existing_contact() {
        let (contacts, pipeline) = generate(4);
        for deal in pipeline.deals() {
            assert!(
                contacts
                    .iter()
                    .any(|c| c.name == deal.contact && c.company == deal.company)
            );
            assert!(deal.title.starts_with(&format!("{} - ", deal.company)));
            assert!(
                ["CRM-System", "Consulting", "Lizenzupgrade"]
                    .iter()
                    .any(|p| deal.title.ends_with(p))
            );
            assert!(DEAL_VALUES.contains(&deal.value));
            assert!((1..=100).contains(&deal.ai_potential));
            assert!(deal.expected_closing > test_time());
            assert!(deal.expected_closing <= test_time() + Duration::days(60));
            assert!(deal.expected_closing_text.starts_with("in "));
            assert!(deal.last_update <= test_time());
            assert!(deal.last_update_text.starts_with("vor "));
        }
    }

    #[test]
    fn deal_without_contacts_is_an_invariant_violation() {
        let mut generator = MockDataGenerator::seeded(5).at(test_time());
        let err = generator
            .generate_deal(DealId::new(1), DealStage::New, &[])
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn stage_labels_parse_in_both_languages() {
        assert_eq!("Angebot".parse::<DealStage>().unwrap(), DealStage::Proposal);
        assert_eq!("qualified".parse::<DealStage>().unwrap(), DealStage::Qualified);
        assert_eq!(DealStage::Closed.to_string(), "Abschluss");
        assert!("Verloren".parse::<DealStage>().is_err());
    }

    #[test]
    fn unknown_label_uses_unstaged_band() {
        assert_eq!(probability_band_for_label("Neu"), 10..=30);
        assert_eq!(probability_band_for_label("Closed"), 86..=99);
        assert_eq!(probability_band_for_label("Verhandlung"), 10..=99);
    }

    #[test]
    fn totals_and_top_deals() {
        let (_, pipeline) = generate(6);
        let per_stage: u64 = DealStage::ALL
            .into_iter()
            .map(|s| pipeline.stage_total(s))
            .sum();
        assert_eq!(per_stage, pipeline.total_value());

        let top = pipeline.top_deals(5);
        assert_eq!(top.len(), 5);
        assert!(top.windows(2).all(|w| w[0].value >= w[1].value));
        let max = pipeline.deals().map(|d| d.value).max().unwrap();
        assert_eq!(top[0].value, max);
    }

    #[test]
    fn all_deals_flattens_in_board_order() {
        let (_, pipeline) = generate(7);
        let flat = pipeline.all_deals();
        assert_eq!(flat.len(), 19);
        assert!(flat.windows(2).all(|w| w[0].stage <= w[1].stage));
        assert_eq!(pipeline.find(DealId::new(12)).map(|d| d.stage), Some(DealStage::Proposal));
        assert!(pipeline.find(DealId::new(20)).is_none());
    }

    #[test]
    fn heat_tiers_follow_potential_thresholds() {
        assert_eq!(HeatTier::from_potential(100), HeatTier::Hot);
        assert_eq!(HeatTier::from_potential(80), HeatTier::Hot);
        assert_eq!(HeatTier::from_potential(79), HeatTier::Warm);
        assert_eq!(HeatTier::from_potential(40), HeatTier::Neutral);
        assert_eq!(HeatTier::from_potential(20), HeatTier::Cool);
        assert_eq!(HeatTier::from_potential(1), HeatTier::Cold);
    }

    #[test]
    fn pipeline_serializes_stage_keys_as_strings() {
        let (_, pipeline) = generate(8);
        let json = serde_json::to_value(&pipeline).unwrap();
        let stages = json["stages"].as_object().unwrap();
        assert_eq!(stages.len(), 4);
        assert_eq!(stages["proposal"].as_array().unwrap().len(), 4);
    }
}
