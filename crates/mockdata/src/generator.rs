//! The random-content, fixed-shape dataset generator.
//!
//! Per-entity generation lives next to each entity type (`contact.rs`,
//! `deal.rs`, ...); this module owns the random source, the reference instant
//! and the draws they share.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use democrm_core::DomainResult;

use crate::config::{GeneratorConfig, ScoreRange};
use crate::format::relative_time_de;
use crate::lexicon::Lexicon;

/// Synthesizes CRM records from an injectable random source.
///
/// All timestamps are computed relative to a fixed reference instant (`now`),
/// so a seeded generator with a pinned `now` reproduces its output exactly.
#[derive(Debug, Clone)]
pub struct MockDataGenerator<R: Rng = StdRng> {
    pub(crate) rng: R,
    pub(crate) now: DateTime<Utc>,
    pub(crate) config: GeneratorConfig,
    pub(crate) lexicon: Lexicon,
}

impl MockDataGenerator<StdRng> {
    /// Default configuration, reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            now: Utc::now(),
            config: GeneratorConfig::default().with_seed(seed),
            lexicon: Lexicon::german(),
        }
    }

    /// Default configuration, seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            now: Utc::now(),
            config: GeneratorConfig::default(),
            lexicon: Lexicon::german(),
        }
    }

    /// Build from a validated configuration; uses `config.seed` when present.
    pub fn from_config(config: GeneratorConfig) -> DomainResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, config, Lexicon::german())
    }
}

impl<R: Rng> MockDataGenerator<R> {
    /// Build around a caller-provided random source.
    ///
    /// Fails fast on a degenerate configuration or an empty lexicon table.
    pub fn with_rng(rng: R, config: GeneratorConfig, lexicon: Lexicon) -> DomainResult<Self> {
        config.validate()?;
        let lexicon = lexicon.validated()?;
        Ok(Self {
            rng,
            now: Utc::now(),
            config,
            lexicon,
        })
    }

    /// Pin the reference instant all generated timestamps are relative to.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Instant a whole number of days in `[0, window_days)` before `now`.
    pub(crate) fn days_ago(&mut self, window_days: u32) -> DateTime<Utc> {
        let days = self.rng.gen_range(0..window_days.max(1));
        self.now - Duration::days(i64::from(days))
    }

    pub(crate) fn relative(&self, at: DateTime<Utc>) -> String {
        relative_time_de(at, self.now)
    }
}

/// Uniformly pick one entry. Callers only pass validated, non-empty tables.
pub(crate) fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

pub(crate) fn score<R: Rng>(rng: &mut R, range: ScoreRange) -> u8 {
    rng.gen_range(range.min..=range.max)
}
