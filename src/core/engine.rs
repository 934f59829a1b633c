use crate::config::CacheSettings;
use crate::core::{scoring, validator::{self, FilterError}};
use crate::models::{FilterForm, FilterInput, ScoreResult};
use crate::services::ScoreCache;

/// Main scoring orchestrator - validates a submission and scores it
///
/// # Pipeline Stages
/// 1. Structural validation of the raw form
/// 2. Domain checks while building the `FilterInput`
/// 3. Scoring (memoized when a cache is attached)
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    cache: Option<ScoreCache>,
}

impl ScoreEngine {
    /// Engine without memoization
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn with_cache(cache: ScoreCache) -> Self {
        Self { cache: Some(cache) }
    }

    pub fn from_settings(settings: &CacheSettings) -> Self {
        if !settings.enabled {
            return Self::new();
        }

        Self::with_cache(ScoreCache::new(settings.capacity, settings.ttl_secs))
    }

    pub fn cache(&self) -> Option<&ScoreCache> {
        self.cache.as_ref()
    }

    /// Score validated filters on the 0-1 scale
    pub fn score(&self, input: &FilterInput) -> f64 {
        match &self.cache {
            Some(cache) => cache.get_or_insert_with(input, || scoring::score(input)),
            None => scoring::score(input),
        }
    }

    /// Run a raw submission through the whole pipeline
    ///
    /// # Returns
    /// The scored filters, or why the submission could not be scored. A
    /// submission that fails validation never reaches the scorer.
    pub fn evaluate(&self, form: &FilterForm) -> Result<ScoreResult, FilterError> {
        let input = match validator::accept(form) {
            Ok(input) => input,
            Err(FilterError::ContractViolation(violation)) => {
                tracing::warn!("Rejected filter submission: {}", violation);
                return Err(violation.into());
            }
            Err(err) => return Err(err),
        };

        let probability = self.score(&input);

        tracing::info!(
            "Scored filters: race={}, age={}-{}, probability={}",
            input.race_category().as_str(),
            input.age_range().min,
            input.age_range().max,
            probability
        );

        Ok(ScoreResult { input, probability })
    }
}
