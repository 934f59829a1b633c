use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::models::{FilterInput, RaceCategory};

/// Bounded in-memory memo of computed scores.
///
/// Scoring is pure, so a hit always returns exactly what a fresh computation
/// would. Cloning shares the underlying store.
#[derive(Clone)]
pub struct ScoreCache {
    scores: Cache<ScoreKey, f64>,
}

impl ScoreCache {
    /// Create a cache holding at most `capacity` scores
    pub fn new(capacity: u64, ttl_secs: Option<u64>) -> Self {
        let mut builder = Cache::<ScoreKey, f64>::builder().max_capacity(capacity);
        if let Some(ttl) = ttl_secs {
            builder = builder.time_to_live(Duration::from_secs(ttl));
        }

        Self {
            scores: builder.build(),
        }
    }

    /// Return the cached score for `input`, computing and storing it on a miss
    pub fn get_or_insert_with<F>(&self, input: &FilterInput, compute: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        let key = ScoreKey::from(input);
        if let Some(score) = self.scores.get(&key) {
            tracing::trace!("Score cache hit: {:?}", key);
            return score;
        }

        let score = compute();
        self.scores.insert(key, score);
        tracing::trace!("Score cache set: {:?}", key);
        score
    }

    pub fn get(&self, input: &FilterInput) -> Option<f64> {
        self.scores.get(&ScoreKey::from(input))
    }

    pub fn invalidate_all(&self) {
        self.scores.invalidate_all();
        self.scores.run_pending_tasks();
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.scores.run_pending_tasks();
        CacheStats {
            entries: self.scores.entry_count(),
        }
    }
}

impl std::fmt::Debug for ScoreCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreCache")
            .field("entries", &self.scores.entry_count())
            .finish()
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
}

/// Hashable identity of a `FilterInput`.
///
/// Floats are keyed by bit pattern, so only bit-identical inputs share an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreKey {
    age_min: u8,
    age_max: u8,
    income_bits: u64,
    height_min_bits: u64,
    height_max_bits: u64,
    race: RaceCategory,
    marital: bool,
    weight: bool,
}

impl From<&FilterInput> for ScoreKey {
    fn from(input: &FilterInput) -> Self {
        let age = input.age_range();
        let height = input.height_range();
        Self {
            age_min: age.min,
            age_max: age.max,
            income_bits: input.income_floor().to_bits(),
            height_min_bits: height.min.to_bits(),
            height_max_bits: height.max.to_bits(),
            race: input.race_category(),
            marital: input.marital_preference(),
            weight: input.weight_preference(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRange, HeightRange};
    use std::cell::Cell;

    fn create_test_input(income: f64) -> FilterInput {
        FilterInput::new(
            AgeRange::new(25, 45).unwrap(),
            income,
            HeightRange::new(5.0, 6.5).unwrap(),
            RaceCategory::Black,
            false,
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_cache_set_get() {
        let cache = ScoreCache::new(100, None);
        let input = create_test_input(40_000.0);
        let calls = Cell::new(0);

        let first = cache.get_or_insert_with(&input, || {
            calls.set(calls.get() + 1);
            0.42
        });
        let second = cache.get_or_insert_with(&input, || {
            calls.set(calls.get() + 1);
            0.99
        });

        assert_eq!(first, 0.42);
        assert_eq!(second, 0.42);
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.get(&input), Some(0.42));
    }

    #[test]
    fn test_distinct_inputs_get_distinct_entries() {
        let cache = ScoreCache::new(100, None);
        cache.get_or_insert_with(&create_test_input(40_000.0), || 0.5);
        cache.get_or_insert_with(&create_test_input(45_000.0), || 0.6);

        assert_eq!(cache.stats().entries, 2);
        assert_eq!(cache.get(&create_test_input(45_000.0)), Some(0.6));
    }

    #[test]
    fn test_invalidate_all() {
        let cache = ScoreCache::new(10, Some(60));
        let input = create_test_input(0.0);
        cache.get_or_insert_with(&input, || 1.0);

        cache.invalidate_all();

        assert_eq!(cache.get(&input), None);
    }

    #[test]
    fn test_key_uses_bit_pattern() {
        let a = ScoreKey::from(&create_test_input(0.0));
        let b = ScoreKey::from(&create_test_input(-0.0));
        assert_ne!(a, b);
    }
}
