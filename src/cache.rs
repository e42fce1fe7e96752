//! Generation-stamped cache for the latest analysis outcome.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::services::analysis::AnalysisOutcome;

/// Holds the most recent analysis. Writes stamp the current generation;
/// any data change bumps the generation, which lazily invalidates the
/// stored outcome without touching the slot.
pub struct AnalysisCache {
    generation: AtomicU64,
    slot: RwLock<Option<(u64, AnalysisOutcome)>>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            slot: RwLock::new(None),
        }
    }

    /// The cached outcome, if it is from the current generation.
    pub fn get_latest(&self) -> Option<AnalysisOutcome> {
        let current = self.generation.load(Ordering::Acquire);
        match self.slot.read() {
            Ok(slot) => slot
                .as_ref()
                .filter(|(gen, _)| *gen == current)
                .map(|(_, outcome)| outcome.clone()),
            Err(_) => None,
        }
    }

    pub fn set(&self, outcome: AnalysisOutcome) {
        let current = self.generation.load(Ordering::Acquire);
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some((current, outcome));
        }
    }

    /// Mark every cached outcome stale.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_utils::Period;
    use crate::models::CategoryLimits;
    use crate::services::{advice, aggregator};

    fn outcome() -> AnalysisOutcome {
        let period: Period = "2025-10".parse().unwrap();
        let aggregation = aggregator::aggregate(&[], period, &CategoryLimits::default());
        let advice = advice::advise(&aggregation);
        AnalysisOutcome {
            aggregation,
            advice,
            alert: None,
        }
    }

    #[test]
    fn test_empty_cache_returns_none() {
        assert!(AnalysisCache::new().get_latest().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let cache = AnalysisCache::new();
        cache.set(outcome());
        assert!(cache.get_latest().is_some());
    }

    #[test]
    fn test_invalidate_hides_stale_outcome() {
        let cache = AnalysisCache::new();
        cache.set(outcome());
        cache.invalidate();
        assert!(cache.get_latest().is_none());
    }

    #[test]
    fn test_set_after_invalidate_is_fresh() {
        let cache = AnalysisCache::new();
        cache.set(outcome());
        cache.invalidate();
        cache.set(outcome());
        assert!(cache.get_latest().is_some());
    }
}
