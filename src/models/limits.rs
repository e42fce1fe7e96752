use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Budget applied to a category that has no configured limit.
pub const DEFAULT_LIMIT: f64 = 10_000.0;

/// Per-category monthly budget limits. Read-only input for the aggregator
/// and alert engine; missing or non-positive entries fall back to
/// [`DEFAULT_LIMIT`] so percent-of-limit math never divides by zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryLimits(HashMap<Category, f64>);

impl CategoryLimits {
    pub fn new(limits: HashMap<Category, f64>) -> Self {
        Self(limits)
    }

    pub fn get(&self, category: Category) -> f64 {
        match self.0.get(&category) {
            Some(&amount) if amount > 0.0 => amount,
            _ => DEFAULT_LIMIT,
        }
    }

    pub fn set(&mut self, category: Category, amount: f64) {
        self.0.insert(category, amount);
    }

    /// All nine categories with defaults applied, for display.
    pub fn resolved(&self) -> HashMap<Category, f64> {
        Category::ALL
            .iter()
            .map(|&cat| (cat, self.get(cat)))
            .collect()
    }
}

impl From<HashMap<Category, f64>> for CategoryLimits {
    fn from(limits: HashMap<Category, f64>) -> Self {
        Self::new(limits)
    }
}
