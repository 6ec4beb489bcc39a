use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::validation::{require_ordered, require_positive};

pub const DEFAULT_MIN_BUDGET: i64 = 200;
pub const DEFAULT_MAX_BUDGET: i64 = 10_000;
pub const DEFAULT_STEP: i64 = 100;
pub const DEFAULT_BUDGET: i64 = 1_000;
/// Shortcut amounts offered under the budget slider.
pub const DEFAULT_PRESETS: [i64; 4] = [500, 1_000, 2_000, 5_000];

/// Bounds and granularity of the trip budget selector.
///
/// Immutable once a store is built from it; to change bounds, build a new store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    pub min_budget: i64,
    pub max_budget: i64,
    pub step: i64,
    /// Starting value when the caller does not supply one. Clamped into range.
    pub default_value: i64,
    pub presets: Vec<i64>,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            min_budget: DEFAULT_MIN_BUDGET,
            max_budget: DEFAULT_MAX_BUDGET,
            step: DEFAULT_STEP,
            default_value: DEFAULT_BUDGET,
            presets: DEFAULT_PRESETS.to_vec(),
        }
    }
}

impl BudgetConfig {
    pub fn new(min_budget: i64, max_budget: i64, step: i64) -> Self {
        Self {
            min_budget,
            max_budget,
            step,
            default_value: min_budget,
            presets: Vec::new(),
        }
    }

    pub fn with_default_value(mut self, value: i64) -> Self {
        self.default_value = value;
        self
    }

    pub fn with_presets(mut self, presets: impl Into<Vec<i64>>) -> Self {
        self.presets = presets.into();
        self
    }

    /// Reject bounds that would make the percentage undefined or the step meaningless.
    pub fn validate(&self) -> Result<(), AppError> {
        require_ordered("min_budget", self.min_budget, "max_budget", self.max_budget)?;
        require_positive("step", self.step)?;
        Ok(())
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min_budget, self.max_budget)
    }
}
