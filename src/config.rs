use std::time::Duration;

use crate::archetype::Archetype;
use crate::constants::passes::{DEFAULT_LONG_BUDGET_SECS, DEFAULT_SHORT_BUDGET_SECS};

/// Per-archetype time budgets for the three search passes.
///
/// Defaults reproduce the historical production budgets (60s for each
/// distinctness pass, 1s for the balance pass); callers tuning throughput
/// should override them rather than rely on the asymmetry.
#[derive(Clone, Copy, Debug)]
pub struct PassBudgets {
    /// Budget for the distinct-age-and-emotion pass (runs first).
    pub distinct_age_emotion: Duration,
    /// Budget for the diversity-balance pass (runs second).
    pub diversity_balance: Duration,
    /// Budget for the distinct-emotion pass (runs last).
    pub distinct_emotion: Duration,
}

impl Default for PassBudgets {
    fn default() -> Self {
        Self {
            distinct_age_emotion: Duration::from_secs(DEFAULT_LONG_BUDGET_SECS),
            diversity_balance: Duration::from_secs(DEFAULT_SHORT_BUDGET_SECS),
            distinct_emotion: Duration::from_secs(DEFAULT_LONG_BUDGET_SECS),
        }
    }
}

impl PassBudgets {
    /// Give every pass the same budget.
    pub fn uniform(budget: Duration) -> Self {
        Self {
            distinct_age_emotion: budget,
            diversity_balance: budget,
            distinct_emotion: budget,
        }
    }

    /// Budget for one archetype's pass.
    pub fn budget_for(&self, archetype: Archetype) -> Duration {
        match archetype {
            Archetype::DistinctAgeEmotion => self.distinct_age_emotion,
            Archetype::DiversityBalance => self.diversity_balance,
            Archetype::DistinctEmotion => self.distinct_emotion,
        }
    }
}

/// Top-level partition run configuration.
#[derive(Clone, Debug, Default)]
pub struct PartitionConfig {
    /// Time budgets applied per pass.
    pub budgets: PassBudgets,
}
