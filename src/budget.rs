//! The maximum number of iterations a sampler attempts per point.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FractalError;

/// Iteration budget of a sampler. Fixed at construction, never mutated.
///
/// Signed input goes through [`TryFrom<i64>`], which is also the path serde
/// takes, so a negative budget in a config document is rejected on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct IterationBudget(u32);

impl IterationBudget {
    pub const fn new(max_iterations: u32) -> Self {
        Self(max_iterations)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

}

impl From<u32> for IterationBudget {
    fn from(max_iterations: u32) -> Self {
        Self(max_iterations)
    }
}

impl From<IterationBudget> for u32 {
    fn from(budget: IterationBudget) -> Self {
        budget.0
    }
}

/// Signed budgets are checked. Integer literals need an explicit `i64` type,
/// since `From<u32>` also provides `TryFrom<u32>`.
///
/// ```
/// use escape_time::{FractalError, IterationBudget};
///
/// assert_eq!(IterationBudget::try_from(300_i64).unwrap().get(), 300);
/// assert_eq!(
///     IterationBudget::try_from(-1_i64),
///     Err(FractalError::NegativeIterations { requested: -1 })
/// );
/// ```
impl TryFrom<i64> for IterationBudget {
    type Error = FractalError;

    fn try_from(requested: i64) -> Result<Self, Self::Error> {
        if requested < 0 {
            return Err(FractalError::NegativeIterations { requested });
        }
        u32::try_from(requested)
            .map(Self)
            .map_err(|_| FractalError::BudgetTooLarge { requested })
    }
}

impl fmt::Display for IterationBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_from_signed() {
        let max = i64::from(u32::MAX);
        assert_eq!(IterationBudget::try_from(0_i64).unwrap().get(), 0);
        assert_eq!(IterationBudget::try_from(256_i64).unwrap().get(), 256);
        assert_eq!(IterationBudget::try_from(max).unwrap().get(), u32::MAX);
    }

    #[test]
    fn test_negative_budget_rejected() {
        assert_eq!(
            IterationBudget::try_from(-1_i64),
            Err(FractalError::NegativeIterations { requested: -1 })
        );
    }

    #[test]
    fn test_oversized_budget_rejected() {
        let requested = i64::from(u32::MAX) + 1;
        assert_eq!(
            IterationBudget::try_from(requested),
            Err(FractalError::BudgetTooLarge { requested })
        );
    }

    #[test]
    fn test_budget_serde() {
        let budget: IterationBudget = serde_json::from_str("500").unwrap();
        assert_eq!(budget, IterationBudget::new(500));
        assert_eq!(serde_json::to_string(&budget).unwrap(), "500");

        let err = serde_json::from_str::<IterationBudget>("-3").unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_display() {
        assert_eq!(IterationBudget::new(42).to_string(), "42");
    }
}
