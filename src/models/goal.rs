//! Savings goal model
//!
//! A user may keep one savings target with a deadline. Progress is derived
//! from the current balance in `analytics::goal`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A savings target to reach by a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Balance the user wants to reach
    pub target: Money,

    /// Date the target should be reached by
    pub target_date: NaiveDate,
}

impl SavingsGoal {
    pub fn new(target: Money, target_date: NaiveDate) -> Self {
        Self {
            target,
            target_date,
        }
    }

    /// Whether a usable target amount has been set
    pub fn has_target(&self) -> bool {
        self.target.is_positive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_target() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert!(SavingsGoal::new(Money::from_cents(100), date).has_target());
        assert!(!SavingsGoal::new(Money::zero(), date).has_target());
    }

    #[test]
    fn test_serialization() {
        let goal = SavingsGoal::new(
            Money::from_cents(500000),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        );
        let json = serde_json::to_string(&goal).unwrap();
        assert_eq!(json, r#"{"target":500000,"target_date":"2025-12-31"}"#);
        let back: SavingsGoal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, goal);
    }
}
