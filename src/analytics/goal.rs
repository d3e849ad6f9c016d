//! Savings goal progress

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Money, SavingsGoal};

/// What the user needs to do to reach the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "amount", rename_all = "snake_case")]
pub enum GoalStatus {
    /// No positive target amount is set
    NoTarget,
    /// The target date is today or already past
    DateNotInFuture,
    /// The balance already covers the target
    Reached,
    /// Amount to put aside every remaining day
    SaveDaily(Money),
}

/// Progress of a balance toward a savings goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    /// Percentage of the target covered, clamped to 0..=100
    pub progress_percent: f64,
    pub days_remaining: i64,
    pub remaining: Money,
    pub status: GoalStatus,
}

/// Evaluate `balance` against `goal` as of `today`
pub fn goal_progress(goal: &SavingsGoal, balance: Money, today: NaiveDate) -> GoalProgress {
    let days_remaining = (goal.target_date - today).num_days();
    let remaining = goal.target - balance;

    let progress_percent = if goal.has_target() {
        (balance.as_f64() / goal.target.as_f64() * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    let status = if !goal.has_target() {
        GoalStatus::NoTarget
    } else if days_remaining <= 0 {
        GoalStatus::DateNotInFuture
    } else if !remaining.is_positive() {
        GoalStatus::Reached
    } else {
        GoalStatus::SaveDaily(Money::from_f64(remaining.as_f64() / days_remaining as f64))
    };

    GoalProgress {
        progress_percent,
        days_remaining,
        remaining,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_save_daily() {
        let goal = SavingsGoal::new(Money::from_cents(100000), date(2024, 1, 11));
        let progress = goal_progress(&goal, Money::from_cents(40000), date(2024, 1, 1));

        assert_eq!(progress.progress_percent, 40.0);
        assert_eq!(progress.days_remaining, 10);
        assert_eq!(progress.status, GoalStatus::SaveDaily(Money::from_cents(6000)));
    }

    #[test]
    fn test_reached_is_clamped() {
        let goal = SavingsGoal::new(Money::from_cents(1000), date(2024, 12, 31));
        let progress = goal_progress(&goal, Money::from_cents(5000), date(2024, 1, 1));

        assert_eq!(progress.progress_percent, 100.0);
        assert_eq!(progress.status, GoalStatus::Reached);
    }

    #[test]
    fn test_negative_balance_is_zero_percent() {
        let goal = SavingsGoal::new(Money::from_cents(1000), date(2024, 12, 31));
        let progress = goal_progress(&goal, Money::from_cents(-500), date(2024, 1, 1));
        assert_eq!(progress.progress_percent, 0.0);
    }

    #[test]
    fn test_past_date() {
        let goal = SavingsGoal::new(Money::from_cents(1000), date(2024, 1, 1));
        let progress = goal_progress(&goal, Money::zero(), date(2024, 1, 1));
        assert_eq!(progress.status, GoalStatus::DateNotInFuture);
    }

    #[test]
    fn test_no_target() {
        let goal = SavingsGoal::new(Money::zero(), date(2025, 1, 1));
        let progress = goal_progress(&goal, Money::from_cents(100), date(2024, 1, 1));
        assert_eq!(progress.status, GoalStatus::NoTarget);
        assert_eq!(progress.progress_percent, 0.0);
    }
}
