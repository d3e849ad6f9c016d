//! Savings goal service
//!
//! Stores a user's goal and evaluates it against the all-time balance.

use chrono::NaiveDate;

use crate::analytics::{goal_progress, GoalProgress};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, SavingsGoal};
use crate::storage::{Storage, TransactionStore};

/// Service for savings goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
    user_id: &'a str,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage, user_id: &'a str) -> Self {
        Self { storage, user_id }
    }

    /// Set or replace the goal
    pub fn set(&self, target: Money, target_date: NaiveDate) -> FinanceResult<SavingsGoal> {
        if !target.is_positive() {
            return Err(FinanceError::Validation(
                "Goal target must be greater than zero".into(),
            ));
        }

        let goal = SavingsGoal::new(target, target_date);
        self.storage.goals.set(self.user_id, &goal)?;
        tracing::info!(user = self.user_id, target = %target, "set savings goal");
        Ok(goal)
    }

    /// Current goal, if any
    pub fn get(&self) -> FinanceResult<Option<SavingsGoal>> {
        self.storage.goals.get(self.user_id)
    }

    /// Remove the goal
    pub fn clear(&self) -> FinanceResult<()> {
        if !self.storage.goals.clear(self.user_id)? {
            return Err(FinanceError::goal_not_found(self.user_id));
        }
        tracing::info!(user = self.user_id, "cleared savings goal");
        Ok(())
    }

    /// Evaluate the goal against the user's all-time balance
    pub fn progress(&self, today: NaiveDate) -> FinanceResult<(SavingsGoal, GoalProgress)> {
        let goal = self
            .get()?
            .ok_or_else(|| FinanceError::goal_not_found(self.user_id))?;

        let balance: Money = self
            .storage
            .transactions
            .list_transactions(self.user_id)?
            .iter()
            .map(|t| t.signed_amount())
            .sum();

        let progress = goal_progress(&goal, balance, today);
        Ok((goal, progress))
    }
}
