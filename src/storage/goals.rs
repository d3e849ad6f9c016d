//! Savings goal repository
//!
//! Each user keeps at most one goal in `goal.json`.

use crate::config::paths::FintrackPaths;
use crate::error::FinanceResult;
use crate::models::SavingsGoal;

use super::file_io::{read_json_optional, remove_if_exists, write_json_atomic};

/// Repository for per-user savings goals
pub struct GoalRepository {
    paths: FintrackPaths,
}

impl GoalRepository {
    pub fn new(paths: FintrackPaths) -> Self {
        Self { paths }
    }

    /// Get the goal of a user, if one is set
    pub fn get(&self, user_id: &str) -> FinanceResult<Option<SavingsGoal>> {
        read_json_optional(self.paths.goal_file(user_id))
    }

    /// Set (or replace) the goal of a user
    pub fn set(&self, user_id: &str, goal: &SavingsGoal) -> FinanceResult<()> {
        write_json_atomic(self.paths.goal_file(user_id), goal)?;
        tracing::debug!(user = user_id, "saved savings goal");
        Ok(())
    }

    /// Remove the goal of a user, returning whether one existed
    pub fn clear(&self, user_id: &str) -> FinanceResult<bool> {
        remove_if_exists(self.paths.goal_file(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_goal_lifecycle() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GoalRepository::new(FintrackPaths::with_base_dir(temp_dir.path().to_path_buf()));

        assert!(repo.get("alice").unwrap().is_none());

        let goal = SavingsGoal::new(
            Money::from_cents(100000),
            NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
        );
        repo.set("alice", &goal).unwrap();
        assert_eq!(repo.get("alice").unwrap(), Some(goal));
        assert!(repo.get("bob").unwrap().is_none());

        assert!(repo.clear("alice").unwrap());
        assert!(!repo.clear("alice").unwrap());
        assert!(repo.get("alice").unwrap().is_none());
    }
}
