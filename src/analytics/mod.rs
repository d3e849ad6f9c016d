//! Analytics over transaction snapshots
//!
//! Every function here is pure: it takes a slice of transactions and an
//! explicit `today` and returns a fresh view.

pub mod aggregate;
pub mod dashboard;
pub mod goal;
pub mod search;

pub use aggregate::{
    aggregate, aggregate_records, savings_ratio, top_categories, AggregatedView, BalancePoint,
    CategoryTotal, DailyTotals,
};
pub use dashboard::{dashboard, DashboardSummary, PeriodTotals};
pub use goal::{goal_progress, GoalProgress, GoalStatus};
pub use search::{daily_balance, SearchCriterion, TransactionQuery};
