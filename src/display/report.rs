//! Report formatting for terminal output
//!
//! Renders analytics views, the dashboard and goal progress as plain text.

use chrono::NaiveDate;

use super::format::{format_bar, format_percentage, separator, truncate};
use super::transaction::format_transaction_row;
use crate::analytics::{AggregatedView, CategoryTotal, DashboardSummary, GoalProgress, GoalStatus};
use crate::models::{Money, SavingsGoal, ISO_DATE_FORMAT};

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

fn money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

fn push_categories(output: &mut String, title: &str, totals: &[CategoryTotal], symbol: &str) {
    if totals.is_empty() {
        return;
    }

    output.push_str(&format!("\n{}\n", title));
    let max = totals
        .iter()
        .map(|c| c.total.as_f64())
        .fold(0.0_f64, f64::max);

    for entry in totals {
        output.push_str(&format!(
            "  {:<18} {:>12} {:>4} {}\n",
            truncate(&entry.category, 18),
            money(entry.total, symbol),
            entry.count,
            format_bar(entry.total.as_f64(), max, BAR_WIDTH)
        ));
    }
}

/// Format an analytics view
pub fn format_analytics(view: &AggregatedView, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Analytics: {} (as of {})\n",
        view.range.label(),
        view.today.format(ISO_DATE_FORMAT)
    ));
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');

    if view.is_empty() {
        output.push_str("No transactions in this period.\n");
        return output;
    }

    output.push_str(&format!("Income:        {:>14}\n", money(view.total_income, symbol)));
    output.push_str(&format!("Expenses:      {:>14}\n", money(view.total_expense, symbol)));
    output.push_str(&format!("Balance:       {:>14}\n", money(view.balance, symbol)));
    output.push_str(&format!(
        "Savings ratio: {:>14}\n",
        format_percentage(view.savings_ratio)
    ));
    output.push_str(&format!("Transactions:  {:>14}\n", view.transaction_count));

    if !view.top_expense_categories.is_empty() {
        output.push_str("\nTop expenses\n");
        for (rank, entry) in view.top_expense_categories.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {:<18} {:>12}\n",
                rank + 1,
                truncate(&entry.category, 18),
                money(entry.total, symbol)
            ));
        }
    }

    push_categories(&mut output, "Income by category", &view.income_by_category, symbol);
    push_categories(&mut output, "Expenses by category", &view.expense_by_category, symbol);

    if !view.daily_series.is_empty() {
        output.push_str(&format!(
            "\n{:<10} {:>12} {:>12} {:>12}\n",
            "Date", "Income", "Expense", "Balance"
        ));
        output.push_str(&separator(49));
        output.push('\n');

        let mut running = Money::zero();
        for day in &view.daily_series {
            running += day.net();
            output.push_str(&format!(
                "{:<10} {:>12} {:>12} {:>12}\n",
                day.date.format(ISO_DATE_FORMAT),
                money(day.income, symbol),
                money(day.expense, symbol),
                money(running, symbol)
            ));
        }
    }

    output
}

/// Format the home dashboard
pub fn format_dashboard(summary: &DashboardSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Dashboard ({})\n",
        summary.today.format(ISO_DATE_FORMAT)
    ));
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');
    output.push_str(&format!("Balance: {}\n\n", money(summary.balance(), symbol)));

    output.push_str(&format!("{:<12} {:>14} {:>14}\n", "", "Income", "Expenses"));
    for (label, totals) in [
        ("Today", &summary.day),
        ("This month", &summary.month),
        ("This year", &summary.year),
        ("All time", &summary.all_time),
    ] {
        output.push_str(&format!(
            "{:<12} {:>14} {:>14}\n",
            label,
            money(totals.income, symbol),
            money(totals.expense, symbol)
        ));
    }

    output.push_str("\nRecent transactions\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    if summary.recent.is_empty() {
        output.push_str("No transactions yet.\n");
    }
    for txn in &summary.recent {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Format savings goal progress
pub fn format_goal(goal: &SavingsGoal, progress: &GoalProgress, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Savings goal: {} by {}\n",
        money(goal.target, symbol),
        goal.target_date.format(ISO_DATE_FORMAT)
    ));
    output.push_str(&format!(
        "Progress:     {} {}\n",
        format_bar(progress.progress_percent, 100.0, BAR_WIDTH),
        format_percentage(progress.progress_percent)
    ));

    let status = match progress.status {
        GoalStatus::NoTarget => "No target amount set".to_string(),
        GoalStatus::DateNotInFuture => "Target date is not in the future".to_string(),
        GoalStatus::Reached => "Goal reached".to_string(),
        GoalStatus::SaveDaily(amount) => format!(
            "Save {} per day for {} days ({} to go)",
            money(amount, symbol),
            progress.days_remaining,
            money(progress.remaining, symbol)
        ),
    };
    output.push_str(&format!("Status:       {}\n", status));

    output
}

/// Format the net balance of a single day
pub fn format_daily_balance(date: NaiveDate, balance: Money, symbol: &str) -> String {
    format!(
        "Balance on {}: {}\n",
        date.format(ISO_DATE_FORMAT),
        money(balance, symbol)
    )
}
