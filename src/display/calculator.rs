//! Calculator result formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::calculators::{AmortizationRow, InflationResult, LoanSchedule, RoiResult, SplitResult};

#[derive(Tabled)]
struct ScheduleLine {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

impl From<&AmortizationRow> for ScheduleLine {
    fn from(row: &AmortizationRow) -> Self {
        Self {
            month: row.month,
            payment: format!("{:.2}", row.payment),
            principal: format!("{:.2}", row.principal_portion),
            interest: format!("{:.2}", row.interest_portion),
            balance: format!("{:.2}", row.remaining_balance),
        }
    }
}

/// Format a loan schedule as a summary followed by a month-by-month table
pub fn format_loan_schedule(schedule: &LoanSchedule) -> String {
    let mut table = Table::new(schedule.rows.iter().map(ScheduleLine::from));
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    format!(
        "Monthly payment: {:.2}\nTotal interest:  {:.2}\nTotal paid:      {:.2}\n\n{}\n",
        schedule.monthly_payment,
        schedule.total_interest,
        schedule.total_paid(),
        table
    )
}

/// Format an expense split
pub fn format_split(result: &SplitResult, person_count: i64) -> String {
    format!(
        "Each of {} people pays {:.2}\n",
        person_count, result.per_person_amount
    )
}

/// Format a return on investment
pub fn format_roi(result: &RoiResult) -> String {
    format!(
        "ROI:        {:.2}%\nTotal gain: {:.2}\n",
        result.roi_percent, result.total_gain
    )
}

/// Format an inflation adjustment
pub fn format_inflation(result: &InflationResult) -> String {
    format!(
        "Adjusted amount:        {:.2}\nPurchasing power loss:  {:.2}\n",
        result.adjusted_amount, result.purchasing_power_loss
    )
}
