//! Standalone financial calculators
//!
//! Each calculator validates its inputs, refusing to compute with
//! [`FinanceError::InvalidInput`](crate::error::FinanceError::InvalidInput),
//! and rounds every reported figure half-up to cents.

pub mod amortization;
pub mod inflation;
pub mod roi;
pub mod rounding;
pub mod split;

pub use amortization::{compute_amortization, AmortizationRow, LoanSchedule};
pub use inflation::{adjust_for_inflation, InflationResult};
pub use roi::{compute_roi, RoiResult};
pub use rounding::round2;
pub use split::{split_expense, SplitResult};

use crate::error::{FinanceError, FinanceResult};

/// Reject NaN and infinite inputs before any range checks
pub(crate) fn ensure_finite(name: &str, value: f64) -> FinanceResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FinanceError::invalid_input(format!(
            "{} must be a finite number",
            name
        )))
    }
}
