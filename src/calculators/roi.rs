//! Return on investment

use serde::Serialize;

use super::{ensure_finite, round2};
use crate::error::{FinanceError, FinanceResult};

/// Gain of an investment, absolute and relative to the amount put in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiResult {
    pub roi_percent: f64,
    pub total_gain: f64,
}

/// Compute the return of `final_return` over `initial_investment`
///
/// A loss yields negative figures.
pub fn compute_roi(initial_investment: f64, final_return: f64) -> FinanceResult<RoiResult> {
    ensure_finite("Initial investment", initial_investment)?;
    ensure_finite("Final return", final_return)?;

    if initial_investment <= 0.0 {
        return Err(FinanceError::invalid_input(
            "Initial investment must be greater than zero",
        ));
    }

    let gain = final_return - initial_investment;
    Ok(RoiResult {
        roi_percent: round2(gain / initial_investment * 100.0),
        total_gain: round2(gain),
    })
}
