//! Fixed-payment loan amortization
//!
//! Builds the month-by-month schedule of an annuity loan. The running
//! balance is carried unrounded; only the reported fields are rounded, so
//! the last row may be a few cents off zero.

use serde::Serialize;

use super::{ensure_finite, round2};
use crate::error::{FinanceError, FinanceResult};

/// One month of a loan schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmortizationRow {
    /// 1-based month number
    pub month: u32,
    pub payment: f64,
    pub principal_portion: f64,
    pub interest_portion: f64,
    pub remaining_balance: f64,
}

/// Complete amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanSchedule {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub rows: Vec<AmortizationRow>,
}

impl LoanSchedule {
    /// Total amount paid over the life of the loan
    pub fn total_paid(&self) -> f64 {
        round2(self.monthly_payment * self.rows.len() as f64)
    }
}

/// Compute the amortization schedule of a fixed-payment loan
///
/// A zero interest rate repays the principal in equal parts.
///
/// # Errors
///
/// Returns [`FinanceError::InvalidInput`] when `principal <= 0`,
/// `annual_rate_percent < 0` or `term_months <= 0`.
pub fn compute_amortization(
    principal: f64,
    annual_rate_percent: f64,
    term_months: i64,
) -> FinanceResult<LoanSchedule> {
    ensure_finite("Principal", principal)?;
    ensure_finite("Interest rate", annual_rate_percent)?;

    if principal <= 0.0 {
        return Err(FinanceError::invalid_input(
            "Principal must be greater than zero",
        ));
    }
    if annual_rate_percent < 0.0 {
        return Err(FinanceError::invalid_input(
            "Interest rate cannot be negative",
        ));
    }
    if term_months <= 0 {
        return Err(FinanceError::invalid_input(
            "Term must be at least one month",
        ));
    }
    let months = u32::try_from(term_months)
        .map_err(|_| FinanceError::invalid_input("Term is too long"))?;

    let monthly_rate = annual_rate_percent / 12.0 / 100.0;
    let payment = monthly_payment(principal, monthly_rate, months);

    let mut remaining = principal;
    let rows = (1..=months)
        .map(|month| {
            let interest = remaining * monthly_rate;
            let principal_portion = payment - interest;
            remaining -= principal_portion;

            AmortizationRow {
                month,
                payment: round2(payment),
                principal_portion: round2(principal_portion),
                interest_portion: round2(interest),
                remaining_balance: round2(remaining),
            }
        })
        .collect();

    Ok(LoanSchedule {
        monthly_payment: round2(payment),
        total_interest: round2(payment * f64::from(months) - principal),
        rows,
    })
}

fn monthly_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate == 0.0 {
        return principal / f64::from(months);
    }
    let growth = (1.0 + monthly_rate).powf(f64::from(months));
    principal * monthly_rate * growth / (growth - 1.0)
}
