//! Inflation adjustment

use serde::Serialize;

use super::{ensure_finite, round2};
use crate::error::{FinanceError, FinanceResult};

/// A nominal amount grown by compound inflation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InflationResult {
    pub adjusted_amount: f64,
    /// `original - adjusted`; negative when inflation raises the nominal amount
    pub purchasing_power_loss: f64,
}

/// Compound `original_amount` at `annual_rate_percent` for `years` years
pub fn adjust_for_inflation(
    original_amount: f64,
    annual_rate_percent: f64,
    years: i32,
) -> FinanceResult<InflationResult> {
    ensure_finite("Amount", original_amount)?;
    ensure_finite("Inflation rate", annual_rate_percent)?;

    if original_amount <= 0.0 {
        return Err(FinanceError::invalid_input(
            "Amount must be greater than zero",
        ));
    }
    if annual_rate_percent < 0.0 {
        return Err(FinanceError::invalid_input(
            "Inflation rate cannot be negative",
        ));
    }
    if years < 0 {
        return Err(FinanceError::invalid_input("Years cannot be negative"));
    }

    let adjusted = round2(original_amount * (1.0 + annual_rate_percent / 100.0).powi(years));
    Ok(InflationResult {
        adjusted_amount: adjusted,
        purchasing_power_loss: round2(original_amount - adjusted),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_years_at_three_percent() {
        let result = adjust_for_inflation(1000.0, 3.0, 2).unwrap();
        assert_eq!(result.adjusted_amount, 1060.9);
        assert_eq!(result.purchasing_power_loss, -60.9);
    }

    #[test]
    fn test_zero_years_is_identity() {
        let result = adjust_for_inflation(250.0, 7.5, 0).unwrap();
        assert_eq!(result.adjusted_amount, 250.0);
        assert_eq!(result.purchasing_power_loss, 0.0);
    }

    #[test]
    fn test_zero_rate_is_identity() {
        let result = adjust_for_inflation(99.99, 0.0, 10).unwrap();
        assert_eq!(result.adjusted_amount, 99.99);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(adjust_for_inflation(0.0, 3.0, 2).unwrap_err().is_invalid_input());
        assert!(adjust_for_inflation(100.0, -1.0, 2).unwrap_err().is_invalid_input());
        assert!(adjust_for_inflation(100.0, 3.0, -1).unwrap_err().is_invalid_input());
    }
}
