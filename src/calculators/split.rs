//! Expense splitting

use serde::Serialize;

use super::{ensure_finite, round2};
use crate::error::{FinanceError, FinanceResult};

/// An expense divided evenly between people
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitResult {
    pub per_person_amount: f64,
}

/// Split `total_amount` evenly across `person_count` people
pub fn split_expense(total_amount: f64, person_count: i64) -> FinanceResult<SplitResult> {
    ensure_finite("Total amount", total_amount)?;

    if total_amount < 0.0 {
        return Err(FinanceError::invalid_input(
            "Total amount cannot be negative",
        ));
    }
    if person_count <= 0 {
        return Err(FinanceError::invalid_input(
            "Number of people must be greater than zero",
        ));
    }

    Ok(SplitResult {
        per_person_amount: round2(total_amount / person_count as f64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        assert_eq!(split_expense(100.0, 4).unwrap().per_person_amount, 25.0);
    }

    #[test]
    fn test_uneven_split_rounds() {
        assert_eq!(split_expense(100.0, 3).unwrap().per_person_amount, 33.33);
        assert_eq!(split_expense(0.05, 2).unwrap().per_person_amount, 0.03);
    }

    #[test]
    fn test_zero_total_is_allowed() {
        assert_eq!(split_expense(0.0, 5).unwrap().per_person_amount, 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(split_expense(-1.0, 2).unwrap_err().is_invalid_input());
        assert!(split_expense(10.0, 0).unwrap_err().is_invalid_input());
        assert!(split_expense(10.0, -3).unwrap_err().is_invalid_input());
        assert!(split_expense(f64::NAN, 2).unwrap_err().is_invalid_input());
    }
}
