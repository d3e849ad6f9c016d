//! Rounding helpers

/// Round half up to two decimal places
///
/// Ties round toward positive infinity, so `2.345` becomes `2.35` and
/// `-2.345` becomes `-2.34`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
