//! Validation helpers for patient measurements.
//!
//! Every dosing formula assumes its measurements are physiologically
//! plausible. These helpers enforce that at the boundary, so a negative
//! weight or a NaN eGFR fails loudly instead of flowing into arithmetic.

use crate::error::{GlycosError, GlycosResult};

/// Require `value` to be a finite, non-negative measurement.
///
/// `name` identifies the measurement in the error (e.g. `"egfr"`).
pub fn ensure_non_negative(name: &'static str, value: f64) -> GlycosResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GlycosError::InvalidMeasurement { name, value })
    }
}

/// Require `value` to be a finite, strictly positive measurement.
///
/// Used for quantities where zero is as meaningless as a negative value,
/// such as body weight.
pub fn ensure_positive(name: &'static str, value: f64) -> GlycosResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GlycosError::InvalidMeasurement { name, value })
    }
}
