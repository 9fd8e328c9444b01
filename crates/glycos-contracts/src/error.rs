//! Error types for the GLYCOS clinical toolbox.
//!
//! All fallible operations in the toolbox return `GlycosResult<T>`.
//! Error variants carry enough context to show the caller exactly which
//! input was rejected and why.
//!
//! Note that an unknown medication is NOT an error anywhere in the toolbox:
//! the contraindication engine reports it as "no rule matched" and the
//! dosing engine returns a "not found" lookup result. Only genuinely
//! invalid inputs (impossible measurements, a non-positive total daily
//! dose, an unrecognized clinical status) produce an error.

use thiserror::Error;

/// The unified error type for the GLYCOS crates.
#[derive(Debug, Error)]
pub enum GlycosError {
    /// A rule file or rule document could not be loaded or parsed.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// A physiologically impossible measurement was supplied (negative
    /// eGFR, non-positive body weight, NaN, ...).
    ///
    /// Rejected before any formula runs: a negative weight must fail
    /// loudly, not produce a negative insulin dose.
    #[error("invalid measurement: {name} = {value} is not physiologically plausible")]
    InvalidMeasurement { name: &'static str, value: f64 },

    /// A ratio or split formula was called with a total daily dose that is
    /// zero, negative, or NaN.
    ///
    /// Guarding here prevents division artifacts (infinite or undefined
    /// ratios) from ever reaching a caller.
    #[error("total daily dose must be positive, got {value}")]
    NonPositiveDose { value: f64 },

    /// The Type 1 clinical status string did not match any known status.
    #[error(
        "unknown clinical status '{value}': expected one of \
         'initial', 'honeymoon', 'established', 'insulin_resistant'"
    )]
    UnknownClinicalStatus { value: String },
}

/// Convenience alias used throughout the GLYCOS crates.
pub type GlycosResult<T> = Result<T, GlycosError>;
