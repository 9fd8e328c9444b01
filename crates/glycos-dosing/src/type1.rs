//! Type 1 diabetes dosing pathways.
//!
//! Weight-based total daily dose estimation, the fixed basal/bolus split,
//! and the two derived ratios (insulin-to-carbohydrate ratio and
//! correction factor). All formulas divide by or scale the total daily
//! dose, so every function guards against a non-positive TDD rather than
//! letting a division artifact reach the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use glycos_contracts::{ensure_positive, GlycosError, GlycosResult};

use crate::tables::{
    tdd_factors, BASAL_SPLIT_FRACTION, BOLUS_SPLIT_FRACTION, CF_CONSTANT_RAPID,
    CF_CONSTANT_REGULAR, ICR_CONSTANT_RAPID, ICR_CONSTANT_REGULAR,
};
use crate::DoseRange;

// ── Clinical status ───────────────────────────────────────────────────────────

/// Clinical status of a Type 1 patient, selecting the weight multiplier
/// pair for total daily dose estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalStatus {
    /// Newly diagnosed, starting insulin.
    Initial,
    /// Partial remission phase with residual endogenous insulin.
    Honeymoon,
    /// Established disease, no residual secretion.
    Established,
    /// Marked insulin resistance (e.g. obesity, steroids).
    InsulinResistant,
}

impl ClinicalStatus {
    /// All statuses, in documentation order.
    pub const ALL: [ClinicalStatus; 4] = [
        ClinicalStatus::Initial,
        ClinicalStatus::Honeymoon,
        ClinicalStatus::Established,
        ClinicalStatus::InsulinResistant,
    ];
}

impl fmt::Display for ClinicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Initial => "initial",
            Self::Honeymoon => "honeymoon",
            Self::Established => "established",
            Self::InsulinResistant => "insulin_resistant",
        };
        f.write_str(s)
    }
}

impl FromStr for ClinicalStatus {
    type Err = GlycosError;

    /// Case-insensitive parse. Accepts `insulin_resistant` and
    /// `insulin-resistant`. An unknown value fails with an error whose
    /// message enumerates the accepted set — never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "initial" => Ok(Self::Initial),
            "honeymoon" => Ok(Self::Honeymoon),
            "established" => Ok(Self::Established),
            "insulin_resistant" | "insulin-resistant" => Ok(Self::InsulinResistant),
            _ => Err(GlycosError::UnknownClinicalStatus {
                value: s.to_string(),
            }),
        }
    }
}

// ── Total daily dose ──────────────────────────────────────────────────────────

/// Estimate the total daily insulin dose range for a patient.
///
/// Multiplies body weight by the status-specific factor pair from the
/// guideline table: e.g. 70 kg at `Initial` (0.4–0.5 units/kg) gives
/// 28.0–35.0 units/day. Weight must be finite and strictly positive.
pub fn total_daily_dose(weight_kg: f64, status: ClinicalStatus) -> GlycosResult<DoseRange> {
    let weight_kg = ensure_positive("weight_kg", weight_kg)?;
    let (lo, hi) = tdd_factors(status);

    debug!(weight_kg, %status, factor_low = lo, factor_high = hi, "estimating TDD");

    Ok(DoseRange::new(lo * weight_kg, hi * weight_kg))
}

// ── Basal/bolus split ─────────────────────────────────────────────────────────

/// A total daily dose divided into its basal and bolus components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasalBolusSplit {
    /// Long-acting portion, units/day.
    pub basal_units: f64,
    /// Mealtime portion, units/day.
    pub bolus_units: f64,
}

impl fmt::Display for BasalBolusSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Basal: {:.1} units/day, bolus: {:.1} units/day.",
            self.basal_units, self.bolus_units
        )
    }
}

/// Split a total daily dose 40% basal / 60% bolus.
///
/// The guideline allows 40–50% basal; the toolbox pins the conservative
/// end as a fixed choice. Fails with `NonPositiveDose` when `tdd <= 0`.
pub fn basal_bolus_split(tdd: f64) -> GlycosResult<BasalBolusSplit> {
    let tdd = ensure_positive_dose(tdd)?;

    Ok(BasalBolusSplit {
        basal_units: BASAL_SPLIT_FRACTION * tdd,
        bolus_units: BOLUS_SPLIT_FRACTION * tdd,
    })
}

// ── Derived ratios ────────────────────────────────────────────────────────────

/// The kind of mealtime insulin, selecting the ratio constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsulinKind {
    RapidActing,
    Regular,
}

/// Insulin-to-carbohydrate ratio: grams of carbohydrate covered by one
/// unit of insulin.
///
/// `ceil(500 / tdd)` for rapid-acting insulin, `ceil(450 / tdd)` for
/// regular. Rounding up keeps the ratio conservative (more grams per
/// unit means less insulin per meal). Fails with `NonPositiveDose` when
/// `tdd <= 0`.
pub fn insulin_to_carb_ratio(tdd: f64, kind: InsulinKind) -> GlycosResult<u32> {
    let tdd = ensure_positive_dose(tdd)?;
    let constant = match kind {
        InsulinKind::RapidActing => ICR_CONSTANT_RAPID,
        InsulinKind::Regular => ICR_CONSTANT_REGULAR,
    };
    Ok((constant / tdd).ceil() as u32)
}

/// Correction factor (insulin sensitivity factor): mg/dL of glucose
/// dropped by one unit of insulin.
///
/// `ceil(1800 / tdd)` for rapid-acting insulin, `ceil(1700 / tdd)` for
/// regular. Fails with `NonPositiveDose` when `tdd <= 0`.
pub fn correction_factor(tdd: f64, kind: InsulinKind) -> GlycosResult<u32> {
    let tdd = ensure_positive_dose(tdd)?;
    let constant = match kind {
        InsulinKind::RapidActing => CF_CONSTANT_RAPID,
        InsulinKind::Regular => CF_CONSTANT_REGULAR,
    };
    Ok((constant / tdd).ceil() as u32)
}

/// Reject a zero, negative, or NaN total daily dose before it reaches a
/// formula.
fn ensure_positive_dose(tdd: f64) -> GlycosResult<f64> {
    if tdd.is_finite() && tdd > 0.0 {
        Ok(tdd)
    } else {
        Err(GlycosError::NonPositiveDose { value: tdd })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
