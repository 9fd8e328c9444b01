//! Type 2 diabetes dosing pathways.
//!
//! Four medication pathways from the guideline's Type 2 algorithm:
//!
//! - metformin start and weekly titration,
//! - starting doses for SGLT2 inhibitors and GLP-1 receptor agonists,
//! - basal insulin initiation and fasting-glucose-driven titration,
//! - prandial insulin addition.
//!
//! Every function is a pure computation over its arguments plus the
//! compiled-in tables in [`crate::tables`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use glycos_contracts::{ensure_positive, normalize_medication_name, GlycosResult};

use crate::tables::{
    AgentDose, AGENT_DOSES, BASAL_FIXED_START_UNITS, BASAL_WEIGHT_FACTOR_HIGH,
    BASAL_WEIGHT_FACTOR_LOW, METFORMIN_MAX_ER_MG, METFORMIN_MAX_IR_MG,
    METFORMIN_STARTING_DOSE_MG, METFORMIN_TITRATION_STEP_MG, PRANDIAL_BASAL_FRACTION,
    PRANDIAL_FIXED_START_UNITS,
};
use crate::DoseRange;

// ── Metformin ─────────────────────────────────────────────────────────────────

/// Outcome of a metformin dose calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetforminRecommendation {
    /// Patient is not yet on metformin: begin at the standard starting dose.
    Start { dose_mg: u32 },
    /// Increase to the next weekly titration step.
    Titrate { next_dose_mg: u32 },
    /// The formulation's maximum daily dose has been reached.
    MaxReached { max_mg: u32 },
}

impl fmt::Display for MetforminRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start { dose_mg } => {
                write!(f, "Starting dose: {dose_mg}mg daily or BID with meals.")
            }
            Self::Titrate { next_dose_mg } => {
                write!(
                    f,
                    "Recommended next titration: increase dose to {next_dose_mg}mg."
                )
            }
            Self::MaxReached { max_mg } => write!(f, "Max dose of {max_mg}mg reached."),
        }
    }
}

/// Compute the metformin starting dose or next titration step.
///
/// A current dose of 0 means the patient is metformin-naive and gets the
/// standard 500 mg start. Otherwise the dose is stepped up by 500 mg per
/// week, capped at the formulation maximum (2000 mg extended-release,
/// 2550 mg immediate-release); at or above the cap the recommendation is
/// `MaxReached`.
pub fn metformin_dose(current_dose_mg: u32, extended_release: bool) -> MetforminRecommendation {
    if current_dose_mg == 0 {
        return MetforminRecommendation::Start {
            dose_mg: METFORMIN_STARTING_DOSE_MG,
        };
    }

    let max_mg = if extended_release {
        METFORMIN_MAX_ER_MG
    } else {
        METFORMIN_MAX_IR_MG
    };

    if current_dose_mg >= max_mg {
        MetforminRecommendation::MaxReached { max_mg }
    } else {
        MetforminRecommendation::Titrate {
            next_dose_mg: (current_dose_mg + METFORMIN_TITRATION_STEP_MG).min(max_mg),
        }
    }
}

// ── SGLT2i / GLP-1 RA starting doses ──────────────────────────────────────────

/// Look up the starting dose for a non-insulin agent.
///
/// The name is matched case-insensitively against the combined SGLT2
/// inhibitor / GLP-1 receptor agonist table. `None` is the normal "dosing
/// information not found" outcome for an unknown medication — not an
/// error.
pub fn agent_starting_dose(name: &str) -> Option<&'static AgentDose> {
    let key = normalize_medication_name(name);
    let entry = AGENT_DOSES.iter().find(|d| d.name == key);
    debug!(medication = %key, found = entry.is_some(), "agent starting-dose lookup");
    entry
}

impl fmt::Display for AgentDose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Starting dose for {}: {} {}.",
            self.name, self.starting_dose, self.frequency
        )
    }
}

// ── Basal insulin initiation ──────────────────────────────────────────────────

/// Basal insulin starting options: a fixed dose or a weight-based range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasalInitiation {
    /// Fixed starting option, units/day.
    pub fixed_units: u32,
    /// Weight-proportional alternative, units/day.
    pub weight_based: DoseRange,
}

impl fmt::Display for BasalInitiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Starting dose: {} units OR {} units daily.",
            self.fixed_units, self.weight_based
        )
    }
}

/// Compute basal insulin starting options for a patient of `weight_kg`.
///
/// Returns the fixed 10-unit option alongside the 0.1–0.2 units/kg range.
/// Weight must be finite and strictly positive.
pub fn basal_initiation(weight_kg: f64) -> GlycosResult<BasalInitiation> {
    let weight_kg = ensure_positive("weight_kg", weight_kg)?;

    Ok(BasalInitiation {
        fixed_units: BASAL_FIXED_START_UNITS,
        weight_based: DoseRange::new(
            BASAL_WEIGHT_FACTOR_LOW * weight_kg,
            BASAL_WEIGHT_FACTOR_HIGH * weight_kg,
        ),
    })
}

// ── Basal insulin titration ───────────────────────────────────────────────────

/// The fasting-glucose band a titration decision fell into.
///
/// Bands are evaluated in priority order and the boundary values 140 and
/// 180 belong to the increase bands. Values between 131 and 139 mg/dL
/// fall through to `WithinTarget` even though the prose target band is
/// 80–130: this mirrors the guideline algorithm as written and is kept
/// until a domain expert rules on the intended edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlucoseBand {
    /// FBG > 180 mg/dL.
    Above180,
    /// FBG in 140–180 mg/dL inclusive.
    From140To180,
    /// FBG < 80 mg/dL.
    Below80,
    /// Everything else — no adjustment.
    WithinTarget,
}

/// A basal titration decision: which band fired, the adjustment, and the
/// resulting dose (never negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitrationAdvice {
    pub band: GlucoseBand,
    /// Signed adjustment in units (+4, +2, −2, or 0).
    pub adjustment_units: i32,
    /// `current_dose + adjustment`, clamped at zero.
    pub new_dose_units: u32,
}

impl fmt::Display for TitrationAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.band {
            GlucoseBand::Above180 => write!(
                f,
                "FBG > 180 mg/dL. Increase dose by {} units to {} units.",
                self.adjustment_units, self.new_dose_units
            ),
            GlucoseBand::From140To180 => write!(
                f,
                "FBG is 140-180 mg/dL. Increase dose by {} units to {} units.",
                self.adjustment_units, self.new_dose_units
            ),
            GlucoseBand::Below80 => write!(
                f,
                "FBG < 80 mg/dL. Decrease dose by 2 units to {} units.",
                self.new_dose_units
            ),
            GlucoseBand::WithinTarget => {
                write!(f, "FBG is within target range (80-130 mg/dL). No change in dose.")
            }
        }
    }
}

/// Titrate a basal insulin dose from a fasting blood glucose reading.
///
/// Piecewise policy, evaluated in this priority order:
///
/// - `> 180` → +4 units
/// - `140..=180` → +2 units
/// - `< 80` → −2 units, clamped so the dose never goes negative
/// - otherwise → no change
pub fn basal_titration(fasting_glucose: u32, current_dose: u32) -> TitrationAdvice {
    let (band, adjustment_units) = if fasting_glucose > 180 {
        (GlucoseBand::Above180, 4)
    } else if fasting_glucose >= 140 {
        (GlucoseBand::From140To180, 2)
    } else if fasting_glucose < 80 {
        (GlucoseBand::Below80, -2)
    } else {
        (GlucoseBand::WithinTarget, 0)
    };

    let new_dose_units = current_dose.saturating_add_signed(adjustment_units);

    debug!(
        fasting_glucose,
        current_dose, ?band, adjustment_units, new_dose_units, "basal titration"
    );

    TitrationAdvice {
        band,
        adjustment_units,
        new_dose_units,
    }
}

// ── Prandial insulin initiation ───────────────────────────────────────────────

/// Prandial insulin starting options: a fixed dose or 10% of basal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrandialInitiation {
    /// Fixed starting option, units with the largest meal.
    pub fixed_units: u32,
    /// Alternative computed as 10% of the current basal dose.
    pub from_basal_units: f64,
}

impl fmt::Display for PrandialInitiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Starting dose: {} units OR {:.1} units with the largest meal.",
            self.fixed_units, self.from_basal_units
        )
    }
}

/// Compute prandial insulin starting options from the current basal dose.
pub fn prandial_initiation(basal_dose: u32) -> PrandialInitiation {
    PrandialInitiation {
        fixed_units: PRANDIAL_FIXED_START_UNITS,
        from_basal_units: PRANDIAL_BASAL_FRACTION * f64::from(basal_dose),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use glycos_contracts::GlycosError;

    // ── metformin ────────────────────────────────────────────────────────────

    /// Dose 0 always yields the fixed start, regardless of formulation.
    #[test]
    fn metformin_naive_patient_gets_starting_dose() {
        for er in [false, true] {
            assert_eq!(
                metformin_dose(0, er),
                MetforminRecommendation::Start { dose_mg: 500 }
            );
        }
    }

    #[test]
    fn metformin_titrates_in_500mg_steps() {
        assert_eq!(
            metformin_dose(500, false),
            MetforminRecommendation::Titrate { next_dose_mg: 1000 }
        );
        assert_eq!(
            metformin_dose(1500, true),
            MetforminRecommendation::Titrate { next_dose_mg: 2000 }
        );
    }

    /// The last step is capped at the formulation maximum rather than
    /// overshooting: 2000 + 500 would exceed the IR max by 50 mg.
    #[test]
    fn metformin_final_step_is_capped_at_max() {
        assert_eq!(
            metformin_dose(2000, false),
            MetforminRecommendation::Titrate { next_dose_mg: 2500 }
        );
        assert_eq!(
            metformin_dose(2100, false),
            MetforminRecommendation::Titrate { next_dose_mg: 2550 }
        );
    }

    #[test]
    fn metformin_max_dose_reached() {
        assert_eq!(
            metformin_dose(2550, false),
            MetforminRecommendation::MaxReached { max_mg: 2550 }
        );
        assert_eq!(
            metformin_dose(2000, true),
            MetforminRecommendation::MaxReached { max_mg: 2000 }
        );
        // Above the max behaves the same as at the max.
        assert_eq!(
            metformin_dose(3000, true),
            MetforminRecommendation::MaxReached { max_mg: 2000 }
        );
    }

    #[test]
    fn metformin_display_phrasing() {
        assert_eq!(
            metformin_dose(0, false).to_string(),
            "Starting dose: 500mg daily or BID with meals."
        );
        assert_eq!(
            metformin_dose(2000, true).to_string(),
            "Max dose of 2000mg reached."
        );
        assert_eq!(
            metformin_dose(1000, false).to_string(),
            "Recommended next titration: increase dose to 1500mg."
        );
    }

    // ── agent lookup ─────────────────────────────────────────────────────────

    #[test]
    fn agent_lookup_is_case_insensitive() {
        let entry = agent_starting_dose("Empagliflozin").expect("known SGLT2i");
        assert_eq!(entry.starting_dose, "10mg");
        assert_eq!(entry.frequency, "daily");

        let entry = agent_starting_dose("Semaglutide (Ozempic)").expect("known GLP-1 RA");
        assert_eq!(entry.starting_dose, "0.25mg");
        assert_eq!(entry.frequency, "weekly");
    }

    /// Unknown medication is a normal `None`, not an error.
    #[test]
    fn agent_lookup_unknown_is_none() {
        assert!(agent_starting_dose("sulfonylurea").is_none());
        assert!(agent_starting_dose("").is_none());
    }

    #[test]
    fn agent_display_includes_dose_and_frequency() {
        let entry = agent_starting_dose("dulaglutide").unwrap();
        assert_eq!(
            entry.to_string(),
            "Starting dose for dulaglutide: 0.75mg weekly."
        );
    }

    // ── basal initiation ─────────────────────────────────────────────────────

    #[test]
    fn basal_initiation_scales_with_weight() {
        let rec = basal_initiation(70.0).unwrap();
        assert_eq!(rec.fixed_units, 10);
        assert_eq!(rec.weight_based.lower, 7.0);
        assert_eq!(rec.weight_based.upper, 14.0);
        assert_eq!(
            rec.to_string(),
            "Starting dose: 10 units OR 7.0-14.0 units daily."
        );
    }

    #[test]
    fn basal_initiation_rejects_bad_weight() {
        assert!(matches!(
            basal_initiation(0.0),
            Err(GlycosError::InvalidMeasurement {
                name: "weight_kg",
                ..
            })
        ));
        assert!(basal_initiation(-70.0).is_err());
        assert!(basal_initiation(f64::NAN).is_err());
    }

    // ── basal titration ──────────────────────────────────────────────────────

    #[test]
    fn titration_above_180_adds_four() {
        let advice = basal_titration(200, 10);
        assert_eq!(advice.band, GlucoseBand::Above180);
        assert_eq!(advice.adjustment_units, 4);
        assert_eq!(advice.new_dose_units, 14);
    }

    #[test]
    fn titration_140_to_180_adds_two() {
        let advice = basal_titration(160, 10);
        assert_eq!(advice.band, GlucoseBand::From140To180);
        assert_eq!(advice.new_dose_units, 12);
    }

    #[test]
    fn titration_below_80_subtracts_two() {
        let advice = basal_titration(70, 10);
        assert_eq!(advice.band, GlucoseBand::Below80);
        assert_eq!(advice.adjustment_units, -2);
        assert_eq!(advice.new_dose_units, 8);
    }

    /// The resulting dose clamps at zero; it never goes negative.
    #[test]
    fn titration_clamps_at_zero() {
        let advice = basal_titration(0, 1);
        assert_eq!(advice.band, GlucoseBand::Below80);
        assert_eq!(advice.new_dose_units, 0);

        assert_eq!(basal_titration(50, 0).new_dose_units, 0);
    }

    /// Boundary grid: 140 and 180 belong to the +2 band, 181 to the +4
    /// band, 79 to the −2 band, and 139/135 fall through to "no change"
    /// (the documented 131–139 gap is preserved, not corrected).
    #[test]
    fn titration_band_edges() {
        assert_eq!(basal_titration(181, 10).band, GlucoseBand::Above180);
        assert_eq!(basal_titration(180, 10).band, GlucoseBand::From140To180);
        assert_eq!(basal_titration(140, 10).band, GlucoseBand::From140To180);
        assert_eq!(basal_titration(139, 10).band, GlucoseBand::WithinTarget);
        assert_eq!(basal_titration(135, 10).band, GlucoseBand::WithinTarget);
        assert_eq!(basal_titration(130, 10).band, GlucoseBand::WithinTarget);
        assert_eq!(basal_titration(80, 10).band, GlucoseBand::WithinTarget);
        assert_eq!(basal_titration(79, 10).band, GlucoseBand::Below80);
    }

    #[test]
    fn titration_in_target_leaves_dose_unchanged() {
        let advice = basal_titration(100, 24);
        assert_eq!(advice.adjustment_units, 0);
        assert_eq!(advice.new_dose_units, 24);
        assert_eq!(
            advice.to_string(),
            "FBG is within target range (80-130 mg/dL). No change in dose."
        );
    }

    // ── prandial initiation ──────────────────────────────────────────────────

    #[test]
    fn prandial_initiation_is_ten_percent_of_basal() {
        let rec = prandial_initiation(40);
        assert_eq!(rec.fixed_units, 4);
        assert_eq!(rec.from_basal_units, 4.0);
        assert_eq!(
            rec.to_string(),
            "Starting dose: 4 units OR 4.0 units with the largest meal."
        );
    }

    #[test]
    fn prandial_initiation_renders_one_decimal() {
        let rec = prandial_initiation(25);
        assert_eq!(rec.from_basal_units, 2.5);
        assert!(rec.to_string().contains("2.5 units"));
    }

    // ── idempotence ──────────────────────────────────────────────────────────

    /// Pure functions: identical inputs, identical outputs.
    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(metformin_dose(1000, false), metformin_dose(1000, false));
        assert_eq!(basal_titration(160, 10), basal_titration(160, 10));
        assert_eq!(prandial_initiation(40), prandial_initiation(40));
    }
}
