//! Compiled-in dosing knowledge tables.
//!
//! Every value here is transcribed from the clinical guideline document the
//! toolbox was built against. The tables are versioned static
//! configuration: they are constructed at compile time and never mutated,
//! so no runtime path can tamper with a threshold or a starting dose.

use serde::Serialize;

use crate::type1::ClinicalStatus;

// ── Metformin ─────────────────────────────────────────────────────────────────

/// Standard metformin starting dose, mg/day.
pub const METFORMIN_STARTING_DOSE_MG: u32 = 500;

/// Weekly titration increment, mg.
pub const METFORMIN_TITRATION_STEP_MG: u32 = 500;

/// Maximum daily dose for the extended-release formulation, mg.
pub const METFORMIN_MAX_ER_MG: u32 = 2000;

/// Maximum daily dose for the immediate-release formulation, mg.
pub const METFORMIN_MAX_IR_MG: u32 = 2550;

// ── Non-insulin agents (SGLT2i + GLP-1 RA) ────────────────────────────────────

/// Drug class of a non-insulin agent in the starting-dose table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgentClass {
    Sglt2Inhibitor,
    Glp1ReceptorAgonist,
}

/// Starting-dose entry for a non-insulin agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentDose {
    /// Lookup key, already normalized (lowercase).
    pub name: &'static str,
    pub class: AgentClass,
    /// Starting dose magnitude with unit, e.g. `"10mg"`.
    pub starting_dose: &'static str,
    /// Administration frequency, e.g. `"daily"` or `"weekly"`.
    pub frequency: &'static str,
}

/// Combined SGLT2 inhibitor and GLP-1 receptor agonist starting doses.
///
/// Keys are stored normalized; look up with
/// [`crate::type2::agent_starting_dose`], which normalizes its input.
pub const AGENT_DOSES: &[AgentDose] = &[
    AgentDose {
        name: "empagliflozin",
        class: AgentClass::Sglt2Inhibitor,
        starting_dose: "10mg",
        frequency: "daily",
    },
    AgentDose {
        name: "dapagliflozin",
        class: AgentClass::Sglt2Inhibitor,
        starting_dose: "5mg",
        frequency: "daily",
    },
    AgentDose {
        name: "canagliflozin",
        class: AgentClass::Sglt2Inhibitor,
        starting_dose: "100mg",
        frequency: "daily",
    },
    AgentDose {
        name: "ertugliflozin",
        class: AgentClass::Sglt2Inhibitor,
        starting_dose: "5mg",
        frequency: "daily",
    },
    AgentDose {
        name: "semaglutide (ozempic)",
        class: AgentClass::Glp1ReceptorAgonist,
        starting_dose: "0.25mg",
        frequency: "weekly",
    },
    AgentDose {
        name: "semaglutide (rybelsus)",
        class: AgentClass::Glp1ReceptorAgonist,
        starting_dose: "3mg",
        frequency: "daily oral",
    },
    AgentDose {
        name: "dulaglutide",
        class: AgentClass::Glp1ReceptorAgonist,
        starting_dose: "0.75mg",
        frequency: "weekly",
    },
    AgentDose {
        name: "liraglutide",
        class: AgentClass::Glp1ReceptorAgonist,
        starting_dose: "0.6mg",
        frequency: "daily",
    },
    AgentDose {
        name: "tirzepatide",
        class: AgentClass::Glp1ReceptorAgonist,
        starting_dose: "2.5mg",
        frequency: "weekly",
    },
];

// ── Basal / prandial insulin (Type 2) ─────────────────────────────────────────

/// Fixed basal insulin starting option, units/day.
pub const BASAL_FIXED_START_UNITS: u32 = 10;

/// Weight-based basal initiation range, units per kg per day.
pub const BASAL_WEIGHT_FACTOR_LOW: f64 = 0.1;
pub const BASAL_WEIGHT_FACTOR_HIGH: f64 = 0.2;

/// Fixed prandial insulin starting option, units with the largest meal.
pub const PRANDIAL_FIXED_START_UNITS: u32 = 4;

/// Prandial start as a fraction of the current basal dose.
pub const PRANDIAL_BASAL_FRACTION: f64 = 0.10;

// ── Total daily dose factors (Type 1) ─────────────────────────────────────────

/// Weight multipliers (units/kg/day) for estimating total daily insulin
/// dose by clinical status. Only the `Initial` pair is pinned by the
/// guideline excerpt; the rest are standard published ranges.
pub fn tdd_factors(status: ClinicalStatus) -> (f64, f64) {
    match status {
        ClinicalStatus::Initial => (0.4, 0.5),
        ClinicalStatus::Honeymoon => (0.2, 0.4),
        ClinicalStatus::Established => (0.5, 0.7),
        ClinicalStatus::InsulinResistant => (0.8, 1.2),
    }
}

// ── Basal/bolus split and ratio constants (Type 1) ────────────────────────────

/// Fixed basal fraction of the total daily dose.
///
/// The guideline range is 40–50% basal / 50–60% bolus; the toolbox pins
/// the conservative end of that range as a deliberate fixed choice.
pub const BASAL_SPLIT_FRACTION: f64 = 0.40;

/// Fixed bolus fraction of the total daily dose. Sums to 1.0 with the
/// basal fraction.
pub const BOLUS_SPLIT_FRACTION: f64 = 0.60;

/// Numerator of the insulin-to-carbohydrate ratio formula (grams of
/// carbohydrate covered per unit), by insulin kind.
pub const ICR_CONSTANT_RAPID: f64 = 500.0;
pub const ICR_CONSTANT_REGULAR: f64 = 450.0;

/// Numerator of the correction-factor formula (mg/dL dropped per unit),
/// by insulin kind.
pub const CF_CONSTANT_RAPID: f64 = 1800.0;
pub const CF_CONSTANT_REGULAR: f64 = 1700.0;

#[cfg(test)]
mod tests {
    use super::*;

    /// The split fractions must always sum to exactly 1.0.
    #[test]
    fn split_fractions_sum_to_one() {
        assert_eq!(BASAL_SPLIT_FRACTION + BOLUS_SPLIT_FRACTION, 1.0);
    }

    /// Every table key is already normalized, so lookups never miss on
    /// case alone.
    #[test]
    fn agent_table_keys_are_normalized() {
        for entry in AGENT_DOSES {
            assert_eq!(
                entry.name,
                glycos_contracts::normalize_medication_name(entry.name),
                "table key '{}' is not normalized",
                entry.name
            );
        }
    }

    /// Each status maps to a (min, max) pair with min < max.
    #[test]
    fn tdd_factor_pairs_are_ordered() {
        for status in [
            ClinicalStatus::Initial,
            ClinicalStatus::Honeymoon,
            ClinicalStatus::Established,
            ClinicalStatus::InsulinResistant,
        ] {
            let (lo, hi) = tdd_factors(status);
            assert!(lo < hi, "{status:?}: {lo} >= {hi}");
            assert!(lo > 0.0);
        }
    }
}
