//! Scenario 3: Type 1 Starting Regimen
//!
//! Builds a complete starting regimen for a newly diagnosed Type 1
//! patient: total daily dose from weight and status, the 40/60
//! basal/bolus split, then the insulin-to-carbohydrate ratio and
//! correction factor. Closes by showing the two validation failures a
//! caller must handle: an unknown clinical status and a non-positive
//! total daily dose.

use std::str::FromStr;

use serde_json::json;

use glycos_contracts::GlycosResult;
use glycos_dosing::type1::{
    basal_bolus_split, correction_factor, insulin_to_carb_ratio, total_daily_dose, ClinicalStatus,
    InsulinKind,
};

use crate::mock_data::new_onset_t1d_patient;
use crate::summary::EvaluationRequest;

/// Run Scenario 3: Type 1 Starting Regimen.
pub fn run_scenario() -> GlycosResult<()> {
    println!("=== Scenario 3: Type 1 Starting Regimen ===");
    println!();

    let patient = new_onset_t1d_patient();
    let weight_kg = 70.0;
    let status = ClinicalStatus::Initial;

    // ── Total daily dose ──────────────────────────────────────────────────────

    let range = total_daily_dose(weight_kg, status)?;
    println!("  Patient {} ({weight_kg} kg, status '{status}'):", patient["patient_id"]);
    println!("    estimated TDD: {range} units/day");

    // Work the rest of the regimen from the midpoint of the range.
    let tdd = (range.lower + range.upper) / 2.0;
    println!("    working TDD (midpoint): {tdd:.1} units/day");
    println!();

    // ── Split and ratios ──────────────────────────────────────────────────────

    let split = basal_bolus_split(tdd)?;
    println!("    40/60 split: {split}");

    let icr = insulin_to_carb_ratio(tdd, InsulinKind::RapidActing)?;
    let cf = correction_factor(tdd, InsulinKind::RapidActing)?;
    println!("    ICR (rapid-acting): 1 unit per {icr} g carbohydrate");
    println!("    correction factor (rapid-acting): 1 unit per {cf} mg/dL");
    println!();

    // ── Validation failures the caller must handle ────────────────────────────

    println!("  Validation behavior:");

    if let Err(e) = ClinicalStatus::from_str("bogus") {
        println!("    status 'bogus' rejected: {e}");
    }

    if let Err(e) = basal_bolus_split(0.0) {
        println!("    TDD 0 rejected: {e}");
    }
    println!();

    // ── Summarization request with the regimen attached ───────────────────────

    let mut request = EvaluationRequest::new(patient);
    request.attach_finding(
        "starting_regimen",
        json!({
            "tdd_range": range,
            "split": split,
            "icr_g_per_unit": icr,
            "correction_factor_mg_dl_per_unit": cf,
        }),
    );
    println!(
        "    summarization request built with {} finding(s).",
        request.findings.len()
    );
    println!();
    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
