//! Scenario 2: Type 2 Medication Workup
//!
//! Walks the Type 2 algorithm end to end for one patient:
//!
//!   1. Metformin: start at 500 mg, titrate weekly to the IR maximum
//!   2. Second agent: SGLT2i and GLP-1 RA starting-dose lookups, plus an
//!      agent the table does not carry
//!   3. Basal insulin: weight-based initiation, then titration against a
//!      week of fasting glucose readings across every band
//!   4. Prandial insulin: addition on top of the final basal dose

use glycos_contracts::GlycosResult;
use glycos_dosing::type2::{
    agent_starting_dose, basal_initiation, basal_titration, metformin_dose, prandial_initiation,
    MetforminRecommendation,
};

/// Run Scenario 2: Type 2 Medication Workup.
pub fn run_scenario() -> GlycosResult<()> {
    println!("=== Scenario 2: Type 2 Medication Workup ===");
    println!();

    // ── Metformin titration ladder ────────────────────────────────────────────

    println!("  Metformin (immediate-release), titrated weekly:");
    let mut dose_mg = 0;
    loop {
        let recommendation = metformin_dose(dose_mg, false);
        println!("    at {dose_mg}mg: {recommendation}");
        match recommendation {
            MetforminRecommendation::Start { dose_mg: next } => dose_mg = next,
            MetforminRecommendation::Titrate { next_dose_mg } => dose_mg = next_dose_mg,
            MetforminRecommendation::MaxReached { .. } => break,
        }
    }
    println!();

    // ── Second agent starting doses ───────────────────────────────────────────

    println!("  Second-agent starting doses:");
    for name in ["Empagliflozin", "Semaglutide (Ozempic)", "glimepiride"] {
        match agent_starting_dose(name) {
            Some(entry) => println!("    {entry}"),
            None => println!("    Dosing information not found for '{name}'."),
        }
    }
    println!();

    // ── Basal insulin initiation + titration ──────────────────────────────────

    let weight_kg = 82.0;
    let initiation = basal_initiation(weight_kg)?;
    println!("  Basal insulin initiation at {weight_kg} kg:");
    println!("    {initiation}");

    println!("  Weekly titration from 10 units:");
    let mut basal_dose = 10;
    for fbg in [205, 160, 135, 100, 70] {
        let advice = basal_titration(fbg, basal_dose);
        println!("    FBG {fbg}: {advice}");
        basal_dose = advice.new_dose_units;
    }
    println!();

    // ── Prandial addition ─────────────────────────────────────────────────────

    let prandial = prandial_initiation(basal_dose);
    println!("  Prandial addition at basal {basal_dose} units:");
    println!("    {prandial}");
    println!();
    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
