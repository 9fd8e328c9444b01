//! Scenario 1: Renal Contraindication Screening
//!
//! Screens metformin against two kidney-function profiles and then checks
//! a medication the rule table does not know, demonstrating:
//!
//!   1. eGFR 25 + metformin  → unsafe, one contraindication message
//!   2. eGFR 95 + metformin  → safe, no messages
//!   3. eGFR 25 + empagliflozin → safe *by absence of a rule* — the
//!      documented limitation, spelled out in the output
//!
//! Finally the unsafe report is attached to a summarization request so the
//! physician-facing payload carries the finding.

use serde_json::json;

use glycos_contracts::GlycosResult;
use glycos_rules::ContraindicationEngine;

use crate::mock_data::ckd_patient;
use crate::summary::EvaluationRequest;

/// Run Scenario 1: Renal Contraindication Screening.
pub fn run_scenario() -> GlycosResult<()> {
    println!("=== Scenario 1: Renal Contraindication Screening ===");
    println!();

    let engine = ContraindicationEngine::with_default_rules()?;
    let patient = ckd_patient();
    let egfr_severe = 25.0;
    let egfr_healthy = 95.0;

    // ── Check 1: severe CKD, metformin ────────────────────────────────────────

    let report = engine.check(egfr_severe, "Metformin")?;
    println!("  Patient {} (eGFR {egfr_severe}): metformin", patient["patient_id"]);
    println!("    safe: {}", report.is_safe);
    for message in &report.messages {
        println!("    contraindication: {message}");
    }
    println!();

    // ── Check 2: healthy kidneys, metformin ───────────────────────────────────

    let healthy = engine.check(egfr_healthy, "Metformin")?;
    println!("  Same medication at eGFR {egfr_healthy}:");
    println!("    safe: {} (no messages)", healthy.is_safe);
    println!();

    // ── Check 3: unknown medication ───────────────────────────────────────────

    let unknown = engine.check(egfr_severe, "Empagliflozin")?;
    println!("  Empagliflozin at eGFR {egfr_severe}:");
    println!("    safe: {}", unknown.is_safe);
    println!("    NOTE: no rule exists for this medication — 'safe' means");
    println!("    'no known absolute contraindication', not clinical clearance.");
    println!();

    // ── Attach the unsafe finding to a summarization request ──────────────────

    let mut request = EvaluationRequest::new(patient);
    request.attach_finding("contraindication_check", json!(report));

    let payload = request.to_payload();
    println!(
        "  Summarization request {} built with {} finding(s).",
        payload["request_id"], request.findings.len()
    );
    println!();
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
