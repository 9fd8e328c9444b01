//! # glycos-rules
//!
//! A TOML-extensible absolute-contraindication checker for the GLYCOS
//! toolbox.
//!
//! ## Overview
//!
//! This crate provides [`ContraindicationEngine`], which evaluates a
//! patient's kidney function against a small table of per-medication
//! contraindication rules. The shipped rule set contains a single rule
//! (metformin below eGFR 30); deployments can extend it by loading their
//! own TOML file — the lookup algorithm never changes.
//!
//! ## Quick start
//!
//! ```rust
//! use glycos_rules::ContraindicationEngine;
//!
//! let engine = ContraindicationEngine::with_default_rules().unwrap();
//! let report = engine.check(25.0, "Metformin").unwrap();
//! assert!(!report.is_safe);
//! ```
//!
//! ## Known limitation
//!
//! A medication with no rule in the table is reported safe. That means
//! "no known absolute contraindication", not "verified safe" — callers
//! must not read a safe report as clinical clearance.

pub mod engine;
pub mod rule;

pub use engine::ContraindicationEngine;
pub use rule::{ContraindicationReport, ContraindicationRule, RuleSet};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use glycos_contracts::GlycosError;

    use crate::ContraindicationEngine;

    fn default_engine() -> ContraindicationEngine {
        ContraindicationEngine::with_default_rules().expect("embedded rules must parse")
    }

    // ── 1. metformin below threshold ─────────────────────────────────────────

    /// eGFR below 30 triggers the metformin rule with exactly one message.
    #[test]
    fn metformin_below_threshold_is_unsafe() {
        let engine = default_engine();
        let report = engine.check(25.0, "metformin").unwrap();

        assert!(!report.is_safe);
        assert_eq!(report.messages.len(), 1);
        assert!(
            report.messages[0].contains("eGFR < 30"),
            "unexpected message: {}",
            report.messages[0]
        );
    }

    /// 29.9 is still strictly below the threshold.
    #[test]
    fn metformin_just_below_threshold_is_unsafe() {
        let engine = default_engine();
        assert!(!engine.check(29.9, "metformin").unwrap().is_safe);
    }

    // ── 2. metformin at or above threshold ───────────────────────────────────

    /// The threshold itself is safe: the rule fires on strictly-less-than.
    #[test]
    fn metformin_at_threshold_is_safe() {
        let engine = default_engine();
        let report = engine.check(30.0, "metformin").unwrap();

        assert!(report.is_safe);
        assert!(report.messages.is_empty());
    }

    #[test]
    fn metformin_with_healthy_kidneys_is_safe() {
        let engine = default_engine();
        assert!(engine.check(95.0, "Metformin").unwrap().is_safe);
    }

    // ── 3. case-insensitive matching ─────────────────────────────────────────

    /// The medication name matches regardless of case or padding.
    #[test]
    fn matching_is_case_insensitive() {
        let engine = default_engine();

        for name in ["METFORMIN", "MetFormin", "  metformin  "] {
            let report = engine.check(20.0, name).unwrap();
            assert!(!report.is_safe, "'{name}' should match the metformin rule");
        }
    }

    // ── 4. unknown medication ────────────────────────────────────────────────

    /// A medication with no rule is safe regardless of eGFR — the documented
    /// "absence of evidence" limitation.
    #[test]
    fn unknown_medication_is_reported_safe() {
        let engine = default_engine();

        let report = engine.check(10.0, "empagliflozin").unwrap();
        assert!(report.is_safe);
        assert!(report.messages.is_empty());
    }

    /// An empty name matches no rule and is therefore reported safe.
    #[test]
    fn empty_medication_name_matches_no_rule() {
        let engine = default_engine();
        assert!(engine.check(10.0, "").unwrap().is_safe);
    }

    // ── 5. report invariant ──────────────────────────────────────────────────

    /// `is_safe` must agree with `messages.is_empty()` on every outcome.
    #[test]
    fn safety_flag_mirrors_message_list() {
        let engine = default_engine();

        for (egfr, med) in [(25.0, "metformin"), (95.0, "metformin"), (25.0, "other")] {
            let report = engine.check(egfr, med).unwrap();
            assert_eq!(report.is_safe, report.messages.is_empty());
        }
    }

    // ── 6. measurement validation ────────────────────────────────────────────

    /// Negative or NaN eGFR is rejected, not silently evaluated.
    #[test]
    fn invalid_egfr_is_rejected() {
        let engine = default_engine();

        assert!(matches!(
            engine.check(-1.0, "metformin"),
            Err(GlycosError::InvalidMeasurement { name: "egfr", .. })
        ));
        assert!(engine.check(f64::NAN, "metformin").is_err());
    }

    // ── 7. TOML extensibility ────────────────────────────────────────────────

    /// Adding a second medication to the rule file requires no code change.
    #[test]
    fn extended_rule_set_adds_medications() {
        let toml = r#"
            [[rules]]
            medication = "metformin"
            min_egfr = 30.0
            message = "Metformin is contraindicated below eGFR 30."

            [[rules]]
            medication = "dapagliflozin"
            min_egfr = 25.0
            message = "Dapagliflozin is not recommended below eGFR 25."
        "#;

        let engine = ContraindicationEngine::from_toml_str(toml).unwrap();
        assert_eq!(engine.rule_count(), 2);

        assert!(!engine.check(20.0, "Dapagliflozin").unwrap().is_safe);
        assert!(engine.check(40.0, "dapagliflozin").unwrap().is_safe);
    }

    /// When two entries name the same medication, the last one wins.
    #[test]
    fn duplicate_medication_last_entry_wins() {
        let toml = r#"
            [[rules]]
            medication = "metformin"
            min_egfr = 30.0
            message = "first"

            [[rules]]
            medication = "Metformin"
            min_egfr = 45.0
            message = "second"
        "#;

        let engine = ContraindicationEngine::from_toml_str(toml).unwrap();
        assert_eq!(engine.rule_count(), 1);

        let report = engine.check(40.0, "metformin").unwrap();
        assert!(!report.is_safe);
        assert_eq!(report.messages[0], "second");
    }

    // ── 8. TOML parse error ──────────────────────────────────────────────────

    /// Malformed TOML must produce a `GlycosError::Config`.
    #[test]
    fn malformed_toml_is_a_config_error() {
        let result = ContraindicationEngine::from_toml_str("not toml ][[[");

        match result {
            Err(GlycosError::Config { reason }) => {
                assert!(
                    reason.contains("failed to parse contraindication rules TOML"),
                    "unexpected reason: {reason}"
                );
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    // ── 9. determinism ───────────────────────────────────────────────────────

    /// Two identical calls yield identical reports — the engine holds no
    /// mutable state.
    #[test]
    fn check_is_idempotent() {
        let engine = default_engine();

        let first = engine.check(25.0, "metformin").unwrap();
        let second = engine.check(25.0, "metformin").unwrap();
        assert_eq!(first, second);
    }
}
