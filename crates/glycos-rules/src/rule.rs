//! Contraindication rule types and configuration schema.
//!
//! A `RuleSet` is deserialized from TOML and holds a list of
//! `ContraindicationRule`s. Rules are keyed by medication name; a
//! medication with no rule is treated as having no known absolute
//! contraindication — absence of evidence, not evidence of absence.

use serde::{Deserialize, Serialize};

/// A single absolute contraindication rule.
///
/// The only threshold attribute currently modelled is an eGFR lower bound:
/// the medication must not be given when the patient's eGFR is strictly
/// below `min_egfr`.
///
/// Example in TOML:
/// ```toml
/// [[rules]]
/// medication = "metformin"
/// min_egfr = 30.0
/// message = "Metformin is contraindicated in patients with an eGFR < 30 mL/min/1.73m² (severe CKD)."
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContraindicationRule {
    /// Medication name. Matched case-insensitively against the proposed
    /// medication; stored normalized inside the engine.
    pub medication: String,

    /// eGFR floor in mL/min/1.73m². The rule triggers when the patient's
    /// eGFR is strictly below this value.
    pub min_egfr: f64,

    /// Human-readable explanation surfaced to the clinician when the rule
    /// triggers.
    pub message: String,
}

/// The top-level structure deserialized from a TOML rule file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    /// The contraindication rules. Order is irrelevant for lookup; when two
    /// entries name the same medication the last one wins.
    pub rules: Vec<ContraindicationRule>,
}

/// The outcome of a contraindication check.
///
/// Invariant: `is_safe` is false if and only if `messages` is non-empty.
/// Message order follows rule evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContraindicationReport {
    /// True when no contraindication rule triggered.
    pub is_safe: bool,

    /// One message per triggered rule; empty when the medication is safe
    /// with respect to the loaded rules.
    pub messages: Vec<String>,
}

impl ContraindicationReport {
    /// A report with no triggered rules.
    pub fn safe() -> Self {
        Self {
            is_safe: true,
            messages: Vec::new(),
        }
    }

    /// Record a triggered rule, flipping the safety flag.
    pub fn flag(&mut self, message: impl Into<String>) {
        self.is_safe = false;
        self.messages.push(message.into());
    }
}
