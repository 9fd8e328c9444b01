//! The contraindication rule engine.
//!
//! `ContraindicationEngine` loads a `RuleSet` from TOML (or the embedded
//! default set) and answers one question: given a patient's kidney
//! function, is the proposed medication absolutely contraindicated?
//!
//! Evaluation algorithm:
//!
//! 1. Validate the eGFR measurement (finite, non-negative).
//! 2. Normalize the medication name and look up its rule.
//! 3. If a rule exists and `egfr < min_egfr`, the report is unsafe and
//!    carries the rule's message.
//! 4. No rule, or threshold satisfied → safe report with no messages.
//!
//! A medication without a rule is reported safe *with respect to this
//! check only* — the rule set covers absolute contraindications it knows
//! about, nothing more.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use glycos_contracts::{normalize_medication_name, ensure_non_negative, GlycosError, GlycosResult};

use crate::rule::{ContraindicationReport, ContraindicationRule, RuleSet};

/// Rules shipped with the toolbox (currently: metformin below eGFR 30).
const DEFAULT_RULES: &str = include_str!("../rules/contraindications.toml");

/// A contraindication checker over an immutable rule table.
///
/// Construct via `with_default_rules`, `from_toml_str`, or `from_file`;
/// the table is never mutated afterwards. `check` is a pure function of
/// its inputs, so one engine can be shared freely across threads.
#[derive(Debug)]
pub struct ContraindicationEngine {
    /// Rules keyed by normalized medication name.
    rules: HashMap<String, ContraindicationRule>,
}

impl ContraindicationEngine {
    /// Build an engine from the rule set embedded in the crate.
    ///
    /// The embedded TOML is validated at test time, so this cannot fail at
    /// runtime; the `GlycosResult` is kept for uniformity with the other
    /// constructors.
    pub fn with_default_rules() -> GlycosResult<Self> {
        Self::from_toml_str(DEFAULT_RULES)
    }

    /// Parse `s` as TOML and build an engine.
    ///
    /// Returns `GlycosError::Config` if the TOML is malformed or does not
    /// match the `RuleSet` schema. When two entries name the same
    /// medication, the last one wins.
    pub fn from_toml_str(s: &str) -> GlycosResult<Self> {
        let set: RuleSet = toml::from_str(s).map_err(|e| GlycosError::Config {
            reason: format!("failed to parse contraindication rules TOML: {}", e),
        })?;
        Ok(Self::from_rule_set(set))
    }

    /// Read the file at `path` and parse it as a TOML rule set.
    ///
    /// Returns `GlycosError::Config` if the file cannot be read or its
    /// contents do not parse.
    pub fn from_file(path: &Path) -> GlycosResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| GlycosError::Config {
            reason: format!("failed to read rule file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build an engine from an already-deserialized rule set.
    pub fn from_rule_set(set: RuleSet) -> Self {
        let rules = set
            .rules
            .into_iter()
            .map(|r| (normalize_medication_name(&r.medication), r))
            .collect();
        Self { rules }
    }

    /// Number of loaded rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Check a proposed medication against the patient's kidney function.
    ///
    /// `egfr` is the estimated Glomerular Filtration Rate in
    /// mL/min/1.73m²; it must be finite and non-negative or the call fails
    /// with `GlycosError::InvalidMeasurement`. `medication` is matched
    /// case-insensitively; a name with no rule (including an empty string)
    /// yields a safe report, because the engine only knows the absolute
    /// contraindications in its table.
    pub fn check(&self, egfr: f64, medication: &str) -> GlycosResult<ContraindicationReport> {
        let egfr = ensure_non_negative("egfr", egfr)?;
        let key = normalize_medication_name(medication);

        debug!(medication = %key, egfr, "checking contraindications");

        let mut report = ContraindicationReport::safe();

        if let Some(rule) = self.rules.get(&key) {
            if egfr < rule.min_egfr {
                warn!(
                    medication = %key,
                    egfr,
                    min_egfr = rule.min_egfr,
                    "absolute contraindication triggered"
                );
                report.flag(rule.message.clone());
            }
        }

        Ok(report)
    }
}
