//! # glycos-dosing
//!
//! Deterministic medication dosing calculations for the GLYCOS diabetes
//! toolbox.
//!
//! ## Overview
//!
//! Two families of pure functions over compiled-in guideline tables:
//!
//! - [`type2`] — metformin start/titration, SGLT2i/GLP-1 RA starting
//!   doses, basal insulin initiation and titration, prandial addition.
//! - [`type1`] — weight-based total daily dose, the 40/60 basal/bolus
//!   split, insulin-to-carbohydrate ratio, and correction factor.
//!
//! No function performs I/O or holds state between calls; the only shared
//! data are the read-only tables in [`tables`], so everything here is
//! safely callable from any number of threads.
//!
//! Callers conventionally run the contraindication check (glycos-rules)
//! before asking for a dose; that ordering is a workflow convention, not
//! something these functions enforce.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod tables;
pub mod type1;
pub mod type2;

pub use type1::{
    basal_bolus_split, correction_factor, insulin_to_carb_ratio, total_daily_dose,
    BasalBolusSplit, ClinicalStatus, InsulinKind,
};
pub use type2::{
    agent_starting_dose, basal_initiation, basal_titration, metformin_dose, prandial_initiation,
    BasalInitiation, GlucoseBand, MetforminRecommendation, PrandialInitiation, TitrationAdvice,
};

/// An inclusive dose range in units/day.
///
/// Rendered to one decimal place, matching the guideline's phrasing
/// (e.g. `"28.0-35.0"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseRange {
    pub lower: f64,
    pub upper: f64,
}

impl DoseRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

impl fmt::Display for DoseRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}-{:.1}", self.lower, self.upper)
    }
}
