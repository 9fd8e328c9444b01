//! # glycos-clinic
//!
//! Clinical reference layer for the GLYCOS toolbox: mock patient data,
//! runnable walkthrough scenarios for both engines, and the payload
//! builder for the external summarization service.
//!
//! Nothing in this crate performs I/O against real systems. The patient
//! data store and the model-inference API are external collaborators;
//! this crate only shapes the data flowing to and from them.

pub mod mock_data;
pub mod scenarios;
pub mod summary;

pub use summary::{EvaluationRequest, Finding, SUMMARY_INSTRUCTIONS};

// ── Tests ─────────────────────────────────────────────────────────────────────
