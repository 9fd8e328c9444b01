//! # glycos-contracts
//!
//! Shared types, validation helpers, and error definitions for the GLYCOS
//! diabetes clinical toolbox.
//!
//! All crates in the workspace import from here. No clinical logic lives in
//! this crate — only data definitions, input validation, and the one
//! medication-name normalization routine both engines share.

pub mod error;
pub mod measurement;
pub mod medication;

pub use error::{GlycosError, GlycosResult};
pub use measurement::{ensure_non_negative, ensure_positive};
pub use medication::normalize_medication_name;
