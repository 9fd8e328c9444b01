//! Runnable clinical walkthroughs for the GLYCOS toolbox.
//!
//! Each scenario wires the real engines to mock patient data and prints
//! every step, mirroring how a caller is expected to sequence the checks:
//! contraindications first, dosing second.

pub mod renal_screening;
pub mod type1_regimen;
pub mod type2_workup;
