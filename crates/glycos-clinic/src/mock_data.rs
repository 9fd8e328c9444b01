//! Simulated patient data for the GLYCOS reference scenarios.
//!
//! All data in this module is hardcoded and fictional. No external systems
//! are contacted. In a deployment these records come from the patient data
//! store, which is outside the toolbox's scope — this module is its
//! stand-in.

use serde_json::{json, Value};

/// Return a mock record for a Type 2 diabetic patient with stage 4 CKD.
///
/// The eGFR of 25 puts this patient below the metformin contraindication
/// threshold, which is exactly what the renal screening scenario needs to
/// demonstrate.
pub fn ckd_patient() -> Value {
    json!({
        "patient_id": "pt-1042",
        "age": 67,
        "gender": "female",
        "phenotype": "Type 2 Diabetes - Insulin Resistant",
        "conditions": [
            "type 2 diabetes mellitus",
            "chronic kidney disease stage 4",
            "hypertension"
        ],
        "labs": {
            "hba1c_percent": 8.4,
            "egfr": 25,
            "ldl_mg_dl": 92,
            "fasting_glucose_mg_dl": 176
        },
        "medications": [
            { "name": "insulin glargine", "dose": "18 units", "frequency": "nightly" },
            { "name": "lisinopril", "dose": "20 mg", "frequency": "daily" }
        ],
        "vitals": {
            "blood_pressure": "148/86",
            "heart_rate_bpm": 78,
            "weight_kg": 82.0
        }
    })
}

/// Return a mock record for a newly diagnosed Type 1 patient.
pub fn new_onset_t1d_patient() -> Value {
    json!({
        "patient_id": "pt-2077",
        "age": 19,
        "gender": "male",
        "phenotype": "Type 1 Diabetes - Autoimmune",
        "conditions": ["type 1 diabetes mellitus"],
        "labs": {
            "hba1c_percent": 11.2,
            "egfr": 104,
            "c_peptide_ng_ml": 0.4,
            "fasting_glucose_mg_dl": 248
        },
        "medications": [],
        "vitals": {
            "blood_pressure": "118/72",
            "heart_rate_bpm": 88,
            "weight_kg": 70.0
        }
    })
}
