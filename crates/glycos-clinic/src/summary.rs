//! Payload assembly for the external clinical summarization service.
//!
//! The toolbox never calls the service itself — model inference is an
//! external collaborator. What it does own is the shape of the request:
//! a structured patient record, any toolbox findings worth surfacing
//! (contraindication reports, dose recommendations), a fixed instruction
//! template, and an envelope with a request id and timestamp so the
//! response can be correlated and logged.
//!
//! Building a request is a pure operation; serializing it to JSON is the
//! only output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// The fixed instruction template sent with every evaluation request.
///
/// Asks the summarizer for a physician-facing summary covering the same
/// six points every time, so downstream consumers can rely on the shape
/// of the answer.
pub const SUMMARY_INSTRUCTIONS: &str = "\
You are a clinical assistant summarizing a diabetic patient's condition for a physician.

Below is structured patient data in JSON format.

Write a natural-language clinical summary that includes:
1. Age and gender
2. Major chronic conditions (diabetes, hypertension, CKD, etc.)
3. Most recent lab results (HbA1c, eGFR, LDL, etc.)
4. Active medications (highlight diabetes meds)
5. Any abnormal vitals
6. Anything clinically urgent

Be concise, structured, and use medical terminology.";

/// A named toolbox finding attached to an evaluation request.
///
/// `label` identifies the producing check (e.g. `"contraindication_check"`,
/// `"basal_titration"`); `detail` is the serialized engine output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub label: String,
    pub detail: Value,
}

/// A complete request for the external summarization service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Unique id for correlating the eventual response.
    pub request_id: Uuid,
    /// UTC build time of the request.
    pub generated_at: DateTime<Utc>,
    /// The fixed instruction template.
    pub instructions: String,
    /// Structured patient data, as supplied by the patient data store.
    pub patient: Value,
    /// Engine outputs the physician should see alongside the summary.
    pub findings: Vec<Finding>,
}

impl EvaluationRequest {
    /// Start a request for the given patient record.
    pub fn new(patient: Value) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            instructions: SUMMARY_INSTRUCTIONS.to_string(),
            patient,
            findings: Vec::new(),
        }
    }

    /// Attach a toolbox finding. Findings keep insertion order.
    pub fn attach_finding(&mut self, label: impl Into<String>, detail: Value) {
        self.findings.push(Finding {
            label: label.into(),
            detail,
        });
    }

    /// Serialize the full request to the JSON payload handed to the
    /// service client.
    pub fn to_payload(&self) -> Value {
        // Serialization of these types cannot fail: every field is either
        // a plain value or already a serde_json::Value.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
