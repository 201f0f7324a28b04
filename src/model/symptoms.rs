//! Symptom checker request/response types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SymptomRequest {
    pub age: i32,
    pub gender: String,
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub medical_history: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
}

/// A possible condition with its probability level (High/Medium/Low/Unknown)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Condition {
    pub condition: String,
    pub probability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SymptomResponse {
    pub possible_conditions: Vec<Condition>,
    pub recommendations: Vec<String>,
    pub severity_level: String,
    pub seek_medical_attention: bool,
}
