//! Risk assessment request/response types

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use utoipa::ToSchema;

/// Flat health parameter set submitted for a risk assessment.
///
/// Fields beyond those consumed by the scoring engine (diastolic_bp, hdl, ldl,
/// triglycerides, alcohol_consumption, family_history, chronic_conditions,
/// medications, sleep_hours, stress_level) are accepted for forward
/// compatibility but do not affect the computed scores.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskAssessmentRequest {
    /// Age in years, 1-119
    pub age: i32,
    /// Echoed and logged only, never scored
    pub gender: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    pub systolic_bp: Option<i32>,
    pub diastolic_bp: Option<i32>,
    /// Total cholesterol in mg/dL
    pub cholesterol: Option<f64>,
    pub hdl: Option<f64>,
    pub ldl: Option<f64>,
    pub triglycerides: Option<f64>,
    pub fasting_glucose: Option<f64>,
    #[serde(default)]
    pub smoking: bool,
    pub alcohol_consumption: Option<String>,
    pub exercise_minutes_per_week: Option<i32>,
    pub family_history: Option<HashMap<String, bool>>,
    pub chronic_conditions: Option<Vec<String>>,
    pub medications: Option<Vec<String>>,
    pub sleep_hours: Option<f64>,
    pub stress_level: Option<i32>,
}

/// BMI classification, WHO thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obesity,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::NormalWeight => write!(f, "Normal weight"),
            BmiCategory::Overweight => write!(f, "Overweight"),
            BmiCategory::Obesity => write!(f, "Obesity"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// A health attribute that exceeded a fixed threshold, with its
/// attached recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskFactor {
    pub factor: String,
    pub value: f64,
    pub recommendation: String,
}

impl RiskFactor {
    pub fn new(factor: &str, value: f64, recommendation: &str) -> Self {
        Self {
            factor: factor.to_string(),
            value,
            recommendation: recommendation.to_string(),
        }
    }
}

/// Per-category score, level and triggering factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryAssessment {
    pub risk_score: i32,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<RiskFactor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskAssessmentResponse {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub health_age: i32,
    /// Normalized to [0, 100]
    pub overall_risk_score: f64,
    pub risk_categories: BTreeMap<String, CategoryAssessment>,
    /// Deduplicated; ordering is not part of the contract
    pub recommendations: Vec<String>,
    /// Fixed three-item list, identical for every response
    pub next_steps: Vec<String>,
}
