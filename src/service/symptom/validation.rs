//! Normalization of extracted symptom analyses
//!
//! The model occasionally returns partial or oddly-shaped output; every field
//! is repaired to a safe default before the response reaches the caller.

use crate::model::symptoms::{Condition, SymptomResponse};
use crate::service::symptom::{ExtractedAnalysis, ExtractedCondition};

const UNKNOWN: &str = "Unknown";
const CONSULT_RECOMMENDATION: &str = "Please consult with a healthcare professional.";

/// Returned when extraction fails entirely
pub fn fallback_response() -> SymptomResponse {
    SymptomResponse {
        possible_conditions: vec![Condition {
            condition: "Could not determine".to_string(),
            probability: UNKNOWN.to_string(),
        }],
        recommendations: vec![CONSULT_RECOMMENDATION.to_string()],
        severity_level: UNKNOWN.to_string(),
        seek_medical_attention: true,
    }
}

/// Repair an extracted analysis into a well-formed response
pub fn normalize(extracted: ExtractedAnalysis) -> SymptomResponse {
    let mut possible_conditions: Vec<Condition> = extracted
        .possible_conditions
        .into_iter()
        .map(normalize_condition)
        .collect();
    if possible_conditions.is_empty() {
        possible_conditions.push(Condition {
            condition: UNKNOWN.to_string(),
            probability: UNKNOWN.to_string(),
        });
    }

    let mut recommendations: Vec<String> = extracted
        .recommendations
        .into_iter()
        .filter(|r| !r.trim().is_empty())
        .collect();
    if recommendations.is_empty() {
        recommendations.push(CONSULT_RECOMMENDATION.to_string());
    }

    let severity_level = match extracted.severity_level {
        Some(level) if !level.trim().is_empty() => level,
        _ => UNKNOWN.to_string(),
    };

    SymptomResponse {
        possible_conditions,
        recommendations,
        severity_level,
        // Err on the side of caution when the model leaves this out
        seek_medical_attention: extracted.seek_medical_attention.unwrap_or(true),
    }
}

fn normalize_condition(extracted: ExtractedCondition) -> Condition {
    let condition = match extracted.condition {
        Some(name) if !name.trim().is_empty() => name,
        _ => "Unknown condition".to_string(),
    };
    let probability = match extracted.probability {
        Some(p) if !p.trim().is_empty() => p,
        _ => UNKNOWN.to_string(),
    };
    Condition {
        condition,
        probability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_extraction_gets_safe_defaults() {
        let response = normalize(ExtractedAnalysis {
            possible_conditions: vec![],
            recommendations: vec![],
            severity_level: None,
            seek_medical_attention: None,
        });

        assert_eq!(response.possible_conditions[0].condition, "Unknown");
        assert_eq!(response.recommendations, vec![CONSULT_RECOMMENDATION]);
        assert_eq!(response.severity_level, "Unknown");
        assert!(response.seek_medical_attention);
    }

    #[test]
    fn partial_conditions_are_repaired() {
        let response = normalize(ExtractedAnalysis {
            possible_conditions: vec![
                ExtractedCondition {
                    condition: Some("Migraine".to_string()),
                    probability: None,
                },
                ExtractedCondition {
                    condition: Some("  ".to_string()),
                    probability: Some("Low".to_string()),
                },
            ],
            recommendations: vec!["Rest and hydrate.".to_string()],
            severity_level: Some("Low".to_string()),
            seek_medical_attention: Some(false),
        });

        assert_eq!(
            response.possible_conditions[0],
            Condition {
                condition: "Migraine".to_string(),
                probability: "Unknown".to_string(),
            }
        );
        assert_eq!(response.possible_conditions[1].condition, "Unknown condition");
        assert_eq!(response.possible_conditions[1].probability, "Low");
        assert!(!response.seek_medical_attention);
    }

    #[test]
    fn blank_recommendations_are_dropped() {
        let response = normalize(ExtractedAnalysis {
            possible_conditions: vec![],
            recommendations: vec!["".to_string(), "   ".to_string()],
            severity_level: Some("Medium".to_string()),
            seek_medical_attention: Some(true),
        });

        assert_eq!(response.recommendations, vec![CONSULT_RECOMMENDATION]);
    }

    #[test]
    fn fallback_always_advises_medical_attention() {
        let response = fallback_response();
        assert!(response.seek_medical_attention);
        assert_eq!(response.possible_conditions[0].condition, "Could not determine");
    }
}
