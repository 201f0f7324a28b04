//! Cardiovascular risk scoring
//!
//! Accumulates an integer score from independent, non-exclusive conditions;
//! every condition that applies fires.

use crate::model::risk::{CategoryAssessment, RiskAssessmentRequest, RiskFactor, RiskLevel};

const AGE_THRESHOLD: i32 = 55;
const SYSTOLIC_BP_THRESHOLD: i32 = 140;
const CHOLESTEROL_THRESHOLD: f64 = 200.0;

pub fn assess(data: &RiskAssessmentRequest) -> CategoryAssessment {
    let mut risk_score = 0;
    let mut risk_factors = Vec::new();

    if data.age > AGE_THRESHOLD {
        risk_score += 2;
        risk_factors.push(RiskFactor::new(
            "Age",
            data.age as f64,
            "Age is a non-modifiable risk factor. Focus on other health parameters.",
        ));
    }

    if let Some(systolic_bp) = data.systolic_bp {
        if systolic_bp > SYSTOLIC_BP_THRESHOLD {
            risk_score += 3;
            risk_factors.push(RiskFactor::new(
                "High Blood Pressure",
                systolic_bp as f64,
                "Consider dietary changes and regular monitoring.",
            ));
        }
    }

    if let Some(cholesterol) = data.cholesterol {
        if cholesterol > CHOLESTEROL_THRESHOLD {
            risk_score += 2;
            risk_factors.push(RiskFactor::new(
                "High Total Cholesterol",
                cholesterol,
                "Limit saturated fats and increase physical activity.",
            ));
        }
    }

    if data.smoking {
        risk_score += 4;
        risk_factors.push(RiskFactor::new(
            "Smoking",
            1.0,
            "Quitting smoking significantly reduces cardiovascular risk.",
        ));
    }

    CategoryAssessment {
        risk_score,
        risk_level: risk_level(risk_score),
        risk_factors,
    }
}

/// Thresholds are evaluated in descending order with strict comparisons;
/// a score of exactly 5 is Moderate, exactly 2 is Low.
fn risk_level(score: i32) -> RiskLevel {
    if score > 5 {
        RiskLevel::High
    } else if score > 2 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> RiskAssessmentRequest {
        RiskAssessmentRequest {
            age: 35,
            gender: "male".to_string(),
            height_cm: 175.0,
            weight_kg: 70.0,
            systolic_bp: Some(120),
            diastolic_bp: None,
            cholesterol: Some(180.0),
            hdl: None,
            ldl: None,
            triglycerides: None,
            fasting_glucose: Some(85.0),
            smoking: false,
            alcohol_consumption: None,
            exercise_minutes_per_week: Some(150),
            family_history: None,
            chronic_conditions: None,
            medications: None,
            sleep_hours: None,
            stress_level: None,
        }
    }

    #[test]
    fn healthy_profile_scores_zero() {
        let result = assess(&baseline());
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(result.risk_factors.is_empty());
    }

    #[test]
    fn each_factor_adds_its_fixed_delta() {
        let mut data = baseline();
        data.age = 60;
        assert_eq!(assess(&data).risk_score, 2);

        let mut data = baseline();
        data.systolic_bp = Some(150);
        assert_eq!(assess(&data).risk_score, 3);

        let mut data = baseline();
        data.cholesterol = Some(220.0);
        assert_eq!(assess(&data).risk_score, 2);

        let mut data = baseline();
        data.smoking = true;
        assert_eq!(assess(&data).risk_score, 4);
    }

    #[test]
    fn factors_accumulate() {
        let mut data = baseline();
        data.age = 60;
        data.systolic_bp = Some(150);
        data.cholesterol = Some(220.0);
        data.smoking = true;

        let result = assess(&data);
        assert_eq!(result.risk_score, 11);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.risk_factors.len(), 4);
    }

    #[test]
    fn missing_optional_fields_never_fire() {
        let mut data = baseline();
        data.systolic_bp = None;
        data.cholesterol = None;
        assert_eq!(assess(&data).risk_score, 0);
    }

    #[test]
    fn level_boundaries_use_strict_comparisons() {
        assert_eq!(risk_level(2), RiskLevel::Low);
        assert_eq!(risk_level(3), RiskLevel::Moderate);
        assert_eq!(risk_level(5), RiskLevel::Moderate);
        assert_eq!(risk_level(6), RiskLevel::High);
    }

    #[test]
    fn smoking_alone_is_moderate() {
        let mut data = baseline();
        data.smoking = true;

        let result = assess(&data);
        assert_eq!(result.risk_level, RiskLevel::Moderate);
        assert_eq!(result.risk_factors[0].factor, "Smoking");
        assert_eq!(result.risk_factors[0].value, 1.0);
    }
}
