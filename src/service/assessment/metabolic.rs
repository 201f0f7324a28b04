//! Metabolic risk scoring

use crate::model::risk::{CategoryAssessment, RiskAssessmentRequest, RiskFactor, RiskLevel};
use crate::service::assessment::bmi::calculate_bmi;

const BMI_OBESITY_THRESHOLD: f64 = 30.0;
const BMI_OVERWEIGHT_THRESHOLD: f64 = 25.0;
const FASTING_GLUCOSE_THRESHOLD: f64 = 100.0;

pub fn assess(data: &RiskAssessmentRequest) -> CategoryAssessment {
    let mut risk_score = 0;
    let mut risk_factors = Vec::new();

    // Same BMI computation (and rounding) as the top-level calculator,
    // so the emitted factor value matches the response's bmi field
    let bmi = calculate_bmi(data.weight_kg, data.height_cm);
    if bmi > BMI_OBESITY_THRESHOLD {
        risk_score += 3;
        risk_factors.push(RiskFactor::new(
            "Obesity",
            bmi,
            "Focus on weight management through diet and exercise.",
        ));
    } else if bmi > BMI_OVERWEIGHT_THRESHOLD {
        risk_score += 1;
        risk_factors.push(RiskFactor::new(
            "Overweight",
            bmi,
            "Modest weight loss can improve metabolic health.",
        ));
    }

    if let Some(fasting_glucose) = data.fasting_glucose {
        if fasting_glucose > FASTING_GLUCOSE_THRESHOLD {
            risk_score += 2;
            risk_factors.push(RiskFactor::new(
                "Elevated Fasting Glucose",
                fasting_glucose,
                "Monitor blood sugar and consider dietary adjustments.",
            ));
        }
    }

    CategoryAssessment {
        risk_score,
        risk_level: risk_level(risk_score),
        risk_factors,
    }
}

/// Strict descending thresholds; a score of exactly 4 is Moderate,
/// exactly 1 is Low.
fn risk_level(score: i32) -> RiskLevel {
    if score > 4 {
        RiskLevel::High
    } else if score > 1 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(weight_kg: f64, height_cm: f64, fasting_glucose: Option<f64>) -> RiskAssessmentRequest {
        RiskAssessmentRequest {
            age: 35,
            gender: "female".to_string(),
            height_cm,
            weight_kg,
            systolic_bp: None,
            diastolic_bp: None,
            cholesterol: None,
            hdl: None,
            ldl: None,
            triglycerides: None,
            fasting_glucose,
            smoking: false,
            alcohol_consumption: None,
            exercise_minutes_per_week: None,
            family_history: None,
            chronic_conditions: None,
            medications: None,
            sleep_hours: None,
            stress_level: None,
        }
    }

    #[test]
    fn normal_weight_scores_zero() {
        let result = assess(&request(70.0, 175.0, Some(85.0)));
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn bmi_branches_are_mutually_exclusive() {
        // BMI 31.2: only the obesity factor fires
        let result = assess(&request(95.0, 174.5, None));
        assert_eq!(result.risk_score, 3);
        assert_eq!(result.risk_factors.len(), 1);
        assert_eq!(result.risk_factors[0].factor, "Obesity");

        // BMI 27.8: only the overweight factor fires
        let result = assess(&request(85.0, 175.0, None));
        assert_eq!(result.risk_score, 1);
        assert_eq!(result.risk_factors.len(), 1);
        assert_eq!(result.risk_factors[0].factor, "Overweight");
    }

    #[test]
    fn elevated_glucose_adds_two() {
        let result = assess(&request(70.0, 175.0, Some(110.0)));
        assert_eq!(result.risk_score, 2);
        assert_eq!(result.risk_level, RiskLevel::Moderate);
        assert_eq!(result.risk_factors[0].factor, "Elevated Fasting Glucose");
        assert_eq!(result.risk_factors[0].value, 110.0);
    }

    #[test]
    fn obesity_with_glucose_is_high() {
        let result = assess(&request(95.0, 174.5, Some(110.0)));
        assert_eq!(result.risk_score, 5);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn level_boundaries_use_strict_comparisons() {
        assert_eq!(risk_level(1), RiskLevel::Low);
        assert_eq!(risk_level(2), RiskLevel::Moderate);
        assert_eq!(risk_level(4), RiskLevel::Moderate);
        assert_eq!(risk_level(5), RiskLevel::High);
    }
}
