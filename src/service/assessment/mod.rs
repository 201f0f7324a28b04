//! Risk assessment scoring engine
//!
//! Pure computation over a single request: BMI, per-category scores
//! (cardiovascular, metabolic), weighted overall score, recommendations and
//! a heuristic health age. No I/O and no shared mutable state, so the scorer
//! is safe to call concurrently from any worker.

use std::collections::BTreeMap;

use crate::model::risk::{RiskAssessmentRequest, RiskAssessmentResponse};

pub mod aggregate;
pub mod bmi;
pub mod cardiovascular;
pub mod error;
pub mod metabolic;

pub use aggregate::CategoryWeights;
pub use error::ScoringError;

/// Combines the category calculators into one `RiskAssessmentResponse`
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    weights: CategoryWeights,
}

impl RiskScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom category weight table instead of the defaults
    pub fn with_weights(weights: CategoryWeights) -> Self {
        Self { weights }
    }

    /// Assess health risks for one validated request.
    ///
    /// The HTTP boundary is responsible for field-level validation; height
    /// and weight are still re-checked here so an invalid value can never
    /// silently produce a NaN or infinite BMI.
    pub fn assess(
        &self,
        data: &RiskAssessmentRequest,
    ) -> Result<RiskAssessmentResponse, ScoringError> {
        tracing::info!(
            age = data.age,
            gender = %data.gender,
            "Processing risk assessment request"
        );

        if data.height_cm <= 0.0 || data.weight_kg <= 0.0 {
            return Err(ScoringError::Validation(
                "height_cm and weight_kg must be strictly positive".to_string(),
            ));
        }

        let bmi = bmi::calculate_bmi(data.weight_kg, data.height_cm);
        if !bmi.is_finite() {
            return Err(ScoringError::Computation(format!(
                "BMI is not finite for weight {} kg and height {} cm",
                data.weight_kg, data.height_cm
            )));
        }
        let bmi_category = bmi::bmi_category(bmi);

        let cardiovascular = cardiovascular::assess(data);
        let metabolic = metabolic::assess(data);

        let mut category_scores = BTreeMap::new();
        category_scores.insert("cardiovascular".to_string(), cardiovascular.risk_score);
        category_scores.insert("metabolic".to_string(), metabolic.risk_score);

        let overall = self.weights.weighted_mean(&category_scores);
        let overall_risk_score = aggregate::normalize_score(overall);

        let all_factors: Vec<_> = cardiovascular
            .risk_factors
            .iter()
            .chain(metabolic.risk_factors.iter())
            .collect();
        let recommendations =
            aggregate::build_recommendations(&all_factors, data.exercise_minutes_per_week);

        let health_age =
            aggregate::health_age(data.age, bmi, data.smoking, data.exercise_minutes_per_week);

        let mut risk_categories = BTreeMap::new();
        risk_categories.insert("cardiovascular".to_string(), cardiovascular);
        risk_categories.insert("metabolic".to_string(), metabolic);

        tracing::info!(
            overall_risk_score = overall_risk_score,
            "Risk assessment completed successfully"
        );

        Ok(RiskAssessmentResponse {
            bmi,
            bmi_category,
            health_age,
            overall_risk_score,
            risk_categories,
            recommendations,
            next_steps: aggregate::NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::risk::{BmiCategory, RiskLevel};

    fn healthy_profile() -> RiskAssessmentRequest {
        RiskAssessmentRequest {
            age: 35,
            gender: "male".to_string(),
            height_cm: 175.0,
            weight_kg: 70.0,
            systolic_bp: Some(120),
            diastolic_bp: Some(80),
            cholesterol: Some(180.0),
            hdl: Some(50.0),
            ldl: Some(100.0),
            triglycerides: Some(150.0),
            fasting_glucose: Some(85.0),
            smoking: false,
            alcohol_consumption: Some("moderate".to_string()),
            exercise_minutes_per_week: Some(150),
            family_history: None,
            chronic_conditions: None,
            medications: None,
            sleep_hours: Some(7.5),
            stress_level: Some(5),
        }
    }

    #[test]
    fn healthy_profile_end_to_end() {
        let response = RiskScorer::new().assess(&healthy_profile()).unwrap();

        assert_eq!(response.bmi, 22.9);
        assert_eq!(response.bmi_category, BmiCategory::NormalWeight);
        assert_eq!(response.health_age, 35);
        assert_eq!(response.overall_risk_score, 0.0);

        let cardiovascular = &response.risk_categories["cardiovascular"];
        assert_eq!(cardiovascular.risk_score, 0);
        assert_eq!(cardiovascular.risk_level, RiskLevel::Low);

        let metabolic = &response.risk_categories["metabolic"];
        assert_eq!(metabolic.risk_score, 0);
        assert_eq!(metabolic.risk_level, RiskLevel::Low);

        // 150 minutes is exactly on target and no factors fired, so only the
        // canned defaults remain
        assert_eq!(
            response.recommendations,
            vec![
                "Maintain your current healthy lifestyle.".to_string(),
                "Regular check-ups are recommended.".to_string(),
            ]
        );
        assert_eq!(response.next_steps.len(), 3);
    }

    #[test]
    fn sedentary_smoker_end_to_end() {
        let mut data = healthy_profile();
        data.smoking = true;
        data.exercise_minutes_per_week = Some(0);

        let response = RiskScorer::new().assess(&data).unwrap();

        let cardiovascular = &response.risk_categories["cardiovascular"];
        assert_eq!(cardiovascular.risk_score, 4);
        assert_eq!(cardiovascular.risk_level, RiskLevel::Moderate);
        assert_eq!(cardiovascular.risk_factors.len(), 1);
        assert_eq!(cardiovascular.risk_factors[0].factor, "Smoking");

        let metabolic = &response.risk_categories["metabolic"];
        assert_eq!(metabolic.risk_score, 0);
        assert_eq!(metabolic.risk_level, RiskLevel::Low);

        // (4 * 0.4 + 0 * 0.3) / 0.7 * 10
        let expected = (4.0 * 0.4) / 0.7 * 10.0;
        assert!((response.overall_risk_score - expected).abs() < 1e-9);

        assert_eq!(response.health_age, 42);
        assert!(response
            .recommendations
            .iter()
            .any(|r| r.starts_with("Quitting smoking")));
        assert!(response
            .recommendations
            .contains(&aggregate::EXERCISE_RECOMMENDATION.to_string()));
    }

    #[test]
    fn assessment_is_idempotent() {
        let scorer = RiskScorer::new();
        let data = healthy_profile();

        let first = serde_json::to_string(&scorer.assess(&data).unwrap()).unwrap();
        let second = serde_json::to_string(&scorer.assess(&data).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn non_positive_anthropometrics_are_rejected() {
        let mut data = healthy_profile();
        data.height_cm = 0.0;
        assert!(matches!(
            RiskScorer::new().assess(&data),
            Err(ScoringError::Validation(_))
        ));

        let mut data = healthy_profile();
        data.weight_kg = -1.0;
        assert!(matches!(
            RiskScorer::new().assess(&data),
            Err(ScoringError::Validation(_))
        ));
    }

    #[test]
    fn metabolic_factor_value_matches_reported_bmi() {
        let mut data = healthy_profile();
        data.weight_kg = 95.0;
        data.height_cm = 174.5;

        let response = RiskScorer::new().assess(&data).unwrap();
        let metabolic = &response.risk_categories["metabolic"];
        assert_eq!(metabolic.risk_factors[0].value, response.bmi);
    }
}
