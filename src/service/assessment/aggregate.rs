//! Overall score aggregation, recommendations and health age
//!
//! Category weights act as relative emphasis, not a probability
//! distribution; they intentionally do not sum to 1.

use std::collections::BTreeMap;

use crate::model::risk::RiskFactor;

/// Weekly exercise minutes below which the exercise reminder is emitted
const EXERCISE_TARGET_MINUTES: i32 = 150;

pub const EXERCISE_RECOMMENDATION: &str =
    "Aim for at least 150 minutes of moderate exercise per week.";

/// Substituted when no factor-driven recommendation was produced
pub const DEFAULT_RECOMMENDATIONS: [&str; 2] = [
    "Maintain your current healthy lifestyle.",
    "Regular check-ups are recommended.",
];

/// Fixed next steps, identical for every response
pub const NEXT_STEPS: [&str; 3] = [
    "Consult with a healthcare provider to discuss these results",
    "Set up regular health check-ups",
    "Track your progress using our health tracker",
];

/// Extensible category weight table (category name -> weight).
///
/// New categories can be registered without touching the aggregation
/// logic itself.
#[derive(Debug, Clone)]
pub struct CategoryWeights {
    weights: BTreeMap<String, f64>,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        let mut weights = BTreeMap::new();
        weights.insert("cardiovascular".to_string(), 0.4);
        weights.insert("metabolic".to_string(), 0.3);
        Self { weights }
    }
}

impl CategoryWeights {
    pub fn insert(&mut self, category: &str, weight: f64) {
        self.weights.insert(category.to_string(), weight);
    }

    /// Weighted mean of category scores: sum(score * weight) / sum(weights).
    /// Categories without a reported score contribute 0. Falls back to 0 if
    /// the weight sum is zero.
    pub fn weighted_mean(&self, scores: &BTreeMap<String, i32>) -> f64 {
        let sum_weights: f64 = self.weights.values().sum();
        if sum_weights <= 0.0 {
            return 0.0;
        }

        let weighted_sum: f64 = self
            .weights
            .iter()
            .map(|(category, weight)| {
                let score = scores.get(category).copied().unwrap_or(0);
                score as f64 * weight
            })
            .sum();

        weighted_sum / sum_weights
    }
}

/// Scale the weighted mean to [0, 100]
pub fn normalize_score(overall: f64) -> f64 {
    (overall * 10.0).clamp(0.0, 100.0)
}

/// Collect recommendations from all triggered factors, deduplicated in
/// first-occurrence order, with the exercise reminder appended whenever the
/// reported weekly minutes are absent or below target. If nothing applies,
/// the canned defaults are substituted.
pub fn build_recommendations(
    risk_factors: &[&RiskFactor],
    exercise_minutes_per_week: Option<i32>,
) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    for factor in risk_factors {
        if !recommendations.contains(&factor.recommendation) {
            recommendations.push(factor.recommendation.clone());
        }
    }

    let needs_exercise_reminder = match exercise_minutes_per_week {
        None => true,
        Some(minutes) => minutes < EXERCISE_TARGET_MINUTES,
    };
    if needs_exercise_reminder && !recommendations.contains(&EXERCISE_RECOMMENDATION.to_string()) {
        recommendations.push(EXERCISE_RECOMMENDATION.to_string());
    }

    if recommendations.is_empty() {
        recommendations.extend(DEFAULT_RECOMMENDATIONS.iter().map(|s| s.to_string()));
    }

    recommendations
}

/// Heuristic health age: chronological age adjusted for obesity, smoking and
/// exercise. Adjustments are cumulative and intentionally unclamped.
pub fn health_age(
    age: i32,
    bmi: f64,
    smoking: bool,
    exercise_minutes_per_week: Option<i32>,
) -> i32 {
    let mut health_age = age;
    if bmi > 30.0 {
        health_age += 5;
    }
    if smoking {
        health_age += 7;
    }
    if exercise_minutes_per_week.is_some_and(|minutes| minutes > EXERCISE_TARGET_MINUTES) {
        health_age -= 3;
    }
    health_age
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_mean_divides_by_weight_sum() {
        let weights = CategoryWeights::default();
        let mut scores = BTreeMap::new();
        scores.insert("cardiovascular".to_string(), 4);
        scores.insert("metabolic".to_string(), 0);

        // (4 * 0.4 + 0 * 0.3) / 0.7
        let overall = weights.weighted_mean(&scores);
        assert!((overall - 1.6 / 0.7).abs() < 1e-9);
    }

    #[test]
    fn missing_category_score_counts_as_zero() {
        let weights = CategoryWeights::default();
        let overall = weights.weighted_mean(&BTreeMap::new());
        assert_eq!(overall, 0.0);
    }

    #[test]
    fn zero_weight_sum_falls_back_to_zero() {
        let weights = CategoryWeights {
            weights: BTreeMap::new(),
        };
        assert_eq!(weights.weighted_mean(&BTreeMap::new()), 0.0);
    }

    #[test]
    fn extra_categories_participate_without_code_changes() {
        let mut weights = CategoryWeights::default();
        weights.insert("respiratory", 0.3);

        let mut scores = BTreeMap::new();
        scores.insert("cardiovascular".to_string(), 2);
        scores.insert("metabolic".to_string(), 2);
        scores.insert("respiratory".to_string(), 10);

        // (2*0.4 + 2*0.3 + 10*0.3) / 1.0
        let overall = weights.weighted_mean(&scores);
        assert!((overall - 4.4).abs() < 1e-9);
    }

    #[test]
    fn normalized_score_is_clamped() {
        assert_eq!(normalize_score(0.0), 0.0);
        assert_eq!(normalize_score(5.0), 50.0);
        assert_eq!(normalize_score(15.0), 100.0);
        assert_eq!(normalize_score(-1.0), 0.0);
    }

    #[test]
    fn duplicate_recommendations_collapse() {
        let a = RiskFactor::new("A", 1.0, "Same advice.");
        let b = RiskFactor::new("B", 2.0, "Same advice.");
        let recommendations = build_recommendations(&[&a, &b], Some(200));
        assert_eq!(recommendations, vec!["Same advice.".to_string()]);
    }

    #[test]
    fn exercise_reminder_fires_below_target_or_when_absent() {
        assert!(build_recommendations(&[], Some(0)).contains(&EXERCISE_RECOMMENDATION.to_string()));
        assert!(build_recommendations(&[], None).contains(&EXERCISE_RECOMMENDATION.to_string()));
        // Exactly 150 is on target, no reminder
        assert!(!build_recommendations(&[], Some(150))
            .contains(&EXERCISE_RECOMMENDATION.to_string()));
    }

    #[test]
    fn empty_set_substitutes_canned_defaults() {
        let recommendations = build_recommendations(&[], Some(150));
        assert_eq!(
            recommendations,
            DEFAULT_RECOMMENDATIONS
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn health_age_adjustments_are_cumulative_and_unclamped() {
        assert_eq!(health_age(35, 22.9, false, Some(150)), 35);
        assert_eq!(health_age(35, 31.0, true, None), 47);
        assert_eq!(health_age(35, 22.9, false, Some(200)), 32);
        // Exactly 150 minutes does not earn the exercise credit
        assert_eq!(health_age(35, 22.9, false, Some(150)), 35);
        // Young obese smoker, no clamp
        assert_eq!(health_age(18, 35.0, true, None), 30);
    }
}
