//! REST API endpoints for health risk assessment

use actix_web::{HttpResponse, get, post, web};
use chrono::Utc;
use serde_json::json;

use crate::api::error::ApiError;
use crate::model::risk::{RiskAssessmentRequest, RiskAssessmentResponse};
use crate::service::RiskScorer;

/// Field-level validation performed at the HTTP boundary; the scorer
/// assumes validated input
fn validate(data: &RiskAssessmentRequest) -> Result<(), ApiError> {
    let fail = |message: &str| Err(ApiError::Validation(message.to_string()));

    if data.age <= 0 || data.age >= 120 {
        return fail("age must be between 1 and 119");
    }
    if data.height_cm <= 0.0 {
        return fail("height_cm must be greater than 0");
    }
    if data.weight_kg <= 0.0 {
        return fail("weight_kg must be greater than 0");
    }
    if data.systolic_bp.is_some_and(|v| v <= 0) {
        return fail("systolic_bp must be greater than 0");
    }
    if data.diastolic_bp.is_some_and(|v| v <= 0) {
        return fail("diastolic_bp must be greater than 0");
    }
    for (name, value) in [
        ("cholesterol", data.cholesterol),
        ("hdl", data.hdl),
        ("ldl", data.ldl),
        ("triglycerides", data.triglycerides),
        ("fasting_glucose", data.fasting_glucose),
    ] {
        if value.is_some_and(|v| v < 0.0) {
            return fail(&format!("{} must not be negative", name));
        }
    }
    if data.exercise_minutes_per_week.is_some_and(|v| v < 0) {
        return fail("exercise_minutes_per_week must not be negative");
    }
    if data.sleep_hours.is_some_and(|v| !(0.0..=24.0).contains(&v)) {
        return fail("sleep_hours must be between 0 and 24");
    }
    if data.stress_level.is_some_and(|v| !(0..=10).contains(&v)) {
        return fail("stress_level must be between 0 and 10");
    }
    Ok(())
}

/// Assess health risks based on provided health parameters.
/// Returns risk scores, categories and recommendations.
#[utoipa::path(
    post,
    path = "/api/risk-assessment/assess",
    request_body = RiskAssessmentRequest,
    responses(
        (status = 200, description = "Assessment computed", body = RiskAssessmentResponse),
        (status = 422, description = "Out-of-range input field"),
        (status = 500, description = "Error processing risk assessment")
    ),
    tag = "risk-assessment"
)]
#[post("/api/risk-assessment/assess")]
pub async fn assess(
    scorer: web::Data<RiskScorer>,
    data: web::Json<RiskAssessmentRequest>,
) -> Result<HttpResponse, ApiError> {
    validate(&data)?;
    let response = scorer.assess(&data)?;
    Ok(HttpResponse::Ok().json(response))
}

/// List all risk factors that can be assessed
#[utoipa::path(
    get,
    path = "/api/risk-assessment/factors",
    responses(
        (status = 200, description = "Known risk factors")
    ),
    tag = "risk-assessment"
)]
#[get("/api/risk-assessment/factors")]
pub async fn list_factors() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "risk_factors": [
            {
                "id": "bmi",
                "name": "Body Mass Index",
                "description": "A measure of body fat based on height and weight",
                "input_parameters": ["height_cm", "weight_kg"]
            },
            {
                "id": "blood_pressure",
                "name": "Blood Pressure",
                "description": "The pressure of blood against the walls of arteries",
                "input_parameters": ["systolic_bp", "diastolic_bp"]
            },
            {
                "id": "cholesterol",
                "name": "Cholesterol Levels",
                "description": "Levels of lipids in the blood",
                "input_parameters": ["cholesterol", "hdl", "ldl", "triglycerides"]
            }
        ]
    }))
}

/// Detailed recommendations for a specific risk factor
#[utoipa::path(
    get,
    path = "/api/risk-assessment/recommendations/{risk_factor}",
    params(
        ("risk_factor" = String, Path, description = "Risk factor id")
    ),
    responses(
        (status = 200, description = "Recommendations for the factor"),
        (status = 404, description = "Unknown risk factor")
    ),
    tag = "risk-assessment"
)]
#[get("/api/risk-assessment/recommendations/{risk_factor}")]
pub async fn factor_recommendations(path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let risk_factor = path.into_inner();

    let recommendations = match risk_factor.as_str() {
        "bmi" => json!({
            "underweight": [
                "Consult with a nutritionist for a healthy weight gain plan",
                "Focus on nutrient-dense foods",
                "Include strength training in your exercise routine"
            ],
            "normal": [
                "Maintain your current healthy habits",
                "Regular exercise and balanced diet"
            ],
            "overweight": [
                "Aim for 150-300 minutes of moderate exercise per week",
                "Focus on portion control",
                "Increase intake of fruits, vegetables and whole grains"
            ],
            "obesity": [
                "Consult with healthcare provider for a personalized weight management plan",
                "Set realistic weight loss goals (1-2 pounds per week)",
                "Consider keeping a food and activity journal"
            ]
        }),
        "blood_pressure" => json!({
            "normal": [
                "Maintain healthy lifestyle habits",
                "Check blood pressure annually"
            ],
            "elevated": [
                "Reduce sodium intake",
                "Regular physical activity",
                "Monitor blood pressure monthly"
            ],
            "high": [
                "Consult with a healthcare provider",
                "DASH diet (Dietary Approaches to Stop Hypertension)",
                "Limit alcohol consumption",
                "Stress management techniques"
            ]
        }),
        _ => {
            return Err(ApiError::NotFound(format!(
                "Risk factor '{}' not found",
                risk_factor
            )));
        }
    };

    Ok(HttpResponse::Ok().json(json!({
        "risk_factor": risk_factor,
        "recommendations": recommendations
    })))
}

/// Acknowledge a completed assessment; nothing is persisted in this
/// demonstration backend
#[utoipa::path(
    post,
    path = "/api/risk-assessment/save-assessment",
    responses(
        (status = 200, description = "Assessment acknowledged")
    ),
    tag = "risk-assessment"
)]
#[post("/api/risk-assessment/save-assessment")]
pub async fn save_assessment(_data: web::Json<serde_json::Value>) -> HttpResponse {
    let now = Utc::now();
    HttpResponse::Ok().json(json!({
        "message": "Assessment saved successfully",
        "assessment_id": format!("assessment_{}", now.format("%Y%m%d%H%M%S")),
        "timestamp": now.to_rfc3339()
    }))
}

/// Configure risk assessment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(assess)
        .service(list_factors)
        .service(factor_recommendations)
        .service(save_assessment);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RiskAssessmentRequest {
        RiskAssessmentRequest {
            age: 35,
            gender: "male".to_string(),
            height_cm: 175.0,
            weight_kg: 70.0,
            systolic_bp: Some(120),
            diastolic_bp: Some(80),
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
            sleep_hours: Some(7.5),
            stress_level: Some(5),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(validate(&valid_request()).is_ok());
    }

    #[test]
    fn age_bounds_are_exclusive() {
        let mut data = valid_request();
        data.age = 0;
        assert!(validate(&data).is_err());
        data.age = 120;
        assert!(validate(&data).is_err());
        data.age = 119;
        assert!(validate(&data).is_ok());
    }

    #[test]
    fn out_of_range_optionals_are_rejected() {
        let mut data = valid_request();
        data.cholesterol = Some(-1.0);
        assert!(validate(&data).is_err());

        let mut data = valid_request();
        data.sleep_hours = Some(25.0);
        assert!(validate(&data).is_err());

        let mut data = valid_request();
        data.stress_level = Some(11);
        assert!(validate(&data).is_err());

        let mut data = valid_request();
        data.systolic_bp = Some(0);
        assert!(validate(&data).is_err());
    }

    #[test]
    fn absent_optionals_are_fine() {
        let mut data = valid_request();
        data.systolic_bp = None;
        data.cholesterol = None;
        data.fasting_glucose = None;
        data.exercise_minutes_per_week = None;
        data.sleep_hours = None;
        data.stress_level = None;
        assert!(validate(&data).is_ok());
    }
}
