//! AI symptom checker endpoints

use actix_web::{HttpResponse, post, web};

use crate::api::error::ApiError;
use crate::model::symptoms::{SymptomRequest, SymptomResponse};
use crate::service::SymptomAnalysisService;

/// Analyze submitted symptoms and return possible conditions,
/// recommendations and a severity estimate
#[utoipa::path(
    post,
    path = "/api/symptom-checker/analyze",
    request_body = SymptomRequest,
    responses(
        (status = 200, description = "Analysis result", body = SymptomResponse),
        (status = 422, description = "Empty symptom list"),
        (status = 500, description = "OpenAI API unavailable or misconfigured")
    ),
    tag = "symptom-checker"
)]
#[post("/api/symptom-checker/analyze")]
pub async fn analyze(
    service: web::Data<SymptomAnalysisService>,
    data: web::Json<SymptomRequest>,
) -> Result<HttpResponse, ApiError> {
    let sanitized = SymptomAnalysisService::sanitize(&data);
    if sanitized.symptoms.is_empty() {
        return Err(ApiError::Validation(
            "at least one symptom is required".to_string(),
        ));
    }

    let response = service.analyze(&sanitized).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Canned analysis response for frontend integration testing; never
/// calls the OpenAI API
#[utoipa::path(
    post,
    path = "/api/symptom-checker/test",
    request_body = SymptomRequest,
    responses(
        (status = 200, description = "Static test analysis", body = SymptomResponse)
    ),
    tag = "symptom-checker"
)]
#[post("/api/symptom-checker/test")]
pub async fn test_analysis(_data: web::Json<SymptomRequest>) -> HttpResponse {
    HttpResponse::Ok().json(SymptomAnalysisService::test_response())
}

/// Configure symptom checker routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze).service(test_analysis);
}
