//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::model;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wellness Sentinel API",
        description = "Preventive health backend: risk assessment, symptom analysis, \
                       health chat, content catalog, search and research exploration"
    ),
    paths(
        crate::api::health::root,
        crate::api::health::health_check,
        crate::api::health::debug_config,
        crate::api::risk::assess,
        crate::api::risk::list_factors,
        crate::api::risk::factor_recommendations,
        crate::api::risk::save_assessment,
        crate::api::symptoms::analyze,
        crate::api::symptoms::test_analysis,
        crate::api::chat::register,
        crate::api::chat::login,
        crate::api::chat::logout,
        crate::api::chat::create_room,
        crate::api::chat::list_rooms,
        crate::api::chat::get_room,
        crate::api::chat::room_messages,
        crate::api::chat::send_message,
        crate::api::search::search,
        crate::api::search::popular,
        crate::api::search::autocomplete,
        crate::api::content::articles,
        crate::api::content::featured_articles,
        crate::api::content::article,
        crate::api::content::resources,
        crate::api::content::resource,
        crate::api::content::categories,
        crate::api::content::category,
        crate::api::content::subcategories,
        crate::api::content::health_topics,
        crate::api::content::health_calendar,
        crate::api::content::preventive_tips,
        crate::api::exploration::list_papers,
        crate::api::exploration::featured_papers,
        crate::api::exploration::paper_categories,
        crate::api::exploration::get_paper,
        crate::api::exploration::download_paper,
    ),
    components(schemas(
        crate::api::health::WelcomeResponse,
        crate::api::health::HealthStatus,
        crate::api::health::ConfigSnapshot,
        model::risk::RiskAssessmentRequest,
        model::risk::RiskAssessmentResponse,
        model::risk::CategoryAssessment,
        model::risk::RiskFactor,
        model::risk::RiskLevel,
        model::risk::BmiCategory,
        model::symptoms::SymptomRequest,
        model::symptoms::SymptomResponse,
        model::symptoms::Condition,
        model::chat::RegisterRequest,
        model::chat::LoginRequest,
        model::chat::ChatMessage,
        model::chat::ChatRoom,
        model::chat::ChatRoomDetails,
        model::search::SearchResult,
        model::search::SearchResponse,
        model::content::Article,
        model::content::PreventiveResource,
        model::content::Category,
        model::content::HealthTopic,
        model::content::Screening,
        model::content::PreventiveTip,
        model::exploration::Paper,
        model::exploration::PaperCategory,
        model::exploration::PaperListResponse,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok().content_type("text/yaml").body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI YAML");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_content_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/preventive-featured/articles",
            "/api/preventive-featured/articles/{article_id}",
            "/api/preventive-featured/featured-articles",
            "/api/preventive-featured/resources",
            "/api/preventive-featured/resources/{resource_id}",
            "/api/preventive-featured/categories",
            "/api/preventive-featured/categories/{category_id}",
            "/api/preventive-featured/categories/{category_id}/subcategories",
            "/api/preventive-featured/health-topics",
            "/api/preventive-featured/health-calendar",
            "/api/preventive-featured/preventive-tips",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path: {}", path);
        }
    }

    #[test]
    fn document_covers_core_operations() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/risk-assessment/assess"));
        assert!(doc.paths.paths.contains_key("/api/symptom-checker/analyze"));
        assert!(doc.paths.paths.contains_key("/api/search"));
        assert!(doc
            .paths
            .paths
            .contains_key("/api/health-exploration/papers/{paper_id}/download"));
    }
}
