//! Root, health check and configuration debug endpoints

use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::Config;

/// Configuration snapshot exposed by the debug endpoint; never includes
/// the API key itself
#[derive(Serialize, ToSchema)]
pub struct ConfigSnapshot {
    pub frontend_url: String,
    pub cors_origins: Vec<String>,
    pub has_openai_key: bool,
    pub port: u16,
    pub host: String,
}

impl From<&Config> for ConfigSnapshot {
    fn from(config: &Config) -> Self {
        Self {
            frontend_url: config.frontend_url.clone(),
            cors_origins: config.cors.origins.clone(),
            has_openai_key: config.has_valid_openai_key(),
            port: config.port,
            host: config.host.clone(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub openai_configured: bool,
    pub cors_origins: Vec<String>,
}

/// Welcome endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = WelcomeResponse)
    ),
    tag = "health"
)]
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse {
        message: "Welcome to Wellness Sentinel - Preventive Health Backend API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

/// Health check with system status
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    ),
    tag = "health"
)]
#[get("/api/health")]
pub async fn health_check(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        openai_configured: config.has_valid_openai_key(),
        cors_origins: config.cors.origins.clone(),
    })
}

/// Configuration debug endpoint, intended for deployment troubleshooting
#[utoipa::path(
    get,
    path = "/debug/config",
    responses(
        (status = 200, description = "Effective configuration", body = ConfigSnapshot)
    ),
    tag = "health"
)]
#[get("/debug/config")]
pub async fn debug_config(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(ConfigSnapshot::from(config.get_ref()))
}

/// Configure root and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root).service(health_check).service(debug_config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reports_key_presence_without_exposing_it() {
        let mut config = Config::default();
        config.openai_api_key = Some("sk-0123456789012345678901234".to_string());

        let snapshot = ConfigSnapshot::from(&config);
        assert!(snapshot.has_openai_key);
        assert_eq!(snapshot.port, 8000);

        let body = serde_json::to_string(&snapshot).unwrap();
        assert!(!body.contains("sk-"));
    }
}
