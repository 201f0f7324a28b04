use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod model;
mod service;

use model::Config;
use service::{
    ChatStore, ConnectionRegistry, ContentCatalog, LlmClient, PaperLibrary, RiskScorer,
    SearchIndex, SymptomAnalysisService,
};

fn build_cors(config: &Config) -> Cors {
    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if config.cors.allows_any_origin() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.cors.origins {
            cors = cors.allowed_origin(origin);
        }
        if config.cors.allow_credentials {
            cors = cors.supports_credentials();
        }
    }

    cors
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    // The LLM client is optional; without it only symptom analysis degrades
    let llm_client = if config.has_valid_openai_key() {
        match LlmClient::new(config.openai_api_key.as_deref().unwrap_or_default()) {
            Ok(client) => {
                tracing::info!("OpenAI client initialized");
                Some(client)
            }
            Err(e) => {
                tracing::warn!(error = %e, "OpenAI client unavailable, symptom analysis disabled");
                None
            }
        }
    } else {
        tracing::warn!("No valid OpenAI API key configured, symptom analysis disabled");
        None
    };

    let scorer = web::Data::new(RiskScorer::new());
    let symptom_service = web::Data::new(SymptomAnalysisService::new(llm_client));
    let chat_store = web::Data::new(ChatStore::new());
    let connections = web::Data::new(ConnectionRegistry::new());
    let search_index = web::Data::new(SearchIndex::new());
    let catalog = web::Data::new(ContentCatalog::new());
    let paper_library = web::Data::new(PaperLibrary::new());
    let config_data = web::Data::new(config.clone());

    tracing::info!(
        bind_addr = %bind_addr,
        frontend_url = %config.frontend_url,
        "Starting Wellness Sentinel server"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&config_data))
            .app_data(config_data.clone())
            .app_data(scorer.clone())
            .app_data(symptom_service.clone())
            .app_data(chat_store.clone())
            .app_data(connections.clone())
            .app_data(search_index.clone())
            .app_data(catalog.clone())
            .app_data(paper_library.clone())
            .configure(api::health::configure)
            .configure(api::risk::configure)
            .configure(api::symptoms::configure)
            .configure(api::chat::configure)
            .configure(api::search::configure)
            .configure(api::content::configure)
            .configure(api::exploration::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
