//! Site search endpoints

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::api::error::ApiError;
use crate::model::search::SearchResponse;
use crate::service::SearchIndex;

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 50;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Search term
    pub q: String,
    /// Restrict to a content type (article, resource, topic)
    pub content_type: Option<String>,
    /// Restrict to a category
    pub category: Option<String>,
    /// Maximum results, 1 to 50
    pub limit: Option<usize>,
}

/// Search site content by keyword
#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Ranked search results", body = SearchResponse),
        (status = 400, description = "Empty query"),
        (status = 422, description = "Out-of-range limit")
    ),
    tag = "search"
)]
#[get("/api/search")]
pub async fn search(
    index: web::Data<SearchIndex>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let term = query.q.trim();
    if term.is_empty() {
        return Err(ApiError::BadRequest(
            "Search query cannot be empty".to_string(),
        ));
    }
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    if limit < 1 || limit > MAX_LIMIT {
        return Err(ApiError::Validation(format!(
            "limit must be between 1 and {}",
            MAX_LIMIT
        )));
    }

    let mut results = index.search(term, query.content_type.as_deref(), query.category.as_deref());
    let total_results = results.len();
    let categories = index.count_by_category(&results);
    results.truncate(limit);

    tracing::debug!(
        query = %term,
        total_results = total_results,
        "Search executed"
    );

    Ok(HttpResponse::Ok().json(SearchResponse {
        query: term.to_string(),
        results,
        total_results,
        categories: Some(categories),
        suggested_queries: Some(index.suggested_queries(term)),
    }))
}

/// Most popular search terms
#[utoipa::path(
    get,
    path = "/api/search/popular",
    responses(
        (status = 200, description = "Popular search terms")
    ),
    tag = "search"
)]
#[get("/api/search/popular")]
pub async fn popular(index: web::Data<SearchIndex>) -> HttpResponse {
    HttpResponse::Ok().json(json!({"popular_searches": index.popular_searches()}))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AutocompleteQuery {
    /// Prefix to complete
    pub q: String,
}

/// Prefix-based query completion
#[utoipa::path(
    get,
    path = "/api/search/autocomplete",
    params(AutocompleteQuery),
    responses(
        (status = 200, description = "Completion suggestions")
    ),
    tag = "search"
)]
#[get("/api/search/autocomplete")]
pub async fn autocomplete(
    index: web::Data<SearchIndex>,
    query: web::Query<AutocompleteQuery>,
) -> HttpResponse {
    HttpResponse::Ok().json(json!({"suggestions": index.autocomplete(query.q.trim())}))
}

/// Configure search routes. The literal `/popular` and `/autocomplete`
/// paths must register before any parameterized sibling.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(popular).service(autocomplete).service(search);
}
