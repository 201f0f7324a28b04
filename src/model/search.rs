//! Site search types

use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// article, resource, topic, ...
    pub content_type: String,
    pub url: String,
    pub relevance_score: f64,
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total_results: usize,
    pub categories: Option<BTreeMap<String, usize>>,
    pub suggested_queries: Option<Vec<String>>,
}
