//! Research paper exploration types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaperCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Paper {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub publication_date: DateTime<Utc>,
    pub journal: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Category ids
    pub categories: Vec<String>,
    pub keywords: Vec<String>,
    pub is_featured: bool,
    pub download_url: String,
    pub views: u64,
    pub downloads: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaperListResponse {
    pub papers: Vec<Paper>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}
