//! Preventive content catalog types: articles, resources, categories

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    /// ISO date, used for newest-first ordering
    pub published_date: String,
    pub image_url: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    /// Estimated read time in minutes
    pub read_time: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PreventiveResource {
    pub id: String,
    pub title: String,
    pub description: String,
    /// article, video, infographic, ...
    pub resource_type: String,
    pub url: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthTopic {
    pub id: String,
    pub name: String,
    pub description: String,
    pub related_categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Screening {
    pub name: String,
    pub frequency: String,
    pub recommended_ages: String,
    pub gender: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PreventiveTip {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
}
