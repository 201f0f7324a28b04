//! Preventive content endpoints: articles, resources, categories, health
//! topics, screening calendar and tips

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::api::error::ApiError;
use crate::model::content::{Article, Category, PreventiveResource};
use crate::service::ContentCatalog;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleQuery {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// List articles, newest first
#[utoipa::path(
    get,
    path = "/api/preventive-featured/articles",
    params(ArticleQuery),
    responses(
        (status = 200, description = "Matching articles", body = [Article])
    ),
    tag = "preventive-content"
)]
#[get("/api/preventive-featured/articles")]
pub async fn articles(
    catalog: web::Data<ContentCatalog>,
    query: web::Query<ArticleQuery>,
) -> HttpResponse {
    let articles = catalog.articles(
        query.category.as_deref(),
        query.tag.as_deref(),
        query.limit.unwrap_or(10),
        query.offset.unwrap_or(0),
    );
    HttpResponse::Ok().json(articles)
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct FeaturedQuery {
    pub limit: Option<usize>,
}

/// Most recent articles for homepage display
#[utoipa::path(
    get,
    path = "/api/preventive-featured/featured-articles",
    params(FeaturedQuery),
    responses(
        (status = 200, description = "Featured articles", body = [Article])
    ),
    tag = "preventive-content"
)]
#[get("/api/preventive-featured/featured-articles")]
pub async fn featured_articles(
    catalog: web::Data<ContentCatalog>,
    query: web::Query<FeaturedQuery>,
) -> HttpResponse {
    HttpResponse::Ok().json(catalog.featured_articles(query.limit.unwrap_or(3)))
}

/// Fetch a single article
#[utoipa::path(
    get,
    path = "/api/preventive-featured/articles/{article_id}",
    params(
        ("article_id" = String, Path, description = "Article id")
    ),
    responses(
        (status = 200, description = "The article", body = Article),
        (status = 404, description = "Article not found")
    ),
    tag = "preventive-content"
)]
#[get("/api/preventive-featured/articles/{article_id}")]
pub async fn article(
    catalog: web::Data<ContentCatalog>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let article_id = path.into_inner();
    let article = catalog
        .article(&article_id)
        .ok_or_else(|| ApiError::NotFound(format!("Article with ID {} not found", article_id)))?;
    Ok(HttpResponse::Ok().json(article))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ResourceQuery {
    pub category: Option<String>,
    pub resource_type: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// List preventive resources
#[utoipa::path(
    get,
    path = "/api/preventive-featured/resources",
    params(ResourceQuery),
    responses(
        (status = 200, description = "Matching resources", body = [PreventiveResource])
    ),
    tag = "preventive-content"
)]
#[get("/api/preventive-featured/resources")]
pub async fn resources(
    catalog: web::Data<ContentCatalog>,
    query: web::Query<ResourceQuery>,
) -> HttpResponse {
    let resources = catalog.resources(
        query.category.as_deref(),
        query.resource_type.as_deref(),
        query.limit.unwrap_or(10),
        query.offset.unwrap_or(0),
    );
    HttpResponse::Ok().json(resources)
}

/// Fetch a single resource
#[utoipa::path(
    get,
    path = "/api/preventive-featured/resources/{resource_id}",
    params(
        ("resource_id" = String, Path, description = "Resource id")
    ),
    responses(
        (status = 200, description = "The resource", body = PreventiveResource),
        (status = 404, description = "Resource not found")
    ),
    tag = "preventive-content"
)]
#[get("/api/preventive-featured/resources/{resource_id}")]
pub async fn resource(
    catalog: web::Data<ContentCatalog>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let resource_id = path.into_inner();
    let resource = catalog
        .resource(&resource_id)
        .ok_or_else(|| ApiError::NotFound(format!("Resource with ID {} not found", resource_id)))?;
    Ok(HttpResponse::Ok().json(resource))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CategoryQuery {
    /// Restrict to children of this category
    pub parent_id: Option<String>,
}

/// List content categories, optionally children of a parent
#[utoipa::path(
    get,
    path = "/api/preventive-featured/categories",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Categories", body = [Category])
    ),
    tag = "preventive-content"
)]
#[get("/api/preventive-featured/categories")]
pub async fn categories(
    catalog: web::Data<ContentCatalog>,
    query: web::Query<CategoryQuery>,
) -> HttpResponse {
    HttpResponse::Ok().json(catalog.categories(query.parent_id.as_deref()))
}

/// Fetch a single category
#[utoipa::path(
    get,
    path = "/api/preventive-featured/categories/{category_id}",
    params(
        ("category_id" = String, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "The category", body = Category),
        (status = 404, description = "Category not found")
    ),
    tag = "preventive-content"
)]
#[get("/api/preventive-featured/categories/{category_id}")]
pub async fn category(
    catalog: web::Data<ContentCatalog>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let category_id = path.into_inner();
    let category = catalog
        .category(&category_id)
        .ok_or_else(|| ApiError::NotFound(format!("Category with ID {} not found", category_id)))?;
    Ok(HttpResponse::Ok().json(category))
}

/// Children of a parent category
#[utoipa::path(
    get,
    path = "/api/preventive-featured/categories/{category_id}/subcategories",
    params(
        ("category_id" = String, Path, description = "Parent category id")
    ),
    responses(
        (status = 200, description = "Subcategories", body = [Category])
    ),
    tag = "preventive-content"
)]
#[get("/api/preventive-featured/categories/{category_id}/subcategories")]
pub async fn subcategories(
    catalog: web::Data<ContentCatalog>,
    path: web::Path<String>,
) -> HttpResponse {
    HttpResponse::Ok().json(catalog.subcategories(&path))
}

/// List health topics
#[utoipa::path(
    get,
    path = "/api/preventive-featured/health-topics",
    responses(
        (status = 200, description = "Health topics")
    ),
    tag = "preventive-content"
)]
#[get("/api/preventive-featured/health-topics")]
pub async fn health_topics(catalog: web::Data<ContentCatalog>) -> HttpResponse {
    HttpResponse::Ok().json(json!({"topics": catalog.health_topics()}))
}

/// Recommended screening calendar
#[utoipa::path(
    get,
    path = "/api/preventive-featured/health-calendar",
    responses(
        (status = 200, description = "Screening schedule")
    ),
    tag = "preventive-content"
)]
#[get("/api/preventive-featured/health-calendar")]
pub async fn health_calendar(catalog: web::Data<ContentCatalog>) -> HttpResponse {
    HttpResponse::Ok().json(json!({"screenings": catalog.health_calendar()}))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TipsQuery {
    pub category: Option<String>,
}

/// Preventive tips, optionally filtered by category
#[utoipa::path(
    get,
    path = "/api/preventive-featured/preventive-tips",
    params(TipsQuery),
    responses(
        (status = 200, description = "Tips")
    ),
    tag = "preventive-content"
)]
#[get("/api/preventive-featured/preventive-tips")]
pub async fn preventive_tips(
    catalog: web::Data<ContentCatalog>,
    query: web::Query<TipsQuery>,
) -> HttpResponse {
    HttpResponse::Ok().json(json!({"tips": catalog.preventive_tips(query.category.as_deref())}))
}

/// Configure preventive content routes. Literal article/resource paths
/// register before their `{id}` siblings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(featured_articles)
        .service(articles)
        .service(article)
        .service(resources)
        .service(resource)
        .service(categories)
        .service(subcategories)
        .service(category)
        .service(health_topics)
        .service(health_calendar)
        .service(preventive_tips);
}
