//! Health exploration endpoints: research paper browsing and downloads

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::api::error::ApiError;
use crate::model::exploration::{Paper, PaperListResponse};
use crate::service::PaperLibrary;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PaperQuery {
    /// 1-based page number
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    /// Restrict to a category id
    pub category: Option<String>,
    /// Match against title, abstract and keywords
    pub search: Option<String>,
}

/// Paginated paper listing with category and search filters
#[utoipa::path(
    get,
    path = "/api/health-exploration/papers",
    params(PaperQuery),
    responses(
        (status = 200, description = "Page of papers", body = PaperListResponse)
    ),
    tag = "health-exploration"
)]
#[get("/api/health-exploration/papers")]
pub async fn list_papers(
    library: web::Data<PaperLibrary>,
    query: web::Query<PaperQuery>,
) -> HttpResponse {
    let response = library.list(
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(10),
        query.category.as_deref(),
        query.search.as_deref(),
    );
    HttpResponse::Ok().json(response)
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct FeaturedPapersQuery {
    pub limit: Option<usize>,
}

/// Featured papers for the exploration landing page
#[utoipa::path(
    get,
    path = "/api/health-exploration/papers/featured",
    params(FeaturedPapersQuery),
    responses(
        (status = 200, description = "Featured papers", body = [Paper])
    ),
    tag = "health-exploration"
)]
#[get("/api/health-exploration/papers/featured")]
pub async fn featured_papers(
    library: web::Data<PaperLibrary>,
    query: web::Query<FeaturedPapersQuery>,
) -> HttpResponse {
    HttpResponse::Ok().json(library.featured(query.limit.unwrap_or(3)))
}

/// Paper categories with counts
#[utoipa::path(
    get,
    path = "/api/health-exploration/papers/categories",
    responses(
        (status = 200, description = "Paper categories")
    ),
    tag = "health-exploration"
)]
#[get("/api/health-exploration/papers/categories")]
pub async fn paper_categories(library: web::Data<PaperLibrary>) -> HttpResponse {
    HttpResponse::Ok().json(library.categories())
}

/// Fetch a paper and record the view
#[utoipa::path(
    get,
    path = "/api/health-exploration/papers/{paper_id}",
    params(
        ("paper_id" = String, Path, description = "Paper id")
    ),
    responses(
        (status = 200, description = "The paper", body = Paper),
        (status = 404, description = "Paper not found")
    ),
    tag = "health-exploration"
)]
#[get("/api/health-exploration/papers/{paper_id}")]
pub async fn get_paper(
    library: web::Data<PaperLibrary>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let paper = library.get_and_record_view(&path)?;
    Ok(HttpResponse::Ok().json(paper))
}

/// Record a download; actual file serving is out of scope for this
/// demonstration backend
#[utoipa::path(
    get,
    path = "/api/health-exploration/papers/{paper_id}/download",
    params(
        ("paper_id" = String, Path, description = "Paper id")
    ),
    responses(
        (status = 200, description = "Download acknowledged"),
        (status = 404, description = "Paper not found")
    ),
    tag = "health-exploration"
)]
#[get("/api/health-exploration/papers/{paper_id}/download")]
pub async fn download_paper(
    library: web::Data<PaperLibrary>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let paper = library.record_download(&path)?;
    tracing::info!(paper_id = %paper.id, downloads = paper.downloads, "Paper download recorded");
    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Download initiated for paper: {}", paper.title),
        "paper_id": paper.id,
        "downloads": paper.downloads,
        "note": "In a real implementation, this would return a file download."
    })))
}

/// Configure health exploration routes. The literal `/papers/featured` and
/// `/papers/categories` paths must register before `/papers/{paper_id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(featured_papers)
        .service(paper_categories)
        .service(list_papers)
        .service(get_paper)
        .service(download_paper);
}
