//! Research paper library with view/download counters
//!
//! Counters are per-process bookkeeping behind an owned `RwLock`; a real
//! deployment would persist them.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{TimeZone, Utc};

use crate::model::exploration::{Paper, PaperCategory, PaperListResponse};

/// Error type for paper lookups
#[derive(Debug, thiserror::Error)]
pub enum PaperLibraryError {
    #[error("Paper with ID {0} not found")]
    NotFound(String),
}

/// Owned store of research papers and their categories
pub struct PaperLibrary {
    papers: RwLock<HashMap<String, Paper>>,
    /// Presentation order of the seeded papers
    order: Vec<String>,
    categories: Vec<PaperCategory>,
}

impl Default for PaperLibrary {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_papers() -> Vec<Paper> {
    vec![
        Paper {
            id: "1".to_string(),
            title: "Advances in Cardiovascular Disease Prevention".to_string(),
            authors: vec!["John Doe".to_string(), "Jane Smith".to_string()],
            publication_date: Utc.with_ymd_and_hms(2023, 5, 15, 0, 0, 0).unwrap(),
            journal: "Journal of Cardiology".to_string(),
            abstract_text: "This paper explores the latest advances in preventing cardiovascular diseases through lifestyle modifications and pharmacological interventions.".to_string(),
            categories: vec!["1".to_string()],
            keywords: vec![
                "cardiovascular".to_string(),
                "prevention".to_string(),
                "lifestyle".to_string(),
                "pharmacology".to_string(),
            ],
            is_featured: true,
            download_url: "/api/health-exploration/papers/1/download".to_string(),
            views: 250,
            downloads: 120,
        },
        Paper {
            id: "2".to_string(),
            title: "Understanding Alzheimer's Disease Progression".to_string(),
            authors: vec!["Emily Johnson".to_string(), "Michael Brown".to_string()],
            publication_date: Utc.with_ymd_and_hms(2023, 6, 22, 0, 0, 0).unwrap(),
            journal: "Neurology Today".to_string(),
            abstract_text: "A comprehensive review of the latest research on Alzheimer's disease progression and potential treatment approaches.".to_string(),
            categories: vec!["2".to_string()],
            keywords: vec![
                "alzheimer's".to_string(),
                "neurodegeneration".to_string(),
                "cognitive decline".to_string(),
                "treatment".to_string(),
            ],
            is_featured: true,
            download_url: "/api/health-exploration/papers/2/download".to_string(),
            views: 180,
            downloads: 95,
        },
        Paper {
            id: "3".to_string(),
            title: "Impact of COVID-19 on Mental Health".to_string(),
            authors: vec!["Sarah Wilson".to_string(), "Robert Davis".to_string()],
            publication_date: Utc.with_ymd_and_hms(2023, 3, 10, 0, 0, 0).unwrap(),
            journal: "Journal of Public Health".to_string(),
            abstract_text: "This study examines the psychological impact of the COVID-19 pandemic on different population groups.".to_string(),
            categories: vec!["4".to_string(), "5".to_string()],
            keywords: vec![
                "COVID-19".to_string(),
                "mental health".to_string(),
                "pandemic".to_string(),
                "psychological impact".to_string(),
            ],
            is_featured: true,
            download_url: "/api/health-exploration/papers/3/download".to_string(),
            views: 320,
            downloads: 210,
        },
        Paper {
            id: "4".to_string(),
            title: "Novel Approaches to Cancer Immunotherapy".to_string(),
            authors: vec!["David Lee".to_string(), "Susan Miller".to_string()],
            publication_date: Utc.with_ymd_and_hms(2023, 7, 5, 0, 0, 0).unwrap(),
            journal: "Cancer Research".to_string(),
            abstract_text: "This paper discusses innovative approaches to cancer immunotherapy that have shown promising results in clinical trials.".to_string(),
            categories: vec!["3".to_string()],
            keywords: vec![
                "cancer".to_string(),
                "immunotherapy".to_string(),
                "clinical trials".to_string(),
                "oncology".to_string(),
            ],
            is_featured: false,
            download_url: "/api/health-exploration/papers/4/download".to_string(),
            views: 150,
            downloads: 80,
        },
        Paper {
            id: "5".to_string(),
            title: "Genetic Factors in Heart Disease".to_string(),
            authors: vec!["Linda Wilson".to_string(), "Thomas Clark".to_string()],
            publication_date: Utc.with_ymd_and_hms(2023, 4, 18, 0, 0, 0).unwrap(),
            journal: "Genetics in Medicine".to_string(),
            abstract_text: "An analysis of genetic factors that contribute to the development and progression of heart disease.".to_string(),
            categories: vec!["1".to_string()],
            keywords: vec![
                "genetics".to_string(),
                "heart disease".to_string(),
                "risk factors".to_string(),
                "genomics".to_string(),
            ],
            is_featured: false,
            download_url: "/api/health-exploration/papers/5/download".to_string(),
            views: 130,
            downloads: 65,
        },
    ]
}

impl PaperLibrary {
    pub fn new() -> Self {
        let seeded = seed_papers();
        let order = seeded.iter().map(|p| p.id.clone()).collect();
        let papers = seeded.into_iter().map(|p| (p.id.clone(), p)).collect();

        Self {
            papers: RwLock::new(papers),
            order,
            categories: vec![
                PaperCategory {
                    id: "1".to_string(),
                    name: "Cardiology".to_string(),
                    description: Some(
                        "Studies related to heart and cardiovascular systems".to_string(),
                    ),
                    count: 5,
                },
                PaperCategory {
                    id: "2".to_string(),
                    name: "Neurology".to_string(),
                    description: Some("Studies related to the nervous system".to_string()),
                    count: 3,
                },
                PaperCategory {
                    id: "3".to_string(),
                    name: "Oncology".to_string(),
                    description: Some("Studies related to cancer research".to_string()),
                    count: 7,
                },
                PaperCategory {
                    id: "4".to_string(),
                    name: "Infectious Diseases".to_string(),
                    description: Some("Studies related to infectious diseases".to_string()),
                    count: 4,
                },
                PaperCategory {
                    id: "5".to_string(),
                    name: "Public Health".to_string(),
                    description: Some("Studies related to public health initiatives".to_string()),
                    count: 2,
                },
            ],
        }
    }

    fn snapshot(&self) -> Vec<Paper> {
        let papers = self
            .papers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.order
            .iter()
            .filter_map(|id| papers.get(id).cloned())
            .collect()
    }

    /// List papers with category/search filters and page clamping
    pub fn list(
        &self,
        page: usize,
        per_page: usize,
        category: Option<&str>,
        search: Option<&str>,
    ) -> PaperListResponse {
        let filtered: Vec<Paper> = self
            .snapshot()
            .into_iter()
            .filter(|p| category.is_none_or(|c| p.categories.iter().any(|pc| pc == c)))
            .filter(|p| {
                search.is_none_or(|term| {
                    let term = term.to_lowercase();
                    p.title.to_lowercase().contains(&term)
                        || p.abstract_text.to_lowercase().contains(&term)
                        || p.keywords.iter().any(|k| k.to_lowercase().contains(&term))
                })
            })
            .collect();

        let total = filtered.len();
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page);

        // Clamp out-of-range page numbers instead of failing
        let page = if page < 1 {
            1
        } else if total_pages > 0 && page > total_pages {
            total_pages
        } else {
            page
        };

        let start = (page - 1) * per_page;
        let papers = filtered.into_iter().skip(start).take(per_page).collect();

        PaperListResponse {
            papers,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    /// Fetch a paper and record the view
    pub fn get_and_record_view(&self, paper_id: &str) -> Result<Paper, PaperLibraryError> {
        let mut papers = self
            .papers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let paper = papers
            .get_mut(paper_id)
            .ok_or_else(|| PaperLibraryError::NotFound(paper_id.to_string()))?;
        paper.views += 1;
        Ok(paper.clone())
    }

    /// Record a download and return the updated paper
    pub fn record_download(&self, paper_id: &str) -> Result<Paper, PaperLibraryError> {
        let mut papers = self
            .papers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let paper = papers
            .get_mut(paper_id)
            .ok_or_else(|| PaperLibraryError::NotFound(paper_id.to_string()))?;
        paper.downloads += 1;
        Ok(paper.clone())
    }

    pub fn categories(&self) -> &[PaperCategory] {
        &self.categories
    }

    pub fn featured(&self, limit: usize) -> Vec<Paper> {
        self.snapshot()
            .into_iter()
            .filter(|p| p.is_featured)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_and_clamping() {
        let library = PaperLibrary::new();

        let first = library.list(1, 2, None, None);
        assert_eq!(first.total, 5);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.papers.len(), 2);
        assert_eq!(first.papers[0].id, "1");

        // Page beyond the end clamps to the last page
        let clamped = library.list(99, 2, None, None);
        assert_eq!(clamped.page, 3);
        assert_eq!(clamped.papers.len(), 1);
        assert_eq!(clamped.papers[0].id, "5");
    }

    #[test]
    fn category_and_search_filters() {
        let library = PaperLibrary::new();

        let cardiology = library.list(1, 10, Some("1"), None);
        assert_eq!(cardiology.total, 2);

        let by_keyword = library.list(1, 10, None, Some("immunotherapy"));
        assert_eq!(by_keyword.total, 1);
        assert_eq!(by_keyword.papers[0].id, "4");

        let by_abstract = library.list(1, 10, None, Some("psychological"));
        assert_eq!(by_abstract.total, 1);
        assert_eq!(by_abstract.papers[0].id, "3");
    }

    #[test]
    fn views_and_downloads_increment() {
        let library = PaperLibrary::new();

        let before = library.get_and_record_view("1").unwrap();
        let after = library.get_and_record_view("1").unwrap();
        assert_eq!(after.views, before.views + 1);

        let downloaded = library.record_download("1").unwrap();
        assert_eq!(downloaded.downloads, 121);

        assert!(matches!(
            library.get_and_record_view("404"),
            Err(PaperLibraryError::NotFound(_))
        ));
    }

    #[test]
    fn featured_papers_are_limited() {
        let library = PaperLibrary::new();
        let featured = library.featured(2);
        assert_eq!(featured.len(), 2);
        assert!(featured.iter().all(|p| p.is_featured));
    }
}
