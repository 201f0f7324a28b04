//! Site search over the static content set
//!
//! Simple additive keyword matching: title hits weigh 10, summary 5, body
//! and tag hits 3 each, with a snippet highlight extracted around body
//! matches. Results are ordered by descending relevance.

use std::collections::BTreeMap;

use crate::model::search::SearchResult;

const TITLE_WEIGHT: f64 = 10.0;
const SUMMARY_WEIGHT: f64 = 5.0;
const CONTENT_WEIGHT: f64 = 3.0;
const TAG_WEIGHT: f64 = 3.0;

/// Snippet context on each side of a body match, in bytes
const SNIPPET_CONTEXT: usize = 20;

const MAX_SUGGESTIONS: usize = 5;
const MAX_AUTOCOMPLETE: usize = 10;

struct SearchItem {
    id: &'static str,
    title: &'static str,
    summary: &'static str,
    content: &'static str,
    content_type: &'static str,
    url: &'static str,
    categories: &'static [&'static str],
    tags: &'static [&'static str],
}

/// Owned search index over the mock content set
pub struct SearchIndex {
    items: Vec<SearchItem>,
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchIndex {
    pub fn new() -> Self {
        Self {
            items: vec![
                SearchItem {
                    id: "article1",
                    title: "اهمیت غربالگری سرطان روده بزرگ",
                    summary: "بررسی اهمیت غربالگری منظم برای تشخیص زودهنگام سرطان روده بزرگ",
                    content: "غربالگری منظم سرطان روده بزرگ می‌تواند به تشخیص زودهنگام و افزایش شانس درمان کمک کند. توصیه می‌شود افراد بالای ۴۵ سال آزمایش‌های غربالگری را انجام دهند.",
                    content_type: "article",
                    url: "/articles/article1",
                    categories: &["سرطان", "غربالگری", "سلامت گوارش"],
                    tags: &["سرطان روده بزرگ", "کولونوسکوپی", "آزمایش مدفوع"],
                },
                SearchItem {
                    id: "article2",
                    title: "راهنمای جامع فشار خون بالا",
                    summary: "همه چیز درباره پیشگیری و مدیریت فشار خون بالا",
                    content: "فشار خون بالا یکی از عوامل خطر اصلی برای بیماری‌های قلبی است. تغییرات سبک زندگی مانند ورزش منظم، کاهش مصرف نمک و حفظ وزن سالم می‌تواند به کنترل فشار خون کمک کند.",
                    content_type: "article",
                    url: "/articles/article2",
                    categories: &["قلب و عروق", "فشار خون"],
                    tags: &["فشار خون بالا", "سبک زندگی سالم", "رژیم غذایی"],
                },
                SearchItem {
                    id: "resource1",
                    title: "ویدیو آموزشی: نحوه اندازه‌گیری صحیح فشار خون",
                    summary: "آموزش گام به گام اندازه‌گیری دقیق فشار خون در منزل",
                    content: "در این ویدیو آموزشی، نحوه صحیح اندازه‌گیری فشار خون در منزل را یاد می‌گیرید. اندازه‌گیری منظم فشار خون به شما کمک می‌کند تا از وضعیت سلامت خود آگاه باشید.",
                    content_type: "resource",
                    url: "/resources/resource1",
                    categories: &["آموزش", "فشار خون"],
                    tags: &["سنجش فشار خون", "خودمراقبتی"],
                },
                SearchItem {
                    id: "topic1",
                    title: "پیشگیری از بیماری‌های قلبی",
                    summary: "اطلاعات جامع درباره پیشگیری از بیماری‌های قلبی",
                    content: "بیماری‌های قلبی یکی از علل اصلی مرگ‌ومیر در جهان هستند. با رعایت اصول پیشگیرانه می‌توان خطر ابتلا به این بیماری‌ها را کاهش داد.",
                    content_type: "topic",
                    url: "/health-topics/topic1",
                    categories: &["قلب و عروق"],
                    tags: &["پیشگیری", "بیماری قلبی", "سلامت قلب"],
                },
            ],
        }
    }

    /// Search the content set, optionally filtered by content type and
    /// category, ordered by descending relevance
    pub fn search(
        &self,
        query: &str,
        content_type: Option<&str>,
        category: Option<&str>,
    ) -> Vec<SearchResult> {
        let query = query.to_lowercase();
        let mut results = Vec::new();

        for item in &self.items {
            if content_type.is_some_and(|t| item.content_type != t) {
                continue;
            }
            if category.is_some_and(|c| !item.categories.contains(&c)) {
                continue;
            }

            let mut relevance_score = 0.0;
            let mut highlights = Vec::new();

            if item.title.to_lowercase().contains(&query) {
                relevance_score += TITLE_WEIGHT;
                highlights.push(item.title.to_string());
            }
            if item.summary.to_lowercase().contains(&query) {
                relevance_score += SUMMARY_WEIGHT;
                highlights.push(item.summary.to_string());
            }
            let content_lower = item.content.to_lowercase();
            if let Some(position) = content_lower.find(&query) {
                relevance_score += CONTENT_WEIGHT;
                highlights.push(snippet(item.content, position, query.len()));
            }
            for tag in item.tags {
                if tag.to_lowercase().contains(&query) {
                    relevance_score += TAG_WEIGHT;
                    highlights.push(format!("Tag: {}", tag));
                }
            }

            if relevance_score > 0.0 {
                results.push(SearchResult {
                    id: item.id.to_string(),
                    title: item.title.to_string(),
                    summary: item.summary.to_string(),
                    content_type: item.content_type.to_string(),
                    url: item.url.to_string(),
                    relevance_score,
                    highlights: Some(highlights),
                });
            }
        }

        results.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results
    }

    /// Number of matched results per category, with every known category
    /// present (zero when unmatched)
    pub fn count_by_category(&self, results: &[SearchResult]) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for item in &self.items {
            for category in item.categories {
                counts.entry(category.to_string()).or_insert(0);
            }
        }

        for result in results {
            if let Some(item) = self.items.iter().find(|i| i.id == result.id) {
                for category in item.categories {
                    if let Some(count) = counts.get_mut(*category) {
                        *count += 1;
                    }
                }
            }
        }

        counts
    }

    /// Hardcoded related-query suggestions keyed off common health terms
    pub fn suggested_queries(&self, query: &str) -> Vec<String> {
        let mut suggestions: Vec<&str> = Vec::new();

        if query.contains("فشار خون") {
            suggestions.extend(["کاهش فشار خون", "داروهای فشار خون", "رژیم غذایی فشار خون"]);
        } else if query.contains("سرطان") {
            suggestions.extend(["غربالگری سرطان", "پیشگیری از سرطان", "علائم هشدار سرطان"]);
        } else if query.contains("قلب") {
            suggestions.extend(["سلامت قلب", "بیماری های قلبی", "ورزش برای قلب"]);
        }

        suggestions.extend(["پیشگیری", "سبک زندگی سالم", "تغذیه سالم"]);

        let mut unique: Vec<String> = Vec::new();
        for suggestion in suggestions {
            if !unique.iter().any(|s| s == suggestion) {
                unique.push(suggestion.to_string());
            }
            if unique.len() == MAX_SUGGESTIONS {
                break;
            }
        }
        unique
    }

    /// Popular search terms (static; real analytics are out of scope)
    pub fn popular_searches(&self) -> Vec<&'static str> {
        vec![
            "فشار خون",
            "دیابت",
            "کلسترول",
            "سرطان سینه",
            "کرونا",
            "واکسن آنفولانزا",
            "ویتامین دی",
            "خواب سالم",
            "کاهش وزن",
            "استرس",
        ]
    }

    /// Prefix autocomplete, shortest matches first, at most ten
    pub fn autocomplete(&self, query: &str) -> Vec<String> {
        let all_terms = [
            "فشار خون بالا",
            "فشار خون پایین",
            "فشار خون در بارداری",
            "سرطان سینه",
            "سرطان روده بزرگ",
            "سرطان پوست",
            "دیابت نوع ۱",
            "دیابت نوع ۲",
            "دیابت بارداری",
            "کلسترول بالا",
            "کلسترول خوب و بد",
            "کمبود ویتامین دی",
            "ویتامین دی در بارداری",
            "خواب کافی",
            "اختلالات خواب",
            "کاهش وزن سالم",
            "کاهش وزن سریع",
            "استرس و اضطراب",
            "مدیریت استرس",
        ];

        let query = query.to_lowercase();
        let mut matching: Vec<String> = all_terms
            .iter()
            .filter(|term| term.to_lowercase().starts_with(&query))
            .map(|term| term.to_string())
            .collect();

        matching.sort_by_key(|term| term.len());
        matching.truncate(MAX_AUTOCOMPLETE);
        matching
    }
}

/// Extract a short context window around a body match, clamped to char
/// boundaries
fn snippet(content: &str, match_start: usize, match_len: usize) -> String {
    let mut start = match_start.saturating_sub(SNIPPET_CONTEXT);
    while start > 0 && !content.is_char_boundary(start) {
        start -= 1;
    }

    let mut end = (match_start + match_len + SNIPPET_CONTEXT).min(content.len());
    while end < content.len() && !content.is_char_boundary(end) {
        end += 1;
    }

    format!("...{}...", &content[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_matches_outrank_body_matches() {
        let index = SearchIndex::new();
        let results = index.search("فشار خون", None, None);

        assert!(results.len() >= 2);
        // article2 matches in title, summary, content and tags
        assert_eq!(results[0].id, "article2");
        assert!(results[0].relevance_score > results[1].relevance_score);
        for pair in results.windows(2) {
            assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }

    #[test]
    fn filters_restrict_results() {
        let index = SearchIndex::new();

        let typed = index.search("فشار خون", Some("resource"), None);
        assert_eq!(typed.len(), 1);
        assert_eq!(typed[0].id, "resource1");

        let categorized = index.search("قلبی", None, Some("قلب و عروق"));
        assert!(categorized.iter().all(|r| r.id != "article1"));
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let index = SearchIndex::new();
        assert!(index.search("zzz-nothing", None, None).is_empty());
    }

    #[test]
    fn body_matches_carry_a_snippet_highlight() {
        let index = SearchIndex::new();
        let results = index.search("کولونوسکوپی", None, None);
        assert_eq!(results.len(), 1);
        let highlights = results[0].highlights.as_ref().unwrap();
        assert!(highlights.iter().any(|h| h.starts_with("Tag: ")));
    }

    #[test]
    fn category_counts_cover_all_known_categories() {
        let index = SearchIndex::new();
        let results = index.search("فشار خون", None, None);
        let counts = index.count_by_category(&results);

        assert!(counts.contains_key("سرطان"));
        assert!(counts["فشار خون"] >= 2);
    }

    #[test]
    fn suggestions_are_unique_and_capped() {
        let index = SearchIndex::new();
        let suggestions = index.suggested_queries("فشار خون");
        assert!(suggestions.len() <= 5);
        let mut deduped = suggestions.clone();
        deduped.dedup();
        assert_eq!(suggestions, deduped);
        assert!(suggestions.contains(&"کاهش فشار خون".to_string()));
    }

    #[test]
    fn autocomplete_is_prefix_based_shortest_first() {
        let index = SearchIndex::new();
        let suggestions = index.autocomplete("فشار خون");
        assert!(!suggestions.is_empty());
        assert!(suggestions.iter().all(|s| s.starts_with("فشار خون")));
        for pair in suggestions.windows(2) {
            assert!(pair[0].len() <= pair[1].len());
        }

        assert!(index.autocomplete("xyz").is_empty());
    }

    #[test]
    fn snippet_respects_multibyte_boundaries() {
        let content = "غربالگری منظم سرطان روده بزرگ می‌تواند کمک کند";
        let position = content.to_lowercase().find("سرطان").unwrap();
        let snippet = snippet(content, position, "سرطان".len());
        assert!(snippet.starts_with("..."));
        assert!(snippet.contains("سرطان"));
    }
}
