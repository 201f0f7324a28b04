//! Static preventive-content catalog: articles, resources, categories,
//! topics, screening calendar and tips

use crate::model::content::{
    Article, Category, HealthTopic, PreventiveResource, PreventiveTip, Screening,
};

/// Owned catalog of mock preventive-health content
pub struct ContentCatalog {
    articles: Vec<Article>,
    resources: Vec<PreventiveResource>,
    categories: Vec<Category>,
    topics: Vec<HealthTopic>,
    screenings: Vec<Screening>,
    tips: Vec<PreventiveTip>,
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentCatalog {
    pub fn new() -> Self {
        Self {
            articles: vec![
                Article {
                    id: "article1".to_string(),
                    title: "اهمیت غربالگری سرطان روده بزرگ".to_string(),
                    summary: "بررسی اهمیت غربالگری منظم برای تشخیص زودهنگام سرطان روده بزرگ"
                        .to_string(),
                    content: "محتوای مقاله در مورد غربالگری سرطان روده بزرگ...".to_string(),
                    author: "دکتر محمد حسینی".to_string(),
                    published_date: "2023-10-15".to_string(),
                    image_url: Some("/images/colon-cancer-screening.jpg".to_string()),
                    categories: vec![
                        "سرطان".to_string(),
                        "غربالگری".to_string(),
                        "سلامت گوارش".to_string(),
                    ],
                    tags: vec![
                        "سرطان روده بزرگ".to_string(),
                        "کولونوسکوپی".to_string(),
                        "آزمایش مدفوع".to_string(),
                    ],
                    read_time: 8,
                },
                Article {
                    id: "article2".to_string(),
                    title: "راهنمای جامع فشار خون بالا".to_string(),
                    summary: "همه چیز درباره پیشگیری و مدیریت فشار خون بالا".to_string(),
                    content: "محتوای مقاله در مورد فشار خون بالا...".to_string(),
                    author: "دکتر زهرا کریمی".to_string(),
                    published_date: "2023-09-22".to_string(),
                    image_url: Some("/images/hypertension-guide.jpg".to_string()),
                    categories: vec!["قلب و عروق".to_string(), "فشار خون".to_string()],
                    tags: vec![
                        "فشار خون بالا".to_string(),
                        "سبک زندگی سالم".to_string(),
                        "رژیم غذایی".to_string(),
                    ],
                    read_time: 12,
                },
            ],
            resources: vec![
                PreventiveResource {
                    id: "resource1".to_string(),
                    title: "ویدیو آموزشی: نحوه اندازه‌گیری صحیح فشار خون".to_string(),
                    description: "آموزش گام به گام اندازه‌گیری دقیق فشار خون در منزل".to_string(),
                    resource_type: "video".to_string(),
                    url: "/resources/blood-pressure-measurement-video".to_string(),
                    categories: vec!["آموزش".to_string(), "فشار خون".to_string()],
                    tags: vec!["سنجش فشار خون".to_string(), "خودمراقبتی".to_string()],
                },
                PreventiveResource {
                    id: "resource2".to_string(),
                    title: "اینفوگرافیک: علائم هشدار دهنده سکته مغزی".to_string(),
                    description: "تشخیص سریع علائم سکته مغزی می‌تواند زندگی‌بخش باشد".to_string(),
                    resource_type: "infographic".to_string(),
                    url: "/resources/stroke-warning-signs-infographic".to_string(),
                    categories: vec!["مغز و اعصاب".to_string(), "اورژانس".to_string()],
                    tags: vec!["سکته مغزی".to_string(), "علائم هشدار".to_string()],
                },
            ],
            categories: vec![
                Category {
                    id: "cat1".to_string(),
                    name: "قلب و عروق".to_string(),
                    description: "مطالب مرتبط با سلامت قلب و سیستم گردش خون".to_string(),
                    parent_id: None,
                },
                Category {
                    id: "cat2".to_string(),
                    name: "فشار خون".to_string(),
                    description: "مطالب مرتبط با پیشگیری و مدیریت فشار خون".to_string(),
                    parent_id: Some("cat1".to_string()),
                },
                Category {
                    id: "cat3".to_string(),
                    name: "سرطان".to_string(),
                    description: "مطالب مرتبط با پیشگیری، تشخیص زودهنگام و درمان سرطان"
                        .to_string(),
                    parent_id: None,
                },
                Category {
                    id: "cat4".to_string(),
                    name: "تغذیه".to_string(),
                    description: "مطالب مرتبط با تغذیه سالم و رژیم غذایی".to_string(),
                    parent_id: None,
                },
            ],
            topics: vec![
                HealthTopic {
                    id: "topic1".to_string(),
                    name: "پیشگیری از بیماری‌های قلبی".to_string(),
                    description: "اطلاعات جامع درباره پیشگیری از بیماری‌های قلبی".to_string(),
                    related_categories: vec!["cat1".to_string()],
                },
                HealthTopic {
                    id: "topic2".to_string(),
                    name: "سبک زندگی سالم".to_string(),
                    description: "راهنمای جامع برای داشتن سبک زندگی سالم".to_string(),
                    related_categories: vec!["cat4".to_string()],
                },
                HealthTopic {
                    id: "topic3".to_string(),
                    name: "غربالگری‌های ضروری".to_string(),
                    description: "آشنایی با آزمایشات غربالگری مهم در سنین مختلف".to_string(),
                    related_categories: vec!["cat3".to_string()],
                },
            ],
            screenings: vec![
                Screening {
                    name: "فشار خون".to_string(),
                    frequency: "سالانه".to_string(),
                    recommended_ages: "۱۸ سال به بالا".to_string(),
                    gender: "همه".to_string(),
                },
                Screening {
                    name: "کلسترول".to_string(),
                    frequency: "هر ۴-۶ سال".to_string(),
                    recommended_ages: "۲۰ سال به بالا".to_string(),
                    gender: "همه".to_string(),
                },
                Screening {
                    name: "ماموگرافی".to_string(),
                    frequency: "هر ۱-۲ سال".to_string(),
                    recommended_ages: "۴۰-۷۵ سال".to_string(),
                    gender: "زنان".to_string(),
                },
                Screening {
                    name: "کولونوسکوپی".to_string(),
                    frequency: "هر ۱۰ سال".to_string(),
                    recommended_ages: "۴۵-۷۵ سال".to_string(),
                    gender: "همه".to_string(),
                },
            ],
            tips: vec![
                PreventiveTip {
                    id: "tip1".to_string(),
                    title: "کاهش مصرف نمک".to_string(),
                    content: "محدود کردن مصرف نمک به کمتر از ۵ گرم در روز می‌تواند به کاهش فشار خون کمک کند.".to_string(),
                    category: "فشار خون".to_string(),
                },
                PreventiveTip {
                    id: "tip2".to_string(),
                    title: "ورزش منظم".to_string(),
                    content: "حداقل ۱۵۰ دقیقه فعالیت بدنی متوسط در هفته برای سلامت قلب مفید است.".to_string(),
                    category: "قلب".to_string(),
                },
                PreventiveTip {
                    id: "tip3".to_string(),
                    title: "مصرف میوه و سبزیجات".to_string(),
                    content: "روزانه حداقل ۵ وعده میوه و سبزیجات مصرف کنید.".to_string(),
                    category: "تغذیه".to_string(),
                },
            ],
        }
    }

    /// Articles filtered by category/tag, newest first, paginated
    pub fn articles(
        &self,
        category: Option<&str>,
        tag: Option<&str>,
        limit: usize,
        offset: usize,
    ) -> Vec<Article> {
        let mut filtered: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| category.is_none_or(|c| a.categories.iter().any(|ac| ac == c)))
            .filter(|a| tag.is_none_or(|t| a.tags.iter().any(|at| at == t)))
            .cloned()
            .collect();

        filtered.sort_by(|a, b| b.published_date.cmp(&a.published_date));
        filtered.into_iter().skip(offset).take(limit).collect()
    }

    pub fn article(&self, article_id: &str) -> Option<Article> {
        self.articles.iter().find(|a| a.id == article_id).cloned()
    }

    /// Most recent articles, used for homepage display
    pub fn featured_articles(&self, limit: usize) -> Vec<Article> {
        let mut sorted = self.articles.clone();
        sorted.sort_by(|a, b| b.published_date.cmp(&a.published_date));
        sorted.truncate(limit);
        sorted
    }

    pub fn resources(
        &self,
        category: Option<&str>,
        resource_type: Option<&str>,
        limit: usize,
        offset: usize,
    ) -> Vec<PreventiveResource> {
        self.resources
            .iter()
            .filter(|r| category.is_none_or(|c| r.categories.iter().any(|rc| rc == c)))
            .filter(|r| resource_type.is_none_or(|t| r.resource_type == t))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn resource(&self, resource_id: &str) -> Option<PreventiveResource> {
        self.resources.iter().find(|r| r.id == resource_id).cloned()
    }

    pub fn categories(&self, parent_id: Option<&str>) -> Vec<Category> {
        match parent_id {
            Some(parent) => self
                .categories
                .iter()
                .filter(|c| c.parent_id.as_deref() == Some(parent))
                .cloned()
                .collect(),
            None => self.categories.clone(),
        }
    }

    pub fn category(&self, category_id: &str) -> Option<Category> {
        self.categories.iter().find(|c| c.id == category_id).cloned()
    }

    pub fn subcategories(&self, category_id: &str) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|c| c.parent_id.as_deref() == Some(category_id))
            .cloned()
            .collect()
    }

    pub fn health_topics(&self) -> &[HealthTopic] {
        &self.topics
    }

    pub fn health_calendar(&self) -> &[Screening] {
        &self.screenings
    }

    pub fn preventive_tips(&self, category: Option<&str>) -> Vec<PreventiveTip> {
        match category {
            Some(c) => self.tips.iter().filter(|t| t.category == c).cloned().collect(),
            None => self.tips.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn articles_sort_newest_first() {
        let catalog = ContentCatalog::new();
        let articles = catalog.articles(None, None, 10, 0);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, "article1"); // 2023-10-15
        assert_eq!(articles[1].id, "article2"); // 2023-09-22
    }

    #[test]
    fn article_filters_and_pagination() {
        let catalog = ContentCatalog::new();

        let by_category = catalog.articles(Some("سرطان"), None, 10, 0);
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].id, "article1");

        let by_tag = catalog.articles(None, Some("رژیم غذایی"), 10, 0);
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].id, "article2");

        let offset_past_end = catalog.articles(None, None, 10, 5);
        assert!(offset_past_end.is_empty());
    }

    #[test]
    fn resource_filters() {
        let catalog = ContentCatalog::new();

        let videos = catalog.resources(None, Some("video"), 10, 0);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "resource1");

        let emergency = catalog.resources(Some("اورژانس"), None, 10, 0);
        assert_eq!(emergency.len(), 1);
        assert_eq!(emergency[0].id, "resource2");
    }

    #[test]
    fn category_hierarchy() {
        let catalog = ContentCatalog::new();

        assert_eq!(catalog.categories(None).len(), 4);
        let children = catalog.subcategories("cat1");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].id, "cat2");

        assert!(catalog.category("cat3").is_some());
        assert!(catalog.category("missing").is_none());
    }

    #[test]
    fn tips_filter_by_category() {
        let catalog = ContentCatalog::new();
        assert_eq!(catalog.preventive_tips(None).len(), 3);

        let nutrition = catalog.preventive_tips(Some("تغذیه"));
        assert_eq!(nutrition.len(), 1);
        assert_eq!(nutrition[0].id, "tip3");
    }
}
