use serde::{Deserialize, Serialize};

/// A row as read from either dataset, before cleaning. Any field may be
/// missing; non-string JSON values are read as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawArticle {
    pub content: Option<String>,
    pub category: Option<String>,
    pub published_date: Option<String>,
}

impl RawArticle {
    pub fn new(content: &str, category: &str) -> Self {
        RawArticle {
            content: Some(content.to_string()),
            category: Some(category.to_string()),
            published_date: None,
        }
    }

    pub fn with_published_date(mut self, published_date: &str) -> Self {
        self.published_date = Some(published_date.to_string());
        self
    }
}

/// A cleaned corpus row. Identity is the row position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub content: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

impl Article {
    pub fn new(content: &str, category: &str) -> Self {
        Article {
            content: content.to_string(),
            category: category.to_string(),
            published_date: None,
        }
    }

    pub fn with_published_date(mut self, published_date: &str) -> Self {
        self.published_date = Some(published_date.to_string());
        self
    }
}

/// Number of articles carrying a category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}
