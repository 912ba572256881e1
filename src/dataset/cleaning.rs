use std::collections::{HashMap, HashSet};
use tracing::info;

use super::types::{Article, CategoryCount, RawArticle};
use super::TARGET_DATASET;

/// Categories dropped from the primary dataset: too broad to be a topic.
pub const DEFAULT_EXCLUDED_CATEGORIES: &[&str] = &["bangladesh", "opinion"];

/// Category labels rewritten during cleaning of the primary dataset.
const CATEGORY_RENAMES: &[(&str, &str)] = &[("life-style", "lifestyle")];

/// Rows without content or category are dropped; the first row wins among
/// duplicates of the same content.
fn drop_incomplete_and_duplicates(articles: Vec<RawArticle>) -> Vec<Article> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter_map(|raw| match (raw.content, raw.category) {
            (Some(content), Some(category))
                if !content.trim().is_empty() && !category.trim().is_empty() =>
            {
                Some(Article {
                    content,
                    category: category.trim().to_string(),
                    published_date: raw.published_date,
                })
            }
            _ => None,
        })
        .filter(|article| seen.insert(article.content.clone()))
        .collect()
}

/// Clean the JSON-records dataset: drop incomplete rows and duplicate
/// content, normalize category spelling, drop the excluded categories.
pub fn clean_primary<S: AsRef<str>>(articles: Vec<RawArticle>, excluded: &[S]) -> Vec<Article> {
    let total = articles.len();
    let cleaned: Vec<Article> = drop_incomplete_and_duplicates(articles)
        .into_iter()
        .map(|mut article| {
            if let Some((_, renamed)) = CATEGORY_RENAMES
                .iter()
                .find(|(from, _)| *from == article.category)
            {
                article.category = renamed.to_string();
            }
            article
        })
        .filter(|article| !excluded.iter().any(|c| c.as_ref() == article.category))
        .collect();

    info!(
        target: TARGET_DATASET,
        "Primary dataset: kept {} of {} rows", cleaned.len(), total
    );
    cleaned
}

/// Clean the CSV dataset: drop incomplete rows and duplicate content.
pub fn clean_secondary(articles: Vec<RawArticle>) -> Vec<Article> {
    let total = articles.len();
    let cleaned = drop_incomplete_and_duplicates(articles);

    info!(
        target: TARGET_DATASET,
        "Secondary dataset: kept {} of {} rows", cleaned.len(), total
    );
    cleaned
}

/// Concatenate both datasets, primary first.
pub fn merge(primary: Vec<Article>, secondary: Vec<Article>) -> Vec<Article> {
    let mut merged = primary;
    merged.extend(secondary);
    merged
}

/// Articles per category, most frequent first; ties keep first-appearance order.
pub fn category_counts(articles: &[Article]) -> Vec<CategoryCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for article in articles {
        match index.get(article.category.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(&article.category, counts.len());
                counts.push(CategoryCount {
                    category: article.category.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
