use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::class_words::ClassWordMap;
use super::normalizer::TextNormalizer;
use super::stopwords::StopwordSet;
use super::tokenizer::tokenize;
use super::TARGET_TEXT;
use crate::dataset::Article;

/// An article after all textual cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedArticle {
    pub content: String,
    pub category: String,
    pub cleaned_content: String,
    pub token_list: Vec<String>,
}

/// Composes normalization, the global stopword pass, the category-specific
/// pass and tokenization. Configuration is loaded once and read-only after.
#[derive(Debug, Clone)]
pub struct CleaningPipeline {
    normalizer: TextNormalizer,
    stopwords: StopwordSet,
    class_words: ClassWordMap,
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new(StopwordSet::bangla(), ClassWordMap::bangla_news())
    }
}

impl CleaningPipeline {
    pub fn new(stopwords: StopwordSet, class_words: ClassWordMap) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            stopwords,
            class_words,
        }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn class_words(&self) -> &ClassWordMap {
        &self.class_words
    }

    /// Normalize, split, drop global stopwords and rejoin with single spaces.
    pub fn clean_text(&self, raw: Option<&str>) -> String {
        let normalized = self.normalizer.normalize(raw);
        self.stopwords
            .filter(normalized.split_whitespace())
            .join(" ")
    }

    /// Full per-article cleaning.
    pub fn clean(&self, article: &Article) -> CleanedArticle {
        let globally_filtered = self.clean_text(Some(&article.content));
        let cleaned_content = self
            .class_words
            .remove_class_words(&globally_filtered, &article.category);
        let token_list = tokenize(&cleaned_content);

        CleanedArticle {
            content: article.content.clone(),
            category: article.category.clone(),
            cleaned_content,
            token_list,
        }
    }

    pub fn clean_corpus(&self, articles: &[Article]) -> Vec<CleanedArticle> {
        debug!(
            target: TARGET_TEXT,
            "Cleaning {} articles with {} stopwords",
            articles.len(),
            self.stopwords.len()
        );

        let cleaned: Vec<CleanedArticle> = articles.iter().map(|a| self.clean(a)).collect();

        let empty = cleaned.iter().filter(|a| a.token_list.is_empty()).count();
        let tokens: usize = cleaned.iter().map(|a| a.token_list.len()).sum();
        info!(
            target: TARGET_TEXT,
            "Cleaned {} articles: {} tokens, {} left empty",
            cleaned.len(),
            tokens,
            empty
        );

        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_drops_stopwords_and_noise() {
        let pipeline = CleaningPipeline::default();
        let cleaned = pipeline.clean_text(Some("আমি এবং তুমি ক্রিকেট খেলি। Visit http://x.com now 123"));
        assert_eq!(cleaned, "ক্রিকেট খেলি");
    }

    #[test]
    fn test_clean_text_missing_is_empty() {
        let pipeline = CleaningPipeline::default();
        assert_eq!(pipeline.clean_text(None), "");
    }

    #[test]
    fn test_clean_applies_category_words_after_stopwords() {
        let pipeline = CleaningPipeline::default();
        let article = Article::new("সরকার ঘাটতি বাজেট তথ্য ঘোষণা করেছে", "economy");
        let cleaned = pipeline.clean(&article);

        assert_eq!(cleaned.cleaned_content, "ঘাটতি বাজেট");
        assert_eq!(cleaned.token_list, vec!["ঘাটতি", "বাজেট"]);
        assert_eq!(cleaned.content, article.content);
        assert_eq!(cleaned.category, "economy");
    }

    #[test]
    fn test_unmapped_category_keeps_words() {
        let pipeline = CleaningPipeline::default();
        let article = Article::new("সরকার বাজেট তথ্য", "sports");
        assert_eq!(pipeline.clean(&article).token_list, vec!["সরকার", "বাজেট", "তথ্য"]);
    }

    #[test]
    fn test_clean_corpus_preserves_order() {
        let pipeline = CleaningPipeline::default();
        let articles = vec![
            Article::new("ক্রিকেট দল", "sports"),
            Article::new("Only English", "sports"),
            Article::new("বাজেট ঘাটতি", "economy"),
        ];
        let cleaned = pipeline.clean_corpus(&articles);
        assert_eq!(cleaned.len(), 3);
        assert_eq!(cleaned[0].cleaned_content, "ক্রিকেট দল");
        assert!(cleaned[1].token_list.is_empty());
        assert_eq!(cleaned[2].token_list, vec!["বাজেট", "ঘাটতি"]);
    }
}
