//! Bangla text cleaning: normalization, stopword removal, category-specific
//! word removal and tokenization.

pub mod class_words;
pub mod normalizer;
pub mod pipeline;
pub mod stopwords;
pub mod tokenizer;

pub use class_words::ClassWordMap;
pub use normalizer::TextNormalizer;
pub use pipeline::{CleanedArticle, CleaningPipeline};
pub use stopwords::StopwordSet;
pub use tokenizer::{bigrams, tokenize};

pub const TARGET_TEXT: &str = "text";
