//! Descriptive statistics over the cleaned corpus: n-gram frequencies,
//! category-exclusive vocabulary and publication-date distributions.

pub mod frequency;
pub mod temporal;

pub use frequency::{
    FrequencyAnalyzer, FrequencyTable, TermCount, DEFAULT_TOP_BIGRAMS, DEFAULT_TOP_WORDS,
};
pub use temporal::{
    partition_by_date, weekday_name, DatePartition, DatedArticle, TemporalSummary, WEEK,
};

pub const TARGET_ANALYSIS: &str = "analysis";
