use std::path::PathBuf;

use crate::analysis::{DEFAULT_TOP_BIGRAMS, DEFAULT_TOP_WORDS};
use crate::dataset::{DEFAULT_EXCLUDED_CATEGORIES, DEFAULT_SEED, DEFAULT_TARGET_SIZE};
use crate::environment::{get_env_var_as_vec, get_env_var_or};

pub const ENV_DATASET1: &str = "BANGLA_EDA_DATASET1";
pub const ENV_DATASET2: &str = "BANGLA_EDA_DATASET2";
pub const ENV_TARGET_SIZE: &str = "BANGLA_EDA_TARGET_SIZE";
pub const ENV_SEED: &str = "BANGLA_EDA_SEED";
pub const ENV_TOP_WORDS: &str = "BANGLA_EDA_TOP_WORDS";
pub const ENV_TOP_BIGRAMS: &str = "BANGLA_EDA_TOP_BIGRAMS";
pub const ENV_EXCLUDED_CATEGORIES: &str = "BANGLA_EDA_EXCLUDED_CATEGORIES";
pub const ENV_OUTPUT_DIR: &str = "BANGLA_EDA_OUTPUT_DIR";

/// Settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// JSON records dataset.
    pub dataset1: PathBuf,
    /// CSV dataset.
    pub dataset2: PathBuf,
    pub target_size: usize,
    pub seed: u64,
    pub top_words: usize,
    pub top_bigrams: usize,
    /// Categories dropped from the JSON dataset.
    pub excluded_categories: Vec<String>,
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dataset1: PathBuf::from("newspaper.json"),
            dataset2: PathBuf::from("Bangla_Newspaper_Article_Dataset.csv"),
            target_size: DEFAULT_TARGET_SIZE,
            seed: DEFAULT_SEED,
            top_words: DEFAULT_TOP_WORDS,
            top_bigrams: DEFAULT_TOP_BIGRAMS,
            excluded_categories: DEFAULT_EXCLUDED_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl PipelineConfig {
    /// Defaults overridden by any `BANGLA_EDA_*` variables that are set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            dataset1: get_env_var_or(ENV_DATASET1, defaults.dataset1),
            dataset2: get_env_var_or(ENV_DATASET2, defaults.dataset2),
            target_size: get_env_var_or(ENV_TARGET_SIZE, defaults.target_size),
            seed: get_env_var_or(ENV_SEED, defaults.seed),
            top_words: get_env_var_or(ENV_TOP_WORDS, defaults.top_words),
            top_bigrams: get_env_var_or(ENV_TOP_BIGRAMS, defaults.top_bigrams),
            excluded_categories: get_env_var_as_vec(ENV_EXCLUDED_CATEGORIES, ';')
                .unwrap_or(defaults.excluded_categories),
            output_dir: get_env_var_or(ENV_OUTPUT_DIR, defaults.output_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.target_size, 5000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.top_words, 100);
        assert_eq!(config.top_bigrams, 30);
        assert_eq!(config.excluded_categories, vec!["bangladesh", "opinion"]);
    }
}
