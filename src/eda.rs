//! End-to-end runs: load both datasets, clean, merge and balance them, then
//! build the analysis report.

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::analysis::{partition_by_date, FrequencyAnalyzer};
use crate::config::PipelineConfig;
use crate::dataset::{
    balance, category_counts, clean_primary, clean_secondary, load_csv, load_json_records, merge,
    Article, TARGET_DATASET,
};
use crate::dates::BanglaDateParser;
use crate::report::{write_cleaned_csv, write_json, AnalysisReport};
use crate::text::{CleanedArticle, CleaningPipeline};

pub const CLEANED_CSV: &str = "cleaned_articles.csv";
pub const REPORT_JSON: &str = "report.json";

/// The merged corpus and its class-balanced sample.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub merged: Vec<Article>,
    pub balanced: Vec<Article>,
}

/// Load and clean both datasets, merge them and balance the result.
pub fn load_corpus(config: &PipelineConfig) -> Result<Corpus> {
    let primary = clean_primary(
        load_json_records(&config.dataset1)?,
        config.excluded_categories.as_slice(),
    );
    let secondary = clean_secondary(load_csv(&config.dataset2)?);
    info!(
        target: TARGET_DATASET,
        "Loaded {} articles from {:?} and {} from {:?}",
        primary.len(),
        config.dataset1,
        secondary.len(),
        config.dataset2
    );

    Ok(build_corpus(primary, secondary, config))
}

/// Merge two already-cleaned datasets and balance them.
pub fn build_corpus(primary: Vec<Article>, secondary: Vec<Article>, config: &PipelineConfig) -> Corpus {
    let merged = merge(primary, secondary);
    let balanced = balance(merged.clone(), config.target_size, config.seed);
    info!(
        target: TARGET_DATASET,
        "Balanced {} merged articles down to {}",
        merged.len(),
        balanced.len()
    );
    Corpus { merged, balanced }
}

/// Results of one analysis run, kept together for printing and writing.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub cleaned: Vec<CleanedArticle>,
    pub report: AnalysisReport,
}

/// Clean the balanced corpus, rank words and bigrams per category and
/// summarize publication dates over the whole merged corpus.
pub fn analyze(corpus: &Corpus, pipeline: &CleaningPipeline, config: &PipelineConfig) -> Analysis {
    let cleaned = pipeline.clean_corpus(&corpus.balanced);
    let analyzer = FrequencyAnalyzer::new(&cleaned);
    let partition = partition_by_date(&corpus.merged, &BanglaDateParser::new());

    let report = AnalysisReport::new(
        category_counts(&corpus.merged),
        category_counts(&corpus.balanced),
        &analyzer,
        config.top_words,
        config.top_bigrams,
        &partition,
    );

    Analysis { cleaned, report }
}

/// Write the cleaned corpus and the JSON report under the output directory.
/// Returns the paths written.
pub fn write_outputs(analysis: &Analysis, config: &PipelineConfig) -> Result<(PathBuf, PathBuf)> {
    let csv_path = config.output_dir.join(CLEANED_CSV);
    let json_path = config.output_dir.join(REPORT_JSON);
    write_cleaned_csv(&analysis.cleaned, &csv_path)?;
    write_json(&analysis.report, &json_path)?;
    Ok((csv_path, json_path))
}
