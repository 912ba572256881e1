//! Output surfaces handed to downstream display: a JSON analysis report, the
//! cleaned corpus as CSV, and console tables.

pub mod console;

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::Path;
use tracing::info;

use crate::analysis::{DatePartition, FrequencyAnalyzer, TemporalSummary, TermCount};
use crate::dataset::CategoryCount;
use crate::text::CleanedArticle;

/// Example words kept per category in the exclusive-word listing.
pub const EXCLUSIVE_SAMPLE_SIZE: usize = 20;
/// Distinct unparsed date strings kept in the report.
pub const UNPARSED_SAMPLE_SIZE: usize = 50;

#[derive(Debug, Clone, Serialize)]
pub struct ExclusiveWords {
    pub category: String,
    pub count: usize,
    pub sample: Vec<String>,
}

/// Exclusive-word counts and sorted samples for every analyzed category.
pub fn exclusive_words(analyzer: &FrequencyAnalyzer) -> Vec<ExclusiveWords> {
    analyzer
        .category_exclusive_words(analyzer.categories())
        .into_iter()
        .map(|(category, words)| ExclusiveWords {
            category,
            count: words.len(),
            sample: words.into_iter().take(EXCLUSIVE_SAMPLE_SIZE).collect(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct DateReport {
    pub parsed: usize,
    pub unparsed: usize,
    pub unparsed_formats: usize,
    pub unparsed_samples: Vec<String>,
    pub summary: TemporalSummary,
}

impl DateReport {
    pub fn from_partition(partition: &DatePartition) -> Self {
        DateReport {
            parsed: partition.parsed.len(),
            unparsed: partition.unparsed_count,
            unparsed_formats: partition.unparsed_formats.len(),
            unparsed_samples: partition
                .unparsed_formats
                .iter()
                .take(UNPARSED_SAMPLE_SIZE)
                .cloned()
                .collect(),
            summary: TemporalSummary::from_articles(&partition.parsed),
        }
    }
}

/// Everything the dashboard shows, in one serializable document.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: String,
    pub counts_before_balancing: Vec<CategoryCount>,
    pub counts_after_balancing: Vec<CategoryCount>,
    pub top_words: BTreeMap<String, Vec<TermCount>>,
    pub top_bigrams: BTreeMap<String, Vec<TermCount>>,
    pub exclusive_words: Vec<ExclusiveWords>,
    pub dates: DateReport,
}

impl AnalysisReport {
    pub fn new(
        counts_before_balancing: Vec<CategoryCount>,
        counts_after_balancing: Vec<CategoryCount>,
        analyzer: &FrequencyAnalyzer,
        top_words: usize,
        top_bigrams: usize,
        partition: &DatePartition,
    ) -> Self {
        let categories = analyzer.categories();

        let top_words = categories
            .iter()
            .map(|c| (c.clone(), analyzer.top_unigrams(c, top_words)))
            .collect();
        let top_bigrams = categories
            .iter()
            .map(|c| (c.clone(), analyzer.top_bigrams(c, top_bigrams)))
            .collect();

        AnalysisReport {
            generated_at: chrono::Local::now().to_rfc3339(),
            counts_before_balancing,
            counts_after_balancing,
            top_words,
            top_bigrams,
            exclusive_words: exclusive_words(analyzer),
            dates: DateReport::from_partition(partition),
        }
    }
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    Ok(())
}

/// Write any serializable report as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize, P: AsRef<Path>>(report: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    create_parent_dir(path)?;

    let file = File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, report)
        .with_context(|| format!("Failed to write JSON report: {:?}", path))?;

    info!("Wrote JSON report to {:?}", path);
    Ok(())
}

#[derive(Serialize)]
struct CleanedRow<'a> {
    content: &'a str,
    category: &'a str,
    cleaned_content: &'a str,
    token_list: String,
}

/// Write the cleaned corpus with columns content, category, cleaned_content,
/// token_list (tokens space-joined).
pub fn write_cleaned_csv<P: AsRef<Path>>(cleaned: &[CleanedArticle], path: P) -> Result<()> {
    let path = path.as_ref();
    create_parent_dir(path)?;

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    for article in cleaned {
        writer.serialize(CleanedRow {
            content: &article.content,
            category: &article.category,
            cleaned_content: &article.cleaned_content,
            token_list: article.token_list.join(" "),
        })?;
    }
    writer.flush()?;

    info!("Wrote {} cleaned articles to {:?}", cleaned.len(), path);
    Ok(())
}
