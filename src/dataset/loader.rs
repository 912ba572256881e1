//! Readers for the two raw dataset shapes: a JSON array of records and a
//! headered CSV file.

use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use super::types::RawArticle;
use super::TARGET_DATASET;

const CONTENT: &str = "content";
const CATEGORY: &str = "category";
const PUBLISHED_DATE: &str = "published_date";

/// Load a JSON records file (`[{"content": ..., "category": ...}, ...]`).
pub fn load_json_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawArticle>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open JSON dataset: {:?}", path.as_ref()))?;
    let articles = read_json_records(file)
        .with_context(|| format!("Failed to read JSON dataset: {:?}", path.as_ref()))?;

    info!(
        target: TARGET_DATASET,
        "Loaded {} records from {:?}",
        articles.len(),
        path.as_ref()
    );
    Ok(articles)
}

pub fn read_json_records<R: Read>(reader: R) -> Result<Vec<RawArticle>> {
    let records: Value = serde_json::from_reader(reader).context("Invalid JSON")?;

    let Value::Array(records) = records else {
        return Err(anyhow!("Expected a JSON array of records"));
    };

    Ok(records.iter().map(raw_article_from_json).collect())
}

fn raw_article_from_json(record: &Value) -> RawArticle {
    let field = |name: &str| {
        record
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    RawArticle {
        content: field(CONTENT),
        category: field(CATEGORY),
        published_date: field(PUBLISHED_DATE),
    }
}

/// Load a UTF-8 CSV file with a header row. Missing columns and empty cells
/// are read as missing values; malformed records are skipped.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RawArticle>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open CSV dataset: {:?}", path.as_ref()))?;
    let articles = read_csv(file)
        .with_context(|| format!("Failed to read CSV dataset: {:?}", path.as_ref()))?;

    info!(
        target: TARGET_DATASET,
        "Loaded {} records from {:?}",
        articles.len(),
        path.as_ref()
    );
    Ok(articles)
}

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawArticle>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader.headers().context("Missing CSV header row")?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let content_idx = column(CONTENT);
    let category_idx = column(CATEGORY);
    let date_idx = column(PUBLISHED_DATE);

    if content_idx.is_none() {
        warn!(target: TARGET_DATASET, "CSV has no '{}' column", CONTENT);
    }

    let mut articles = Vec::new();
    for (row, record) in reader.records().enumerate() {
        match record {
            Ok(record) => articles.push(RawArticle {
                content: cell(&record, content_idx),
                category: cell(&record, category_idx),
                published_date: cell(&record, date_idx),
            }),
            Err(err) => {
                warn!(target: TARGET_DATASET, "Skipping malformed CSV row {}: {}", row + 1, err);
            }
        }
    }

    Ok(articles)
}

fn cell(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_json_records() {
        let json = r#"[
            {"content": "ক্রিকেট", "category": "sports", "published_date": "৫ মে ২০২২", "author": "x"},
            {"content": null, "category": "economy"},
            {"category": "economy", "published_date": 20220505}
        ]"#;
        let articles = read_json_records(json.as_bytes()).unwrap();

        assert_eq!(articles.len(), 3);
        assert_eq!(
            articles[0],
            RawArticle::new("ক্রিকেট", "sports").with_published_date("৫ মে ২০২২")
        );
        assert_eq!(articles[1].content, None);
        assert_eq!(articles[2].published_date, None);
    }

    #[test]
    fn test_read_json_rejects_non_array() {
        assert!(read_json_records(r#"{"content": "x"}"#.as_bytes()).is_err());
        assert!(read_json_records("not json".as_bytes()).is_err());
    }

    #[test]
    fn test_read_csv_with_missing_column() {
        let csv = "title,content,category\nএক,ক্রিকেট খেলা,sports\nদুই,,economy\n";
        let articles = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0], RawArticle::new("ক্রিকেট খেলা", "sports"));
        assert_eq!(articles[1].content, None);
        assert_eq!(articles[1].category.as_deref(), Some("economy"));
        assert_eq!(articles[1].published_date, None);
    }

    #[test]
    fn test_read_csv_quoted_fields() {
        let csv = "content,category,published_date\n\"ঢাকা, চট্টগ্রাম\",national,\"১২ জানুয়ারি ২০২১, ১৪:৩০\"\n";
        let articles = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(articles[0].content.as_deref(), Some("ঢাকা, চট্টগ্রাম"));
        assert_eq!(
            articles[0].published_date.as_deref(),
            Some("১২ জানুয়ারি ২০২১, ১৪:৩০")
        );
    }

    #[test]
    fn test_load_from_files() {
        let mut json_file = NamedTempFile::new().unwrap();
        write!(json_file, r#"[{{"content": "খবর", "category": "sports"}}]"#).unwrap();
        let articles = load_json_records(json_file.path()).unwrap();
        assert_eq!(articles, vec![RawArticle::new("খবর", "sports")]);

        let mut csv_file = NamedTempFile::new().unwrap();
        writeln!(csv_file, "content,category").unwrap();
        writeln!(csv_file, "খবর,sports").unwrap();
        let articles = load_csv(csv_file.path()).unwrap();
        assert_eq!(articles, vec![RawArticle::new("খবর", "sports")]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_csv("/definitely/not/here.csv").unwrap_err();
        assert!(format!("{:#}", err).contains("here.csv"));
    }
}
