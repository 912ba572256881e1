use std::fs;
use std::io::Write;
use std::path::Path;

use bangla_news_eda::config::PipelineConfig;
use bangla_news_eda::eda::{self, CLEANED_CSV, REPORT_JSON};
use bangla_news_eda::text::CleaningPipeline;
use tempfile::tempdir;

const PRIMARY: &str = r#"[
    {"content": "ক্রিকেট দল জয়", "category": "sports", "published_date": "৫ মে ২০২২, ১০:৩০", "author": "ক"},
    {"content": "ক্রিকেট দল জয়", "category": "sports", "published_date": "৬ মে ২০২২"},
    {"content": "রান্না রেসিপি মসলা", "category": "life-style", "published_date": "আপডেট: ১২ জানুয়ারি ২০২১"},
    {"content": "নির্বাচন সংসদ", "category": "bangladesh"},
    {"content": null, "category": "sports"}
]"#;

const SECONDARY: &str = "content,category,author
ফুটবল গোল ম্যাচ,sports,খ
নির্বাচন ভোট,politics,
,politics,গ
";

fn write_file(path: &Path, contents: &str) {
    let mut file = fs::File::create(path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
}

fn config(dir: &Path) -> PipelineConfig {
    let dataset1 = dir.join("newspaper.json");
    let dataset2 = dir.join("articles.csv");
    write_file(&dataset1, PRIMARY);
    write_file(&dataset2, SECONDARY);

    PipelineConfig {
        dataset1,
        dataset2,
        target_size: 1,
        output_dir: dir.join("output"),
        ..PipelineConfig::default()
    }
}

#[test]
fn test_load_corpus() {
    let dir = tempdir().unwrap();
    let corpus = eda::load_corpus(&config(dir.path())).unwrap();

    let merged: Vec<(&str, &str)> = corpus
        .merged
        .iter()
        .map(|a| (a.content.as_str(), a.category.as_str()))
        .collect();
    assert_eq!(
        merged,
        vec![
            ("ক্রিকেট দল জয়", "sports"),
            ("রান্না রেসিপি মসলা", "lifestyle"),
            ("ফুটবল গোল ম্যাচ", "sports"),
            ("নির্বাচন ভোট", "politics"),
        ]
    );

    // One article per category, the last sports row survives.
    assert_eq!(corpus.balanced.len(), 3);
    assert!(corpus
        .balanced
        .iter()
        .any(|a| a.content == "ফুটবল গোল ম্যাচ"));
    assert!(!corpus.balanced.iter().any(|a| a.content == "ক্রিকেট দল জয়"));
}

#[test]
fn test_full_run() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());
    let corpus = eda::load_corpus(&config).unwrap();
    let analysis = eda::analyze(&corpus, &CleaningPipeline::default(), &config);
    let report = &analysis.report;

    let before: Vec<(&str, usize)> = report
        .counts_before_balancing
        .iter()
        .map(|c| (c.category.as_str(), c.count))
        .collect();
    assert_eq!(before, vec![("sports", 2), ("lifestyle", 1), ("politics", 1)]);

    let sports: Vec<&str> = report.top_words["sports"]
        .iter()
        .map(|t| t.term.as_str())
        .collect();
    assert_eq!(sports, vec!["ফুটবল", "গোল", "ম্যাচ"]);
    assert_eq!(report.top_bigrams["lifestyle"][0].term, "রান্না রেসিপি");

    assert_eq!(report.dates.parsed, 2);
    assert_eq!(report.dates.unparsed, 2);
    assert!(report.dates.unparsed_samples.is_empty());

    let (csv_path, json_path) = eda::write_outputs(&analysis, &config).unwrap();
    assert_eq!(csv_path, config.output_dir.join(CLEANED_CSV));
    assert_eq!(json_path, config.output_dir.join(REPORT_JSON));

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 4);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["dates"]["parsed"], 2);
    assert_eq!(json["top_words"]["sports"][0]["term"], "ফুটবল");
    assert_eq!(json["dates"]["summary"]["per_year"]["2021"], 1);
}

#[test]
fn test_missing_dataset_is_an_error() {
    let dir = tempdir().unwrap();
    let config = PipelineConfig {
        dataset1: dir.path().join("missing.json"),
        ..PipelineConfig::default()
    };

    let err = eda::load_corpus(&config).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.json"));
}
