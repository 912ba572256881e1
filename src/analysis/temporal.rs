use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::{info, warn};

use super::TARGET_ANALYSIS;
use crate::dataset::Article;
use crate::dates::BanglaDateParser;

/// Monday-first week, the column order of every weekday table.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// An article whose publication date parsed, with the derived fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedArticle {
    pub category: String,
    pub datetime: NaiveDateTime,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub weekday: Weekday,
}

impl DatedArticle {
    pub fn new(category: &str, datetime: NaiveDateTime) -> Self {
        DatedArticle {
            category: category.to_string(),
            datetime,
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            weekday: datetime.weekday(),
        }
    }
}

/// The corpus split by whether `published_date` parsed.
#[derive(Debug, Clone, Default)]
pub struct DatePartition {
    pub parsed: Vec<DatedArticle>,
    pub unparsed_count: usize,
    /// Distinct raw strings that failed, in first-seen order. Missing dates
    /// count as unparsed but have no raw string.
    pub unparsed_formats: Vec<String>,
}

impl DatePartition {
    pub fn total(&self) -> usize {
        self.parsed.len() + self.unparsed_count
    }
}

pub fn partition_by_date(articles: &[Article], parser: &BanglaDateParser) -> DatePartition {
    let mut partition = DatePartition::default();
    let mut seen = HashSet::new();

    for article in articles {
        let raw = article.published_date.as_deref();
        match parser.parse(raw).datetime() {
            Some(datetime) => partition
                .parsed
                .push(DatedArticle::new(&article.category, datetime)),
            None => {
                partition.unparsed_count += 1;
                if let Some(raw) = raw {
                    if seen.insert(raw) {
                        partition.unparsed_formats.push(raw.to_string());
                    }
                }
            }
        }
    }

    if partition.unparsed_count > 0 {
        warn!(
            target: TARGET_ANALYSIS,
            "{} of {} articles have unparsed dates ({} distinct formats)",
            partition.unparsed_count,
            partition.total(),
            partition.unparsed_formats.len()
        );
    }
    info!(
        target: TARGET_ANALYSIS,
        "Parsed publication dates for {} articles",
        partition.parsed.len()
    );

    partition
}

/// Row label to column label to count. Every row carries every column.
pub type CrossTab<R, C> = BTreeMap<R, BTreeMap<C, usize>>;

/// Article counts over the parsed part of the corpus.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemporalSummary {
    pub per_year: BTreeMap<i32, usize>,
    pub per_month: BTreeMap<u32, usize>,
    /// Monday..Sunday, zero-filled.
    pub per_weekday: Vec<(String, usize)>,
    pub year_month: CrossTab<i32, u32>,
    pub category_year: CrossTab<String, i32>,
    pub category_month: CrossTab<String, u32>,
    /// Columns Monday..Sunday, zero-filled.
    pub category_weekday: BTreeMap<String, Vec<(String, usize)>>,
}

fn count_by<K: Ord>(items: impl Iterator<Item = K>) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for key in items {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Count (row, column) pairs and zero-fill columns seen anywhere in the table.
fn cross_tab<R: Ord + Clone, C: Ord + Clone>(pairs: impl Iterator<Item = (R, C)>) -> CrossTab<R, C> {
    let mut table: CrossTab<R, C> = BTreeMap::new();
    let mut columns = BTreeSet::new();

    for (row, column) in pairs {
        columns.insert(column.clone());
        *table.entry(row).or_default().entry(column).or_insert(0) += 1;
    }
    for row in table.values_mut() {
        for column in &columns {
            row.entry(column.clone()).or_insert(0);
        }
    }
    table
}

fn week_counts<'a>(weekdays: impl Iterator<Item = &'a Weekday>) -> Vec<(String, usize)> {
    let mut counts = [0usize; 7];
    for weekday in weekdays {
        counts[weekday.num_days_from_monday() as usize] += 1;
    }
    WEEK.iter()
        .zip(counts)
        .map(|(day, count)| (weekday_name(*day).to_string(), count))
        .collect()
}

impl TemporalSummary {
    pub fn from_articles(parsed: &[DatedArticle]) -> Self {
        let mut category_weekday = BTreeMap::new();
        let categories: BTreeSet<&str> = parsed.iter().map(|a| a.category.as_str()).collect();
        for category in categories {
            let weekdays = parsed
                .iter()
                .filter(|a| a.category == category)
                .map(|a| &a.weekday);
            category_weekday.insert(category.to_string(), week_counts(weekdays));
        }

        TemporalSummary {
            per_year: count_by(parsed.iter().map(|a| a.year)),
            per_month: count_by(parsed.iter().map(|a| a.month)),
            per_weekday: week_counts(parsed.iter().map(|a| &a.weekday)),
            year_month: cross_tab(parsed.iter().map(|a| (a.year, a.month))),
            category_year: cross_tab(parsed.iter().map(|a| (a.category.clone(), a.year))),
            category_month: cross_tab(parsed.iter().map(|a| (a.category.clone(), a.month))),
            category_weekday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Article> {
        vec![
            // Tuesday
            Article::new("ক", "sports").with_published_date("১২ জানুয়ারি ২০২১, ১৪:৩০"),
            // Sunday
            Article::new("খ", "sports").with_published_date("১০:০৫, ৩ মার্চ ২০১৯"),
            // Thursday
            Article::new("গ", "economy").with_published_date("৫ মে ২০২২"),
            Article::new("ঘ", "economy").with_published_date("গতকাল"),
            Article::new("ঙ", "economy").with_published_date("গতকাল"),
            Article::new("চ", "crime").with_published_date("৩১ ফেব্রুয়ারি ২০২০"),
            Article::new("ছ", "crime"),
        ]
    }

    #[test]
    fn test_partition() {
        let partition = partition_by_date(&corpus(), &BanglaDateParser::new());

        assert_eq!(partition.parsed.len(), 3);
        assert_eq!(partition.unparsed_count, 4);
        assert_eq!(partition.total(), 7);
        assert_eq!(
            partition.unparsed_formats,
            vec!["গতকাল".to_string(), "৩১ ফেব্রুয়ারি ২০২০".to_string()]
        );

        let first = &partition.parsed[0];
        assert_eq!((first.year, first.month, first.day, first.hour), (2021, 1, 12, 14));
        assert_eq!(first.weekday, Weekday::Tue);
    }

    #[test]
    fn test_summary_tables() {
        let partition = partition_by_date(&corpus(), &BanglaDateParser::new());
        let summary = TemporalSummary::from_articles(&partition.parsed);

        assert_eq!(
            summary.per_year,
            BTreeMap::from([(2019, 1), (2021, 1), (2022, 1)])
        );
        assert_eq!(summary.per_month, BTreeMap::from([(1, 1), (3, 1), (5, 1)]));

        let weekdays: Vec<(&str, usize)> = summary
            .per_weekday
            .iter()
            .map(|(day, count)| (day.as_str(), *count))
            .collect();
        assert_eq!(
            weekdays,
            vec![
                ("Monday", 0),
                ("Tuesday", 1),
                ("Wednesday", 0),
                ("Thursday", 1),
                ("Friday", 0),
                ("Saturday", 0),
                ("Sunday", 1),
            ]
        );

        // Unparsed rows never reach the tables.
        assert!(!summary.category_year.contains_key("crime"));
        assert_eq!(
            summary.category_year["sports"],
            BTreeMap::from([(2019, 1), (2021, 1), (2022, 0)])
        );
        assert_eq!(
            summary.category_month["economy"],
            BTreeMap::from([(1, 0), (3, 0), (5, 1)])
        );
        assert_eq!(summary.year_month[&2021], BTreeMap::from([(1, 1), (3, 0), (5, 0)]));
        assert_eq!(summary.category_weekday["economy"][3], ("Thursday".to_string(), 1));
        assert_eq!(summary.category_weekday["economy"].len(), 7);
    }

    #[test]
    fn test_empty_summary() {
        let summary = TemporalSummary::from_articles(&[]);
        assert!(summary.per_year.is_empty());
        assert_eq!(summary.per_weekday.len(), 7);
        assert!(summary.per_weekday.iter().all(|(_, count)| *count == 0));
    }
}
