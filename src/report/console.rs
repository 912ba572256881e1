use colored::Colorize;
use prettytable::{Cell, Row, Table};
use std::fmt::Display;

use super::{AnalysisReport, DateReport, ExclusiveWords};
use crate::analysis::{weekday_name, TermCount, WEEK};
use crate::dataset::CategoryCount;

pub fn print_heading(title: &str) {
    println!("\n{}", "═".repeat(80).bright_blue());
    println!("{}", title.bright_blue().bold());
    println!("{}", "═".repeat(80).bright_blue());
}

fn header(labels: &[&str]) -> Row {
    Row::new(labels.iter().map(|label| Cell::new(label)).collect())
}

fn counts_table<K: Display>(label: &str, counts: impl IntoIterator<Item = (K, usize)>) -> Table {
    let mut table = Table::new();
    table.add_row(header(&[label, "Count"]));
    for (key, count) in counts {
        table.add_row(Row::new(vec![
            Cell::new(&key.to_string()),
            Cell::new(&count.to_string()),
        ]));
    }
    table
}

pub fn print_category_counts(title: &str, counts: &[CategoryCount]) {
    print_heading(title);
    counts_table("Category", counts.iter().map(|c| (&c.category, c.count))).printstd();
    let total: usize = counts.iter().map(|c| c.count).sum();
    println!("{}: {}", "Total articles".bright_blue(), total);
}

pub fn print_term_counts(title: &str, category: &str, terms: &[TermCount]) {
    print_heading(&format!("{} ({})", title, category.bright_yellow()));
    if terms.is_empty() {
        println!("{}", "No terms".dimmed());
        return;
    }
    counts_table("Term", terms.iter().map(|t| (&t.term, t.count))).printstd();
}

pub fn print_exclusive_words(words: &[ExclusiveWords]) {
    print_heading("Category-exclusive words");
    let mut table = Table::new();
    table.add_row(header(&["Category", "Exclusive words", "Examples"]));
    for entry in words {
        table.add_row(Row::new(vec![
            Cell::new(&entry.category),
            Cell::new(&entry.count.to_string()),
            Cell::new(&entry.sample.join(" ")),
        ]));
    }
    table.printstd();
}

pub fn print_date_report(report: &DateReport) {
    print_heading("Publication dates");
    println!(
        "{}: {}",
        "Parsed rows".bright_blue(),
        report.parsed.to_string().bright_green()
    );
    println!(
        "{}: {}",
        "Unparsed rows".bright_blue(),
        report.unparsed.to_string().bright_red()
    );
    println!(
        "{}: {}",
        "Distinct unparsed formats".bright_blue(),
        report.unparsed_formats
    );
    for sample in &report.unparsed_samples {
        println!("  {}", sample.dimmed());
    }

    let summary = &report.summary;
    print_heading("Articles per year");
    counts_table("Year", summary.per_year.iter().map(|(y, c)| (y, *c))).printstd();

    print_heading("Articles per month");
    counts_table("Month", summary.per_month.iter().map(|(m, c)| (m, *c))).printstd();

    print_heading("Articles per weekday");
    counts_table("Weekday", summary.per_weekday.iter().map(|(d, c)| (d, *c))).printstd();

    print_heading("Articles per weekday by category");
    let mut table = Table::new();
    let mut labels = vec!["Category"];
    labels.extend(WEEK.iter().map(|d| weekday_name(*d)));
    table.add_row(header(&labels));
    for (category, days) in &summary.category_weekday {
        let mut cells = vec![Cell::new(category)];
        cells.extend(days.iter().map(|(_, count)| Cell::new(&count.to_string())));
        table.add_row(Row::new(cells));
    }
    table.printstd();
}

/// Print the whole report, top lists truncated to `display_limit` rows.
pub fn print_report(report: &AnalysisReport, display_limit: usize) {
    print_category_counts(
        "Category distribution (before balancing)",
        &report.counts_before_balancing,
    );
    print_category_counts(
        "Category distribution (after balancing)",
        &report.counts_after_balancing,
    );

    for (category, terms) in &report.top_words {
        let shown = &terms[..terms.len().min(display_limit)];
        print_term_counts("Top words", category, shown);
    }
    for (category, terms) in &report.top_bigrams {
        let shown = &terms[..terms.len().min(display_limit)];
        print_term_counts("Top bigrams", category, shown);
    }

    print_exclusive_words(&report.exclusive_words);
    print_date_report(&report.dates);
}
