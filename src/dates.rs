//! Parser for the semi-structured Bangla publication dates found in the
//! newspaper datasets, e.g. `১২ জানুয়ারি ২০২১, ১৪:৩০` or `১০:০৫, ৩ মার্চ ২০১৯`.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

pub const TARGET_DATES: &str = "dates";

/// Bangla (Gregorian) month names.
pub const BANGLA_MONTHS: [(&str, u32); 12] = [
    ("জানুয়ারি", 1),
    ("ফেব্রুয়ারি", 2),
    ("মার্চ", 3),
    ("এপ্রিল", 4),
    ("মে", 5),
    ("জুন", 6),
    ("জুলাই", 7),
    ("আগস্ট", 8),
    ("সেপ্টেম্বর", 9),
    ("অক্টোবর", 10),
    ("নভেম্বর", 11),
    ("ডিসেম্বর", 12),
];

/// Bangla digit glyphs ০-৯, indexed by value.
pub const BANGLA_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

const DAY_FIRST_GRAMMAR: &str = r"(?P<day>[0-9]{1,2})\s+(?P<month>\S+)\s+(?P<year>[0-9]{4})(?:,\s*(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{2}))?";
const TIME_FIRST_GRAMMAR: &str = r"(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{2}),\s*(?P<day>[0-9]{1,2})\s+(?P<month>\S+)\s+(?P<year>[0-9]{4})";

lazy_static! {
    // Labels such as "প্রকাশ: " or "আপডেট - " in front of the date.
    static ref LEADING_LABEL: Regex = Regex::new(r"^[^0-9\x{09E6}-\x{09EF}]+").unwrap();

    // Day-first: "12 জানুয়ারি 2021" with an optional ", 14:30".
    static ref DAY_FIRST: Regex = Regex::new(&format!("^{}", DAY_FIRST_GRAMMAR)).unwrap();
    static ref DAY_FIRST_ANYWHERE: Regex = Regex::new(DAY_FIRST_GRAMMAR).unwrap();

    // Time-first: "10:05, 3 মার্চ 2019".
    static ref TIME_FIRST: Regex = Regex::new(&format!("^{}", TIME_FIRST_GRAMMAR)).unwrap();
    static ref TIME_FIRST_ANYWHERE: Regex = Regex::new(TIME_FIRST_GRAMMAR).unwrap();
}

/// Outcome of parsing one `published_date` value. There is no partial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsedDate {
    /// Naive local timestamp, minute precision.
    Parsed(NaiveDateTime),
    Unparsed,
}

impl ParsedDate {
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        match self {
            ParsedDate::Parsed(dt) => Some(*dt),
            ParsedDate::Unparsed => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, ParsedDate::Parsed(_))
    }

    /// (year, month, day, hour, minute) of a parsed date.
    pub fn fields(&self) -> Option<(i32, u32, u32, u32, u32)> {
        self.datetime()
            .map(|dt| (dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute()))
    }
}

/// Replace Bangla digit glyphs with ASCII digits; everything else is kept.
pub fn transliterate_digits(text: &str) -> String {
    text.chars()
        .map(|c| match BANGLA_DIGITS.iter().position(|&d| d == c) {
            Some(value) => char::from(b'0' + value as u8),
            None => c,
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct BanglaDateParser {
    months: HashMap<String, u32>,
}

impl Default for BanglaDateParser {
    fn default() -> Self {
        Self::with_months(BANGLA_MONTHS)
    }
}

impl BanglaDateParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parser over a custom month table. Names are NFC-composed;
    /// numbers outside 1-12 simply never produce a valid date.
    pub fn with_months<I, S>(months: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let months = months
            .into_iter()
            .map(|(name, number)| (name.as_ref().trim().nfc().collect::<String>(), number))
            .collect();
        Self { months }
    }

    pub fn month_number(&self, name: &str) -> Option<u32> {
        self.months
            .get(&name.nfc().collect::<String>())
            .copied()
    }

    /// Parse a raw `published_date`. Missing values and every failure (no
    /// grammar matched, unknown month, impossible date or time) are `Unparsed`.
    pub fn parse(&self, raw: Option<&str>) -> ParsedDate {
        let Some(raw) = raw else {
            return ParsedDate::Unparsed;
        };

        let trimmed = raw.trim();
        let without_label = LEADING_LABEL.replace(trimmed, "");
        let cleaned = transliterate_digits(&without_label);

        // A date at the very start wins; otherwise take the first one found
        // anywhere, day-first before time-first.
        let parsed = DAY_FIRST
            .captures(&cleaned)
            .or_else(|| TIME_FIRST.captures(&cleaned))
            .or_else(|| DAY_FIRST_ANYWHERE.captures(&cleaned))
            .or_else(|| TIME_FIRST_ANYWHERE.captures(&cleaned))
            .and_then(|caps| self.datetime_from(&caps));

        match parsed {
            Some(dt) => ParsedDate::Parsed(dt),
            None => {
                trace!(target: TARGET_DATES, "Could not parse date '{}'", raw);
                ParsedDate::Unparsed
            }
        }
    }

    fn datetime_from(&self, caps: &Captures) -> Option<NaiveDateTime> {
        let number = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok());

        let month = self.month_number(caps.name("month")?.as_str())?;
        let day = number("day")?;
        let year = caps
            .name("year")?
            .as_str()
            .parse::<i32>()
            .ok()
            .filter(|year| *year >= 1)?;
        let hour = number("hour").unwrap_or(0);
        let minute = number("minute").unwrap_or(0);

        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(NaiveDateTime::new(date, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ParsedDate {
        BanglaDateParser::new().parse(Some(raw))
    }

    #[test]
    fn test_day_first_with_time() {
        assert_eq!(
            parse("১২ জানুয়ারি ২০২১, ১৪:৩০").fields(),
            Some((2021, 1, 12, 14, 30))
        );
    }

    #[test]
    fn test_time_first() {
        assert_eq!(
            parse("১০:০৫, ৩ মার্চ ২০১৯").fields(),
            Some((2019, 3, 3, 10, 5))
        );
    }

    #[test]
    fn test_missing_time_defaults_to_midnight() {
        assert_eq!(parse("৫ মে ২০২২").fields(), Some((2022, 5, 5, 0, 0)));
    }

    #[test]
    fn test_invalid_calendar_date() {
        assert_eq!(parse("৩১ ফেব্রুয়ারি ২০২০"), ParsedDate::Unparsed);
        assert_eq!(parse("৩১ এপ্রিল ২০২০"), ParsedDate::Unparsed);
        assert!(parse("২৯ ফেব্রুয়ারি ২০২০").is_parsed());
        assert_eq!(parse("১ জানুয়ারি ০০০০"), ParsedDate::Unparsed);
        assert!(parse("১ জানুয়ারি ০০০১").is_parsed());
    }

    #[test]
    fn test_no_pattern() {
        assert_eq!(parse("গতকাল"), ParsedDate::Unparsed);
        assert_eq!(parse(""), ParsedDate::Unparsed);
        assert_eq!(BanglaDateParser::new().parse(None), ParsedDate::Unparsed);
    }

    #[test]
    fn test_unknown_month() {
        assert_eq!(parse("১২ January ২০২১"), ParsedDate::Unparsed);
        assert_eq!(parse("১২ বৈশাখ ১৪২৮"), ParsedDate::Unparsed);
    }

    #[test]
    fn test_invalid_time() {
        assert_eq!(parse("১২ জানুয়ারি ২০২১, ২৪:০০"), ParsedDate::Unparsed);
        assert_eq!(parse("১২ জানুয়ারি ২০২১, ১০:৬০"), ParsedDate::Unparsed);
    }

    #[test]
    fn test_strips_leading_label_and_mixed_digits() {
        assert_eq!(
            parse("প্রকাশ: 12 জানুয়ারি ২০২১, 09:15").fields(),
            Some((2021, 1, 12, 9, 15))
        );
        assert_eq!(
            parse("  আপডেট - ০৭ আগস্ট 2020  ").fields(),
            Some((2020, 8, 7, 0, 0))
        );
    }

    #[test]
    fn test_date_after_leading_text() {
        assert_eq!(
            parse("১৪:৩০ ১২ জানুয়ারি ২০২১").fields(),
            Some((2021, 1, 12, 0, 0))
        );
        assert_eq!(
            parse("আপডেট ২ ঘণ্টা আগে, প্রকাশ: ১২ জানুয়ারি ২০২১").fields(),
            Some((2021, 1, 12, 0, 0))
        );
        // A time-first date at the start keeps its time.
        assert_eq!(
            parse("১০:০৫, ৩ মার্চ ২০১৯").fields(),
            Some((2019, 3, 3, 10, 5))
        );
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        assert_eq!(
            parse("৫ মে ২০২২, ০৮:০০ অপরাহ্ণ").fields(),
            Some((2022, 5, 5, 8, 0))
        );
    }

    #[test]
    fn test_month_lookup_is_canonical() {
        // জানুয়ারি written with the precomposed য় (U+09DF).
        assert_eq!(
            parse("১ জানু\u{09DF}ারি ২০২০").fields(),
            Some((2020, 1, 1, 0, 0))
        );
    }

    #[test]
    fn test_out_of_range_month_table_entry() {
        let parser = BanglaDateParser::with_months([("ত্রয়োদশ", 13)]);
        assert_eq!(parser.parse(Some("১ ত্রয়োদশ ২০২০")), ParsedDate::Unparsed);
    }

    #[test]
    fn test_transliterate_digits() {
        assert_eq!(transliterate_digits("২০২১-abc-৯"), "2021-abc-9");
    }
}
