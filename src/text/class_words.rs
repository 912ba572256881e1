use std::collections::HashMap;
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

use super::TARGET_TEXT;

/// Per-category words that dominate a category without telling it apart from
/// the others. Removal is literal substring replacement, applied in list order.
pub const BANGLA_CLASS_WORDS: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "প্রতিমন্ত্রী",
            "ব্যাংক",
            "বাজারে",
            "তথ্য",
            "বাংলাদেশের",
            "টাকা",
            "নামের",
            "সংখ্যা",
            "পণ্য",
        ],
    ),
    ("economy", &["ছাত্রলীগের", "প্রতিষ্ঠান", "তথ্য", "সরকার"]),
    (
        "entertainment",
        &["প্রতিমন্ত্রী", "ব্যাংক", "বাজারে", "সামাজিক", "পোস্ট"],
    ),
    (
        "health",
        &[
            "ঘন্টায়",
            "গেছেন",
            "দাঁড়িয়েছে",
            "জানানো",
            "বিজ্ঞপ্তি",
            "সংখ্যা",
            "বাইরে",
        ],
    ),
    (
        "education",
        &[
            "সভাপতি",
            "ইসলাম",
            "শেখ",
            "কমিটি",
            "ছাত্রলীগের",
            "অনুষ্ঠিত",
            "তথ্য",
            "এদিকে",
            "সূত্র",
        ],
    ),
    ("crime", &["রাজধানী", "ইসলাম", "আলোকে", "এলাকার"]),
    ("lifestyle", &["টাকা"]),
    ("environment", &["তথ্য"]),
];

/// Category label to the ordered list of substrings excised from that
/// category's cleaned text.
#[derive(Debug, Clone, Default)]
pub struct ClassWordMap {
    entries: HashMap<String, Vec<String>>,
}

impl ClassWordMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The map used for the newspaper corpus.
    pub fn bangla_news() -> Self {
        BANGLA_CLASS_WORDS
            .iter()
            .fold(Self::new(), |map, (category, words)| {
                map.with_category(category, words.iter().copied())
            })
    }

    /// Replace the word list for `category`. Words are NFC-composed; empty
    /// entries are skipped since removing "" is meaningless.
    pub fn with_category<I, S>(mut self, category: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().nfc().collect::<String>())
            .filter(|word| !word.is_empty())
            .collect();
        self.entries.insert(category.to_string(), words);
        self
    }

    pub fn words_for(&self, category: &str) -> Option<&[String]> {
        self.entries.get(category).map(Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Remove the category's listed substrings from already-cleaned text, then
    /// collapse whitespace runs and trim. Unmapped categories pass through
    /// untouched.
    ///
    /// Matching is plain substring replacement, so a listed word also cuts
    /// into any longer token containing it.
    pub fn remove_class_words(&self, text: &str, category: &str) -> String {
        let Some(words) = self.entries.get(category) else {
            return text.to_string();
        };

        let mut result = text.to_string();
        for word in words {
            if result.contains(word.as_str()) {
                trace!(target: TARGET_TEXT, "Removing '{}' from {} text", word, category);
                result = result.replace(word.as_str(), "");
            }
        }

        result.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
