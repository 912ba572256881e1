use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // Matches the same loose shapes the newsroom exports carry: a bare
    // `http...` run or `www` followed by any separator.
    static ref URL_PATTERN: Regex = Regex::new(r"http\S+|www.\S+").unwrap();
}

/// First and last code points of the Bangla Unicode block.
pub const BANGLA_BLOCK_START: char = '\u{0980}';
pub const BANGLA_BLOCK_END: char = '\u{09FF}';

/// Returns true for characters inside the Bangla block (letters, signs and digits).
pub fn is_bangla_char(c: char) -> bool {
    (BANGLA_BLOCK_START..=BANGLA_BLOCK_END).contains(&c)
}

/// Canonicalizes raw article text down to Bangla script and whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize raw text: NFC, URL removal, then everything outside the Bangla
    /// block and whitespace is dropped.
    ///
    /// Missing text normalizes to an empty string. Whitespace runs are kept as-is.
    pub fn normalize(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw else {
            return String::new();
        };

        let composed: String = raw.nfc().collect();
        let without_urls = URL_PATTERN.replace_all(&composed, "");

        let filtered: String = without_urls
            .chars()
            .filter(|c| is_bangla_char(*c) || c.is_whitespace())
            .collect();

        // Dropping noise can leave a vowel sign next to its partner (e.g. ে + া),
        // so compose again to keep a single canonical encoding.
        filtered.nfc().collect()
    }

    /// Normalize a single lookup key (stopword, class word, month name).
    pub fn canonical(&self, word: &str) -> String {
        word.trim().nfc().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_bangla_or_whitespace(text: &str) -> bool {
        text.chars().all(|c| is_bangla_char(c) || c.is_whitespace())
    }

    #[test]
    fn test_missing_text_is_empty() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize(None), "");
        assert_eq!(normalizer.normalize(Some("")), "");
    }

    #[test]
    fn test_strips_latin_digits_and_punctuation() {
        let normalizer = TextNormalizer::new();
        let cleaned = normalizer.normalize(Some("ঢাকায় Apple 2021! বৃষ্টি, 😀 হয়েছে।"));
        assert!(only_bangla_or_whitespace(&cleaned));
        assert!(cleaned.contains("ঢাকায়"));
        assert!(cleaned.contains("বৃষ্টি"));
        assert!(!cleaned.contains("Apple"));
        assert!(!cleaned.contains('2'));
        assert!(!cleaned.contains('!'));
    }

    #[test]
    fn test_keeps_bangla_digits_drops_danda() {
        // The danda is U+0964, shared from the Devanagari block.
        let normalizer = TextNormalizer::new();
        let cleaned = normalizer.normalize(Some("২০২১ সালে।"));
        assert_eq!(cleaned, "২০২১ সালে");
    }

    #[test]
    fn test_strips_urls_before_script_filter() {
        let normalizer = TextNormalizer::new();
        let cleaned = normalizer.normalize(Some("খবর https://example.com/খবর দেখুন www.site.bd/পাতা শেষ"));
        assert_eq!(cleaned.split_whitespace().collect::<Vec<_>>(), vec!["খবর", "দেখুন", "শেষ"]);
    }

    #[test]
    fn test_composes_decomposed_vowel_signs() {
        let normalizer = TextNormalizer::new();
        // ক + ে + া composes to ক + ো under NFC.
        let decomposed = "\u{0995}\u{09C7}\u{09BE}";
        assert_eq!(normalizer.normalize(Some(decomposed)), "\u{0995}\u{09CB}");
    }

    #[test]
    fn test_recomposes_after_noise_removal() {
        let normalizer = TextNormalizer::new();
        let split_by_noise = "\u{0995}\u{09C7}x\u{09BE}";
        let once = normalizer.normalize(Some(split_by_noise));
        assert_eq!(once, "\u{0995}\u{09CB}");
        assert_eq!(normalizer.normalize(Some(&once)), once);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = TextNormalizer::new();
        let samples = [
            "আজ ঢাকায় ২০ মিমি বৃষ্টি হয়েছে, জানিয়েছে আবহাওয়া অফিস (BMD).",
            "Breaking: http://x.co/a ক্রিকেট   দল\tজয়ী\nহয়েছে",
            "\u{0995}\u{09C7}-\u{09BE} www.test",
            "",
        ];
        for sample in samples {
            let once = normalizer.normalize(Some(sample));
            assert_eq!(normalizer.normalize(Some(&once)), once, "sample: {sample}");
            assert!(only_bangla_or_whitespace(&once));
        }
    }
}
