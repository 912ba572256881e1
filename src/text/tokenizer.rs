/// Split cleaned text on whitespace runs. No stemming or further normalization.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Consecutive token pairs joined by a single space. Fewer than two tokens
/// yield nothing.
pub fn bigrams(tokens: &[String]) -> impl Iterator<Item = String> + '_ {
    tokens
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_any_whitespace() {
        assert_eq!(
            tokenize(" ক্রিকেট\tদল \n জয়ী  "),
            vec!["ক্রিকেট", "দল", "জয়ী"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n").is_empty());
    }

    #[test]
    fn test_bigrams() {
        let single = tokenize("ক");
        assert_eq!(bigrams(&single).count(), 0);
        assert_eq!(bigrams(&[]).count(), 0);

        let tokens = tokenize("ক খ গ");
        assert_eq!(bigrams(&tokens).collect::<Vec<_>>(), vec!["ক খ", "খ গ"]);
    }
}
