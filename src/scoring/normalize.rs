use unicode_normalization::UnicodeNormalization;

/// Lowercase, trim and collapse internal whitespace runs to a single space.
///
/// Input is NFC-composed first so that precomposed and decomposed forms of
/// the same text normalize identically.
pub fn normalize(text: &str) -> String {
    let lower = text.nfc().collect::<String>().to_lowercase();

    let mut out = String::with_capacity(lower.len());
    for word in lower.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Normalize, then split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Replace every non-alphanumeric character with a space, then normalize.
///
/// Applied by the ranker only when the processor option is enabled.
pub fn preprocess(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    normalize(&replaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_collapses() {
        assert_eq!(normalize("  Vampire \t  SURVIVORS \n"), "vampire survivors");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn test_normalize_composes_unicode() {
        // "e" + combining acute accent vs precomposed "é"
        assert_eq!(normalize("Cafe\u{301}"), normalize("CAFÉ"));
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize(" New  York Mets "), vec!["new", "york", "mets"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_preprocess_strips_punctuation() {
        assert_eq!(preprocess("Counter-Strike: 2!"), "counter strike 2");
        assert_eq!(preprocess("---"), "");
    }
}
