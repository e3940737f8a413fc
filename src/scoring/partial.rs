use super::levenshtein::ratio_chars;

/// Best ratio of the shorter string against every equally long window of the
/// longer one, never lower than the plain ratio of the two strings.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    partial_ratio_chars(&a, &b)
}

pub(crate) fn partial_ratio_chars(a: &[char], b: &[char]) -> f64 {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return if long.is_empty() { 100.0 } else { 0.0 };
    }

    let mut best = 0.0f64;
    for window in long.windows(short.len()) {
        let score = ratio_chars(short, window);
        if score > best {
            best = score;
            if best >= 100.0 {
                return 100.0;
            }
        }
    }

    best.max(ratio_chars(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::levenshtein::ratio;

    #[test]
    fn test_partial_substring_scores_100() {
        assert_eq!(partial_ratio("apple", "pineapple"), 100.0);
        assert_eq!(partial_ratio("pineapple", "apple"), 100.0);
        assert_eq!(partial_ratio("appl", "apple"), 100.0);
    }

    #[test]
    fn test_partial_empty_inputs() {
        assert_eq!(partial_ratio("", ""), 100.0);
        assert_eq!(partial_ratio("", "apple"), 0.0);
        assert_eq!(partial_ratio("apple", ""), 0.0);
    }

    #[test]
    fn test_partial_equal_length_is_plain_ratio() {
        assert_eq!(partial_ratio("abcd", "abxy"), ratio("abcd", "abxy"));
    }

    #[test]
    fn test_partial_never_below_ratio() {
        let pairs = [
            ("apple", "banana"),
            ("vampire survivors", "vampire"),
            ("abcde", "xabcdex"),
            ("left 4 dead", "dead"),
        ];
        for (a, b) in pairs {
            assert!(partial_ratio(a, b) >= ratio(a, b), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_partial_near_substring() {
        // one typo inside a longer title
        let score = partial_ratio("survivers", "vampire survivors");
        assert!(score > 85.0 && score < 100.0, "score = {score}");
    }
}
