use serde::{Deserialize, Serialize};

use super::levenshtein::ratio_chars;
use super::partial::partial_ratio_chars;
use super::token::{token_set_ratio, token_sort_ratio};

/// Tunable constants of the composite scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Length ratio (longer / shorter) from which the partial score is folded in
    pub partial_cutoff: f64,

    /// Scale applied to the partial score
    pub partial_scale: f64,

    /// Length ratio above which `long_partial_scale` replaces `partial_scale`
    pub long_cutoff: f64,

    /// Scale applied to the partial score for very unequal lengths
    pub long_partial_scale: f64,

    /// Scale applied to the best token-based score
    pub token_scale: f64,
}

impl Default for ScoreWeights {
    /// Weights under which the composite never scores below any sub-scorer.
    fn default() -> Self {
        Self {
            partial_cutoff: 1.0,
            partial_scale: 1.0,
            long_cutoff: 8.0,
            long_partial_scale: 1.0,
            token_scale: 1.0,
        }
    }
}

impl ScoreWeights {
    /// Classic WRatio constants: partial matching only once lengths differ by
    /// half, and discounted partial/token signals.
    pub fn tuned() -> Self {
        Self {
            partial_cutoff: 1.5,
            partial_scale: 0.9,
            long_cutoff: 8.0,
            long_partial_scale: 0.6,
            token_scale: 0.95,
        }
    }

    fn partial_scale_for(&self, len_ratio: f64) -> f64 {
        if len_ratio > self.long_cutoff {
            self.long_partial_scale
        } else {
            self.partial_scale
        }
    }
}

/// Composite scorer using [`ScoreWeights::default`].
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    weighted_ratio_with(a, b, &ScoreWeights::default())
}

/// Composite scorer: plain ratio, a length-weighted partial ratio and the
/// scaled best token ratio, whichever is highest.
pub fn weighted_ratio_with(a: &str, b: &str, weights: &ScoreWeights) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut best = ratio_chars(&a_chars, &b_chars);

    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (a_chars.len(), b_chars.len())
    } else {
        (b_chars.len(), a_chars.len())
    };

    if shorter > 0 {
        let len_ratio = longer as f64 / shorter as f64;
        if len_ratio >= weights.partial_cutoff {
            let partial = partial_ratio_chars(&a_chars, &b_chars);
            best = best.max(partial * weights.partial_scale_for(len_ratio));
        }
    }

    if best < 100.0 {
        let token = token_sort_ratio(a, b).max(token_set_ratio(a, b));
        best = best.max(token * weights.token_scale);
    }

    best.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{partial_ratio, ratio};

    fn all_subscores(a: &str, b: &str) -> f64 {
        ratio(a, b)
            .max(partial_ratio(a, b))
            .max(token_sort_ratio(a, b))
            .max(token_set_ratio(a, b))
    }

    #[test]
    fn test_weighted_dominates_subscorers() {
        let pairs = [
            ("apple", "apple pie"),
            ("apple", "banana"),
            ("Apple", "apple"),
            ("abcde", "xabcdex"),
            ("new york mets", "NEW YORK METS vs atlanta braves"),
            ("", ""),
            ("  ", ""),
            ("", "apple"),
            ("a", "a very long candidate string indeed"),
        ];
        for (a, b) in pairs {
            let score = weighted_ratio(a, b);
            assert!(score >= all_subscores(a, b), "{a:?} vs {b:?}: {score}");
            assert!(score <= 100.0);
        }
    }

    #[test]
    fn test_weighted_equals_ratio_for_equal_lengths() {
        // same length, single token, no case/spacing differences
        assert_eq!(weighted_ratio("abcd", "abxy"), ratio("abcd", "abxy"));
    }

    #[test]
    fn test_weighted_substring_in_longer_candidate() {
        assert_eq!(weighted_ratio("apple", "apple pie"), 100.0);
        assert_eq!(weighted_ratio("apple", "pineapple"), 100.0);
    }

    #[test]
    fn test_weighted_empty() {
        assert_eq!(weighted_ratio("", ""), 100.0);
        assert_eq!(weighted_ratio("", "apple"), 0.0);
    }

    #[test]
    fn test_tuned_weights_discount_partial() {
        let tuned = ScoreWeights::tuned();

        // 5 vs 9 chars: partial branch at 0.9, token set still 100 * 0.95
        let score = weighted_ratio_with("apple", "pineapple", &tuned);
        assert!((score - 90.0).abs() < 1e-9, "score = {score}");

        // lengths ratio above 8: partial discounted to 0.6
        let score = weighted_ratio_with("ab", "xxxxxxxxxxxxxxxxxxab", &tuned);
        assert!((score - 60.0).abs() < 1e-9, "score = {score}");
    }

    #[test]
    fn test_tuned_weights_near_equal_lengths_skip_partial() {
        let tuned = ScoreWeights::tuned();
        let score = weighted_ratio_with("abcde", "xabcdex", &tuned);
        assert_eq!(score, ratio("abcde", "xabcdex"));
    }
}
