use std::collections::BTreeSet;

use super::levenshtein::ratio;
use super::normalize::tokenize;

/// Ratio of the two strings after sorting their normalized tokens.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Set-aware token comparison: shared tokens are compared against each side's
/// shared-plus-unique tokens, so extra or repeated words cost little.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<String> = tokenize(a).into_iter().collect();
    let tokens_b: BTreeSet<String> = tokenize(b).into_iter().collect();

    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 100.0;
    }

    // BTreeSet iteration is already sorted
    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).map(String::as_str).collect();
    let diff_a: Vec<&str> = tokens_a.difference(&tokens_b).map(String::as_str).collect();
    let diff_b: Vec<&str> = tokens_b.difference(&tokens_a).map(String::as_str).collect();

    let t0 = intersection.join(" ");
    let t1 = join_sections(&t0, &diff_a);
    let t2 = join_sections(&t0, &diff_b);

    if intersection.is_empty() {
        return ratio(&t1, &t2);
    }

    ratio(&t0, &t1).max(ratio(&t0, &t2)).max(ratio(&t1, &t2))
}

fn sorted_tokens(text: &str) -> String {
    let mut tokens = tokenize(text);
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_sections(head: &str, tail: &[&str]) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (_, true) => head.to_string(),
        (true, false) => tail.join(" "),
        (false, false) => format!("{} {}", head, tail.join(" ")),
    }
}
