/// Levenshtein distance between two strings, counted in Unicode scalar values.
///
/// Insertions, deletions and substitutions each cost 1.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_chars(&a, &b)
}

/// Similarity ratio in `[0, 100]`: `100 * (L - d) / L` with `L = |a| + |b|`.
///
/// Two empty strings score 100.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

pub(crate) fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }

    let dist = distance_chars(a, b);
    100.0 * (total - dist) as f64 / total as f64
}

pub(crate) fn distance_chars(a: &[char], b: &[char]) -> usize {
    // Shared prefix and suffix never contribute to the distance
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    let (a, b) = (&a[..a.len() - suffix], &b[..b.len() - suffix]);

    // Row over the shorter side keeps memory at O(min(|a|, |b|))
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lc) in long.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            let cost = if lc == sc { 0 } else { 1 };
            let next = (row[j] + 1) // insertion
                .min(row[j + 1] + 1) // deletion
                .min(diag + cost); // substitution
            diag = row[j + 1];
            row[j + 1] = next;
        }
    }

    row[short.len()]
}
