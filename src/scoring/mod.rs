pub mod levenshtein;
pub mod normalize;
pub mod partial;
pub mod token;
pub mod weighted;

pub use levenshtein::{distance, ratio};
pub use normalize::{normalize, preprocess, tokenize};
pub use partial::partial_ratio;
pub use token::{token_set_ratio, token_sort_ratio};
pub use weighted::{weighted_ratio, weighted_ratio_with, ScoreWeights};

/// Trait for similarity scorers
pub trait Scorer: Send + Sync {
    /// Similarity of `query` and `candidate` in `[0, 100]`
    fn score(&self, query: &str, candidate: &str) -> f64;

    /// Get scorer name for logging
    fn name(&self) -> &str;
}

/// Plain edit-distance ratio
pub struct ExactRatioScorer;

impl Scorer for ExactRatioScorer {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        ratio(query, candidate)
    }

    fn name(&self) -> &str {
        "ExactRatio"
    }
}

/// Best aligned substring ratio
pub struct PartialRatioScorer;

impl Scorer for PartialRatioScorer {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        partial_ratio(query, candidate)
    }

    fn name(&self) -> &str {
        "PartialRatio"
    }
}

/// Word-order-insensitive ratio
pub struct TokenSortRatioScorer;

impl Scorer for TokenSortRatioScorer {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        token_sort_ratio(query, candidate)
    }

    fn name(&self) -> &str {
        "TokenSortRatio"
    }
}

/// Token set comparison
pub struct TokenSetRatioScorer;

impl Scorer for TokenSetRatioScorer {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        token_set_ratio(query, candidate)
    }

    fn name(&self) -> &str {
        "TokenSetRatio"
    }
}

/// Composite scorer with configurable weights
pub struct WeightedRatioScorer {
    weights: ScoreWeights,
}

impl WeightedRatioScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }
}

impl Default for WeightedRatioScorer {
    fn default() -> Self {
        Self::new(ScoreWeights::default())
    }
}

impl Scorer for WeightedRatioScorer {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        weighted_ratio_with(query, candidate, &self.weights)
    }

    fn name(&self) -> &str {
        "WeightedRatio"
    }
}
