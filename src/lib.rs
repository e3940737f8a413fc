//! # Fuzzy Rank
//!
//! Fuzzy string ranking engine with:
//! - Edit-distance ratio, partial, token-sort and token-set scorers
//! - Composite WRatio scorer with tunable weights
//! - Stable top-K ranking, parallel for large candidate lists
//! - Static discovery document for collaborators
//!
//! ## Example Usage
//!
//! ```rust
//! use fuzzy_rank::{FuzzyEngine, SearchQuery};
//!
//! let engine = FuzzyEngine::default();
//! let candidates = vec!["apple pie".to_string(), "banana".to_string()];
//!
//! let response = engine.search(&SearchQuery::new("apple", candidates)).unwrap();
//! assert_eq!(response.results[0].value, "apple pie");
//! ```

pub mod catalog;
pub mod core;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod scoring;

// Re-export primary types
pub use crate::core::{RankedResult, Score, ScorePrecision, ScorerKind, SearchResponse};
pub use engine::{FuzzyEngine, SearchOptions, SearchQuery};
pub use error::{FuzzyError, Result};
pub use ranking::{extract_one, rank, RankOptions};
pub use scoring::{
    partial_ratio, ratio, token_set_ratio, token_sort_ratio, weighted_ratio, ScoreWeights, Scorer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
