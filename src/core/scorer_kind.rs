use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FuzzyError, Result};
use crate::scoring::{
    ExactRatioScorer, PartialRatioScorer, ScoreWeights, Scorer, TokenSetRatioScorer,
    TokenSortRatioScorer, WeightedRatioScorer,
};

/// Closed set of available scorers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScorerKind {
    /// Edit-distance ratio of the full strings
    ExactRatio,
    /// Best matching substring window
    PartialRatio,
    /// Ratio after sorting tokens
    TokenSortRatio,
    /// Shared/unique token set comparison
    TokenSetRatio,
    /// Composite of all of the above
    #[default]
    WeightedRatio,
}

impl ScorerKind {
    /// All variants, in documentation order
    pub const ALL: [ScorerKind; 5] = [
        ScorerKind::ExactRatio,
        ScorerKind::PartialRatio,
        ScorerKind::TokenSortRatio,
        ScorerKind::TokenSetRatio,
        ScorerKind::WeightedRatio,
    ];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            ScorerKind::ExactRatio => "ExactRatio",
            ScorerKind::PartialRatio => "PartialRatio",
            ScorerKind::TokenSortRatio => "TokenSortRatio",
            ScorerKind::TokenSetRatio => "TokenSetRatio",
            ScorerKind::WeightedRatio => "WeightedRatio",
        }
    }

    /// One-line human readable description
    pub fn description(self) -> &'static str {
        match self {
            ScorerKind::ExactRatio => {
                "Edit-distance similarity of the two full strings."
            }
            ScorerKind::PartialRatio => {
                "Best similarity of the shorter string against any equally long substring of the longer one."
            }
            ScorerKind::TokenSortRatio => {
                "Similarity after lowercasing and sorting words, ignoring word order."
            }
            ScorerKind::TokenSetRatio => {
                "Compares shared words against each side's unique words, tolerating extra or repeated words."
            }
            ScorerKind::WeightedRatio => {
                "Default. Picks the strongest of the other scorers using length and token heuristics."
            }
        }
    }

    /// Resolve a scorer selector.
    ///
    /// Accepts canonical names and snake_case aliases, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "exactratio" | "ratio" => Ok(ScorerKind::ExactRatio),
            "partialratio" => Ok(ScorerKind::PartialRatio),
            "tokensortratio" => Ok(ScorerKind::TokenSortRatio),
            "tokensetratio" => Ok(ScorerKind::TokenSetRatio),
            "weightedratio" | "wratio" => Ok(ScorerKind::WeightedRatio),
            _ => Err(FuzzyError::UnknownScorer {
                name: name.to_string(),
                valid: Self::names().iter().map(|n| n.to_string()).collect(),
            }),
        }
    }

    /// Canonical names of every variant
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.name()).collect()
    }

    /// Build the scorer implementing this variant
    pub fn scorer(self, weights: ScoreWeights) -> Box<dyn Scorer> {
        match self {
            ScorerKind::ExactRatio => Box::new(ExactRatioScorer),
            ScorerKind::PartialRatio => Box::new(PartialRatioScorer),
            ScorerKind::TokenSortRatio => Box::new(TokenSortRatioScorer),
            ScorerKind::TokenSetRatio => Box::new(TokenSetRatioScorer),
            ScorerKind::WeightedRatio => Box::new(WeightedRatioScorer::new(weights)),
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScorerKind {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
