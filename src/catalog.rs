//! Static service description: valid scorers, formats and a worked example.

use serde::Serialize;

use crate::core::ScorerKind;
use crate::ranking::DEFAULT_LIMIT;

/// One scorer entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorerInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Expected (value, score) pair of the worked example
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleMatch {
    pub value: &'static str,
    pub score: u8,
}

/// Worked example
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Example {
    pub searched_string: &'static str,
    pub searched_values: Vec<&'static str>,
    pub scorer: ScorerKind,
    pub expected_top: Vec<ExampleMatch>,
}

/// Discovery document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HelpDocument {
    pub service: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub input_format: Vec<(&'static str, &'static str)>,
    pub output_format: Vec<(&'static str, &'static str)>,
    pub default_scorer: ScorerKind,
    pub limit: usize,
    pub scorers: Vec<ScorerInfo>,
    pub example: Example,
}

/// Canonical names of the valid scorers
pub fn scorer_names() -> Vec<&'static str> {
    ScorerKind::names()
}

/// Build the discovery document
pub fn help() -> HelpDocument {
    HelpDocument {
        service: "Fuzzy Rank",
        version: crate::VERSION,
        description: "Accepts a search string and a list of candidate strings and returns the \
                      most similar candidates, best first, scored from 0 to 100.",
        input_format: vec![
            ("searched_string", "The string you are searching for."),
            ("searched_values", "Non-empty list of strings to compare against."),
            ("scorer", "Optional scorer name, WeightedRatio when omitted."),
        ],
        output_format: vec![
            ("results", "Up to the limit of {value, score, index} entries, best first."),
            ("score", "Similarity from 0 to 100; ties keep input order."),
        ],
        default_scorer: ScorerKind::default(),
        limit: DEFAULT_LIMIT,
        scorers: ScorerKind::ALL
            .iter()
            .map(|kind| ScorerInfo {
                name: kind.name(),
                description: kind.description(),
            })
            .collect(),
        example: Example {
            searched_string: "apple",
            searched_values: vec!["apple pie", "appl", "pineapple", "banana"],
            scorer: ScorerKind::WeightedRatio,
            expected_top: vec![
                ExampleMatch { value: "apple pie", score: 100 },
                ExampleMatch { value: "appl", score: 100 },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Score;
    use crate::ranking::{rank, RankOptions};

    #[test]
    fn test_help_lists_every_scorer() {
        let doc = help();
        let names: Vec<&str> = doc.scorers.iter().map(|s| s.name).collect();

        assert_eq!(names, scorer_names());
        assert_eq!(doc.default_scorer, ScorerKind::WeightedRatio);
        assert_eq!(doc.limit, 10);
        assert!(doc.scorers.iter().all(|s| !s.description.is_empty()));
    }

    #[test]
    fn test_example_matches_engine() {
        let example = help().example;
        let ranked = rank(
            example.searched_string,
            &example.searched_values,
            example.scorer,
            &RankOptions::default(),
        )
        .unwrap();

        for (expected, actual) in example.expected_top.iter().zip(&ranked) {
            assert_eq!(actual.value, expected.value);
            assert_eq!(actual.score, Score::Integer(expected.score));
        }
    }

    #[test]
    fn test_help_serializes() {
        let json = serde_json::to_value(help()).unwrap();
        assert_eq!(json["default_scorer"], "WeightedRatio");
        assert_eq!(json["example"]["expected_top"][0]["value"], "apple pie");
    }
}
