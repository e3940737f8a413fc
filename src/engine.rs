use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::core::{ScorePrecision, ScorerKind, SearchResponse};
use crate::error::{FuzzyError, Result};
use crate::ranking::{self, RankOptions};
use crate::scoring::ScoreWeights;

/// Search request as handed over by a collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The string to look for
    #[serde(rename = "searched_string")]
    pub query: String,

    /// Candidates, in tie-break order
    #[serde(rename = "searched_values")]
    pub candidates: Vec<String>,

    /// Scorer selector; `WeightedRatio` when absent
    #[serde(default)]
    pub scorer: Option<String>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, candidates: Vec<String>) -> Self {
        Self {
            query: query.into(),
            candidates,
            scorer: None,
        }
    }

    /// Select a scorer by name
    pub fn with_scorer(mut self, scorer: impl Into<String>) -> Self {
        self.scorer = Some(scorer.into());
        self
    }
}

/// Search options/configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchOptions {
    pub rank: RankOptions,
}

impl SearchOptions {
    /// Read overrides from `FUZZY_RANK_*` environment variables.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build options from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rank = RankOptions::default();

        if let Some(raw) = lookup("FUZZY_RANK_LIMIT") {
            match raw.trim().parse::<usize>() {
                Ok(limit) => rank.limit = limit,
                Err(e) => tracing::warn!("Ignoring FUZZY_RANK_LIMIT={:?}: {}", raw, e),
            }
        }

        if let Some(raw) = lookup("FUZZY_RANK_PRECISION") {
            match raw.trim().to_lowercase().as_str() {
                "integer" | "int" => rank.precision = ScorePrecision::Integer,
                "float" => rank.precision = ScorePrecision::Float,
                _ => tracing::warn!("Ignoring FUZZY_RANK_PRECISION={:?}", raw),
            }
        }

        if let Some(raw) = lookup("FUZZY_RANK_WEIGHTS") {
            match raw.trim().to_lowercase().as_str() {
                "strict" | "default" => rank.weights = ScoreWeights::default(),
                "tuned" => rank.weights = ScoreWeights::tuned(),
                _ => tracing::warn!("Ignoring FUZZY_RANK_WEIGHTS={:?}", raw),
            }
        }

        if let Some(raw) = lookup("FUZZY_RANK_PROCESS") {
            match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => rank.process = true,
                "0" | "false" | "no" | "off" => rank.process = false,
                _ => tracing::warn!("Ignoring FUZZY_RANK_PROCESS={:?}", raw),
            }
        }

        if let Some(raw) = lookup("FUZZY_RANK_CUTOFF") {
            match raw.trim().parse::<f64>() {
                Ok(cutoff) if (0.0..=100.0).contains(&cutoff) => rank.score_cutoff = Some(cutoff),
                _ => tracing::warn!("Ignoring FUZZY_RANK_CUTOFF={:?}", raw),
            }
        }

        Self { rank }
    }
}

/// Stateless search orchestrator: validation, scorer resolution, ranking
#[derive(Debug, Clone, Default)]
pub struct FuzzyEngine {
    options: SearchOptions,
}

impl FuzzyEngine {
    /// Create new engine
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Rank the query's candidates and return the top matches
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let start = Instant::now();

        if query.candidates.is_empty() {
            return Err(FuzzyError::InvalidInput(
                "searched_values cannot be empty".to_string(),
            ));
        }

        let scorer = match query.scorer.as_deref() {
            Some(name) => ScorerKind::from_name(name)?,
            None => ScorerKind::default(),
        };

        tracing::debug!(
            "Search request: {:?} against {} candidates with {}",
            query.query,
            query.candidates.len(),
            scorer
        );

        let results = ranking::rank(&query.query, &query.candidates, scorer, &self.options.rank)?;

        let response = SearchResponse {
            results,
            scorer,
            precision: self.options.rank.precision,
            candidates: query.candidates.len(),
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        };

        tracing::info!(
            "{} → {} ({:.2}ms)",
            query.query,
            response.display(),
            response.latency_ms
        );

        Ok(response)
    }

    /// Result limit in effect
    pub fn limit(&self) -> usize {
        self.options.rank.limit
    }
}

impl From<RankOptions> for SearchOptions {
    fn from(rank: RankOptions) -> Self {
        Self { rank }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn fruits() -> Vec<String> {
        ["apple pie", "appl", "pineapple", "banana"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_search_defaults_to_weighted_ratio() {
        let engine = FuzzyEngine::default();
        let response = engine.search(&SearchQuery::new("apple", fruits())).unwrap();

        assert_eq!(response.scorer, ScorerKind::WeightedRatio);
        assert_eq!(response.results.len(), 4);
        assert_eq!(response.candidates, 4);
        assert_eq!(response.results[0].value, "apple pie");
        assert_eq!(response.results[3].value, "banana");
    }

    #[test]
    fn test_search_rejects_empty_candidates() {
        let engine = FuzzyEngine::default();
        let err = engine.search(&SearchQuery::new("apple", Vec::new())).unwrap_err();
        assert!(matches!(err, FuzzyError::InvalidInput(_)));

        // validation order: empty candidates win over a bad scorer name
        let err = engine
            .search(&SearchQuery::new("apple", Vec::new()).with_scorer("bogus"))
            .unwrap_err();
        assert!(matches!(err, FuzzyError::InvalidInput(_)));
    }

    #[test]
    fn test_search_rejects_unknown_scorer() {
        let engine = FuzzyEngine::default();
        let err = engine
            .search(&SearchQuery::new("apple", fruits()).with_scorer("not_a_real_scorer"))
            .unwrap_err();

        assert_eq!(err.valid_scorers().map(|v| v.len()), Some(5));
    }

    #[test]
    fn test_search_query_uses_service_field_names() {
        let json = r#"{"searched_string": "apple", "searched_values": ["appl", "apple"], "scorer": "ExactRatio"}"#;
        let query: SearchQuery = serde_json::from_str(json).unwrap();

        assert_eq!(query.query, "apple");
        assert_eq!(query.candidates.len(), 2);
        assert_eq!(query.scorer.as_deref(), Some("ExactRatio"));

        let response = FuzzyEngine::default().search(&query).unwrap();
        assert_eq!(response.results[0].value, "apple");
    }

    #[test]
    fn test_options_from_lookup() {
        let env: HashMap<&str, &str> = [
            ("FUZZY_RANK_LIMIT", "3"),
            ("FUZZY_RANK_PRECISION", "float"),
            ("FUZZY_RANK_WEIGHTS", "tuned"),
            ("FUZZY_RANK_PROCESS", "yes"),
            ("FUZZY_RANK_CUTOFF", "50"),
        ]
        .into_iter()
        .collect();

        let options = SearchOptions::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(options.rank.limit, 3);
        assert_eq!(options.rank.precision, ScorePrecision::Float);
        assert_eq!(options.rank.weights, ScoreWeights::tuned());
        assert!(options.rank.process);
        assert_eq!(options.rank.score_cutoff, Some(50.0));
    }

    #[test]
    fn test_options_ignore_invalid_values() {
        let env: HashMap<&str, &str> = [
            ("FUZZY_RANK_LIMIT", "ten"),
            ("FUZZY_RANK_PRECISION", "double"),
            ("FUZZY_RANK_CUTOFF", "250"),
        ]
        .into_iter()
        .collect();

        let options = SearchOptions::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(options, SearchOptions::default());
    }

    #[test]
    fn test_engine_limit() {
        let engine = FuzzyEngine::new(RankOptions { limit: 2, ..Default::default() }.into());
        let response = engine.search(&SearchQuery::new("apple", fruits())).unwrap();

        assert_eq!(engine.limit(), 2);
        assert_eq!(response.results.len(), 2);
    }
}
