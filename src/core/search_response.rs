use serde::{Deserialize, Serialize};
use crate::core::{RankedResult, ScorePrecision, ScorerKind};

/// Search response with ranked results and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ranked matches, best first
    pub results: Vec<RankedResult>,

    /// Scorer that produced the scores
    pub scorer: ScorerKind,

    /// How scores were surfaced
    pub precision: ScorePrecision,

    /// Number of candidates scored
    pub candidates: usize,

    /// Search latency in milliseconds
    pub latency_ms: f64,
}

impl SearchResponse {
    /// Best match, if any survived the cutoff
    pub fn best(&self) -> Option<&RankedResult> {
        self.results.first()
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        match self.best() {
            Some(best) => format!(
                "{} ({} of {} candidates) [{}]",
                best.display(),
                self.results.len(),
                self.candidates,
                self.scorer
            ),
            None => format!("no match among {} candidates [{}]", self.candidates, self.scorer),
        }
    }
}
