//! Top-K selection over a candidate list.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{RankedResult, Score, ScorePrecision, ScorerKind};
use crate::error::{FuzzyError, Result};
use crate::scoring::{preprocess, ScoreWeights, Scorer};

/// Number of results returned when no limit is configured
pub const DEFAULT_LIMIT: usize = 10;

/// Candidate lists at least this long are scored on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 512;

/// Ranking parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankOptions {
    /// Maximum number of results
    pub limit: usize,

    /// Integer (truncated) or float scores
    pub precision: ScorePrecision,

    /// Drop candidates scoring below this value
    pub score_cutoff: Option<f64>,

    /// Strip punctuation and normalize both sides before scoring
    pub process: bool,

    /// Composite scorer constants
    pub weights: ScoreWeights,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            precision: ScorePrecision::Integer,
            score_cutoff: None,
            process: false,
            weights: ScoreWeights::default(),
        }
    }
}

/// Candidate index with its full-precision score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate {
    pub index: usize,
    pub score: f64,
}

impl RankedCandidate {
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }

    fn surface<S: AsRef<str>>(self, candidates: &[S], precision: ScorePrecision) -> RankedResult {
        RankedResult::new(
            candidates[self.index].as_ref(),
            Score::new(self.score, precision),
            self.index,
        )
    }
}

/// Rank `candidates` against `query` and return the best `options.limit`
/// matches, highest score first. Equal scores keep their input order.
pub fn rank<S>(
    query: &str,
    candidates: &[S],
    kind: ScorerKind,
    options: &RankOptions,
) -> Result<Vec<RankedResult>>
where
    S: AsRef<str> + Sync,
{
    ensure_candidates(candidates)?;

    let scorer = kind.scorer(options.weights);
    let mut ranked = score_candidates(query, candidates, scorer.as_ref(), options);

    // sort_by is stable: ties stay in input order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(options.limit);

    Ok(ranked
        .into_iter()
        .map(|c| c.surface(candidates, options.precision))
        .collect())
}

/// Single best match, or `None` when every candidate falls under the cutoff.
/// Ties go to the earliest candidate.
pub fn extract_one<S>(
    query: &str,
    candidates: &[S],
    kind: ScorerKind,
    options: &RankOptions,
) -> Result<Option<RankedResult>>
where
    S: AsRef<str> + Sync,
{
    ensure_candidates(candidates)?;

    let scorer = kind.scorer(options.weights);
    let best = score_candidates(query, candidates, scorer.as_ref(), options)
        .into_iter()
        .fold(None::<RankedCandidate>, |best, c| match best {
            Some(b) if b.score >= c.score => Some(b),
            _ => Some(c),
        });

    Ok(best.map(|c| c.surface(candidates, options.precision)))
}

fn ensure_candidates<S>(candidates: &[S]) -> Result<()> {
    if candidates.is_empty() {
        return Err(FuzzyError::InvalidInput(
            "searched_values cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Score every candidate in input order, applying the cutoff
fn score_candidates<S>(
    query: &str,
    candidates: &[S],
    scorer: &dyn Scorer,
    options: &RankOptions,
) -> Vec<RankedCandidate>
where
    S: AsRef<str> + Sync,
{
    let query = if options.process {
        preprocess(query)
    } else {
        query.to_string()
    };

    let score_one = |(index, candidate): (usize, &S)| {
        let score = if options.process {
            scorer.score(&query, &preprocess(candidate.as_ref()))
        } else {
            scorer.score(&query, candidate.as_ref())
        };
        RankedCandidate::new(index, score)
    };

    let scored: Vec<RankedCandidate> = if candidates.len() >= PARALLEL_THRESHOLD {
        tracing::trace!("Scoring {} candidates in parallel", candidates.len());
        candidates.par_iter().enumerate().map(score_one).collect()
    } else {
        candidates.iter().enumerate().map(score_one).collect()
    };

    match options.score_cutoff {
        Some(cutoff) => scored.into_iter().filter(|c| c.score >= cutoff).collect(),
        None => scored,
    }
}
