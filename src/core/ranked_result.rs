use serde::{Deserialize, Serialize};

/// How scores are surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorePrecision {
    /// Truncated toward zero
    #[default]
    Integer,
    /// Full floating-point precision (legacy)
    Float,
}

/// A surfaced similarity score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Integer(u8),
    Float(f64),
}

impl Score {
    /// Surface a raw `[0, 100]` score with the given precision
    pub fn new(raw: f64, precision: ScorePrecision) -> Self {
        let raw = raw.clamp(0.0, 100.0);
        match precision {
            ScorePrecision::Integer => Score::Integer(raw.trunc() as u8),
            ScorePrecision::Float => Score::Float(raw),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Score::Integer(v) => f64::from(v),
            Score::Float(v) => v,
        }
    }
}

/// One ranked candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// The candidate as supplied by the caller
    pub value: String,

    /// Similarity score (0 - 100)
    pub score: Score,

    /// Position of the candidate in the input list
    pub index: usize,
}

impl RankedResult {
    pub fn new(value: impl Into<String>, score: Score, index: usize) -> Self {
        Self {
            value: value.into(),
            score,
            index,
        }
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!("{} - {}% [#{}]", self.value, self.score.as_f64(), self.index)
    }
}
