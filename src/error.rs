use thiserror::Error;

/// Main error type for the ranking engine
#[derive(Error, Debug)]
pub enum FuzzyError {
    /// Request rejected before scoring (empty candidate list)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Scorer selector did not resolve to a known scorer
    #[error("Unknown scorer '{name}', expected one of: {}", valid.join(", "))]
    UnknownScorer { name: String, valid: Vec<String> },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FuzzyError {
    /// Errors caused by the caller's request rather than by the engine.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FuzzyError::InvalidInput(_) | FuzzyError::UnknownScorer { .. } | FuzzyError::Json(_)
        )
    }

    /// Valid scorer names, when the error carries them
    pub fn valid_scorers(&self) -> Option<&[String]> {
        match self {
            FuzzyError::UnknownScorer { valid, .. } => Some(valid),
            _ => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FuzzyError>;
