pub mod ranked_result;
pub mod scorer_kind;
pub mod search_response;

pub use ranked_result::{RankedResult, Score, ScorePrecision};
pub use scorer_kind::ScorerKind;
pub use search_response::SearchResponse;
