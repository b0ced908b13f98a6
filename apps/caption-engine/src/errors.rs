use thiserror::Error;

/// Convenience result type for the fallible edges of the engine
/// (token table loading, configuration).
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine-level error type.
///
/// Layout operations never produce one of these: an infeasible fit is reported
/// through `FitResult::fitted` and unknown token ids fall back to defaults.
/// Only loading external data can fail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Token table error: {0}")]
    TokenTable(String),

    #[error("Token table JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    pub fn token_table(msg: impl Into<String>) -> Self {
        Self::TokenTable(msg.into())
    }
}
