use crate::models::Category;
use std::path::PathBuf;
use thiserror::Error;

pub const FALLBACK_NOT_FOUND: &str = "Maaf, pertanyaan tidak ditemukan. Coba lagi ya!";
pub const FALLBACK_TROUBLE: &str = "Maaf, ada gangguan. Coba lagi nanti!";

/// Failures inside a selector. These never reach the UI; each one is
/// replaced by its fallback text.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("question pool for {0} is empty")]
    EmptyPool(Category),
    #[error("text backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("text backend returned no usable text")]
    BackendEmptyResponse,
}

impl SelectError {
    pub fn fallback_text(&self) -> &'static str {
        match self {
            SelectError::EmptyPool(_) | SelectError::BackendEmptyResponse => FALLBACK_NOT_FOUND,
            SelectError::BackendUnavailable(_) => FALLBACK_TROUBLE,
        }
    }
}

/// Startup errors. Raised before the terminal is taken over.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown strategy '{0}' (expected 'static' or 'ai')")]
    UnknownStrategy(String),
    #[error("invalid value '{value}' for {key}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("failed to read question pool {}: {source}", path.display())]
    PoolIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse question pool {}: {source}", path.display())]
    PoolParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to create AI client: {0}")]
    Client(String),
}
