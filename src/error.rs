use thiserror::Error;

/// Failures at the persistence edges (settings store, config file)
#[derive(Debug, Error)]
pub enum Error {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
