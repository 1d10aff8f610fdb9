use thiserror::Error;

use crate::error::AppError;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status code: {0}")]
    Status(u16),

    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] validator::ValidationErrors),

    #[error("store error: {0}")]
    Store(#[from] AppError),

    #[error("failed to read ids file: {0}")]
    Io(#[from] std::io::Error),
}

pub type SyncResult<T> = Result<T, SyncError>;
