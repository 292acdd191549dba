use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid tier key '{0}', expected 1..={max}", max = gridvis_core::LayoutTemplate::MAX_TIER)]
    InvalidTier(String),

    #[error("Layout template has no data.anchor")]
    MissingAnchor,
}
