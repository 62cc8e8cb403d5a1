use std::path::PathBuf;

use mizan_core::error::CoreError;
use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown module: {0}")]
    UnknownModule(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("failed to read module file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid module JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
