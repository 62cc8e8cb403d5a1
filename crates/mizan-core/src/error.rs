use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown disorder '{disorder_id}' in module '{module_id}'")]
    UnknownDisorder {
        module_id: String,
        disorder_id: String,
    },
}
