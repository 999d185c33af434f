use thiserror::Error;

#[derive(Debug, Error)]
pub enum TfplanError {
    #[error(transparent)]
    Plan(#[from] crate::terraform::PlanError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document root is not a JSON object")]
    NotAnObject,

    #[error("{count} plan entries were skipped")]
    SkippedEntries { count: usize },
}
