use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutreachError {
    #[error("target not found: {0}")]
    TargetNotFound(String),

    #[error("target already exists: {0}")]
    TargetExists(String),

    #[error("invalid action code '{0}'")]
    InvalidActionCode(String),

    #[error("invalid tier '{0}': expected A, B or C")]
    InvalidTier(String),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("no valid email address for target {0}")]
    InvalidEmail(String),

    #[error("no template for action {0}")]
    NoTemplate(String),

    #[error("cadence complete for target {0}")]
    CadenceComplete(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, OutreachError>;
