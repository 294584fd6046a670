use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response shape: expected a JSON object, got {0}")]
    UnexpectedShape(&'static str),
}

pub type Result<T> = std::result::Result<T, CoreError>;
