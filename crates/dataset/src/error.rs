use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset file is not a valid JSON array of schools: {0}")]
    Json(#[from] serde_json::Error),
}
