use thiserror::Error;

use shared_models::AppError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    Malformed(String),
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError::ExternalService(err.to_string())
    }
}
