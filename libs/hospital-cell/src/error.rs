use thiserror::Error;
use uuid::Uuid;

use shared_models::AppError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ListingError {
    #[error("Session {0} has no hospitals section mounted")]
    NotMounted(Uuid),

    #[error("Hospital not found: {0}")]
    UnknownHospital(String),
}

impl From<ListingError> for AppError {
    fn from(err: ListingError) -> Self {
        AppError::NotFound(err.to_string())
    }
}
