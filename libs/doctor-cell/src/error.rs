use thiserror::Error;
use uuid::Uuid;

use shared_models::AppError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Session {0} has no doctors section mounted")]
    NotMounted(Uuid),
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        AppError::NotFound(err.to_string())
    }
}
