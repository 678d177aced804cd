use thiserror::Error;
use uuid::Uuid;

use shared_models::AppError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Session {0} has no page mounted")]
    NotMounted(Uuid),
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        AppError::NotFound(err.to_string())
    }
}
