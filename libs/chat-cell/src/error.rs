use thiserror::Error;
use uuid::Uuid;

use shared_models::AppError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Session {0} has no chat widget mounted")]
    NotMounted(Uuid),

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Minmo is still answering the previous message")]
    ReplyPending,

    #[error("Reply task failed: {0}")]
    ReplyFailed(String),
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::NotMounted(_) => AppError::NotFound(err.to_string()),
            ChatError::EmptyMessage => AppError::ValidationError(err.to_string()),
            ChatError::ReplyPending => AppError::Conflict(err.to_string()),
            ChatError::ReplyFailed(_) => AppError::Internal(err.to_string()),
        }
    }
}
