use thiserror::Error;
use uuid::Uuid;

use shared_models::AppError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Session {0} has no booking section mounted")]
    NotMounted(Uuid),

    #[error("Hospital not found: {0}")]
    UnknownHospital(String),

    #[error("Doctor {0} is not available at the selected hospital")]
    UnknownDoctor(String),

    #[error("Slot {0} is not offered by the selected doctor")]
    UnknownSlot(String),

    #[error("Select a hospital first")]
    HospitalNotSelected,

    #[error("Select a doctor first")]
    DoctorNotSelected,

    #[error("Missing required fields: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    #[error("A booking is already being submitted")]
    SubmissionInFlight,

    #[error("The booking was already confirmed")]
    AlreadyConfirmed,

    #[error("Failed to book appointment. Please try again.")]
    SubmissionFailed(String),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotMounted(_) => AppError::NotFound(err.to_string()),
            BookingError::UnknownHospital(_)
            | BookingError::UnknownDoctor(_)
            | BookingError::UnknownSlot(_) => AppError::BadRequest(err.to_string()),
            BookingError::HospitalNotSelected
            | BookingError::DoctorNotSelected
            | BookingError::Incomplete(_) => AppError::ValidationError(err.to_string()),
            BookingError::SubmissionInFlight | BookingError::AlreadyConfirmed => {
                AppError::Conflict(err.to_string())
            }
            BookingError::SubmissionFailed(_) => AppError::ExternalService(err.to_string()),
        }
    }
}
