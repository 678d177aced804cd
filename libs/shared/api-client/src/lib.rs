pub mod error;
pub mod hospital_api;

pub use error::ApiError;
pub use hospital_api::{HospitalApi, HospitalApiClient};
