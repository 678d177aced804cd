pub mod error;
pub mod fetch;
pub mod hospital;
pub mod ui;

pub use error::AppError;
pub use fetch::{FetchOutcome, LoadState};
pub use hospital::*;
