pub mod booking;
pub mod workflow;

pub use booking::BookingService;
pub use workflow::{BookingWorkflow, SUBMIT_FAILURE_ALERT};
