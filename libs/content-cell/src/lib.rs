pub mod error;
pub mod events;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ContentError;
pub use events::{PageEvent, PageEventBus, Subscription};
pub use models::*;
pub use services::*;
