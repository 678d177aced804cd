pub mod generation;
pub mod pagination;
pub mod registry;
pub mod test_utils;

pub use generation::{RequestGeneration, Ticket};
pub use pagination::RevealWindow;
pub use registry::SessionRegistry;
