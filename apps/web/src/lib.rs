pub mod handlers;
pub mod router;
pub mod shell;

pub use router::create_router;
pub use shell::{PageView, Shell};
