pub mod catalog;
pub mod hero;
pub mod navigation;
pub mod page;

pub use catalog::{about, footer, services, testimonials};
pub use hero::{Hero, CARD_INTERVAL};
pub use navigation::{Navigation, BRAND, SCROLL_THRESHOLD};
pub use page::{ContentService, PageContent};
