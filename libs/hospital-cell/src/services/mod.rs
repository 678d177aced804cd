pub mod listing;

pub use listing::{HospitalListing, HospitalListingService, HOSPITALS_PER_PAGE};
