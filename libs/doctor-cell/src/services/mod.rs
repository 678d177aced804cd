pub mod directory;

pub use directory::{DoctorDirectory, DoctorDirectoryService, DOCTORS_PER_PAGE};
