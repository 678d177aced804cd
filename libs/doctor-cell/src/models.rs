use serde::{Deserialize, Serialize};

use shared_models::ui::{Button, Card};
use shared_models::{Doctor, ImageRef, LoadState};

#[derive(Debug, Clone, Serialize)]
pub struct DoctorCard {
    pub doctor_id: String,
    pub name: String,
    pub specialization: String,
    pub experience: u32,
    pub contact: String,
    pub image: ImageRef,
    pub stars: u8,
    pub book: Button,
}

impl From<&Doctor> for DoctorCard {
    fn from(doctor: &Doctor) -> Self {
        Self {
            doctor_id: doctor.doctor_id.clone(),
            name: doctor.doctor_name.clone(),
            specialization: doctor.specialization.clone(),
            experience: doctor.experience,
            contact: doctor.contact.clone(),
            image: doctor.image(),
            stars: 4,
            book: Button::new("Book Appointment").action("#book").class_name("w-full"),
        }
    }
}

/// One filter chip. `specialty == None` is the "All" chip.
#[derive(Debug, Clone, Serialize)]
pub struct SpecialtyChip {
    pub label: String,
    pub specialty: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecialtyFilterRequest {
    /// Absent or empty selects every doctor.
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorsView {
    pub anchor: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub state: LoadState,
    pub filters: Vec<SpecialtyChip>,
    pub total: usize,
    pub filtered: usize,
    pub visible: usize,
    pub cards: Vec<Card<DoctorCard>>,
    pub load_more: Option<Button>,
}
