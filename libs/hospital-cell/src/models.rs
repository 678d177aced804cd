use serde::Serialize;

use shared_models::ui::{Button, Card, Modal};
use shared_models::{Doctor, Hospital, ImageRef, LoadState};

#[derive(Debug, Clone, Serialize)]
pub struct HospitalCard {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub image: ImageRef,
    pub view_doctors: Button,
}

impl HospitalCard {
    pub fn from_hospital(hospital: &Hospital) -> Self {
        Self {
            id: hospital.id.clone(),
            name: hospital.name.clone(),
            address: hospital.address.clone(),
            phone: hospital.phone.clone(),
            email: hospital.email.clone(),
            image: hospital.image(),
            view_doctors: Button::new("View Doctors")
                .action(format!("hospitals/{}/doctors", hospital.id))
                .class_name("w-full"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub doctor_id: String,
    pub name: String,
    pub specialization: String,
    pub experience: u32,
    pub contact: String,
    pub image: ImageRef,
    pub stars: u8,
}

impl From<&Doctor> for RosterEntry {
    fn from(doctor: &Doctor) -> Self {
        Self {
            doctor_id: doctor.doctor_id.clone(),
            name: doctor.doctor_name.clone(),
            specialization: doctor.specialization.clone(),
            experience: doctor.experience,
            contact: doctor.contact.clone(),
            image: doctor.image(),
            stars: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterBody {
    pub state: LoadState,
    pub doctors: Vec<RosterEntry>,
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HospitalsView {
    pub anchor: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub state: LoadState,
    pub total: usize,
    pub visible: usize,
    pub cards: Vec<Card<HospitalCard>>,
    pub load_more: Option<Button>,
    pub modal: Modal<RosterBody>,
}
