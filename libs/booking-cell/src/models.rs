use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared_models::ui::Button;
use shared_models::LoadState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    ContactNumber,
    Diagnosis,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::ContactNumber => "contactNumber",
            FormField::Diagnosis => "diagnosis",
        }
    }
}

/// Free-text part of the booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDetails {
    pub name: String,
    pub contact_number: String,
    pub diagnosis: String,
}

impl PatientDetails {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::ContactNumber => &self.contact_number,
            FormField::Diagnosis => &self.diagnosis,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::ContactNumber => self.contact_number = value,
            FormField::Diagnosis => self.diagnosis = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum BookingPhase {
    Idle,
    HospitalsLoaded,
    DoctorsLoaded { hospital_id: String },
    SlotsLoaded { doctor_id: String },
    FormFilled,
    Submitting,
    Submitted,
}

/// One `<option>` of a selector. The placeholder has an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn placeholder(label: &str) -> Self {
        Self::new("", label)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Selector {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
    pub disabled: bool,
    pub state: LoadState,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    pub booked_at: DateTime<Utc>,
    pub title: &'static str,
    pub message: &'static str,
    pub book_another: Button,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingView {
    pub anchor: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub phase: BookingPhase,
    pub hospital: Selector,
    pub doctor: Selector,
    pub slot: Selector,
    pub details: PatientDetails,
    pub missing: Vec<&'static str>,
    pub can_submit: bool,
    pub submit: Button,
    pub alert: Option<String>,
    pub confirmation: Option<Confirmation>,
    pub notes: &'static [&'static str],
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub value: String,
}

/// Partial update of the free-text fields; absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsUpdate {
    pub name: Option<String>,
    pub contact_number: Option<String>,
    pub diagnosis: Option<String>,
}

impl DetailsUpdate {
    pub fn into_fields(self) -> Vec<(FormField, String)> {
        [
            (FormField::Name, self.name),
            (FormField::ContactNumber, self.contact_number),
            (FormField::Diagnosis, self.diagnosis),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}
