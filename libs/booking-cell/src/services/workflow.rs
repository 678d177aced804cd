use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use shared_models::ui::{Button, ButtonSize};
use shared_models::{
    flatten_slots, BookingData, Doctor, FetchOutcome, Hospital, LoadState, SlotOption, SlotResponse,
};
use shared_utils::{RequestGeneration, Ticket};

use crate::error::BookingError;
use crate::models::{
    BookingPhase, BookingView, Confirmation, FormField, PatientDetails, SelectOption, Selector,
};

pub const SUBMIT_FAILURE_ALERT: &str = "Failed to book appointment. Please try again.";

const IMPORTANT_NOTES: &[&str] = &[
    "Please arrive 15 minutes before your scheduled appointment time.",
    "Bring any relevant medical records or test results.",
    "You can reschedule or cancel your appointment up to 24 hours in advance.",
    "A confirmation will be sent to your contact number.",
];

/// Cascading hospital → doctor → slot selector plus the patient form.
///
/// Every selection that triggers a fetch hands out a [`Ticket`]; results
/// are applied only while their ticket is still current, so a slow answer
/// for an abandoned selection never overwrites a newer one.
#[derive(Debug)]
pub struct BookingWorkflow {
    hospitals: Vec<Hospital>,
    hospitals_state: LoadState,
    doctors: Vec<Doctor>,
    doctors_state: LoadState,
    slot_groups: Vec<SlotResponse>,
    slots_state: LoadState,

    hospital_id: String,
    doctor_id: String,
    slot_id: String,
    details: PatientDetails,

    submitting: bool,
    confirmed_at: Option<DateTime<Utc>>,
    alert: Option<String>,

    doctor_fetch: RequestGeneration,
    slot_fetch: RequestGeneration,
    reset_timer: RequestGeneration,
}

impl Default for BookingWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingWorkflow {
    pub fn new() -> Self {
        Self {
            hospitals: Vec::new(),
            hospitals_state: LoadState::Loading,
            doctors: Vec::new(),
            doctors_state: LoadState::Idle,
            slot_groups: Vec::new(),
            slots_state: LoadState::Idle,
            hospital_id: String::new(),
            doctor_id: String::new(),
            slot_id: String::new(),
            details: PatientDetails::default(),
            submitting: false,
            confirmed_at: None,
            alert: None,
            doctor_fetch: RequestGeneration::new(),
            slot_fetch: RequestGeneration::new(),
            reset_timer: RequestGeneration::new(),
        }
    }

    pub fn apply_hospitals(&mut self, outcome: FetchOutcome<Hospital>) {
        let (hospitals, state) = outcome.into_parts();
        self.hospitals = hospitals;
        self.hospitals_state = state;
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn slot_groups(&self) -> &[SlotResponse] {
        &self.slot_groups
    }

    pub fn selected_hospital(&self) -> &str {
        &self.hospital_id
    }

    pub fn selected_doctor(&self) -> &str {
        &self.doctor_id
    }

    pub fn selected_slot(&self) -> &str {
        &self.slot_id
    }

    pub fn details(&self) -> &PatientDetails {
        &self.details
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed_at.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn ensure_editable(&self) -> Result<(), BookingError> {
        if self.submitting {
            return Err(BookingError::SubmissionInFlight);
        }
        if self.confirmed_at.is_some() {
            return Err(BookingError::AlreadyConfirmed);
        }
        Ok(())
    }

    fn clear_doctor(&mut self) {
        self.doctor_id.clear();
        self.clear_slots();
    }

    fn clear_slots(&mut self) {
        self.slot_id.clear();
        self.slot_groups.clear();
        self.slots_state = LoadState::Idle;
        self.slot_fetch.invalidate();
    }

    /// Returns the ticket for the doctor fetch, or `None` when the selection was cleared.
    pub fn select_hospital(&mut self, hospital_id: &str) -> Result<Option<Ticket>, BookingError> {
        self.ensure_editable()?;

        if !hospital_id.is_empty() && !self.hospitals.iter().any(|h| h.id == hospital_id) {
            return Err(BookingError::UnknownHospital(hospital_id.to_string()));
        }

        self.hospital_id = hospital_id.to_string();
        self.clear_doctor();
        self.doctors.clear();

        if hospital_id.is_empty() {
            self.doctors_state = LoadState::Idle;
            self.doctor_fetch.invalidate();
            return Ok(None);
        }

        self.doctors_state = LoadState::Loading;
        Ok(Some(self.doctor_fetch.issue()))
    }

    /// Returns false when the hospital selection has moved on since `ticket` was issued.
    pub fn apply_doctors(&mut self, ticket: Ticket, outcome: FetchOutcome<Doctor>) -> bool {
        if !self.doctor_fetch.is_current(ticket) {
            return false;
        }
        if let FetchOutcome::Failed { reason } = &outcome {
            warn!("Doctors of hospital {} failed to load: {}", self.hospital_id, reason);
        }
        let (doctors, state) = outcome.into_parts();
        self.doctors = doctors;
        self.doctors_state = state;
        true
    }

    /// Returns the ticket for the slot fetch, or `None` when the selection was cleared.
    pub fn select_doctor(&mut self, doctor_id: &str) -> Result<Option<Ticket>, BookingError> {
        self.ensure_editable()?;

        if doctor_id.is_empty() {
            self.clear_doctor();
            return Ok(None);
        }
        if self.hospital_id.is_empty() {
            return Err(BookingError::HospitalNotSelected);
        }
        if !self.doctors.iter().any(|d| d.doctor_id == doctor_id) {
            return Err(BookingError::UnknownDoctor(doctor_id.to_string()));
        }

        self.clear_slots();
        self.doctor_id = doctor_id.to_string();
        self.slots_state = LoadState::Loading;
        Ok(Some(self.slot_fetch.issue()))
    }

    pub fn apply_slots(&mut self, ticket: Ticket, outcome: FetchOutcome<SlotResponse>) -> bool {
        if !self.slot_fetch.is_current(ticket) {
            return false;
        }
        if let FetchOutcome::Failed { reason } = &outcome {
            warn!("Slots of doctor {} failed to load: {}", self.doctor_id, reason);
        }
        let (groups, state) = outcome.into_parts();
        self.slot_groups = groups;
        self.slots_state = state;
        true
    }

    pub fn slot_options(&self) -> Vec<SlotOption> {
        flatten_slots(&self.slot_groups)
    }

    pub fn select_slot(&mut self, slot_id: &str) -> Result<(), BookingError> {
        self.ensure_editable()?;

        if slot_id.is_empty() {
            self.slot_id.clear();
            return Ok(());
        }
        if self.doctor_id.is_empty() {
            return Err(BookingError::DoctorNotSelected);
        }
        if !self.slot_options().iter().any(|o| o.slot_id == slot_id) {
            return Err(BookingError::UnknownSlot(slot_id.to_string()));
        }

        self.slot_id = slot_id.to_string();
        Ok(())
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) -> Result<(), BookingError> {
        self.ensure_editable()?;
        self.details.set(field, value.into());
        Ok(())
    }

    /// Required fields that are still blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let selections = [
            ("hospital", self.hospital_id.as_str()),
            ("doctor", self.doctor_id.as_str()),
            ("slot", self.slot_id.as_str()),
        ];
        let fields = [FormField::Name, FormField::ContactNumber, FormField::Diagnosis]
            .map(|field| (field.label(), self.details.get(field)));

        selections
            .into_iter()
            .chain(fields)
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Locks the form and returns the payload to send.
    pub fn begin_submit(&mut self) -> Result<BookingData, BookingError> {
        self.ensure_editable()?;

        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(BookingError::Incomplete(missing));
        }

        self.submitting = true;
        self.alert = None;
        Ok(BookingData {
            name: self.details.name.clone(),
            contact_number: self.details.contact_number.clone(),
            diagnosis: self.details.diagnosis.clone(),
            doctor_id: self.doctor_id.clone(),
            hospital_id: self.hospital_id.clone(),
            slot_id: self.slot_id.clone(),
        })
    }

    /// Records the submission result. On success returns the ticket the timed reset must present.
    pub fn complete_submit(&mut self, result: Result<(), String>) -> Option<Ticket> {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.confirmed_at = Some(Utc::now());
                Some(self.reset_timer.issue())
            }
            Err(reason) => {
                debug!("Booking rejected, keeping form for retry: {}", reason);
                self.alert = Some(SUBMIT_FAILURE_ALERT.to_string());
                None
            }
        }
    }

    /// Timed end of the confirmation. Ignored when the confirmation was already dismissed.
    pub fn finish_confirmation(&mut self, ticket: Ticket) -> bool {
        if !self.reset_timer.is_current(ticket) || self.confirmed_at.is_none() {
            return false;
        }
        self.reset();
        true
    }

    /// "Book Another Appointment": resets right away and disarms the pending timer.
    pub fn dismiss_confirmation(&mut self) -> bool {
        if self.confirmed_at.is_none() {
            return false;
        }
        self.reset_timer.invalidate();
        self.reset();
        true
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Clears every selection and field. The hospital list is kept.
    fn reset(&mut self) {
        self.hospital_id.clear();
        self.clear_doctor();
        self.doctors.clear();
        self.doctors_state = LoadState::Idle;
        self.doctor_fetch.invalidate();
        self.details = PatientDetails::default();
        self.confirmed_at = None;
        self.alert = None;
    }

    pub fn phase(&self) -> BookingPhase {
        if self.confirmed_at.is_some() {
            BookingPhase::Submitted
        } else if self.submitting {
            BookingPhase::Submitting
        } else if self.can_submit() {
            BookingPhase::FormFilled
        } else if !self.doctor_id.is_empty() && self.slots_state == LoadState::Ready {
            BookingPhase::SlotsLoaded {
                doctor_id: self.doctor_id.clone(),
            }
        } else if !self.hospital_id.is_empty() && self.doctors_state == LoadState::Ready {
            BookingPhase::DoctorsLoaded {
                hospital_id: self.hospital_id.clone(),
            }
        } else if self.hospitals_state == LoadState::Ready {
            BookingPhase::HospitalsLoaded
        } else {
            BookingPhase::Idle
        }
    }

    pub fn view(&self) -> BookingView {
        let hospital_options = std::iter::once(SelectOption::placeholder("Select a hospital"))
            .chain(self.hospitals.iter().map(|h| SelectOption::new(&h.id, &h.name)))
            .collect();
        let doctor_options = std::iter::once(SelectOption::placeholder("Select a doctor"))
            .chain(self.doctors.iter().map(|d| {
                SelectOption::new(&d.doctor_id, format!("{} - {}", d.doctor_name, d.specialization))
            }))
            .collect();
        let slot_options = std::iter::once(SelectOption::placeholder("Select a time slot"))
            .chain(self.slot_options().into_iter().map(|o| SelectOption::new(o.slot_id, o.label)))
            .collect();

        let missing = self.missing_fields();
        let can_submit = missing.is_empty();
        let label = if self.submitting { "Booking..." } else { "Confirm Booking" };

        BookingView {
            anchor: "book",
            title: "Book an Appointment",
            subtitle: "Schedule a visit with our top doctors in just a few clicks and take the first step towards better health.",
            phase: self.phase(),
            hospital: Selector {
                id: "hospital",
                label: "Select Hospital*",
                value: self.hospital_id.clone(),
                disabled: false,
                state: self.hospitals_state.clone(),
                options: hospital_options,
            },
            doctor: Selector {
                id: "doctor",
                label: "Select Doctor*",
                value: self.doctor_id.clone(),
                disabled: self.hospital_id.is_empty(),
                state: self.doctors_state.clone(),
                options: doctor_options,
            },
            slot: Selector {
                id: "slot",
                label: "Available Slots*",
                value: self.slot_id.clone(),
                disabled: self.doctor_id.is_empty(),
                state: self.slots_state.clone(),
                options: slot_options,
            },
            details: self.details.clone(),
            missing,
            can_submit,
            submit: Button::new(label)
                .size(ButtonSize::Lg)
                .submit()
                .disabled(!can_submit || self.submitting)
                .action("booking/submit")
                .class_name("w-full"),
            alert: self.alert.clone(),
            confirmation: self.confirmed_at.map(|booked_at| Confirmation {
                booked_at,
                title: "Appointment Booked Successfully!",
                message: "Thank you for booking an appointment with us. You will receive a confirmation shortly.",
                book_another: Button::new("Book Another Appointment").action("booking/book-another"),
            }),
            notes: IMPORTANT_NOTES,
        }
    }
}
