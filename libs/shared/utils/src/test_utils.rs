use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;

use shared_api_client::{ApiError, HospitalApi};
use shared_config::AppConfig;
use shared_models::{BookingData, Doctor, FetchOutcome, Hospital, Slot, SlotOwner, SlotResponse};

pub struct TestConfig {
    pub hospital_api_url: String,
    pub gemini_base_url: String,
    pub gemini_api_key: String,
    pub booking_confirmation_seconds: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            hospital_api_url: "http://localhost:3100/api".to_string(),
            gemini_base_url: "http://localhost:3200/v1beta".to_string(),
            gemini_api_key: "test-gemini-key".to_string(),
            booking_confirmation_seconds: 5,
        }
    }
}

impl TestConfig {
    pub fn with_mock_server(uri: &str) -> Self {
        Self {
            hospital_api_url: format!("{}/api", uri),
            gemini_base_url: format!("{}/v1beta", uri),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            hospital_api_url: self.hospital_api_url.clone(),
            gemini_api_key: self.gemini_api_key.clone(),
            gemini_base_url: self.gemini_base_url.clone(),
            booking_confirmation_seconds: self.booking_confirmation_seconds,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct Fixtures;

impl Fixtures {
    pub fn hospital(id: &str, name: &str) -> Hospital {
        Hospital {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("contact@{}.example", id),
            address: "123 Healthcare Avenue".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            image_url: format!("https://images.example/{}.jpg", id),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            updated_at: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    pub fn doctor(id: &str, name: &str, specialization: &str) -> Doctor {
        Doctor {
            doctor_id: id.to_string(),
            doctor_name: name.to_string(),
            specialization: specialization.to_string(),
            experience: 10,
            contact: "555-0101".to_string(),
            doctor_image: format!("https://images.example/{}.jpg", id),
        }
    }

    pub fn slot(id: &str, start: &str, end: &str) -> Slot {
        Slot {
            id: id.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    pub fn slot_group(doctor_id: &str, date: &str, slots: Vec<Slot>) -> SlotResponse {
        SlotResponse {
            id: format!("{}-{}", doctor_id, date),
            user_id: SlotOwner::default(),
            date: date.to_string(),
            doctor_id: doctor_id.to_string(),
            slots,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    pub fn hospital_json(id: &str, name: &str) -> Value {
        json!({
            "_id": id,
            "name": name,
            "email": format!("contact@{}.example", id),
            "address": "123 Healthcare Avenue",
            "phone": "+1 (555) 123-4567",
            "imageUrl": format!("https://images.example/{}.jpg", id),
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z"
        })
    }

    pub fn doctor_json(id: &str, name: &str, specialization: &str) -> Value {
        json!({
            "doctorId": id,
            "doctorName": name,
            "specialization": specialization,
            "experience": 10,
            "contact": "555-0101",
            "doctorImage": format!("https://images.example/{}.jpg", id)
        })
    }
}

#[derive(Default)]
struct StubState {
    hospitals: Option<FetchOutcome<Hospital>>,
    doctors: Option<FetchOutcome<Doctor>>,
    hospital_doctors: HashMap<String, FetchOutcome<Doctor>>,
    slots: HashMap<String, FetchOutcome<SlotResponse>>,
    booking_failure: Option<String>,
    bookings: Vec<BookingData>,
    calls: Vec<String>,
    gates: HashMap<String, Arc<Notify>>,
}

/// In-memory [`HospitalApi`] with scripted responses.
///
/// `hold` parks every later request for a key (`"doctors:{hospital_id}"`,
/// `"slots:{doctor_id}"`, `"hospitals"`, `"all-doctors"`, `"booking"`) until
/// the returned [`Notify`] fires, which lets tests complete requests out of
/// order.
#[derive(Default, Clone)]
pub struct StubHospitalApi {
    state: Arc<Mutex<StubState>>,
}

impl StubHospitalApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state(self, f: impl FnOnce(&mut StubState)) -> Self {
        if let Ok(mut state) = self.state.lock() {
            f(&mut state);
        }
        self
    }

    pub fn with_hospitals(self, hospitals: Vec<Hospital>) -> Self {
        self.with_state(|s| s.hospitals = Some(FetchOutcome::Loaded(hospitals)))
    }

    pub fn failing_hospitals(self, reason: &str) -> Self {
        self.with_state(|s| s.hospitals = Some(FetchOutcome::failed(reason)))
    }

    pub fn with_doctors(self, doctors: Vec<Doctor>) -> Self {
        self.with_state(|s| s.doctors = Some(FetchOutcome::Loaded(doctors)))
    }

    pub fn failing_doctors(self, reason: &str) -> Self {
        self.with_state(|s| s.doctors = Some(FetchOutcome::failed(reason)))
    }

    pub fn with_hospital_doctors(self, hospital_id: &str, doctors: Vec<Doctor>) -> Self {
        self.with_state(|s| {
            s.hospital_doctors.insert(hospital_id.to_string(), FetchOutcome::Loaded(doctors));
        })
    }

    pub fn failing_hospital_doctors(self, hospital_id: &str, reason: &str) -> Self {
        self.with_state(|s| {
            s.hospital_doctors.insert(hospital_id.to_string(), FetchOutcome::failed(reason));
        })
    }

    pub fn with_slots(self, doctor_id: &str, groups: Vec<SlotResponse>) -> Self {
        self.with_state(|s| {
            s.slots.insert(doctor_id.to_string(), FetchOutcome::Loaded(groups));
        })
    }

    pub fn failing_bookings(self, reason: &str) -> Self {
        self.with_state(|s| s.booking_failure = Some(reason.to_string()))
    }

    pub fn accept_bookings(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.booking_failure = None;
        }
    }

    pub fn hold(&self, key: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        if let Ok(mut state) = self.state.lock() {
            state.gates.insert(key.to_string(), gate.clone());
        }
        gate
    }

    pub fn bookings(&self) -> Vec<BookingData> {
        self.state.lock().map(|s| s.bookings.clone()).unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().map(|s| s.calls.clone()).unwrap_or_default()
    }

    async fn enter(&self, key: &str) {
        let gate = match self.state.lock() {
            Ok(mut state) => {
                state.calls.push(key.to_string());
                state.gates.get(key).cloned()
            }
            Err(_) => None,
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }

    fn read<T>(&self, f: impl FnOnce(&StubState) -> Option<FetchOutcome<T>>) -> FetchOutcome<T> {
        self.state
            .lock()
            .ok()
            .and_then(|state| f(&state))
            .unwrap_or_else(|| FetchOutcome::Loaded(Vec::new()))
    }
}

#[async_trait]
impl HospitalApi for StubHospitalApi {
    async fn list_hospitals(&self) -> FetchOutcome<Hospital> {
        self.enter("hospitals").await;
        self.read(|s| s.hospitals.clone())
    }

    async fn list_doctors(&self) -> FetchOutcome<Doctor> {
        self.enter("all-doctors").await;
        self.read(|s| s.doctors.clone())
    }

    async fn list_doctors_by_hospital(&self, hospital_id: &str) -> FetchOutcome<Doctor> {
        self.enter(&format!("doctors:{}", hospital_id)).await;
        self.read(|s| s.hospital_doctors.get(hospital_id).cloned())
    }

    async fn list_slots_by_doctor(&self, doctor_id: &str) -> FetchOutcome<SlotResponse> {
        self.enter(&format!("slots:{}", doctor_id)).await;
        self.read(|s| s.slots.get(doctor_id).cloned())
    }

    async fn submit_booking(&self, booking: &BookingData) -> Result<Value, ApiError> {
        self.enter("booking").await;
        let mut state = self
            .state
            .lock()
            .map_err(|_| ApiError::Malformed("stub state poisoned".to_string()))?;

        if let Some(reason) = &state.booking_failure {
            return Err(ApiError::Status {
                status: 500,
                body: reason.clone(),
            });
        }

        state.bookings.push(booking.clone());
        Ok(json!({ "msg": "Patient added successfully", "data": booking }))
    }
}
