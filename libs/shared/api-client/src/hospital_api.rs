use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Method,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::{null_as_default, BookingData, Doctor, FetchOutcome, Hospital, SlotResponse};

use crate::error::ApiError;

/// Operations the site performs against the hospital API.
///
/// Reads report failures as [`FetchOutcome::Failed`] and never return an
/// error. The booking write hands its error back so the caller can keep the
/// form populated and ask the visitor to retry.
#[async_trait]
pub trait HospitalApi: Send + Sync {
    async fn list_hospitals(&self) -> FetchOutcome<Hospital>;

    async fn list_doctors(&self) -> FetchOutcome<Doctor>;

    async fn list_doctors_by_hospital(&self, hospital_id: &str) -> FetchOutcome<Doctor>;

    async fn list_slots_by_doctor(&self, doctor_id: &str) -> FetchOutcome<SlotResponse>;

    async fn submit_booking(&self, booking: &BookingData) -> Result<Value, ApiError>;
}

#[derive(Debug, Deserialize)]
struct DoctorListEnvelope {
    data: Vec<Doctor>,
}

#[derive(Debug, Deserialize)]
struct HospitalDoctorsEnvelope {
    data: Vec<HospitalDoctors>,
}

#[derive(Debug, Deserialize)]
struct HospitalDoctors {
    #[serde(default, deserialize_with = "null_as_default")]
    doctors: Vec<Doctor>,
}

#[derive(Debug, Deserialize)]
struct SlotListEnvelope {
    slots: Vec<SlotResponse>,
}

pub struct HospitalApiClient {
    client: Client,
    base_url: String,
}

impl HospitalApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(&config.hospital_api_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let mut req = self.client.request(method, &url).headers(self.get_headers());

        if let Some(body_data) = body {
            req = req.json(body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("API error ({}): {}", status, error_text);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    async fn read<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, path, None)
            .await
            .map_err(|e| {
                error!("Error fetching {}: {}", what, e);
                e
            })
    }
}

#[async_trait]
impl HospitalApi for HospitalApiClient {
    async fn list_hospitals(&self) -> FetchOutcome<Hospital> {
        match self.read::<Vec<Hospital>>("/get-all-hospital", "hospitals").await {
            Ok(hospitals) => FetchOutcome::Loaded(hospitals),
            Err(e) => FetchOutcome::failed(format!("Failed to fetch hospitals: {}", e)),
        }
    }

    async fn list_doctors(&self) -> FetchOutcome<Doctor> {
        match self.read::<DoctorListEnvelope>("/getall-doctors", "doctors").await {
            Ok(envelope) => FetchOutcome::Loaded(envelope.data),
            Err(e) => FetchOutcome::failed(format!("Failed to fetch doctors: {}", e)),
        }
    }

    async fn list_doctors_by_hospital(&self, hospital_id: &str) -> FetchOutcome<Doctor> {
        let path = format!("/get-all-doctors-byhospital/{}", hospital_id);
        match self.read::<HospitalDoctorsEnvelope>(&path, "hospital doctors").await {
            // Only the first record carries the hospital's roster.
            Ok(envelope) => FetchOutcome::Loaded(
                envelope
                    .data
                    .into_iter()
                    .next()
                    .map(|entry| entry.doctors)
                    .unwrap_or_default(),
            ),
            Err(e) => FetchOutcome::failed(format!("Failed to fetch doctors: {}", e)),
        }
    }

    async fn list_slots_by_doctor(&self, doctor_id: &str) -> FetchOutcome<SlotResponse> {
        let path = format!("/get-all-slots/{}", doctor_id);
        match self.read::<SlotListEnvelope>(&path, "slots").await {
            Ok(envelope) => FetchOutcome::Loaded(envelope.slots),
            Err(e) => FetchOutcome::failed(format!("Failed to fetch slots: {}", e)),
        }
    }

    async fn submit_booking(&self, booking: &BookingData) -> Result<Value, ApiError> {
        debug!("Submitting booking for doctor {} at hospital {}", booking.doctor_id, booking.hospital_id);

        self.request::<Value, BookingData>(Method::POST, "/patients/add", Some(booking))
            .await
            .map_err(|e| {
                error!("Error booking appointment: {}", e);
                e
            })
    }
}
