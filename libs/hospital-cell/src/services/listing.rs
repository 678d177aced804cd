use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_api_client::HospitalApi;
use shared_models::ui::{Button, ButtonVariant, Card, Modal};
use shared_models::{Doctor, FetchOutcome, Hospital, LoadState};
use shared_utils::{RequestGeneration, RevealWindow, SessionRegistry, Ticket};

use crate::error::ListingError;
use crate::models::{HospitalCard, HospitalsView, RosterBody, RosterEntry};

pub const HOSPITALS_PER_PAGE: usize = 4;

#[derive(Debug, Default)]
struct RosterModal {
    open: bool,
    hospital: Option<Hospital>,
    doctors: Vec<Doctor>,
    state: LoadState,
    fetch: RequestGeneration,
}

/// Hospitals section of one mounted page.
#[derive(Debug)]
pub struct HospitalListing {
    hospitals: Vec<Hospital>,
    state: LoadState,
    window: RevealWindow,
    modal: RosterModal,
}

impl Default for HospitalListing {
    fn default() -> Self {
        Self::new()
    }
}

impl HospitalListing {
    pub fn new() -> Self {
        Self {
            hospitals: Vec::new(),
            state: LoadState::Loading,
            window: RevealWindow::new(HOSPITALS_PER_PAGE),
            modal: RosterModal::default(),
        }
    }

    pub fn apply_hospitals(&mut self, outcome: FetchOutcome<Hospital>) {
        let (hospitals, state) = outcome.into_parts();
        self.hospitals = hospitals;
        self.state = state;
        self.window.reset();
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn visible(&self) -> &[Hospital] {
        self.window.slice(&self.hospitals)
    }

    pub fn load_more(&mut self) -> usize {
        self.window.load_more(self.hospitals.len())
    }

    /// Opens the roster modal for `hospital_id` and returns the ticket its fetch must present.
    pub fn open_roster(&mut self, hospital_id: &str) -> Result<Ticket, ListingError> {
        let hospital = self
            .hospitals
            .iter()
            .find(|h| h.id == hospital_id)
            .cloned()
            .ok_or_else(|| ListingError::UnknownHospital(hospital_id.to_string()))?;

        self.modal.open = true;
        self.modal.hospital = Some(hospital);
        self.modal.doctors.clear();
        self.modal.state = LoadState::Loading;
        Ok(self.modal.fetch.issue())
    }

    /// Returns false when the modal moved on to another hospital or was closed.
    pub fn apply_roster(&mut self, ticket: Ticket, outcome: FetchOutcome<Doctor>) -> bool {
        if !self.modal.fetch.is_current(ticket) {
            return false;
        }
        let (doctors, state) = outcome.into_parts();
        self.modal.doctors = doctors;
        self.modal.state = state;
        true
    }

    pub fn close_roster(&mut self) {
        self.modal.fetch.invalidate();
        self.modal.open = false;
        self.modal.state = LoadState::Idle;
    }

    pub fn roster(&self) -> &[Doctor] {
        &self.modal.doctors
    }

    pub fn roster_open(&self) -> bool {
        self.modal.open
    }

    pub fn view(&self) -> HospitalsView {
        let total = self.hospitals.len();
        let cards = self
            .visible()
            .iter()
            .map(|h| Card::new(HospitalCard::from_hospital(h)))
            .collect::<Vec<_>>();

        let load_more = self.window.has_more(total).then(|| {
            Button::new("Load More Hospitals")
                .variant(ButtonVariant::Outline)
                .action("hospitals/load-more")
        });

        let title = match &self.modal.hospital {
            Some(hospital) => format!("Doctors at {}", hospital.name),
            None => String::new(),
        };

        let empty_message = (self.modal.state == LoadState::Ready && self.modal.doctors.is_empty())
            .then(|| "No doctors found for this hospital.".to_string());

        HospitalsView {
            anchor: "hospitals",
            title: "Our Partner Hospitals",
            subtitle: "We've partnered with the finest healthcare institutions to provide you with top-quality medical services and care.",
            state: self.state.clone(),
            total,
            visible: cards.len(),
            cards,
            load_more,
            modal: Modal {
                open: self.modal.open,
                title,
                body: RosterBody {
                    state: self.modal.state.clone(),
                    doctors: self.modal.doctors.iter().map(RosterEntry::from).collect(),
                    empty_message,
                },
            },
        }
    }
}

pub struct HospitalListingService {
    api: Arc<dyn HospitalApi>,
    sessions: SessionRegistry<HospitalListing>,
}

impl HospitalListingService {
    pub fn new(api: Arc<dyn HospitalApi>) -> Self {
        Self {
            api,
            sessions: SessionRegistry::new(),
        }
    }

    /// Mounts the section and performs its one fetch of the hospital list.
    pub async fn mount(&self, session_id: Uuid) -> HospitalsView {
        let listing = self.sessions.mount(session_id, HospitalListing::new()).await;

        let outcome = self.api.list_hospitals().await;
        if let FetchOutcome::Failed { reason } = &outcome {
            warn!("Hospitals section for {} failed to load: {}", session_id, reason);
        }

        let mut listing = listing.lock().await;
        listing.apply_hospitals(outcome);
        info!("Hospitals section mounted for session {} ({} hospitals)", session_id, listing.hospitals().len());
        listing.view()
    }

    pub async fn unmount(&self, session_id: Uuid) -> bool {
        self.sessions.unmount(session_id).await.is_some()
    }

    pub async fn view(&self, session_id: Uuid) -> Result<HospitalsView, ListingError> {
        let listing = self.listing(session_id).await?;
        let listing = listing.lock().await;
        Ok(listing.view())
    }

    pub async fn load_more(&self, session_id: Uuid) -> Result<HospitalsView, ListingError> {
        let listing = self.listing(session_id).await?;
        let mut listing = listing.lock().await;
        let visible = listing.load_more();
        debug!("Session {} now shows {} hospitals", session_id, visible);
        Ok(listing.view())
    }

    pub async fn open_roster(&self, session_id: Uuid, hospital_id: &str) -> Result<HospitalsView, ListingError> {
        let listing = self.listing(session_id).await?;

        let ticket = listing.lock().await.open_roster(hospital_id)?;
        let outcome = self.api.list_doctors_by_hospital(hospital_id).await;

        let mut listing = listing.lock().await;
        if !listing.apply_roster(ticket, outcome) {
            debug!("Discarded stale roster for hospital {} in session {}", hospital_id, session_id);
        }
        Ok(listing.view())
    }

    pub async fn close_roster(&self, session_id: Uuid) -> Result<HospitalsView, ListingError> {
        let listing = self.listing(session_id).await?;
        let mut listing = listing.lock().await;
        listing.close_roster();
        Ok(listing.view())
    }

    async fn listing(&self, session_id: Uuid) -> Result<Arc<tokio::sync::Mutex<HospitalListing>>, ListingError> {
        self.sessions
            .get(session_id)
            .await
            .ok_or(ListingError::NotMounted(session_id))
    }
}
