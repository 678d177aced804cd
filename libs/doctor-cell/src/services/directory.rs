use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_api_client::HospitalApi;
use shared_models::ui::{Button, ButtonVariant, Card};
use shared_models::{Doctor, FetchOutcome, LoadState};
use shared_utils::{RevealWindow, SessionRegistry};

use crate::error::DirectoryError;
use crate::models::{DoctorCard, DoctorsView, SpecialtyChip};

pub const DOCTORS_PER_PAGE: usize = 8;

/// Doctors section of one mounted page.
#[derive(Debug)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
    state: LoadState,
    specialty: Option<String>,
    window: RevealWindow,
}

impl Default for DoctorDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorDirectory {
    pub fn new() -> Self {
        Self {
            doctors: Vec::new(),
            state: LoadState::Loading,
            specialty: None,
            window: RevealWindow::new(DOCTORS_PER_PAGE),
        }
    }

    pub fn apply_doctors(&mut self, outcome: FetchOutcome<Doctor>) {
        let (doctors, state) = outcome.into_parts();
        self.doctors = doctors;
        self.state = state;
        self.specialty = None;
        self.window.reset();
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn selected_specialty(&self) -> Option<&str> {
        self.specialty.as_deref()
    }

    /// Distinct specializations in the order they first appear.
    pub fn specialties(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for doctor in &self.doctors {
            if !seen.contains(&doctor.specialization.as_str()) {
                seen.push(&doctor.specialization);
            }
        }
        seen
    }

    /// Selects a specialty (`None` or empty for all) and restarts the reveal count.
    pub fn filter_by_specialty(&mut self, specialty: Option<&str>) {
        self.specialty = specialty.filter(|s| !s.is_empty()).map(str::to_string);
        self.window.reset();
    }

    pub fn filtered(&self) -> Vec<&Doctor> {
        match &self.specialty {
            None => self.doctors.iter().collect(),
            Some(specialty) => self
                .doctors
                .iter()
                .filter(|d| &d.specialization == specialty)
                .collect(),
        }
    }

    pub fn visible(&self) -> Vec<&Doctor> {
        let filtered = self.filtered();
        let count = self.window.visible_count(filtered.len());
        filtered.into_iter().take(count).collect()
    }

    pub fn load_more(&mut self) -> usize {
        let filtered = self.filtered().len();
        self.window.load_more(filtered)
    }

    pub fn view(&self) -> DoctorsView {
        let filtered = self.filtered();
        let visible = self.visible();

        let mut filters = vec![SpecialtyChip {
            label: "All".to_string(),
            specialty: None,
            active: self.specialty.is_none(),
        }];
        filters.extend(self.specialties().into_iter().map(|s| SpecialtyChip {
            label: s.to_string(),
            specialty: Some(s.to_string()),
            active: self.specialty.as_deref() == Some(s),
        }));

        let load_more = self.window.has_more(filtered.len()).then(|| {
            Button::new("Load More Doctors")
                .variant(ButtonVariant::Outline)
                .action("doctors/load-more")
        });

        DoctorsView {
            anchor: "doctors",
            title: "Our Expert Doctors",
            subtitle: "Meet our team of experienced doctors who are committed to providing the highest quality of care.",
            state: self.state.clone(),
            filters,
            total: self.doctors.len(),
            filtered: filtered.len(),
            visible: visible.len(),
            cards: visible.into_iter().map(|d| Card::new(DoctorCard::from(d))).collect(),
            load_more,
        }
    }
}

pub struct DoctorDirectoryService {
    api: Arc<dyn HospitalApi>,
    sessions: SessionRegistry<DoctorDirectory>,
}

impl DoctorDirectoryService {
    pub fn new(api: Arc<dyn HospitalApi>) -> Self {
        Self {
            api,
            sessions: SessionRegistry::new(),
        }
    }

    pub async fn mount(&self, session_id: Uuid) -> DoctorsView {
        let directory = self.sessions.mount(session_id, DoctorDirectory::new()).await;

        let outcome = self.api.list_doctors().await;
        if let FetchOutcome::Failed { reason } = &outcome {
            warn!("Doctors section for {} failed to load: {}", session_id, reason);
        }

        let mut directory = directory.lock().await;
        directory.apply_doctors(outcome);
        info!("Doctors section mounted for session {} ({} doctors)", session_id, directory.doctors().len());
        directory.view()
    }

    pub async fn unmount(&self, session_id: Uuid) -> bool {
        self.sessions.unmount(session_id).await.is_some()
    }

    pub async fn view(&self, session_id: Uuid) -> Result<DoctorsView, DirectoryError> {
        let directory = self.directory(session_id).await?;
        let directory = directory.lock().await;
        Ok(directory.view())
    }

    pub async fn filter(&self, session_id: Uuid, specialty: Option<&str>) -> Result<DoctorsView, DirectoryError> {
        let directory = self.directory(session_id).await?;
        let mut directory = directory.lock().await;
        directory.filter_by_specialty(specialty);
        debug!("Session {} filtered doctors by {:?}", session_id, directory.selected_specialty());
        Ok(directory.view())
    }

    pub async fn load_more(&self, session_id: Uuid) -> Result<DoctorsView, DirectoryError> {
        let directory = self.directory(session_id).await?;
        let mut directory = directory.lock().await;
        directory.load_more();
        Ok(directory.view())
    }

    async fn directory(&self, session_id: Uuid) -> Result<Arc<tokio::sync::Mutex<DoctorDirectory>>, DirectoryError> {
        self.sessions
            .get(session_id)
            .await
            .ok_or(DirectoryError::NotMounted(session_id))
    }
}
