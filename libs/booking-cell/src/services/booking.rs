use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_api_client::HospitalApi;
use shared_config::AppConfig;
use shared_models::FetchOutcome;
use shared_utils::{SessionRegistry, Ticket};

use crate::error::BookingError;
use crate::models::{BookingView, DetailsUpdate, FormField};
use crate::services::workflow::BookingWorkflow;

pub struct BookingService {
    api: Arc<dyn HospitalApi>,
    sessions: SessionRegistry<BookingWorkflow>,
    confirmation_delay: Duration,
}

impl BookingService {
    pub fn new(api: Arc<dyn HospitalApi>, config: &AppConfig) -> Self {
        Self::with_confirmation_delay(api, config.booking_confirmation_delay())
    }

    pub fn with_confirmation_delay(api: Arc<dyn HospitalApi>, confirmation_delay: Duration) -> Self {
        Self {
            api,
            sessions: SessionRegistry::new(),
            confirmation_delay,
        }
    }

    pub fn confirmation_delay(&self) -> Duration {
        self.confirmation_delay
    }

    /// Mounts the booking section and loads the hospital selector.
    pub async fn mount(&self, session_id: Uuid) -> BookingView {
        let workflow = self.sessions.mount(session_id, BookingWorkflow::new()).await;

        let outcome = self.api.list_hospitals().await;
        if let FetchOutcome::Failed { reason } = &outcome {
            warn!("Booking hospitals for {} failed to load: {}", session_id, reason);
        }

        let mut workflow = workflow.lock().await;
        workflow.apply_hospitals(outcome);
        info!("Booking section mounted for session {}", session_id);
        workflow.view()
    }

    pub async fn unmount(&self, session_id: Uuid) -> bool {
        self.sessions.unmount(session_id).await.is_some()
    }

    pub async fn view(&self, session_id: Uuid) -> Result<BookingView, BookingError> {
        let workflow = self.workflow(session_id).await?;
        let workflow = workflow.lock().await;
        Ok(workflow.view())
    }

    pub async fn select_hospital(&self, session_id: Uuid, hospital_id: &str) -> Result<BookingView, BookingError> {
        let workflow = self.workflow(session_id).await?;

        let ticket = workflow.lock().await.select_hospital(hospital_id)?;
        if let Some(ticket) = ticket {
            let outcome = self.api.list_doctors_by_hospital(hospital_id).await;
            if !workflow.lock().await.apply_doctors(ticket, outcome) {
                debug!("Discarded stale doctors of hospital {} in session {}", hospital_id, session_id);
            }
        }

        let workflow = workflow.lock().await;
        Ok(workflow.view())
    }

    pub async fn select_doctor(&self, session_id: Uuid, doctor_id: &str) -> Result<BookingView, BookingError> {
        let workflow = self.workflow(session_id).await?;

        let ticket = workflow.lock().await.select_doctor(doctor_id)?;
        if let Some(ticket) = ticket {
            let outcome = self.api.list_slots_by_doctor(doctor_id).await;
            if !workflow.lock().await.apply_slots(ticket, outcome) {
                debug!("Discarded stale slots of doctor {} in session {}", doctor_id, session_id);
            }
        }

        let workflow = workflow.lock().await;
        Ok(workflow.view())
    }

    pub async fn select_slot(&self, session_id: Uuid, slot_id: &str) -> Result<BookingView, BookingError> {
        let workflow = self.workflow(session_id).await?;
        let mut workflow = workflow.lock().await;
        workflow.select_slot(slot_id)?;
        Ok(workflow.view())
    }

    pub async fn update_field(
        &self,
        session_id: Uuid,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<BookingView, BookingError> {
        let workflow = self.workflow(session_id).await?;
        let mut workflow = workflow.lock().await;
        workflow.update_field(field, value)?;
        Ok(workflow.view())
    }

    pub async fn update_details(&self, session_id: Uuid, update: DetailsUpdate) -> Result<BookingView, BookingError> {
        let workflow = self.workflow(session_id).await?;
        let mut workflow = workflow.lock().await;
        for (field, value) in update.into_fields() {
            workflow.update_field(field, value)?;
        }
        Ok(workflow.view())
    }

    /// Sends the booking. On success the confirmation shows until the
    /// configured delay elapses or the visitor books another appointment.
    ///
    /// The POST and its bookkeeping run on their own task, so a caller that
    /// goes away mid-request never leaves the form stuck in `submitting`.
    pub async fn submit(&self, session_id: Uuid) -> Result<BookingView, BookingError> {
        let workflow = self.workflow(session_id).await?;

        let booking = workflow.lock().await.begin_submit()?;
        info!(
            "Session {} booking slot {} with doctor {} at hospital {}",
            session_id, booking.slot_id, booking.doctor_id, booking.hospital_id
        );

        let api = self.api.clone();
        let sessions = self.sessions.clone();
        let delay = self.confirmation_delay;

        let submission = tokio::spawn(async move {
            let result = api.submit_booking(&booking).await;

            let mut guard = workflow.lock().await;
            match result {
                Ok(_) => {
                    if let Some(ticket) = guard.complete_submit(Ok(())) {
                        schedule_reset(sessions, session_id, ticket, delay);
                    }
                    Ok(guard.view())
                }
                Err(e) => {
                    warn!("Booking for session {} failed: {}", session_id, e);
                    guard.complete_submit(Err(e.to_string()));
                    Err(BookingError::SubmissionFailed(e.to_string()))
                }
            }
        });

        submission
            .await
            .map_err(|e| BookingError::SubmissionFailed(e.to_string()))?
    }

    pub async fn dismiss_confirmation(&self, session_id: Uuid) -> Result<BookingView, BookingError> {
        let workflow = self.workflow(session_id).await?;
        let mut workflow = workflow.lock().await;
        workflow.dismiss_confirmation();
        Ok(workflow.view())
    }

    pub async fn dismiss_alert(&self, session_id: Uuid) -> Result<BookingView, BookingError> {
        let workflow = self.workflow(session_id).await?;
        let mut workflow = workflow.lock().await;
        workflow.dismiss_alert();
        Ok(workflow.view())
    }

    async fn workflow(&self, session_id: Uuid) -> Result<Arc<Mutex<BookingWorkflow>>, BookingError> {
        self.sessions
            .get(session_id)
            .await
            .ok_or(BookingError::NotMounted(session_id))
    }
}

/// Ends the confirmation after `delay` unless a newer ticket superseded it.
fn schedule_reset(sessions: SessionRegistry<BookingWorkflow>, session_id: Uuid, ticket: Ticket, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Some(workflow) = sessions.get(session_id).await {
            if workflow.lock().await.finish_confirmation(ticket) {
                debug!("Booking form of session {} reset after confirmation", session_id);
            }
        }
    });
}
