use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info};
use uuid::Uuid;

use booking_cell::{BookingService, BookingView};
use chat_cell::{ChatService, ChatView, GenerativeModel};
use content_cell::{
    about, footer, services, testimonials, AboutView, ContentService, FooterView, HeroView,
    NavigationView, ServicesView, TestimonialsView,
};
use doctor_cell::{DoctorDirectoryService, DoctorsView};
use hospital_cell::{HospitalListingService, HospitalsView};
use shared_api_client::HospitalApi;
use shared_config::AppConfig;
use shared_models::AppError;
use shared_utils::SessionRegistry;

#[derive(Debug, Clone, Copy)]
struct PageMeta {
    mounted_at: DateTime<Utc>,
}

/// The whole page in render order.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub session_id: Uuid,
    pub mounted_at: DateTime<Utc>,
    pub navigation: NavigationView,
    pub hero: HeroView,
    pub services: ServicesView,
    pub hospitals: HospitalsView,
    pub doctors: DoctorsView,
    pub testimonials: TestimonialsView,
    pub about: AboutView,
    pub booking: BookingView,
    pub footer: FooterView,
    pub chat: ChatView,
}

/// Mounts and unmounts every section of a page together.
pub struct Shell {
    pages: SessionRegistry<PageMeta>,
    hospitals: Arc<HospitalListingService>,
    doctors: Arc<DoctorDirectoryService>,
    booking: Arc<BookingService>,
    chat: Arc<ChatService>,
    content: Arc<ContentService>,
}

impl Shell {
    pub fn new(api: Arc<dyn HospitalApi>, model: Arc<dyn GenerativeModel>, config: &AppConfig) -> Self {
        Self {
            pages: SessionRegistry::new(),
            hospitals: Arc::new(HospitalListingService::new(api.clone())),
            doctors: Arc::new(DoctorDirectoryService::new(api.clone())),
            booking: Arc::new(BookingService::new(api, config)),
            chat: Arc::new(ChatService::new(model)),
            content: Arc::new(ContentService::new()),
        }
    }

    pub fn hospitals(&self) -> Arc<HospitalListingService> {
        self.hospitals.clone()
    }

    pub fn doctors(&self) -> Arc<DoctorDirectoryService> {
        self.doctors.clone()
    }

    pub fn booking(&self) -> Arc<BookingService> {
        self.booking.clone()
    }

    pub fn chat(&self) -> Arc<ChatService> {
        self.chat.clone()
    }

    pub fn content(&self) -> Arc<ContentService> {
        self.content.clone()
    }

    /// Mounts a new page. Each section runs its own fetches concurrently.
    pub async fn mount(&self, hash: &str) -> PageView {
        let session_id = Uuid::new_v4();
        let meta = PageMeta {
            mounted_at: Utc::now(),
        };

        let ((navigation, hero), hospitals, doctors, booking, chat) = futures::join!(
            self.content.mount(session_id, hash),
            self.hospitals.mount(session_id),
            self.doctors.mount(session_id),
            self.booking.mount(session_id),
            self.chat.mount(session_id),
        );
        self.pages.mount(session_id, meta).await;
        info!("Mounted page {}", session_id);

        PageView {
            session_id,
            mounted_at: meta.mounted_at,
            navigation,
            hero,
            services: services(),
            hospitals,
            doctors,
            testimonials: testimonials(),
            about: about(),
            booking,
            footer: footer(),
            chat,
        }
    }

    pub async fn page(&self, session_id: Uuid) -> Result<PageView, AppError> {
        let meta = self
            .pages
            .get(session_id)
            .await
            .ok_or_else(|| AppError::session_not_found(session_id))?;
        let meta = *meta.lock().await;

        Ok(PageView {
            session_id,
            mounted_at: meta.mounted_at,
            navigation: self.content.navigation(session_id).await?,
            hero: self.content.hero(session_id).await?,
            services: services(),
            hospitals: self.hospitals.view(session_id).await?,
            doctors: self.doctors.view(session_id).await?,
            testimonials: testimonials(),
            about: about(),
            booking: self.booking.view(session_id).await?,
            footer: footer(),
            chat: self.chat.view(session_id).await?,
        })
    }

    /// Drops every section's state and releases the page's event subscriptions.
    pub async fn unmount(&self, session_id: Uuid) -> Result<(), AppError> {
        if self.pages.unmount(session_id).await.is_none() {
            return Err(AppError::session_not_found(session_id));
        }

        futures::join!(
            self.content.unmount(session_id),
            self.hospitals.unmount(session_id),
            self.doctors.unmount(session_id),
            self.booking.unmount(session_id),
            self.chat.unmount(session_id),
        );
        info!("Unmounted page {}", session_id);
        Ok(())
    }

    pub async fn page_count(&self) -> usize {
        self.pages.len().await
    }

    /// Marks the page as active. Returns false for unknown sessions.
    pub async fn touch(&self, session_id: Uuid) -> bool {
        self.pages.touch(session_id).await
    }

    /// Unmounts every page untouched for at least `ttl`.
    pub async fn sweep_idle(&self, ttl: Duration) -> usize {
        let mut swept = 0;
        for session_id in self.pages.idle(ttl).await {
            match self.unmount(session_id).await {
                Ok(()) => swept += 1,
                // Closed by its own DELETE between listing and unmounting.
                Err(e) => debug!("Skipping idle page {}: {}", session_id, e),
            }
        }
        if swept > 0 {
            info!("Swept {} idle pages", swept);
        }
        swept
    }

    /// Sweeps idle pages every `every` until the runtime shuts down.
    pub fn spawn_sweeper(self: Arc<Self>, ttl: Duration, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut sweep_interval = interval(every);
            loop {
                sweep_interval.tick().await;
                self.sweep_idle(ttl).await;
            }
        })
    }
}
