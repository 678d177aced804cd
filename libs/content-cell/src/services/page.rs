use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use shared_utils::SessionRegistry;

use crate::error::ContentError;
use crate::events::{PageEvent, PageEventBus};
use crate::models::{HeroView, NavigationView};
use crate::services::hero::Hero;
use crate::services::navigation::Navigation;

/// Event-driven parts of one page: its bus and the components listening on it.
#[derive(Debug)]
pub struct PageContent {
    bus: PageEventBus,
    navigation: Navigation,
    hero: Hero,
}

impl PageContent {
    pub fn mount(hash: &str) -> Self {
        let bus = PageEventBus::new();
        let navigation = Navigation::mount(&bus, hash);
        let hero = Hero::mount(&bus);
        Self { bus, navigation, hero }
    }

    pub fn bus(&self) -> &PageEventBus {
        &self.bus
    }

    pub fn unmount(&mut self) {
        self.navigation.unmount();
        self.hero.unmount();
    }

    fn sync(&mut self) {
        self.navigation.sync();
        self.hero.sync();
    }
}

pub struct ContentService {
    sessions: SessionRegistry<PageContent>,
}

impl Default for ContentService {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentService {
    pub fn new() -> Self {
        Self {
            sessions: SessionRegistry::new(),
        }
    }

    pub async fn mount(&self, session_id: Uuid, hash: &str) -> (NavigationView, HeroView) {
        let page = self.sessions.mount(session_id, PageContent::mount(hash)).await;
        let page = page.lock().await;
        info!("Page content mounted for session {}", session_id);
        (page.navigation.view(), page.hero.view())
    }

    /// Releases the page's subscriptions and drops its state.
    pub async fn unmount(&self, session_id: Uuid) -> bool {
        match self.sessions.unmount(session_id).await {
            Some(page) => {
                page.lock().await.unmount();
                true
            }
            None => false,
        }
    }

    /// Handle to the session's bus, for components outside this cell.
    pub async fn bus(&self, session_id: Uuid) -> Result<PageEventBus, ContentError> {
        let page = self.page(session_id).await?;
        let page = page.lock().await;
        Ok(page.bus().clone())
    }

    pub async fn publish(&self, session_id: Uuid, event: PageEvent) -> Result<usize, ContentError> {
        let page = self.page(session_id).await?;
        let page = page.lock().await;
        let delivered = page.bus.publish(event);
        debug!("Page event for session {} reached {} subscribers", session_id, delivered);
        Ok(delivered)
    }

    pub async fn navigation(&self, session_id: Uuid) -> Result<NavigationView, ContentError> {
        let page = self.page(session_id).await?;
        let mut page = page.lock().await;
        page.sync();
        Ok(page.navigation.view())
    }

    pub async fn toggle_menu(&self, session_id: Uuid) -> Result<NavigationView, ContentError> {
        let page = self.page(session_id).await?;
        let mut page = page.lock().await;
        page.sync();
        page.navigation.toggle_menu();
        Ok(page.navigation.view())
    }

    pub async fn follow_link(&self, session_id: Uuid) -> Result<NavigationView, ContentError> {
        let page = self.page(session_id).await?;
        let mut page = page.lock().await;
        page.sync();
        page.navigation.follow_link();
        Ok(page.navigation.view())
    }

    pub async fn hero(&self, session_id: Uuid) -> Result<HeroView, ContentError> {
        let page = self.page(session_id).await?;
        let mut page = page.lock().await;
        page.sync();
        Ok(page.hero.view())
    }

    async fn page(&self, session_id: Uuid) -> Result<Arc<Mutex<PageContent>>, ContentError> {
        self.sessions
            .get(session_id)
            .await
            .ok_or(ContentError::NotMounted(session_id))
    }
}
