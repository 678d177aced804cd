use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

struct Slot<T> {
    component: Arc<Mutex<T>>,
    touched: Instant,
}

/// Per-session component state.
///
/// Each mounted component sits behind its own mutex so sessions never contend
/// with each other. Callers must not hold a component lock across a network
/// call. Every entry remembers when it was last touched so abandoned sessions
/// can be swept.
pub struct SessionRegistry<T> {
    sessions: Arc<RwLock<HashMap<Uuid, Slot<T>>>>,
}

impl<T> Clone for SessionRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
        }
    }
}

impl<T> Default for SessionRegistry<T> {
    fn default() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T> SessionRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts `component` for `session_id`, replacing any previous instance.
    pub async fn mount(&self, session_id: Uuid, component: T) -> Arc<Mutex<T>> {
        let component = Arc::new(Mutex::new(component));
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            session_id,
            Slot {
                component: component.clone(),
                touched: Instant::now(),
            },
        );
        debug!("Mounted component for session {}", session_id);
        component
    }

    pub async fn get(&self, session_id: Uuid) -> Option<Arc<Mutex<T>>> {
        let sessions = self.sessions.read().await;
        sessions.get(&session_id).map(|slot| slot.component.clone())
    }

    /// Marks the session as active now. Returns false when it is not mounted.
    pub async fn touch(&self, session_id: Uuid) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&session_id) {
            Some(slot) => {
                slot.touched = Instant::now();
                true
            }
            None => false,
        }
    }

    /// Sessions not touched for at least `ttl`.
    pub async fn idle(&self, ttl: Duration) -> Vec<Uuid> {
        let sessions = self.sessions.read().await;
        sessions
            .iter()
            .filter(|(_, slot)| slot.touched.elapsed() >= ttl)
            .map(|(id, _)| *id)
            .collect()
    }

    pub async fn unmount(&self, session_id: Uuid) -> Option<Arc<Mutex<T>>> {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(&session_id).map(|slot| slot.component);
        if removed.is_some() {
            debug!("Unmounted component for session {}", session_id);
        }
        removed
    }

    pub async fn is_mounted(&self, session_id: Uuid) -> bool {
        self.sessions.read().await.contains_key(&session_id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unmount_drops_the_component() {
        let registry = SessionRegistry::new();
        let id = Uuid::new_v4();

        registry.mount(id, 1u32).await;
        assert!(registry.is_mounted(id).await);

        let handle = registry.get(id).await.unwrap();
        *handle.lock().await += 1;
        assert_eq!(*registry.get(id).await.unwrap().lock().await, 2);

        assert!(registry.unmount(id).await.is_some());
        assert!(registry.get(id).await.is_none());
        assert!(registry.unmount(id).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn idle_lists_only_untouched_sessions() {
        let registry = SessionRegistry::new();
        let (quiet, busy) = (Uuid::new_v4(), Uuid::new_v4());
        registry.mount(quiet, ()).await;
        registry.mount(busy, ()).await;

        tokio::time::sleep(Duration::from_secs(40)).await;
        assert!(registry.touch(busy).await);
        tokio::time::sleep(Duration::from_secs(30)).await;

        assert_eq!(registry.idle(Duration::from_secs(60)).await, vec![quiet]);
        assert!(!registry.touch(Uuid::new_v4()).await);
    }
}
