//! Per-page browser input.
//!
//! The front-end forwards scroll, hash and pointer activity as [`PageEvent`]s.
//! Components that react to them hold a [`Subscription`] for as long as they
//! are mounted; dropping it is the unsubscribe. Only the newest event of each
//! kind is kept, so a burst of pointer moves is seen as its last position.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PageEvent {
    Scroll {
        y: f64,
    },
    #[serde(rename_all = "camelCase")]
    HashChange {
        hash: String,
    },
    #[serde(rename_all = "camelCase")]
    MouseMove {
        client_x: f64,
        client_y: f64,
        viewport_width: f64,
        viewport_height: f64,
    },
}

/// Latest value of each kind of input. Pointer traffic can never push a
/// scroll or hash change out of a subscriber's view.
#[derive(Debug)]
struct Channels {
    scroll: watch::Sender<Option<PageEvent>>,
    hash: watch::Sender<Option<PageEvent>>,
    pointer: watch::Sender<Option<PageEvent>>,
}

#[derive(Debug, Clone)]
pub struct PageEventBus {
    channels: Arc<Channels>,
}

impl Default for PageEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl PageEventBus {
    pub fn new() -> Self {
        Self {
            channels: Arc::new(Channels {
                scroll: watch::Sender::new(None),
                hash: watch::Sender::new(None),
                pointer: watch::Sender::new(None),
            }),
        }
    }

    fn channel(&self, event: &PageEvent) -> &watch::Sender<Option<PageEvent>> {
        match event {
            PageEvent::Scroll { .. } => &self.channels.scroll,
            PageEvent::HashChange { .. } => &self.channels.hash,
            PageEvent::MouseMove { .. } => &self.channels.pointer,
        }
    }

    /// Returns how many subscribers will see the event.
    pub fn publish(&self, event: PageEvent) -> usize {
        let channel = self.channel(&event);
        channel.send_replace(Some(event));
        channel.receiver_count()
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            receivers: [
                self.channels.scroll.subscribe(),
                self.channels.hash.subscribe(),
                self.channels.pointer.subscribe(),
            ],
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.channels.scroll.receiver_count()
    }
}

#[derive(Debug)]
pub struct Subscription {
    receivers: [watch::Receiver<Option<PageEvent>>; 3],
}

impl Subscription {
    /// The newest event of each kind published since the last drain.
    pub fn drain(&mut self) -> Vec<PageEvent> {
        let mut events = Vec::new();
        for receiver in &mut self.receivers {
            if !matches!(receiver.has_changed(), Ok(true)) {
                continue;
            }
            if let Some(event) = receiver.borrow_and_update().clone() {
                events.push(event);
            }
        }
        if !events.is_empty() {
            debug!("Page subscriber picked up {} events", events.len());
        }
        events
    }
}
