//! Result of a read against the hospital API.
//!
//! Reads never propagate errors to the caller. A failed read is still a
//! value, so a section can render "could not load" instead of an empty list.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Loaded(Vec<T>),
    Failed { reason: String },
}

impl<T> FetchOutcome<T> {
    pub fn failed(reason: impl Into<String>) -> Self {
        FetchOutcome::Failed { reason: reason.into() }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed { .. })
    }

    pub fn items(&self) -> &[T] {
        match self {
            FetchOutcome::Loaded(items) => items,
            FetchOutcome::Failed { .. } => &[],
        }
    }

    /// Collapses a failure into an empty collection.
    pub fn into_items(self) -> Vec<T> {
        match self {
            FetchOutcome::Loaded(items) => items,
            FetchOutcome::Failed { .. } => Vec::new(),
        }
    }

    /// Splits the outcome into the items to show and the state to report.
    pub fn into_parts(self) -> (Vec<T>, LoadState) {
        match self {
            FetchOutcome::Loaded(items) => (items, LoadState::Ready),
            FetchOutcome::Failed { reason } => (Vec::new(), LoadState::Failed { reason }),
        }
    }
}

/// Load status of one collection held by a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed { reason: String },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}
