use crate::{sdk::HandleId, MapError};
use instant::Instant;
use std::fmt;

/// Observable lifecycle state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapStatus {
    #[default]
    Idle,
    /// A map exists but has not reported `load` yet.
    Initializing,
    Ready,
    /// Terminal until the next `initialize`.
    Failed,
}

impl MapStatus {
    /// Whether a live handle must exist in this state.
    pub fn holds_handle(self) -> bool {
        matches!(self, MapStatus::Initializing | MapStatus::Ready)
    }
}

impl fmt::Display for MapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapStatus::Idle => write!(f, "idle"),
            MapStatus::Initializing => write!(f, "initializing"),
            MapStatus::Ready => write!(f, "ready"),
            MapStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A handle together with the identity its events are tagged with.
#[derive(Debug)]
pub struct OwnedHandle<H> {
    pub id: HandleId,
    pub handle: H,
}

/// The controller's single mutable record.
///
/// `handle` is `Some` exactly when `status` is `Initializing` or `Ready`.
#[derive(Debug)]
pub struct MapSession<H> {
    pub(crate) status: MapStatus,
    pub(crate) handle: Option<OwnedHandle<H>>,
    pub(crate) last_error: Option<MapError>,
    pub(crate) started_at: Option<Instant>,
}

impl<H> MapSession<H> {
    pub fn new() -> Self {
        Self {
            status: MapStatus::Idle,
            handle: None,
            last_error: None,
            started_at: None,
        }
    }

    pub fn status(&self) -> MapStatus {
        self.status
    }

    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref().map(|owned| &owned.handle)
    }

    pub fn handle_id(&self) -> Option<HandleId> {
        self.handle.as_ref().map(|owned| owned.id)
    }

    pub fn last_error(&self) -> Option<&MapError> {
        self.last_error.as_ref()
    }

    /// Time since the current handle was constructed.
    pub fn age(&self) -> Option<std::time::Duration> {
        self.started_at.map(|started| started.elapsed())
    }

    pub(crate) fn is_consistent(&self) -> bool {
        self.status.holds_handle() == self.handle.is_some()
    }
}

impl<H> Default for MapSession<H> {
    fn default() -> Self {
        Self::new()
    }
}
