//! Seam between the lifecycle controller and the hosted rendering SDK.
//!
//! The controller never reaches for a global SDK object; it is handed a
//! [`MapRenderer`] and talks to the maps it creates only through
//! [`MapHandle`]. Asynchronous SDK notifications come back through an
//! [`EventSink`] tagged with the [`HandleId`] of the map that raised them.

pub mod events;
pub mod headless;
#[cfg(feature = "wasm")]
pub mod web;

pub use events::{EventQueue, EventSink};
pub use headless::{HeadlessContainer, HeadlessHandle, HeadlessRenderer, RendererCall};

use std::fmt;

/// Identity of one constructed map, unique per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

impl HandleId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Notifications a live map may raise after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    /// The style and first frame finished loading.
    Load,
    /// The SDK reported a failure for this map.
    Error(String),
}

impl MapEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MapEvent::Load => "load",
            MapEvent::Error(_) => "error",
        }
    }
}

/// Error raised by the SDK itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SdkError {
    pub message: String,
}

impl SdkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Everything the SDK needs to build one map.
#[derive(Debug)]
pub struct RendererOptions<'a, C> {
    pub credential: &'a str,
    pub container: &'a C,
    pub style: &'a str,
    /// `[lng, lat]`
    pub center: [f64; 2],
    pub zoom: f64,
}

/// The hosted rendering SDK.
pub trait MapRenderer {
    /// Mount target the map draws into.
    type Container;
    type Handle: MapHandle;

    /// Whether the platform offers the rendering context the SDK needs.
    fn supported(&self) -> bool;

    /// Builds a map bound to `options.container`. The returned handle is live
    /// immediately; `events` may be used later to report `load`/`error`.
    fn construct(
        &self,
        options: RendererOptions<'_, Self::Container>,
        events: EventSink,
    ) -> Result<Self::Handle, SdkError>;
}

/// One live map owned by the controller.
pub trait MapHandle {
    /// Tears the map down. Called at most once per handle.
    fn remove(&mut self) -> Result<(), SdkError>;

    /// Adds the zoom and rotation buttons in the top-right corner.
    fn add_navigation_control(&mut self) -> Result<(), SdkError>;

    fn remove_navigation_control(&mut self) -> Result<(), SdkError>;
}

impl<R: MapRenderer + ?Sized> MapRenderer for &R {
    type Container = R::Container;
    type Handle = R::Handle;

    fn supported(&self) -> bool {
        (**self).supported()
    }

    fn construct(
        &self,
        options: RendererOptions<'_, Self::Container>,
        events: EventSink,
    ) -> Result<Self::Handle, SdkError> {
        (**self).construct(options, events)
    }
}
