use crate::sdk::{HandleId, MapEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use log::debug;

/// Sending half handed to the SDK for a single map.
///
/// Cloneable and `'static`, so it can be captured by SDK callbacks. Events
/// are queued, never applied directly.
#[derive(Debug, Clone)]
pub struct EventSink {
    handle: HandleId,
    tx: Sender<(HandleId, MapEvent)>,
}

impl EventSink {
    pub fn handle_id(&self) -> HandleId {
        self.handle
    }

    pub fn emit(&self, event: MapEvent) {
        if self.tx.send((self.handle, event)).is_err() {
            debug!("Dropping event for map {}: queue closed", self.handle);
        }
    }

    pub fn loaded(&self) {
        self.emit(MapEvent::Load)
    }

    pub fn failed(&self, message: impl Into<String>) {
        self.emit(MapEvent::Error(message.into()))
    }
}

/// Queue of pending SDK events, drained by the owner on its own schedule.
#[derive(Debug)]
pub struct EventQueue {
    tx: Sender<(HandleId, MapEvent)>,
    rx: Receiver<(HandleId, MapEvent)>,
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    pub fn sink(&self, handle: HandleId) -> EventSink {
        EventSink {
            handle,
            tx: self.tx.clone(),
        }
    }

    /// Everything queued so far, in arrival order.
    pub fn drain(&self) -> Vec<(HandleId, MapEvent)> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Drops everything queued and opens a fresh channel. Sinks handed out
    /// earlier are disconnected, so their later events are discarded at the
    /// source. Returns how many queued events were dropped.
    pub fn reset(&mut self) -> usize {
        let dropped = self.rx.len();
        *self = Self::new();
        dropped
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
