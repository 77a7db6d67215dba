//! A renderer that draws nothing and records every call made to it.
//!
//! Useful for server-side rendering of the surrounding page and for driving
//! the lifecycle without a browser. Failures and SDK events can be scripted.

use crate::sdk::{EventSink, HandleId, MapEvent, MapHandle, MapRenderer, RendererOptions, SdkError};
use std::{cell::RefCell, rc::Rc};

/// Named mount point standing in for a DOM element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessContainer {
    pub id: String,
}

impl HeadlessContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RendererCall {
    Construct {
        handle: HandleId,
        credential: String,
        container: String,
        style: String,
        center: [f64; 2],
        zoom: f64,
    },
    Remove(HandleId),
    AddNavigationControl(HandleId),
    RemoveNavigationControl(HandleId),
}

#[derive(Debug)]
struct HeadlessState {
    supported: bool,
    construct_error: Option<String>,
    remove_error: Option<String>,
    control_error: Option<String>,
    calls: Vec<RendererCall>,
    live: Vec<HandleId>,
    sinks: Vec<EventSink>,
}

/// Cheap to clone; clones share the same call log.
#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(HeadlessState {
                supported: true,
                construct_error: None,
                remove_error: None,
                control_error: None,
                calls: Vec::new(),
                live: Vec::new(),
                sinks: Vec::new(),
            })),
        }
    }

    /// A renderer whose capability probe fails.
    pub fn unsupported() -> Self {
        let renderer = Self::new();
        renderer.set_supported(false);
        renderer
    }

    pub fn set_supported(&self, supported: bool) {
        self.state.borrow_mut().supported = supported;
    }

    /// Make every following `construct` fail with `message`.
    pub fn fail_construction(&self, message: impl Into<String>) {
        self.state.borrow_mut().construct_error = Some(message.into());
    }

    /// Make every following `remove` fail with `message`.
    pub fn fail_removal(&self, message: impl Into<String>) {
        self.state.borrow_mut().remove_error = Some(message.into());
    }

    /// Make every following control add or remove fail with `message`.
    pub fn fail_controls(&self, message: impl Into<String>) {
        self.state.borrow_mut().control_error = Some(message.into());
    }

    pub fn heal(&self) {
        let mut state = self.state.borrow_mut();
        state.construct_error = None;
        state.remove_error = None;
        state.control_error = None;
    }

    pub fn calls(&self) -> Vec<RendererCall> {
        self.state.borrow().calls.clone()
    }

    pub fn construct_count(&self) -> usize {
        self.count(|call| matches!(call, RendererCall::Construct { .. }))
    }

    pub fn remove_count(&self) -> usize {
        self.count(|call| matches!(call, RendererCall::Remove(_)))
    }

    /// Maps constructed and not yet successfully removed.
    pub fn live_handles(&self) -> Vec<HandleId> {
        self.state.borrow().live.clone()
    }

    /// Raise `event` on the map with the given identity, as the SDK would.
    /// Returns false if no map with that identity was ever constructed.
    pub fn emit(&self, handle: HandleId, event: MapEvent) -> bool {
        let sink = self
            .state
            .borrow()
            .sinks
            .iter()
            .find(|sink| sink.handle_id() == handle)
            .cloned();

        match sink {
            Some(sink) => {
                sink.emit(event);
                true
            }
            None => false,
        }
    }

    pub fn emit_load(&self, handle: HandleId) -> bool {
        self.emit(handle, MapEvent::Load)
    }

    pub fn emit_error(&self, handle: HandleId, message: impl Into<String>) -> bool {
        self.emit(handle, MapEvent::Error(message.into()))
    }

    fn count(&self, predicate: impl Fn(&RendererCall) -> bool) -> usize {
        self.state.borrow().calls.iter().filter(|call| predicate(*call)).count()
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MapRenderer for HeadlessRenderer {
    type Container = HeadlessContainer;
    type Handle = HeadlessHandle;

    fn supported(&self) -> bool {
        self.state.borrow().supported
    }

    fn construct(
        &self,
        options: RendererOptions<'_, HeadlessContainer>,
        events: EventSink,
    ) -> Result<HeadlessHandle, SdkError> {
        let handle = events.handle_id();
        let mut state = self.state.borrow_mut();
        state.calls.push(RendererCall::Construct {
            handle,
            credential: options.credential.to_string(),
            container: options.container.id.clone(),
            style: options.style.to_string(),
            center: options.center,
            zoom: options.zoom,
        });

        if let Some(message) = &state.construct_error {
            return Err(SdkError::new(message.clone()));
        }

        state.live.push(handle);
        state.sinks.push(events);
        Ok(HeadlessHandle {
            id: handle,
            state: Rc::clone(&self.state),
        })
    }
}

#[derive(Debug)]
pub struct HeadlessHandle {
    id: HandleId,
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessHandle {
    pub fn id(&self) -> HandleId {
        self.id
    }

    fn record_control(&self, call: RendererCall) -> Result<(), SdkError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        match &state.control_error {
            Some(message) => Err(SdkError::new(message.clone())),
            None => Ok(()),
        }
    }
}

impl MapHandle for HeadlessHandle {
    fn remove(&mut self) -> Result<(), SdkError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(RendererCall::Remove(self.id));

        if let Some(message) = &state.remove_error {
            return Err(SdkError::new(message.clone()));
        }

        state.live.retain(|live| *live != self.id);
        Ok(())
    }

    fn add_navigation_control(&mut self) -> Result<(), SdkError> {
        self.record_control(RendererCall::AddNavigationControl(self.id))
    }

    fn remove_navigation_control(&mut self) -> Result<(), SdkError> {
        self.record_control(RendererCall::RemoveNavigationControl(self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::EventQueue;

    fn options<'a>(container: &'a HeadlessContainer) -> RendererOptions<'a, HeadlessContainer> {
        RendererOptions {
            credential: "pk.test",
            container,
            style: "mapbox://styles/mapbox/streets-v12",
            center: [139.7671, 35.6812],
            zoom: 10.0,
        }
    }

    #[test]
    fn test_records_construct_and_remove() {
        let renderer = HeadlessRenderer::new();
        let queue = EventQueue::new();
        let container = HeadlessContainer::new("map");

        let mut handle = renderer
            .construct(options(&container), queue.sink(HandleId::new(1)))
            .unwrap();
        assert_eq!(renderer.live_handles(), vec![HandleId::new(1)]);

        handle.remove().unwrap();
        assert!(renderer.live_handles().is_empty());
        assert_eq!(renderer.construct_count(), 1);
        assert_eq!(renderer.remove_count(), 1);
        assert_eq!(renderer.calls()[1], RendererCall::Remove(HandleId::new(1)));
    }

    #[test]
    fn test_scripted_failures() {
        let renderer = HeadlessRenderer::new();
        let queue = EventQueue::new();
        let container = HeadlessContainer::new("map");

        renderer.fail_construction("boom");
        let err = renderer
            .construct(options(&container), queue.sink(HandleId::new(1)))
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert!(renderer.live_handles().is_empty());

        renderer.heal();
        let mut handle = renderer
            .construct(options(&container), queue.sink(HandleId::new(2)))
            .unwrap();
        renderer.fail_removal("stuck");
        assert!(handle.remove().is_err());
    }

    #[test]
    fn test_records_navigation_control() {
        let renderer = HeadlessRenderer::new();
        let queue = EventQueue::new();
        let container = HeadlessContainer::new("map");
        let mut handle = renderer
            .construct(options(&container), queue.sink(HandleId::new(3)))
            .unwrap();

        handle.add_navigation_control().unwrap();
        renderer.fail_controls("control already removed");
        assert_eq!(
            handle.remove_navigation_control().unwrap_err().to_string(),
            "control already removed"
        );
        assert_eq!(
            renderer.calls()[1..].to_vec(),
            vec![
                RendererCall::AddNavigationControl(HandleId::new(3)),
                RendererCall::RemoveNavigationControl(HandleId::new(3)),
            ]
        );
    }

    #[test]
    fn test_emit_routes_to_sink() {
        let renderer = HeadlessRenderer::new();
        let queue = EventQueue::new();
        let container = HeadlessContainer::new("map");
        let _handle = renderer
            .construct(options(&container), queue.sink(HandleId::new(7)))
            .unwrap();

        assert!(renderer.emit_load(HandleId::new(7)));
        assert!(!renderer.emit_load(HandleId::new(8)));
        assert_eq!(queue.drain(), vec![(HandleId::new(7), MapEvent::Load)]);
    }
}
