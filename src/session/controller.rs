use crate::{
    core::{
        config::{ConfigSource, EnvConfig, ReadyPolicy},
        constants::RENDER_CAPABILITY,
        map::MapInitOptions,
    },
    sdk::{EventQueue, HandleId, MapEvent, MapHandle, MapRenderer, RendererOptions},
    session::state::{MapSession, MapStatus, OwnedHandle},
    style::StyleProvider,
    MapError, Result,
};
use instant::Instant;
use log::{debug, info, warn};
use std::ops::{Deref, DerefMut};

/// Owns at most one live map and drives it through
/// `Idle -> Initializing -> Ready` (or `Failed`).
///
/// Collaborators are injected: `R` is the rendering SDK, `C` supplies the
/// access credential. Every mutation takes `&mut self`; SDK events are queued
/// and applied by [`poll_events`](Self::poll_events) or
/// [`dispatch`](Self::dispatch), after checking that they came from the map
/// currently owned.
///
/// Dropping the controller releases its map.
pub struct MapLifecycleController<R: MapRenderer, C: ConfigSource = EnvConfig> {
    renderer: R,
    config: C,
    provider: StyleProvider,
    policy: ReadyPolicy,
    session: MapSession<R::Handle>,
    events: EventQueue,
    last_handle: HandleId,
}

impl<R: MapRenderer, C: ConfigSource> MapLifecycleController<R, C> {
    pub fn new(renderer: R, config: C) -> Self {
        Self {
            renderer,
            config,
            provider: StyleProvider::default(),
            policy: ReadyPolicy::default(),
            session: MapSession::new(),
            events: EventQueue::new(),
            last_handle: HandleId::new(0),
        }
    }

    pub fn with_ready_policy(mut self, policy: ReadyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_style_provider(mut self, provider: StyleProvider) -> Self {
        self.provider = provider;
        self
    }

    /// Replaces whatever map exists with a new one bound to `container`.
    ///
    /// Never returns an error: failures land in [`last_error`](Self::last_error)
    /// and the returned status is `Failed`.
    pub fn initialize(&mut self, container: &R::Container, options: &MapInitOptions) -> MapStatus {
        if let Some(previous) = self.session.handle_id() {
            debug!("Replacing map {previous}");
        }
        self.release_handle();

        match self.construct(container, options) {
            Ok(owned) => {
                info!("Constructed map {} with style {}", owned.id, options.style);
                self.session.handle = Some(owned);
                self.session.last_error = None;
                self.session.started_at = Some(Instant::now());
                let next = match self.policy {
                    ReadyPolicy::Immediate => MapStatus::Ready,
                    ReadyPolicy::AwaitLoad => MapStatus::Initializing,
                };
                self.transition(next);
            }
            Err(err) => self.fail(err),
        }

        self.session.status
    }

    /// Removes the map if there is one and returns to `Idle` with no error.
    /// Safe to call any number of times.
    pub fn cleanup(&mut self) {
        self.release_handle();
        self.session.last_error = None;
        self.transition(MapStatus::Idle);
    }

    /// Applies one SDK event. Returns whether it changed anything.
    pub fn dispatch(&mut self, handle: HandleId, event: MapEvent) -> bool {
        if self.session.handle_id() != Some(handle) {
            debug!("Discarding {} event from stale map {handle}", event.name());
            return false;
        }

        match (self.session.status, event) {
            (MapStatus::Initializing, MapEvent::Load) => {
                match self.session.age() {
                    Some(age) => info!("Map {handle} loaded after {age:?}"),
                    None => info!("Map {handle} loaded"),
                }
                self.transition(MapStatus::Ready);
                true
            }
            (MapStatus::Initializing | MapStatus::Ready, MapEvent::Error(message)) => {
                self.fail(MapError::Runtime(message));
                true
            }
            (status, event) => {
                debug!("Ignoring {} event for map {handle} while {status}", event.name());
                false
            }
        }
    }

    /// Drains queued SDK events in arrival order. Returns how many were applied.
    pub fn poll_events(&mut self) -> usize {
        let mut applied = 0;
        for (handle, event) in self.events.drain() {
            if self.dispatch(handle, event) {
                applied += 1;
            }
        }
        applied
    }

    /// Borrows the controller for a scope that ends with [`cleanup`](Self::cleanup).
    pub fn scope(&mut self) -> MapScope<'_, R, C> {
        MapScope { controller: self }
    }

    pub fn status(&self) -> MapStatus {
        self.session.status()
    }

    pub fn is_ready(&self) -> bool {
        self.session.status() == MapStatus::Ready
    }

    pub fn last_error(&self) -> Option<&MapError> {
        self.session.last_error()
    }

    pub fn handle(&self) -> Option<&R::Handle> {
        self.session.handle()
    }

    /// Mutable access to the live map, e.g. for adding controls.
    pub fn handle_mut(&mut self) -> Option<&mut R::Handle> {
        self.session.handle.as_mut().map(|owned| &mut owned.handle)
    }

    pub fn handle_id(&self) -> Option<HandleId> {
        self.session.handle_id()
    }

    /// SDK events waiting for [`poll_events`](Self::poll_events).
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn session(&self) -> &MapSession<R::Handle> {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn policy(&self) -> ReadyPolicy {
        self.policy
    }

    pub fn style_provider(&self) -> &StyleProvider {
        &self.provider
    }

    fn construct(
        &mut self,
        container: &R::Container,
        options: &MapInitOptions,
    ) -> Result<OwnedHandle<R::Handle>> {
        if !self.renderer.supported() {
            return Err(MapError::Capability(format!(
                "{RENDER_CAPABILITY} is not supported or the map SDK is not available"
            )));
        }

        let config = self.config.load();
        let credential = config.credential()?;

        let style = self
            .provider
            .resolve(Some(&options.style), config.preferred_style());
        if style != options.style {
            warn!("Style {:?} is not usable, drawing {style} instead", options.style);
        }
        if !options.has_valid_view() {
            warn!(
                "View out of range (center {:?}, zoom {}); passing it to the SDK unchanged",
                options.center, options.zoom
            );
        }

        let id = self.last_handle.next();
        self.last_handle = id;

        let handle = self.renderer.construct(
            RendererOptions {
                credential,
                container,
                style: &style,
                center: options.center.to_lng_lat(),
                zoom: options.zoom,
            },
            self.events.sink(id),
        )?;

        Ok(OwnedHandle { id, handle })
    }

    fn release_handle(&mut self) {
        if let Some(mut owned) = self.session.handle.take() {
            match owned.handle.remove() {
                Ok(()) => debug!("Removed map {}", owned.id),
                Err(err) => warn!("Failed to remove map {}: {err}", owned.id),
            }
            self.session.started_at = None;
        }

        let dropped = self.events.reset();
        if dropped > 0 {
            debug!("Dropped {dropped} queued events from released maps");
        }
    }

    fn fail(&mut self, err: MapError) {
        self.release_handle();
        warn!("Map failed: {err}");
        self.session.last_error = Some(err);
        self.transition(MapStatus::Failed);
    }

    fn transition(&mut self, next: MapStatus) {
        let previous = self.session.status;
        if previous != next {
            debug!("Map status {previous} -> {next}");
        }
        self.session.status = next;
        debug_assert!(self.session.is_consistent());
    }
}

impl<R: MapRenderer, C: ConfigSource> Drop for MapLifecycleController<R, C> {
    fn drop(&mut self) {
        if self.session.handle.is_some() {
            debug!("Controller dropped with a live map");
            self.cleanup();
        }
    }
}

/// Scoped access to a controller; runs `cleanup` when the scope ends.
pub struct MapScope<'a, R: MapRenderer, C: ConfigSource> {
    controller: &'a mut MapLifecycleController<R, C>,
}

impl<R: MapRenderer, C: ConfigSource> Deref for MapScope<'_, R, C> {
    type Target = MapLifecycleController<R, C>;

    fn deref(&self) -> &Self::Target {
        self.controller
    }
}

impl<R: MapRenderer, C: ConfigSource> DerefMut for MapScope<'_, R, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.controller
    }
}

impl<R: MapRenderer, C: ConfigSource> Drop for MapScope<'_, R, C> {
    fn drop(&mut self) {
        self.controller.cleanup();
    }
}
