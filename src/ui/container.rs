use crate::{
    core::{
        config::{ConfigSource, EnvConfig},
        map::MapInitOptions,
    },
    sdk::{HandleId, MapHandle, MapRenderer},
    session::{MapLifecycleController, MapStatus},
    ui::props::MapContainerProps,
};
use log::{debug, warn};

pub const ERROR_TITLE: &str = "Failed to load the map";
pub const LOADING_TEXT: &str = "Loading map...";

/// Which of the three visible states the container shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapView {
    Error { message: String },
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavigationState {
    Absent,
    Added(HandleId),
    /// Adding failed; not retried for this map.
    Failed(HandleId),
}

/// The page-level map component.
///
/// Binds [`MapContainerProps`] to a controller: the map is (re)initialized
/// whenever the mount point is set or center, zoom or style change. Once the
/// controller has failed the component keeps showing the error until
/// [`retry`](Self::retry) is called.
///
/// While the map is ready and `show_navigation_control` is set, the component
/// keeps a navigation control on it. Control failures are logged only.
pub struct MapContainer<R: MapRenderer, C: ConfigSource = EnvConfig> {
    props: MapContainerProps,
    controller: MapLifecycleController<R, C>,
    container: Option<R::Container>,
    applied: Option<MapInitOptions>,
    navigation: NavigationState,
}

impl<R: MapRenderer, C: ConfigSource> MapContainer<R, C> {
    pub fn new(controller: MapLifecycleController<R, C>, props: MapContainerProps) -> Self {
        Self {
            props,
            controller,
            container: None,
            applied: None,
            navigation: NavigationState::Absent,
        }
    }

    pub fn props(&self) -> &MapContainerProps {
        &self.props
    }

    pub fn controller(&self) -> &MapLifecycleController<R, C> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut MapLifecycleController<R, C> {
        &mut self.controller
    }

    pub fn is_mounted(&self) -> bool {
        self.container.is_some()
    }

    pub fn mount(&mut self, container: R::Container) -> MapStatus {
        self.detach_navigation();
        self.container = Some(container);
        self.applied = None;
        self.sync()
    }

    pub fn set_props(&mut self, props: MapContainerProps) -> MapStatus {
        self.props = props;
        if !self.props.show_navigation_control {
            self.detach_navigation();
        }
        self.sync()
    }

    /// Clears a failure and initializes again with the current props.
    pub fn retry(&mut self) -> MapStatus {
        self.detach_navigation();
        self.controller.cleanup();
        self.applied = None;
        self.sync()
    }

    pub fn poll_events(&mut self) -> usize {
        let applied = self.controller.poll_events();
        self.attach_navigation();
        applied
    }

    pub fn unmount(&mut self) {
        self.detach_navigation();
        self.controller.cleanup();
        self.container = None;
        self.applied = None;
    }

    pub fn view(&self) -> MapView {
        match self.controller.status() {
            MapStatus::Failed => MapView::Error {
                message: self
                    .controller
                    .last_error()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "unknown error".to_string()),
            },
            MapStatus::Ready => MapView::Ready,
            MapStatus::Idle | MapStatus::Initializing => MapView::Loading,
        }
    }

    /// Markup for the current view. The mount element is present unless the
    /// view is an error.
    pub fn render_html(&self) -> String {
        let size = format!(
            "width: {}; height: {};",
            escape(&self.props.width),
            escape(&self.props.height)
        );

        match self.view() {
            MapView::Error { message } => format!(
                r#"<div class="mapbox-error-container" style="{size}"><div class="mapbox-error" role="alert"><h3>{ERROR_TITLE}</h3><p>{}</p></div></div>"#,
                escape(&message)
            ),
            view => {
                let loading = match view {
                    MapView::Loading => format!(r#"<div class="mapbox-loading">{LOADING_TEXT}</div>"#),
                    _ => String::new(),
                };
                let class = format!("mapbox-container {}", escape(&self.props.class_name));
                format!(
                    r#"<div class="mapbox-wrapper" style="position: relative; {size}">{loading}<div data-testid="mapbox-container" class="{}" style="{size}"></div></div>"#,
                    class.trim_end()
                )
            }
        }
    }

    fn sync(&mut self) -> MapStatus {
        self.reinitialize_if_changed();
        self.attach_navigation();
        self.controller.status()
    }

    fn reinitialize_if_changed(&mut self) {
        if self.container.is_none() || self.controller.status() == MapStatus::Failed {
            return;
        }

        let desired = self.props.init_options();
        if self.applied.as_ref() == Some(&desired) {
            return;
        }

        self.detach_navigation();
        if let Some(container) = self.container.as_ref() {
            debug!("Map options changed, initializing");
            self.controller.initialize(container, &desired);
        }
        self.applied = Some(desired);
    }

    fn attach_navigation(&mut self) {
        if !self.props.show_navigation_control || !self.controller.is_ready() {
            return;
        }
        let Some(id) = self.controller.handle_id() else {
            return;
        };
        if matches!(
            self.navigation,
            NavigationState::Added(current) | NavigationState::Failed(current) if current == id
        ) {
            return;
        }
        let Some(handle) = self.controller.handle_mut() else {
            return;
        };

        self.navigation = match handle.add_navigation_control() {
            Ok(()) => {
                debug!("Added navigation control to map {id}");
                NavigationState::Added(id)
            }
            Err(err) => {
                warn!("Failed to add navigation control to map {id}: {err}");
                NavigationState::Failed(id)
            }
        };
    }

    fn detach_navigation(&mut self) {
        let NavigationState::Added(id) =
            std::mem::replace(&mut self.navigation, NavigationState::Absent)
        else {
            return;
        };
        if self.controller.handle_id() != Some(id) {
            return;
        }
        if let Some(handle) = self.controller.handle_mut() {
            match handle.remove_navigation_control() {
                Ok(()) => debug!("Removed navigation control from map {id}"),
                Err(err) => warn!("Failed to remove navigation control from map {id}: {err}"),
            }
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
