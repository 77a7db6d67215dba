use crate::core::{
    constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_ZOOM, FALLBACK_STYLE_URL},
    geo::LatLng,
    map::MapInitOptions,
};
use serde::{Deserialize, Serialize};

/// What the page passes to a [`MapContainer`](crate::ui::MapContainer).
///
/// ```rust
/// use mapframe::ui::MapContainerProps;
///
/// let props = MapContainerProps::new()
///     .center(35.6812, 139.7671)
///     .zoom(12.0)
///     .size("100%", "600px")
///     .class_name("rounded");
/// assert_eq!(props.height, "600px");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapContainerProps {
    /// CSS width of the container
    pub width: String,
    /// CSS height of the container
    pub height: String,
    pub center: LatLng,
    pub zoom: f64,
    pub style_url: String,
    /// Extra classes on the mount element
    pub class_name: String,
    /// Zoom and rotation buttons, added once the map is ready
    pub show_navigation_control: bool,
}

impl MapContainerProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(mut self, lat: f64, lng: f64) -> Self {
        self.center = LatLng::new(lat, lng);
        self
    }

    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    pub fn style_url(mut self, style_url: impl Into<String>) -> Self {
        self.style_url = style_url.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn navigation_control(mut self, show: bool) -> Self {
        self.show_navigation_control = show;
        self
    }

    /// The subset of props the map itself depends on.
    pub fn init_options(&self) -> MapInitOptions {
        MapInitOptions::new(self.center, self.zoom, self.style_url.clone())
    }
}

impl Default for MapContainerProps {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
            center: LatLng::default(),
            zoom: DEFAULT_ZOOM,
            style_url: FALLBACK_STYLE_URL.to_string(),
            class_name: String::new(),
            show_navigation_control: true,
        }
    }
}
