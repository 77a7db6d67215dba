use crate::core::{
    constants::{DEFAULT_ZOOM, FALLBACK_STYLE_URL},
    geo::LatLng,
};
use serde::{Deserialize, Serialize};

/// Zoom range accepted by the hosted SDK.
pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 24.0;

/// Options the host hands to the controller when it asks for a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapInitOptions {
    pub center: LatLng,
    pub zoom: f64,
    pub style: String,
}

impl MapInitOptions {
    pub fn new(center: LatLng, zoom: f64, style: impl Into<String>) -> Self {
        Self {
            center,
            zoom,
            style: style.into(),
        }
    }

    pub fn with_center(mut self, center: LatLng) -> Self {
        self.center = center;
        self
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Whether center and zoom are values the SDK will accept as-is.
    pub fn has_valid_view(&self) -> bool {
        self.center.is_valid() && (MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom)
    }
}

impl Default for MapInitOptions {
    fn default() -> Self {
        Self {
            center: LatLng::default(),
            zoom: DEFAULT_ZOOM,
            style: FALLBACK_STYLE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_tokyo() {
        let options = MapInitOptions::default();
        assert_eq!(options.center.to_lng_lat(), [139.7671, 35.6812]);
        assert_eq!(options.zoom, 10.0);
        assert_eq!(options.style, FALLBACK_STYLE_URL);
        assert!(options.has_valid_view());
    }

    #[test]
    fn test_view_range() {
        let options = MapInitOptions::default().with_zoom(30.0);
        assert!(!options.has_valid_view());

        let options = MapInitOptions::default().with_center(LatLng::new(-95.0, 0.0));
        assert!(!options.has_valid_view());
    }
}
