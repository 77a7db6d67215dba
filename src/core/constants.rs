//! Core constants derived from the hosted SDK defaults and the page layout.
//! Keeping them in a single place makes it easier to tweak crate-wide magic values.

use crate::core::geo::LatLng;

/// Scheme of the default style provider.
pub const DEFAULT_STYLE_SCHEME: &str = "mapbox";

/// Owner name reserved for the provider's own (official) styles.
pub const OFFICIAL_STYLE_OWNER: &str = "mapbox";

/// Owner and id of the style used when nothing better is available.
pub const FALLBACK_STYLE_OWNER: &str = "mapbox";
pub const FALLBACK_STYLE_ID: &str = "streets-v12";

/// Full identifier of the fallback style.
pub const FALLBACK_STYLE_URL: &str = "mapbox://styles/mapbox/streets-v12";

/// Path segment between the scheme and the owner.
pub const STYLES_PATH: &str = "styles";

/// Tokyo Station.
pub const DEFAULT_CENTER: LatLng = LatLng::new(35.6812, 139.7671);

pub const DEFAULT_ZOOM: f64 = 10.0;

/// CSS size of the map container.
pub const DEFAULT_WIDTH: &str = "100%";
pub const DEFAULT_HEIGHT: &str = "400px";

/// Environment variables read by [`EnvConfig`](crate::core::config::EnvConfig),
/// before any prefix is applied.
pub const ACCESS_TOKEN_VAR: &str = "MAPBOX_ACCESS_TOKEN";
pub const STYLE_URL_VAR: &str = "MAPBOX_STYLE_URL";

/// Name of the rendering capability probed before constructing a map.
pub const RENDER_CAPABILITY: &str = "WebGL";
