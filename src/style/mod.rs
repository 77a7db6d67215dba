//! Style identifier validation and fallback resolution.
//!
//! The free functions here work on the default `mapbox://styles/...`
//! namespace; build a [`StyleProvider`] for any other scheme.

pub mod provider;
pub mod url;

pub use provider::{StyleProvider, StyleValidation};
pub use url::{StyleInfo, StyleUrl};

pub use crate::core::constants::FALLBACK_STYLE_URL;

pub fn is_valid_style_url(style_url: &str) -> bool {
    StyleProvider::mapbox().is_valid(style_url)
}

pub fn validate_style(style_url: &str) -> StyleValidation {
    StyleProvider::mapbox().validate(style_url)
}

pub fn get_style_info(style_url: &str) -> Option<StyleInfo> {
    StyleProvider::mapbox().style_info(style_url)
}

/// See [`StyleProvider::resolve`].
pub fn resolve_style(preferred: Option<&str>, configured: Option<&str>) -> String {
    StyleProvider::mapbox().resolve(preferred, configured)
}
