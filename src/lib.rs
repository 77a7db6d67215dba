//! # mapframe
//!
//! Embeds a map drawn by a hosted rendering SDK inside a page.
//!
//! The crate owns the parts around the SDK that carry actual rules:
//! validating and resolving style identifiers with fallback, and a lifecycle
//! controller that creates, tracks and tears down the single map instance a
//! page holds. The SDK itself is injected behind the [`sdk::MapRenderer`]
//! trait.

pub mod core;
pub mod prelude;
pub mod sdk;
pub mod session;
pub mod style;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::MapBuilder,
    config::{ConfigSource, EnvConfig, MapConfig, ReadyPolicy, StaticConfig},
    geo::LatLng,
    map::MapInitOptions,
};

pub use sdk::{HandleId, MapEvent, MapHandle, MapRenderer, SdkError};

pub use session::{MapLifecycleController, MapScope, MapStatus};

pub use style::{
    get_style_info, is_valid_style_url, resolve_style, validate_style, StyleInfo, StyleProvider,
    StyleUrl, StyleValidation, FALLBACK_STYLE_URL,
};

pub use ui::{MapContainer, MapContainerProps, MapView};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Everything that can put a map into the failed state.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Capability error: {0}")]
    Capability(String),

    #[error("{0}")]
    Validation(String),

    #[error("Map construction failed: {0}")]
    Construction(#[from] SdkError),

    #[error("Map error: {0}")]
    Runtime(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Sets up `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
/// Calling it more than once is harmless.
#[cfg(feature = "debug")]
pub fn init_logger() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_ok() {
        log::debug!("Logger initialized");
    }
}
