//! Prelude module for common mapframe types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapframe::prelude::*;`

pub use crate::core::{
    builder::MapBuilder,
    config::{ConfigSource, EnvConfig, MapConfig, ReadyPolicy, StaticConfig},
    geo::LatLng,
    map::MapInitOptions,
};

pub use crate::sdk::{
    EventSink, HandleId, HeadlessContainer, HeadlessRenderer, MapEvent, MapHandle, MapRenderer,
    RendererOptions, SdkError,
};

pub use crate::session::{MapLifecycleController, MapScope, MapSession, MapStatus};

pub use crate::style::{
    get_style_info, is_valid_style_url, resolve_style, validate_style, StyleInfo, StyleProvider,
    StyleUrl, StyleValidation, FALLBACK_STYLE_URL,
};

pub use crate::ui::{MapContainer, MapContainerProps, MapView};

#[cfg(feature = "egui")]
pub use crate::ui::MapPanel;

#[cfg(feature = "wasm")]
pub use crate::sdk::web::{WebMapHandle, WebRenderer};

pub use crate::{Error as MapError, Result};
