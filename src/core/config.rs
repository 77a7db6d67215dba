//! Configuration for the map lifecycle
//!
//! Credentials and the preferred style come from a [`ConfigSource`], read at
//! the moment a map is initialized. Two sources ship with the crate: the
//! process environment ([`EnvConfig`]) and a fixed in-memory value
//! ([`StaticConfig`]), which can also be loaded from JSON.

use crate::{
    core::constants::{ACCESS_TOKEN_VAR, STYLE_URL_VAR},
    style::StyleProvider,
    MapError, Result,
};
use serde::{Deserialize, Serialize};

/// Values supplied by the configuration collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    pub access_token: Option<String>,
    pub style_url: Option<String>,
}

impl MapConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            style_url: None,
        }
    }

    pub fn with_style_url(mut self, style_url: impl Into<String>) -> Self {
        self.style_url = Some(style_url.into());
        self
    }

    /// Returns the trimmed access token, or a configuration error when it is
    /// missing or blank.
    pub fn credential(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                MapError::Configuration(format!(
                    "access credential is required. Please set {ACCESS_TOKEN_VAR} in your environment"
                ))
            })
    }

    /// Configured style, with blank values treated as absent.
    pub fn preferred_style(&self) -> Option<&str> {
        self.style_url
            .as_deref()
            .filter(|style| !style.trim().is_empty())
    }

    /// The configured style if it is well-formed, otherwise the provider fallback.
    pub fn resolved_style(&self, provider: &StyleProvider) -> String {
        provider.resolve(None, self.preferred_style())
    }
}

/// Supplies [`MapConfig`] on demand.
pub trait ConfigSource {
    fn load(&self) -> MapConfig;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn load(&self) -> MapConfig {
        (**self).load()
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Box<T> {
    fn load(&self) -> MapConfig {
        (**self).load()
    }
}

/// Reads `MAPBOX_ACCESS_TOKEN` and `MAPBOX_STYLE_URL` from the process
/// environment every time it is loaded.
///
/// A prefix can be prepended to both names, e.g. `VITE_` for a bundler-style
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    prefix: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn access_token_var(&self) -> String {
        format!("{}{}", self.prefix, ACCESS_TOKEN_VAR)
    }

    pub fn style_url_var(&self) -> String {
        format!("{}{}", self.prefix, STYLE_URL_VAR)
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> MapConfig {
        MapConfig {
            access_token: std::env::var(self.access_token_var()).ok(),
            style_url: std::env::var(self.style_url_var()).ok(),
        }
    }
}

/// A fixed configuration, mostly useful for embedding and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticConfig(MapConfig);

impl StaticConfig {
    pub fn new(config: MapConfig) -> Self {
        Self(config)
    }

    /// Parses `{"accessToken": "...", "styleUrl": "..."}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self(serde_json::from_str(json)?))
    }

    pub fn config(&self) -> &MapConfig {
        &self.0
    }
}

impl From<MapConfig> for StaticConfig {
    fn from(config: MapConfig) -> Self {
        Self(config)
    }
}

impl ConfigSource for StaticConfig {
    fn load(&self) -> MapConfig {
        self.0.clone()
    }
}

/// When a freshly constructed map counts as ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyPolicy {
    /// Ready as soon as the SDK hands back a handle.
    #[default]
    Immediate,
    /// Stay initializing until the SDK reports its `load` event.
    AwaitLoad,
}
