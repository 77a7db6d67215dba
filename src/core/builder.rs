//! Controller builder for fluent API configuration
//!
//! Collects the injected collaborators and lifecycle options before building a
//! [`MapLifecycleController`].

use crate::{
    core::config::{ConfigSource, EnvConfig, MapConfig, ReadyPolicy, StaticConfig},
    sdk::MapRenderer,
    session::MapLifecycleController,
    style::StyleProvider,
    Result,
};

/// Builder for creating and configuring lifecycle controllers
pub struct MapBuilder<R, C = EnvConfig> {
    /// Rendering SDK the maps are constructed through
    renderer: R,
    /// Where credentials come from
    config: C,
    /// When a constructed map counts as ready
    ready_policy: ReadyPolicy,
    /// Style namespace used for validation and fallback
    style_provider: Option<StyleProvider>,
}

impl<R: MapRenderer> MapBuilder<R> {
    /// Create a new builder reading configuration from the environment
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            config: EnvConfig::new(),
            ready_policy: ReadyPolicy::default(),
            style_provider: None,
        }
    }
}

impl<R: MapRenderer, C: ConfigSource> MapBuilder<R, C> {
    /// Use a different configuration collaborator
    pub fn with_config_source<C2: ConfigSource>(self, config: C2) -> MapBuilder<R, C2> {
        MapBuilder {
            renderer: self.renderer,
            config,
            ready_policy: self.ready_policy,
            style_provider: self.style_provider,
        }
    }

    /// Use a fixed configuration
    pub fn with_config(self, config: MapConfig) -> MapBuilder<R, StaticConfig> {
        self.with_config_source(StaticConfig::new(config))
    }

    /// Read configuration from JSON (`{"accessToken": ..., "styleUrl": ...}`)
    pub fn with_json_config(self, json: &str) -> Result<MapBuilder<R, StaticConfig>> {
        Ok(self.with_config_source(StaticConfig::from_json(json)?))
    }

    /// Read `<prefix>MAPBOX_ACCESS_TOKEN` / `<prefix>MAPBOX_STYLE_URL`
    pub fn with_env_prefix(self, prefix: &str) -> MapBuilder<R, EnvConfig> {
        self.with_config_source(EnvConfig::with_prefix(prefix))
    }

    pub fn with_ready_policy(mut self, policy: ReadyPolicy) -> Self {
        self.ready_policy = policy;
        self
    }

    /// Wait for the SDK's `load` event before reporting ready
    pub fn await_load(self) -> Self {
        self.with_ready_policy(ReadyPolicy::AwaitLoad)
    }

    pub fn with_style_provider(mut self, provider: StyleProvider) -> Self {
        self.style_provider = Some(provider);
        self
    }

    /// Build the controller
    pub fn build(self) -> MapLifecycleController<R, C> {
        let controller = MapLifecycleController::new(self.renderer, self.config)
            .with_ready_policy(self.ready_policy);

        match self.style_provider {
            Some(provider) => controller.with_style_provider(provider),
            None => controller,
        }
    }
}
