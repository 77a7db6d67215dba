pub mod builder;
pub mod config;
pub mod constants;
pub mod geo;
pub mod map;

pub use builder::MapBuilder;
pub use config::{ConfigSource, EnvConfig, MapConfig, ReadyPolicy, StaticConfig};
pub use geo::LatLng;
pub use map::MapInitOptions;
