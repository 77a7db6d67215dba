//! Lifecycle of the single map instance a page embeds.

pub mod controller;
pub mod state;

pub use controller::{MapLifecycleController, MapScope};
pub use state::{MapSession, MapStatus, OwnedHandle};
