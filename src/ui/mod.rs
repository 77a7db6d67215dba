pub mod container;
pub mod props;

#[cfg(feature = "egui")]
pub mod widget;

pub use container::{MapContainer, MapView};
pub use props::MapContainerProps;

#[cfg(feature = "egui")]
pub use widget::MapPanel;
