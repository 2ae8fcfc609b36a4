pub mod registry;
pub mod tile;

pub use registry::LayerRegistry;
pub use tile::{TileLayer, TileLayerConfig};
