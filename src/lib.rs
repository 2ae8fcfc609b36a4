//! # traxmap
//!
//! The map engine core behind a road atlas for truck drivers in Yakutia.
//!
//! The crate keeps the points of interest (fuel, parking, ferries, danger
//! zones, ...) consistent with a set of category filters on a tile basemap,
//! lets the basemap be switched between providers without moving the view,
//! and persists the driver's choices (basemap, own points, favorites)
//! through a pluggable key-value store.

pub mod category;
pub mod core;
pub mod layers;
pub mod markers;
pub mod platform;
pub mod points;
pub mod prelude;
pub mod route;
pub mod search;

// Re-export public API
pub use crate::core::{
    config::AppConfig,
    geo::{LatLng, LatLngBounds, TileCoord},
    map::Map,
    viewport::Viewport,
};

pub use crate::category::{Category, CategoryMeta};

pub use crate::layers::{registry::LayerRegistry, tile::TileLayer};

pub use crate::markers::{icon::MarkerIcon, popup::PopupContent, renderer::MarkerRenderer};

pub use crate::points::{filter::FilterSet, point::Point, point::PointDraft, store::PointStore};

pub use crate::platform::{
    geolocate::GeolocationProvider, notify::NotificationSink, storage::KeyValueStore, Platform,
};

pub use crate::search::{search_points, SearchHit};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
///
/// Nothing here is allowed to take the application down: every variant has
/// a documented local recovery at the point where it is handled.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("unknown basemap layer: {0}")]
    UnknownLayer(String),

    #[error("malformed point {id}: {reason}")]
    MalformedPoint { id: i64, reason: String },

    #[error("point data source unavailable")]
    DataUnavailable,

    #[error("geolocation failed: {0}")]
    Geolocation(String),

    #[error("persistence failed: {0}")]
    Persistence(String),

    #[error("invalid tile URL template for layer {key}: {reason}")]
    InvalidTileTemplate { key: String, reason: String },

    #[error("invalid point field {field}: {reason}")]
    InvalidDraft { field: &'static str, reason: String },

    #[error("could not resolve location: {0}")]
    Geocode(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;
