//! Prelude module for common traxmap types and traits
//!
//! Re-exports the most commonly used types, traits, and functions for easy
//! importing with `use traxmap::prelude::*;`

pub use crate::core::{
    config::AppConfig,
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{Map, MapState},
    viewport::Viewport,
};

pub use crate::category::{Category, CategoryMeta};

pub use crate::points::{
    filter::FilterSet,
    point::{Point, PointDraft},
    store::PointStore,
};

pub use crate::layers::{
    registry::LayerRegistry,
    tile::{TileLayer, TileLayerConfig},
};

pub use crate::markers::{
    icon::MarkerIcon,
    popup::{PopupAction, PopupContent},
    renderer::{Marker, MarkerRenderer},
};

pub use crate::platform::{
    geolocate::{GeoPosition, GeolocationProvider},
    notify::{NotificationSink, Notifier},
    storage::{KeyValueStore, MemoryStore},
    Platform,
};

pub use crate::route::{destination_label, geocode, route_url, RoutePlan};
pub use crate::search::{search_points, SearchHit};

pub use crate::{Error as MapError, Result};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
