//! Boundary contracts to the hosting platform
//!
//! The engine core never talks to a browser or an OS directly; it goes
//! through these traits. The in-memory implementations back the demo and
//! the test suite.

pub mod geolocate;
pub mod notify;
pub mod storage;

use std::sync::Arc;

pub use geolocate::{FixedLocation, GeoPosition, GeolocationProvider, Unavailable};
pub use notify::{NotificationSink, Notifier};
pub use storage::{KeyValueStore, MemoryStore};

/// The bundle of platform services handed to the map controller at
/// construction.
#[derive(Clone)]
pub struct Platform {
    pub storage: Arc<dyn KeyValueStore>,
    pub notifier: Arc<dyn NotificationSink>,
    pub geolocation: Arc<dyn GeolocationProvider>,
}

impl Platform {
    /// Fully in-memory platform: volatile storage, inspectable notifier,
    /// no geolocation.
    pub fn in_memory() -> Self {
        Self {
            storage: Arc::new(MemoryStore::new()),
            notifier: Arc::new(Notifier::new()),
            geolocation: Arc::new(Unavailable),
        }
    }
}
