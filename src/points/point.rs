use serde::{Deserialize, Serialize};

use crate::{category::Category, core::geo::LatLng, MapError, Result};

/// One point of interest on the map.
///
/// Built-in points come from the static data source; user points are
/// created at runtime from a validated [`PointDraft`] and are append-only:
/// there is no edit or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub user_added: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Point {
    /// The point's coordinate, without validity checks.
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// The coordinate, or `MalformedPoint` when the geometry is unusable.
    ///
    /// The renderer skips such records instead of aborting the pass; one
    /// bad record must not blank the map.
    pub fn geometry(&self) -> Result<LatLng> {
        let position = self.position();
        if position.is_valid() {
            Ok(position)
        } else {
            Err(MapError::MalformedPoint {
                id: self.id,
                reason: format!("unusable coordinates ({}, {})", self.lat, self.lng),
            })
        }
    }
}

/// Input for creating a user point, before id and timestamp are assigned.
///
/// The modal form used to assemble point objects ad hoc; this is the typed
/// replacement. [`PointDraft::validate`] reports the first offending field
/// instead of a generic failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointDraft {
    pub name: String,
    pub category: Category,
    pub lat: f64,
    pub lng: f64,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub working_hours: Option<String>,
    pub services: Vec<String>,
}

impl PointDraft {
    pub fn new(name: impl Into<String>, category: Category, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            category,
            lat,
            lng,
            ..Default::default()
        }
    }

    /// Checks every field, failing with [`MapError::InvalidDraft`] naming
    /// the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MapError::InvalidDraft {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(MapError::InvalidDraft {
                field: "lat",
                reason: format!("{} is not a valid latitude", self.lat),
            });
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(MapError::InvalidDraft {
                field: "lng",
                reason: format!("{} is not a valid longitude", self.lng),
            });
        }
        Ok(())
    }

    /// Turns the draft into a [`Point`] with the given identity.
    pub(crate) fn into_point(self, id: i64, timestamp: Option<String>) -> Point {
        Point {
            id,
            name: self.name.trim().to_string(),
            category: self.category,
            lat: self.lat,
            lng: self.lng,
            description: self.description,
            phone: self.phone,
            address: self.address,
            working_hours: self.working_hours,
            services: self.services,
            user_added: true,
            timestamp,
        }
    }
}
