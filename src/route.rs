//! Waypoint plumbing for the routing glue
//!
//! There is no route computation and no geocoding backend here: a plan is
//! two waypoints, resolution is local (coordinate literals and the point
//! store), and the actual navigation is delegated to an external service
//! through a deep link.

use crate::{
    core::geo::{LatLng, LatLngBounds},
    points::point::Point,
    MapError, Result,
};

/// Extra view margin around a focused route, as a ratio of its span.
const ROUTE_VIEW_PADDING: f64 = 0.1;

/// A from/to pair for the routing control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutePlan {
    pub from: LatLng,
    pub to: LatLng,
}

impl RoutePlan {
    pub fn new(from: LatLng, to: LatLng) -> Self {
        Self { from, to }
    }

    pub fn waypoints(&self) -> [LatLng; 2] {
        [self.from, self.to]
    }

    /// Padded bounds for focusing the viewport on the whole route.
    pub fn view_bounds(&self) -> LatLngBounds {
        let mut bounds = LatLngBounds::from_point(self.from);
        bounds.extend(&self.to);
        bounds.pad(ROUTE_VIEW_PADDING)
    }
}

/// Resolves free text into a coordinate, locally.
///
/// Tries a `"lat, lng"` literal first, then a case-insensitive match
/// against point names and addresses. Anything else fails with
/// [`MapError::Geocode`]; there is no guessing fallback.
pub fn geocode(query: &str, points: &[Point]) -> Result<LatLng> {
    let query = query.trim();
    if let Some(coord) = LatLng::parse(query) {
        return Ok(coord);
    }

    let term = query.to_lowercase();
    if !term.is_empty() {
        let by_name = points.iter().find(|p| {
            p.name.to_lowercase().contains(&term)
                || p.address
                    .as_deref()
                    .is_some_and(|a| a.to_lowercase().contains(&term))
        });
        if let Some(point) = by_name {
            return Ok(point.position());
        }
    }

    Err(MapError::Geocode(query.to_string()))
}

/// The external navigator deep link for a from/to pair.
pub fn route_url(from: &LatLng, to: &LatLng) -> String {
    format!(
        "https://yandex.ru/maps/?rtext={},{}~{},{}&rtt=auto",
        from.lat, from.lng, to.lat, to.lng
    )
}

/// Display name for a destination: the matching point's name when one
/// sits at the coordinate (±1e-4°), otherwise the bare coordinate.
pub fn destination_label(points: &[Point], lat: f64, lng: f64) -> String {
    points
        .iter()
        .find(|p| (p.lat - lat).abs() < 1e-4 && (p.lng - lng).abs() < 1e-4)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| LatLng::new(lat, lng).to_string())
}
