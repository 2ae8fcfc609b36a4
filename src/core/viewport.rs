use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};

/// The current view of the map: center and zoom.
///
/// Screen-space projection, panning and tile scheduling live in the
/// underlying renderer; this struct only owns the state the engine core
/// must read and restore, in particular across a basemap switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Center of the view in geographical coordinates
    pub center: LatLng,
    /// Current zoom level
    pub zoom: f64,
    /// Minimum allowed zoom level
    pub min_zoom: f64,
    /// Maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self {
            center: Self::clamp_center(center),
            zoom: zoom.clamp(0.0, 19.0),
            min_zoom: 0.0,
            max_zoom: 19.0,
        }
    }

    /// Sets the center, clamped to the world.
    pub fn set_center(&mut self, center: LatLng) {
        self.center = Self::clamp_center(center);
    }

    /// Sets the zoom level, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets center and zoom together.
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.set_center(center);
        self.set_zoom(zoom);
    }

    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Centers the view on `bounds` at the given zoom.
    pub fn focus_bounds(&mut self, bounds: &LatLngBounds, zoom: f64) {
        self.set_view(bounds.center(), zoom);
    }

    fn clamp_center(center: LatLng) -> LatLng {
        LatLng::new(
            LatLng::clamp_lat(center.lat),
            center.lng.clamp(-180.0, 180.0),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_creation() {
        let viewport = Viewport::new(LatLng::new(62.027833, 129.732178), 5.0);
        assert_eq!(viewport.zoom, 5.0);
        assert_eq!(viewport.center.lat, 62.027833);
    }

    #[test]
    fn test_zoom_limits() {
        let mut viewport = Viewport::default();
        viewport.set_zoom_limits(2.0, 17.0);

        viewport.set_zoom(1.0);
        assert_eq!(viewport.zoom, 2.0);

        viewport.set_zoom(20.0);
        assert_eq!(viewport.zoom, 17.0);
    }

    #[test]
    fn test_center_is_clamped() {
        let mut viewport = Viewport::default();
        viewport.set_center(LatLng::new(89.0, 200.0));
        assert!(viewport.center.lat < 86.0);
        assert_eq!(viewport.center.lng, 180.0);
    }

    #[test]
    fn test_focus_bounds() {
        let mut viewport = Viewport::default();
        let mut bounds = LatLngBounds::from_point(LatLng::new(62.0, 129.0));
        bounds.extend(&LatLng::new(63.0, 131.0));

        viewport.focus_bounds(&bounds, 9.0);
        assert!((viewport.center.lat - 62.5).abs() < 1e-9);
        assert!((viewport.center.lng - 130.0).abs() < 1e-9);
        assert_eq!(viewport.zoom, 9.0);
    }
}
