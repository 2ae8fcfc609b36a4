use crate::{core::geo::LatLng, MapError, Result};

/// A one-shot position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub coord: LatLng,
    /// Horizontal accuracy in meters, when the platform reports one.
    pub accuracy: Option<f64>,
}

/// Optional "where am I" capability.
///
/// May be denied or entirely absent; callers swallow failures (log only)
/// and must never let them affect markers or layers.
pub trait GeolocationProvider: Send + Sync {
    fn current_position(&self) -> Result<GeoPosition>;
}

/// Provider that always reports the same position. Used by tests and by
/// desktop builds configured with a depot location.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub LatLng);

impl GeolocationProvider for FixedLocation {
    fn current_position(&self) -> Result<GeoPosition> {
        Ok(GeoPosition {
            coord: self.0,
            accuracy: None,
        })
    }
}

/// Platform without geolocation support.
#[derive(Debug, Clone, Copy)]
pub struct Unavailable;

impl GeolocationProvider for Unavailable {
    fn current_position(&self) -> Result<GeoPosition> {
        Err(MapError::Geolocation("not supported".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_location() {
        let provider = FixedLocation(LatLng::new(62.0, 129.7));
        let position = provider.current_position().unwrap();
        assert_eq!(position.coord.lat, 62.0);
    }

    #[test]
    fn test_unavailable_fails_softly() {
        assert!(matches!(
            Unavailable.current_position(),
            Err(MapError::Geolocation(_))
        ));
    }
}
