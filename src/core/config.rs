//! Application configuration and persisted-storage contracts
//!
//! The storage key names and the default basemap are bit-exact contracts:
//! an installed copy of the app keeps its saved state across upgrades only
//! as long as these strings never change.

use crate::core::geo::LatLng;

/// Persisted key for the selected basemap layer.
pub const STORAGE_KEY_LAYER: &str = "trax_yakutia_map";
/// Persisted key for points the driver added themselves.
pub const STORAGE_KEY_USER_POINTS: &str = "trax_yakutia_user_points";
/// Persisted key for the favorite point id list.
pub const STORAGE_KEY_SAVED_POINTS: &str = "trax_yakutia_saved_points";

/// Basemap restored when no prior selection is persisted.
pub const DEFAULT_LAYER: &str = "yandex_map";

/// Top-level application settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub default_center: LatLng,
    pub default_zoom: f64,
    pub max_zoom: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "ТраксЯкутия".to_string(),
            version: "1.0.0".to_string(),
            // Geographic center of Yakutia
            default_center: LatLng::new(62.027833, 129.732178),
            default_zoom: 5.0,
            max_zoom: 19,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.default_zoom, 5.0);
        assert_eq!(config.max_zoom, 19);
        assert!(config.default_center.is_valid());
    }

    #[test]
    fn test_storage_keys_are_stable() {
        // These strings are the on-disk contract with already-installed apps.
        assert_eq!(STORAGE_KEY_LAYER, "trax_yakutia_map");
        assert_eq!(STORAGE_KEY_USER_POINTS, "trax_yakutia_user_points");
        assert_eq!(STORAGE_KEY_SAVED_POINTS, "trax_yakutia_saved_points");
        assert_eq!(DEFAULT_LAYER, "yandex_map");
    }
}
