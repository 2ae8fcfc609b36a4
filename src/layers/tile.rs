use serde::{Deserialize, Serialize};

use crate::{core::geo::TileCoord, MapError, Result};

/// Configuration for one selectable basemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayerConfig {
    /// Stable identifier, also the persisted value
    pub key: String,
    /// Display label
    pub name: String,
    /// Tile URL pattern with `{x}`, `{y}`, `{z}` placeholders
    pub url_template: String,
    /// Zoom ceiling for this provider
    pub max_zoom: u8,
}

impl TileLayerConfig {
    pub fn new(key: &str, name: &str, url_template: &str, max_zoom: u8) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            url_template: url_template.to_string(),
            max_zoom,
        }
    }
}

/// The renderer-facing handle for one basemap.
///
/// Handles are built once per key when the registry initializes and are
/// reused for the application's lifetime, so a malformed URL template
/// fails at startup rather than in the middle of a layer switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    config: TileLayerConfig,
}

impl TileLayer {
    /// Validates the template and builds the handle.
    pub fn new(config: TileLayerConfig) -> Result<Self> {
        for placeholder in ["{x}", "{y}", "{z}"] {
            if !config.url_template.contains(placeholder) {
                return Err(MapError::InvalidTileTemplate {
                    key: config.key.clone(),
                    reason: format!("missing {placeholder} placeholder"),
                });
            }
        }
        Ok(Self { config })
    }

    pub fn key(&self) -> &str {
        &self.config.key
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn max_zoom(&self) -> u8 {
        self.config.max_zoom
    }

    /// Expands the template for a concrete tile.
    pub fn url(&self, coord: TileCoord) -> String {
        self.config
            .url_template
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
            .replace("{z}", &coord.z.to_string())
    }
}
