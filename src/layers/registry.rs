use once_cell::sync::Lazy;

use crate::{
    core::config::{DEFAULT_LAYER, STORAGE_KEY_LAYER},
    core::viewport::Viewport,
    layers::tile::{TileLayer, TileLayerConfig},
    platform::{notify::NotificationSink, storage::KeyValueStore},
    prelude::HashMap,
    MapError, Result,
};

/// The built-in basemap catalog: Russian and neutral providers only.
static BUILTIN_CONFIGS: Lazy<Vec<TileLayerConfig>> = Lazy::new(|| {
    vec![
        TileLayerConfig::new(
            "yandex_map",
            "Яндекс.Карты",
            "https://core-renderer-tiles.maps.yandex.net/tiles?l=map&x={x}&y={y}&z={z}&scale=1&lang=ru_RU",
            19,
        ),
        TileLayerConfig::new(
            "yandex_satellite",
            "Яндекс.Спутник",
            "https://core-sat.maps.yandex.net/tiles?l=sat&x={x}&y={y}&z={z}&scale=1&lang=ru_RU",
            19,
        ),
        TileLayerConfig::new(
            "yandex_hybrid",
            "Яндекс.Гибрид",
            "https://core-renderer-tiles.maps.yandex.net/tiles?l=skl&x={x}&y={y}&z={z}&scale=1&lang=ru_RU",
            19,
        ),
        TileLayerConfig::new(
            "rosreestr",
            "Росреестр",
            "https://tile.rosreestr.ru/tiles/{z}/{x}/{y}.png",
            17,
        ),
        TileLayerConfig::new(
            "esri_world",
            "Esri Мир",
            "https://server.arcgisonline.com/ArcGIS/rest/services/World_Street_Map/MapServer/tile/{z}/{y}/{x}",
            19,
        ),
        TileLayerConfig::new(
            "esri_satellite",
            "Esri Спутник",
            "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
            19,
        ),
    ]
});

/// All known basemaps, which one is current, and the persisted selection.
///
/// Every handle is constructed when the registry initializes, so switching
/// is only attach/detach and a bad URL template cannot surface mid-switch.
pub struct LayerRegistry {
    handles: HashMap<String, TileLayer>,
    /// Registration order, for the layer selector
    order: Vec<String>,
    current: String,
}

impl LayerRegistry {
    /// Builds the registry over the built-in catalog and restores the
    /// persisted selection, or the default when none is stored.
    pub fn initialize(storage: &dyn KeyValueStore) -> Result<Self> {
        Self::with_configs(BUILTIN_CONFIGS.clone(), storage)
    }

    /// Same as [`LayerRegistry::initialize`] over a custom catalog.
    pub fn with_configs(
        configs: Vec<TileLayerConfig>,
        storage: &dyn KeyValueStore,
    ) -> Result<Self> {
        let mut handles = HashMap::default();
        let mut order = Vec::with_capacity(configs.len());
        for config in configs {
            let key = config.key.clone();
            handles.insert(key.clone(), TileLayer::new(config)?);
            order.push(key);
        }

        let saved = match storage.get(STORAGE_KEY_LAYER) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("could not read saved basemap, using default: {err}");
                None
            }
        };
        let current = match saved {
            Some(key) if handles.contains_key(&key) => key,
            Some(key) => {
                log::warn!("saved basemap {key} is not registered, using default");
                DEFAULT_LAYER.to_string()
            }
            None => DEFAULT_LAYER.to_string(),
        };

        Ok(Self {
            handles,
            order,
            current,
        })
    }

    /// Switches the current basemap.
    ///
    /// The viewport is read before the old handle is detached and restored
    /// after the new one is attached; the renderer binding relies on this
    /// order, and switching must never move or rescale the view.
    pub fn switch_layer(
        &mut self,
        key: &str,
        viewport: &mut Viewport,
        storage: &dyn KeyValueStore,
        notifier: &dyn NotificationSink,
    ) -> Result<()> {
        if !self.handles.contains_key(key) {
            return Err(MapError::UnknownLayer(key.to_string()));
        }

        let center = viewport.center;
        let zoom = viewport.zoom;

        log::debug!("basemap switch {} -> {}", self.current, key);
        self.current = key.to_string();
        viewport.set_view(center, zoom);

        if let Err(err) = storage.set(STORAGE_KEY_LAYER, key) {
            log::warn!("could not persist basemap selection: {err}");
        }

        let name = self.current().name().to_string();
        notifier.show(&format!("Карта: {name}"));
        Ok(())
    }

    pub fn current(&self) -> &TileLayer {
        &self.handles[&self.current]
    }

    pub fn current_key(&self) -> &str {
        &self.current
    }

    pub fn get(&self, key: &str) -> Option<&TileLayer> {
        self.handles.get(key)
    }

    pub fn is_registered(&self, key: &str) -> bool {
        self.handles.contains_key(key)
    }

    /// `(key, name)` pairs in registration order, for the selector UI.
    pub fn catalog(&self) -> Vec<(&str, &str)> {
        self.order
            .iter()
            .filter_map(|key| self.handles.get(key))
            .map(|layer| (layer.key(), layer.name()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use crate::platform::{notify::Notifier, storage::MemoryStore};

    #[test]
    fn test_initialize_defaults_to_yandex_map() {
        let storage = MemoryStore::new();
        let registry = LayerRegistry::initialize(&storage).unwrap();
        assert_eq!(registry.current_key(), "yandex_map");
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_restore_persisted_selection() {
        let storage = MemoryStore::new();
        storage.set(STORAGE_KEY_LAYER, "rosreestr").unwrap();

        let registry = LayerRegistry::initialize(&storage).unwrap();
        assert_eq!(registry.current_key(), "rosreestr");
    }

    #[test]
    fn test_restore_ignores_unregistered_selection() {
        let storage = MemoryStore::new();
        storage.set(STORAGE_KEY_LAYER, "google_maps").unwrap();

        let registry = LayerRegistry::initialize(&storage).unwrap();
        assert_eq!(registry.current_key(), "yandex_map");
    }

    #[test]
    fn test_switch_preserves_viewport() {
        let storage = MemoryStore::new();
        let notifier = Notifier::new();
        let mut registry = LayerRegistry::initialize(&storage).unwrap();
        let mut viewport = Viewport::new(LatLng::new(63.5, 120.25), 8.0);

        registry
            .switch_layer("esri_world", &mut viewport, &storage, &notifier)
            .unwrap();

        assert_eq!(viewport.center, LatLng::new(63.5, 120.25));
        assert_eq!(viewport.zoom, 8.0);
        assert_eq!(registry.current_key(), "esri_world");
    }

    #[test]
    fn test_switch_persists_and_notifies() {
        let storage = MemoryStore::new();
        let notifier = Notifier::new();
        let mut registry = LayerRegistry::initialize(&storage).unwrap();
        let mut viewport = Viewport::default();

        registry
            .switch_layer("yandex_satellite", &mut viewport, &storage, &notifier)
            .unwrap();

        assert_eq!(
            storage.get(STORAGE_KEY_LAYER).unwrap().as_deref(),
            Some("yandex_satellite")
        );
        assert_eq!(
            notifier.current().unwrap().message,
            "Карта: Яндекс.Спутник"
        );
    }

    #[test]
    fn test_switch_round_trip_through_storage() {
        let storage = MemoryStore::new();
        let notifier = Notifier::new();
        let mut viewport = Viewport::default();

        let mut registry = LayerRegistry::initialize(&storage).unwrap();
        registry
            .switch_layer("yandex_hybrid", &mut viewport, &storage, &notifier)
            .unwrap();
        drop(registry);

        let restored = LayerRegistry::initialize(&storage).unwrap();
        assert_eq!(restored.current_key(), "yandex_hybrid");
    }

    #[test]
    fn test_unknown_layer_leaves_current_unchanged() {
        let storage = MemoryStore::new();
        let notifier = Notifier::new();
        let mut registry = LayerRegistry::initialize(&storage).unwrap();
        let mut viewport = Viewport::default();

        let result = registry.switch_layer("does-not-exist", &mut viewport, &storage, &notifier);
        assert!(matches!(result, Err(MapError::UnknownLayer(_))));
        assert_eq!(registry.current_key(), "yandex_map");
    }

    #[test]
    fn test_catalog_keeps_registration_order() {
        let storage = MemoryStore::new();
        let registry = LayerRegistry::initialize(&storage).unwrap();
        let keys: Vec<&str> = registry.catalog().iter().map(|(key, _)| *key).collect();
        assert_eq!(
            keys,
            vec![
                "yandex_map",
                "yandex_satellite",
                "yandex_hybrid",
                "rosreestr",
                "esri_world",
                "esri_satellite"
            ]
        );
    }
}
