use crate::{
    core::{config::AppConfig, geo::LatLng, viewport::Viewport},
    layers::registry::LayerRegistry,
    markers::renderer::MarkerRenderer,
    platform::{geolocate::GeoPosition, Platform},
    points::{filter::FilterSet, point::PointDraft, store::PointStore},
    route::{self, RoutePlan},
    search::{search_points, SearchHit},
    category::Category,
    Result,
};

/// Zoom used when jumping to a single point from search or a result list.
const FOCUS_ZOOM: f64 = 15.0;

/// Top-level lifecycle. After `Ready` all behavior is stateless event
/// handling over the owned components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapState {
    Uninitialized,
    Ready,
}

/// The map controller: owns the single viewport and wires the filter set,
/// layer registry, marker renderer and point store together.
///
/// Nothing else holds map state; components that need it receive explicit
/// references from here. All external event glue (filter panel, layer
/// selector, popup buttons) calls into the public methods below.
pub struct Map {
    config: AppConfig,
    viewport: Viewport,
    layers: LayerRegistry,
    renderer: MarkerRenderer,
    store: PointStore,
    filters: FilterSet,
    platform: Platform,
    state: MapState,
}

impl Map {
    /// Runs the startup sequence, in strict order: viewport at the default
    /// view, layer registry with the persisted or default basemap, point
    /// store (demo fallback when `point_data` is absent or unreadable),
    /// initial marker render, then a one-shot geolocation attempt whose
    /// failure cannot affect anything before it.
    ///
    /// Control wiring lives in the embedding shell and happens after this
    /// returns.
    pub fn startup(
        config: AppConfig,
        point_data: Option<&str>,
        platform: Platform,
    ) -> Result<Self> {
        let mut viewport = Viewport::new(config.default_center, config.default_zoom);
        viewport.set_zoom_limits(0.0, config.max_zoom as f64);

        let layers = LayerRegistry::initialize(platform.storage.as_ref())?;
        let store = PointStore::load(point_data, platform.storage.as_ref());

        let mut map = Self {
            config,
            viewport,
            layers,
            renderer: MarkerRenderer::new(),
            store,
            filters: FilterSet::all(),
            platform,
            state: MapState::Uninitialized,
        };
        map.refresh_markers();
        map.state = MapState::Ready;

        map.locate();

        Ok(map)
    }

    /// Tears down and rebuilds all markers against the current filters.
    /// Returns the visible marker count.
    pub fn refresh_markers(&mut self) -> usize {
        self.renderer.render(self.store.points(), &self.filters)
    }

    /// Filter panel "apply": replaces the active set and re-renders.
    pub fn apply_filters(&mut self, categories: impl IntoIterator<Item = Category>) -> usize {
        self.filters.set_active(categories);
        let count = self.refresh_markers();
        self.platform.notifier.show("Фильтры применены");
        count
    }

    /// Layer selector change. An unknown key aborts the switch, leaves
    /// the current basemap untouched and is reported as a diagnostic only.
    pub fn select_layer(&mut self, key: &str) {
        if let Err(err) = self.layers.switch_layer(
            key,
            &mut self.viewport,
            self.platform.storage.as_ref(),
            self.platform.notifier.as_ref(),
        ) {
            log::error!("layer switch rejected: {err}");
        }
    }

    /// One-shot geolocation request; purely an enhancement.
    pub fn locate(&mut self) {
        let result = self.platform.geolocation.current_position();
        self.on_position(result);
    }

    /// Geolocation callback, possibly stale. Notify or log only; markers
    /// and layers are never touched from here.
    pub fn on_position(&mut self, result: Result<GeoPosition>) {
        match result {
            Ok(_) => self.platform.notifier.show("Ваше местоположение определено"),
            Err(err) => log::warn!("geolocation unavailable: {err}"),
        }
    }

    /// Centers the view on a point, at popup zoom when its marker is
    /// currently rendered.
    pub fn focus_on_point(&mut self, id: i64) {
        let Some(point) = self.store.get(id) else {
            log::warn!("focus requested for unknown point {id}");
            return;
        };
        let position = match point.geometry() {
            Ok(position) => position,
            Err(err) => {
                log::warn!("cannot focus: {err}");
                return;
            }
        };
        let name = point.name.clone();

        self.viewport.set_view(position, FOCUS_ZOOM);
        if self.renderer.get(id).is_none() {
            // Filtered out right now, so there is no popup to open
            self.platform.notifier.show(&format!("Точка: {name}"));
        }
    }

    /// Creates a user point from a validated draft, persists it, and
    /// re-renders so its marker appears.
    pub fn add_user_point(
        &mut self,
        draft: PointDraft,
        timestamp: Option<String>,
    ) -> Result<i64> {
        let id = self
            .store
            .add_user_point(draft, timestamp, self.platform.storage.as_ref())?
            .id;
        self.refresh_markers();
        self.platform.notifier.show("Точка успешно добавлена!");
        Ok(id)
    }

    /// Popup "save" button: adds the point to favorites, deduplicated.
    pub fn save_favorite(&mut self, id: i64) {
        match self.store.save_favorite(id, self.platform.storage.as_ref()) {
            Ok(true) => self.platform.notifier.show("Точка сохранена в избранное"),
            Ok(false) => self.platform.notifier.show("Точка уже сохранена"),
            Err(err) => log::warn!("could not save favorite {id}: {err}"),
        }
    }

    /// Popup "route" button: deep link from the current view center to the
    /// point, opened by the shell.
    pub fn build_route_to(&mut self, lat: f64, lng: f64) -> String {
        let url = route::route_url(&self.viewport.center, &LatLng::new(lat, lng));
        self.platform.notifier.show("Маршрут строится в Яндекс.Картах");
        url
    }

    /// Routing panel: resolves both endpoints locally and focuses the view
    /// on the resulting plan. `"Мое местоположение"` resolves through the
    /// geolocation provider, degrading to the view center when denied.
    pub fn plan_route(&mut self, from_query: &str, to_query: &str) -> Result<RoutePlan> {
        let from = if is_own_location(from_query) {
            match self.platform.geolocation.current_position() {
                Ok(position) => position.coord,
                Err(err) => {
                    log::warn!("geolocation unavailable, routing from view center: {err}");
                    self.viewport.center
                }
            }
        } else {
            route::geocode(from_query, self.store.points())?
        };
        let to = route::geocode(to_query, self.store.points())?;

        let plan = RoutePlan::new(from, to);
        self.viewport
            .focus_bounds(&plan.view_bounds(), self.viewport.zoom);
        self.platform.notifier.show("Маршрут построен!");
        Ok(plan)
    }

    /// Text search over all points; a blank query only notifies.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        if query.trim().is_empty() {
            self.platform.notifier.show("Введите поисковый запрос");
            return Vec::new();
        }
        search_points(self.store.points(), query)
    }

    pub fn state(&self) -> MapState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == MapState::Ready
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn layers(&self) -> &LayerRegistry {
        &self.layers
    }

    pub fn renderer(&self) -> &MarkerRenderer {
        &self.renderer
    }

    pub fn store(&self) -> &PointStore {
        &self.store
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Count of markers currently on the map.
    pub fn visible_count(&self) -> usize {
        self.renderer.visible_count()
    }
}

fn is_own_location(query: &str) -> bool {
    let query = query.to_lowercase();
    query.contains("мое") || query.contains("местоположение")
}
