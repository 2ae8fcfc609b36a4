use crate::{
    core::geo::LatLng,
    markers::{icon::MarkerIcon, popup::PopupContent},
    points::{filter::FilterSet, point::Point},
};

/// The transient visual for one point currently passing the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub point_id: i64,
    pub position: LatLng,
    pub icon: MarkerIcon,
    pub popup: PopupContent,
}

/// Keeps the on-map markers consistent with the filtered point set.
///
/// The policy is whole redraw on any change: every pass tears down the
/// tracking collection and rebuilds it from scratch, so re-entrant calls
/// always start from a clean slate and a repeat render with unchanged
/// inputs yields the same marker set.
///
/// The tracking collection is owned exclusively by this struct; no other
/// component may add or remove individual markers.
#[derive(Debug, Default)]
pub struct MarkerRenderer {
    markers: Vec<Marker>,
}

impl MarkerRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full teardown and rebuild against the active filter.
    ///
    /// Points are taken in input order; a record with unusable geometry is
    /// skipped with a warning so one bad point cannot blank the map.
    /// Returns the number of visible markers.
    pub fn render(&mut self, points: &[Point], filters: &FilterSet) -> usize {
        self.clear();

        for point in points {
            if !filters.is_active(point.category) {
                continue;
            }
            match point.geometry() {
                Ok(position) => self.markers.push(Marker {
                    point_id: point.id,
                    position,
                    icon: MarkerIcon::for_category(point.category),
                    popup: PopupContent::for_point(point),
                }),
                Err(err) => log::warn!("skipping point: {err}"),
            }
        }

        let count = self.markers.len();
        log::debug!("rendered {count} markers");
        count
    }

    /// Removes every tracked marker from the view.
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Currently rendered markers, in point-store order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Count of markers currently on the map, exposed for diagnostics.
    pub fn visible_count(&self) -> usize {
        self.markers.len()
    }

    pub fn get(&self, point_id: i64) -> Option<&Marker> {
        self.markers.iter().find(|m| m.point_id == point_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn point(id: i64, category: Category, lat: f64, lng: f64) -> Point {
        Point {
            id,
            name: format!("точка {id}"),
            category,
            lat,
            lng,
            description: None,
            phone: None,
            address: None,
            working_hours: None,
            services: Vec::new(),
            user_added: false,
            timestamp: None,
        }
    }

    #[test]
    fn test_render_matches_filter_exactly() {
        let points = vec![
            point(1, Category::Fuel, 62.0, 129.7),
            point(2, Category::Hotel, 62.1, 129.8),
            point(3, Category::Fuel, 62.2, 129.9),
        ];
        let mut filters = FilterSet::none();
        filters.set_active([Category::Fuel]);

        let mut renderer = MarkerRenderer::new();
        let count = renderer.render(&points, &filters);

        assert_eq!(count, 2);
        let ids: Vec<i64> = renderer.markers().iter().map(|m| m.point_id).collect();
        assert_eq!(ids, vec![1, 3], "input order is preserved");
    }

    #[test]
    fn test_single_fuel_marker_example() {
        let points = vec![
            point(1, Category::Fuel, 62.0, 129.7),
            point(2, Category::Hotel, 62.1, 129.8),
        ];
        let mut filters = FilterSet::none();
        filters.set_active([Category::Fuel]);

        let mut renderer = MarkerRenderer::new();
        assert_eq!(renderer.render(&points, &filters), 1);
        let marker = &renderer.markers()[0];
        assert_eq!(marker.position, LatLng::new(62.0, 129.7));
    }

    #[test]
    fn test_render_is_idempotent() {
        let points = vec![
            point(1, Category::Fuel, 62.0, 129.7),
            point(2, Category::Danger, 61.9, 129.5),
        ];
        let filters = FilterSet::all();
        let mut renderer = MarkerRenderer::new();

        renderer.render(&points, &filters);
        let first: Vec<(i64, LatLng)> = renderer
            .markers()
            .iter()
            .map(|m| (m.point_id, m.position))
            .collect();

        renderer.render(&points, &filters);
        let second: Vec<(i64, LatLng)> = renderer
            .markers()
            .iter()
            .map(|m| (m.point_id, m.position))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_point_is_skipped_not_fatal() {
        let mut bad = point(2, Category::Hotel, f64::NAN, 129.8);
        bad.lng = f64::NAN;
        let points = vec![
            point(1, Category::Fuel, 62.0, 129.7),
            bad,
            point(3, Category::Ferry, 61.96, 129.9),
        ];

        let mut renderer = MarkerRenderer::new();
        let count = renderer.render(&points, &FilterSet::all());
        assert_eq!(count, 2);
        assert!(renderer.get(2).is_none());
        assert!(renderer.get(3).is_some());
    }

    #[test]
    fn test_unknown_category_renders_with_fallback_icon() {
        let points = vec![point(9, Category::Unknown, 62.0, 129.7)];
        let mut filters = FilterSet::none();
        filters.set_active([Category::Unknown]);

        let mut renderer = MarkerRenderer::new();
        assert_eq!(renderer.render(&points, &filters), 1);
        assert_eq!(renderer.markers()[0].icon.emoji, "📍");
    }

    #[test]
    fn test_empty_filter_renders_nothing() {
        let points = vec![point(1, Category::Fuel, 62.0, 129.7)];
        let mut renderer = MarkerRenderer::new();
        assert_eq!(renderer.render(&points, &FilterSet::none()), 0);
        assert_eq!(renderer.visible_count(), 0);
    }
}
