use crate::{
    category::Category,
    core::config::{STORAGE_KEY_SAVED_POINTS, STORAGE_KEY_USER_POINTS},
    platform::storage::{read_json, write_json, KeyValueStore},
    points::point::{Point, PointDraft},
    MapError, Result,
};

/// The in-memory, insertion-ordered point collection.
///
/// Built-in points are read once at startup from the static data source;
/// points the driver added in earlier sessions are merged in from durable
/// storage behind them. New user points are appended both here and to
/// storage and are never mutated afterwards.
#[derive(Debug, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Loads the store from the primary JSON source, falling back to the
    /// built-in demo set when the source is absent or unreadable, then
    /// merges persisted user points.
    pub fn load(primary: Option<&str>, storage: &dyn KeyValueStore) -> Self {
        let mut points = match Self::primary_points(primary) {
            Ok(points) => points,
            Err(err) => {
                log::warn!("{err}, using demo set");
                demo_points()
            }
        };

        let user_points: Vec<Point> =
            read_json(storage, STORAGE_KEY_USER_POINTS).unwrap_or_default();
        points.extend(user_points);

        Self { points }
    }

    /// Store over an explicit point sequence, bypassing storage.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Finds the point closest to the coordinate within `tolerance`
    /// degrees on both axes.
    pub fn find_at(&self, lat: f64, lng: f64, tolerance: f64) -> Option<&Point> {
        self.points
            .iter()
            .find(|p| (p.lat - lat).abs() < tolerance && (p.lng - lng).abs() < tolerance)
    }

    /// Validates the draft, assigns the next id, appends the point, and
    /// persists the full user-point list.
    ///
    /// A storage failure is logged and the point stays in memory for the
    /// session; the append never rolls back.
    pub fn add_user_point(
        &mut self,
        draft: PointDraft,
        timestamp: Option<String>,
        storage: &dyn KeyValueStore,
    ) -> Result<&Point> {
        draft.validate()?;

        let id = self.next_id();
        self.points.push(draft.into_point(id, timestamp));

        let user_points: Vec<&Point> = self.points.iter().filter(|p| p.user_added).collect();
        if let Err(err) = write_json(storage, STORAGE_KEY_USER_POINTS, &user_points) {
            log::warn!("could not persist user points, keeping in memory: {err}");
        }

        Ok(self.points.last().expect("point just appended"))
    }

    /// Adds `id` to the persisted favorites list.
    ///
    /// Returns `true` when the id was newly saved, `false` when it was
    /// already present. The list keeps first-saved order and is
    /// deduplicated on every write.
    pub fn save_favorite(&self, id: i64, storage: &dyn KeyValueStore) -> Result<bool> {
        let mut saved: Vec<i64> = read_json(storage, STORAGE_KEY_SAVED_POINTS).unwrap_or_default();
        let mut seen = crate::prelude::HashSet::default();
        saved.retain(|entry| seen.insert(*entry));
        if saved.contains(&id) {
            return Ok(false);
        }
        saved.push(id);
        write_json(storage, STORAGE_KEY_SAVED_POINTS, &saved)?;
        Ok(true)
    }

    /// The persisted favorite ids, in first-saved order.
    pub fn favorites(&self, storage: &dyn KeyValueStore) -> Vec<i64> {
        read_json(storage, STORAGE_KEY_SAVED_POINTS).unwrap_or_default()
    }

    fn primary_points(primary: Option<&str>) -> Result<Vec<Point>> {
        let raw = primary.ok_or(MapError::DataUnavailable)?;
        Ok(serde_json::from_str(raw)?)
    }

    fn next_id(&self) -> i64 {
        self.points.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}

/// Built-in fallback set, enough to keep the map useful without data.
pub fn demo_points() -> Vec<Point> {
    fn point(id: i64, name: &str, category: Category, lat: f64, lng: f64) -> Point {
        Point {
            id,
            name: name.to_string(),
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

    vec![
        Point {
            description: Some("Круглосуточная заправка".to_string()),
            phone: Some("+7 (4112) 12-34-56".to_string()),
            services: vec![
                "ДТ".to_string(),
                "АИ-92".to_string(),
                "АИ-95".to_string(),
                "Магазин".to_string(),
            ],
            ..point(1, "АЗС Лукойл", Category::Fuel, 62.0350, 129.7400)
        },
        Point {
            description: Some("Охраняемая стоянка для грузовиков".to_string()),
            ..point(2, "Стоянка Северная", Category::Parking, 62.0450, 129.7600)
        },
        Point {
            phone: Some("+7 (4112) 44-55-66".to_string()),
            ..point(3, "Гостиница Лена", Category::Hotel, 62.0280, 129.7330)
        },
        Point {
            working_hours: Some("08:00-22:00".to_string()),
            ..point(4, "Кафе Трасса", Category::Food, 61.9500, 129.6200)
        },
        Point {
            description: Some("Переправа через Лену, зимник с декабря".to_string()),
            ..point(5, "Паром Нижний Бестях", Category::Ferry, 61.9640, 129.9080)
        },
        Point {
            description: Some("Затяжной подъем, гололед".to_string()),
            ..point(6, "Перевал Тит-Ары", Category::Danger, 61.6500, 129.3800)
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;

    #[test]
    fn test_load_parses_primary_source() {
        let storage = MemoryStore::new();
        let raw = r#"[
            {"id":1,"name":"АЗС","type":"fuel","lat":62.0,"lng":129.7},
            {"id":2,"name":"Отель","type":"hotel","lat":62.1,"lng":129.8}
        ]"#;
        let store = PointStore::load(Some(raw), &storage);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(2).unwrap().category, Category::Hotel);
    }

    #[test]
    fn test_load_falls_back_to_demo_set() {
        let storage = MemoryStore::new();

        let store = PointStore::load(None, &storage);
        assert!(!store.is_empty(), "demo fallback must not be empty");

        let store = PointStore::load(Some("{broken"), &storage);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_user_points_survive_reload() {
        let storage = MemoryStore::new();
        let mut store = PointStore::load(None, &storage);
        let before = store.len();

        let draft = PointDraft::new("Моя стоянка", Category::Parking, 62.2, 129.9);
        let added_id = store
            .add_user_point(draft, Some("2026-02-01T10:00:00Z".to_string()), &storage)
            .unwrap()
            .id;
        assert_eq!(store.len(), before + 1);

        let reloaded = PointStore::load(None, &storage);
        let merged = reloaded.get(added_id).unwrap();
        assert!(merged.user_added);
        assert_eq!(merged.name, "Моя стоянка");
    }

    #[test]
    fn test_add_user_point_rejects_invalid_draft() {
        let storage = MemoryStore::new();
        let mut store = PointStore::load(None, &storage);
        let before = store.len();

        let draft = PointDraft::new("", Category::Parking, 62.2, 129.9);
        assert!(store.add_user_point(draft, None, &storage).is_err());
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_ids_stay_monotonic() {
        let storage = MemoryStore::new();
        let mut store = PointStore::from_points(demo_points());
        let max_existing = store.points().iter().map(|p| p.id).max().unwrap();

        let a = store
            .add_user_point(
                PointDraft::new("А", Category::Fuel, 62.0, 129.0),
                None,
                &storage,
            )
            .unwrap()
            .id;
        let b = store
            .add_user_point(
                PointDraft::new("Б", Category::Fuel, 62.0, 129.1),
                None,
                &storage,
            )
            .unwrap()
            .id;
        assert!(a > max_existing);
        assert!(b > a);
    }

    #[test]
    fn test_favorites_dedup_on_write() {
        let storage = MemoryStore::new();
        let store = PointStore::from_points(demo_points());

        assert!(store.save_favorite(3, &storage).unwrap());
        assert!(store.save_favorite(1, &storage).unwrap());
        assert!(!store.save_favorite(3, &storage).unwrap());

        assert_eq!(store.favorites(&storage), vec![3, 1]);
    }

    #[test]
    fn test_find_at_tolerance() {
        let store = PointStore::from_points(demo_points());
        assert!(store.find_at(62.0350, 129.7400, 1e-4).is_some());
        assert!(store.find_at(62.5, 129.0, 1e-4).is_none());
    }
}
