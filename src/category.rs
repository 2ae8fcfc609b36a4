//! Point-of-interest categories and their display metadata
//!
//! The emoji, accent color and label for a category used to be duplicated
//! between the marker icons, the popups and the search results; this module
//! is the single table everyone reads.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::prelude::HashMap;

/// Fixed category set for points of interest.
///
/// Wire values are the lowercase names (`"fuel"`, `"parking"`, ...).
/// Anything else deserializes to [`Category::Unknown`], which renders with
/// the fallback icon and color instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fuel,
    Parking,
    Hotel,
    Food,
    Service,
    Tire,
    Wash,
    Ferry,
    Border,
    Danger,
    #[serde(other)]
    Unknown,
}

/// Display metadata for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMeta {
    /// Emoji shown inside the marker circle
    pub icon: &'static str,
    /// Accent color for the marker ring, CSS hex
    pub color: &'static str,
    /// Russian display label
    pub label: &'static str,
}

/// Fallback metadata for [`Category::Unknown`].
pub const FALLBACK_META: CategoryMeta = CategoryMeta {
    icon: "📍",
    color: "#666",
    label: "Объект",
};

static METADATA: Lazy<HashMap<Category, CategoryMeta>> = Lazy::new(|| {
    let mut table = HashMap::default();
    table.insert(Category::Fuel, CategoryMeta { icon: "⛽", color: "#FF9800", label: "Заправка" });
    table.insert(Category::Parking, CategoryMeta { icon: "🅿️", color: "#4CAF50", label: "Парковка" });
    table.insert(Category::Hotel, CategoryMeta { icon: "🏨", color: "#2196F3", label: "Гостиница" });
    table.insert(Category::Food, CategoryMeta { icon: "🍽️", color: "#9C27B0", label: "Питание" });
    table.insert(Category::Service, CategoryMeta { icon: "🔧", color: "#F44336", label: "Автосервис" });
    table.insert(Category::Tire, CategoryMeta { icon: "🛞", color: "#795548", label: "Шиномонтаж" });
    table.insert(Category::Wash, CategoryMeta { icon: "🧼", color: "#00BCD4", label: "Мойка" });
    table.insert(Category::Ferry, CategoryMeta { icon: "🚢", color: "#3F51B5", label: "Паром" });
    table.insert(Category::Border, CategoryMeta { icon: "🛃", color: "#FF5722", label: "Пост/Весовые" });
    table.insert(Category::Danger, CategoryMeta { icon: "⚠️", color: "#FF0000", label: "Сложный участок" });
    table
});

impl Category {
    /// All known categories, in legend order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Fuel,
            Category::Parking,
            Category::Hotel,
            Category::Food,
            Category::Service,
            Category::Tire,
            Category::Wash,
            Category::Ferry,
            Category::Border,
            Category::Danger,
        ]
    }

    /// Display metadata, falling back to [`FALLBACK_META`] for unknown
    /// categories.
    pub fn meta(&self) -> &'static CategoryMeta {
        METADATA.get(self).unwrap_or(&FALLBACK_META)
    }

    /// The lowercase wire name, `"unknown"` for the catch-all.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Category::Fuel => "fuel",
            Category::Parking => "parking",
            Category::Hotel => "hotel",
            Category::Food => "food",
            Category::Service => "service",
            Category::Tire => "tire",
            Category::Wash => "wash",
            Category::Ferry => "ferry",
            Category::Border => "border",
            Category::Danger => "danger",
            Category::Unknown => "unknown",
        }
    }
}

impl Default for Category {
    /// The creation form's first option.
    fn default() -> Self {
        Category::Fuel
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_round_trip() {
        for category in Category::all() {
            let json = serde_json::to_string(category).unwrap();
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(*category, back);
        }
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let category: Category = serde_json::from_str("\"teleport\"").unwrap();
        assert_eq!(category, Category::Unknown);
        assert_eq!(category.meta(), &FALLBACK_META);
    }

    #[test]
    fn test_every_known_category_has_meta() {
        for category in Category::all() {
            let meta = category.meta();
            assert_ne!(meta, &FALLBACK_META, "{category} missing metadata");
            assert!(meta.color.starts_with('#'));
            assert!(!meta.label.is_empty());
        }
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(Category::Fuel.to_string(), "fuel");
        assert_eq!(Category::Danger.to_string(), "danger");
    }
}
