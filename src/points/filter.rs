use crate::category::Category;
use crate::prelude::HashSet;

/// The set of categories currently allowed to render.
///
/// Any mutation goes through the map controller, which follows it with a
/// full marker re-render; there is no incremental add/remove of individual
/// markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    active: HashSet<Category>,
}

impl FilterSet {
    /// All known categories active.
    pub fn all() -> Self {
        Self {
            active: Category::all().iter().copied().collect(),
        }
    }

    /// No categories active; nothing renders until `set_active` is called.
    pub fn none() -> Self {
        Self {
            active: HashSet::default(),
        }
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.active.contains(&category)
    }

    /// Replaces the active set wholesale, mirroring the filter panel's
    /// apply button.
    pub fn set_active(&mut self, categories: impl IntoIterator<Item = Category>) {
        self.active = categories.into_iter().collect();
    }

    pub fn all_categories() -> &'static [Category] {
        Category::all()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_everything_active() {
        let filters = FilterSet::default();
        for category in Category::all() {
            assert!(filters.is_active(*category));
        }
        assert!(!filters.is_active(Category::Unknown));
    }

    #[test]
    fn test_set_active_replaces_wholesale() {
        let mut filters = FilterSet::all();
        filters.set_active([Category::Fuel, Category::Parking]);

        assert!(filters.is_active(Category::Fuel));
        assert!(filters.is_active(Category::Parking));
        assert!(!filters.is_active(Category::Hotel));
        assert_eq!(filters.active_count(), 2);
    }

    #[test]
    fn test_none_renders_nothing() {
        let filters = FilterSet::none();
        assert_eq!(filters.active_count(), 0);
        assert!(!filters.is_active(Category::Fuel));
    }
}
