//! Text search over the point store
//!
//! A case-insensitive substring scan, which is all the data volume calls
//! for. Matches name, description, address, the category wire name, and
//! every service entry; results keep store order.

use crate::{category::CategoryMeta, points::point::Point};

/// One search result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub point: &'a Point,
}

impl<'a> SearchHit<'a> {
    /// Display metadata for the result row (icon + label).
    pub fn meta(&self) -> &'static CategoryMeta {
        self.point.category.meta()
    }
}

/// Scans `points` for `query`. A blank query yields no hits.
pub fn search_points<'a>(points: &'a [Point], query: &str) -> Vec<SearchHit<'a>> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    points
        .iter()
        .filter(|point| matches(point, &term))
        .map(|point| SearchHit { point })
        .collect()
}

fn matches(point: &Point, term: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(term);

    contains(&point.name)
        || point.description.as_deref().is_some_and(contains)
        || point.address.as_deref().is_some_and(contains)
        || contains(point.category.wire_name())
        || point.services.iter().any(|service| contains(service))
}
