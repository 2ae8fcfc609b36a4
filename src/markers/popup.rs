use crate::points::point::Point;

/// Maximum popup width in CSS pixels.
pub const POPUP_MAX_WIDTH: u32 = 300;

/// One labeled line in a popup body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupRow {
    pub label: &'static str,
    pub value: String,
    /// `tel:` target for phone rows
    pub href: Option<String>,
}

/// Buttons at the bottom of a point popup. Both are thin delegations to
/// glue outside the engine: routing and favorites.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupAction {
    BuildRoute { lat: f64, lng: f64 },
    SavePoint { id: i64 },
}

/// Structured popup content for one point.
///
/// Rows exist only for fields the point actually has; an absent phone or
/// description never renders an empty placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub icon: &'static str,
    pub category_label: &'static str,
    pub rows: Vec<PopupRow>,
    pub actions: Vec<PopupAction>,
}

impl PopupContent {
    pub fn for_point(point: &Point) -> Self {
        let meta = point.category.meta();

        let mut rows = Vec::new();
        if let Some(description) = &point.description {
            rows.push(PopupRow {
                label: "Описание",
                value: description.clone(),
                href: None,
            });
        }
        if let Some(phone) = &point.phone {
            rows.push(PopupRow {
                label: "Телефон",
                value: phone.clone(),
                href: Some(tel_href(phone)),
            });
        }
        if !point.services.is_empty() {
            rows.push(PopupRow {
                label: "Услуги",
                value: point.services.join(", "),
                href: None,
            });
        }
        if let Some(hours) = &point.working_hours {
            rows.push(PopupRow {
                label: "Часы работы",
                value: hours.clone(),
                href: None,
            });
        }

        Self {
            title: point.name.clone(),
            icon: meta.icon,
            category_label: meta.label,
            rows,
            actions: vec![
                PopupAction::BuildRoute {
                    lat: point.lat,
                    lng: point.lng,
                },
                PopupAction::SavePoint { id: point.id },
            ],
        }
    }
}

/// `tel:` href for a display phone number: keeps digits and `+` only.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}
