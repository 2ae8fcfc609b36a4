use crate::category::Category;

/// Marker circle diameter in CSS pixels.
pub const ICON_SIZE: (u32, u32) = (44, 44);
/// Point of the icon pinned to the coordinate (bottom center).
pub const ICON_ANCHOR: (i32, i32) = (22, 44);
/// Popup offset relative to the anchor.
pub const POPUP_ANCHOR: (i32, i32) = (0, -40);

/// The visual for one marker: a white circle with a category-colored ring
/// and an emoji inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    pub emoji: &'static str,
    /// Ring and text accent color, CSS hex
    pub color: &'static str,
    pub size: (u32, u32),
    pub anchor: (i32, i32),
    pub popup_anchor: (i32, i32),
}

impl MarkerIcon {
    /// Icon for a category; unknown categories get the fallback pin.
    pub fn for_category(category: Category) -> Self {
        let meta = category.meta();
        Self {
            emoji: meta.icon,
            color: meta.color,
            size: ICON_SIZE,
            anchor: ICON_ANCHOR,
            popup_anchor: POPUP_ANCHOR,
        }
    }
}
