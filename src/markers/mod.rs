pub mod icon;
pub mod popup;
pub mod renderer;

pub use icon::MarkerIcon;
pub use popup::{PopupAction, PopupContent, PopupRow};
pub use renderer::{Marker, MarkerRenderer};
