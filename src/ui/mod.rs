pub mod legend;
pub mod popup;

pub use legend::{LegendControl, LegendEntry, Position};
pub use popup::{PopupContent, QuakePopup};
