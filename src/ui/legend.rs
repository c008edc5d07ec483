//! Magnitude legend control

use crate::style::{MagnitudeBand, MagnitudeScale, MarkerColor};

/// Screen corner a control is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One legend row: a color swatch and its magnitude range label
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: MarkerColor,
    pub label: String,
    pub band: MagnitudeBand,
}

/// Static legend describing the marker color scale
#[derive(Debug, Clone, PartialEq)]
pub struct LegendControl {
    title: String,
    position: Position,
    entries: Vec<LegendEntry>,
}

impl LegendControl {
    /// Builds the legend from a magnitude scale, anchored bottom-right
    pub fn from_scale(scale: &MagnitudeScale) -> Self {
        let entries = scale
            .bands()
            .into_iter()
            .map(|band| LegendEntry {
                color: band.color,
                label: band.label(),
                band,
            })
            .collect();

        Self {
            title: "Magnitude".to_string(),
            position: Position::BottomRight,
            entries,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }
}

impl Default for LegendControl {
    fn default() -> Self {
        Self::from_scale(&MagnitudeScale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_legend() {
        let legend = LegendControl::default();

        assert_eq!(legend.title(), "Magnitude");
        assert_eq!(legend.position(), Position::BottomRight);
        assert_eq!(legend.entries().len(), 6);
    }

    #[test]
    fn test_entries_are_contiguous() {
        let legend = LegendControl::default();
        let entries = legend.entries();

        for pair in entries.windows(2) {
            assert_eq!(pair[0].band.upper, Some(pair[1].band.lower));
        }
        assert_eq!(entries[0].label, "0-1");
        assert_eq!(entries[5].label, "5+");
    }

    #[test]
    fn test_swatches_match_marker_scale() {
        let legend = LegendControl::default();
        let colors: Vec<MarkerColor> = legend.entries().iter().map(|e| e.color).collect();

        assert_eq!(
            colors,
            vec![
                MarkerColor::LightGreen,
                MarkerColor::Green,
                MarkerColor::YellowGreen,
                MarkerColor::Yellow,
                MarkerColor::OrangeRed,
                MarkerColor::Red,
            ]
        );
    }
}
