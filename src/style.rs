//! Magnitude-to-visual encoding
//!
//! Pure functions mapping an earthquake magnitude to a marker radius and a
//! fill color, plus the ordered magnitude scale behind the legend. The color
//! thresholds use strict `>` comparisons, so a magnitude sitting exactly on a
//! break falls into the lower band.

use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// The six fixed marker colors, lowest band first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerColor {
    LightGreen,
    Green,
    YellowGreen,
    Yellow,
    OrangeRed,
    Red,
}

impl MarkerColor {
    /// CSS color name, as used for swatches and host-side rendering
    pub fn css_name(&self) -> &'static str {
        match self {
            MarkerColor::LightGreen => "lightgreen",
            MarkerColor::Green => "green",
            MarkerColor::YellowGreen => "yellowgreen",
            MarkerColor::Yellow => "yellow",
            MarkerColor::OrangeRed => "orangered",
            MarkerColor::Red => "red",
        }
    }

    /// RGB triple matching the CSS name
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            MarkerColor::LightGreen => (144, 238, 144),
            MarkerColor::Green => (0, 128, 0),
            MarkerColor::YellowGreen => (154, 205, 50),
            MarkerColor::Yellow => (255, 255, 0),
            MarkerColor::OrangeRed => (255, 69, 0),
            MarkerColor::Red => (255, 0, 0),
        }
    }
}

impl std::fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.css_name())
    }
}

/// Marker radius in meters. Scales linearly with magnitude; negative or
/// zero magnitudes are passed through unclamped.
pub fn radius_for(magnitude: f64) -> f64 {
    magnitude * 20_000.0
}

/// Fill color for the given magnitude
pub fn color_for(magnitude: f64) -> MarkerColor {
    if magnitude > 5.0 {
        MarkerColor::Red
    } else if magnitude > 4.0 {
        MarkerColor::OrangeRed
    } else if magnitude > 3.0 {
        MarkerColor::Yellow
    } else if magnitude > 2.0 {
        MarkerColor::YellowGreen
    } else if magnitude > 1.0 {
        MarkerColor::Green
    } else {
        MarkerColor::LightGreen
    }
}

/// A single legend band: `[lower, upper)`, or `lower+` for the last band
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeBand {
    pub lower: f64,
    pub upper: Option<f64>,
    pub color: MarkerColor,
}

impl MagnitudeBand {
    /// Human-readable label, e.g. `"2-3"` or `"5+"`
    pub fn label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{}-{}", self.lower, upper),
            None => format!("{}+", self.lower),
        }
    }
}

/// Ordered magnitude breakpoints driving legend bands and swatch colors
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeScale {
    breaks: Vec<f64>,
}

impl MagnitudeScale {
    /// Create a scale from breakpoints, which must be strictly increasing
    pub fn new(breaks: Vec<f64>) -> Result<Self> {
        if breaks.is_empty() {
            return Err(MapError::Layer("magnitude scale has no breaks".to_string()));
        }
        if breaks.windows(2).any(|w| w[0] >= w[1]) {
            return Err(MapError::Layer(
                "magnitude breaks must be strictly increasing".to_string(),
            ));
        }
        Ok(Self { breaks })
    }

    pub fn breaks(&self) -> &[f64] {
        &self.breaks
    }

    /// One band per breakpoint; the last band is open-ended. Each band's
    /// swatch color is sampled just above its lower bound so it matches the
    /// color markers in that band actually get.
    pub fn bands(&self) -> Vec<MagnitudeBand> {
        self.breaks
            .iter()
            .enumerate()
            .map(|(i, &lower)| MagnitudeBand {
                lower,
                upper: self.breaks.get(i + 1).copied(),
                color: color_for(lower + 1.0),
            })
            .collect()
    }
}

impl Default for MagnitudeScale {
    fn default() -> Self {
        // [0, 1, 2, 3, 4, 5] always satisfies the ordering check
        Self {
            breaks: vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_thresholds() {
        assert_eq!(color_for(5.1), MarkerColor::Red);
        assert_eq!(color_for(4.5), MarkerColor::OrangeRed);
        assert_eq!(color_for(3.2), MarkerColor::Yellow);
        assert_eq!(color_for(2.7), MarkerColor::YellowGreen);
        assert_eq!(color_for(1.5), MarkerColor::Green);
        assert_eq!(color_for(0.4), MarkerColor::LightGreen);
    }

    #[test]
    fn test_color_boundary_ties_fall_to_lower_band() {
        // Strict `>` means an exact break belongs to the band below it
        assert_eq!(color_for(5.0), MarkerColor::OrangeRed);
        assert_eq!(color_for(4.0), MarkerColor::Yellow);
        assert_eq!(color_for(3.0), MarkerColor::YellowGreen);
        assert_eq!(color_for(2.0), MarkerColor::Green);
        assert_eq!(color_for(1.0), MarkerColor::LightGreen);
    }

    #[test]
    fn test_radius_scaling() {
        assert_eq!(radius_for(3.0), 60_000.0);
        assert_eq!(radius_for(0.0), 0.0);
        assert_eq!(radius_for(6.2), 124_000.0);
    }

    #[test]
    fn test_default_scale_bands() {
        let bands = MagnitudeScale::default().bands();
        assert_eq!(bands.len(), 6);

        // Adjacent bands share a boundary
        for pair in bands.windows(2) {
            assert_eq!(pair[0].upper, Some(pair[1].lower));
        }
        assert_eq!(bands.last().unwrap().upper, None);
        assert_eq!(bands.last().unwrap().label(), "5+");
        assert_eq!(bands[0].label(), "0-1");

        // Swatches follow the marker color scale
        assert_eq!(bands[0].color, MarkerColor::LightGreen);
        assert_eq!(bands[5].color, MarkerColor::Red);
    }

    #[test]
    fn test_scale_rejects_unordered_breaks() {
        assert!(MagnitudeScale::new(vec![0.0, 2.0, 1.0]).is_err());
        assert!(MagnitudeScale::new(vec![0.0, 0.0, 1.0]).is_err());
        assert!(MagnitudeScale::new(vec![]).is_err());
        assert!(MagnitudeScale::new(vec![0.0, 1.0, 2.5]).is_ok());
    }
}
