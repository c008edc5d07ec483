//! The composed map view
//!
//! [`MapView`] is the product of composition: the viewport, the selectable
//! basemaps, the toggleable overlays, and the legend. It owns no rendering;
//! a host walks the layers (downcasting through [`LayerTrait::as_any`]) and
//! draws them.

use crate::{
    core::geo::LatLng,
    layers::{base::LayerTrait, tile::TileLayer},
    ui::legend::LegendControl,
    MapError, Result,
};

/// Snapshot of the layer switcher state, one entry per basemap and overlay.
/// The switcher is rendered expanded, not collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerControl {
    pub basemaps: Vec<String>,
    pub active_basemap: String,
    /// Overlay name and current visibility
    pub overlays: Vec<(String, bool)>,
    pub collapsed: bool,
}

pub struct MapView {
    center: LatLng,
    zoom: f64,
    basemaps: Vec<TileLayer>,
    active_basemap: usize,
    overlays: Vec<Box<dyn LayerTrait>>,
    legend: Option<LegendControl>,
}

impl std::fmt::Debug for MapView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapView")
            .field("center", &self.center)
            .field("zoom", &self.zoom)
            .field("basemaps", &self.basemaps.len())
            .field("active_basemap", &self.active_basemap)
            .field("overlays", &self.overlays.len())
            .field("legend", &self.legend.is_some())
            .finish()
    }
}

impl MapView {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            basemaps: Vec::new(),
            active_basemap: 0,
            overlays: Vec::new(),
            legend: None,
        }
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_view(&mut self, center: LatLng, zoom: f64) -> Result<()> {
        if !center.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "({}, {})",
                center.lat, center.lng
            )));
        }
        self.center = center;
        self.zoom = zoom;
        Ok(())
    }

    /// Adds a selectable basemap. The first one added starts active.
    pub fn add_basemap(&mut self, layer: TileLayer) {
        self.basemaps.push(layer);
    }

    /// Switches the active basemap by layer id
    pub fn set_basemap(&mut self, id: &str) -> Result<()> {
        let index = self
            .basemaps
            .iter()
            .position(|b| b.id() == id)
            .ok_or_else(|| MapError::Layer(format!("unknown basemap: {}", id)))?;
        self.active_basemap = index;
        Ok(())
    }

    pub fn active_basemap(&self) -> Option<&TileLayer> {
        self.basemaps.get(self.active_basemap)
    }

    pub fn basemaps(&self) -> &[TileLayer] {
        &self.basemaps
    }

    /// Adds a toggleable overlay on top of the basemap
    pub fn add_overlay(&mut self, layer: Box<dyn LayerTrait>) {
        self.overlays.push(layer);
    }

    /// Looks up an overlay by layer id
    pub fn overlay(&self, id: &str) -> Option<&dyn LayerTrait> {
        self.overlays
            .iter()
            .find(|l| l.id() == id)
            .map(|l| l.as_ref())
    }

    pub fn overlays(&self) -> impl Iterator<Item = &dyn LayerTrait> {
        self.overlays.iter().map(|l| l.as_ref())
    }

    /// Shows or hides an overlay
    pub fn set_overlay_visible(&mut self, id: &str, visible: bool) -> Result<()> {
        let layer = self
            .overlays
            .iter_mut()
            .find(|l| l.id() == id)
            .ok_or_else(|| MapError::Layer(format!("unknown overlay: {}", id)))?;
        layer.set_visible(visible);
        Ok(())
    }

    /// Flips an overlay's visibility, returning the new state
    pub fn toggle_overlay(&mut self, id: &str) -> Result<bool> {
        let layer = self
            .overlays
            .iter_mut()
            .find(|l| l.id() == id)
            .ok_or_else(|| MapError::Layer(format!("unknown overlay: {}", id)))?;
        let visible = !layer.is_visible();
        layer.set_visible(visible);
        Ok(visible)
    }

    pub fn set_legend(&mut self, legend: LegendControl) {
        self.legend = Some(legend);
    }

    pub fn legend(&self) -> Option<&LegendControl> {
        self.legend.as_ref()
    }

    /// Current layer switcher state
    pub fn layer_control(&self) -> LayerControl {
        LayerControl {
            basemaps: self.basemaps.iter().map(|b| b.name().to_string()).collect(),
            active_basemap: self
                .active_basemap()
                .map(|b| b.name().to_string())
                .unwrap_or_default(),
            overlays: self
                .overlays
                .iter()
                .map(|l| (l.name().to_string(), l.is_visible()))
                .collect(),
            collapsed: false,
        }
    }
}
