//! Map composition
//!
//! [`MapComposer`] turns a [`ViewerConfig`] and a [`FeedSource`] into a
//! finished [`MapView`]: fetch both feeds concurrently, build the styled
//! layers, attach the basemaps and the legend.
//!
//! The earthquake feed is load-bearing and its failure fails the compose.
//! The boundary feed is not: on failure the TectonicPlates overlay stays
//! empty, a warning is logged, and any registered error handler is notified.

use crate::{
    core::{config::ViewerConfig, map::MapView},
    data::{
        feed::{FeedSource, HttpFeedClient},
        geojson::{BoundaryFeature, EarthquakeFeature},
    },
    layers::{boundary::BoundaryLayer, marker::EarthquakeLayer, tile::TileLayer},
    style::MagnitudeScale,
    ui::legend::LegendControl,
    MapError, Result,
};

type ErrorHandler = Box<dyn Fn(&MapError) + Send + Sync>;

pub struct MapComposer {
    config: ViewerConfig,
    scale: MagnitudeScale,
    on_error: Option<ErrorHandler>,
}

impl MapComposer {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            scale: MagnitudeScale::default(),
            on_error: None,
        }
    }

    /// Registers a handler for errors the compose tolerates rather than
    /// propagates (currently only boundary-feed failures)
    pub fn with_error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&MapError) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(handler));
        self
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// One styled circle marker per earthquake
    pub fn build_marker_layer(&self, features: &[EarthquakeFeature]) -> EarthquakeLayer {
        EarthquakeLayer::from_features(features)
    }

    /// Fixed-style polylines for the plate edges
    pub fn build_boundary_layer(&self, features: &[BoundaryFeature]) -> BoundaryLayer {
        BoundaryLayer::from_features(features)
    }

    /// Fetches both feeds and composes the full map view
    pub async fn compose<S: FeedSource + ?Sized>(&self, feeds: &S) -> Result<MapView> {
        let (quakes, boundaries) = futures::join!(feeds.earthquakes(), feeds.boundaries());

        let marker_layer = self.build_marker_layer(&quakes?);
        log::info!("marker layer holds {} earthquakes", marker_layer.len());

        let boundary_layer = match boundaries {
            Ok(features) => self.build_boundary_layer(&features),
            Err(e) => {
                log::warn!("boundary feed failed, overlay stays empty: {}", e);
                if let Some(handler) = &self.on_error {
                    handler(&e);
                }
                BoundaryLayer::empty()
            }
        };

        Ok(self.compose_layers(marker_layer, boundary_layer))
    }

    /// Fetches the configured URLs over HTTP and composes the view
    pub async fn compose_http(&self) -> Result<MapView> {
        let client = HttpFeedClient::from(&self.config);
        self.compose(&client).await
    }

    /// Assembles the view from already-built overlays: three Mapbox
    /// basemaps (the grey-scale one active), both overlays visible, legend
    /// bottom-right.
    pub fn compose_layers(
        &self,
        marker_layer: EarthquakeLayer,
        boundary_layer: BoundaryLayer,
    ) -> MapView {
        let token = &self.config.mapbox_access_token;
        let mut view = MapView::new(self.config.center, self.config.zoom);

        view.add_basemap(TileLayer::mapbox_light(token));
        view.add_basemap(TileLayer::mapbox_outdoors(token));
        view.add_basemap(TileLayer::mapbox_satellite(token));

        view.add_overlay(Box::new(marker_layer));
        view.add_overlay(Box::new(boundary_layer));

        view.set_legend(LegendControl::from_scale(&self.scale));
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn quake(magnitude: f64) -> EarthquakeFeature {
        EarthquakeFeature {
            place: "test".to_string(),
            magnitude,
            time_ms: 0,
            position: LatLng::new(0.0, 0.0),
        }
    }

    #[test]
    fn test_compose_layers_shape() {
        let composer = MapComposer::new(ViewerConfig::new("pk.test"));
        let view = composer.compose_layers(
            composer.build_marker_layer(&[quake(2.5)]),
            BoundaryLayer::empty(),
        );

        assert_eq!(view.center(), LatLng::new(37.09, -95.71));
        assert_eq!(view.zoom(), 5.0);
        assert_eq!(view.basemaps().len(), 3);
        assert_eq!(view.overlays().count(), 2);
        assert_eq!(view.legend().unwrap().entries().len(), 6);
    }

    #[test]
    fn test_both_overlays_start_visible() {
        let composer = MapComposer::new(ViewerConfig::new("pk.test"));
        let view =
            composer.compose_layers(EarthquakeLayer::empty(), BoundaryLayer::empty());

        assert!(view.overlay("earthquakes").unwrap().is_visible());
        assert!(view.overlay("tectonic-plates").unwrap().is_visible());
    }
}
