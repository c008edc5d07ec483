//! Feed access
//!
//! One GET per feed, no retry: a failed fetch surfaces as a typed error and
//! the caller decides what to do with it. The HTTP client is shared and built
//! once so repeated composes reuse the connection pool.

use crate::data::geojson::{self, BoundaryFeature, EarthquakeFeature, GeoJson};
use crate::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;

/// Shared HTTP client with a custom User-Agent so that public feed servers
/// don't reject the request.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("quakemap/0.1 (+https://github.com/example/quakemap)")
        .build()
        .expect("failed to build reqwest client")
});

/// Anything that can supply the two feature feeds. The HTTP implementation is
/// the production path; tests swap in canned data.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn earthquakes(&self) -> Result<Vec<EarthquakeFeature>>;
    async fn boundaries(&self) -> Result<Vec<BoundaryFeature>>;
}

/// Fetches both feeds over HTTP from their configured URLs
pub struct HttpFeedClient {
    earthquake_url: String,
    boundary_url: String,
}

impl HttpFeedClient {
    pub fn new(earthquake_url: impl Into<String>, boundary_url: impl Into<String>) -> Self {
        Self {
            earthquake_url: earthquake_url.into(),
            boundary_url: boundary_url.into(),
        }
    }

    async fn fetch_geojson(&self, url: &str) -> Result<GeoJson> {
        log::debug!("fetching feed from {}", url);
        let response = HTTP_CLIENT.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        log::debug!("downloaded {} bytes from {}", body.len(), url);
        GeoJson::from_str(&body)
    }
}

impl From<&crate::ViewerConfig> for HttpFeedClient {
    fn from(config: &crate::ViewerConfig) -> Self {
        Self::new(&config.earthquake_url, &config.boundary_url)
    }
}

#[async_trait]
impl FeedSource for HttpFeedClient {
    async fn earthquakes(&self) -> Result<Vec<EarthquakeFeature>> {
        let geojson = self.fetch_geojson(&self.earthquake_url).await?;
        let quakes = geojson::extract_earthquakes(&geojson);
        log::info!("loaded {} earthquakes", quakes.len());
        Ok(quakes)
    }

    async fn boundaries(&self) -> Result<Vec<BoundaryFeature>> {
        let geojson = self.fetch_geojson(&self.boundary_url).await?;
        let boundaries = geojson::extract_boundaries(&geojson);
        log::info!("loaded {} plate boundaries", boundaries.len());
        Ok(boundaries)
    }
}
