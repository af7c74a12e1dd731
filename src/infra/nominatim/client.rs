use anyhow::Result;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use surf_rater::fetch::{BasicClient, fetch_bytes};

use crate::services::forecast_api::GeocodeApi;

const REVERSE_ENDPOINT: &str = "https://nominatim.openstreetmap.org/reverse";

/// Reverse geocoder backed by OpenStreetMap Nominatim.
pub struct NominatimClient {
    endpoint: String,
    http: BasicClient,
}

impl NominatimClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            endpoint: REVERSE_ENDPOINT.to_string(),
            http: BasicClient::with_timeouts(Duration::from_secs(10), Duration::from_secs(5))?,
        })
    }
}

/// Pulls `display_name` out of a reverse-geocoding response.
fn display_name(body: &[u8]) -> Result<Option<String>> {
    let json: serde_json::Value = serde_json::from_slice(body)?;
    Ok(json["display_name"]
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string))
}

#[async_trait]
impl GeocodeApi for NominatimClient {
    #[tracing::instrument(skip(self))]
    async fn reverse(&self, lat: f64, lng: f64) -> Result<Option<String>> {
        let url = Url::parse_with_params(
            &self.endpoint,
            &[
                ("lat", lat.to_string()),
                ("lon", lng.to_string()),
                ("format", "json".to_string()),
            ],
        )?;

        let bytes = fetch_bytes(&self.http, url.as_str()).await?;
        display_name(&bytes)
    }
}
