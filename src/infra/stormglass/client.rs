use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use reqwest::Url;
use std::time::Duration;
use surf_rater::fetch::auth::ApiKey;
use surf_rater::fetch::{BasicClient, HttpClient, fetch_bytes};
use surf_rater::forecast::{Parameter, RawHourlyReading};
use surf_rater::parser::parse_forecast;
use tracing::debug;

use crate::services::forecast_api::ForecastApi;

const POINT_ENDPOINT: &str = "https://api.stormglass.io/v2/weather/point";

/// Point-forecast client for the Stormglass weather API.
pub struct StormglassClient {
    endpoint: String,
    http: Box<dyn HttpClient>,
}

impl StormglassClient {
    /// Without a key the request is still sent, and the provider decides.
    pub fn new(api_key: Option<&str>) -> Result<Self> {
        let basic = BasicClient::with_timeouts(Duration::from_secs(30), Duration::from_secs(10))?;
        let http: Box<dyn HttpClient> = match api_key {
            Some(key) => Box::new(ApiKey::raw_authorization(basic, key)?),
            None => Box::new(basic),
        };

        Ok(Self {
            endpoint: POINT_ENDPOINT.to_string(),
            http,
        })
    }

    fn point_url(&self, lat: f64, lng: f64, now: DateTime<Utc>, hours: u32) -> Result<Url> {
        let (start, end) = forecast_range(now, hours);
        let url = Url::parse_with_params(
            &self.endpoint,
            &[
                ("lat", lat.to_string()),
                ("lng", lng.to_string()),
                ("params", Parameter::query_list()),
                ("start", start),
                ("end", end),
            ],
        )?;
        Ok(url)
    }
}

/// Start (current hour) and end of the requested forecast, UTC with a `Z`.
fn forecast_range(now: DateTime<Utc>, hours: u32) -> (String, String) {
    const FORMAT: &str = "%Y-%m-%dT%H:00:00Z";
    let end = now + TimeDelta::hours(i64::from(hours));
    (
        now.format(FORMAT).to_string(),
        end.format(FORMAT).to_string(),
    )
}

#[async_trait]
impl ForecastApi for StormglassClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_hours(
        &self,
        lat: f64,
        lng: f64,
        hours: u32,
    ) -> Result<Vec<RawHourlyReading>> {
        let url = self.point_url(lat, lng, Utc::now(), hours)?;

        let bytes = fetch_bytes(self.http.as_ref(), url.as_str())
            .await
            .map_err(|e| anyhow::anyhow!("Stormglass request failed: {}", e))?;
        debug!(bytes = bytes.len(), "Forecast bytes received, parsing");

        parse_forecast(&bytes)
    }
}
