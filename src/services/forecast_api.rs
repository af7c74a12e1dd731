//! Traits for the external data sources a surf report needs.

use anyhow::Result;
use surf_rater::forecast::RawHourlyReading;

/// Supplies hourly point forecasts.
#[async_trait::async_trait]
pub trait ForecastApi: Send + Sync {
    /// Returns the raw hours for the `hours` starting at the current hour,
    /// in chronological order.
    async fn fetch_hours(&self, lat: f64, lng: f64, hours: u32)
    -> Result<Vec<RawHourlyReading>>;
}

/// Turns coordinates into a place name.
#[async_trait::async_trait]
pub trait GeocodeApi: Send + Sync {
    /// `Ok(None)` when the service knows no name for the location.
    async fn reverse(&self, lat: f64, lng: f64) -> Result<Option<String>>;
}
