use anyhow::{Context, Result};
use surf_rater::analyzers::analyzer::{Analysis, analyze};
use surf_rater::config::Settings;
use surf_rater::report::{build_report, coordinates_label};
use tracing::{info, warn};

use crate::services::forecast_api::{ForecastApi, GeocodeApi};

/// A rendered report plus what it was rendered from.
pub struct SurfReport {
    pub place: String,
    pub analysis: Analysis,
    pub text: String,
}

/// Fetches the place name and the forecast concurrently, then scores the
/// forecast and renders the report.
///
/// A geocoding failure only costs the place name; a forecast failure is an
/// error. A given `place` is used as-is and the geocoder is not called.
#[tracing::instrument(skip(forecast, geocoder, settings))]
pub async fn surf_report<F, G>(
    forecast: &F,
    geocoder: &G,
    lat: f64,
    lng: f64,
    place: Option<&str>,
    settings: &Settings,
) -> Result<SurfReport>
where
    F: ForecastApi + ?Sized,
    G: GeocodeApi + ?Sized,
{
    let lookup = async {
        match place {
            Some(name) => Ok(Some(name.to_string())),
            None => geocoder.reverse(lat, lng).await,
        }
    };
    let (place, hours) = tokio::join!(
        lookup,
        forecast.fetch_hours(lat, lng, settings.forecast_hours),
    );

    let place = match place {
        Ok(Some(name)) => name,
        Ok(None) => coordinates_label(lat, lng),
        Err(e) => {
            warn!(error = %e, "Reverse geocoding failed, using coordinates");
            coordinates_label(lat, lng)
        }
    };
    let hours = hours.context("failed to fetch forecast")?;

    let analysis = analyze(&hours, &settings.scoring, &settings.window);
    info!(
        place = %place,
        hours = analysis.hours.len(),
        best_score = analysis.best.score(),
        "Surf report ready"
    );

    let text = build_report(&place, &analysis);
    Ok(SurfReport {
        place,
        analysis,
        text,
    })
}
