//! Output formatting and persistence for scored forecasts.
//!
//! Supports pretty-printing, JSON serialization, and CSV append.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::analyzer::Analysis;
use crate::analyzers::types::ScoredHour;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Flat CSV row for one scored hour.
#[derive(Serialize)]
struct ScoredHourRow<'a> {
    time: &'a str,
    score: f64,
    wind_speed: Option<f64>,
    wind_direction: Option<f64>,
    wave_height: Option<f64>,
    wave_period: Option<f64>,
    wave_direction: Option<f64>,
    swell_height: Option<f64>,
    swell_period: Option<f64>,
    swell_direction: Option<f64>,
    air_temperature: Option<f64>,
    water_temperature: Option<f64>,
}

impl<'a> From<&'a ScoredHour> for ScoredHourRow<'a> {
    fn from(h: &'a ScoredHour) -> Self {
        let r = &h.record;
        Self {
            time: &r.time,
            score: h.score,
            wind_speed: r.wind_speed,
            wind_direction: r.wind_direction,
            wave_height: r.wave_height,
            wave_period: r.wave_period,
            wave_direction: r.wave_direction,
            swell_height: r.swell_height,
            swell_period: r.swell_period,
            swell_direction: r.swell_direction,
            air_temperature: r.air_temperature,
            water_temperature: r.water_temperature,
        }
    }
}

/// Logs an analysis using Rust's debug pretty-print format.
pub fn print_pretty(analysis: &Analysis) {
    debug!("{:#?}", analysis);
}

/// Logs an analysis as pretty-printed JSON.
pub fn print_json(analysis: &Analysis) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(analysis)?);
    Ok(())
}

/// Appends scored hours as rows to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_records(path: &str, hours: &[ScoredHour]) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, rows = hours.len(), "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for hour in hours {
        writer.serialize(ScoredHourRow::from(hour))?;
    }
    writer.flush()?;

    Ok(())
}
