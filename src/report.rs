//! Human-readable surf report for one location.

use chrono::{DateTime, NaiveDateTime};

use crate::analyzers::analyzer::Analysis;
use crate::analyzers::types::WindowResult;

const MISSING: &str = "—";

/// Renders the current conditions and the best session window.
pub fn build_report(place: &str, analysis: &Analysis) -> String {
    let Some(now) = analysis.current() else {
        return "No forecast data.".to_string();
    };

    // A window starting on an hour with no timestamp cannot be shown.
    let best_line = match &analysis.best {
        WindowResult::Found(w) if !w.start.is_empty() => {
            let partial = if w.partial {
                format!(" (only {} h of forecast)", w.hours)
            } else {
                String::new()
            };
            format!(
                "\n\n🕒 Best hours to surf: {}–{}{}\nRating: {:.2}",
                iso_to_hm(&w.start),
                iso_to_hm(&w.end),
                partial,
                w.average
            )
        }
        _ => "\n\n🕒 No suitable consecutive hours found.".to_string(),
    };

    format!(
        "📍 Spot: {place}\n\n\
         💨 Wind: {} m/s ({}°)\n\
         🌊 Wave: {} m\n\
         🌡️ Air: {}°C\n\
         🐚 Water: {}°C\
         {best_line}",
        value(now.wind_speed),
        now.wind_direction
            .map_or_else(|| MISSING.to_string(), |d| format!("{}", d.trunc() as i64)),
        value(now.wave_height),
        value(now.air_temperature),
        value(now.water_temperature),
    )
}

fn value(v: Option<f64>) -> String {
    v.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

/// Label used when a location has no geocoded name.
pub fn coordinates_label(lat: f64, lng: f64) -> String {
    format!("{lat:.4}, {lng:.4}")
}

/// Extracts `HH:MM` from an ISO-8601 timestamp, in the timestamp's own offset.
///
/// Accepts RFC 3339 (`Z` or `+hh:mm`) and offset-less timestamps. Anything
/// else is returned unchanged.
pub fn iso_to_hm(ts: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt.format("%H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%H:%M").to_string();
    }
    ts.to_string()
}
