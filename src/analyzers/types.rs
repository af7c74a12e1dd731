//! Data types used by the scoring pipeline.

use serde::Serialize;

/// One forecast hour with every parameter reduced to a single value.
///
/// `None` means the provider had nothing usable for that parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedHourlyRecord {
    pub time: String,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wave_height: Option<f64>,
    pub wave_period: Option<f64>,
    pub wave_direction: Option<f64>,
    pub swell_height: Option<f64>,
    pub swell_period: Option<f64>,
    pub swell_direction: Option<f64>,
    pub air_temperature: Option<f64>,
    pub water_temperature: Option<f64>,
}

/// A normalized hour paired with its suitability score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredHour {
    pub record: NormalizedHourlyRecord,
    pub score: f64,
}

/// The best contiguous run of hours found by the window finder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestWindow {
    pub start: String,
    pub end: String,
    /// Mean score over the hours actually in the window.
    pub average: f64,
    pub hours: usize,
    /// Fewer hours were available than the requested block length.
    pub partial: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WindowResult {
    NoData,
    Found(BestWindow),
}

impl WindowResult {
    pub fn window(&self) -> Option<&BestWindow> {
        match self {
            WindowResult::Found(w) => Some(w),
            WindowResult::NoData => None,
        }
    }

    /// Average score of the window, `0.0` when there was no data.
    pub fn score(&self) -> f64 {
        self.window().map_or(0.0, |w| w.average)
    }
}
