//! Per-hour surf suitability scoring.
//!
//! The score is a weighted sum of three components, each on a 0-10 scale:
//! wind (calmer is better), wave height (closest to the peak height inside
//! the surfable band) and swell period (longer is better, up to a cap).

use serde::Deserialize;

use crate::analyzers::types::{NormalizedHourlyRecord, ScoredHour};

pub const WIND_WEIGHT: f64 = 0.35;
pub const WAVE_WEIGHT: f64 = 0.45;
pub const SWELL_WEIGHT: f64 = 0.20;

/// Upper end of every component scale.
pub const MAX_COMPONENT_SCORE: f64 = 10.0;

/// Wind speed substituted when none was reported; scores no wind points.
pub const ABSENT_WIND_SPEED: f64 = 999.0;
/// Above this speed the wind score is multiplied by [`STRONG_WIND_FACTOR`].
pub const STRONG_WIND_THRESHOLD: f64 = 12.0;
pub const STRONG_WIND_FACTOR: f64 = 0.5;

pub const WAVE_BAND_MIN: f64 = 0.5;
pub const WAVE_BAND_MAX: f64 = 2.5;
pub const WAVE_PEAK: f64 = 1.2;
/// Points lost per unit of height away from the peak, inside the band.
pub const WAVE_PENALTY_PER_UNIT: f64 = 4.0;
/// Out-of-band score at the peak distance of zero; decays one point per unit.
pub const WAVE_OUT_OF_BAND_BASE: f64 = 2.0;
/// Wave height substituted when none was reported.
pub const ABSENT_WAVE_HEIGHT: f64 = 0.0;

/// Periods at or above this score the full swell points.
pub const SWELL_PERIOD_CAP: f64 = 14.0;

/// Tunable scoring constants. The default reproduces the reference weights.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub wind_weight: f64,
    pub wave_weight: f64,
    pub swell_weight: f64,
    pub absent_wind_speed: f64,
    pub strong_wind_threshold: f64,
    pub strong_wind_factor: f64,
    pub wave_band_min: f64,
    pub wave_band_max: f64,
    pub wave_peak: f64,
    pub wave_penalty_per_unit: f64,
    pub wave_out_of_band_base: f64,
    pub absent_wave_height: f64,
    pub swell_period_cap: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            wind_weight: WIND_WEIGHT,
            wave_weight: WAVE_WEIGHT,
            swell_weight: SWELL_WEIGHT,
            absent_wind_speed: ABSENT_WIND_SPEED,
            strong_wind_threshold: STRONG_WIND_THRESHOLD,
            strong_wind_factor: STRONG_WIND_FACTOR,
            wave_band_min: WAVE_BAND_MIN,
            wave_band_max: WAVE_BAND_MAX,
            wave_peak: WAVE_PEAK,
            wave_penalty_per_unit: WAVE_PENALTY_PER_UNIT,
            wave_out_of_band_base: WAVE_OUT_OF_BAND_BASE,
            absent_wave_height: ABSENT_WAVE_HEIGHT,
            swell_period_cap: SWELL_PERIOD_CAP,
        }
    }
}

fn reading(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite()).map(|x| x.max(0.0))
}

/// Wind component: `10 - speed`, floored at zero and halved in strong wind.
pub fn wind_score(wind_speed: Option<f64>, config: &ScoringConfig) -> f64 {
    let speed = reading(wind_speed).unwrap_or(config.absent_wind_speed);
    let base = (MAX_COMPONENT_SCORE - speed).max(0.0);

    if speed > config.strong_wind_threshold {
        base * config.strong_wind_factor
    } else {
        base
    }
}

/// Wave component: peaks at [`WAVE_PEAK`] inside the band, collapses outside it.
pub fn wave_score(wave_height: Option<f64>, config: &ScoringConfig) -> f64 {
    let height = reading(wave_height).unwrap_or(config.absent_wave_height);
    let distance = (height - config.wave_peak).abs();

    let score = if (config.wave_band_min..=config.wave_band_max).contains(&height) {
        MAX_COMPONENT_SCORE - distance * config.wave_penalty_per_unit
    } else {
        config.wave_out_of_band_base - distance
    };

    score.clamp(0.0, MAX_COMPONENT_SCORE)
}

/// Swell component: swell period, or wave period when swell is missing,
/// scaled linearly to 0-10 up to the cap.
pub fn swell_score(
    swell_period: Option<f64>,
    wave_period: Option<f64>,
    config: &ScoringConfig,
) -> f64 {
    let Some(period) = reading(swell_period).or_else(|| reading(wave_period)) else {
        return 0.0;
    };
    if config.swell_period_cap <= 0.0 {
        return 0.0;
    }

    period.min(config.swell_period_cap) / config.swell_period_cap * MAX_COMPONENT_SCORE
}

/// Composite suitability score for one hour. Total over every input.
pub fn score_hour(record: &NormalizedHourlyRecord, config: &ScoringConfig) -> f64 {
    let wind = wind_score(record.wind_speed, config);
    let wave = wave_score(record.wave_height, config);
    let swell = swell_score(record.swell_period, record.wave_period, config);

    wind * config.wind_weight + wave * config.wave_weight + swell * config.swell_weight
}

/// Scores every record, preserving order.
pub fn score_hours(
    records: Vec<NormalizedHourlyRecord>,
    config: &ScoringConfig,
) -> Vec<ScoredHour> {
    records
        .into_iter()
        .map(|record| {
            let score = score_hour(&record, config);
            ScoredHour { record, score }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn record(
        wind: Option<f64>,
        wave: Option<f64>,
        swell: Option<f64>,
        wave_period: Option<f64>,
    ) -> NormalizedHourlyRecord {
        NormalizedHourlyRecord {
            time: "2025-11-27T15:00:00+00:00".to_string(),
            wind_speed: wind,
            wave_height: wave,
            swell_period: swell,
            wave_period,
            ..Default::default()
        }
    }

    #[test]
    fn test_calm_moderate_long_period() {
        let config = ScoringConfig::default();
        let r = record(Some(5.0), Some(1.2), Some(12.0), None);

        assert!((wind_score(r.wind_speed, &config) - 5.0).abs() < EPS);
        assert!((wave_score(r.wave_height, &config) - 10.0).abs() < EPS);
        assert!((swell_score(r.swell_period, r.wave_period, &config) - 120.0 / 14.0).abs() < EPS);

        let expected = 0.35 * 5.0 + 0.45 * 10.0 + 0.20 * (120.0 / 14.0);
        assert!((score_hour(&r, &config) - expected).abs() < EPS);
        assert!((score_hour(&r, &config) - 7.96).abs() < 0.01);
    }

    #[test]
    fn test_strong_wind_falls_back_to_wave_period() {
        let config = ScoringConfig::default();
        let r = record(Some(15.0), Some(1.2), None, Some(8.0));

        assert_eq!(wind_score(r.wind_speed, &config), 0.0);
        assert!((swell_score(r.swell_period, r.wave_period, &config) - 80.0 / 14.0).abs() < EPS);
        assert!((score_hour(&r, &config) - 5.64).abs() < 0.01);
    }

    #[test]
    fn test_strong_wind_halves_remaining_score() {
        let config = ScoringConfig {
            strong_wind_threshold: 4.0,
            ..Default::default()
        };
        assert!((wind_score(Some(6.0), &config) - 2.0).abs() < EPS);
    }

    #[test]
    fn test_absent_wind_scores_nothing() {
        let config = ScoringConfig::default();
        assert_eq!(wind_score(None, &config), 0.0);
    }

    #[test]
    fn test_calm_wind_is_a_reading_not_absence() {
        let config = ScoringConfig::default();
        assert_eq!(wind_score(Some(0.0), &config), 10.0);
    }

    #[test]
    fn test_wave_band_edges() {
        let config = ScoringConfig::default();
        assert!((wave_score(Some(0.5), &config) - 7.2).abs() < EPS);
        assert!((wave_score(Some(2.5), &config) - 4.8).abs() < EPS);
        assert!((wave_score(Some(0.4), &config) - 1.2).abs() < EPS);
        assert!((wave_score(Some(2.6), &config) - 0.6).abs() < EPS);
    }

    #[test]
    fn test_wave_far_out_of_band_is_floored() {
        let config = ScoringConfig::default();
        assert_eq!(wave_score(Some(8.0), &config), 0.0);
    }

    #[test]
    fn test_swell_period_is_capped() {
        let config = ScoringConfig::default();
        assert_eq!(swell_score(Some(20.0), None, &config), 10.0);
        assert_eq!(swell_score(None, None, &config), 0.0);
    }

    #[test]
    fn test_all_absent_is_deterministic_baseline() {
        let config = ScoringConfig::default();
        let r = NormalizedHourlyRecord::default();
        let score = score_hour(&r, &config);

        assert!(score.is_finite());
        // wave height falls back to 0.0, out of band: 2 - 1.2 = 0.8
        assert!((score - 0.45 * 0.8).abs() < EPS);
        assert_eq!(score, score_hour(&r, &config));
    }

    #[test]
    fn test_extreme_values_are_finite() {
        let config = ScoringConfig::default();
        let r = record(Some(1000.0), Some(1000.0), Some(1000.0), Some(-5.0));
        let score = score_hour(&r, &config);

        assert!(score.is_finite());
        assert!((score - 0.20 * 10.0).abs() < EPS);

        let r = record(Some(-50.0), Some(-2.0), None, Some(-5.0));
        let score = score_hour(&r, &config);
        assert!(score.is_finite());
        assert!(score <= MAX_COMPONENT_SCORE);
    }

    #[test]
    fn test_score_hours_keeps_order() {
        let config = ScoringConfig::default();
        let scored = score_hours(
            vec![
                record(Some(5.0), Some(1.2), Some(12.0), None),
                NormalizedHourlyRecord::default(),
            ],
            &config,
        );
        assert_eq!(scored.len(), 2);
        assert!(scored[0].score > scored[1].score);
    }

    #[test]
    fn test_partial_profile_keeps_defaults() {
        let config: ScoringConfig = serde_json::from_str(r#"{"wind_weight": 0.5}"#).unwrap();
        assert_eq!(config.wind_weight, 0.5);
        assert_eq!(config.wave_weight, WAVE_WEIGHT);
        assert_eq!(config.swell_period_cap, SWELL_PERIOD_CAP);
    }
}
