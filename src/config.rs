//! Environment configuration.
//!
//! Everything comes from environment variables (a `.env` file is loaded by
//! the binary before this runs). Scoring constants can be overridden by a
//! JSON profile:
//! ```json
//! { "wind_weight": 0.4, "strong_wind_threshold": 10.0 }
//! ```
//! Fields left out of the profile keep their defaults.

use anyhow::{Context, Result};
use std::str::FromStr;

use crate::analyzers::score::ScoringConfig;
use crate::analyzers::window::WindowConfig;

pub const DEFAULT_FORECAST_HOURS: u32 = 24;
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/surf_rater.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub stormglass_api_key: Option<String>,
    /// How many hours of forecast to request from the provider.
    pub forecast_hours: u32,
    pub scoring: ScoringConfig,
    pub window: WindowConfig,
    pub log_file_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stormglass_api_key: None,
            forecast_hours: DEFAULT_FORECAST_HOURS,
            scoring: ScoringConfig::default(),
            window: WindowConfig::default(),
            log_file_path: DEFAULT_LOG_FILE_PATH.to_string(),
        }
    }
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Settings::default();

        let scoring = match get("SCORING_PROFILE_PATH") {
            Some(path) => load_scoring_profile(&path)?,
            None => defaults.scoring,
        };

        Ok(Self {
            stormglass_api_key: get("STORMGLASS_API_KEY"),
            forecast_hours: parse_or(
                get("FORECAST_HOURS"),
                "FORECAST_HOURS",
                defaults.forecast_hours,
            )?,
            scoring,
            window: WindowConfig {
                block_hours: parse_or(
                    get("BEST_WINDOW_HOURS"),
                    "BEST_WINDOW_HOURS",
                    defaults.window.block_hours,
                )?,
                lookahead_hours: parse_or(
                    get("BEST_WINDOW_LOOKAHEAD"),
                    "BEST_WINDOW_LOOKAHEAD",
                    defaults.window.lookahead_hours,
                )?,
            },
            log_file_path: get("LOG_FILE_PATH").unwrap_or(defaults.log_file_path),
        })
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a non-negative integer, got '{v}'")),
        None => Ok(default),
    }
}

/// Loads a scoring profile from a JSON file at `path`.
pub fn load_scoring_profile(path: &str) -> Result<ScoringConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scoring profile '{path}'"))?;
    serde_json::from_str(&content).with_context(|| format!("invalid scoring profile '{path}'"))
}
