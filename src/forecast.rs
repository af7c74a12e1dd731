//! Raw point-forecast model as delivered by the forecast provider.
//!
//! Every tracked parameter is either a plain number or a mapping from
//! source-model name to number. Nothing here is reduced yet; see
//! [`crate::analyzers::reduce`] for that.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// The ten parameters requested for every forecast hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    WindSpeed,
    WindDirection,
    WaveHeight,
    WavePeriod,
    WaveDirection,
    SwellHeight,
    SwellPeriod,
    SwellDirection,
    AirTemperature,
    WaterTemperature,
}

impl Parameter {
    pub const ALL: [Parameter; 10] = [
        Parameter::WindSpeed,
        Parameter::WindDirection,
        Parameter::WaveHeight,
        Parameter::WavePeriod,
        Parameter::WaveDirection,
        Parameter::SwellHeight,
        Parameter::SwellPeriod,
        Parameter::SwellDirection,
        Parameter::AirTemperature,
        Parameter::WaterTemperature,
    ];

    /// Field name used by the provider, both in the query and in the payload.
    pub fn api_name(self) -> &'static str {
        match self {
            Parameter::WindSpeed => "windSpeed",
            Parameter::WindDirection => "windDirection",
            Parameter::WaveHeight => "waveHeight",
            Parameter::WavePeriod => "wavePeriod",
            Parameter::WaveDirection => "waveDirection",
            Parameter::SwellHeight => "swellHeight",
            Parameter::SwellPeriod => "swellPeriod",
            Parameter::SwellDirection => "swellDirection",
            Parameter::AirTemperature => "airTemperature",
            Parameter::WaterTemperature => "waterTemperature",
        }
    }

    /// Comma-joined list of all parameter names, as the provider expects it.
    pub fn query_list() -> String {
        Parameter::ALL
            .iter()
            .map(|p| p.api_name())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

/// Source model that produced a value.
///
/// The named variants are the ones we rank; anything else the provider sends
/// is kept verbatim in [`Source::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// National weather service.
    Noaa,
    /// The provider's own marine blend.
    Sg,
    Gfs,
    Icon,
    Nam,
    Other(String),
}

impl Source {
    /// Ranked sources, most preferred first.
    pub const PRIORITY: [Source; 5] = [
        Source::Noaa,
        Source::Sg,
        Source::Gfs,
        Source::Icon,
        Source::Nam,
    ];

    pub fn from_key(key: &str) -> Self {
        match key {
            "noaa" => Source::Noaa,
            "sg" => Source::Sg,
            "gfs" => Source::Gfs,
            "icon" => Source::Icon,
            "nam" => Source::Nam,
            other => Source::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Source::Noaa => "noaa",
            Source::Sg => "sg",
            Source::Gfs => "gfs",
            Source::Icon => "icon",
            Source::Nam => "nam",
            Source::Other(name) => name,
        }
    }
}

/// One parameter's value for one hour, before source reduction.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Scalar(f64),
    /// Values per source, in payload order. Non-numeric entries are dropped.
    BySource(Vec<(Source, f64)>),
    /// The provider sent something we cannot read as a number.
    Unrecognized,
}

impl RawValue {
    /// Interprets a JSON value. `null` means "not reported" and yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) => Some(n.as_f64().map_or(RawValue::Unrecognized, RawValue::Scalar)),
            Value::Object(map) => Some(RawValue::BySource(
                map.iter()
                    .filter_map(|(key, v)| v.as_f64().map(|n| (Source::from_key(key), n)))
                    .collect(),
            )),
            _ => Some(RawValue::Unrecognized),
        }
    }
}

/// One forecast hour exactly as the provider reported it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawHourlyReading {
    /// ISO-8601 timestamp, passed through untouched.
    pub time: String,
    pub values: HashMap<Parameter, RawValue>,
}

impl RawHourlyReading {
    pub fn new(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            values: HashMap::new(),
        }
    }

    pub fn with(mut self, parameter: Parameter, value: RawValue) -> Self {
        self.values.insert(parameter, value);
        self
    }

    pub fn get(&self, parameter: Parameter) -> Option<&RawValue> {
        self.values.get(&parameter)
    }
}
