//! Source reduction: one value per parameter per hour.

use crate::analyzers::types::NormalizedHourlyRecord;
use crate::forecast::{Parameter, RawHourlyReading, RawValue, Source};

/// Collapses one parameter's raw value into a single number.
///
/// Scalars pass through. Per-source mappings take the first source found in
/// [`Source::PRIORITY`], otherwise the first entry in payload order. Missing,
/// empty, unreadable and non-finite values all come back as `None`.
pub fn reduce(raw: Option<&RawValue>) -> Option<f64> {
    let value = match raw? {
        RawValue::Scalar(v) => *v,
        RawValue::BySource(entries) => Source::PRIORITY
            .iter()
            .find_map(|preferred| {
                entries
                    .iter()
                    .find(|(source, _)| source == preferred)
                    .map(|(_, v)| *v)
            })
            .or_else(|| entries.first().map(|(_, v)| *v))?,
        RawValue::Unrecognized => return None,
    };

    value.is_finite().then_some(value)
}

/// Builds the normalized record for one hour. The timestamp is copied as is.
pub fn normalize_hour(raw: &RawHourlyReading) -> NormalizedHourlyRecord {
    let pick = |p: Parameter| reduce(raw.get(p));

    NormalizedHourlyRecord {
        time: raw.time.clone(),
        wind_speed: pick(Parameter::WindSpeed),
        wind_direction: pick(Parameter::WindDirection),
        wave_height: pick(Parameter::WaveHeight),
        wave_period: pick(Parameter::WavePeriod),
        wave_direction: pick(Parameter::WaveDirection),
        swell_height: pick(Parameter::SwellHeight),
        swell_period: pick(Parameter::SwellPeriod),
        swell_direction: pick(Parameter::SwellDirection),
        air_temperature: pick(Parameter::AirTemperature),
        water_temperature: pick(Parameter::WaterTemperature),
    }
}

/// Normalizes a whole forecast, keeping the provider's order.
pub fn normalize_hours(raw: &[RawHourlyReading]) -> Vec<NormalizedHourlyRecord> {
    raw.iter().map(normalize_hour).collect()
}
