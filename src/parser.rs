//! JSON parser for point-forecast payloads.

use anyhow::{Context, Result, anyhow};
use serde_json::Value;

use crate::forecast::{Parameter, RawHourlyReading, RawValue};

/// Decodes a provider payload (`{"hours": [...], "meta": {...}}`) into raw
/// hourly readings, in payload order.
///
/// An hour without a `time` string keeps an empty timestamp. Individual
/// parameters that are missing or malformed never fail the payload.
///
/// # Errors
///
/// Returns an error if the bytes are not JSON or carry no `hours` array.
pub fn parse_forecast(bytes: &[u8]) -> Result<Vec<RawHourlyReading>> {
    let payload: Value = serde_json::from_slice(bytes).context("forecast payload is not JSON")?;
    let hours = payload["hours"]
        .as_array()
        .ok_or_else(|| anyhow!("forecast payload has no `hours` array"))?;

    Ok(hours.iter().map(parse_hour).collect())
}

fn parse_hour(hour: &Value) -> RawHourlyReading {
    let time = hour["time"].as_str().unwrap_or_default();

    let values = Parameter::ALL
        .iter()
        .filter_map(|&p| RawValue::from_json(&hour[p.api_name()]).map(|v| (p, v)))
        .collect();

    RawHourlyReading {
        time: time.to_string(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::Source;

    #[test]
    fn test_parse_invalid_bytes() {
        let result = parse_forecast(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_payload_without_hours() {
        let result = parse_forecast(br#"{"errors": {"key": "API key is invalid"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_empty_hours() {
        let hours = parse_forecast(br#"{"hours": []}"#).unwrap();
        assert!(hours.is_empty());
    }

    #[test]
    fn test_parse_keeps_order_and_time() {
        let bytes = br#"{"hours": [
            {"time": "2025-11-27T15:00:00+00:00", "windSpeed": {"sg": 4.1, "noaa": 3.9}},
            {"time": "2025-11-27T16:00:00+00:00", "waveHeight": 1.3}
        ]}"#;
        let hours = parse_forecast(bytes).unwrap();

        assert_eq!(hours.len(), 2);
        assert_eq!(hours[0].time, "2025-11-27T15:00:00+00:00");
        assert_eq!(
            hours[0].get(Parameter::WindSpeed),
            Some(&RawValue::BySource(vec![(Source::Sg, 4.1), (Source::Noaa, 3.9)]))
        );
        assert_eq!(hours[1].get(Parameter::WaveHeight), Some(&RawValue::Scalar(1.3)));
        assert_eq!(hours[1].get(Parameter::WindSpeed), None);
    }

    #[test]
    fn test_parse_keeps_hours_without_time() {
        let bytes = br#"{"hours": [{"windSpeed": 3.0}, {"time": "2025-11-27T16:00:00Z"}]}"#;
        let hours = parse_forecast(bytes).unwrap();

        assert_eq!(hours.len(), 2);
        assert_eq!(hours[0].time, "");
        assert_eq!(hours[1].time, "2025-11-27T16:00:00Z");
    }

    #[test]
    fn test_parse_malformed_parameter_does_not_fail_hour() {
        let bytes = br#"{"hours": [{"time": "t0", "windSpeed": "calm", "waveHeight": 1.0}]}"#;
        let hours = parse_forecast(bytes).unwrap();

        assert_eq!(hours[0].get(Parameter::WindSpeed), Some(&RawValue::Unrecognized));
        assert_eq!(hours[0].get(Parameter::WaveHeight), Some(&RawValue::Scalar(1.0)));
    }
}
