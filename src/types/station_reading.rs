//! The latest sample of one weather station as delivered by the data API.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Europe::Vienna;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One weather station's latest reading.
///
/// Every measurement is optional: the upstream API regularly reports `null`
/// for stations that are offline or only partially equipped. Numbers may be
/// encoded as JSON numbers or as numeric strings; anything unparseable is
/// read as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReading {
    /// Identifier of the station, unique within a district.
    #[serde(default, deserialize_with = "lenient_string")]
    pub station_id: String,
    /// Name of the neighbourhood the station is located in.
    #[serde(default, deserialize_with = "lenient_string")]
    pub neighborhood: String,
    /// Latitude in decimal degrees.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,
    /// Longitude in decimal degrees.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lon: Option<f64>,
    /// Air temperature in °C.
    #[serde(rename = "temp", default, deserialize_with = "lenient_f64")]
    pub temperature: Option<f64>,
    /// Relative humidity in %.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub humidity: Option<f64>,
    /// Wind speed in km/h.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub windspeed: Option<f64>,
    /// Air pressure in mbar.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub pressure: Option<f64>,
    /// Time of the observation. A `time` string that cannot be parsed is read
    /// as missing, which makes the reading incomplete.
    #[serde(rename = "time", default, deserialize_with = "lenient_datetime")]
    pub observed_at: Option<DateTime<Utc>>,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

fn lenient_datetime<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => parse_timestamp(&s),
        Some(Value::Number(n)) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    })
}

/// Accepts RFC 3339 timestamps and zone-less `YYYY-MM-DD[ T]HH:MM:SS[.fff]`,
/// the latter taken as Vienna local time. An ambiguous local time at the end
/// of summer time resolves to the earlier instant.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Vienna.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_full_reading() -> Result<(), serde_json::Error> {
        let json = r#"{
            "station_id": "IWIEN123",
            "neighborhood": "Spittelberg",
            "lat": 48.2035,
            "lon": 16.3549,
            "temp": 21.4,
            "humidity": 55,
            "windspeed": 7.2,
            "pressure": 1013.2,
            "time": "2021-06-15T12:30:00.000Z"
        }"#;
        let reading: StationReading = serde_json::from_str(json)?;
        assert_eq!(reading.station_id, "IWIEN123");
        assert_eq!(reading.temperature, Some(21.4));
        assert_eq!(reading.humidity, Some(55.0));
        assert_eq!(
            reading.observed_at,
            Some(Utc.with_ymd_and_hms(2021, 6, 15, 12, 30, 0).unwrap())
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_nulls_strings_and_missing_fields() -> Result<(), serde_json::Error> {
        let json = r#"{
            "station_id": 42,
            "lat": "48.1",
            "lon": null,
            "temp": "n/a",
            "pressure": "1009.5",
            "time": "2021-06-15 10:00:00"
        }"#;
        let reading: StationReading = serde_json::from_str(json)?;
        assert_eq!(reading.station_id, "42");
        assert_eq!(reading.neighborhood, "");
        assert_eq!(reading.lat, Some(48.1));
        assert_eq!(reading.lon, None);
        assert_eq!(reading.temperature, None);
        assert_eq!(reading.humidity, None);
        assert_eq!(reading.pressure, Some(1009.5));
        assert_eq!(
            reading.observed_at,
            Some(Utc.with_ymd_and_hms(2021, 6, 15, 8, 0, 0).unwrap())
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_epoch_millis() -> Result<(), serde_json::Error> {
        let reading: StationReading = serde_json::from_str(r#"{"time": 1623760200000}"#)?;
        assert_eq!(
            reading.observed_at,
            Some(Utc.with_ymd_and_hms(2021, 6, 15, 12, 30, 0).unwrap())
        );
        Ok(())
    }

    #[test]
    fn test_unparseable_time_is_missing() -> Result<(), serde_json::Error> {
        let reading: StationReading = serde_json::from_str(r#"{"time": "gestern"}"#)?;
        assert_eq!(reading.observed_at, None);
        Ok(())
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2021-06-15T12:30:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
        assert_eq!(
            parse_timestamp("2021-06-15T14:30:00+02:00"),
            Some(Utc.with_ymd_and_hms(2021, 6, 15, 12, 30, 0).unwrap())
        );
        // zone-less values are Vienna local time
        assert_eq!(
            parse_timestamp("2021-06-15T14:30:00+02:00"),
            parse_timestamp("2021-06-15 14:30:00")
        );
        assert_eq!(
            parse_timestamp("2021-12-24 18:05:00"),
            Some(Utc.with_ymd_and_hms(2021, 12, 24, 17, 5, 0).unwrap())
        );
    }

    #[test]
    fn test_local_timestamp_keeps_wall_clock() {
        let observed = parse_timestamp("2021-06-15 14:30:00").unwrap();
        assert_eq!(
            crate::presentation::format::format_observed_at(observed),
            "Dienstag, 15. Juni 2021 14:30"
        );
    }

    #[test]
    fn test_ambiguous_local_time_takes_earlier() {
        // 02:30 occurs twice on 2021-10-31 in Vienna
        assert_eq!(
            parse_timestamp("2021-10-31 02:30:00"),
            Some(Utc.with_ymd_and_hms(2021, 10, 31, 0, 30, 0).unwrap())
        );
        // 02:30 does not exist on 2021-03-28
        assert_eq!(parse_timestamp("2021-03-28 02:30:00"), None);
    }
}
