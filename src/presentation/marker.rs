//! Per-station map markers.

use crate::filtering::ReadingFilterExt;
use crate::presentation::format::{format_observed_at, with_unit};
use crate::types::lat_lon::LatLon;
use crate::types::station_reading::StationReading;
use crate::types::temperature_band::{classify_station_color, MarkerStyle, TemperatureBand};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Data shown when a station marker is clicked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationPopup {
    pub neighborhood: String,
    pub station_id: String,
    pub temperature: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub pressure: f64,
    pub observed_at: DateTime<Utc>,
    /// `observed_at` in Vienna local time, long German format.
    pub last_updated: String,
}

impl fmt::Display for StationPopup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.neighborhood)?;
        writeln!(f, "{}", self.station_id)?;
        writeln!(f, "Temperatur: {}", with_unit(Some(self.temperature), "°C"))?;
        writeln!(f, "Feuchtigkeit: {}", with_unit(Some(self.humidity), "%"))?;
        writeln!(f, "Windgeschwindigkeit: {}", with_unit(Some(self.windspeed), "km/h"))?;
        writeln!(f, "Luftdruck: {}", with_unit(Some(self.pressure), "mbar"))?;
        write!(f, "Zuletzt aktualisiert am: {}", self.last_updated)
    }
}

/// One station drawn on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMarker {
    pub position: LatLon,
    pub band: TemperatureBand,
    pub style: MarkerStyle,
    /// Temperature with its fraction truncated, e.g. `"-3"` for -3.7 °C.
    pub label: String,
    pub popup: StationPopup,
}

impl StationMarker {
    /// Builds a marker for a complete reading; `None` for incomplete ones.
    pub fn from_reading(reading: &StationReading) -> Option<Self> {
        if !reading.is_complete() {
            return None;
        }
        let (
            Some(lat),
            Some(lon),
            Some(temperature),
            Some(humidity),
            Some(windspeed),
            Some(pressure),
            Some(observed_at),
        ) = (
            reading.lat,
            reading.lon,
            reading.temperature,
            reading.humidity,
            reading.windspeed,
            reading.pressure,
            reading.observed_at,
        )
        else {
            return None;
        };

        Some(Self {
            position: LatLon(lat, lon),
            band: TemperatureBand::classify(Some(temperature)),
            style: classify_station_color(Some(temperature)),
            label: truncated_label(temperature),
            popup: StationPopup {
                neighborhood: reading.neighborhood.clone(),
                station_id: reading.station_id.clone(),
                temperature,
                humidity,
                windspeed,
                pressure,
                observed_at,
                last_updated: format_observed_at(observed_at),
            },
        })
    }
}

fn truncated_label(temperature: f64) -> String {
    // `as` saturates, and -0.0 prints as "0"
    format!("{}", temperature.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::tests::complete_reading;

    #[test]
    fn test_marker_from_complete_reading() {
        let marker = StationMarker::from_reading(&complete_reading("IWIEN8", 21.45)).unwrap();
        assert_eq!(marker.position, LatLon(48.2105, 16.3470));
        assert_eq!(marker.band, TemperatureBand::TwentyToTwentyFive);
        assert_eq!(marker.style, MarkerStyle("marker-20-25"));
        assert_eq!(marker.label, "21");
        assert_eq!(marker.popup.station_id, "IWIEN8");
        assert_eq!(marker.popup.last_updated, "Dienstag, 15. Juni 2021 14:30");
    }

    #[test]
    fn test_label_truncates_toward_zero() {
        assert_eq!(truncated_label(12.9), "12");
        assert_eq!(truncated_label(-3.7), "-3");
        assert_eq!(truncated_label(-0.5), "0");
        assert_eq!(truncated_label(35.0), "35");
    }

    #[test]
    fn test_style_uses_unrounded_temperature() {
        // 4.99 truncates to "4" and must stay in the 0-5 band
        let marker = StationMarker::from_reading(&complete_reading("A", 4.99)).unwrap();
        assert_eq!(marker.label, "4");
        assert_eq!(marker.band, TemperatureBand::ZeroToFive);
    }

    #[test]
    fn test_incomplete_reading_has_no_marker() {
        let reading = StationReading {
            windspeed: None,
            ..complete_reading("A", 10.0)
        };
        assert!(StationMarker::from_reading(&reading).is_none());
    }

    #[test]
    fn test_popup_text() {
        let marker = StationMarker::from_reading(&complete_reading("IWIEN8", 21.4)).unwrap();
        let text = marker.popup.to_string();
        assert!(text.starts_with("Josefstadt\nIWIEN8\n"));
        assert!(text.contains("Temperatur: 21.4 °C"));
        assert!(text.contains("Feuchtigkeit: 48 %"));
        assert!(text.contains("Windgeschwindigkeit: 4.3 km/h"));
        assert!(text.contains("Luftdruck: 1016.4 mbar"));
        assert!(text.ends_with("Zuletzt aktualisiert am: Dienstag, 15. Juni 2021 14:30"));
    }
}
