use crate::filtering::ReadingFilterExt;
use crate::types::station_reading::StationReading;
use serde::Serialize;

/// A weighted point of the heat-intensity map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatPoint {
    pub lat: f64,
    pub lon: f64,
    /// Temperature in °C.
    pub intensity: f64,
}

/// Heat points of the complete readings in `readings`.
pub fn heat_points<'a>(readings: impl IntoIterator<Item = &'a StationReading>) -> Vec<HeatPoint> {
    readings
        .into_iter()
        .filter(|reading| reading.is_complete())
        .filter_map(|reading| {
            Some(HeatPoint {
                lat: reading.lat?,
                lon: reading.lon?,
                intensity: reading.temperature?,
            })
        })
        .collect()
}
