use crate::types::district::Selection;
use crate::types::station_reading::StationReading;

/// Completeness predicate applied to every reading before it is aggregated or drawn.
pub trait ReadingFilterExt {
    /// `true` iff position, temperature, humidity, wind speed, pressure and
    /// observation time are all present.
    ///
    /// A latitude or longitude of exactly `0.0` counts as missing, the API
    /// uses it for stations without a registered position.
    fn is_complete(&self) -> bool;
}

impl ReadingFilterExt for StationReading {
    fn is_complete(&self) -> bool {
        self.lat.is_some_and(|lat| lat != 0.0)
            && self.lon.is_some_and(|lon| lon != 0.0)
            && self.temperature.is_some()
            && self.humidity.is_some()
            && self.windspeed.is_some()
            && self.pressure.is_some()
            && self.observed_at.is_some()
    }
}

/// Whether `reading` should be shown for `selection`.
///
/// [`Selection::None`] rejects everything, even fully populated readings.
///
/// # Examples
///
/// ```
/// use wien_wetter::{is_complete, Selection, StationReading};
///
/// let reading: StationReading = serde_json::from_str(r#"{
///     "station_id": "A1", "neighborhood": "Prater",
///     "lat": 48.21, "lon": 16.40, "temp": 18.0, "humidity": 60,
///     "windspeed": 3.5, "pressure": 1015, "time": "2021-06-15T12:00:00Z"
/// }"#).unwrap();
///
/// assert!(is_complete(Selection::All, &reading));
/// assert!(!is_complete(Selection::None, &reading));
/// ```
pub fn is_complete(selection: Selection, reading: &StationReading) -> bool {
    !selection.is_none() && reading.is_complete()
}

/// The complete readings of `readings`, in their original order.
pub fn filter_complete(selection: Selection, readings: &[StationReading]) -> Vec<&StationReading> {
    readings
        .iter()
        .filter(|reading| is_complete(selection, reading))
        .collect()
}
