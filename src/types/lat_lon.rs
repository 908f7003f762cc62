use serde::Serialize;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Serializes as a `[lat, lon]` pair, the order map libraries expect.
///
/// # Examples
///
/// ```
/// use wien_wetter::LatLon;
///
/// let stephansplatz = LatLon(48.2085, 16.3731);
/// assert_eq!(stephansplatz.0, 48.2085); // Latitude
/// assert_eq!(stephansplatz.1, 16.3731); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon(pub f64, pub f64);

/// Initial map centre used by the dashboard.
pub const VIENNA_CENTER: LatLon = LatLon(48.210033, 16.363449);
