//! Temperature classification used for marker icons, region fills and the legend.

use serde::Serialize;
use std::fmt;

/// CSS class of a station marker icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MarkerStyle(pub &'static str);

/// Hex colour (`#RRGGBB`) used to fill a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorCode(pub &'static str);

impl fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<&str> for ColorCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One of the ten temperature bands shown on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    BelowZero,
    ZeroToFive,
    FiveToTen,
    TenToFifteen,
    FifteenToTwenty,
    TwentyToTwentyFive,
    TwentyFiveToThirty,
    ThirtyToThirtyFive,
    AboveThirtyFive,
    /// No temperature was reported.
    NoTemperature,
}

/// Ordered `(lower inclusive, upper exclusive, band)` table. Consecutive entries
/// share their boundary so the intervals tile the whole real line.
const BAND_TABLE: [(f64, f64, TemperatureBand); 9] = [
    (f64::NEG_INFINITY, 0.0, TemperatureBand::BelowZero),
    (0.0, 5.0, TemperatureBand::ZeroToFive),
    (5.0, 10.0, TemperatureBand::FiveToTen),
    (10.0, 15.0, TemperatureBand::TenToFifteen),
    (15.0, 20.0, TemperatureBand::FifteenToTwenty),
    (20.0, 25.0, TemperatureBand::TwentyToTwentyFive),
    (25.0, 30.0, TemperatureBand::TwentyFiveToThirty),
    (30.0, 35.0, TemperatureBand::ThirtyToThirtyFive),
    (35.0, f64::INFINITY, TemperatureBand::AboveThirtyFive),
];

impl TemperatureBand {
    /// Every band in legend order, the "no temperature" band last.
    pub const ALL: [TemperatureBand; 10] = [
        TemperatureBand::BelowZero,
        TemperatureBand::ZeroToFive,
        TemperatureBand::FiveToTen,
        TemperatureBand::TenToFifteen,
        TemperatureBand::FifteenToTwenty,
        TemperatureBand::TwentyToTwentyFive,
        TemperatureBand::TwentyFiveToThirty,
        TemperatureBand::ThirtyToThirtyFive,
        TemperatureBand::AboveThirtyFive,
        TemperatureBand::NoTemperature,
    ];

    /// Classifies a temperature in °C.
    ///
    /// `None` and `NaN` are checked before any numeric comparison and always
    /// land in [`TemperatureBand::NoTemperature`]. `+∞` belongs to the top band.
    ///
    /// # Examples
    ///
    /// ```
    /// use wien_wetter::TemperatureBand;
    ///
    /// assert_eq!(TemperatureBand::classify(Some(-0.01)), TemperatureBand::BelowZero);
    /// assert_eq!(TemperatureBand::classify(Some(0.0)), TemperatureBand::ZeroToFive);
    /// assert_eq!(TemperatureBand::classify(Some(35.0)), TemperatureBand::AboveThirtyFive);
    /// assert_eq!(TemperatureBand::classify(None), TemperatureBand::NoTemperature);
    /// ```
    pub fn classify(temp: Option<f64>) -> TemperatureBand {
        let Some(temp) = temp.filter(|t| !t.is_nan()) else {
            return TemperatureBand::NoTemperature;
        };
        BAND_TABLE
            .iter()
            .find(|(lower, upper, _)| *lower <= temp && temp < *upper)
            .map(|(_, _, band)| *band)
            .unwrap_or(TemperatureBand::AboveThirtyFive)
    }

    /// The half-open `[lower, upper)` interval of this band, `None` for the
    /// "no temperature" band.
    pub fn bounds(self) -> Option<(f64, f64)> {
        BAND_TABLE
            .iter()
            .find(|(_, _, band)| *band == self)
            .map(|(lower, upper, _)| (*lower, *upper))
    }

    pub fn region_color(self) -> ColorCode {
        match self {
            TemperatureBand::BelowZero => ColorCode("#8DD0F3"),
            TemperatureBand::ZeroToFive => ColorCode("#83C18C"),
            TemperatureBand::FiveToTen => ColorCode("#75B360"),
            TemperatureBand::TenToFifteen => ColorCode("#C9D968"),
            TemperatureBand::FifteenToTwenty => ColorCode("#F5EE61"),
            TemperatureBand::TwentyToTwentyFive => ColorCode("#F7D65C"),
            TemperatureBand::TwentyFiveToThirty => ColorCode("#EDA84F"),
            TemperatureBand::ThirtyToThirtyFive => ColorCode("#E37947"),
            TemperatureBand::AboveThirtyFive => ColorCode("#DC4B42"),
            TemperatureBand::NoTemperature => ColorCode("#FFFFFF"),
        }
    }

    pub fn marker_style(self) -> MarkerStyle {
        match self {
            TemperatureBand::BelowZero => MarkerStyle("marker-below-0"),
            TemperatureBand::ZeroToFive => MarkerStyle("marker-0-5"),
            TemperatureBand::FiveToTen => MarkerStyle("marker-5-10"),
            TemperatureBand::TenToFifteen => MarkerStyle("marker-10-15"),
            TemperatureBand::FifteenToTwenty => MarkerStyle("marker-15-20"),
            TemperatureBand::TwentyToTwentyFive => MarkerStyle("marker-20-25"),
            TemperatureBand::TwentyFiveToThirty => MarkerStyle("marker-25-30"),
            TemperatureBand::ThirtyToThirtyFive => MarkerStyle("marker-30-35"),
            TemperatureBand::AboveThirtyFive => MarkerStyle("marker-above-35"),
            TemperatureBand::NoTemperature => MarkerStyle("marker-no-temp"),
        }
    }

    /// Legend label, e.g. `"10-15°C"`.
    pub fn label(self) -> &'static str {
        match self {
            TemperatureBand::BelowZero => "< 0°C",
            TemperatureBand::ZeroToFive => "0-5°C",
            TemperatureBand::FiveToTen => "5-10°C",
            TemperatureBand::TenToFifteen => "10-15°C",
            TemperatureBand::FifteenToTwenty => "15-20°C",
            TemperatureBand::TwentyToTwentyFive => "20-25°C",
            TemperatureBand::TwentyFiveToThirty => "25-30°C",
            TemperatureBand::ThirtyToThirtyFive => "30-35°C",
            TemperatureBand::AboveThirtyFive => "> 35°C",
            TemperatureBand::NoTemperature => "keine Temperatur",
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Marker icon class for a station's temperature.
pub fn classify_station_color(temp: Option<f64>) -> MarkerStyle {
    TemperatureBand::classify(temp).marker_style()
}

/// Fill colour for a district's average temperature.
pub fn classify_region_color(temp: Option<f64>) -> ColorCode {
    TemperatureBand::classify(temp).region_color()
}

/// One row of the map legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub band: TemperatureBand,
    pub label: &'static str,
    pub color: ColorCode,
    pub marker: MarkerStyle,
}

/// All legend rows in display order.
pub fn legend() -> Vec<LegendEntry> {
    TemperatureBand::ALL
        .iter()
        .map(|band| LegendEntry {
            band: *band,
            label: band.label(),
            color: band.region_color(),
            marker: band.marker_style(),
        })
        .collect()
}
