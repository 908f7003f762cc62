//! Colour-coded district polygons and their hover behaviour.

use crate::aggregation::DistrictStats;
use crate::presentation::format::with_unit;
use crate::reference::reference_data::DistrictShape;
use crate::types::district::District;
use crate::types::temperature_band::{classify_region_color, ColorCode, TemperatureBand};
use serde::Serialize;
use std::fmt;

pub const REGION_FILL_OPACITY: f64 = 0.6;
pub const REGION_STROKE_COLOR: ColorCode = ColorCode("#000000");
pub const REGION_STROKE_OPACITY: f64 = 1.0;
pub const REGION_STROKE_WEIGHT: f64 = 2.0;

pub const HIGHLIGHT_FILL_COLOR: ColorCode = ColorCode("#FFFFFF");
pub const HIGHLIGHT_FILL_OPACITY: f64 = 0.3;

/// Drawing style of a district polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionStyle {
    pub fill_color: ColorCode,
    pub fill_opacity: f64,
    pub stroke_color: ColorCode,
    pub stroke_opacity: f64,
    pub weight: f64,
}

impl RegionStyle {
    /// Style of a district whose average temperature is `avg_temp`.
    pub fn for_average(avg_temp: Option<f64>) -> Self {
        Self {
            fill_color: classify_region_color(avg_temp),
            fill_opacity: REGION_FILL_OPACITY,
            stroke_color: REGION_STROKE_COLOR,
            stroke_opacity: REGION_STROKE_OPACITY,
            weight: REGION_STROKE_WEIGHT,
        }
    }
}

/// Data shown when a district is clicked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictPopup {
    pub name: &'static str,
    /// e.g. `1070 Wien`
    pub postal_label: String,
    pub max_temp: Option<f64>,
    pub avg_temp: Option<f64>,
    pub min_temp: Option<f64>,
}

impl fmt::Display for DistrictPopup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.postal_label)?;
        writeln!(f, "Maximale Temperatur: {}", with_unit(self.max_temp, "°C"))?;
        writeln!(f, "Durchschnitt Temperatur: {}", with_unit(self.avg_temp, "°C"))?;
        write!(f, "Minimale Temperatur: {}", with_unit(self.min_temp, "°C"))
    }
}

/// A district polygon filled according to its average temperature.
///
/// The region remembers the style it was assigned when it was built, so
/// ending a hover restores exactly that style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictRegion {
    pub district: District,
    pub shape: DistrictShape,
    pub band: TemperatureBand,
    /// `"(7) Neubau"`
    pub tooltip: String,
    pub popup: DistrictPopup,
    assigned_style: RegionStyle,
    style: RegionStyle,
    hovered: bool,
}

impl DistrictRegion {
    pub fn new(shape: DistrictShape, stats: &DistrictStats) -> Self {
        let district = stats.district;
        let assigned_style = RegionStyle::for_average(stats.avg_temp);
        Self {
            district,
            shape,
            band: TemperatureBand::classify(stats.avg_temp),
            tooltip: format!("({}) {}", district.index(), district.name()),
            popup: DistrictPopup {
                name: district.name(),
                postal_label: district.postal_label(),
                max_temp: stats.max_temp,
                avg_temp: stats.avg_temp,
                min_temp: stats.min_temp,
            },
            assigned_style,
            style: assigned_style,
            hovered: false,
        }
    }

    /// The style currently drawn.
    pub fn style(&self) -> RegionStyle {
        self.style
    }

    /// The style derived from the district's statistics.
    pub fn assigned_style(&self) -> RegionStyle {
        self.assigned_style
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.style.fill_color = HIGHLIGHT_FILL_COLOR;
        self.style.fill_opacity = HIGHLIGHT_FILL_OPACITY;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.style.fill_color = self.assigned_style.fill_color;
        self.style.fill_opacity = self.assigned_style.fill_opacity;
    }
}
