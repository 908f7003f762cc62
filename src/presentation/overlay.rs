//! Optional map layers drawn on top of the base map: water, green space and
//! the district outline underneath the heat map.

use crate::presentation::region::{
    RegionStyle, REGION_STROKE_COLOR, REGION_STROKE_OPACITY, REGION_STROKE_WEIGHT,
};
use crate::reference::reference_data::{DistrictShape, ReferenceData};
use crate::types::temperature_band::ColorCode;
use serde::Serialize;
use serde_json::Value;

/// Leaflet's default path colour, used for water bodies.
pub const WATER_COLOR: ColorCode = ColorCode("#3388ff");
pub const GREEN_SPACE_COLOR: ColorCode = ColorCode("green");

/// District borders shown under the heat map.
pub const HEAT_OUTLINE_STYLE: RegionStyle = RegionStyle {
    fill_color: ColorCode("#000000"),
    fill_opacity: 0.1,
    stroke_color: REGION_STROKE_COLOR,
    stroke_opacity: REGION_STROKE_OPACITY,
    weight: REGION_STROKE_WEIGHT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    Water,
    GreenSpace,
}

impl OverlayKind {
    /// Name shown in the layer switcher.
    pub fn label(self) -> &'static str {
        match self {
            OverlayKind::Water => "Gewässer",
            OverlayKind::GreenSpace => "Grünflächen",
        }
    }

    pub fn color(self) -> ColorCode {
        match self {
            OverlayKind::Water => WATER_COLOR,
            OverlayKind::GreenSpace => GREEN_SPACE_COLOR,
        }
    }
}

/// A toggleable layer of GeoJSON documents, hidden until switched on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLayer {
    pub kind: OverlayKind,
    pub label: &'static str,
    pub color: ColorCode,
    pub visible: bool,
    pub documents: Vec<Value>,
}

impl OverlayLayer {
    pub fn new(kind: OverlayKind, documents: Vec<Value>) -> Self {
        Self {
            kind,
            label: kind.label(),
            color: kind.color(),
            visible: false,
            documents,
        }
    }
}

/// All district borders with a uniform faint fill, independent of selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatOutline {
    pub style: RegionStyle,
    pub shapes: Vec<DistrictShape>,
}

/// Water and green-space layers; empty collections produce no layer.
pub fn overlay_layers(reference: &ReferenceData) -> Vec<OverlayLayer> {
    [
        (OverlayKind::Water, reference.water()),
        (OverlayKind::GreenSpace, reference.green_space()),
    ]
    .into_iter()
    .filter(|(_, documents)| !documents.is_empty())
    .map(|(kind, documents)| OverlayLayer::new(kind, documents.to_vec()))
    .collect()
}

pub fn heat_outline(reference: &ReferenceData) -> HeatOutline {
    HeatOutline {
        style: HEAT_OUTLINE_STYLE,
        shapes: reference.shapes().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::reference_data::tests::{all_squares, square};
    use serde_json::json;

    #[test]
    fn test_overlay_layers() {
        let river = json!({"type": "FeatureCollection", "features": []});
        let park = square(0.5);
        let reference = all_squares()
            .with_water(vec![river.clone()])
            .with_green_space(vec![park.clone(), park.clone()]);

        let layers = overlay_layers(&reference);
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].kind, OverlayKind::Water);
        assert_eq!(layers[0].label, "Gewässer");
        assert_eq!(layers[0].documents, vec![river]);
        assert_eq!(layers[1].color, "green");
        assert_eq!(layers[1].documents.len(), 2);
        assert!(layers.iter().all(|layer| !layer.visible));
    }

    #[test]
    fn test_missing_overlays_are_omitted() {
        let reference = all_squares().with_green_space(vec![square(0.5)]);
        let layers = overlay_layers(&reference);
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].kind, OverlayKind::GreenSpace);
        assert!(overlay_layers(&all_squares()).is_empty());
    }

    #[test]
    fn test_heat_outline_covers_all_districts() {
        let outline = heat_outline(&all_squares());
        assert_eq!(outline.shapes.len(), 23);
        assert_eq!(outline.style.fill_color, "#000000");
        assert_eq!(outline.style.fill_opacity, 0.1);
        assert_eq!(outline.style.stroke_color, "#000000");
        assert_eq!(outline.style.weight, 2.0);
    }
}
