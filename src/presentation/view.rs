//! Assembles everything the map needs for one selection.

use crate::aggregation::DistrictStats;
use crate::filtering::filter_complete;
use crate::presentation::heat::{heat_points, HeatPoint};
use crate::presentation::marker::StationMarker;
use crate::presentation::overlay::{heat_outline, overlay_layers, HeatOutline, OverlayLayer};
use crate::presentation::region::DistrictRegion;
use crate::reference::reference_data::ReferenceData;
use crate::types::district::{District, Selection};
use crate::types::station_reading::StationReading;
use crate::types::temperature_band::{legend, LegendEntry};
use log::warn;
use serde::Serialize;
use std::collections::BTreeMap;

/// Render-ready description of the map for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub selection: Selection,
    pub markers: Vec<StationMarker>,
    pub regions: Vec<DistrictRegion>,
    pub heat_points: Vec<HeatPoint>,
    /// District borders drawn under the heat points.
    pub heat_outline: HeatOutline,
    pub overlays: Vec<OverlayLayer>,
    pub legend: Vec<LegendEntry>,
}

impl MapView {
    pub fn region(&self, district: District) -> Option<&DistrictRegion> {
        self.regions.iter().find(|r| r.district == district)
    }

    pub fn region_mut(&mut self, district: District) -> Option<&mut DistrictRegion> {
        self.regions.iter_mut().find(|r| r.district == district)
    }
}

/// Builds the markers, regions and heat points for `selection`, together with
/// the overlay layers of `reference`.
///
/// Only districts in scope of the selection are drawn; entries of `readings`
/// or `stats` outside the scope are ignored. A district without statistics is
/// drawn as having no data. A district without a shape in `reference` is
/// skipped with a warning.
pub fn build_map_view(
    selection: Selection,
    readings: &BTreeMap<District, Vec<StationReading>>,
    stats: &BTreeMap<District, DistrictStats>,
    reference: &ReferenceData,
) -> MapView {
    let scope = selection.districts_in_scope();

    let complete: Vec<&StationReading> = scope
        .iter()
        .filter_map(|district| readings.get(district))
        .flat_map(|district_readings| filter_complete(selection, district_readings))
        .collect();

    let markers = complete
        .iter()
        .filter_map(|reading| StationMarker::from_reading(reading))
        .collect();

    let regions = scope
        .iter()
        .filter_map(|district| {
            let shape = match reference.shape(*district) {
                Ok(shape) => shape.clone(),
                Err(e) => {
                    warn!("Skipping region: {}", e);
                    return None;
                }
            };
            let district_stats = stats
                .get(district)
                .copied()
                .unwrap_or_else(|| DistrictStats::empty(*district));
            Some(DistrictRegion::new(shape, &district_stats))
        })
        .collect();

    MapView {
        selection,
        markers,
        regions,
        heat_points: heat_points(complete.iter().copied()),
        heat_outline: heat_outline(reference),
        overlays: overlay_layers(reference),
        legend: legend(),
    }
}
