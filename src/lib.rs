mod aggregation;
mod dashboard;
mod error;
mod filtering;
mod presentation;
mod reference;
mod stations;
mod types;
mod utils;

pub use error::WienWetterError;
pub use dashboard::*;

pub use aggregation::{aggregate, aggregate_all, round_one_decimal, DistrictStats};
pub use filtering::{filter_complete, is_complete, ReadingFilterExt};

pub use types::district::{District, DistrictError, Selection, DISTRICT_COUNT, DISTRICT_NAMES};
pub use types::lat_lon::{LatLon, VIENNA_CENTER};
pub use types::station_reading::StationReading;
pub use types::temperature_band::{
    classify_region_color, classify_station_color, legend, ColorCode, LegendEntry, MarkerStyle,
    TemperatureBand,
};

pub use presentation::format::format_observed_at;
pub use presentation::heat::{heat_points, HeatPoint};
pub use presentation::marker::{StationMarker, StationPopup};
pub use presentation::overlay::{
    heat_outline, overlay_layers, HeatOutline, OverlayKind, OverlayLayer, HEAT_OUTLINE_STYLE,
};
pub use presentation::region::{
    DistrictPopup, DistrictRegion, RegionStyle, HIGHLIGHT_FILL_COLOR, HIGHLIGHT_FILL_OPACITY,
};
pub use presentation::view::{build_map_view, MapView};

pub use reference::error::ReferenceDataError;
pub use reference::reference_data::{DistrictShape, ReferenceData};

pub use stations::error::StationDataError;
pub use stations::http_source::{HttpStationSource, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use stations::source::{fetch_or_empty, StaticStationSource, StationSource};
