//! This module provides the main entry point of the crate: a dashboard client
//! that fetches the station readings of the selected districts, aggregates
//! them and turns them into a [`MapView`].

use crate::aggregation::{aggregate, aggregate_all, DistrictStats};
use crate::error::WienWetterError;
use crate::presentation::marker::StationMarker;
use crate::presentation::region::DistrictRegion;
use crate::presentation::view::{build_map_view, MapView};
use crate::reference::reference_data::ReferenceData;
use crate::stations::http_source::HttpStationSource;
use crate::stations::source::{fetch_or_empty, StationSource};
use crate::types::district::{District, Selection};
use crate::types::station_reading::StationReading;
use bon::bon;
use futures_util::future::join_all;
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Proof of which selection a refresh was started for.
///
/// Obtained from [`Dashboard::select`]. Results produced under a ticket are
/// only used while [`Dashboard::is_current`] still holds for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    selection: Selection,
}

impl SelectionTicket {
    pub fn selection(&self) -> Selection {
        self.selection
    }
}

/// Fresh data for a single district, for staggered per-district updates.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictUpdate {
    pub stats: DistrictStats,
    pub markers: Vec<StationMarker>,
    /// `None` if the reference data has no shape for the district.
    pub region: Option<DistrictRegion>,
}

/// The dashboard client.
///
/// Holds the station source and the reference data; every refresh re-fetches
/// the readings, nothing is cached between refreshes.
///
/// # Examples
///
/// ```rust
/// # use wien_wetter::{Dashboard, ReferenceData, Selection, StaticStationSource};
/// # #[tokio::main]
/// # async fn main() {
/// let dashboard = Dashboard::builder()
///     .source(StaticStationSource::new())
///     .reference(ReferenceData::default())
///     .build();
///
/// let view = dashboard.refresh(Selection::All).await.unwrap();
/// assert!(view.markers.is_empty());
/// # }
/// ```
pub struct Dashboard<S> {
    source: S,
    reference: ReferenceData,
    generation: AtomicU64,
}

#[bon]
impl<S: StationSource> Dashboard<S> {
    /// Creates a new dashboard.
    ///
    /// # Arguments
    ///
    /// * `.source(S)`: **Required.** Where the station readings come from.
    /// * `.reference(ReferenceData)`: **Required.** District shapes and overlays.
    #[builder]
    pub fn new(source: S, reference: ReferenceData) -> Self {
        Self {
            source,
            reference,
            generation: AtomicU64::new(0),
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Makes `selection` the current one. Tickets of earlier selections become stale.
    pub fn select(&self, selection: Selection) -> SelectionTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Selected {} (generation {})", selection, generation);
        SelectionTicket {
            generation,
            selection,
        }
    }

    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Selects `selection`, fetches every district in scope and builds the map.
    ///
    /// The districts are fetched concurrently; a failed district is shown
    /// without data. Returns `None` if another selection was made before the
    /// fetches completed.
    pub async fn refresh(&self, selection: Selection) -> Option<MapView> {
        let ticket = self.select(selection);
        let readings = self.fetch_scope(selection).await;

        if !self.is_current(&ticket) {
            info!("Discarding stale results for selection {}", selection);
            return None;
        }

        let stats = aggregate_all(&readings);
        Some(build_map_view(selection, &readings, &stats, &self.reference))
    }

    /// Fetches and aggregates a single district under an existing ticket.
    ///
    /// Returns `None` if the ticket is stale, if it was issued for
    /// [`Selection::None`], or if `district` is not in scope of its selection.
    pub async fn refresh_district(
        &self,
        ticket: &SelectionTicket,
        district: District,
    ) -> Option<DistrictUpdate> {
        if !ticket.selection.districts_in_scope().contains(&district) {
            return None;
        }

        let readings = fetch_or_empty(&self.source, district).await;
        if !self.is_current(ticket) {
            info!("Discarding stale results for district {}", district);
            return None;
        }

        let stats = aggregate(district, &readings);
        let mut view = build_map_view(
            Selection::District(district),
            &BTreeMap::from([(district, readings)]),
            &BTreeMap::from([(district, stats)]),
            &self.reference,
        );
        Some(DistrictUpdate {
            stats,
            markers: std::mem::take(&mut view.markers),
            region: view.regions.pop(),
        })
    }

    async fn fetch_scope(&self, selection: Selection) -> BTreeMap<District, Vec<StationReading>> {
        let fetches = selection
            .districts_in_scope()
            .into_iter()
            .map(|district| async move { (district, fetch_or_empty(&self.source, district).await) });
        join_all(fetches).await.into_iter().collect()
    }
}

impl Dashboard<HttpStationSource> {
    /// Creates a dashboard against the public station API, loading the
    /// reference data from `data_folder`.
    ///
    /// # Errors
    ///
    /// Returns [`WienWetterError::ReferenceData`] if a district shape is missing
    /// or unreadable, [`WienWetterError::StationData`] if the HTTP client cannot
    /// be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use wien_wetter::{Dashboard, Selection, WienWetterError};
    /// # use std::path::PathBuf;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), WienWetterError> {
    /// let dashboard = Dashboard::with_data_folder(PathBuf::from("./data")).await?;
    /// let view = dashboard.refresh("all".parse::<Selection>()?).await;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn with_data_folder(data_folder: PathBuf) -> Result<Self, WienWetterError> {
        let reference = ReferenceData::from_dir(data_folder).await?;
        let source = HttpStationSource::builder().build()?;
        Ok(Self::builder().source(source).reference(reference).build())
    }

    /// Same as [`Dashboard::with_data_folder`], using the platform data
    /// directory (e.g. `~/.local/share/wien_wetter` on Linux).
    pub async fn with_default_data_folder() -> Result<Self, WienWetterError> {
        let reference = ReferenceData::from_default_dir().await?;
        let source = HttpStationSource::builder().build()?;
        Ok(Self::builder().source(source).reference(reference).build())
    }
}
