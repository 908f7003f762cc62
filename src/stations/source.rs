//! Where station readings come from.

use crate::stations::error::StationDataError;
use crate::types::district::District;
use crate::types::station_reading::StationReading;
use log::warn;
use std::collections::HashMap;
use std::future::Future;

/// A provider of the latest readings of one district.
///
/// Implementations should not retry; a failed district is shown as "no data"
/// until the next refresh.
pub trait StationSource: Send + Sync {
    fn fetch_district(
        &self,
        district: District,
    ) -> impl Future<Output = Result<Vec<StationReading>, StationDataError>> + Send;
}

/// Fetches `district`, turning any error into an empty reading set.
pub async fn fetch_or_empty<S: StationSource>(
    source: &S,
    district: District,
) -> Vec<StationReading> {
    match source.fetch_district(district).await {
        Ok(readings) => readings,
        Err(e) => {
            warn!("No station data for district {}: {}", district, e);
            Vec::new()
        }
    }
}

/// Serves fixed readings from memory. Districts without an entry have no stations.
#[derive(Debug, Clone, Default)]
pub struct StaticStationSource {
    readings: HashMap<District, Vec<StationReading>>,
}

impl StaticStationSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_district(mut self, district: District, readings: Vec<StationReading>) -> Self {
        self.readings.insert(district, readings);
        self
    }
}

impl StationSource for StaticStationSource {
    async fn fetch_district(&self, district: District) -> Result<Vec<StationReading>, StationDataError> {
        Ok(self.readings.get(&district).cloned().unwrap_or_default())
    }
}
