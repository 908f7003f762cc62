use crate::reference::error::ReferenceDataError;
use crate::stations::error::StationDataError;
use crate::types::district::DistrictError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WienWetterError {
    #[error(transparent)]
    StationData(#[from] StationDataError),

    #[error(transparent)]
    ReferenceData(#[from] ReferenceDataError),

    #[error(transparent)]
    District(#[from] DistrictError),
}
