use crate::types::district::District;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("Failed to determine reference data directory")]
    DataDirResolution,

    #[error("Failed to read reference data file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to list reference data directory '{0}'")]
    ReadDir(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse GeoJSON in '{0}'")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("No geometry found in '{0}'")]
    MissingGeometry(PathBuf),

    #[error("No shape available for district {0}")]
    MissingDistrict(District),

    // Covers errors joining the blocking loader task
    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
