use crate::types::district::District;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StationDataError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode station data for district {district} from {url}")]
    Decode {
        district: District,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Invalid station API base URL '{0}'")]
    InvalidBaseUrl(String),
}
