//! Fetches station readings from the district data API over HTTP.

use crate::stations::error::StationDataError;
use crate::stations::source::StationSource;
use crate::types::district::District;
use crate::types::station_reading::StationReading;
use bon::bon;
use log::{debug, info, warn};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://uhi.w3.cs.technikum-wien.at/nodejs/getData";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Reads `GET {base_url}/{district}`, which answers with a JSON array of
/// station readings.
#[derive(Debug, Clone)]
pub struct HttpStationSource {
    client: Client,
    base_url: String,
}

#[bon]
impl HttpStationSource {
    /// Creates a new source.
    ///
    /// # Arguments
    ///
    /// * `.base_url(String)`: Optional. Endpoint without the trailing district,
    ///   defaults to [`DEFAULT_BASE_URL`].
    /// * `.timeout(Duration)`: Optional. Per-request timeout, defaults to [`DEFAULT_TIMEOUT`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use wien_wetter::{HttpStationSource, StationDataError};
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), StationDataError> {
    /// let source = HttpStationSource::builder()
    ///     .base_url("http://localhost:8080/getData".to_string())
    ///     .timeout(Duration::from_secs(3))
    ///     .build()?;
    /// assert_eq!(source.base_url(), "http://localhost:8080/getData");
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn new(
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, StationDataError> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(StationDataError::InvalidBaseUrl(base_url));
        }

        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(StationDataError::ClientBuild)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn district_url(&self, district: District) -> String {
        format!("{}/{}", self.base_url, district.index())
    }
}

impl StationSource for HttpStationSource {
    async fn fetch_district(
        &self,
        district: District,
    ) -> Result<Vec<StationReading>, StationDataError> {
        let url = self.district_url(district);
        debug!("Fetching station data from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StationDataError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    StationDataError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    StationDataError::NetworkRequest(url, e)
                });
            }
        };

        let readings: Vec<StationReading> =
            response
                .json()
                .await
                .map_err(|e| StationDataError::Decode {
                    district,
                    url: url.clone(),
                    source: e,
                })?;
        info!(
            "Received {} station readings for district {}",
            readings.len(),
            district
        );
        Ok(readings)
    }
}
