//! HTTP client for the stored-data endpoint. Works natively and in WASM.

use log::{debug, info};
use reqwest::Client;

use crate::coordinate::Coordinate;
use crate::error::{ForecastError, Result};
use crate::response::{ForecastOutcome, ForecastResponse};

/// Path of the endpoint returning stored wind-wave data for a coordinate.
pub const STORED_DATA_PATH: &str = "/get-stored-data";

/// Issues `POST /get-stored-data` requests against one server.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    endpoint: String,
}

impl ForecastClient {
    /// Client for the server at `base_url` (scheme, host and optional port).
    pub fn new(base_url: &str) -> Self {
        ForecastClient::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        ForecastClient {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), STORED_DATA_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch current and hourly data for `at`. One request, no retry.
    pub async fn fetch(&self, at: &Coordinate) -> Result<ForecastOutcome> {
        info!("POST {} for {}", self.endpoint, at);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&at.to_request())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForecastError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Response for {}: {} bytes", at, body.len());
        ForecastResponse::from_json(&body)?.into_outcome()
    }
}
