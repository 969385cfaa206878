use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};
use crate::reading::WindWaveReading;
use crate::series::HourlySeries;

/// Notice shown when the server has nothing for a coordinate and sent no message.
pub const NO_DATA_NOTICE: &str = "No data found for this location.";

/// Body returned by `POST /get-stored-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<WindWaveReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<HourlySeries>,
}

/// Current conditions plus the hourly forecast for one coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub current: WindWaveReading,
    pub hourly: HourlySeries,
}

/// What a settled request produced, short of a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastOutcome {
    Data(Forecast),
    /// The server reported no data for the coordinate.
    NoData { message: Option<String> },
}

impl ForecastOutcome {
    /// Text for the blocking notice of a no-data result.
    pub fn notice(&self) -> Option<&str> {
        match self {
            ForecastOutcome::Data(_) => None,
            ForecastOutcome::NoData { message } => {
                Some(message.as_deref().filter(|m| !m.is_empty()).unwrap_or(NO_DATA_NOTICE))
            }
        }
    }
}

impl ForecastResponse {
    pub fn from_json(body: &str) -> Result<ForecastResponse> {
        serde_json::from_str(body).map_err(|e| ForecastError::Decode(e.to_string()))
    }

    /// Split into data or no-data. A successful response without `current`
    /// or `hourly` is malformed.
    pub fn into_outcome(self) -> Result<ForecastOutcome> {
        if !self.success {
            return Ok(ForecastOutcome::NoData {
                message: self.message,
            });
        }
        let current = self.current.ok_or(ForecastError::MissingField("current"))?;
        let hourly = self.hourly.ok_or(ForecastError::MissingField("hourly"))?;
        Ok(ForecastOutcome::Data(Forecast { current, hourly }))
    }
}
