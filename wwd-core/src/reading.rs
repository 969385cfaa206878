use serde::{Deserialize, Serialize};

use crate::de;
use crate::direction::CompassDirection;

/// Label shown in place of an absent reading.
pub const NOT_AVAILABLE: &str = "N/A";

/// Current wind-wave conditions at a coordinate. Any reading may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindWaveReading {
    /// Time label of the reading
    #[serde(default)]
    pub time: Option<String>,
    /// Wave height in meters
    #[serde(rename = "wind_wave_height", default, deserialize_with = "de::optional_f64")]
    pub height: Option<f64>,
    /// Direction the waves come from, degrees
    #[serde(rename = "wind_wave_direction", default, deserialize_with = "de::optional_f64")]
    pub direction: Option<f64>,
    /// Wave period in seconds
    #[serde(rename = "wind_wave_period", default, deserialize_with = "de::optional_f64")]
    pub period: Option<f64>,
    /// Peak wave period in seconds
    #[serde(rename = "wind_wave_peak_period", default, deserialize_with = "de::optional_f64")]
    pub peak_period: Option<f64>,
}

impl WindWaveReading {
    pub fn new(height: Option<f64>, direction: Option<f64>, period: Option<f64>) -> Self {
        WindWaveReading {
            height,
            direction,
            period,
            ..Default::default()
        }
    }

    pub fn compass_direction(&self) -> Option<CompassDirection> {
        self.direction.map(CompassDirection::from_degrees)
    }

    /// Table cells for the readings readout.
    pub fn to_readout(&self) -> CurrentReadout {
        CurrentReadout {
            time: self.time.clone(),
            height: display_value(self.height),
            direction: display_value(self.direction),
            period: display_value(self.period),
            peak_period: display_value(self.peak_period),
        }
    }
}

/// Display-ready strings for the numeric readings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentReadout {
    pub time: Option<String>,
    pub height: String,
    pub direction: String,
    pub period: String,
    pub peak_period: String,
}

/// Format a reading, or `N/A` when it is absent.
pub fn display_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => v.to_string(),
        Some(_) => NOT_AVAILABLE.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}
