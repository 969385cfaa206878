use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ForecastError, Result};

/// Decimal places kept when a click is captured.
pub const COORDINATE_PRECISION: usize = 6;

const SCALE: f64 = 1_000_000.0;

/// A clicked map position in decimal degrees, rounded to six decimals.
///
/// Created on each map click and replaced by the next one; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Capture a coordinate, rounding both axes to six decimal places.
    ///
    /// Longitude is wrapped into `[-180, 180)`, so clicks on a world copy
    /// past the antimeridian resolve to the same place.
    pub fn new(latitude: f64, longitude: f64) -> Result<Coordinate> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ForecastError::InvalidCoordinate(format!(
                "{}, {}",
                latitude, longitude
            )));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ForecastError::InvalidCoordinate(format!(
                "latitude {} out of range",
                latitude
            )));
        }
        Ok(Coordinate {
            latitude: round_to_precision(latitude),
            longitude: round_to_precision(wrap_longitude(longitude)),
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude as the fixed six-decimal string sent to the server.
    pub fn latitude_str(&self) -> String {
        format!("{:.*}", COORDINATE_PRECISION, self.latitude)
    }

    /// Longitude as the fixed six-decimal string sent to the server.
    pub fn longitude_str(&self) -> String {
        format!("{:.*}", COORDINATE_PRECISION, self.longitude)
    }

    /// Body of the `/get-stored-data` request for this coordinate.
    pub fn to_request(&self) -> ForecastRequest {
        ForecastRequest {
            latitude: self.latitude_str(),
            longitude: self.longitude_str(),
        }
    }

    /// Marker popup content (`<br>` separated, rendered as HTML by the map).
    pub fn popup_text(&self) -> String {
        format!(
            "Latitude: {}<br>Longitude: {}",
            self.latitude_str(),
            self.longitude_str()
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.latitude_str(), self.longitude_str())
    }
}

/// JSON body of `POST /get-stored-data`. Both fields are decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub latitude: String,
    pub longitude: String,
}

fn round_to_precision(value: f64) -> f64 {
    (value * SCALE).round() / SCALE
}

fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_six_decimals() {
        let c = Coordinate::new(8.92631749, 124.1586927).unwrap();
        assert_eq!(c.latitude_str(), "8.926317");
        assert_eq!(c.longitude_str(), "124.158693");
        assert_eq!(c.latitude(), 8.926317);
    }

    #[test]
    fn test_pads_short_values() {
        let c = Coordinate::new(9.5, -120.0).unwrap();
        assert_eq!(c.latitude_str(), "9.500000");
        assert_eq!(c.longitude_str(), "-120.000000");
    }

    #[test]
    fn test_request_body() {
        let c = Coordinate::new(8.926317, 124.158692).unwrap();
        let json = serde_json::to_value(c.to_request()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "latitude": "8.926317", "longitude": "124.158692" })
        );
    }

    #[test]
    fn test_popup_text() {
        let c = Coordinate::new(8.5, 124.25).unwrap();
        assert_eq!(c.popup_text(), "Latitude: 8.500000<br>Longitude: 124.250000");
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(91.0, 0.0).is_err());
        assert!(matches!(
            Coordinate::new(0.0, f64::INFINITY),
            Err(ForecastError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_wraps_longitude_past_antimeridian() {
        let c = Coordinate::new(8.5, 190.25).unwrap();
        assert_eq!(c.longitude_str(), "-169.750000");
        let c = Coordinate::new(8.5, -190.5).unwrap();
        assert_eq!(c.longitude_str(), "169.500000");
        let c = Coordinate::new(8.5, 484.158692).unwrap();
        assert_eq!(c.longitude_str(), "124.158692");
        assert_eq!(Coordinate::new(0.0, 180.0).unwrap().longitude_str(), "-180.000000");
        assert_eq!(Coordinate::new(0.0, -180.0).unwrap().longitude_str(), "-180.000000");
    }
}
