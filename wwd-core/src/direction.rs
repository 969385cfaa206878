use serde::{Deserialize, Serialize};
use std::fmt;

/// Named direction a wind wave comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    North,
    East,
    South,
    West,
    /// Bearing outside `[0, 360)` (or not a number).
    Unknown,
}

/// A half-open `[min, max)` bearing range mapped to a direction.
struct Sector {
    direction: CompassDirection,
    min: f64,
    max: f64,
}

/// Eight 45 degree sectors folded into four buckets. Checked in order, first
/// match wins. North straddles 0/360 so it is declared as two ranges.
const SECTORS: [Sector; 9] = [
    Sector { direction: CompassDirection::North, min: 337.5, max: 360.0 },
    Sector { direction: CompassDirection::North, min: 0.0, max: 22.5 },
    Sector { direction: CompassDirection::East, min: 22.5, max: 67.5 },
    Sector { direction: CompassDirection::East, min: 67.5, max: 112.5 },
    Sector { direction: CompassDirection::South, min: 112.5, max: 157.5 },
    Sector { direction: CompassDirection::South, min: 157.5, max: 202.5 },
    Sector { direction: CompassDirection::West, min: 202.5, max: 247.5 },
    Sector { direction: CompassDirection::West, min: 247.5, max: 292.5 },
    Sector { direction: CompassDirection::North, min: 292.5, max: 337.5 },
];

impl CompassDirection {
    /// Classify a bearing in degrees. Total: anything outside `[0, 360)`
    /// yields `Unknown`.
    pub fn from_degrees(degrees: f64) -> CompassDirection {
        SECTORS
            .iter()
            .find(|s| degrees >= s.min && degrees < s.max)
            .map(|s| s.direction)
            .unwrap_or(CompassDirection::Unknown)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CompassDirection::North => "North",
            CompassDirection::East => "East",
            CompassDirection::South => "South",
            CompassDirection::West => "West",
            CompassDirection::Unknown => "Unknown Direction",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != CompassDirection::Unknown
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(CompassDirection::from_degrees(0.0), CompassDirection::North);
        assert_eq!(CompassDirection::from_degrees(22.5), CompassDirection::East);
        assert_eq!(CompassDirection::from_degrees(22.499), CompassDirection::North);
        assert_eq!(CompassDirection::from_degrees(337.5), CompassDirection::North);
        assert_eq!(CompassDirection::from_degrees(359.999), CompassDirection::North);
        assert_eq!(CompassDirection::from_degrees(360.0), CompassDirection::Unknown);
    }

    #[test]
    fn test_buckets() {
        assert_eq!(CompassDirection::from_degrees(90.0), CompassDirection::East);
        assert_eq!(CompassDirection::from_degrees(112.5), CompassDirection::South);
        assert_eq!(CompassDirection::from_degrees(180.0), CompassDirection::South);
        assert_eq!(CompassDirection::from_degrees(202.5), CompassDirection::West);
        assert_eq!(CompassDirection::from_degrees(270.0), CompassDirection::West);
        assert_eq!(CompassDirection::from_degrees(300.0), CompassDirection::North);
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        assert_eq!(CompassDirection::from_degrees(-0.1), CompassDirection::Unknown);
        assert_eq!(CompassDirection::from_degrees(720.0), CompassDirection::Unknown);
        assert_eq!(CompassDirection::from_degrees(f64::NAN), CompassDirection::Unknown);
        assert!(!CompassDirection::from_degrees(400.0).is_known());
    }

    #[test]
    fn test_every_in_range_bearing_is_known() {
        let mut degrees = 0.0;
        while degrees < 360.0 {
            let d = CompassDirection::from_degrees(degrees);
            assert!(d.is_known(), "{} classified as {}", degrees, d);
            degrees += 0.25;
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CompassDirection::East.to_string(), "East");
        assert_eq!(CompassDirection::Unknown.to_string(), "Unknown Direction");
    }
}
