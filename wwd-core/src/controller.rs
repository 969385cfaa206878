//! Map click handling and single-marker lifecycle.

use log::debug;

use crate::coordinate::Coordinate;
use crate::error::Result;

/// The map widget as seen by the controller.
pub trait MapSurface {
    /// Handle to a marker placed on the map.
    type Marker;

    /// Add a marker at `at` with its popup opened immediately.
    fn place_marker(&mut self, at: &Coordinate, popup: &str) -> Self::Marker;

    /// Remove a marker from the map.
    fn release_marker(&mut self, marker: Self::Marker);
}

/// Owns the map and at most one live marker.
pub struct MapController<M: MapSurface> {
    map: M,
    marker: Option<(M::Marker, Coordinate)>,
}

impl<M: MapSurface> MapController<M> {
    pub fn new(map: M) -> Self {
        MapController { map, marker: None }
    }

    /// Capture the clicked position, rounded to six decimals.
    pub fn on_click(&self, latitude: f64, longitude: f64) -> Result<Coordinate> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        debug!("Map clicked at {}", coordinate);
        Ok(coordinate)
    }

    /// Move the marker to `at`, releasing the previous one first.
    pub fn place_marker(&mut self, at: &Coordinate) {
        if let Some((previous, _)) = self.marker.take() {
            self.map.release_marker(previous);
        }
        let marker = self.map.place_marker(at, &at.popup_text());
        self.marker = Some((marker, *at));
    }

    /// Where the live marker sits, if any.
    pub fn marker_position(&self) -> Option<&Coordinate> {
        self.marker.as_ref().map(|(_, c)| c)
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingMap;
    use super::*;

    #[test]
    fn test_click_rounds() {
        let controller = MapController::new(RecordingMap::default());
        let c = controller.on_click(8.1234567, 124.7654321).unwrap();
        assert_eq!(c.latitude_str(), "8.123457");
        assert_eq!(c.longitude_str(), "124.765432");
        assert!(controller.on_click(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_click_on_world_copy_east_of_antimeridian() {
        let controller = MapController::new(RecordingMap::default());
        let c = controller.on_click(8.5, 190.25).unwrap();
        assert_eq!(c.latitude_str(), "8.500000");
        assert_eq!(c.longitude_str(), "-169.750000");
    }

    #[test]
    fn test_single_marker_after_many_placements() {
        let mut controller = MapController::new(RecordingMap::default());
        let points: Vec<Coordinate> = (0..5)
            .map(|i| Coordinate::new(8.0 + i as f64, 124.0).unwrap())
            .collect();
        for p in &points {
            controller.place_marker(p);
        }
        let map = controller.map();
        assert_eq!(map.live.len(), 1);
        assert_eq!(map.live[0].1, points[4]);
        assert_eq!(map.live[0].2, "Latitude: 12.000000<br>Longitude: 124.000000");
        assert_eq!(map.released, vec![1, 2, 3, 4]);
        assert_eq!(controller.marker_position(), Some(&points[4]));
    }

    #[test]
    fn test_no_marker_initially() {
        let controller = MapController::new(RecordingMap::default());
        assert!(controller.marker_position().is_none());
        assert!(controller.map().live.is_empty());
    }
}
