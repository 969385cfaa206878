use chrono::NaiveDateTime;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::de;

/// Time label format produced by the stored-data endpoint.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Time label format of the upstream marine API.
pub const ISO_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// The three hourly series drawn as charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Height,
    Direction,
    Period,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 3] = [SeriesKind::Height, SeriesKind::Direction, SeriesKind::Period];

    /// Dataset label shown in the chart legend.
    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::Height => "Hourly Wind Wave Height",
            SeriesKind::Direction => "Hourly Wind Wave Direction",
            SeriesKind::Period => "Hourly Wind Wave Period",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SeriesKind::Height => "m",
            SeriesKind::Direction => "°",
            SeriesKind::Period => "s",
        }
    }

    /// Column name in the wire format and CSV export.
    pub fn column(&self) -> &'static str {
        match self {
            SeriesKind::Height => "wind_wave_height",
            SeriesKind::Direction => "wind_wave_direction",
            SeriesKind::Period => "wind_wave_period",
        }
    }
}

/// `hourly` section as it arrives on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawHourlySeries {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default, deserialize_with = "de::optional_f64_vec")]
    wind_wave_height: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "de::optional_f64_vec")]
    wind_wave_direction: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "de::optional_f64_vec")]
    wind_wave_period: Option<Vec<Option<f64>>>,
}

/// Hourly forecast with all four sequences index-aligned: entry `i` of every
/// series describes the hour `times()[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHourlySeries")]
pub struct HourlySeries {
    #[serde(rename = "time")]
    times: Vec<String>,
    #[serde(rename = "wind_wave_height")]
    heights: Vec<Option<f64>>,
    #[serde(rename = "wind_wave_direction")]
    directions: Vec<Option<f64>>,
    #[serde(rename = "wind_wave_period")]
    periods: Vec<Option<f64>>,
}

impl From<RawHourlySeries> for HourlySeries {
    fn from(raw: RawHourlySeries) -> Self {
        HourlySeries::new(
            raw.time,
            raw.wind_wave_height,
            raw.wind_wave_direction,
            raw.wind_wave_period,
        )
    }
}

impl HourlySeries {
    /// Build an aligned series. Omitted series become null-filled sequences
    /// of the timestamp length; mismatched ones are padded or truncated.
    pub fn new(
        times: Vec<String>,
        heights: Option<Vec<Option<f64>>>,
        directions: Option<Vec<Option<f64>>>,
        periods: Option<Vec<Option<f64>>>,
    ) -> HourlySeries {
        let len = times.len();
        HourlySeries {
            heights: align(heights, len, SeriesKind::Height),
            directions: align(directions, len, SeriesKind::Direction),
            periods: align(periods, len, SeriesKind::Period),
            times,
        }
    }

    pub fn times(&self) -> &[String] {
        &self.times
    }

    pub fn heights(&self) -> &[Option<f64>] {
        &self.heights
    }

    pub fn directions(&self) -> &[Option<f64>] {
        &self.directions
    }

    pub fn periods(&self) -> &[Option<f64>] {
        &self.periods
    }

    pub fn values(&self, kind: SeriesKind) -> &[Option<f64>] {
        match kind {
            SeriesKind::Height => &self.heights,
            SeriesKind::Direction => &self.directions,
            SeriesKind::Period => &self.periods,
        }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Smallest and largest present value of a series.
    pub fn range(&self, kind: SeriesKind) -> Option<(f64, f64)> {
        self.values(kind)
            .iter()
            .flatten()
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// First and last timestamps, when both parse.
    pub fn time_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first = parse_time(self.times.first()?)?;
        let last = parse_time(self.times.last()?)?;
        Some((first, last))
    }
}

/// Parse a time label in either the stored-data or the upstream format.
pub fn parse_time(label: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(label, TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(label, ISO_TIME_FORMAT))
        .ok()
}

fn align(values: Option<Vec<Option<f64>>>, len: usize, kind: SeriesKind) -> Vec<Option<f64>> {
    match values {
        None => vec![None; len],
        Some(mut v) => {
            if v.len() != len {
                warn!(
                    "{} has {} entries for {} timestamps, realigning",
                    kind.column(),
                    v.len(),
                    len
                );
                v.resize(len, None);
            }
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_missing_direction_is_null_filled() {
        let json = r#"{
            "time": ["2024-10-01 00:00", "2024-10-01 01:00", "2024-10-01 02:00"],
            "wind_wave_height": [0.4, 0.5, 0.6],
            "wind_wave_period": [4.0, 4.2, null]
        }"#;
        let series: HourlySeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.directions(), &[None, None, None]);
        assert_eq!(series.periods(), &[Some(4.0), Some(4.2), None]);
    }

    #[test]
    fn test_missing_heights_are_null_filled() {
        let json = r#"{ "time": ["2024-10-01 00:00", "2024-10-01 01:00"] }"#;
        let series: HourlySeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.heights(), &[None, None]);
        assert_eq!(series.range(SeriesKind::Height), None);
    }

    #[test]
    fn test_mismatched_lengths_are_realigned() {
        let series = HourlySeries::new(
            vec!["a".to_string(), "b".to_string()],
            Some(vec![Some(1.0)]),
            Some(vec![Some(10.0), Some(20.0), Some(30.0)]),
            None,
        );
        assert_eq!(series.heights(), &[Some(1.0), None]);
        assert_eq!(series.directions(), &[Some(10.0), Some(20.0)]);
        assert_eq!(series.periods().len(), 2);
    }

    #[test]
    fn test_range_skips_nulls() {
        let series = HourlySeries::new(
            vec!["a".into(), "b".into(), "c".into()],
            Some(vec![Some(0.8), None, Some(0.3)]),
            None,
            None,
        );
        assert_eq!(series.range(SeriesKind::Height), Some((0.3, 0.8)));
    }

    #[test]
    fn test_time_span_accepts_both_formats() {
        let series = HourlySeries::new(
            vec!["2024-10-01T00:00".into(), "2024-10-02 23:00".into()],
            None,
            None,
            None,
        );
        let (first, last) = series.time_span().unwrap();
        assert_eq!(first.hour(), 0);
        assert_eq!(last.hour(), 23);
        assert_eq!((last - first).num_hours(), 47);
    }

    #[test]
    fn test_serializes_wire_names() {
        let series = HourlySeries::new(vec!["t".into()], Some(vec![Some(1.0)]), None, None);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["time"], serde_json::json!(["t"]));
        assert_eq!(json["wind_wave_direction"], serde_json::json!([null]));
    }
}
