//! Lenient numeric decoding for the stored-data endpoint.
//!
//! The server serializes database decimals either as JSON numbers or as
//! numeric strings, and missing readings as `null` or placeholder text.

use serde::de::{Deserialize, Deserializer, Visitor};
use std::fmt;

/// Placeholder strings that mean "no reading".
const MISSING_MARKERS: [&str; 5] = ["", "None", "null", "NA", "N/A"];

struct OptionalF64Visitor;

/// `NaN` and infinities are no reading at all.
fn finite(v: f64) -> Option<f64> {
    Some(v).filter(|v| v.is_finite())
}

impl<'de> Visitor<'de> for OptionalF64Visitor {
    type Value = Option<f64>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string, or null")
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(finite(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Some(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Some(v as f64))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let trimmed = v.trim();
        if MISSING_MARKERS.contains(&trimmed) {
            return Ok(None);
        }
        trimmed
            .parse::<f64>()
            .map(finite)
            .map_err(serde::de::Error::custom)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OptionalF64Visitor)
    }
}

/// One nullable value inside a series array.
struct Lenient(Option<f64>);

impl<'de> Deserialize<'de> for Lenient {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OptionalF64Visitor).map(Lenient)
    }
}

pub fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionalF64Visitor)
}

pub fn optional_f64_vec<'de, D>(deserializer: D) -> Result<Option<Vec<Option<f64>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Option<Vec<Lenient>> = Option::deserialize(deserializer)?;
    Ok(values.map(|v| v.into_iter().map(|Lenient(x)| x).collect()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::optional_f64")]
        value: Option<f64>,
        #[serde(default, deserialize_with = "super::optional_f64_vec")]
        values: Option<Vec<Option<f64>>>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numbers_and_strings() {
        assert_eq!(probe(r#"{"value": 1.5}"#).value, Some(1.5));
        assert_eq!(probe(r#"{"value": 3}"#).value, Some(3.0));
        assert_eq!(probe(r#"{"value": "0.40"}"#).value, Some(0.4));
    }

    #[test]
    fn test_missing_markers() {
        assert_eq!(probe(r#"{"value": null}"#).value, None);
        assert_eq!(probe(r#"{"value": "None"}"#).value, None);
        assert_eq!(probe(r#"{}"#).value, None);
    }

    #[test]
    fn test_vectors() {
        let p = probe(r#"{"values": [1, null, "2.5", "None"]}"#);
        assert_eq!(p.values, Some(vec![Some(1.0), None, Some(2.5), None]));
        assert_eq!(probe(r#"{"values": null}"#).values, None);
        assert_eq!(probe(r#"{}"#).values, None);
    }

    #[test]
    fn test_non_finite_strings_are_absent() {
        assert_eq!(probe(r#"{"value": "NaN"}"#).value, None);
        assert_eq!(probe(r#"{"value": "inf"}"#).value, None);
        assert_eq!(probe(r#"{"value": "-infinity"}"#).value, None);
        let p = probe(r#"{"values": ["NaN", 1.5, "inf"]}"#);
        assert_eq!(p.values, Some(vec![None, Some(1.5), None]));
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(serde_json::from_str::<Probe>(r#"{"value": "calm"}"#).is_err());
    }
}
