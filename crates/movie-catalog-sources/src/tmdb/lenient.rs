//! Field decoders that never fail.
//!
//! A value of the wrong JSON type reads as absent instead of rejecting the
//! enclosing object. Use with `#[serde(default, deserialize_with = "...")]`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `Some` only when the value has the expected type
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// `Some` for any array, keeping only the elements of the expected type
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Like [`list`], with anything that is not an array read as empty
pub(crate) fn vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(list(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "optional")]
        rating: Option<f64>,
        #[serde(default, deserialize_with = "list")]
        tags: Option<Vec<u32>>,
        #[serde(default, deserialize_with = "vec")]
        ids: Vec<u32>,
    }

    #[test]
    fn test_wrong_types_read_as_absent() {
        let sample: Sample = serde_json::from_str(r#"{"rating": "8.5", "tags": "x", "ids": {"a": 1}}"#).unwrap();
        assert_eq!(sample.rating, None);
        assert_eq!(sample.tags, None);
        assert!(sample.ids.is_empty());
    }

    #[test]
    fn test_arrays_keep_well_typed_elements() {
        let sample: Sample = serde_json::from_str(r#"{"rating": 7.0, "tags": [1, null, "2", 3], "ids": [28, -1]}"#).unwrap();
        assert_eq!(sample.rating, Some(7.0));
        assert_eq!(sample.tags, Some(vec![1, 3]));
        assert_eq!(sample.ids, vec![28]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let sample: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(sample.rating, None);
        assert_eq!(sample.tags, None);
        assert!(sample.ids.is_empty());
    }
}
