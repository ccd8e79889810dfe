//! Best-effort field decoding for platform documents.
//!
//! The platform sends `null` or differently typed values for fields it does
//! not care about. A field decoded with [`or_default`] falls back to its
//! default instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode `T`, or `T::default()` when the value is `null` or has another type.
///
/// Use together with `#[serde(default)]` so an absent field defaults too.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Doc {
        #[serde(default, deserialize_with = "or_default")]
        name: String,
        #[serde(default, deserialize_with = "or_default")]
        count: Option<u32>,
        #[serde(default, deserialize_with = "or_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_and_mistyped_fall_back() {
        let doc: Doc = serde_json::from_str(r#"{"name": null, "count": "many", "tags": 3}"#).unwrap();
        assert_eq!(doc.name, "");
        assert_eq!(doc.count, None);
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn test_well_typed_values_kept() {
        let doc: Doc = serde_json::from_str(r#"{"name": "a", "count": 2, "tags": ["x"]}"#).unwrap();
        assert_eq!(doc.name, "a");
        assert_eq!(doc.count, Some(2));
        assert_eq!(doc.tags, vec!["x"]);
    }

    #[test]
    fn test_absent_fields_default() {
        let doc: Doc = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.name, "");
        assert_eq!(doc.count, None);
    }
}
