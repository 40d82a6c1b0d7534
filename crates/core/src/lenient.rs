//! Lenient deserialization for optional enum fields.
//!
//! Stored records may carry frequency strings the engine does not know. Those
//! read as `None` so the documented fallbacks apply instead of failing the
//! whole record.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Deserializes an optional string, mapping unparseable values to `None`.
pub(crate) fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}
