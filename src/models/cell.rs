//! Cell value type: a called number or the free marker.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single cell of a cartela grid.
///
/// Serializes to a JSON number for `Number` and the string `"FREE"` for
/// `Free`, matching the historical saved-data format. Deserialization also
/// accepts `"Free"`, which older data sources used interchangeably.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue {
    /// A bingo number (1-75 by data convention).
    Number(u8),
    /// The free center cell, always considered satisfied.
    Free,
}

impl CellValue {
    /// Checks whether this cell is the free marker.
    #[must_use]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Free => write!(f, "FREE"),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serializer.serialize_u8(*n),
            Self::Free => serializer.serialize_str("FREE"),
        }
    }
}

struct CellValueVisitor;

impl Visitor<'_> for CellValueVisitor {
    type Value = CellValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or the string \"FREE\"")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        u8::try_from(value)
            .map(CellValue::Number)
            .map_err(|_| E::custom(format!("cell number out of range: {value}")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u8::try_from(value)
            .map(CellValue::Number)
            .map_err(|_| E::custom(format!("cell number out of range: {value}")))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        if value.eq_ignore_ascii_case("free") {
            Ok(CellValue::Free)
        } else {
            Err(E::custom(format!("unexpected cell marker: {value:?}")))
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CellValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_number() {
        let json = serde_json::to_string(&CellValue::Number(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_serialize_free() {
        let json = serde_json::to_string(&CellValue::Free).unwrap();
        assert_eq!(json, "\"FREE\"");
    }

    #[test]
    fn test_deserialize_number() {
        let value: CellValue = serde_json::from_str("17").unwrap();
        assert_eq!(value, CellValue::Number(17));
    }

    #[test]
    fn test_deserialize_free_variants() {
        let value: CellValue = serde_json::from_str("\"FREE\"").unwrap();
        assert_eq!(value, CellValue::Free);

        // Older data sources wrote "Free"
        let value: CellValue = serde_json::from_str("\"Free\"").unwrap();
        assert_eq!(value, CellValue::Free);
    }

    #[test]
    fn test_deserialize_rejects_unknown_marker() {
        let result: Result<CellValue, _> = serde_json::from_str("\"BONUS\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let result: Result<CellValue, _> = serde_json::from_str("300");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(8).to_string(), "8");
        assert_eq!(CellValue::Free.to_string(), "FREE");
    }
}
