//! Rust type → canonical column type mapping.
//!
//! This is the only place that knows about Rust types. Dialects render
//! [`ColumnType`] and never see the field type itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical abstract column type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    BigInt,
    Bool,
    Float,
    String,
    Time,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::BigInt => "bigint",
            ColumnType::Bool => "bool",
            ColumnType::Float => "float",
            ColumnType::String => "string",
            ColumnType::Time => "time",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a Rust type, written as source text, to its canonical column type
///
/// Whitespace is ignored and leading paths are stripped, so `Option < i64 >`,
/// `std::option::Option<i64>` and `Option<i64>` all map to [`ColumnType::BigInt`].
/// `Option<T>` maps like `T`; anything unrecognized maps to [`ColumnType::String`].
///
/// # Type Mapping
///
/// - `i8` / `i16` / `i32` / `u8` / `u16` → `int`
/// - `i64` / `u32` / `u64` / `isize` / `usize` / `i128` / `u128` → `bigint`
/// - `bool` → `bool`
/// - `f32` / `f64` → `float`
/// - `String` / `&str` / `char` / `Cow<str>` → `string`
/// - `NaiveDateTime` / `DateTime<Tz>` / `NaiveDate` / `NaiveTime` / `SystemTime` /
///   `OffsetDateTime` / `PrimitiveDateTime` / `Date` / `Time` → `time`
pub fn map_native_type(native: &str) -> ColumnType {
    let compact: String = native.chars().filter(|c| !c.is_whitespace()).collect();
    map_compact(&compact)
}

fn map_compact(ty: &str) -> ColumnType {
    let ty = ty.trim_start_matches('&').trim_start_matches("'static");
    let ty = ty.strip_prefix("mut").filter(|rest| !rest.is_empty()).unwrap_or(ty);

    let (head, generics) = match ty.find('<') {
        Some(pos) if ty.ends_with('>') => (&ty[..pos], Some(&ty[pos + 1..ty.len() - 1])),
        _ => (ty, None),
    };
    let base = head.rsplit("::").next().unwrap_or(head);

    match (base, generics) {
        ("Option", Some(inner)) => map_compact(inner),
        ("i8" | "i16" | "i32" | "u8" | "u16", None) => ColumnType::Int,
        ("i64" | "u32" | "u64" | "isize" | "usize" | "i128" | "u128", None) => ColumnType::BigInt,
        ("bool", None) => ColumnType::Bool,
        ("f32" | "f64", None) => ColumnType::Float,
        (
            "NaiveDateTime" | "DateTime" | "NaiveDate" | "NaiveTime" | "SystemTime"
            | "OffsetDateTime" | "PrimitiveDateTime" | "Date" | "Time",
            _,
        ) => ColumnType::Time,
        _ => ColumnType::String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widths() {
        assert_eq!(map_native_type("i32"), ColumnType::Int);
        assert_eq!(map_native_type("i16"), ColumnType::Int);
        assert_eq!(map_native_type("u8"), ColumnType::Int);
        assert_eq!(map_native_type("i64"), ColumnType::BigInt);
        assert_eq!(map_native_type("u64"), ColumnType::BigInt);
        assert_eq!(map_native_type("usize"), ColumnType::BigInt);
    }

    #[test]
    fn test_scalars() {
        assert_eq!(map_native_type("bool"), ColumnType::Bool);
        assert_eq!(map_native_type("f32"), ColumnType::Float);
        assert_eq!(map_native_type("f64"), ColumnType::Float);
        assert_eq!(map_native_type("String"), ColumnType::String);
        assert_eq!(map_native_type("&'static str"), ColumnType::String);
        assert_eq!(map_native_type("char"), ColumnType::String);
    }

    #[test]
    fn test_time_types() {
        assert_eq!(map_native_type("chrono::NaiveDateTime"), ColumnType::Time);
        assert_eq!(map_native_type("DateTime<Utc>"), ColumnType::Time);
        assert_eq!(map_native_type("chrono :: DateTime < chrono :: Utc >"), ColumnType::Time);
        assert_eq!(map_native_type("std::time::SystemTime"), ColumnType::Time);
        assert_eq!(map_native_type("time::OffsetDateTime"), ColumnType::Time);
        assert_eq!(map_native_type("time::PrimitiveDateTime"), ColumnType::Time);
        assert_eq!(map_native_type("time::Date"), ColumnType::Time);
        assert_eq!(map_native_type("time::Time"), ColumnType::Time);
        assert_eq!(map_native_type("Option<time::Date>"), ColumnType::Time);
        // Not a recognised time type
        assert_eq!(map_native_type("Timestamp"), ColumnType::String);
    }

    #[test]
    fn test_option_maps_to_wrapped_type() {
        assert_eq!(map_native_type("Option<i64>"), ColumnType::BigInt);
        assert_eq!(map_native_type("Option < bool >"), ColumnType::Bool);
        assert_eq!(map_native_type("std::option::Option<String>"), ColumnType::String);
        assert_eq!(map_native_type("Option<NaiveDateTime>"), ColumnType::Time);
    }

    #[test]
    fn test_unknown_types_default_to_string() {
        assert_eq!(map_native_type("uuid::Uuid"), ColumnType::String);
        assert_eq!(map_native_type("Vec<u8>"), ColumnType::String);
        assert_eq!(map_native_type("HashMap<String, i32>"), ColumnType::String);
        assert_eq!(map_native_type(""), ColumnType::String);
        assert_eq!(map_native_type("Option<"), ColumnType::String);
    }

    #[test]
    fn test_column_type_display() {
        assert_eq!(ColumnType::BigInt.to_string(), "bigint");
        assert_eq!(ColumnType::Time.to_string(), "time");
    }
}
