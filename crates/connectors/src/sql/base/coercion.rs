//! Turns raw CSV text into typed values ready for binding.

use model::{
    core::{data_type::DataType, value::Value},
    schema::column::ColumnDescriptor,
};
use thiserror::Error;

/// Field texts read as null in a nullable column.
pub const NULL_SENTINELS: [&str; 3] = ["", "null", "NULL"];

#[derive(Debug, Error, Clone, PartialEq)]
#[error("Cannot convert '{raw_value}' in column '{column}' to {target}")]
pub struct TypeConversionError {
    pub column: String,
    pub raw_value: String,
    pub target: DataType,
}

pub fn is_null_sentinel(raw: &str) -> bool {
    NULL_SENTINELS.contains(&raw)
}

/// Converts one field of a CSV row into the value stored for `column`.
///
/// Sentinels only mean null for nullable columns. A non-nullable column parses
/// them like any other text: TEXT keeps the literal, the other kinds fail.
/// NaN is refused for REAL columns since the engine would store it as null.
pub fn coerce_value(raw: &str, column: &ColumnDescriptor) -> Result<Value, TypeConversionError> {
    if column.is_nullable && is_null_sentinel(raw) {
        return Ok(Value::Null);
    }

    let parsed = match column.data_type {
        DataType::Integer => raw.parse::<i64>().ok().map(Value::Int),
        DataType::Real => raw
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .map(Value::Float),
        DataType::Boolean => parse_bool(raw).map(Value::Boolean),
        DataType::Text => Some(Value::Text(raw.to_string())),
    };

    parsed.ok_or_else(|| TypeConversionError {
        column: column.name.clone(),
        raw_value: raw.to_string(),
        target: column.data_type,
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Some(false)
    } else {
        None
    }
}
