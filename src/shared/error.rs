//! Error taxonomy shared by every tool.
//!
//! Each variant carries the offending input so the presentation layer can
//! build its own message. All errors are serializable for the front end.

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the engines, the storage port and the settings layer.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ToolError {
    /// Category id not present in the unit registry
    #[error("Unknown unit category: {category}")]
    UnknownCategory { category: String },

    /// Unit id not present in the resolved category
    #[error("Unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },

    /// NaN or infinite numeric input
    #[error("Invalid numeric value: {value}")]
    InvalidValue { value: f64 },

    /// Units of a mixed category expressed in different base units
    #[error("Cannot convert between '{from}' and '{to}' (different base units)")]
    IncompatibleUnits { from: String, to: String },

    #[error("Cannot pick from an empty option set")]
    EmptyOptionSet,

    /// Weight that is zero, negative or not finite
    #[error("Option '{option_id}' has invalid weight {weight}")]
    InvalidWeight { option_id: String, weight: f64 },

    /// More distinct values requested than the range holds
    #[error("Cannot draw {count} distinct values from the range {min}..={max}")]
    RangeTooSmall { min: i64, max: i64, count: usize },

    /// Unit table rejected at construction time
    #[error("Invalid unit registry: {0}")]
    InvalidRegistry(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        ToolError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        ToolError::Serialization(err.to_string())
    }
}

pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_adjacently_tagged() {
        let err = ToolError::UnknownUnit {
            category: "length".to_string(),
            unit: "xx".to_string(),
        };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            json!({ "type": "UnknownUnit", "details": { "category": "length", "unit": "xx" } })
        );
    }

    #[test]
    fn test_unit_variant_has_no_details() {
        let value = serde_json::to_value(ToolError::EmptyOptionSet).unwrap();
        assert_eq!(value, json!({ "type": "EmptyOptionSet" }));
    }

    #[test]
    fn test_display_names_offending_input() {
        let err = ToolError::RangeTooSmall { min: 1, max: 3, count: 4 };
        assert_eq!(err.to_string(), "Cannot draw 4 distinct values from the range 1..=3");
    }

    #[test]
    fn test_from_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ToolError = parse_err.into();
        assert!(matches!(err, ToolError::Serialization(_)));
    }
}
