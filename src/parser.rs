//! Lenient parsing of icon dictionary sources.
//!
//! A dictionary source is a JSON array of `{"name": ..., "icon": ...}`
//! objects. Malformed elements are skipped with a warning so one bad record
//! cannot take down the whole dictionary; only an unreadable document is an
//! error.

use serde_json::Value;
use thiserror::Error;

use crate::models::{IconEntry, Warning};

/// Error type for dictionary parsing failures.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Document is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Document parsed but is not an array of entries.
    #[error("expected a JSON array of icon entries, found {found}")]
    NotAnArray { found: &'static str },
}

/// Result of parsing a dictionary source.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub entries: Vec<IconEntry>,
    pub warnings: Vec<Warning>,
}

/// Parse a dictionary source into entries, skipping malformed elements.
pub fn parse_entries(input: &str) -> Result<ParseResult, ParseError> {
    let doc: Value = serde_json::from_str(input)?;
    let items = match doc.as_array() {
        Some(items) => items,
        None => return Err(ParseError::NotAnArray { found: json_type_name(&doc) }),
    };

    let mut result = ParseResult::default();
    for (index, item) in items.iter().enumerate() {
        match entry_from_value(item) {
            Ok(entry) => result.entries.push(entry),
            Err(message) => result.warnings.push(Warning { message, index }),
        }
    }
    Ok(result)
}

fn entry_from_value(value: &Value) -> Result<IconEntry, String> {
    let object = value.as_object().ok_or_else(|| {
        format!("expected an object, found {}", json_type_name(value))
    })?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| "missing string field 'name'".to_string())?;
    let icon = object
        .get("icon")
        .and_then(Value::as_str)
        .ok_or_else(|| "missing string field 'icon'".to_string())?;
    Ok(IconEntry::new(name, icon))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
