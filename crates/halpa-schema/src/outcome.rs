use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One message per top-level field.
pub type FieldErrorMap = BTreeMap<String, String>;

/// Message reported when a file-backed schema cannot be found.
pub const MISSING_SCHEMA_MESSAGE: &str = "schema file does not exist";

/// Result of [`validate`](crate::validate).
///
/// Serializes to `true`, `{"fields": {...}}` or
/// `{"schema": "schema file does not exist"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid { fields: FieldErrorMap },
    MissingSchema,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Field errors, when the document failed validation.
    pub fn fields(&self) -> Option<&FieldErrorMap> {
        match self {
            Validation::Invalid { fields } => Some(fields),
            _ => None,
        }
    }
}

impl Serialize for Validation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Validation::Valid => serializer.serialize_bool(true),
            Validation::Invalid { fields } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("fields", fields)?;
                map.end()
            }
            Validation::MissingSchema => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("schema", MISSING_SCHEMA_MESSAGE)?;
                map.end()
            }
        }
    }
}
