use std::path::PathBuf;

/// Errors that can occur while loading a schema or checking a document.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema path does not point at an existing file.
    #[error("schema file {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// The schema file exists but could not be read.
    #[error("failed to load schema: {0}")]
    LoadFailed(String),

    /// The schema file is not valid JSON.
    #[error("schema is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The schema itself violates the JSON Schema meta-schema.
    #[error("{0}")]
    InvalidSchema(String),
}

impl SchemaError {
    /// True when the error means the schema file is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SchemaError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
