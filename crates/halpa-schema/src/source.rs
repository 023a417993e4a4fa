use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::error::{Result, SchemaError};

/// Where a schema comes from: an in-memory value or a JSON file on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaSource {
    Inline(Value),
    File(PathBuf),
}

impl SchemaSource {
    /// The file path, when the schema is file-backed.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SchemaSource::Inline(_) => None,
            SchemaSource::File(path) => Some(path),
        }
    }
}

impl From<Value> for SchemaSource {
    fn from(value: Value) -> Self {
        SchemaSource::Inline(value)
    }
}

impl From<&Value> for SchemaSource {
    fn from(value: &Value) -> Self {
        SchemaSource::Inline(value.clone())
    }
}

impl From<PathBuf> for SchemaSource {
    fn from(path: PathBuf) -> Self {
        SchemaSource::File(path)
    }
}

impl From<&Path> for SchemaSource {
    fn from(path: &Path) -> Self {
        SchemaSource::File(path.to_path_buf())
    }
}

// Plain strings are paths, never inline JSON text.
impl From<&str> for SchemaSource {
    fn from(path: &str) -> Self {
        SchemaSource::File(PathBuf::from(path))
    }
}

impl From<String> for SchemaSource {
    fn from(path: String) -> Self {
        SchemaSource::File(PathBuf::from(path))
    }
}

/// Resolve a schema source into a schema value.
///
/// Inline values are returned unchanged. File paths are read and parsed as
/// JSON; a missing file yields [`SchemaError::NotFound`].
pub fn load(source: &SchemaSource, config: &ValidatorConfig) -> Result<Value> {
    match source {
        SchemaSource::Inline(value) => Ok(value.clone()),
        SchemaSource::File(path) => load_file(path, config.max_schema_file_size),
    }
}

fn load_file(path: &Path, max_bytes: usize) -> Result<Value> {
    tracing::debug!(path = %path.display(), "loading schema file");

    let file = std::fs::File::open(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            SchemaError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SchemaError::LoadFailed(format!(
                "failed opening schema {}: {err}",
                path.display()
            ))
        }
    })?;

    let metadata = file
        .metadata()
        .map_err(|err| SchemaError::LoadFailed(err.to_string()))?;
    if !metadata.is_file() {
        return Err(SchemaError::LoadFailed(format!(
            "schema path is not a file: {}",
            path.display()
        )));
    }
    if metadata.len() > max_bytes as u64 {
        return Err(SchemaError::LoadFailed(format!(
            "schema file too large ({} bytes): {}",
            metadata.len(),
            path.display()
        )));
    }

    let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
    let mut content = String::new();
    file.take(read_limit)
        .read_to_string(&mut content)
        .map_err(|err| {
            SchemaError::LoadFailed(format!(
                "failed reading schema {}: {err}",
                path.display()
            ))
        })?;
    if content.len() > max_bytes {
        return Err(SchemaError::LoadFailed(format!(
            "schema file too large while reading: {}",
            path.display()
        )));
    }

    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn make_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "halpa-schema-source-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn inline_schema_is_returned_unchanged() {
        let schema = json!({"type": "object", "required": ["name"]});
        let loaded = load(&schema.clone().into(), &ValidatorConfig::default()).unwrap();
        assert_eq!(loaded, schema);
    }

    #[test]
    fn file_schema_is_parsed() {
        let dir = make_temp_dir("parse");
        let path = dir.join("schema.json");
        std::fs::write(&path, r#"{"type":"string"}"#).unwrap();

        let loaded = load(&path.clone().into(), &ValidatorConfig::default()).unwrap();
        assert_eq!(loaded, json!({"type": "string"}));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = make_temp_dir("missing");
        let path = dir.join("does-not-exist.json");

        let err = load(&path.into(), &ValidatorConfig::default()).unwrap_err();
        assert!(matches!(err, SchemaError::NotFound { .. }));
        assert!(err
            .to_string()
            .ends_with("does-not-exist.json does not exist"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = make_temp_dir("malformed");
        let path = dir.join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load(&path.into(), &ValidatorConfig::default()).unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn oversized_file_is_rejected() {
        let dir = make_temp_dir("oversized");
        let path = dir.join("schema.json");
        std::fs::write(&path, r#"{"type":"object"}"#).unwrap();

        let config = ValidatorConfig {
            max_schema_file_size: 4,
            ..ValidatorConfig::default()
        };
        let err = load(&path.into(), &config).unwrap_err();
        assert!(matches!(err, SchemaError::LoadFailed(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn strings_are_paths() {
        let source = SchemaSource::from("schemas/person.json");
        assert_eq!(source.path(), Some(Path::new("schemas/person.json")));
        assert_eq!(SchemaSource::from(json!({})).path(), None);
    }
}
