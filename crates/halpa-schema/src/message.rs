//! Turns engine errors into `(field, message)` pairs.
//!
//! Messages for the common keywords use a fixed phrasing with the offending
//! value quoted; everything else falls back to the engine's own text.

use jsonschema::error::{TypeKind, ValidationErrorKind};
use jsonschema::ValidationError;
use serde_json::Value;

/// Field key used for errors located at the document root.
pub const ROOT_FIELD: &str = "_root";

/// A single reduced error: the top-level field it belongs to and its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Reduce an engine error, keyed by the first segment of its location.
    ///
    /// Schema compile errors go through here too; their location points into
    /// the schema, so they land under keys such as `properties`.
    pub(crate) fn from_error(error: &ValidationError<'_>) -> Self {
        let segments = pointer_segments(&error.instance_path().to_string());
        let field = match (segments.into_iter().next(), required_property(error)) {
            (Some(first), _) => first,
            (None, Some(property)) => property,
            (None, None) => ROOT_FIELD.to_string(),
        };
        Self {
            field,
            message: render(error),
        }
    }
}

/// Render an engine error as a human-readable message.
pub fn render(error: &ValidationError<'_>) -> String {
    let instance = error.instance();
    match error.kind() {
        ValidationErrorKind::Required { property, .. } => {
            format!("{} is required", property_name(property))
        }
        ValidationErrorKind::Type { kind, .. } => {
            let expected: Vec<String> = match kind {
                TypeKind::Single(ty) => vec![quote_str(&ty.to_string())],
                TypeKind::Multiple(types) => {
                    types.iter().map(|ty| quote_str(&ty.to_string())).collect()
                }
            };
            format!(
                "{} is not of type {}",
                quote(instance),
                expected.join(", ")
            )
        }
        ValidationErrorKind::Format { format, .. } => {
            format!("{} is not a {}", quote(instance), quote_str(format))
        }
        ValidationErrorKind::AnyOf { .. } => format!(
            "{} is not valid under any of the given schemas",
            quote(instance)
        ),
        ValidationErrorKind::Enum { options, .. } => {
            format!("{} is not one of {}", quote(instance), quote(options))
        }
        _ => error.to_string(),
    }
}

fn required_property(error: &ValidationError<'_>) -> Option<String> {
    match error.kind() {
        ValidationErrorKind::Required { property, .. } => Some(property_name(property)),
        _ => None,
    }
}

fn property_name(property: &Value) -> String {
    match property.as_str() {
        Some(name) => name.to_string(),
        None => property.to_string(),
    }
}

/// Split a JSON pointer into unescaped reference tokens.
fn pointer_segments(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer
        .split('/')
        .skip(1)
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect()
}

/// Quote a value for inclusion in a message.
///
/// Strings are single-quoted, booleans and null are spelled `True`,
/// `False` and `None`, containers are rendered element by element, and
/// numbers use their JSON text.
pub(crate) fn quote(value: &Value) -> String {
    match value {
        Value::String(text) => quote_str(text),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(quote).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{}: {}", quote_str(key), quote(value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        Value::Number(number) => number.to_string(),
    }
}

fn quote_str(text: &str) -> String {
    if text.contains('\'') && !text.contains('"') {
        format!("\"{text}\"")
    } else {
        format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn first_error(schema: &Value, instance: &Value) -> FieldError {
        let validator = jsonschema::options()
            .should_validate_formats(true)
            .build(schema)
            .unwrap();
        let error = validator.iter_errors(instance).next().unwrap();
        FieldError::from_error(&error)
    }

    #[test]
    fn quoting() {
        assert_eq!(quote(&json!("thirty")), "'thirty'");
        assert_eq!(quote(&json!("it's")), "\"it's\"");
        assert_eq!(quote(&json!(30)), "30");
        assert_eq!(quote(&json!(null)), "None");
        assert_eq!(quote(&json!(true)), "True");
        assert_eq!(quote(&json!(false)), "False");
        assert_eq!(quote(&json!(1.5)), "1.5");
        assert_eq!(quote(&json!([true, null])), "[True, None]");
        assert_eq!(quote(&json!(["married", "single"])), "['married', 'single']");
        assert_eq!(quote(&json!({"a": 1})), "{'a': 1}");
    }

    #[test]
    fn pointer_segments_are_unescaped() {
        assert!(pointer_segments("").is_empty());
        assert_eq!(pointer_segments("/age"), vec!["age"]);
        assert_eq!(pointer_segments("/a~1b/0"), vec!["a/b", "0"]);
        assert_eq!(pointer_segments("/t~0x"), vec!["t~x"]);
    }

    #[test]
    fn required_error_is_keyed_by_missing_property() {
        let schema = json!({"type": "object", "required": ["name"]});
        let error = first_error(&schema, &json!({}));
        assert_eq!(error.field, "name");
        assert_eq!(error.message, "name is required");
    }

    #[test]
    fn nested_required_error_is_keyed_by_top_level_field() {
        let schema = json!({
            "type": "object",
            "properties": {
                "address": {"type": "object", "required": ["street"]}
            }
        });
        let error = first_error(&schema, &json!({"address": {}}));
        assert_eq!(error.field, "address");
        assert_eq!(error.message, "street is required");
    }

    #[test]
    fn type_error_quotes_value_and_type() {
        let schema = json!({"properties": {"age": {"type": "number"}}});
        let error = first_error(&schema, &json!({"age": "thirty"}));
        assert_eq!(error.field, "age");
        assert_eq!(error.message, "'thirty' is not of type 'number'");
    }

    #[test]
    fn format_error_names_format() {
        let schema = json!({"properties": {"hired_at": {"type": "string", "format": "date"}}});
        let error = first_error(&schema, &json!({"hired_at": "last year"}));
        assert_eq!(error.field, "hired_at");
        assert_eq!(error.message, "'last year' is not a 'date'");
    }

    #[test]
    fn enum_error_lists_options() {
        let schema = json!({"properties": {"status": {"enum": ["married", "single"]}}});
        let error = first_error(&schema, &json!({"status": "poly"}));
        assert_eq!(error.field, "status");
        assert_eq!(error.message, "'poly' is not one of ['married', 'single']");
    }

    #[test]
    fn multiple_types_are_all_quoted() {
        let schema = json!({"properties": {"id": {"type": ["string", "number"]}}});
        let error = first_error(&schema, &json!({"id": false}));
        assert_eq!(error.field, "id");
        assert!(error.message.starts_with("False is not of type "));
        assert!(error.message.contains("'string'"));
        assert!(error.message.contains("'number'"));
        assert!(!error.message.contains('"'));
    }

    #[test]
    fn root_error_uses_root_field() {
        let schema = json!({"type": "object"});
        let error = first_error(&schema, &json!([1, 2]));
        assert_eq!(error.field, ROOT_FIELD);
        assert_eq!(error.message, "[1, 2] is not of type 'object'");
    }

    #[test]
    fn schema_error_is_keyed_by_first_schema_segment() {
        let schema = json!({"type": "object", "properties": {"name": {"type": "sting"}}});
        let error = match jsonschema::validator_for(&schema) {
            Ok(_) => panic!("schema with unknown type should not compile"),
            Err(err) => err,
        };
        let reduced = FieldError::from_error(&error);
        assert_eq!(reduced.field, "properties");
        assert_eq!(
            reduced.message,
            "'sting' is not valid under any of the given schemas"
        );
    }
}
