use jsonschema::Validator;
use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::error::{Result, SchemaError};
use crate::message::{render, FieldError};
use crate::outcome::{FieldErrorMap, Validation};
use crate::refs::normalize_local_refs;
use crate::source::{load, SchemaSource};

/// Validate `document` against a schema, collecting one message per field.
///
/// A missing schema file is reported as [`Validation::MissingSchema`]
/// instead of an error. A structurally invalid schema is reported through
/// the field map like any document violation. Other load failures are
/// returned as errors.
pub fn validate(source: impl Into<SchemaSource>, document: &Value) -> Result<Validation> {
    validate_with_config(source, document, &ValidatorConfig::default())
}

/// [`validate`] with explicit config.
pub fn validate_with_config(
    source: impl Into<SchemaSource>,
    document: &Value,
    config: &ValidatorConfig,
) -> Result<Validation> {
    let schema = match load(&source.into(), config) {
        Ok(schema) => schema,
        Err(SchemaError::NotFound { path }) => {
            tracing::debug!(path = %path.display(), "schema file missing");
            return Ok(Validation::MissingSchema);
        }
        Err(err) => return Err(err),
    };

    let errors = match build_validator(&schema, config) {
        Ok(validator) => validator
            .iter_errors(document)
            .map(|err| FieldError::from_error(&err))
            .collect::<Vec<_>>(),
        Err(err) => vec![FieldError::from_error(&err)],
    };

    if errors.is_empty() {
        return Ok(Validation::Valid);
    }

    tracing::debug!(error_count = errors.len(), "document failed validation");
    Ok(Validation::Invalid {
        fields: reduce_errors(errors),
    })
}

/// Check `document` against a schema, returning only whether it is valid.
///
/// Unlike [`validate`], a missing schema file is an error
/// ([`SchemaError::NotFound`]) and a structurally invalid schema is an
/// error ([`SchemaError::InvalidSchema`]). Document violations against a
/// well-formed schema return `Ok(false)`.
pub fn is_valid(source: impl Into<SchemaSource>, document: &Value) -> Result<bool> {
    is_valid_with_config(source, document, &ValidatorConfig::default())
}

/// [`is_valid`] with explicit config.
pub fn is_valid_with_config(
    source: impl Into<SchemaSource>,
    document: &Value,
    config: &ValidatorConfig,
) -> Result<bool> {
    let schema = load(&source.into(), config)?;
    let validator = build_validator(&schema, config)
        .map_err(|err| SchemaError::InvalidSchema(render(&err)))?;
    Ok(validator.is_valid(document))
}

fn build_validator(
    schema: &Value,
    config: &ValidatorConfig,
) -> std::result::Result<Validator, jsonschema::ValidationError<'static>> {
    let mut schema = schema.clone();
    let rewritten = normalize_local_refs(&mut schema);
    if rewritten > 0 {
        tracing::debug!(rewritten, "normalized local $ref fragments");
    }

    jsonschema::options()
        .should_validate_formats(config.validate_formats)
        .build(&schema)
}

/// Fold errors into a field map, keeping the first message per field.
fn reduce_errors(errors: impl IntoIterator<Item = FieldError>) -> FieldErrorMap {
    let mut fields = FieldErrorMap::new();
    for FieldError { field, message } in errors {
        tracing::trace!(field = %field, message = %message, "field error");
        fields.entry(field).or_insert(message);
    }
    fields
}
