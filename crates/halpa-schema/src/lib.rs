//! Field-keyed JSON Schema validation.
//!
//! Validate a document against a schema given inline or as a path to a JSON
//! file, and get back either success or one human-readable message per
//! top-level field:
//!
//! ```no_run
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "required": ["name"],
//!     "properties": { "age": { "type": "number" } }
//! });
//!
//! let result = halpa_schema::validate(schema, &json!({ "age": "thirty" })).unwrap();
//! // {"fields": {"age": "'thirty' is not of type 'number'", "name": "name is required"}}
//! println!("{}", serde_json::to_string(&result).unwrap());
//! ```
//!
//! [`is_valid`] is the boolean variant. It treats a missing schema file and
//! a malformed schema as errors rather than folding them into the result.

pub mod config;
pub mod error;
pub mod message;
pub mod outcome;
pub mod refs;
pub mod source;
pub mod validator;

pub use config::ValidatorConfig;
pub use error::{Result, SchemaError};
pub use message::ROOT_FIELD;
pub use outcome::{FieldErrorMap, Validation, MISSING_SCHEMA_MESSAGE};
pub use source::{load, SchemaSource};
pub use validator::{is_valid, is_valid_with_config, validate, validate_with_config};
