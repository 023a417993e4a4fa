use std::fmt;
use std::io;

use halpa_schema::SchemaError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const SCHEMA_INVALID: i32 = 65;
pub const NO_INPUT: i32 = 66;
pub const PERMISSION_DENIED: i32 = 77;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::NotFound => NO_INPUT,
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        _ => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn schema_error(err: SchemaError) -> CliError {
    let code = match &err {
        SchemaError::NotFound { .. } => NO_INPUT,
        SchemaError::InvalidSchema(_) => SCHEMA_INVALID,
        SchemaError::Parse(_) => DATA_INVALID,
        SchemaError::LoadFailed(_) => FAILURE,
    };
    CliError::new(code, err.to_string())
}
