/// Controls how schemas are loaded and documents are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// When true, `format` keywords (`date`, `regex`, ...) are asserted
    /// rather than treated as annotations.
    pub validate_formats: bool,
    /// Maximum bytes allowed for a schema file.
    pub max_schema_file_size: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            validate_formats: true,
            max_schema_file_size: 256 * 1024,
        }
    }
}
