use halpa_schema::{validate_with_config, Validation, ValidatorConfig};

use crate::cmd::{read_document, ValidateArgs};
use crate::exit::{schema_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_validation, OutputFormat};

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let document = read_document(&args.document)?;
    let config = ValidatorConfig {
        validate_formats: !args.no_formats,
        ..ValidatorConfig::default()
    };

    let result =
        validate_with_config(args.schema.as_path(), &document, &config).map_err(schema_error)?;

    match &result {
        Validation::Valid => tracing::info!(schema = %args.schema.display(), "document is valid"),
        Validation::Invalid { fields } => tracing::info!(
            schema = %args.schema.display(),
            field_count = fields.len(),
            "document is invalid"
        ),
        Validation::MissingSchema => {
            tracing::warn!(schema = %args.schema.display(), "schema file does not exist")
        }
    }

    print_validation(&result, format);
    Ok(if result.is_valid() { SUCCESS } else { DATA_INVALID })
}
