use halpa_schema::{is_valid_with_config, ValidatorConfig};

use crate::cmd::{read_document, CheckArgs};
use crate::exit::{schema_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_check, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let document = read_document(&args.document)?;
    let config = ValidatorConfig {
        validate_formats: !args.no_formats,
        ..ValidatorConfig::default()
    };

    let valid =
        is_valid_with_config(args.schema.as_path(), &document, &config).map_err(schema_error)?;
    tracing::info!(schema = %args.schema.display(), valid, "check complete");

    print_check(valid, format);
    Ok(if valid { SUCCESS } else { DATA_INVALID })
}
