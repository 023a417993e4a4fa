use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use halpa_schema::{Validation, MISSING_SCHEMA_MESSAGE};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

pub fn print_validation(result: &Validation, format: OutputFormat) {
    println!("{}", render_validation(result, format));
}

pub fn print_check(valid: bool, format: OutputFormat) {
    match format {
        OutputFormat::Json | OutputFormat::Table => println!("{valid}"),
        OutputFormat::Pretty => println!("{}", if valid { "valid" } else { "invalid" }),
    }
}

fn render_validation(result: &Validation, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string(result).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Table => match result {
            Validation::Valid => "valid".to_string(),
            Validation::MissingSchema => MISSING_SCHEMA_MESSAGE.to_string(),
            Validation::Invalid { fields } => {
                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL)
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_header(vec!["FIELD", "MESSAGE"]);
                for (field, message) in fields {
                    table.add_row(vec![field.as_str(), message.as_str()]);
                }
                table.to_string()
            }
        },
        OutputFormat::Pretty => match result {
            Validation::Valid => "valid".to_string(),
            Validation::MissingSchema => format!("schema: {MISSING_SCHEMA_MESSAGE}"),
            Validation::Invalid { fields } => fields
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect::<Vec<_>>()
                .join("\n"),
        },
    }
}

#[cfg(test)]
mod tests {
    use halpa_schema::FieldErrorMap;

    use super::*;

    fn invalid() -> Validation {
        Validation::Invalid {
            fields: FieldErrorMap::from([
                ("age".to_string(), "'thirty' is not of type 'number'".to_string()),
                ("name".to_string(), "name is required".to_string()),
            ]),
        }
    }

    #[test]
    fn json_output_matches_result_shapes() {
        assert_eq!(render_validation(&Validation::Valid, OutputFormat::Json), "true");
        assert_eq!(
            render_validation(&Validation::MissingSchema, OutputFormat::Json),
            r#"{"schema":"schema file does not exist"}"#
        );
        assert_eq!(
            render_validation(&invalid(), OutputFormat::Json),
            r#"{"fields":{"age":"'thirty' is not of type 'number'","name":"name is required"}}"#
        );
    }

    #[test]
    fn pretty_output_lists_fields() {
        assert_eq!(
            render_validation(&invalid(), OutputFormat::Pretty),
            "age: 'thirty' is not of type 'number'\nname: name is required"
        );
    }

    #[test]
    fn table_output_contains_messages() {
        let table = render_validation(&invalid(), OutputFormat::Table);
        assert!(table.contains("FIELD"));
        assert!(table.contains("name is required"));
    }
}
