use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use serde_json::Value;

use crate::exit::{io_error, CliError, CliResult, DATA_INVALID};
use crate::output::OutputFormat;

pub mod check;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a document and report one message per failing field.
    Validate(ValidateArgs),
    /// Check a document and report only whether it is valid.
    Check(CheckArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Validate(args) => validate::run(args, format),
        Command::Check(args) => check::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the JSON Schema file.
    pub schema: PathBuf,
    /// Path to the JSON document, or `-` for stdin.
    pub document: PathBuf,
    /// Treat `format` keywords as annotations only.
    #[arg(long)]
    pub no_formats: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the JSON Schema file.
    pub schema: PathBuf,
    /// Path to the JSON document, or `-` for stdin.
    pub document: PathBuf,
    /// Treat `format` keywords as annotations only.
    #[arg(long)]
    pub no_formats: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

pub(crate) fn read_document(path: &Path) -> CliResult<Value> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|err| io_error("failed reading stdin", err))?;
        text
    } else {
        std::fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?
    };

    serde_json::from_str(&text).map_err(|err| {
        CliError::new(
            DATA_INVALID,
            format!("{} is not valid JSON: {err}", path.display()),
        )
    })
}
