//! Bookrate CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use bookrate::{BookrateConfig, BookrateError, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BookrateError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Scripted => cli::scripted::run(&config),
        OperationMode::Interactive => cli::rating_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`BookrateError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<BookrateConfig, BookrateError> {
    BookrateConfig::load().map_err(|error| BookrateError::Configuration {
        message: error.to_string(),
    })
}
