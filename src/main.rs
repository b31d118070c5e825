//! Command-line entrypoint validating a pull request resource source.

use std::io::{self, Write};
use std::process::ExitCode;

use github_pr_resource::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use github_pr_resource::{ResourceConfig, ResourceError, Source, check_source};
use ortho_config::OrthoConfig;

mod output;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ResourceError> {
    let config = load_config()?;
    let source = load_source(&config)?;

    let telemetry: Box<dyn TelemetrySink> = if config.telemetry {
        Box::new(StderrJsonlTelemetrySink)
    } else {
        Box::new(NoopTelemetrySink)
    };

    let validated = check_source(&source, telemetry.as_ref())?;
    output::write_summary(&validated)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ResourceError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ResourceConfig, ResourceError> {
    ResourceConfig::load().map_err(|error| ResourceError::Configuration {
        message: error.to_string(),
    })
}

fn load_source(config: &ResourceConfig) -> Result<Source, ResourceError> {
    config.source_path().map_or_else(
        || github_pr_resource::read_source(io::stdin().lock()),
        github_pr_resource::read_source_file,
    )
}
