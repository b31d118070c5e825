//! Command configuration loaded from CLI, environment, and files.
//!
//! This module provides the settings of the `github-pr-resource` validation
//! command, merged from command-line arguments, environment variables, and
//! configuration files using ortho-config's layered approach. The resource
//! source itself is not part of this configuration; it is read as a JSON
//! document from the file named here or from stdin.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in defaults (read stdin, no telemetry)
//! 2. **Configuration file** – `.github-pr-resource.toml` in current
//!    directory, home directory, or XDG config directory
//! 3. **Environment variables** – `GITHUB_PR_RESOURCE_SOURCE_FILE`
//! 4. **Command-line arguments** – `--source-file`/`-s` and `--telemetry`/`-T`
//!
//! # Configuration File
//!
//! ```toml
//! source_file = "ci/source.json"
//! telemetry = true
//! ```

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

/// Settings for the validation command.
///
/// # Example
///
/// ```no_run
/// use github_pr_resource::ResourceConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = ResourceConfig::load().expect("failed to load configuration");
/// let source_path = config.source_path();
/// assert!(source_path.is_none() || config.source_file.is_some());
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GITHUB_PR_RESOURCE",
    discovery(
        dotfile_name = ".github-pr-resource.toml",
        config_file_name = "github-pr-resource.toml",
        app_name = "github-pr-resource"
    )
)]
pub struct ResourceConfig {
    /// Path to a JSON file holding the resource source.
    ///
    /// When unset, the source is read from stdin.
    ///
    /// Can be provided via:
    /// - CLI: `--source-file <PATH>` or `-s <PATH>`
    /// - Environment: `GITHUB_PR_RESOURCE_SOURCE_FILE`
    /// - Config file: `source_file = "..."`
    #[ortho_config(cli_short = 's')]
    pub source_file: Option<String>,

    /// Writes validation telemetry to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry` / `-T`
    /// - Config file: `telemetry = true`
    #[ortho_config(cli_short = 'T')]
    pub telemetry: bool,
}

impl ResourceConfig {
    /// Returns the source file path, treating a blank value as unset.
    #[must_use]
    pub fn source_path(&self) -> Option<&Utf8Path> {
        self.source_file
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(Utf8Path::new)
    }
}
