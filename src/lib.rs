//! Validation of GitHub pull request resource sources.
//!
//! A CI pipeline configures the pull request resource with a flat `source`
//! record. This crate checks that record before it is used to authenticate
//! against GitHub: exactly one of personal access token or GitHub App
//! authentication must be configured, and GitHub Enterprise endpoints must be
//! supplied as a v3/v4 pair. Valid records collapse into typed
//! [`Credentials`] and [`ApiEndpoints`].

pub mod check;
pub mod config;
pub mod error;
mod fs;
pub mod input;
pub mod source;
pub mod telemetry;

pub use check::{ValidatedSource, check_source};
pub use config::ResourceConfig;
pub use error::ResourceError;
pub use input::{parse_source, read_source, read_source_file};
pub use source::{
    ApiEndpoints, ApplicationId, Credentials, GitHubAppCredentials, InstallationId,
    PersonalAccessToken, PrivateKeySource, RepositoryName, RepositoryOwner, RepositorySlug,
    Source, SourceError,
};
