//! Errors raised while validating a resource source.
//!
//! The first seven variants are the validation failures reported by
//! [`Source::validate`](super::Source::validate). Their messages are matched
//! verbatim by pipeline operators and downstream tooling, so the text must not
//! change.

use thiserror::Error;

/// Failures surfaced while validating or interpreting a [`Source`](super::Source).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The `repository` field was empty.
    #[error("repository must be set")]
    MissingRepository,

    /// Token authentication was selected without a token.
    #[error("access_token must be set if not using GitHub App authentication")]
    MissingAccessToken,

    /// GitHub App authentication was selected without key material.
    #[error(
        "Either private_key or private_key_file should be supplied if using GitHub App authentication"
    )]
    MissingPrivateKey,

    /// GitHub App authentication was selected without both identifiers.
    #[error("application_id and installation_id must be set if using GitHub App authentication")]
    MissingAppIdentifiers,

    /// A personal access token was supplied alongside GitHub App credentials.
    #[error("access_token is not required when using GitHub App authentication")]
    RedundantAccessToken,

    /// `v3_endpoint` was supplied without `v4_endpoint`.
    #[error("v4_endpoint must be set together with v3_endpoint")]
    MissingV4Endpoint,

    /// `v4_endpoint` was supplied without `v3_endpoint`.
    #[error("v3_endpoint must be set together with v4_endpoint")]
    MissingV3Endpoint,

    /// The repository is not in `owner/name` form.
    #[error("malformed repository: {repository}")]
    MalformedRepository {
        /// The rejected repository value.
        repository: String,
    },

    /// A personal access token was blank once surrounding whitespace was
    /// removed.
    #[error("personal access token is required")]
    MissingToken,

    /// The file named by `private_key_file` could not be read.
    #[error("failed to read private_key_file '{path}': {message}")]
    PrivateKeyUnreadable {
        /// Path taken from the source.
        path: String,
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl SourceError {
    /// Returns `true` for the failures produced by the ordered validation
    /// rules, as opposed to errors raised while building typed views.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingRepository
                | Self::MissingAccessToken
                | Self::MissingPrivateKey
                | Self::MissingAppIdentifiers
                | Self::RedundantAccessToken
                | Self::MissingV4Endpoint
                | Self::MissingV3Endpoint
        )
    }
}
