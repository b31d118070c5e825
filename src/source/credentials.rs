//! Typed authentication credentials derived from a validated [`Source`].

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

use super::{Source, SourceError};
use crate::fs::read_utf8_file;

/// Personal access token wrapper enforcing presence.
///
/// The `Debug` implementation never prints the token.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::MissingToken`] when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, SourceError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SourceError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Wraps a token the validator has already proved non-empty, keeping it
    /// byte for byte.
    pub(crate) const fn from_validated(token: String) -> Self {
        Self(token)
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PersonalAccessToken(<redacted>)")
    }
}

/// GitHub App identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationId(u64);

impl ApplicationId {
    /// Wraps a raw identifier, returning `None` for zero or negative values.
    #[must_use]
    pub fn new(value: i64) -> Option<Self> {
        positive(value).map(Self)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// GitHub App installation identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallationId(u64);

impl InstallationId {
    /// Wraps a raw identifier, returning `None` for zero or negative values.
    #[must_use]
    pub fn new(value: i64) -> Option<Self> {
        positive(value).map(Self)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

fn positive(value: i64) -> Option<u64> {
    u64::try_from(value).ok().filter(|inner| *inner > 0)
}

/// Where the GitHub App private key comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum PrivateKeySource {
    /// PEM text supplied directly in `private_key`.
    Inline(String),
    /// PEM file named by `private_key_file`.
    File(Utf8PathBuf),
}

impl PrivateKeySource {
    /// Selects the key source from a record, preferring the inline key when
    /// both fields are set.
    #[must_use]
    pub fn from_source(source: &Source) -> Option<Self> {
        if let Some(key) = source.private_key.as_deref().filter(|key| !key.is_empty()) {
            return Some(Self::Inline(key.to_owned()));
        }

        source
            .private_key_file
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| Self::File(Utf8PathBuf::from(path)))
    }

    /// Returns the PEM-encoded key material.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::PrivateKeyUnreadable`] when the key file cannot
    /// be opened or read.
    pub fn load(&self) -> Result<String, SourceError> {
        match self {
            Self::Inline(key) => Ok(key.clone()),
            Self::File(path) => read_key_file(path),
        }
    }
}

impl fmt::Debug for PrivateKeySource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline(_) => formatter.write_str("Inline(<redacted>)"),
            Self::File(path) => formatter.debug_tuple("File").field(path).finish(),
        }
    }
}

fn read_key_file(path: &Utf8Path) -> Result<String, SourceError> {
    read_utf8_file(path).map_err(|error| {
        tracing::warn!("failed to read private key file '{path}': {error}");
        SourceError::PrivateKeyUnreadable {
            path: path.to_string(),
            message: error.to_string(),
        }
    })
}

/// GitHub App credentials, complete by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubAppCredentials {
    application_id: ApplicationId,
    installation_id: InstallationId,
    private_key: PrivateKeySource,
}

impl GitHubAppCredentials {
    /// Builds App credentials from their parts.
    #[must_use]
    pub const fn new(
        application_id: ApplicationId,
        installation_id: InstallationId,
        private_key: PrivateKeySource,
    ) -> Self {
        Self {
            application_id,
            installation_id,
            private_key,
        }
    }

    /// GitHub App identifier.
    #[must_use]
    pub const fn application_id(&self) -> ApplicationId {
        self.application_id
    }

    /// Installation identifier.
    #[must_use]
    pub const fn installation_id(&self) -> InstallationId {
        self.installation_id
    }

    /// Private key source.
    #[must_use]
    pub const fn private_key(&self) -> &PrivateKeySource {
        &self.private_key
    }
}

/// The single authentication scheme a valid source selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Static personal access token.
    AccessToken(PersonalAccessToken),
    /// GitHub App installation credentials.
    GitHubApp(GitHubAppCredentials),
}

impl Credentials {
    /// Short name of the scheme, as used in logs and summaries.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        match self {
            Self::AccessToken(_) => "access_token",
            Self::GitHubApp(_) => "github_app",
        }
    }
}

impl Source {
    /// Validates the source and returns its authentication scheme.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure from [`Source::validate`].
    pub fn credentials(&self) -> Result<Credentials, SourceError> {
        self.validate()?;

        if !self.use_github_app {
            let token = self.access_token.clone().unwrap_or_default();
            return Ok(Credentials::AccessToken(PersonalAccessToken::from_validated(
                token,
            )));
        }

        let application_id = self
            .application_id
            .and_then(ApplicationId::new)
            .ok_or(SourceError::MissingAppIdentifiers)?;
        let installation_id = self
            .installation_id
            .and_then(InstallationId::new)
            .ok_or(SourceError::MissingAppIdentifiers)?;
        let private_key =
            PrivateKeySource::from_source(self).ok_or(SourceError::MissingPrivateKey)?;

        Ok(Credentials::GitHubApp(GitHubAppCredentials::new(
            application_id,
            installation_id,
            private_key,
        )))
    }
}
