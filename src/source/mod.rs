//! Resource source configuration and its validation rules.
//!
//! A [`Source`] is the flat record a pipeline author writes under `source:`
//! for the GitHub pull request resource. It accepts two authentication
//! schemes and an optional GitHub Enterprise endpoint pair, so several field
//! combinations are ambiguous or contradictory. [`Source::validate`] rejects
//! those combinations and the typed accessors ([`Source::credentials`],
//! [`Source::endpoints`], [`Source::repository_slug`]) collapse a valid record
//! into unambiguous variants.
//!
//! # Example
//!
//! ```
//! use github_pr_resource::{Credentials, Source};
//!
//! let source: Source = serde_json::from_str(
//!     r#"{"repository": "test/test", "access_token": "123456"}"#,
//! )
//! .expect("source should deserialise");
//!
//! assert!(source.validate().is_ok());
//! assert!(matches!(source.credentials(), Ok(Credentials::AccessToken(_))));
//! ```

use serde::{Deserialize, Deserializer, Serialize};

pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod repository;
pub mod validation;

pub use credentials::{
    ApplicationId, Credentials, GitHubAppCredentials, InstallationId, PersonalAccessToken,
    PrivateKeySource,
};
pub use endpoints::ApiEndpoints;
pub use error::SourceError;
pub use repository::{RepositoryName, RepositoryOwner, RepositorySlug};

/// Source configuration supplied to the resource by the pipeline.
///
/// Every string field follows the "empty means absent" convention: `None`
/// and `Some("")` are treated identically by validation. Numeric identifiers
/// are unset when zero or negative. A JSON `null` reads as the field's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Source {
    /// Target repository in `owner/name` form.
    #[serde(deserialize_with = "null_as_default")]
    pub repository: String,

    /// Personal access token used when GitHub App authentication is off.
    pub access_token: Option<String>,

    /// Selects GitHub App authentication instead of a personal access token.
    #[serde(deserialize_with = "null_as_default")]
    pub use_github_app: bool,

    /// Inline PEM-encoded GitHub App private key.
    pub private_key: Option<String>,

    /// Path to a PEM-encoded GitHub App private key.
    pub private_key_file: Option<String>,

    /// GitHub App identifier.
    pub application_id: Option<i64>,

    /// GitHub App installation identifier.
    pub installation_id: Option<i64>,

    /// GitHub Enterprise REST API endpoint.
    pub v3_endpoint: Option<String>,

    /// GitHub Enterprise GraphQL API endpoint.
    pub v4_endpoint: Option<String>,

    /// Only report pull requests that touch these path patterns.
    #[serde(deserialize_with = "null_as_default")]
    pub paths: Vec<String>,

    /// Skip pull requests that only touch these path patterns.
    #[serde(deserialize_with = "null_as_default")]
    pub ignore_paths: Vec<String>,

    /// Report pull requests whose commits request `[ci skip]`.
    #[serde(deserialize_with = "null_as_default")]
    pub disable_ci_skip: bool,

    /// Skip TLS verification when talking to GitHub.
    #[serde(deserialize_with = "null_as_default")]
    pub skip_ssl_verification: bool,

    /// Ignore pull requests opened from forks.
    #[serde(deserialize_with = "null_as_default")]
    pub disable_forks: bool,

    /// Ignore draft pull requests.
    #[serde(deserialize_with = "null_as_default")]
    pub ignore_drafts: bool,

    /// Do not fetch Git LFS objects when cloning.
    #[serde(deserialize_with = "null_as_default")]
    pub disable_git_lfs: bool,

    /// Base64-encoded git-crypt key used to unlock the checkout.
    pub git_crypt_key: Option<String>,

    /// Only report pull requests targeting this branch.
    pub base_branch: Option<String>,

    /// Minimum number of approving reviews a pull request needs.
    #[serde(deserialize_with = "null_as_default")]
    pub required_review_approvals: i64,

    /// Only report pull requests carrying one of these labels.
    #[serde(deserialize_with = "null_as_default")]
    pub labels: Vec<String>,

    /// Pull request states to report (for example `OPEN`).
    #[serde(deserialize_with = "null_as_default")]
    pub states: Vec<String>,

    /// Teams whose pull requests are trusted.
    #[serde(deserialize_with = "null_as_default")]
    pub trusted_teams: Vec<String>,

    /// Users whose pull requests are trusted.
    #[serde(deserialize_with = "null_as_default")]
    pub trusted_users: Vec<String>,
}

impl Source {
    /// Returns `true` when a personal access token is configured.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        is_set(self.access_token.as_deref())
    }

    /// Returns `true` when either private key field is configured.
    #[must_use]
    pub fn has_private_key(&self) -> bool {
        is_set(self.private_key.as_deref()) || is_set(self.private_key_file.as_deref())
    }

    /// Returns `true` when both GitHub App identifiers are positive.
    #[must_use]
    pub fn has_app_identifiers(&self) -> bool {
        is_positive(self.application_id) && is_positive(self.installation_id)
    }

    /// Returns `true` when the REST endpoint override is configured.
    #[must_use]
    pub fn has_v3_endpoint(&self) -> bool {
        is_set(self.v3_endpoint.as_deref())
    }

    /// Returns `true` when the GraphQL endpoint override is configured.
    #[must_use]
    pub fn has_v4_endpoint(&self) -> bool {
        is_set(self.v4_endpoint.as_deref())
    }
}

/// Reads a JSON `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Empty strings count as absent.
fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|inner| !inner.is_empty())
}

/// Zero and negative identifiers count as absent.
fn is_positive(value: Option<i64>) -> bool {
    value.is_some_and(|inner| inner > 0)
}

#[cfg(test)]
mod tests;
