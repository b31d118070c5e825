//! GitHub API endpoint selection.

use super::{Source, SourceError};

/// API endpoints the resource talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEndpoints {
    /// The public `github.com` APIs.
    Public,
    /// A GitHub Enterprise deployment.
    Enterprise {
        /// REST (v3) API base URL.
        v3: String,
        /// GraphQL (v4) API base URL.
        v4: String,
    },
}

impl ApiEndpoints {
    /// Returns `true` for a GitHub Enterprise endpoint pair.
    #[must_use]
    pub const fn is_enterprise(&self) -> bool {
        matches!(self, Self::Enterprise { .. })
    }
}

impl Source {
    /// Validates the source and returns the endpoints it targets.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure from [`Source::validate`].
    pub fn endpoints(&self) -> Result<ApiEndpoints, SourceError> {
        self.validate()?;

        let pair = self
            .v3_endpoint
            .as_deref()
            .filter(|v3| !v3.is_empty())
            .zip(self.v4_endpoint.as_deref().filter(|v4| !v4.is_empty()));

        Ok(pair.map_or(ApiEndpoints::Public, |(v3, v4)| ApiEndpoints::Enterprise {
            v3: v3.to_owned(),
            v4: v4.to_owned(),
        }))
    }
}
