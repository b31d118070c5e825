//! Ordered consistency rules for [`Source`].
//!
//! Rules run in a fixed order and the first violation is returned. Callers
//! match on the message text, so neither the order nor the messages may
//! change.

use super::{Source, SourceError};

impl Source {
    /// Checks that the source describes exactly one authentication scheme and
    /// a complete endpoint pair.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule:
    ///
    /// 1. [`SourceError::MissingRepository`] when `repository` is empty.
    /// 2. [`SourceError::MissingAccessToken`] when token authentication has no
    ///    token.
    /// 3. [`SourceError::MissingPrivateKey`], then
    ///    [`SourceError::MissingAppIdentifiers`], then
    ///    [`SourceError::RedundantAccessToken`] when GitHub App authentication
    ///    is incomplete or also carries a token.
    /// 4. [`SourceError::MissingV4Endpoint`] or
    ///    [`SourceError::MissingV3Endpoint`] when only one endpoint is set.
    pub fn validate(&self) -> Result<(), SourceError> {
        validate(self)
    }
}

/// Validates `source`, returning the first violated rule.
///
/// # Errors
///
/// See [`Source::validate`].
pub fn validate(source: &Source) -> Result<(), SourceError> {
    let outcome = check_repository(source)
        .and_then(|()| check_authentication(source))
        .and_then(|()| check_endpoints(source));

    match &outcome {
        Ok(()) => tracing::debug!(
            repository = %source.repository,
            use_github_app = source.use_github_app,
            "source passed validation"
        ),
        Err(error) => tracing::debug!(
            repository = %source.repository,
            "source rejected: {error}"
        ),
    }

    outcome
}

fn check_repository(source: &Source) -> Result<(), SourceError> {
    if source.repository.is_empty() {
        return Err(SourceError::MissingRepository);
    }
    Ok(())
}

fn check_authentication(source: &Source) -> Result<(), SourceError> {
    if source.use_github_app {
        check_github_app(source)
    } else if source.has_access_token() {
        Ok(())
    } else {
        Err(SourceError::MissingAccessToken)
    }
}

fn check_github_app(source: &Source) -> Result<(), SourceError> {
    if !source.has_private_key() {
        return Err(SourceError::MissingPrivateKey);
    }
    if !source.has_app_identifiers() {
        return Err(SourceError::MissingAppIdentifiers);
    }
    if source.has_access_token() {
        return Err(SourceError::RedundantAccessToken);
    }
    Ok(())
}

fn check_endpoints(source: &Source) -> Result<(), SourceError> {
    match (source.has_v3_endpoint(), source.has_v4_endpoint()) {
        (true, false) => Err(SourceError::MissingV4Endpoint),
        (false, true) => Err(SourceError::MissingV3Endpoint),
        _ => Ok(()),
    }
}
