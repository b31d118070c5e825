//! `owner/name` repository identifiers.

use std::fmt;

use super::{Source, SourceError};

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A repository identified as `owner/name`.
///
/// # Example
///
/// ```
/// use github_pr_resource::RepositorySlug;
///
/// let slug = RepositorySlug::parse("octocat/hello-world").expect("valid slug");
/// assert_eq!(slug.owner().as_str(), "octocat");
/// assert_eq!(slug.name().as_str(), "hello-world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySlug {
    owner: RepositoryOwner,
    name: RepositoryName,
}

impl RepositorySlug {
    /// Splits `input` into owner and name.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::MalformedRepository`] unless `input` contains
    /// exactly one `/` with a non-empty value on either side.
    pub fn parse(input: &str) -> Result<Self, SourceError> {
        let malformed = || SourceError::MalformedRepository {
            repository: input.to_owned(),
        };

        let (owner, name) = input.split_once('/').ok_or_else(malformed)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(malformed());
        }

        Ok(Self {
            owner: RepositoryOwner(owner.to_owned()),
            name: RepositoryName(name.to_owned()),
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn name(&self) -> &RepositoryName {
        &self.name
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}/{}", self.owner.as_str(), self.name.as_str())
    }
}

impl Source {
    /// Validates the source and splits its repository into owner and name.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure from [`Source::validate`], or
    /// [`SourceError::MalformedRepository`] when `repository` is not
    /// `owner/name`.
    pub fn repository_slug(&self) -> Result<RepositorySlug, SourceError> {
        self.validate()?;
        RepositorySlug::parse(&self.repository)
    }
}
