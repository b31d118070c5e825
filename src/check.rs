//! One-shot source check combining validation, typed views, and telemetry.

use crate::source::{ApiEndpoints, Credentials, Source, SourceError};
use crate::telemetry::{TelemetryEvent, TelemetrySink};

/// A source that passed validation, collapsed into its typed views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSource {
    /// Repository named by the source.
    pub repository: String,
    /// Selected authentication scheme.
    pub credentials: Credentials,
    /// Selected API endpoints.
    pub endpoints: ApiEndpoints,
}

impl ValidatedSource {
    /// One-line human readable summary of the accepted source.
    #[must_use]
    pub fn summary(&self) -> String {
        let endpoints = if self.endpoints.is_enterprise() {
            "enterprise"
        } else {
            "public"
        };
        format!(
            "source valid: repository {} ({}, {endpoints} endpoints)",
            self.repository,
            self.credentials.scheme()
        )
    }
}

/// Validates `source`, records the outcome on `telemetry`, and returns the
/// typed views of an accepted source.
///
/// # Errors
///
/// Returns the first [`SourceError`] raised by validation or while building
/// the credentials.
pub fn check_source(
    source: &Source,
    telemetry: &dyn TelemetrySink,
) -> Result<ValidatedSource, SourceError> {
    match build(source) {
        Ok(validated) => {
            telemetry.record(TelemetryEvent::validated(
                source,
                &validated.credentials,
                &validated.endpoints,
            ));
            Ok(validated)
        }
        Err(error) => {
            telemetry.record(TelemetryEvent::rejected(source, &error));
            Err(error)
        }
    }
}

fn build(source: &Source) -> Result<ValidatedSource, SourceError> {
    let credentials = source.credentials()?;
    let endpoints = source.endpoints()?;
    Ok(ValidatedSource {
        repository: source.repository.clone(),
        credentials,
        endpoints,
    })
}
