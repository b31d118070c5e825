//! Validation telemetry events and sinks.
//!
//! The validation command records one event per run so that pipeline
//! operators can collect accept/reject signals without scraping messages.

use std::io;

use serde::{Deserialize, Serialize};

use crate::source::{ApiEndpoints, Credentials, Source, SourceError};

/// A structured telemetry event emitted by the validation command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A source passed validation.
    SourceValidated {
        /// Repository named by the source.
        repository: String,
        /// Authentication scheme, `access_token` or `github_app`.
        authentication: String,
        /// Whether GitHub Enterprise endpoints are configured.
        enterprise: bool,
    },
    /// A source was rejected.
    SourceRejected {
        /// Repository named by the source, possibly empty.
        repository: String,
        /// The validation message.
        reason: String,
    },
}

impl TelemetryEvent {
    /// Builds the event for an accepted source.
    #[must_use]
    pub fn validated(source: &Source, credentials: &Credentials, endpoints: &ApiEndpoints) -> Self {
        Self::SourceValidated {
            repository: source.repository.clone(),
            authentication: credentials.scheme().to_owned(),
            enterprise: endpoints.is_enterprise(),
        }
    }

    /// Builds the event for a rejected source.
    #[must_use]
    pub fn rejected(source: &Source, error: &SourceError) -> Self {
        Self::SourceRejected {
            repository: source.repository.clone(),
            reason: error.to_string(),
        }
    }
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events, used when `--telemetry` is off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Each event is written before the command's own diagnostic, so a pipeline
/// log shows the structured outcome followed by the validation message.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}
