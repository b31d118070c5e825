//! Unit tests for source validation and typed views.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared fixtures
//! - `validation`: Rule order and literal messages
//! - `properties`: Rule interactions across field combinations
//! - `credentials`: Authentication scheme selection and key loading
//! - `endpoints`: Endpoint pair selection
//! - `repository`: `owner/name` parsing
//! - `deserialisation`: JSON field names and defaults

mod helpers;
mod properties;
