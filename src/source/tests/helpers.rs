//! Shared fixtures for source tests.

use rstest::fixture;

use crate::Source;

/// A minimal source using personal access token authentication.
#[fixture]
pub fn token_source() -> Source {
    Source {
        repository: "test/test".to_owned(),
        access_token: Some("123456".to_owned()),
        ..Default::default()
    }
}

/// A minimal source using GitHub App authentication with an inline key.
#[fixture]
pub fn app_source() -> Source {
    Source {
        repository: "test/test".to_owned(),
        use_github_app: true,
        private_key: Some("key.pem".to_owned()),
        application_id: Some(123_456),
        installation_id: Some(1),
        ..Default::default()
    }
}

/// Sets the enterprise endpoint pair on `source`.
pub fn with_endpoints(source: Source, v3: Option<&str>, v4: Option<&str>) -> Source {
    Source {
        v3_endpoint: v3.map(str::to_owned),
        v4_endpoint: v4.map(str::to_owned),
        ..source
    }
}
