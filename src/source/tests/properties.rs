//! Rule interaction tests across combinations of field values.
//!
//! Each test fixes the fields a rule depends on and sweeps the remaining
//! fields with `#[values]`, so a rule is checked against every combination
//! of the others.

use rstest::rstest;

use crate::{Source, SourceError};

const TOKEN: Option<&str> = Some("123456");
const V3: &str = "https://ghe.example.com/api/v3";
const V4: &str = "https://ghe.example.com/api/graphql";

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_owned)
}

#[expect(
    clippy::too_many_arguments,
    reason = "one parameter per swept source field"
)]
fn build(
    repository: &str,
    access_token: Option<&str>,
    use_github_app: bool,
    private_key: Option<&str>,
    private_key_file: Option<&str>,
    application_id: Option<i64>,
    installation_id: Option<i64>,
    endpoints: (Option<&str>, Option<&str>),
) -> Source {
    let (v3_endpoint, v4_endpoint) = endpoints;
    Source {
        repository: repository.to_owned(),
        access_token: owned(access_token),
        use_github_app,
        private_key: owned(private_key),
        private_key_file: owned(private_key_file),
        application_id,
        installation_id,
        v3_endpoint: owned(v3_endpoint),
        v4_endpoint: owned(v4_endpoint),
        ..Default::default()
    }
}

#[rstest]
fn empty_repository_always_fails_first(
    #[values(None, Some(""), TOKEN)] access_token: Option<&str>,
    #[values(false, true)] use_github_app: bool,
    #[values(None, Some("key.pem"))] private_key: Option<&str>,
    #[values(None, Some("/keys/app.pem"))] private_key_file: Option<&str>,
    #[values(None, Some(-1), Some(123_456))] application_id: Option<i64>,
    #[values(None, Some(0), Some(1))] installation_id: Option<i64>,
    #[values((None, None), (Some(V3), None), (None, Some(V4)), (Some(V3), Some(V4)))] endpoints: (
        Option<&str>,
        Option<&str>,
    ),
) {
    let source = build(
        "",
        access_token,
        use_github_app,
        private_key,
        private_key_file,
        application_id,
        installation_id,
        endpoints,
    );

    assert_eq!(source.validate(), Err(SourceError::MissingRepository));
}

#[rstest]
fn token_mode_without_token_fails(
    #[values(None, Some(""))] access_token: Option<&str>,
    #[values(None, Some("key.pem"))] private_key: Option<&str>,
    #[values(None, Some("/keys/app.pem"))] private_key_file: Option<&str>,
    #[values(None, Some(123_456))] application_id: Option<i64>,
    #[values(None, Some(1))] installation_id: Option<i64>,
    #[values((None, None), (Some(V3), None), (None, Some(V4)), (Some(V3), Some(V4)))] endpoints: (
        Option<&str>,
        Option<&str>,
    ),
) {
    let source = build(
        "test/test",
        access_token,
        false,
        private_key,
        private_key_file,
        application_id,
        installation_id,
        endpoints,
    );

    assert_eq!(source.validate(), Err(SourceError::MissingAccessToken));
}

#[rstest]
fn complete_app_configuration_succeeds(
    #[values(None, Some(""))] access_token: Option<&str>,
    #[values((Some("key.pem"), None), (None, Some("/keys/app.pem")), (Some("key.pem"), Some("/keys/app.pem")))]
    keys: (Option<&str>, Option<&str>),
    #[values(1, 123_456, i64::MAX)] application_id: i64,
    #[values(1, 42)] installation_id: i64,
) {
    let (private_key, private_key_file) = keys;
    let source = build(
        "test/test",
        access_token,
        true,
        private_key,
        private_key_file,
        Some(application_id),
        Some(installation_id),
        (None, None),
    );

    assert_eq!(source.validate(), Ok(()));
}

#[rstest]
fn app_mode_without_key_fails_regardless_of_identifiers(
    #[values(None, Some(""), TOKEN)] access_token: Option<&str>,
    #[values(None, Some(""))] private_key: Option<&str>,
    #[values(None, Some(""))] private_key_file: Option<&str>,
    #[values(None, Some(-5), Some(0), Some(123_456))] application_id: Option<i64>,
    #[values(None, Some(0), Some(1))] installation_id: Option<i64>,
    #[values((None, None), (Some(V3), None), (None, Some(V4)))] endpoints: (
        Option<&str>,
        Option<&str>,
    ),
) {
    let source = build(
        "test/test",
        access_token,
        true,
        private_key,
        private_key_file,
        application_id,
        installation_id,
        endpoints,
    );

    assert_eq!(source.validate(), Err(SourceError::MissingPrivateKey));
}

#[rstest]
fn app_mode_with_missing_identifier_fails(
    #[values(None, TOKEN)] access_token: Option<&str>,
    #[values((Some("key.pem"), None), (None, Some("/keys/app.pem")))] keys: (
        Option<&str>,
        Option<&str>,
    ),
    #[values(
        (None, Some(1)),
        (Some(123_456), None),
        (Some(0), Some(1)),
        (Some(123_456), Some(-1)),
        (None, None)
    )]
    identifiers: (Option<i64>, Option<i64>),
    #[values((None, None), (Some(V3), None))] endpoints: (Option<&str>, Option<&str>),
) {
    let (private_key, private_key_file) = keys;
    let (application_id, installation_id) = identifiers;
    let source = build(
        "test/test",
        access_token,
        true,
        private_key,
        private_key_file,
        application_id,
        installation_id,
        endpoints,
    );

    assert_eq!(source.validate(), Err(SourceError::MissingAppIdentifiers));
}

#[rstest]
fn app_mode_with_token_fails(
    #[values((Some("key.pem"), None), (None, Some("/keys/app.pem")))] keys: (
        Option<&str>,
        Option<&str>,
    ),
    #[values((None, None), (Some(V3), None), (None, Some(V4)))] endpoints: (
        Option<&str>,
        Option<&str>,
    ),
) {
    let (private_key, private_key_file) = keys;
    let source = build(
        "test/test",
        TOKEN,
        true,
        private_key,
        private_key_file,
        Some(123_456),
        Some(1),
        endpoints,
    );

    assert_eq!(source.validate(), Err(SourceError::RedundantAccessToken));
}

#[rstest]
fn unpaired_endpoint_fails_in_either_mode(
    #[values(false, true)] use_github_app: bool,
    #[values(
        ((Some(V3), None), SourceError::MissingV4Endpoint),
        ((Some(V3), Some("")), SourceError::MissingV4Endpoint),
        ((None, Some(V4)), SourceError::MissingV3Endpoint),
        ((Some(""), Some(V4)), SourceError::MissingV3Endpoint)
    )]
    case: ((Option<&str>, Option<&str>), SourceError),
) {
    let (endpoints, expected) = case;
    let access_token = if use_github_app { None } else { TOKEN };
    let source = build(
        "test/test",
        access_token,
        use_github_app,
        Some("key.pem"),
        None,
        Some(123_456),
        Some(1),
        endpoints,
    );

    assert_eq!(source.validate(), Err(expected));
}

#[rstest]
fn validation_is_idempotent(
    #[values("", "test/test")] repository: &str,
    #[values(None, TOKEN)] access_token: Option<&str>,
    #[values(false, true)] use_github_app: bool,
    #[values(None, Some("key.pem"))] private_key: Option<&str>,
    #[values(None, Some(1))] installation_id: Option<i64>,
    #[values((None, None), (Some(V3), None), (Some(V3), Some(V4)))] endpoints: (
        Option<&str>,
        Option<&str>,
    ),
) {
    let source = build(
        repository,
        access_token,
        use_github_app,
        private_key,
        None,
        Some(123_456),
        installation_id,
        endpoints,
    );
    let snapshot = source.clone();

    let first = source.validate();
    let second = source.validate();

    assert_eq!(first, second, "repeated validation should agree");
    assert_eq!(source, snapshot, "validation should not mutate the source");
}
