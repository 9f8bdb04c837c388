mod common;

use common::{get, init_tracing, write_bundle, RecordingClient};
use mockingbird_core::config::ConfigError;
use mockingbird_core::{MockInterceptor, MockState, ProtocolChain, Settings};
use rstest::rstest;
use std::fs;
use std::sync::Arc;

const MANIFEST: &str =
    r#"[{"request": {"url": "://httpbin.org/headers"}, "response": {"code": 200}}]"#;

#[rstest]
#[case("mockingbird.yaml", "bundle: fixtures\nhandle_all_requests: true\n")]
#[case("mockingbird.json", r#"{"bundle": "fixtures", "handle_all_requests": true}"#)]
#[case(
    "mockingbird.jsonc",
    "{\n  // next to this file\n  \"bundle\": \"fixtures\",\n  \"handle_all_requests\": true\n}"
)]
fn test_settings_file_drives_interceptor(#[case] name: &str, #[case] content: &str) {
    init_tracing();
    let root = write_bundle("[]", &[("fixtures/bundle.json", MANIFEST.as_bytes())]);
    let settings_path = root.path().join(name);
    fs::write(&settings_path, content).unwrap();

    let state = Arc::new(MockState::new());
    Settings::from_file(&settings_path)
        .unwrap()
        .apply(&state)
        .unwrap();

    let mut chain = ProtocolChain::new();
    Arc::new(MockInterceptor::new(Arc::clone(&state))).register(&mut chain);

    let mut client = RecordingClient::default();
    assert!(chain.dispatch(&get("http://httpbin.org/headers"), &mut client));
    assert_eq!(client.head().map(|head| head.status), Some(200));

    let mut client = RecordingClient::default();
    assert!(chain.dispatch(&get("http://httpbin.org/anything"), &mut client));
    assert_eq!(client.head().map(|head| head.status), Some(501));
}

#[rstest]
fn test_settings_with_broken_bundle_change_nothing() {
    init_tracing();
    let root = write_bundle(
        MANIFEST,
        &[("broken/bundle.json", &b"{\"not\": \"an array\"}"[..])],
    );
    let settings_path = root.path().join("mockingbird.yaml");
    fs::write(&settings_path, "bundle: broken\nhandle_all_requests: true\n").unwrap();

    let state = MockState::new();
    state.set_mock_bundle(Some(root.path())).unwrap();

    let result = Settings::from_file(&settings_path).unwrap().apply(&state);
    assert!(matches!(result, Err(ConfigError::Bundle(_))));
    assert_eq!(state.active_bundle().map(|bundle| bundle.len()), Some(1));
    assert!(!state.handle_all_requests());
}

#[rstest]
fn test_settings_unknown_extension() {
    let root = write_bundle("[]", &[]);
    let settings_path = root.path().join("mockingbird.toml");
    fs::write(&settings_path, "bundle = \"x\"").unwrap();

    assert!(matches!(
        Settings::from_file(&settings_path),
        Err(ConfigError::UnknownFileType(_))
    ));
}
