mod common;

use claynova::config::{
    CORS_ORIGINS_VAR, DEFAULT_ALLOWED_ORIGINS, DEFAULT_API_PREFIX, DEFAULT_PROJECT_NAME,
    PROJECT_NAME_VAR, Settings,
};
use claynova::state::AppState;
use common::settings_with;

#[test]
fn test_defaults_without_overrides() {
    let settings = settings_with(&[]);
    assert_eq!(settings.project_name, DEFAULT_PROJECT_NAME);
    assert_eq!(settings.api_prefix, DEFAULT_API_PREFIX);
    assert_eq!(settings.allowed_origins, DEFAULT_ALLOWED_ORIGINS);
}

#[test]
fn test_scalar_override_leaves_other_fields() {
    let settings = settings_with(&[(PROJECT_NAME_VAR, "My API")]);
    assert_eq!(
        settings,
        Settings {
            project_name: "My API".to_string(),
            ..Settings::default()
        }
    );
}

#[test]
fn test_empty_project_name_ignored() {
    let settings = settings_with(&[(PROJECT_NAME_VAR, "")]);
    assert_eq!(settings.project_name, "Claynova Charm API");
}

#[test]
fn test_all_overrides_together() {
    let settings = settings_with(&[
        ("PROJECT_NAME", "Charm Staging"),
        ("API_V1_STR", "/api/v2"),
        (CORS_ORIGINS_VAR, "https://charm.example.com"),
    ]);
    assert_eq!(settings.project_name, "Charm Staging");
    assert_eq!(settings.api_prefix, "/api/v2");
    assert_eq!(settings.allowed_origins, vec!["https://charm.example.com"]);
    assert_eq!(settings.api_path("products"), "/api/v2/products");
}

#[test]
fn test_origin_list_cases() {
    let cases: [(&str, Vec<&str>); 4] = [
        ("https://a.com,https://b.com", vec!["https://a.com", "https://b.com"]),
        (" https://a.com , https://b.com ", vec!["https://a.com", "https://b.com"]),
        ("https://a.com,", vec!["https://a.com", ""]),
        (",", vec!["", ""]),
    ];

    for (raw, expected) in cases {
        let settings = settings_with(&[(CORS_ORIGINS_VAR, raw)]);
        assert_eq!(settings.allowed_origins, expected, "input: {raw:?}");
    }
}

#[test]
fn test_state_exposes_overridden_origins() {
    let state = AppState::new(settings_with(&[(CORS_ORIGINS_VAR, "https://a.com")]));
    let reader = state.clone();

    assert!(reader.settings().is_origin_allowed("https://a.com"));
    assert!(!reader.settings().is_origin_allowed("http://localhost:5173"));
}
