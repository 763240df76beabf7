use super::*;
use lingua_core::{args, Localizer};

const JSON_CATALOG: &str = r#"{
    "en": {
        "ping": "Pong! {latency}ms",
        "apples": {
            "count": ["You have an apple.", "You have {count} apples."]
        }
    },
    "fr": {
        "ping": "Bonjour! Ping is {latency}ms!"
    }
}"#;

const TOML_CATALOG: &str = r#"
[en]
ping = "Pong! {latency}ms"

[en.apples]
count = ["You have an apple.", "You have {count} apples."]

[fr]
ping = "Bonjour! Ping is {latency}ms!"
"#;

#[test]
fn json_and_toml_parse_to_the_same_catalog() {
    let from_json = from_json_str(JSON_CATALOG).unwrap();
    let from_toml = from_toml_str(TOML_CATALOG).unwrap();
    assert_eq!(from_json, from_toml);
}

#[test]
fn loaded_catalog_resolves() {
    let catalog = from_json_str(JSON_CATALOG).unwrap();
    let lingua = Localizer::new(catalog, "en");

    let text = lingua
        .localize("ping", "de", &args! { "latency" => 12 })
        .unwrap();
    assert_eq!(text, "Pong! 12ms");

    let text = lingua
        .pluralize("apples.count", 2, "en", &args! {})
        .unwrap();
    assert_eq!(text, "You have 2 apples.");
}

#[test]
fn load_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, JSON_CATALOG).unwrap();

    let catalog = load(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains("fr"));
}

#[test]
fn load_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, TOML_CATALOG).unwrap();

    let catalog = load(&path).unwrap();
    assert_eq!(catalog, from_json_str(JSON_CATALOG).unwrap());
}

#[test]
fn missing_file_is_reported() {
    let err = load("/nonexistent/catalog.json").unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound(_)));
}

#[test]
fn unknown_extension_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.yaml");
    std::fs::write(&path, "en: {}").unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = from_json_str("{not json").unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = from_toml_str("[en\nping = ").unwrap_err();
    assert!(matches!(err, LoadError::Toml(_)));
}

#[test]
fn wrong_shape_is_a_shape_error() {
    let err = from_json_str(r#"["en", "fr"]"#).unwrap_err();
    assert!(matches!(err, LoadError::Shape(_)));

    let err = from_json_str(r#"{"en": "flat string"}"#).unwrap_err();
    assert!(matches!(err, LoadError::Shape(_)));
}
