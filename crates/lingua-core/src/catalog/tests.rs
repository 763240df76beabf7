use serde_json::json;

use super::*;

#[test]
fn from_value_accepts_locale_mappings() {
    let catalog = Catalog::from_value(json!({
        "en": {"greeting": "Hello"},
        "hu": {"greeting": "Szia"},
    }))
    .unwrap();

    assert!(catalog.get("en").is_some());
    assert!(catalog.get("de").is_none());
    assert!(catalog.contains("hu"));
    assert_eq!(catalog.len(), 2);

    let locales: Vec<&str> = catalog.locales().collect();
    assert_eq!(locales, vec!["en", "hu"]);
}

#[test]
fn from_value_rejects_non_mapping_root() {
    let err = Catalog::from_value(json!(["en", "hu"])).unwrap_err();
    assert!(matches!(err, LinguaError::Shape(_)));
}

#[test]
fn from_value_rejects_scalar_locale_entry() {
    let err = Catalog::from_value(json!({"en": "Hello"})).unwrap_err();
    assert!(matches!(err, LinguaError::Shape(_)));
}

#[test]
fn empty_catalog_is_valid() {
    let catalog = Catalog::from_value(json!({})).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.locales().count(), 0);
}

#[test]
fn nodes_classify_strings_lists_and_maps() {
    let catalog = Catalog::from_value(json!({
        "en": {
            "plain": "text",
            "plural": ["one", "many"],
            "nested": {"inner": "value"},
            "number": 7,
            "mixed": ["one", 2],
        }
    }))
    .unwrap();
    let en = catalog.get("en").unwrap();

    assert_eq!(en.get("plain"), Some(&Node::Text("text".to_string())));
    assert_eq!(
        en.get("plural"),
        Some(&Node::Forms(vec!["one".to_string(), "many".to_string()]))
    );
    assert!(matches!(en.get("nested"), Some(Node::Map(_))));
    // Leaf-type validation is deferred: unsupported values construct fine.
    assert!(matches!(en.get("number"), Some(Node::Other(_))));
    assert!(matches!(en.get("mixed"), Some(Node::Other(_))));
}

#[test]
fn empty_list_stays_a_forms_node() {
    // Construction keeps it; plural selection is what rejects it.
    let catalog = Catalog::from_value(json!({"en": {"empty": []}})).unwrap();
    let en = catalog.get("en").unwrap();
    assert_eq!(en.get("empty"), Some(&Node::Forms(Vec::new())));
}

#[test]
fn node_deserializes_untagged() {
    let node: Node = serde_json::from_str(r#"{"a": ["x", "y"], "b": "z"}"#).unwrap();
    let Node::Map(map) = node else {
        panic!("expected a map node");
    };
    assert_eq!(map.get("b"), Some(&Node::Text("z".to_string())));
    assert_eq!(
        map.get("a"),
        Some(&Node::Forms(vec!["x".to_string(), "y".to_string()]))
    );
}

#[test]
fn catalogs_with_equal_content_are_equal() {
    let a = Catalog::from_value(json!({"en": {"ping": "Pong!"}})).unwrap();
    let b = Catalog::from_value(json!({"en": {"ping": "Pong!"}})).unwrap();
    let c = Catalog::from_value(json!({"en": {"ping": "Pang!"}})).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}
