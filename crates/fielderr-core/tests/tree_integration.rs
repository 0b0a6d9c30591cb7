//! End-to-end tests for the validation tree pipeline
//!
//! These tests run the whole flow a caller would: take the flat failure
//! records a validation engine produced (here as wire-shaped JSON), fold
//! them into a tree, then navigate, render, serialize, and translate it.

use fielderr_core::{build_tree, FlatError, Translated, Validation};
use serde_json::json;

fn signup_failures() -> Vec<FlatError> {
    serde_json::from_value(json!([
        {"namespace": "Signup.name", "tag": "required", "field": "name"},
        {"namespace": "Signup.inner.count", "tag": "min", "field": "count", "param": "2", "value": 1},
        {"namespace": "Signup.inner.deep[0].maximum", "tag": "max", "field": "maximum", "param": "-1", "value": 3},
        {"namespace": "Signup.inner.deep[0].deeper[hadouken].a", "tag": "required", "field": "a"},
        {"namespace": "Signup.inner.deep[0].deeper[hadouken].b", "tag": "min", "field": "b", "param": "4", "value": "xy"},
        {"namespace": "Signup.inner.deep[1].maximum", "tag": "max", "field": "maximum", "param": "-1", "value": 0},
        {"namespace": "Signup.slice", "tag": "min", "field": "slice", "param": "2", "value": ["only"]},
    ]))
    .expect("wire-shaped failure records should deserialize")
}

#[test]
fn test_build_render_full_scenario() {
    let tree = build_tree(signup_failures());

    assert_eq!(
        tree.to_string(),
        concat!(
            r#"{"inner": {"count": "min", "deep": ["#,
            r#"{"deeper": {"hadouken": {"a": "required", "b": "min"}}, "maximum": "max"}, "#,
            r#"{"maximum": "max"}"#,
            r#"]}, "name": "required", "slice": "min"}"#,
        )
    );
}

#[test]
fn test_navigate_built_tree() {
    let tree = build_tree(signup_failures());

    let leaf = tree
        .get(&[
            "inner".into(),
            "deep".into(),
            0.into(),
            "deeper".into(),
            "hadouken".into(),
            "b".into(),
        ])
        .expect("path should resolve")
        .as_leaf()
        .expect("node should be a leaf");
    assert_eq!(leaf.tag, "min");
    assert_eq!(leaf.param, "4");
    assert_eq!(leaf.value, json!("xy"));
    assert_eq!(leaf.path, "Signup.inner.deep[0].deeper[hadouken].b");

    let deep = tree
        .get(&["inner".into(), "deep".into()])
        .expect("path should resolve");
    assert!(deep.is_indexed());
    assert_eq!(deep.len(), 2);

    // both leaves of the shared prefix remain reachable
    let first = tree.get(&["inner".into(), "deep".into(), 0.into(), "maximum".into()]);
    let second = tree.get(&["inner".into(), "deep".into(), 1.into(), "maximum".into()]);
    assert!(first.is_ok());
    assert!(second.is_ok());
}

#[test]
fn test_serialize_built_tree() {
    let tree = build_tree(signup_failures());

    assert_eq!(
        serde_json::to_value(&tree).expect("tree should serialize"),
        json!({
            "inner": {
                "count": "min",
                "deep": [
                    {
                        "deeper": {"hadouken": {"a": "required", "b": "min"}},
                        "maximum": "max",
                    },
                    {"maximum": "max"},
                ],
            },
            "name": "required",
            "slice": "min",
        })
    );
}

#[test]
fn test_translate_to_localized_messages() {
    let tree = build_tree(signup_failures());

    let messages = tree.translate(&|err| match err.tag.as_str() {
        "required" => "is required".to_string(),
        "min" => format!("must be at least {}", err.param),
        "max" => format!("must be at most {}", err.param),
        other => format!("failed rule {}", other),
    });

    assert_eq!(
        serde_json::to_value(&messages).expect("translated tree should serialize"),
        json!({
            "inner": {
                "count": "must be at least 2",
                "deep": [
                    {
                        "deeper": {"hadouken": {
                            "a": "is required",
                            "b": "must be at least 4",
                        }},
                        "maximum": "must be at most -1",
                    },
                    {"maximum": "must be at most -1"},
                ],
            },
            "name": "is required",
            "slice": "must be at least 2",
        })
    );

    let name = messages
        .as_keyed()
        .and_then(|entries| entries.get("name"))
        .and_then(Translated::as_value);
    assert_eq!(name.map(String::as_str), Some("is required"));
}

#[test]
fn test_tree_is_usable_as_an_error_value() {
    let tree = build_tree(signup_failures());

    let err: Box<dyn std::error::Error> = Box::new(tree);
    assert!(err.to_string().starts_with('{'));
    assert!(err.to_string().contains(r#""name": "required""#));
}

#[test]
fn test_incremental_building_matches_one_shot() {
    let failures = signup_failures();

    let mut builder = fielderr_core::TreeBuilder::new();
    for failure in failures.clone() {
        builder.push(failure);
    }
    let incremental = builder.build();

    let one_shot: Validation = failures.into_iter().collect();
    assert_eq!(incremental, one_shot);
}
