//! # Classification Contract Tests
//!
//! End-to-end exercises of the classification value's public contract:
//! the name invariant across both construction paths, the copy-on-read
//! behavior of the properties accessor, and the structured errors the
//! constructors surface. These work only through the crate's public API,
//! the way a repository connector would.

use std::collections::BTreeMap;

use serde_json::json;

use omf_properties::{AdditionalProperties, AssetDescriptor, Classification, PropertyError};

fn database_asset() -> AssetDescriptor {
    AssetDescriptor::new("customer-db", "Database")
}

fn retention_properties(parent: AssetDescriptor) -> AdditionalProperties {
    let mut map = BTreeMap::new();
    map.insert("retention-days".to_string(), json!(365));
    map.insert("steward".to_string(), json!("data-governance"));
    AdditionalProperties::new(parent, map)
}

#[test]
fn confidential_without_properties() {
    let c = Classification::new(database_asset(), Some("Confidential".to_string()), None)
        .expect("non-empty name must be accepted");
    assert_eq!(c.name(), "Confidential");
    assert!(c.properties().is_none());
}

#[test]
fn empty_name_with_properties_is_rejected() {
    let props = retention_properties(database_asset());
    let err = Classification::new(database_asset(), Some(String::new()), Some(props))
        .expect_err("empty name must be rejected");

    assert!(matches!(err, PropertyError::NullClassificationName { .. }));
    assert_eq!(err.http_status(), 400);
    assert_eq!(err.message_id(), "OMF-PROPERTIES-400-001");
    let rendered = format!("{err}");
    assert!(rendered.contains("customer-db"));
    assert!(rendered.contains("Database"));
}

#[test]
fn copy_from_template_yields_distinct_equal_properties() {
    let props = retention_properties(database_asset());
    let template = Classification::new(
        database_asset(),
        Some("PII".to_string()),
        Some(props.clone()),
    )
    .unwrap();

    let copy = Classification::from_template(
        AssetDescriptor::new("orders", "Table"),
        Some(&template),
    )
    .unwrap();

    assert_eq!(copy.name(), "PII");
    let copied_props = copy.properties().expect("template carried properties");
    assert_eq!(copied_props, props);

    // Independence: mutating the returned bag leaves both values untouched.
    let mut mutated = copy.properties().unwrap();
    mutated.insert("retention-days", json!(0));
    assert_eq!(
        copy.properties().unwrap().get("retention-days"),
        Some(&json!(365))
    );
    assert_eq!(
        template.properties().unwrap().get("retention-days"),
        Some(&json!(365))
    );
}

#[test]
fn copy_from_absent_template_is_rejected() {
    let err = Classification::from_template(database_asset(), None)
        .expect_err("absent template must be rejected");
    assert!(matches!(err, PropertyError::NullTemplate { .. }));
    assert_eq!(err.message_id(), "OMF-PROPERTIES-400-002");
    assert!(!err.user_action().is_empty());
}

#[test]
fn whitespace_only_name_is_a_valid_classification() {
    // The invariant is non-emptiness, not non-blankness.
    let c = Classification::new(database_asset(), Some(" ".to_string()), None).unwrap();
    assert_eq!(c.name(), " ");
}

#[test]
fn repeated_reads_return_independent_copies() {
    let c = Classification::new(
        database_asset(),
        Some("Confidential".to_string()),
        Some(retention_properties(database_asset())),
    )
    .unwrap();

    let mut first = c.properties().unwrap();
    let second = c.properties().unwrap();
    assert_eq!(first, second);

    first.insert("steward", json!("nobody"));
    assert_eq!(second.get("steward"), Some(&json!("data-governance")));
    assert_eq!(
        c.properties().unwrap().get("steward"),
        Some(&json!("data-governance"))
    );
}

#[test]
fn serialized_payload_with_empty_name_never_materializes() {
    let payload = json!({
        "parent_asset": { "asset_name": "customer-db", "asset_type_name": "Database" },
        "name": "",
    });
    let result: Result<Classification, _> = serde_json::from_value(payload);
    let message = result.expect_err("validation runs during deserialization").to_string();
    assert!(message.contains("OMF-PROPERTIES-400-001"));
}

#[test]
fn valid_payload_roundtrips_through_serde() {
    let c = Classification::new(
        database_asset(),
        Some("PII".to_string()),
        Some(retention_properties(database_asset())),
    )
    .unwrap();

    let json = serde_json::to_string(&c).unwrap();
    let restored: Classification = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, c);
    assert_eq!(restored.parent_asset().asset_name(), "customer-db");
}
