//! Integration tests for payload decoding.
//!
//! Covers expandable references, shape-drifted fields, discriminated
//! payloads and field-level error reporting through the public codec.

use serde_json::json;
use stripe_api::rest::codec;
use stripe_api::rest::resources::{AnyResource, Capability, Charge, Event, Order};
use stripe_api::rest::{Expandable, JsonKind, ResourceError};

// ============================================================================
// Expandable references
// ============================================================================

#[test]
fn test_id_and_object_forms_report_same_identifier() {
    let bare: Charge = codec::decode_value(json!({"id": "ch_1", "customer": "cus_9"})).unwrap();
    let expanded: Charge = codec::decode_value(json!({
        "id": "ch_1",
        "customer": {"id": "cus_9", "object": "customer", "email": "a@b.co"}
    }))
    .unwrap();

    assert_eq!(bare.customer(), Some("cus_9"));
    assert_eq!(expanded.customer(), Some("cus_9"));
    assert!(bare.customer_object().is_none());
    assert_eq!(
        expanded.customer_object().and_then(|c| c.email.as_deref()),
        Some("a@b.co")
    );
}

#[test]
fn test_missing_and_null_references_are_absent() {
    let missing: Charge = codec::decode_value(json!({"id": "ch_1"})).unwrap();
    let null: Charge = codec::decode_value(json!({"id": "ch_1", "customer": null})).unwrap();

    assert!(missing.customer.is_none());
    assert!(null.customer.is_none());
}

#[test]
fn test_reference_of_wrong_kind_names_field() {
    let error = codec::decode_value::<Charge>(json!({"id": "ch_1", "customer": 7})).unwrap_err();

    assert_eq!(error.field, "customer");
    assert_eq!(error.found, JsonKind::Number);
}

#[test]
fn test_expanded_account_on_capability() {
    let capability: Capability = codec::decode_value(json!({
        "id": "card_payments",
        "object": "capability",
        "account": {"id": "acct_1", "object": "account", "email": "ops@example.com"}
    }))
    .unwrap();

    assert_eq!(capability.account(), Some("acct_1"));
    assert_eq!(
        capability.account_object().and_then(|a| a.email.as_deref()),
        Some("ops@example.com")
    );
}

#[test]
fn test_mutually_recursive_expansion() {
    let charge: Charge = codec::decode_value(json!({
        "id": "ch_1",
        "order": {
            "id": "or_1",
            "object": "order",
            "charge": "ch_1",
            "items": [
                {"object": "order_item", "parent": "sku_1"},
                {"object": "order_item", "parent": {"id": "sku_2", "object": "sku"}}
            ]
        }
    }))
    .unwrap();

    let order = charge.order_object().unwrap();
    assert_eq!(order.charge(), Some("ch_1"));
    assert_eq!(order.items[0].parent(), Some("sku_1"));
    assert_eq!(order.items[1].parent(), Some("sku_2"));
    assert!(order.items[1].parent_object().is_some());
}

#[test]
fn test_nested_error_path_inside_list() {
    let error = codec::decode_value::<Order>(json!({
        "id": "or_1",
        "items": [{"parent": "sku_1"}, {"parent": false}]
    }))
    .unwrap_err();

    assert_eq!(error.field, "items[1].parent");
    assert_eq!(error.found, JsonKind::Boolean);
}

// ============================================================================
// Shape-drifted fields
// ============================================================================

#[test]
fn test_event_request_accepts_both_shapes() {
    let old: Event = codec::decode_value(json!({"id": "evt_1", "request": "req_1"})).unwrap();
    let new: Event = codec::decode_value(json!({
        "id": "evt_2",
        "request": {"id": "req_2", "idempotency_key": "key-2"}
    }))
    .unwrap();

    let old_request = old.request.unwrap();
    assert_eq!(old_request.id.as_deref(), Some("req_1"));
    assert!(old_request.idempotency_key.is_none());

    let new_request = new.request.unwrap();
    assert_eq!(new_request.id.as_deref(), Some("req_2"));
    assert_eq!(new_request.idempotency_key.as_deref(), Some("key-2"));
}

#[test]
fn test_event_request_rejects_array() {
    let error = codec::decode_value::<Event>(json!({"id": "evt_1", "request": []})).unwrap_err();
    assert_eq!(error.field, "request");
    assert_eq!(error.found, JsonKind::Array);
}

// ============================================================================
// Discriminated payloads
// ============================================================================

#[test]
fn test_event_object_dispatches_on_object_tag() {
    let event: Event = codec::decode_value(json!({
        "id": "evt_1",
        "object": "event",
        "type": "order.created",
        "data": {"object": {"id": "or_1", "object": "order", "amount": 1500}}
    }))
    .unwrap();

    match event.data.object {
        Some(AnyResource::Order(order)) => assert_eq!(order.amount, Some(1500)),
        other => panic!("expected an order, got {other:?}"),
    }
}

#[test]
fn test_event_object_with_unknown_tag_is_preserved() {
    let raw = json!({"id": "pm_1", "object": "payment_method", "card": {"last4": "4242"}});
    let event: Event =
        codec::decode_value(json!({"id": "evt_1", "data": {"object": raw.clone()}})).unwrap();

    assert_eq!(event.data.object, Some(AnyResource::Unknown(raw)));
}

#[test]
fn test_discriminated_payload_checked_against_selected_schema() {
    let error = codec::decode_value::<Event>(json!({
        "id": "evt_1",
        "data": {"object": {"id": "ch_1", "object": "charge", "captured": "yes"}}
    }))
    .unwrap_err();

    assert_eq!(error.field, "data.object.captured");
    assert_eq!(error.expected, "boolean");
}

// ============================================================================
// Round trips and top-level errors
// ============================================================================

#[test]
fn test_decoded_charge_survives_reencoding() {
    let charge: Charge = codec::decode_value(json!({
        "id": "ch_1",
        "object": "charge",
        "amount": 2000,
        "created": 1_600_000_000,
        "customer": {"id": "cus_1", "object": "customer"},
        "metadata": {"order": "6735"},
        "refunds": {"object": "list", "data": [{"id": "re_1", "object": "refund"}], "has_more": false}
    }))
    .unwrap();

    let encoded = serde_json::to_value(&charge).unwrap();
    let decoded: Charge = codec::decode_value(encoded).unwrap();

    assert_eq!(decoded, charge);
    assert!(matches!(decoded.customer, Some(Expandable::Object(_))));
}

#[test]
fn test_decode_str_reports_invalid_json() {
    let error = codec::decode_str::<Charge>("{not json").unwrap_err();
    assert!(matches!(error, ResourceError::InvalidResponse { .. }));
}

#[test]
fn test_top_level_non_object_is_rejected() {
    let error = codec::decode_value::<Charge>(json!(["ch_1"])).unwrap_err();
    assert_eq!(error.found, JsonKind::Array);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let charge: Charge =
        codec::decode_value(json!({"id": "ch_1", "brand_new_field": {"x": 1}})).unwrap();
    assert_eq!(charge.id, "ch_1");
}
