//! Integration tests for webhook verification through the public API.

use chrono::Utc;
use stripe_api::rest::resources::AnyResource;
use stripe_api::webhooks::{
    compute_signature, construct_event, verify_header, WebhookError, DEFAULT_TOLERANCE,
    SIGNATURE_HEADER,
};
use stripe_api::WebhookSecret;

const PAYLOAD: &str = r#"{
  "id": "evt_1",
  "object": "event",
  "api_version": "2020-08-27",
  "type": "charge.refunded",
  "request": {"id": "req_1", "idempotency_key": "refund-1"},
  "data": {
    "object": {"id": "ch_1", "object": "charge", "amount": 900, "refunded": true},
    "previous_attributes": {"refunded": false}
  }
}"#;

fn secret() -> WebhookSecret {
    WebhookSecret::new("whsec_integration").unwrap()
}

fn sign(timestamp: i64, payload: &str) -> String {
    format!(
        "t={timestamp},v1={}",
        compute_signature(timestamp, payload, &secret())
    )
}

#[test]
fn test_header_name() {
    assert_eq!(SIGNATURE_HEADER, "Stripe-Signature");
}

#[test]
fn test_construct_event_from_signed_payload() {
    let header = sign(Utc::now().timestamp(), PAYLOAD);

    let event = construct_event(PAYLOAD, &header, &secret(), DEFAULT_TOLERANCE).unwrap();

    assert_eq!(event.id, "evt_1");
    assert_eq!(event.event_type.as_deref(), Some("charge.refunded"));
    assert_eq!(
        event.request.as_ref().and_then(|r| r.idempotency_key.as_deref()),
        Some("refund-1")
    );
    match &event.data.object {
        Some(AnyResource::Charge(charge)) => {
            assert_eq!(charge.amount, Some(900));
            assert_eq!(charge.refunded, Some(true));
        }
        other => panic!("expected a charge, got {other:?}"),
    }
    assert!(event.data.previous_attributes.is_some());
}

#[test]
fn test_rolled_secret_with_two_signatures() {
    let now = Utc::now().timestamp();
    let old_secret = WebhookSecret::new("whsec_old").unwrap();
    let header = format!(
        "t={now},v1={},v1={}",
        compute_signature(now, PAYLOAD, &old_secret),
        compute_signature(now, PAYLOAD, &secret())
    );

    assert!(verify_header(PAYLOAD, &header, &secret(), DEFAULT_TOLERANCE).is_ok());
    assert!(verify_header(PAYLOAD, &header, &old_secret, DEFAULT_TOLERANCE).is_ok());
}

#[test]
fn test_modified_payload_is_rejected() {
    let header = sign(Utc::now().timestamp(), PAYLOAD);
    let tampered = PAYLOAD.replace("900", "9000");

    let result = construct_event(&tampered, &header, &secret(), DEFAULT_TOLERANCE);
    assert!(matches!(result, Err(WebhookError::NoValidSignature)));
}

#[test]
fn test_replayed_payload_is_rejected() {
    let an_hour_ago = Utc::now().timestamp() - 3600;
    let header = sign(an_hour_ago, PAYLOAD);

    let result = verify_header(PAYLOAD, &header, &secret(), DEFAULT_TOLERANCE);
    assert!(matches!(
        result,
        Err(WebhookError::TimestampOutsideTolerance { .. })
    ));
    assert!(verify_header(PAYLOAD, &header, &secret(), 0).is_ok());
}

#[test]
fn test_garbage_header() {
    let result = verify_header(PAYLOAD, "not a signature", &secret(), DEFAULT_TOLERANCE);
    assert!(matches!(result, Err(WebhookError::InvalidHeader { .. })));
}
