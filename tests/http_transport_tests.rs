//! Integration tests for the reqwest-backed transport.
//!
//! These tests run the full resource pipeline against a local wiremock
//! server: headers, parameter encoding, error decoding and timeouts.

use std::time::Duration;

use serde_json::json;
use stripe_api::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
use stripe_api::rest::resources::{Charge, ChargeListParams, Customer, CustomerParams};
use stripe_api::rest::{ApiErrorKind, RequestOptions, ResourceError, RestResource};
use stripe_api::{ApiBase, ApiKey, ApiVersion, IdempotencyKey, ResourceClient, StripeConfig};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> StripeConfig {
    StripeConfig::builder()
        .api_key(ApiKey::new("sk_test_123").unwrap())
        .api_base(ApiBase::new(server.uri()).unwrap())
        .api_version(ApiVersion::V2020_08_27)
        .timeout(Duration::from_millis(500))
        .build()
        .unwrap()
}

fn client_for(server: &MockServer) -> ResourceClient {
    ResourceClient::new(config_for(server)).unwrap()
}

// ============================================================================
// Headers
// ============================================================================

#[tokio::test]
async fn test_sends_auth_version_and_accept_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_1"))
        .and(header("Authorization", "Bearer sk_test_123"))
        .and(header("Stripe-Version", "2020-08-27"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Request-Id", "req_hdr")
                .set_body_json(json!({"id": "cus_1", "object": "customer"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let customer = Customer::retrieve(&client_for(&server), "cus_1", None)
        .await
        .unwrap();

    assert_eq!(customer.id, "cus_1");
    assert_eq!(customer.request_id(), Some("req_hdr"));
}

#[tokio::test]
async fn test_post_sends_form_body_and_idempotency_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/customers"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(header("Idempotency-Key", "signup-42"))
        .and(body_string("email=jenny%40example.com"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "cus_new", "object": "customer", "email": "jenny@example.com"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let params = CustomerParams {
        email: Some("jenny@example.com".to_string()),
        ..Default::default()
    };
    let options = RequestOptions::new().idempotency_key(IdempotencyKey::new("signup-42").unwrap());
    let customer = Customer::create(&client_for(&server), &params, Some(options))
        .await
        .unwrap();

    assert_eq!(customer.id, "cus_new");
}

#[tokio::test]
async fn test_list_sends_query_and_expansions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/charges"))
        .and(query_param("limit", "2"))
        .and(query_param("customer", "cus_1"))
        .and(query_param("expand[0]", "data.customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                {"id": "ch_1", "object": "charge", "customer": {"id": "cus_1", "object": "customer"}}
            ],
            "has_more": false,
            "url": "/v1/charges"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ChargeListParams {
        customer: Some("cus_1".to_string()),
        limit: Some(2),
        ..Default::default()
    };
    let charges = Charge::list(
        &client_for(&server),
        &params,
        Some(RequestOptions::new().expand("data.customer")),
    )
    .await
    .unwrap();

    assert_eq!(charges.items().len(), 1);
    assert!(charges.items()[0].customer_object().is_some());
    assert!(!charges.has_more());
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_card_error_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .respond_with(
            ResponseTemplate::new(402)
                .insert_header("Request-Id", "req_declined")
                .set_body_json(json!({
                    "error": {
                        "type": "card_error",
                        "code": "card_declined",
                        "decline_code": "insufficient_funds",
                        "message": "Your card has insufficient funds.",
                        "param": "source"
                    }
                })),
        )
        .mount(&server)
        .await;

    let result = Charge::create(&client_for(&server), &Default::default(), None).await;

    let error = result.unwrap_err();
    assert_eq!(error.request_id(), Some("req_declined"));
    let api_error = error.as_api_error().unwrap();
    assert_eq!(api_error.status, 402);
    assert_eq!(api_error.kind(), ApiErrorKind::Card);
    assert_eq!(api_error.code.as_deref(), Some("card_declined"));
    assert_eq!(api_error.decline_code.as_deref(), Some("insufficient_funds"));
}

#[tokio::test]
async fn test_not_found_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "type": "invalid_request_error",
                "code": "resource_missing",
                "message": "No such customer: 'cus_missing'",
                "param": "id"
            }
        })))
        .mount(&server)
        .await;

    let error = Customer::retrieve(&client_for(&server), "cus_missing", None)
        .await
        .unwrap_err();

    let api_error = error.as_api_error().unwrap();
    assert_eq!(api_error.kind(), ApiErrorKind::InvalidRequest);
    assert_eq!(api_error.param.as_deref(), Some("id"));
}

#[tokio::test]
async fn test_malformed_payload_names_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/charges/ch_1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "ch_1", "amount": "1000"})),
        )
        .mount(&server)
        .await;

    let error = Charge::retrieve(&client_for(&server), "ch_1", None)
        .await
        .unwrap_err();

    match error {
        ResourceError::MalformedField(field) => assert_eq!(field.field, "amount"),
        other => panic!("expected MalformedField, got {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_is_connection_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(json!({"id": "cus_slow"})),
        )
        .mount(&server)
        .await;

    let error = Customer::retrieve(&client_for(&server), "cus_slow", None)
        .await
        .unwrap_err();

    match error {
        ResourceError::Connection(e) => assert!(e.is_timeout()),
        other => panic!("expected Connection error, got {other:?}"),
    }
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_transport_returns_non_success_responses() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/customers/cus_1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Delete, format!("{}/v1/customers/cus_1", server.uri()))
        .build()
        .unwrap();

    let response = client.send(request).await.unwrap();
    assert_eq!(response.code, 500);
    assert_eq!(response.body, "upstream exploded");
}
