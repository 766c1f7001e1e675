//! Webhook signature verification.
//!
//! Webhook requests carry a `Stripe-Signature` header of the form
//!
//! ```text
//! t=1492774577,v1=5257a869e7ecebeda32affa62cdca3fa51cad7e77a0e56ff536d0ce8e108d8bd
//! ```
//!
//! where each `v1` value is the lowercase hex HMAC-SHA256 of
//! `"{t}.{payload}"` keyed with the endpoint's signing secret. Several `v1`
//! entries may be present while a secret is being rolled; any one of them
//! matching is enough.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::WebhookSecret;
//! use stripe_api::webhooks::{compute_signature, construct_event, DEFAULT_TOLERANCE};
//!
//! let secret = WebhookSecret::new("whsec_test").unwrap();
//! let payload = r#"{"id": "evt_1", "object": "event", "type": "charge.succeeded"}"#;
//! let timestamp = chrono::Utc::now().timestamp();
//! let header = format!("t={timestamp},v1={}", compute_signature(timestamp, payload, &secret));
//!
//! let event = construct_event(payload, &header, &secret, DEFAULT_TOLERANCE).unwrap();
//! assert_eq!(event.event_type.as_deref(), Some("charge.succeeded"));
//! ```
//!
//! # Security
//!
//! Signatures are compared in constant time.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::WebhookSecret;
use crate::rest::codec;
use crate::rest::resources::Event;
use crate::webhooks::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// HTTP header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "Stripe-Signature";

/// Default maximum age of a signed timestamp, in seconds.
pub const DEFAULT_TOLERANCE: i64 = 300;

const SIGNATURE_SCHEME: &str = "v1";

/// Computes the `v1` signature of `payload` signed at `timestamp`.
///
/// Returns the lowercase hex HMAC-SHA256 of `"{timestamp}.{payload}"`.
///
/// # Example
///
/// ```rust
/// use stripe_api::WebhookSecret;
/// use stripe_api::webhooks::compute_signature;
///
/// let secret = WebhookSecret::new("whsec_test").unwrap();
/// let signature = compute_signature(1_600_000_000, "{}", &secret);
/// assert_eq!(signature.len(), 64);
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(timestamp: i64, payload: &str, secret: &WebhookSecret) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_ref().as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// A parsed signature header.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SignatureHeader {
    timestamp: i64,
    signatures: Vec<String>,
}

fn parse_header(header: &str) -> Result<SignatureHeader, WebhookError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for item in header.split(',') {
        let Some((key, value)) = item.trim().split_once('=') else {
            continue;
        };
        match key {
            "t" => {
                timestamp = Some(value.parse::<i64>().map_err(|_| WebhookError::InvalidHeader {
                    message: format!("invalid timestamp '{value}'"),
                })?);
            }
            SIGNATURE_SCHEME => signatures.push(value.to_string()),
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or_else(|| WebhookError::InvalidHeader {
        message: "missing timestamp".to_string(),
    })?;
    if signatures.is_empty() {
        return Err(WebhookError::InvalidHeader {
            message: format!("no {SIGNATURE_SCHEME} signatures"),
        });
    }

    Ok(SignatureHeader {
        timestamp,
        signatures,
    })
}

fn verify_header_at(
    payload: &str,
    header: &str,
    secret: &WebhookSecret,
    tolerance: i64,
    now: i64,
) -> Result<(), WebhookError> {
    let parsed = parse_header(header)?;
    let expected = compute_signature(parsed.timestamp, payload, secret);

    let matched = parsed
        .signatures
        .iter()
        .any(|candidate| bool::from(candidate.as_bytes().ct_eq(expected.as_bytes())));
    if !matched {
        return Err(WebhookError::NoValidSignature);
    }

    if tolerance > 0 && parsed.timestamp < now - tolerance {
        return Err(WebhookError::TimestampOutsideTolerance {
            timestamp: parsed.timestamp,
            tolerance,
        });
    }

    Ok(())
}

/// Verifies the signature header of a webhook payload.
///
/// A `tolerance` of zero or less disables the timestamp check.
///
/// # Errors
///
/// Returns [`WebhookError::InvalidHeader`] if the header cannot be parsed,
/// [`WebhookError::NoValidSignature`] if no signature matches, and
/// [`WebhookError::TimestampOutsideTolerance`] if the timestamp is too old.
pub fn verify_header(
    payload: &str,
    header: &str,
    secret: &WebhookSecret,
    tolerance: i64,
) -> Result<(), WebhookError> {
    verify_header_at(payload, header, secret, tolerance, Utc::now().timestamp())
}

/// Verifies a webhook payload and decodes it as an [`Event`].
///
/// # Errors
///
/// Returns the errors of [`verify_header`], or [`WebhookError::Decode`] if
/// the authentic payload is not a valid event.
pub fn construct_event(
    payload: &str,
    header: &str,
    secret: &WebhookSecret,
    tolerance: i64,
) -> Result<Event, WebhookError> {
    verify_header(payload, header, secret, tolerance)?;
    Ok(codec::decode_str::<Event>(payload)?)
}

// Internal hex encoding (lowercase)
mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}
