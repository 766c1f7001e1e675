//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum length accepted by the API for an idempotency key.
pub const MAX_IDEMPOTENCY_KEY_LENGTH: usize = 255;

/// A validated Stripe API key.
///
/// The key is sent as a bearer token by the default transport. Its `Debug`
/// output only reveals the key prefix (`sk_test`, `rk_live`, ...) so it can be
/// logged safely.
///
/// # Example
///
/// ```rust
/// use stripe_api::ApiKey;
///
/// let key = ApiKey::new("sk_test_123").unwrap();
/// assert_eq!(key.as_ref(), "sk_test_123");
/// assert_eq!(format!("{:?}", key), "ApiKey(sk_test_*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty and
    /// [`ConfigError::MalformedApiKey`] if it contains whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if key.chars().any(char::is_whitespace) {
            return Err(ConfigError::MalformedApiKey);
        }
        Ok(Self(key))
    }

    /// Returns `true` for test-mode keys.
    #[must_use]
    pub fn is_test_mode(&self) -> bool {
        self.0.contains("_test_")
    }

    fn visible_prefix(&self) -> &str {
        // `sk_test_abc` -> `sk_test_`
        let mut underscores = 0;
        for (index, c) in self.0.char_indices() {
            if c == '_' {
                underscores += 1;
                if underscores == 2 {
                    return &self.0[..=index];
                }
            }
        }
        ""
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({}*****)", self.visible_prefix())
    }
}

/// A validated webhook endpoint signing secret (`whsec_...`).
///
/// The `Debug` implementation masks the value.
///
/// # Example
///
/// ```rust
/// use stripe_api::WebhookSecret;
///
/// let secret = WebhookSecret::new("whsec_abc").unwrap();
/// assert_eq!(format!("{:?}", secret), "WebhookSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookSecret(String);

impl WebhookSecret {
    /// Creates a new validated webhook secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyWebhookSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyWebhookSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for WebhookSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WebhookSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebhookSecret(*****)")
    }
}

/// A validated API base URL such as `https://api.stripe.com`.
///
/// Trailing slashes are stripped so paths (which always start with `/`) can be
/// appended directly.
///
/// # Example
///
/// ```rust
/// use stripe_api::ApiBase;
///
/// let base = ApiBase::new("http://localhost:12111/").unwrap();
/// assert_eq!(base.as_ref(), "http://localhost:12111");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// The production API host.
    pub const DEFAULT: &'static str = "https://api.stripe.com";

    /// Creates a new validated API base.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiBase`] if the URL has no http(s)
    /// scheme, no host, or carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/').to_string();

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::InvalidApiBase { url: url.clone() })?;

        let host = rest.split('/').next().unwrap_or_default();
        if host.is_empty() || rest.contains(['?', '#']) {
            return Err(ConfigError::InvalidApiBase { url });
        }

        Ok(Self(trimmed))
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for ApiBase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A caller-supplied idempotency key.
///
/// Sending the same key on a repeated mutating request guarantees the server
/// applies its effect at most once. The SDK never generates keys itself.
///
/// # Example
///
/// ```rust
/// use stripe_api::IdempotencyKey;
///
/// let key = IdempotencyKey::new("order-42-pay").unwrap();
/// assert_eq!(key.as_ref(), "order-42-pay");
/// assert!(IdempotencyKey::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    /// Creates a new validated idempotency key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidIdempotencyKey`] if the key is empty,
    /// longer than [`MAX_IDEMPOTENCY_KEY_LENGTH`] characters, or contains
    /// anything other than visible ASCII and spaces.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidIdempotencyKey {
                reason: "key cannot be empty".to_string(),
            });
        }
        if key.chars().count() > MAX_IDEMPOTENCY_KEY_LENGTH {
            return Err(ConfigError::InvalidIdempotencyKey {
                reason: format!("key exceeds {MAX_IDEMPOTENCY_KEY_LENGTH} characters"),
            });
        }
        // Sent verbatim as a header value.
        if let Some(bad) = key.chars().find(|c| !(c.is_ascii_graphic() || *c == ' ')) {
            return Err(ConfigError::InvalidIdempotencyKey {
                reason: format!("key contains invalid character {bad:?}"),
            });
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for IdempotencyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for IdempotencyKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for IdempotencyKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_and_whitespace() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(
            ApiKey::new("sk_test_ 123"),
            Err(ConfigError::MalformedApiKey)
        ));
    }

    #[test]
    fn test_api_key_debug_masks_secret_part() {
        let key = ApiKey::new("rk_live_abcdef").unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "ApiKey(rk_live_*****)");
        assert!(!debug.contains("abcdef"));
    }

    #[test]
    fn test_api_key_without_prefix_is_fully_masked() {
        let key = ApiKey::new("opaque").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(*****)");
    }

    #[test]
    fn test_api_key_test_mode_detection() {
        assert!(ApiKey::new("sk_test_1").unwrap().is_test_mode());
        assert!(!ApiKey::new("sk_live_1").unwrap().is_test_mode());
    }

    #[test]
    fn test_api_base_strips_trailing_slash() {
        let base = ApiBase::new("https://api.stripe.com/").unwrap();
        assert_eq!(base.as_ref(), "https://api.stripe.com");
    }

    #[test]
    fn test_api_base_rejects_invalid_urls() {
        assert!(ApiBase::new("api.stripe.com").is_err());
        assert!(ApiBase::new("ftp://api.stripe.com").is_err());
        assert!(ApiBase::new("https://").is_err());
        assert!(ApiBase::new("https://api.stripe.com?x=1").is_err());
    }

    #[test]
    fn test_api_base_default() {
        assert_eq!(ApiBase::default().as_ref(), ApiBase::DEFAULT);
    }

    #[test]
    fn test_idempotency_key_length_limit() {
        let long = "k".repeat(MAX_IDEMPOTENCY_KEY_LENGTH + 1);
        assert!(IdempotencyKey::new(long).is_err());

        let max = "k".repeat(MAX_IDEMPOTENCY_KEY_LENGTH);
        assert!(IdempotencyKey::new(max).is_ok());
    }

    #[test]
    fn test_idempotency_key_rejects_header_unsafe_characters() {
        for key in ["line\nbreak", "tab\there", "caf\u{e9}", "nul\0"] {
            assert!(
                matches!(
                    IdempotencyKey::new(key),
                    Err(ConfigError::InvalidIdempotencyKey { .. })
                ),
                "accepted {key:?}"
            );
        }
        assert!(IdempotencyKey::new("order 42/pay:retry-1").is_ok());
    }

    #[test]
    fn test_idempotency_key_serde_round_trip() {
        let key = IdempotencyKey::new("k1").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#""k1""#);
        let back: IdempotencyKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<IdempotencyKey>(r#""""#).is_err());
    }

    #[test]
    fn test_webhook_secret_masks_debug() {
        let secret = WebhookSecret::new("whsec_123").unwrap();
        assert_eq!(format!("{secret:?}"), "WebhookSecret(*****)");
        assert!(WebhookSecret::new("").is_err());
    }
}
