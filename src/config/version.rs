//! Stripe API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for pinning the API version
//! sent with every request (`Stripe-Version` header).
//!
//! Payload shapes drift between versions (for example, `Event.request` is a
//! bare string up to `2017-05-25` and an object afterwards). Decoding never
//! consults the version; the shape-dispatch decoder handles both forms.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Stripe API version.
///
/// # Example
///
/// ```rust
/// use stripe_api::ApiVersion;
///
/// let version: ApiVersion = "2020-08-27".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2020_08_27);
/// assert_eq!(version.to_string(), "2020-08-27");
///
/// let custom: ApiVersion = "2021-01-02".parse().unwrap();
/// assert!(matches!(custom, ApiVersion::Custom(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Last version rendering `Event.request` as a string.
    V2017_05_25,
    /// `2019-12-03`.
    V2019_12_03,
    /// `2020-03-02`.
    V2020_03_02,
    /// `2020-08-27`.
    V2020_08_27,
    /// Any other well-formed `YYYY-MM-DD` version.
    Custom(String),
}

impl ApiVersion {
    /// Returns the version this SDK's models were written against.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2020_08_27
    }

    /// Returns `true` for versions known to this SDK.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    const fn as_static_str(&self) -> Option<&'static str> {
        match self {
            Self::V2017_05_25 => Some("2017-05-25"),
            Self::V2019_12_03 => Some("2019-12-03"),
            Self::V2020_03_02 => Some("2020-03-02"),
            Self::V2020_08_27 => Some("2020-08-27"),
            Self::Custom(_) => None,
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        // Format: YYYY-MM-DD
        let parts: Vec<&str> = s.split('-').collect();
        let [year, month, day] = parts[..] else {
            return false;
        };

        let numeric = |part: &str, len: usize| {
            part.len() == len && part.chars().all(|c| c.is_ascii_digit())
        };
        if !numeric(year, 4) || !numeric(month, 2) || !numeric(day, 2) {
            return false;
        }

        matches!(month.parse::<u8>(), Ok(1..=12)) && matches!(day.parse::<u8>(), Ok(1..=31))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Dates in YYYY-MM-DD order lexicographically.
        self.to_string().cmp(&other.to_string())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(s) => f.write_str(s),
            known => f.write_str(known.as_static_str().unwrap_or_default()),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "2017-05-25" => Ok(Self::V2017_05_25),
            "2019-12-03" => Ok(Self::V2019_12_03),
            "2020-03-02" => Ok(Self::V2020_03_02),
            "2020-08-27" => Ok(Self::V2020_08_27),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!(
            "2017-05-25".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2017_05_25
        );
        assert_eq!(
            "2020-08-27".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2020_08_27
        );
    }

    #[test]
    fn test_api_version_accepts_custom_dates() {
        let version = "2022-11-15".parse::<ApiVersion>().unwrap();
        assert_eq!(version, ApiVersion::Custom("2022-11-15".to_string()));
        assert!(!version.is_known());
    }

    #[test]
    fn test_api_version_rejects_malformed_strings() {
        for bad in ["", "2020-08", "2020-13-01", "2020-00-10", "20-08-27", "latest"] {
            assert!(
                bad.parse::<ApiVersion>().is_err(),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_api_version_ordering_follows_dates() {
        assert!(ApiVersion::V2017_05_25 < ApiVersion::V2020_08_27);
        assert!(ApiVersion::Custom("2021-01-01".to_string()) > ApiVersion::V2020_08_27);
        assert!(ApiVersion::Custom("2018-01-01".to_string()) < ApiVersion::V2019_12_03);
    }

    #[test]
    fn test_latest_is_default() {
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
        assert_eq!(ApiVersion::latest().to_string(), "2020-08-27");
    }
}
