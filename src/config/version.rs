//! Admin API version selection.
//!
//! The publication queries were written against the `2021-07` release, so
//! that is the version requests go to unless the operator overrides it.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Shopify Admin API version used in the endpoint path.
///
/// # Example
///
/// ```rust
/// use shopify_publisher::ApiVersion;
///
/// assert_eq!(ApiVersion::pinned().to_string(), "2021-07");
///
/// let version: ApiVersion = "2022-01".parse().unwrap();
/// assert_eq!(version, ApiVersion::Custom("2022-01".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2021-07, the release the queries target.
    V2021_07,
    /// Unstable API version for development and testing.
    Unstable,
    /// Any other quarterly release in `YYYY-MM` form.
    Custom(String),
}

impl ApiVersion {
    /// Returns the version the publication queries are written against.
    #[must_use]
    pub const fn pinned() -> Self {
        Self::V2021_07
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        // Shopify releases quarterly
        matches!(month, "01" | "04" | "07" | "10")
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::pinned()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2021_07 => f.write_str("2021-07"),
            Self::Unstable => f.write_str("unstable"),
            Self::Custom(s) => f.write_str(s),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "2021-07" => Ok(Self::V2021_07),
            "unstable" => Ok(Self::Unstable),
            _ if Self::is_valid_version_format(&s) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
