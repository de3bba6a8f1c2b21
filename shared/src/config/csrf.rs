//! Form token configuration

use serde::{Deserialize, Deserializer, Serialize};
use std::env;

/// Default form token lifetime in seconds (one hour)
pub const DEFAULT_FORM_LIFETIME: i64 = 3600;

/// Environment variable overriding the form token lifetime
pub const FORM_LIFETIME_ENV: &str = "FORM_LIFETIME";

/// Anti-forgery form token configuration
///
/// The lifetime is always positive: every constructor maps zero or negative
/// values to [`DEFAULT_FORM_LIFETIME`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CsrfConfig {
    /// Seconds a form token stays valid after it was issued
    #[serde(
        default = "default_form_lifetime",
        deserialize_with = "deserialize_form_lifetime"
    )]
    pub form_lifetime: i64,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            form_lifetime: DEFAULT_FORM_LIFETIME,
        }
    }
}

impl CsrfConfig {
    /// Create a configuration with an explicit lifetime in seconds
    pub fn new(form_lifetime: i64) -> Self {
        Self {
            form_lifetime: positive_or_default(form_lifetime),
        }
    }

    /// Set the lifetime in minutes
    pub fn with_lifetime_minutes(self, minutes: i64) -> Self {
        Self::new(minutes.saturating_mul(60))
    }

    /// Load configuration from the `FORM_LIFETIME` environment variable.
    ///
    /// Unset, unparsable or non-positive values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lifetime_value(env::var(FORM_LIFETIME_ENV).ok().as_deref())
    }

    fn from_lifetime_value(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }
}

fn positive_or_default(seconds: i64) -> i64 {
    if seconds > 0 {
        seconds
    } else {
        DEFAULT_FORM_LIFETIME
    }
}

fn default_form_lifetime() -> i64 {
    DEFAULT_FORM_LIFETIME
}

fn deserialize_form_lifetime<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(positive_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_LOCK;

    #[test]
    fn test_default_lifetime_is_one_hour() {
        assert_eq!(CsrfConfig::default().form_lifetime, 3600);
    }

    #[test]
    fn test_non_positive_lifetime_uses_default() {
        assert_eq!(CsrfConfig::new(0).form_lifetime, DEFAULT_FORM_LIFETIME);
        assert_eq!(CsrfConfig::new(-30).form_lifetime, DEFAULT_FORM_LIFETIME);
        assert_eq!(CsrfConfig::new(1).form_lifetime, 1);
    }

    #[test]
    fn test_lifetime_minutes() {
        let config = CsrfConfig::default().with_lifetime_minutes(5);
        assert_eq!(config.form_lifetime, 300);

        let config = CsrfConfig::default().with_lifetime_minutes(i64::MAX);
        assert_eq!(config.form_lifetime, i64::MAX);

        let config = CsrfConfig::default().with_lifetime_minutes(i64::MIN);
        assert_eq!(config.form_lifetime, DEFAULT_FORM_LIFETIME);
    }

    #[test]
    fn test_lifetime_value_parsing() {
        assert_eq!(CsrfConfig::from_lifetime_value(Some("120")).form_lifetime, 120);
        assert_eq!(CsrfConfig::from_lifetime_value(Some(" 90 ")).form_lifetime, 90);
        assert_eq!(CsrfConfig::from_lifetime_value(Some("abc")).form_lifetime, DEFAULT_FORM_LIFETIME);
        assert_eq!(CsrfConfig::from_lifetime_value(Some("0")).form_lifetime, DEFAULT_FORM_LIFETIME);
        assert_eq!(CsrfConfig::from_lifetime_value(Some("-5")).form_lifetime, DEFAULT_FORM_LIFETIME);
        assert_eq!(CsrfConfig::from_lifetime_value(None).form_lifetime, DEFAULT_FORM_LIFETIME);
    }

    #[test]
    fn test_from_env_reads_form_lifetime() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        env::set_var(FORM_LIFETIME_ENV, "120");
        assert_eq!(CsrfConfig::from_env().form_lifetime, 120);

        env::set_var(FORM_LIFETIME_ENV, "soon");
        assert_eq!(CsrfConfig::from_env().form_lifetime, DEFAULT_FORM_LIFETIME);

        env::remove_var(FORM_LIFETIME_ENV);
        assert_eq!(CsrfConfig::from_env().form_lifetime, DEFAULT_FORM_LIFETIME);
    }

    #[test]
    fn test_deserialize_lifetime() {
        let config: CsrfConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CsrfConfig::default());

        let config: CsrfConfig = serde_json::from_str(r#"{"form_lifetime": 600}"#).unwrap();
        assert_eq!(config.form_lifetime, 600);

        let config: CsrfConfig = serde_json::from_str(r#"{"form_lifetime": -1}"#).unwrap();
        assert_eq!(config.form_lifetime, DEFAULT_FORM_LIFETIME);
    }
}
