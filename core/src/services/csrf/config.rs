//! Configuration for the form token service

use lg_shared::config::{AppConfig, CsrfConfig, DEFAULT_FORM_LIFETIME};

/// Configuration for the form token service
#[derive(Debug, Clone)]
pub struct CsrfTokenServiceConfig {
    /// Tokens are accepted while strictly younger than this many seconds
    pub form_lifetime_seconds: i64,
}

impl Default for CsrfTokenServiceConfig {
    fn default() -> Self {
        Self {
            form_lifetime_seconds: DEFAULT_FORM_LIFETIME,
        }
    }
}

impl From<&CsrfConfig> for CsrfTokenServiceConfig {
    fn from(config: &CsrfConfig) -> Self {
        Self {
            form_lifetime_seconds: config.form_lifetime,
        }
    }
}

impl From<&AppConfig> for CsrfTokenServiceConfig {
    fn from(config: &AppConfig) -> Self {
        Self::from(&config.csrf)
    }
}
