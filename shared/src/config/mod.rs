//! Configuration module
//!
//! - `csrf` - Form token lifetime
//! - `environment` - Deployment environment detection
//! - `logging` - Log level and format

pub mod csrf;
pub mod environment;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use csrf::{CsrfConfig, DEFAULT_FORM_LIFETIME, FORM_LIFETIME_ENV};
pub use environment::{Environment, ENVIRONMENT_ENV};
pub use logging::{LogFormat, LoggingConfig, LOG_FORMAT_ENV, LOG_LEVEL_ENV};

/// Serialises tests that touch process environment variables
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    /// Form token configuration
    #[serde(default)]
    pub csrf: CsrfConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            csrf: CsrfConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Read `LISTGUARD_ENV`, `FORM_LIFETIME`, `LOG_LEVEL` and `LOG_FORMAT`
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            csrf: CsrfConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Load the environment's dotenv file (then a plain `.env`) and read configuration.
    ///
    /// Variables already set in the process take precedence over file values.
    pub fn load() -> Self {
        let environment = Environment::from_env();
        if dotenvy::from_filename(environment.env_file()).is_err() {
            // A missing file is the common case outside development
            let _ = dotenvy::dotenv();
        }
        Self::from_env()
    }
}
