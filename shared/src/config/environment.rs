//! Deployment environment detection

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable naming the deployment environment
pub const ENVIRONMENT_ENV: &str = "LISTGUARD_ENV";

/// Deployment environment; selects the dotenv file and logging preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Read `LISTGUARD_ENV`. Unset or unrecognised values mean development.
    pub fn from_env() -> Self {
        env::var(ENVIRONMENT_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Dotenv file read by [`AppConfig::load`](super::AppConfig::load)
    pub fn env_file(&self) -> &'static str {
        match self {
            Environment::Development => ".env.development",
            Environment::Staging => ".env.staging",
            Environment::Production => ".env.production",
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("unknown environment: {}", s)),
        }
    }
}
