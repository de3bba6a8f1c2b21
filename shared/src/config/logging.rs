//! Logging configuration

use serde::{Deserialize, Serialize};
use std::env;

use super::environment::Environment;

/// Environment variable overriding the log level or filter directive
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Environment variable overriding the log format
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Level or `EnvFilter` directive, e.g. `info` or `lg_core=debug`
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,

    /// Include file and line in events
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: default_log_format(),
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Preset for an environment.
    ///
    /// Token rejections are logged at debug, so only development shows them
    /// unless the level is overridden.
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: String::from("debug"),
                format: LogFormat::Pretty,
                source_location: true,
            },
            Environment::Staging => Self {
                level: String::from("info"),
                format: LogFormat::Compact,
                source_location: false,
            },
            Environment::Production => Self {
                level: String::from("info"),
                format: LogFormat::Json,
                source_location: false,
            },
        }
    }

    /// Preset for `env` with `LOG_LEVEL` and `LOG_FORMAT` applied on top
    pub fn from_env(env: Environment) -> Self {
        let mut config = Self::for_environment(env);
        if let Some(level) = env::var(LOG_LEVEL_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            config.level = level;
        }
        if let Some(format) = env::var(LOG_FORMAT_ENV).ok().and_then(|v| v.parse().ok()) {
            config.format = format;
        }
        config
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("unknown log format: {}", s)),
        }
    }
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_LOCK;

    #[test]
    fn test_logging_config_for_environment() {
        let dev = LoggingConfig::for_environment(Environment::Development);
        assert_eq!(dev.level, "debug");
        assert_eq!(dev.format, LogFormat::Pretty);
        assert!(dev.source_location);

        let prod = LoggingConfig::for_environment(Environment::Production);
        assert_eq!(prod.level, "info");
        assert_eq!(prod.format, LogFormat::Json);
        assert!(!prod.source_location);
    }

    #[test]
    fn test_format_defaults_when_missing() {
        let config: LoggingConfig = serde_json::from_str(r#"{"level":"trace"}"#).unwrap();
        assert_eq!(config.level, "trace");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.source_location);
    }

    #[test]
    fn test_from_env_overrides_preset() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        env::set_var(LOG_LEVEL_ENV, "lg_core=trace");
        env::set_var(LOG_FORMAT_ENV, "compact");
        let config = LoggingConfig::from_env(Environment::Production);
        assert_eq!(config.level, "lg_core=trace");
        assert_eq!(config.format, LogFormat::Compact);

        env::set_var(LOG_LEVEL_ENV, "  ");
        env::set_var(LOG_FORMAT_ENV, "xml");
        assert_eq!(
            LoggingConfig::from_env(Environment::Production),
            LoggingConfig::for_environment(Environment::Production)
        );

        env::remove_var(LOG_LEVEL_ENV);
        env::remove_var(LOG_FORMAT_ENV);
    }
}
