//! Shared configuration and logging setup for ListGuard
//!
//! This crate provides functionality used across the workspace:
//! - Configuration types (form token lifetime, environment, logging)
//! - Tracing subscriber initialisation

pub mod config;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CsrfConfig, Environment, LogFormat, LoggingConfig};
