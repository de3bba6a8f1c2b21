//! Form token service module
//!
//! This module handles anti-forgery form tokens:
//! - Token issuing for the first authenticated context of a caller
//! - Token verification against list, role, user and lifetime window
//! - The hex wire encoding of token payloads

pub mod codec;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::CsrfTokenServiceConfig;
pub use service::{compute_mac, CsrfTokenService};
