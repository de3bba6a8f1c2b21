//! # ListGuard Core
//!
//! Anti-forgery form tokens for mailing-list administration.
//! This crate contains the domain types, the credential provider seam,
//! the token service and the error types it reports internally.

pub mod domain;
pub mod errors;
pub mod providers;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use providers::*;
pub use services::*;
