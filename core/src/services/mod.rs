//! Business services containing domain logic and use cases.

pub mod csrf;

// Re-export commonly used types
pub use csrf::{compute_mac, CsrfTokenService, CsrfTokenServiceConfig};
