//! Domain entities for form tokens.

pub mod auth_context;
pub mod credential;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use auth_context::AuthContext;
pub use credential::ContextCredential;
pub use token::{
    compose_key, parse_list_key, KeyParts, TokenPayload,
    KEY_MAC_SEPARATOR, KEY_PART_SEPARATOR, MICROS_PER_SECOND,
};
