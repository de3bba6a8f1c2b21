//! Credential providers supplying per-context keys and secrets.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod list_credentials;

pub use list_credentials::{ListCredentials, ListSecrets, SITE_ADMIN_KEY};
pub use r#trait::AuthContextProvider;
