//! Per-context credential returned by the host application

use std::fmt;

/// Identity key and signing secret for one authentication context
///
/// `key` is an opaque label scoped to a list (for example `mylist+admin`).
/// An empty key means the caller is not authenticated in that context.
/// `secret` never leaves the server; it only feeds the token MAC.
#[derive(Clone, PartialEq, Eq)]
pub struct ContextCredential {
    pub key: String,
    pub secret: String,
}

impl ContextCredential {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Whether this credential identifies an authenticated caller
    pub fn is_authenticated(&self) -> bool {
        !self.key.is_empty()
    }
}

impl fmt::Debug for ContextCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextCredential")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}
