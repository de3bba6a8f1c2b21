//! Provider trait through which the host application exposes per-context credentials.

use crate::domain::entities::{AuthContext, ContextCredential};

/// Source of `(key, secret)` pairs for a list's authentication contexts
///
/// The host application implements this. Returning `None`, or a credential
/// with an empty key, means the caller is not currently authenticated in
/// that context (logged out, role revoked, unknown user).
///
/// Implementations must be synchronous and free of side effects visible to
/// the token service; they are queried on every `issue` and `verify`.
///
/// # Example
/// ```
/// use lg_core::domain::{AuthContext, ContextCredential};
/// use lg_core::providers::AuthContextProvider;
///
/// struct AdminOnly;
///
/// impl AuthContextProvider for AdminOnly {
///     fn auth_context_info(
///         &self,
///         list: &str,
///         context: AuthContext,
///         _user: Option<&str>,
///     ) -> Option<ContextCredential> {
///         (context == AuthContext::ListAdmin)
///             .then(|| ContextCredential::new(format!("{}+admin", list), "s3cr3t"))
///     }
/// }
/// ```
pub trait AuthContextProvider: Send + Sync {
    /// Look up the credential for `context` on `list`, optionally for `user`
    fn auth_context_info(
        &self,
        list: &str,
        context: AuthContext,
        user: Option<&str>,
    ) -> Option<ContextCredential>;
}
