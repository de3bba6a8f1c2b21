//! Main form token service implementation

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::domain::entities::{
    parse_list_key, AuthContext, ContextCredential, TokenPayload, MICROS_PER_SECOND,
};
use crate::errors::{CsrfError, CsrfResult};
use crate::providers::AuthContextProvider;

use super::codec;
use super::config::CsrfTokenServiceConfig;

/// Compute the MAC binding `issued` to `secret`: hex SHA-256 of the secret
/// followed by the decimal timestamp.
pub fn compute_mac(secret: &str, issued: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(issued.to_string().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Service issuing and verifying anti-forgery form tokens
///
/// Stateless apart from its configuration: every call reads the current
/// time and queries the provider, so one instance can be shared freely
/// across threads.
pub struct CsrfTokenService<P: AuthContextProvider + ?Sized> {
    /// Host-supplied credentials
    provider: Arc<P>,
    /// Service configuration
    config: CsrfTokenServiceConfig,
}

impl<P: AuthContextProvider + ?Sized> CsrfTokenService<P> {
    /// Create a new form token service
    ///
    /// # Arguments
    ///
    /// * `provider` - Source of per-context keys and secrets
    /// * `config` - Service configuration
    pub fn new(provider: Arc<P>, config: CsrfTokenServiceConfig) -> Self {
        Self { provider, config }
    }

    /// Lifetime window in seconds
    pub fn form_lifetime(&self) -> i64 {
        self.config.form_lifetime_seconds
    }

    /// Issue a token for the first context in `contexts` the caller is
    /// authenticated in.
    ///
    /// # Returns
    ///
    /// * `Some(token)` - Hex token to embed in the form
    /// * `None` - No candidate context yielded a credential
    pub fn issue(&self, list: &str, contexts: &[AuthContext], user: Option<&str>) -> Option<String> {
        self.issue_at(list, contexts, user, Utc::now())
    }

    /// Same as [`issue`](Self::issue) with an explicit clock.
    /// The embedded issue time is truncated to whole seconds.
    pub fn issue_at(
        &self,
        list: &str,
        contexts: &[AuthContext],
        user: Option<&str>,
        now: DateTime<Utc>,
    ) -> Option<String> {
        let Some((context, credential)) = self.first_credential(list, contexts, user) else {
            tracing::debug!(
                list = list,
                event = "csrf_unauthenticated",
                "No authenticated context for form token"
            );
            return None;
        };

        let issued = now.timestamp();
        let mac = compute_mac(&credential.secret, issued);
        let payload = TokenPayload::new(issued, &credential.key, &mac);

        tracing::debug!(
            list = list,
            context = %context,
            issued = issued,
            event = "csrf_issued",
            "Issued form token"
        );

        Some(codec::encode_token(&payload))
    }

    /// Check a submitted token against `list`.
    ///
    /// Every failure (malformed input, wrong list, unknown role, revoked
    /// credential, MAC mismatch, expiry) yields `false`.
    pub fn verify(&self, list: &str, token: &str) -> bool {
        self.verify_at(list, token, Utc::now())
    }

    /// Same as [`verify`](Self::verify) with an explicit clock
    pub fn verify_at(&self, list: &str, token: &str, now: DateTime<Utc>) -> bool {
        match self.check_at(list, token, now) {
            Ok(context) => {
                tracing::debug!(
                    list = list,
                    context = %context,
                    event = "csrf_verified",
                    "Form token accepted"
                );
                true
            }
            Err(e) => {
                tracing::debug!(
                    list = list,
                    reason = e.reason(),
                    error = %e,
                    event = "csrf_rejected",
                    "Form token rejected"
                );
                false
            }
        }
    }

    /// Full verification returning the context the token attests to, or
    /// the reason it was rejected.
    ///
    /// The age is measured in microseconds against whole-second issue
    /// times, so a token checked later within its issuing second is
    /// already in the past.
    pub fn check_at(&self, list: &str, token: &str, now: DateTime<Utc>) -> CsrfResult<AuthContext> {
        let payload = codec::decode_token(token)?;
        let (key, received_mac) = payload.split_keymac().ok_or(CsrfError::MissingSeparator)?;

        let parts = parse_list_key(list, key).ok_or(CsrfError::ForeignList)?;
        let context = AuthContext::from_key(parts.role_key).ok_or_else(|| CsrfError::UnknownRole {
            role: parts.role_key.to_string(),
        })?;

        let credential = self
            .provider
            .auth_context_info(list, context, parts.user)
            .filter(ContextCredential::is_authenticated)
            .ok_or(CsrfError::NotAuthenticated)?;

        let mac = compute_mac(&credential.secret, payload.issued);
        if !constant_time_eq(mac.as_bytes(), received_mac.as_bytes()) {
            return Err(CsrfError::MacMismatch);
        }

        let age = payload.age_micros_at(now.timestamp_micros());
        if age <= 0 {
            return Err(CsrfError::NotYetValid);
        }
        if age >= self.config.form_lifetime_seconds.saturating_mul(MICROS_PER_SECOND) {
            return Err(CsrfError::Expired);
        }

        Ok(context)
    }

    fn first_credential(
        &self,
        list: &str,
        contexts: &[AuthContext],
        user: Option<&str>,
    ) -> Option<(AuthContext, ContextCredential)> {
        contexts.iter().find_map(|&context| {
            self.provider
                .auth_context_info(list, context, user)
                .filter(ContextCredential::is_authenticated)
                .map(|credential| (context, credential))
        })
    }
}
