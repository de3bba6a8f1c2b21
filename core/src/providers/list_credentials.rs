//! In-memory credential provider built from list passwords

use std::collections::HashMap;

use crate::domain::entities::{compose_key, AuthContext, ContextCredential};

use super::r#trait::AuthContextProvider;

/// Key used for site administrator credentials when site cookies are allowed
pub const SITE_ADMIN_KEY: &str = "site";

/// Passwords configured for a single list
#[derive(Clone, Default)]
pub struct ListSecrets {
    admin_password: String,
    moderator_password: Option<String>,
    poster_password: Option<String>,
    /// Lowercased member address -> member password
    members: HashMap<String, String>,
}

impl ListSecrets {
    /// Create secrets for a list with its administrator password
    pub fn new(admin_password: impl Into<String>) -> Self {
        Self {
            admin_password: admin_password.into(),
            ..Default::default()
        }
    }

    pub fn with_moderator(mut self, password: impl Into<String>) -> Self {
        self.moderator_password = Some(password.into());
        self
    }

    pub fn with_poster(mut self, password: impl Into<String>) -> Self {
        self.poster_password = Some(password.into());
        self
    }

    /// Register a member; addresses are matched case-insensitively
    pub fn with_member(mut self, address: &str, password: impl Into<String>) -> Self {
        self.members.insert(address.to_lowercase(), password.into());
        self
    }

    /// Remove a member, returning whether it was registered
    pub fn remove_member(&mut self, address: &str) -> bool {
        self.members.remove(&address.to_lowercase()).is_some()
    }

    fn member_password(&self, address: &str) -> Option<&str> {
        self.members.get(&address.to_lowercase()).map(String::as_str)
    }
}

/// Reference [`AuthContextProvider`] holding list and site passwords in memory
///
/// Keys follow the host's layout: `<list>+user+<address>`, `<list>+poster`,
/// `<list>+moderator`, `<list>+admin`, and `site` for the site administrator
/// when site-admin cookies are allowed. Otherwise the site administrator
/// falls back to the list administrator credential. A context without a
/// configured password yields no credential.
#[derive(Clone, Default)]
pub struct ListCredentials {
    lists: HashMap<String, ListSecrets>,
    site_password: Option<String>,
    allow_site_admin_cookies: bool,
}

impl ListCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the secrets for a list
    pub fn with_list(mut self, internal_name: impl Into<String>, secrets: ListSecrets) -> Self {
        self.lists.insert(internal_name.into(), secrets);
        self
    }

    /// Set the site administrator password
    pub fn with_site_password(mut self, password: impl Into<String>) -> Self {
        self.site_password = Some(password.into());
        self
    }

    /// Allow site administrator credentials to be issued under the `site` key
    pub fn allow_site_admin_cookies(mut self, allow: bool) -> Self {
        self.allow_site_admin_cookies = allow;
        self
    }

    /// Mutable access to a registered list's secrets
    pub fn list_mut(&mut self, internal_name: &str) -> Option<&mut ListSecrets> {
        self.lists.get_mut(internal_name)
    }

    fn site_credential(&self) -> Option<ContextCredential> {
        if !self.allow_site_admin_cookies {
            return None;
        }
        non_empty(self.site_password.as_deref())
            .map(|password| ContextCredential::new(SITE_ADMIN_KEY, password))
    }
}

impl AuthContextProvider for ListCredentials {
    fn auth_context_info(
        &self,
        list: &str,
        context: AuthContext,
        user: Option<&str>,
    ) -> Option<ContextCredential> {
        let secrets = self.lists.get(list)?;

        let (key_user, secret) = match context {
            AuthContext::User => {
                let user = user?;
                (Some(user), secrets.member_password(user))
            }
            AuthContext::ListPoster => (None, secrets.poster_password.as_deref()),
            AuthContext::ListModerator => (None, secrets.moderator_password.as_deref()),
            AuthContext::ListAdmin => (None, Some(secrets.admin_password.as_str())),
            AuthContext::SiteAdmin => {
                if let Some(credential) = self.site_credential() {
                    return Some(credential);
                }
                let secret = non_empty(Some(secrets.admin_password.as_str()))?;
                return Some(ContextCredential::new(
                    compose_key(list, AuthContext::ListAdmin, None),
                    secret,
                ));
            }
        };
        let secret = non_empty(secret)?;

        Some(ContextCredential::new(
            compose_key(list, context, key_user),
            secret,
        ))
    }
}

fn non_empty(password: Option<&str>) -> Option<&str> {
    password.filter(|password| !password.is_empty())
}
