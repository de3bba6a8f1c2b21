//! Authentication contexts a form token can attest to

use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission level a form token is bound to
///
/// Each context has a short key that is embedded in the token's composite
/// key (`<list>+<short key>[+<user>]`) and mapped back on verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthContext {
    /// A list member acting on their own subscription
    #[serde(rename = "user")]
    User,
    /// Someone holding the list's posting password
    #[serde(rename = "poster")]
    ListPoster,
    /// A list moderator
    #[serde(rename = "moderator")]
    ListModerator,
    /// A list administrator
    #[serde(rename = "admin")]
    ListAdmin,
    /// The site administrator
    #[serde(rename = "site")]
    SiteAdmin,
}

impl AuthContext {
    /// Every context, lowest privilege first
    pub const ALL: [AuthContext; 5] = [
        AuthContext::User,
        AuthContext::ListPoster,
        AuthContext::ListModerator,
        AuthContext::ListAdmin,
        AuthContext::SiteAdmin,
    ];

    /// Short key used inside composite token keys
    pub fn key(&self) -> &'static str {
        match self {
            AuthContext::User => "user",
            AuthContext::ListPoster => "poster",
            AuthContext::ListModerator => "moderator",
            AuthContext::ListAdmin => "admin",
            AuthContext::SiteAdmin => "site",
        }
    }

    /// Resolve a short key back into a context
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "user" => Some(AuthContext::User),
            "poster" => Some(AuthContext::ListPoster),
            "moderator" => Some(AuthContext::ListModerator),
            "admin" => Some(AuthContext::ListAdmin),
            "site" => Some(AuthContext::SiteAdmin),
            _ => None,
        }
    }
}

impl fmt::Display for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for AuthContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("Invalid auth context: {}", s))
    }
}
