//! Form token payload and composite key handling

use super::auth_context::AuthContext;

/// Separator between the composite key and the MAC inside a payload
pub const KEY_MAC_SEPARATOR: char = ':';

/// Clock resolution used when measuring token age
pub const MICROS_PER_SECOND: i64 = 1_000_000;

/// Separator between list name, context key and user in a composite key
pub const KEY_PART_SEPARATOR: char = '+';

/// Decoded contents of a form token
///
/// `keymac` is `<composite key>:<mac>`. The payload carries no server-side
/// record; its validity is recomputed on every verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    /// Unix timestamp (seconds) at which the token was issued
    pub issued: i64,
    /// Composite key and MAC joined by `:`
    pub keymac: String,
}

impl TokenPayload {
    pub fn new(issued: i64, key: &str, mac: &str) -> Self {
        Self {
            issued,
            keymac: format!("{}{}{}", key, KEY_MAC_SEPARATOR, mac),
        }
    }

    /// Split into `(key, mac)` on the first `:`
    pub fn split_keymac(&self) -> Option<(&str, &str)> {
        self.keymac.split_once(KEY_MAC_SEPARATOR)
    }

    /// Composite key portion, if the payload is well formed
    pub fn key(&self) -> Option<&str> {
        self.split_keymac().map(|(key, _)| key)
    }

    /// Microseconds elapsed between issuance and `now_micros`
    pub fn age_micros_at(&self, now_micros: i64) -> i64 {
        now_micros.saturating_sub(self.issued.saturating_mul(MICROS_PER_SECOND))
    }
}

/// Role and user extracted from a composite key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyParts<'a> {
    pub role_key: &'a str,
    pub user: Option<&'a str>,
}

/// Build `<list>+<context>` or `<list>+<context>+<user>`
pub fn compose_key(list: &str, context: AuthContext, user: Option<&str>) -> String {
    match user {
        Some(user) => format!(
            "{list}{sep}{role}{sep}{user}",
            sep = KEY_PART_SEPARATOR,
            role = context.key()
        ),
        None => format!("{list}{sep}{role}", sep = KEY_PART_SEPARATOR, role = context.key()),
    }
}

/// Parse a composite key belonging to `list`.
///
/// Returns `None` unless the key starts with `<list>+`. The remainder is
/// split on its first `+`, so a user part may itself contain `+`.
pub fn parse_list_key<'a>(list: &str, key: &'a str) -> Option<KeyParts<'a>> {
    let rest = key.strip_prefix(list)?.strip_prefix(KEY_PART_SEPARATOR)?;
    let parts = match rest.split_once(KEY_PART_SEPARATOR) {
        Some((role_key, user)) => KeyParts {
            role_key,
            user: Some(user),
        },
        None => KeyParts {
            role_key: rest,
            user: None,
        },
    };
    Some(parts)
}
