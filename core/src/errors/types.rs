//! Error types for form token encoding and verification
//!
//! None of these cross the public `verify` boundary; they exist so the
//! service can log a rejection reason and so tests can assert on it.

use thiserror::Error;

/// Failures while decoding the token wire format
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Token is not valid hex")]
    InvalidHex,

    #[error("Token payload is truncated")]
    Truncated,

    #[error("Unexpected type tag: {tag:#04x}")]
    UnexpectedType { tag: u8 },

    #[error("Expected a 2-tuple, found {arity} elements")]
    BadArity { arity: u32 },

    #[error("Token key is not valid UTF-8")]
    InvalidUtf8,

    #[error("Token has {count} trailing bytes")]
    TrailingBytes { count: usize },
}

/// Reasons a form token is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsrfError {
    #[error("Malformed token: {0}")]
    MalformedPayload(#[from] CodecError),

    #[error("Token key has no MAC separator")]
    MissingSeparator,

    #[error("Token was issued for another list")]
    ForeignList,

    #[error("Unknown authentication context: {role}")]
    UnknownRole { role: String },

    #[error("Context is not authenticated")]
    NotAuthenticated,

    #[error("Token MAC mismatch")]
    MacMismatch,

    #[error("Token issue time is not in the past")]
    NotYetValid,

    #[error("Token expired")]
    Expired,
}

impl CsrfError {
    /// Stable reason code for structured logs
    pub fn reason(&self) -> &'static str {
        match self {
            CsrfError::MalformedPayload(_) => "MALFORMED_PAYLOAD",
            CsrfError::MissingSeparator => "MISSING_SEPARATOR",
            CsrfError::ForeignList => "FOREIGN_LIST",
            CsrfError::UnknownRole { .. } => "UNKNOWN_ROLE",
            CsrfError::NotAuthenticated => "NOT_AUTHENTICATED",
            CsrfError::MacMismatch => "MAC_MISMATCH",
            CsrfError::NotYetValid => "NOT_YET_VALID",
            CsrfError::Expired => "EXPIRED",
        }
    }
}
