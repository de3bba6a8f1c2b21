//! Unit tests for error types

use crate::errors::{CodecError, CsrfError};

#[test]
fn test_codec_error_converts_into_malformed_payload() {
    let error: CsrfError = CodecError::Truncated.into();
    assert_eq!(error, CsrfError::MalformedPayload(CodecError::Truncated));
    assert_eq!(error.reason(), "MALFORMED_PAYLOAD");
    assert!(error.to_string().contains("truncated"));
}

#[test]
fn test_error_messages() {
    let error = CsrfError::UnknownRole {
        role: "owner".to_string(),
    };
    assert!(error.to_string().contains("owner"));

    let error = CodecError::UnexpectedType { tag: 0x7a };
    assert_eq!(error.to_string(), "Unexpected type tag: 0x7a");

    let error = CodecError::TrailingBytes { count: 3 };
    assert!(error.to_string().contains('3'));
}

#[test]
fn test_reason_codes_are_distinct() {
    let errors = [
        CsrfError::MalformedPayload(CodecError::InvalidHex),
        CsrfError::MissingSeparator,
        CsrfError::ForeignList,
        CsrfError::UnknownRole { role: String::new() },
        CsrfError::NotAuthenticated,
        CsrfError::MacMismatch,
        CsrfError::NotYetValid,
        CsrfError::Expired,
    ];
    let mut reasons: Vec<&str> = errors.iter().map(CsrfError::reason).collect();
    reasons.sort_unstable();
    reasons.dedup();
    assert_eq!(reasons.len(), errors.len());
}
