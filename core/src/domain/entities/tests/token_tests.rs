//! Unit tests for token payloads and composite keys

use crate::domain::entities::auth_context::AuthContext;
use crate::domain::entities::token::{
    compose_key, parse_list_key, KeyParts, TokenPayload, MICROS_PER_SECOND,
};

#[test]
fn test_payload_keymac_layout() {
    let payload = TokenPayload::new(1_700_000_000, "mylist+admin", "abc123");
    assert_eq!(payload.keymac, "mylist+admin:abc123");
    assert_eq!(payload.split_keymac(), Some(("mylist+admin", "abc123")));
    assert_eq!(payload.key(), Some("mylist+admin"));
}

#[test]
fn test_split_keymac_uses_first_colon() {
    let payload = TokenPayload {
        issued: 0,
        keymac: "a:b:c".to_string(),
    };
    assert_eq!(payload.split_keymac(), Some(("a", "b:c")));

    let payload = TokenPayload {
        issued: 0,
        keymac: "no-separator".to_string(),
    };
    assert_eq!(payload.split_keymac(), None);
}

#[test]
fn test_age_saturates() {
    let payload = TokenPayload::new(i64::MIN, "k", "m");
    assert_eq!(payload.age_micros_at(i64::MAX), i64::MAX);

    let payload = TokenPayload::new(i64::MAX, "k", "m");
    assert_eq!(payload.age_micros_at(0), -i64::MAX);
}

#[test]
fn test_age_has_sub_second_resolution() {
    let payload = TokenPayload::new(100, "k", "m");
    assert_eq!(payload.age_micros_at(100 * MICROS_PER_SECOND), 0);
    assert_eq!(payload.age_micros_at(100 * MICROS_PER_SECOND + 250), 250);
    assert_eq!(payload.age_micros_at(160 * MICROS_PER_SECOND), 60 * MICROS_PER_SECOND);
    assert_eq!(payload.age_micros_at(40 * MICROS_PER_SECOND), -60 * MICROS_PER_SECOND);
}

#[test]
fn test_compose_key() {
    assert_eq!(compose_key("mylist", AuthContext::ListAdmin, None), "mylist+admin");
    assert_eq!(
        compose_key("mylist", AuthContext::User, Some("bob@example.com")),
        "mylist+user+bob@example.com"
    );
}

#[test]
fn test_parse_list_key_without_user() {
    assert_eq!(
        parse_list_key("mylist", "mylist+moderator"),
        Some(KeyParts {
            role_key: "moderator",
            user: None
        })
    );
}

#[test]
fn test_parse_list_key_with_user_containing_plus() {
    assert_eq!(
        parse_list_key("mylist", "mylist+user+bob+tag@example.com"),
        Some(KeyParts {
            role_key: "user",
            user: Some("bob+tag@example.com")
        })
    );
}

#[test]
fn test_parse_list_key_rejects_other_lists() {
    assert_eq!(parse_list_key("mylist", "otherlist+admin"), None);
    // Prefix match alone is not enough; the separator must follow
    assert_eq!(parse_list_key("my", "mylist+admin"), None);
    assert_eq!(parse_list_key("mylist", "mylist"), None);
    assert_eq!(parse_list_key("mylist", "site"), None);
}

#[test]
fn test_parse_list_key_keeps_empty_parts() {
    assert_eq!(
        parse_list_key("mylist", "mylist+"),
        Some(KeyParts {
            role_key: "",
            user: None
        })
    );
    assert_eq!(
        parse_list_key("mylist", "mylist+user+"),
        Some(KeyParts {
            role_key: "user",
            user: Some("")
        })
    );
}
