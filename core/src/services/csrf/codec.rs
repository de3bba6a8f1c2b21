//! Token wire format
//!
//! A token is the lowercase hex encoding of a marshalled `(int, str)` pair:
//!
//! ```text
//! '('  u32 LE count (2)
//! 'i'  i32 LE issued        | 'I' i64 LE issued
//! 's'  u32 LE len, bytes    | 'u' u32 LE len, bytes
//! ```

use bytes::{Buf, BufMut, BytesMut};

use crate::domain::entities::TokenPayload;
use crate::errors::CodecError;

const TYPE_TUPLE: u8 = b'(';
const TYPE_INT: u8 = b'i';
const TYPE_INT64: u8 = b'I';
const TYPE_STRING: u8 = b's';
const TYPE_UNICODE: u8 = b'u';

const PAIR_ARITY: u32 = 2;

/// Serialize a payload into its binary form
pub fn encode_payload(payload: &TokenPayload) -> BytesMut {
    let key = payload.keymac.as_bytes();
    let mut out = BytesMut::with_capacity(1 + 4 + 1 + 8 + 1 + 4 + key.len());
    out.put_u8(TYPE_TUPLE);
    out.put_u32_le(PAIR_ARITY);
    match i32::try_from(payload.issued) {
        Ok(issued) => {
            out.put_u8(TYPE_INT);
            out.put_i32_le(issued);
        }
        Err(_) => {
            out.put_u8(TYPE_INT64);
            out.put_i64_le(payload.issued);
        }
    }
    out.put_u8(TYPE_STRING);
    out.put_u32_le(key.len() as u32);
    out.extend_from_slice(key);
    out
}

/// Parse the binary form; the whole buffer must be consumed
pub fn decode_payload(mut p: &[u8]) -> Result<TokenPayload, CodecError> {
    if p.remaining() < 1 + 4 {
        return Err(CodecError::Truncated);
    }
    let tag = p.get_u8();
    if tag != TYPE_TUPLE {
        return Err(CodecError::UnexpectedType { tag });
    }
    let arity = p.get_u32_le();
    if arity != PAIR_ARITY {
        return Err(CodecError::BadArity { arity });
    }

    let issued = decode_int(&mut p)?;
    let keymac = decode_string(&mut p)?;

    if p.has_remaining() {
        return Err(CodecError::TrailingBytes {
            count: p.remaining(),
        });
    }
    Ok(TokenPayload { issued, keymac })
}

fn decode_int(p: &mut &[u8]) -> Result<i64, CodecError> {
    if !p.has_remaining() {
        return Err(CodecError::Truncated);
    }
    match p.get_u8() {
        TYPE_INT => {
            if p.remaining() < 4 {
                return Err(CodecError::Truncated);
            }
            Ok(i64::from(p.get_i32_le()))
        }
        TYPE_INT64 => {
            if p.remaining() < 8 {
                return Err(CodecError::Truncated);
            }
            Ok(p.get_i64_le())
        }
        tag => Err(CodecError::UnexpectedType { tag }),
    }
}

fn decode_string(p: &mut &[u8]) -> Result<String, CodecError> {
    if !p.has_remaining() {
        return Err(CodecError::Truncated);
    }
    match p.get_u8() {
        TYPE_STRING | TYPE_UNICODE => {}
        tag => return Err(CodecError::UnexpectedType { tag }),
    }
    if p.remaining() < 4 {
        return Err(CodecError::Truncated);
    }
    let len = p.get_u32_le() as usize;
    if p.remaining() < len {
        return Err(CodecError::Truncated);
    }
    let value = std::str::from_utf8(&p[..len])
        .map_err(|_| CodecError::InvalidUtf8)?
        .to_string();
    p.advance(len);
    Ok(value)
}

/// Encode a payload as an opaque hex token
pub fn encode_token(payload: &TokenPayload) -> String {
    hex::encode(encode_payload(payload))
}

/// Decode an opaque hex token back into its payload
pub fn decode_token(token: &str) -> Result<TokenPayload, CodecError> {
    let raw = hex::decode(token).map_err(|_| CodecError::InvalidHex)?;
    decode_payload(&raw)
}
