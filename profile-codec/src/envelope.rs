//! Wire envelopes and the encode/decode pair.

use crate::{AttrValue, CodecError, CodecResult, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The tagged wire form of one attribute value.
///
/// Stored as a nested `{kind, payload}` structure per attribute-bag entry.
/// Payloads are fixed-width big-endian for numeric kinds, one byte for
/// booleans, and UTF-8 bytes for strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub kind: ValueKind,
    pub payload: Vec<u8>,
}

/// Encodes a native value into its wire envelope.
///
/// Total over [`AttrValue`]: the closed sum type leaves no unsupported-kind
/// branch.
#[must_use]
pub fn encode(value: &AttrValue) -> Envelope {
    let (kind, payload) = match value {
        AttrValue::Str(v) => (ValueKind::Str, v.as_bytes().to_vec()),
        AttrValue::Bool(v) => (ValueKind::Bool, vec![u8::from(*v)]),
        AttrValue::I32(v) => (ValueKind::I32, v.to_be_bytes().to_vec()),
        AttrValue::I64(v) => (ValueKind::I64, v.to_be_bytes().to_vec()),
        AttrValue::F32(v) => (ValueKind::F32, v.to_bits().to_be_bytes().to_vec()),
        AttrValue::F64(v) => (ValueKind::F64, v.to_bits().to_be_bytes().to_vec()),
    };
    Envelope { kind, payload }
}

/// Decodes a wire envelope back into the native value.
///
/// The inverse of [`encode`]: for every supported kind the round-trip is
/// bit-exact. Floats go through `from_bits`, so no widening or narrowing
/// can occur across the boundary.
pub fn decode(envelope: &Envelope) -> CodecResult<AttrValue> {
    let payload = &envelope.payload;
    match envelope.kind {
        ValueKind::Str => Ok(AttrValue::Str(String::from_utf8(payload.clone())?)),
        ValueKind::Bool => match *fixed::<1>(ValueKind::Bool, payload)? {
            [0] => Ok(AttrValue::Bool(false)),
            [1] => Ok(AttrValue::Bool(true)),
            [b] => Err(CodecError::InvalidBool(b)),
        },
        ValueKind::I32 => Ok(AttrValue::I32(i32::from_be_bytes(*fixed(
            ValueKind::I32,
            payload,
        )?))),
        ValueKind::I64 => Ok(AttrValue::I64(i64::from_be_bytes(*fixed(
            ValueKind::I64,
            payload,
        )?))),
        ValueKind::F32 => Ok(AttrValue::F32(f32::from_bits(u32::from_be_bytes(*fixed(
            ValueKind::F32,
            payload,
        )?)))),
        ValueKind::F64 => Ok(AttrValue::F64(f64::from_bits(u64::from_be_bytes(*fixed(
            ValueKind::F64,
            payload,
        )?)))),
    }
}

fn fixed<const N: usize>(kind: ValueKind, payload: &[u8]) -> CodecResult<&[u8; N]> {
    payload
        .try_into()
        .map_err(|_| CodecError::PayloadLength {
            kind,
            len: payload.len(),
            expected: N,
        })
}

/// Encodes every entry of an attribute bag.
///
/// An empty map yields an empty map; "no extra attributes" is a normal
/// state, not an error state.
#[must_use]
pub fn encode_map(bag: &BTreeMap<String, AttrValue>) -> BTreeMap<String, Envelope> {
    bag.iter()
        .map(|(key, value)| (key.clone(), encode(value)))
        .collect()
}

/// Decodes every entry of a stored attribute bag.
///
/// Fail-fast policy: the first corrupt entry rejects the whole map. One
/// consistent policy is applied everywhere rather than per-call-site
/// skipping.
pub fn decode_map(
    envelopes: &BTreeMap<String, Envelope>,
) -> CodecResult<BTreeMap<String, AttrValue>> {
    envelopes
        .iter()
        .map(|(key, envelope)| Ok((key.clone(), decode(envelope)?)))
        .collect()
}
