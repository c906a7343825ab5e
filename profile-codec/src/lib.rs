//! Typed-value codec for the open attribute bag.
//!
//! A document may carry an open-ended map of strongly-typed scalar
//! attributes. On the wire each value becomes a self-describing
//! [`Envelope`], a kind tag plus the value's fixed-width encoding, so the
//! bag survives a schema'd storage format without losing type information.
//!
//! The native side is the closed sum type [`AttrValue`]; encoding is a total
//! match over it, so "unsupported kind" cannot arise at this boundary.
//! Decoding can fail on corrupt payloads and is fail-fast at the map level:
//! one bad entry rejects the whole map rather than silently dropping keys.
//!
//! Round-trip law: `decode(&encode(&v)) == v` bit-for-bit, floats included.

mod envelope;
mod value;

pub use envelope::{Envelope, decode, decode_map, encode, encode_map};
pub use value::{AttrValue, ValueKind};

/// Result type alias using the crate's error type.
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Errors produced when decoding a wire envelope.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A string payload was not valid UTF-8.
    #[error("string payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// A fixed-width payload had the wrong length for its kind tag.
    #[error("payload for {kind:?} has {len} bytes, expected {expected}")]
    PayloadLength {
        kind: ValueKind,
        len: usize,
        expected: usize,
    },

    /// A boolean payload byte was neither 0 nor 1.
    #[error("boolean payload byte {0:#x} is neither 0 nor 1")]
    InvalidBool(u8),
}
