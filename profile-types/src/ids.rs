//! Document identifiers.
//!
//! A 12-byte identifier with a creation-time prefix: 4 bytes of big-endian
//! Unix seconds, 5 bytes of per-process random, 3 bytes of a wrapping
//! counter seeded randomly at startup. Byte-lexicographic order therefore
//! matches creation order, and two concurrent generations can never collide
//! within a process.

use crate::{Error, Result};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Length of the canonical hex rendering.
const HEX_LEN: usize = 24;

static PROCESS_RANDOM: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

fn process_random() -> &'static [u8; 5] {
    PROCESS_RANDOM.get_or_init(rand::random)
}

fn next_count() -> u32 {
    COUNTER
        .get_or_init(|| AtomicU32::new(rand::random()))
        .fetch_add(1, Ordering::SeqCst)
}

/// Unique identifier for a stored document.
///
/// Rendered as a 24-character lowercase hex string on the wire; parsing
/// accepts either case. Immutable once assigned to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId([u8; 12]);

impl DocumentId {
    /// Generates a new identifier with the current timestamp prefix.
    #[must_use]
    pub fn generate() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before Unix epoch")
            .as_secs() as u32;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(process_random());
        bytes[9..].copy_from_slice(&next_count().to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Creates an identifier from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Parses an identifier from its hex rendering.
    ///
    /// Fails with [`Error::MalformedIdentifier`] unless the input is exactly
    /// 24 hex characters. A parse failure is a caller error, distinct from
    /// any storage-level "not found".
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() != HEX_LEN {
            return Err(Error::MalformedIdentifier(s.to_string()));
        }
        let raw = hex::decode(s).map_err(|_| Error::MalformedIdentifier(s.to_string()))?;
        let mut bytes = [0u8; 12];
        bytes.copy_from_slice(&raw);
        Ok(Self(bytes))
    }

    /// Returns the canonical lowercase hex rendering, the inverse of
    /// [`DocumentId::parse`].
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the creation time embedded in the identifier, as Unix seconds.
    #[must_use]
    pub fn timestamp_secs(&self) -> u32 {
        let mut prefix = [0u8; 4];
        prefix.copy_from_slice(&self.0[..4]);
        u32::from_be_bytes(prefix)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for DocumentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = DocumentId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a 24-character hex string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                DocumentId::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

impl From<DocumentId> for serde_json::Value {
    fn from(id: DocumentId) -> Self {
        serde_json::Value::String(id.to_hex())
    }
}
