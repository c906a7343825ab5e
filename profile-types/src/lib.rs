//! Core type definitions for the profile backend.
//!
//! This crate defines the fundamental, entity-agnostic types used throughout
//! the storage core:
//! - Document identifiers (12-byte, time-prefixed, hex-rendered)
//! - Closed category vocabularies (status, gender, code type, config type)
//! - The application error catalog
//! - Millisecond wall-clock helpers
//!
//! All entity shapes (Unit, User, Config) belong in `profile-model`, not here.

mod category;
mod errcode;
mod ids;
mod time;

pub use category::{CodeType, ConfigType, Gender, Status};
pub use errcode::AppCode;
pub use ids::DocumentId;
pub use time::now_millis;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The identifier string is not 24 hex characters.
    #[error("malformed identifier: {0:?}")]
    MalformedIdentifier(String),

    /// An integer outside a category's closed vocabulary.
    #[error("unknown category value: {0}")]
    UnknownCategory(i64),
}
