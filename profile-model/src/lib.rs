//! Entity model for the profile core.
//!
//! Defines the three stored entity shapes and the contract they share:
//! - [`Document`]: the minimal bound the generic repository needs
//!   (a collection name and an identifier)
//! - [`Unit`]: an organization account
//! - [`User`]: an individual account, optionally linked to a unit,
//!   carrying the open attribute bag
//! - [`Config`]: per-unit pipeline configuration
//! - [`fields`]: the wire field-name constants shared with filters and
//!   partial updates
//!
//! Entities serialize to flat JSON documents using the wire field names;
//! that serialized form is exactly what the storage layer persists.

mod config;
mod document;
pub mod fields;
mod unit;
mod user;

pub use config::{ChatConfig, Config, ReportConfig, TtsConfig};
pub use document::Document;
pub use unit::Unit;
pub use user::User;
