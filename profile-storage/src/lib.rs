//! SQLite storage layer for the profile core.
//!
//! Provides a generic, cache-aware document repository shared by every
//! entity kind. Entities are stored as flat JSON bodies keyed by their hex
//! identifier, one table per collection.
//!
//! # Architecture
//!
//! - [`DocumentStore`] owns the connection and the per-collection tables
//! - [`Mapper`] is the typed repository over one collection: point lookup,
//!   filter lookup, existence check, insert, partial update
//! - [`Filter`] is a conjunction of field-equality predicates
//! - [`FieldUpdates`] is a set-only partial update; update never clears a
//!   field by omission and always refreshes the update timestamp
//! - An optional read-through cache fronts point lookups; every write
//!   invalidates the entry for that id before returning, so a writer's own
//!   subsequent reads are never stale
//!
//! Checking existence and then inserting is two calls, not one atomic
//! operation: concurrent callers can both pass the check. Deployments that
//! need storage-enforced uniqueness opt in via
//! [`DocumentStore::ensure_unique_index`], which surfaces violations as
//! [`StorageError::DuplicateKey`].

mod cache;
mod error;
mod filter;
mod mapper;
mod store;
mod update;

pub use cache::DocumentCache;
pub use error::{StorageError, StorageResult};
pub use filter::Filter;
pub use mapper::Mapper;
pub use store::DocumentStore;
pub use update::FieldUpdates;
