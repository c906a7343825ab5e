//! Entity-specific mapper facades.
//!
//! Each facade wraps the generic [`Mapper`](profile_storage::Mapper) for
//! one entity kind and names its queries after the fields they filter on.
//! The facades add no consistency guarantees of their own: existence
//! checks and inserts remain separate calls, and uniqueness enforcement
//! stays an opt-in property of the store.
//!
//! All facades front point lookups with the read-through cache.

mod config;
mod unit;
mod user;

pub use config::ConfigMapper;
pub use unit::UnitMapper;
pub use user::UserMapper;
