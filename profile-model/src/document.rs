use profile_types::DocumentId;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// The contract an entity shape must satisfy to flow through the generic
/// repository.
///
/// Deliberately minimal: a collection name and an identifier accessor.
/// Everything else about the shape is opaque to storage, which only sees
/// the serde representation.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The storage collection this shape lives in.
    const COLLECTION: &'static str;

    /// The document's identifier. Assigned once at creation, never
    /// reassigned.
    fn id(&self) -> DocumentId;
}
