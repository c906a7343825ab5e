//! The generic typed repository.

use crate::{DocumentCache, DocumentStore, FieldUpdates, Filter, StorageError, StorageResult};
use profile_model::Document;
use profile_types::DocumentId;
use tracing::{debug, trace};

/// A typed repository over one collection.
///
/// Parametrized over any [`Document`] shape; storage only ever sees the
/// serde representation. Construction ensures the backing table exists.
pub struct Mapper<E: Document> {
    store: DocumentStore,
    cache: Option<DocumentCache<E>>,
}

impl<E: Document> Mapper<E> {
    /// A repository without a cache; every read hits the store.
    pub fn new(store: DocumentStore) -> StorageResult<Self> {
        store.ensure_collection(E::COLLECTION)?;
        Ok(Self { store, cache: None })
    }

    /// A repository with a read-through cache fronting point lookups.
    pub fn with_cache(store: DocumentStore) -> StorageResult<Self> {
        store.ensure_collection(E::COLLECTION)?;
        Ok(Self {
            store,
            cache: Some(DocumentCache::new()),
        })
    }

    /// The underlying store handle.
    #[must_use]
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Point lookup by id.
    pub fn find_one(&self, id: DocumentId) -> StorageResult<E> {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(id) {
                trace!(collection = E::COLLECTION, id = %id, "cache hit");
                return Ok(hit);
            }
            trace!(collection = E::COLLECTION, id = %id, "cache miss");
        }

        let doc = self
            .store
            .get(E::COLLECTION, &id.to_hex())?
            .ok_or_else(|| StorageError::NotFound(format!("{}:{}", E::COLLECTION, id)))?;
        let entity: E = serde_json::from_value(doc)?;

        if let Some(cache) = &self.cache {
            cache.put(id, entity.clone());
        }
        Ok(entity)
    }

    /// Exactly one document matching all predicates, or `NotFound`.
    pub fn find_one_by_filter(&self, filter: &Filter) -> StorageResult<E> {
        if let Some(id) = filter.id_only() {
            let id = DocumentId::parse(id)
                .map_err(|err| StorageError::InvalidData(err.to_string()))?;
            return self.find_one(id);
        }

        for doc in self.store.scan(E::COLLECTION)? {
            if filter.matches(&doc) {
                return Ok(serde_json::from_value(doc)?);
            }
        }
        Err(StorageError::NotFound(format!(
            "{}: no document matches filter",
            E::COLLECTION
        )))
    }

    /// Every document matching all predicates, in id (creation) order.
    /// Possibly empty; a fresh call is required to re-read.
    pub fn find_all_by_filter(&self, filter: &Filter) -> StorageResult<Vec<E>> {
        let mut matches = Vec::new();
        for doc in self.store.scan(E::COLLECTION)? {
            if filter.matches(&doc) {
                matches.push(serde_json::from_value(doc)?);
            }
        }
        Ok(matches)
    }

    /// True iff at least one document matches. Used as a pre-insert
    /// uniqueness guard; see the crate docs for the check-then-insert race.
    pub fn exists_by_filter(&self, filter: &Filter) -> StorageResult<bool> {
        for doc in self.store.scan(E::COLLECTION)? {
            if filter.matches(&doc) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Persists a new document. The entity's identifier must already be
    /// populated; nothing is assigned implicitly.
    pub fn insert(&self, entity: &E) -> StorageResult<()> {
        let id = entity.id();
        let doc = serde_json::to_value(entity)?;
        self.store.insert(E::COLLECTION, &id.to_hex(), &doc)?;
        if let Some(cache) = &self.cache {
            cache.invalidate(id);
        }
        debug!(collection = E::COLLECTION, id = %id, "inserted document");
        Ok(())
    }

    /// Applies a partial update, atomically for that id, and refreshes the
    /// update timestamp. The cache entry is invalidated before returning.
    pub fn update_fields(&self, id: DocumentId, updates: &FieldUpdates) -> StorageResult<()> {
        self.store.update_fields(E::COLLECTION, &id.to_hex(), updates)?;
        if let Some(cache) = &self.cache {
            cache.invalidate(id);
        }
        debug!(collection = E::COLLECTION, id = %id, "updated document fields");
        Ok(())
    }
}
