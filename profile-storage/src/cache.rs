//! Read-through cache for point lookups.

use profile_types::DocumentId;
use std::collections::HashMap;
use std::sync::RwLock;

/// An in-process cache of decoded entities keyed by id.
///
/// Mutation discipline: every successful write-path operation on a
/// document invalidates its entry before the write returns, bounding the
/// staleness window for the writer's own subsequent reads to zero.
#[derive(Debug)]
pub struct DocumentCache<E> {
    entries: RwLock<HashMap<DocumentId, E>>,
}

impl<E: Clone> DocumentCache<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, id: DocumentId) -> Option<E> {
        self.entries
            .read()
            .expect("cache lock poisoned")
            .get(&id)
            .cloned()
    }

    pub fn put(&self, id: DocumentId, entity: E) {
        self.entries
            .write()
            .expect("cache lock poisoned")
            .insert(id, entity);
    }

    pub fn invalidate(&self, id: DocumentId) {
        self.entries
            .write()
            .expect("cache lock poisoned")
            .remove(&id);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().expect("cache lock poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Clone> Default for DocumentCache<E> {
    fn default() -> Self {
        Self::new()
    }
}
