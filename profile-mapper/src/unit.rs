use profile_model::{Unit, fields};
use profile_storage::{DocumentStore, FieldUpdates, Filter, Mapper, StorageResult};
use profile_types::DocumentId;

/// Named queries over the `unit` collection.
pub struct UnitMapper {
    inner: Mapper<Unit>,
}

impl UnitMapper {
    pub fn new(store: DocumentStore) -> StorageResult<Self> {
        Ok(Self {
            inner: Mapper::with_cache(store)?,
        })
    }

    pub fn find_one(&self, id: DocumentId) -> StorageResult<Unit> {
        self.inner.find_one(id)
    }

    pub fn find_one_by_phone(&self, phone: &str) -> StorageResult<Unit> {
        self.inner
            .find_one_by_filter(&Filter::new().eq(fields::PHONE, phone))
    }

    pub fn exists_by_phone(&self, phone: &str) -> StorageResult<bool> {
        self.inner
            .exists_by_filter(&Filter::new().eq(fields::PHONE, phone))
    }

    pub fn insert(&self, unit: &Unit) -> StorageResult<()> {
        self.inner.insert(unit)
    }

    pub fn update_fields(&self, id: DocumentId, updates: &FieldUpdates) -> StorageResult<()> {
        self.inner.update_fields(id, updates)
    }
}
