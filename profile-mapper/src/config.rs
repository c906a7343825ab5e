use profile_model::{Config, fields};
use profile_storage::{DocumentStore, FieldUpdates, Filter, Mapper, StorageResult};
use profile_types::DocumentId;

/// Named queries over the `config` collection.
pub struct ConfigMapper {
    inner: Mapper<Config>,
}

impl ConfigMapper {
    pub fn new(store: DocumentStore) -> StorageResult<Self> {
        Ok(Self {
            inner: Mapper::with_cache(store)?,
        })
    }

    pub fn find_one(&self, id: DocumentId) -> StorageResult<Config> {
        self.inner.find_one(id)
    }

    /// The unit's pipeline config. At most one exists per unit in
    /// practice; when several do, the oldest wins.
    pub fn find_one_by_unit_id(&self, unit_id: DocumentId) -> StorageResult<Config> {
        self.inner
            .find_one_by_filter(&Filter::new().eq(fields::UNIT_ID, unit_id))
    }

    pub fn insert(&self, config: &Config) -> StorageResult<()> {
        self.inner.insert(config)
    }

    pub fn update_fields(&self, id: DocumentId, updates: &FieldUpdates) -> StorageResult<()> {
        self.inner.update_fields(id, updates)
    }
}
