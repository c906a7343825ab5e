use profile_model::{User, fields};
use profile_storage::{DocumentStore, FieldUpdates, Filter, Mapper, StorageResult};
use profile_types::DocumentId;

/// Named queries over the `user` collection.
///
/// The sign-in handle is `code`; within a unit the pair `(code, unitId)`
/// identifies a user, so the compound lookups exist alongside the plain
/// ones for unit-less accounts.
pub struct UserMapper {
    inner: Mapper<User>,
}

impl UserMapper {
    pub fn new(store: DocumentStore) -> StorageResult<Self> {
        Ok(Self {
            inner: Mapper::with_cache(store)?,
        })
    }

    pub fn find_one(&self, id: DocumentId) -> StorageResult<User> {
        self.inner.find_one(id)
    }

    pub fn find_one_by_code(&self, code: &str) -> StorageResult<User> {
        self.inner
            .find_one_by_filter(&Filter::new().eq(fields::CODE, code))
    }

    pub fn find_one_by_code_and_unit_id(
        &self,
        code: &str,
        unit_id: DocumentId,
    ) -> StorageResult<User> {
        self.inner
            .find_one_by_filter(&code_and_unit(code, unit_id))
    }

    pub fn exists_by_code(&self, code: &str) -> StorageResult<bool> {
        self.inner
            .exists_by_filter(&Filter::new().eq(fields::CODE, code))
    }

    pub fn exists_by_code_and_unit_id(
        &self,
        code: &str,
        unit_id: DocumentId,
    ) -> StorageResult<bool> {
        self.inner.exists_by_filter(&code_and_unit(code, unit_id))
    }

    pub fn find_all_by_unit_id(&self, unit_id: DocumentId) -> StorageResult<Vec<User>> {
        self.inner
            .find_all_by_filter(&Filter::new().eq(fields::UNIT_ID, unit_id))
    }

    pub fn insert(&self, user: &User) -> StorageResult<()> {
        self.inner.insert(user)
    }

    pub fn update_fields(&self, id: DocumentId, updates: &FieldUpdates) -> StorageResult<()> {
        self.inner.update_fields(id, updates)
    }
}

fn code_and_unit(code: &str, unit_id: DocumentId) -> Filter {
    Filter::new()
        .eq(fields::CODE, code)
        .eq(fields::UNIT_ID, unit_id)
}
