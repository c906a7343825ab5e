//! The SQLite document store.

use crate::{FieldUpdates, StorageError, StorageResult};
use profile_model::fields;
use profile_types::now_millis;
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// A handle to the backing SQLite database.
///
/// One table per collection, each row a `(id, body)` pair where `body` is
/// the document's JSON text. The handle is cheap to clone; every clone
/// shares the same connection, and the connection mutex serializes
/// single-document writes.
#[derive(Clone)]
pub struct DocumentStore {
    conn: Arc<Mutex<Connection>>,
}

impl DocumentStore {
    /// Opens (creating if needed) a store at the given path.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;
        tracing::info!(path = %path.display(), "opened document store");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Opens an in-memory store, mainly for tests.
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("connection mutex poisoned")
    }

    /// Creates the collection's table if it does not exist yet.
    pub(crate) fn ensure_collection(&self, collection: &str) -> StorageResult<()> {
        self.lock().execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS \"{collection}\" (\
                 id   TEXT PRIMARY KEY,\
                 body TEXT NOT NULL\
             ) WITHOUT ROWID;"
        ))?;
        Ok(())
    }

    /// Opt-in storage-level uniqueness over one or more document fields.
    ///
    /// Without an index here, check-then-insert remains a documented race:
    /// two concurrent callers can both observe "does not exist" and both
    /// insert. With it, the second write fails with
    /// [`StorageError::DuplicateKey`].
    pub fn ensure_unique_index(&self, collection: &str, index_fields: &[&str]) -> StorageResult<()> {
        if index_fields.is_empty() {
            return Err(StorageError::InvalidData(
                "unique index needs at least one field".to_string(),
            ));
        }
        let name = format!("{collection}_{}_unique", index_fields.join("_"));
        let exprs = index_fields
            .iter()
            .map(|field| format!("json_extract(body, '$.{field}')"))
            .collect::<Vec<_>>()
            .join(", ");
        self.lock().execute_batch(&format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS \"{name}\" ON \"{collection}\" ({exprs});"
        ))?;
        Ok(())
    }

    /// Point lookup by id. `None` when the id is absent.
    pub(crate) fn get(&self, collection: &str, id: &str) -> StorageResult<Option<Value>> {
        let body: Option<String> = self
            .lock()
            .query_row(
                &format!("SELECT body FROM \"{collection}\" WHERE id = ?1"),
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    /// All documents of a collection, in id (creation) order.
    pub(crate) fn scan(&self, collection: &str) -> StorageResult<Vec<Value>> {
        let conn = self.lock();
        let mut stmt = conn.prepare(&format!("SELECT body FROM \"{collection}\" ORDER BY id"))?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut docs = Vec::new();
        for body in rows {
            docs.push(serde_json::from_str(&body?)?);
        }
        Ok(docs)
    }

    /// Inserts a new document. The id must not already exist; a primary-key
    /// or unique-index violation surfaces as `DuplicateKey`.
    pub(crate) fn insert(&self, collection: &str, id: &str, body: &Value) -> StorageResult<()> {
        let result = self.lock().execute(
            &format!("INSERT INTO \"{collection}\" (id, body) VALUES (?1, ?2)"),
            params![id, body.to_string()],
        );
        match result {
            Ok(_) => Ok(()),
            Err(err) if is_constraint_violation(&err) => Err(StorageError::DuplicateKey(format!(
                "{collection}:{id}"
            ))),
            Err(err) => Err(err.into()),
        }
    }

    /// Applies a set-only partial update to one document.
    ///
    /// Read-modify-write under a single connection lock, so the update is
    /// all-or-nothing for that id. The update timestamp is bumped to
    /// `max(now, previous + 1)`, strictly greater after every mutation
    /// even within one clock millisecond.
    pub(crate) fn update_fields(
        &self,
        collection: &str,
        id: &str,
        updates: &FieldUpdates,
    ) -> StorageResult<()> {
        if updates.contains(fields::ID) {
            return Err(StorageError::InvalidData(
                "the identifier field cannot be updated".to_string(),
            ));
        }

        let conn = self.lock();
        let body: Option<String> = conn
            .query_row(
                &format!("SELECT body FROM \"{collection}\" WHERE id = ?1"),
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        let Some(body) = body else {
            return Err(StorageError::NotFound(format!("{collection}:{id}")));
        };

        let mut doc: Value = serde_json::from_str(&body)?;
        let Some(obj) = doc.as_object_mut() else {
            return Err(StorageError::InvalidData(format!(
                "document {collection}:{id} is not an object"
            )));
        };
        for (field, value) in updates.entries() {
            obj.insert(field.clone(), value.clone());
        }
        let previous = obj.get(fields::UPDATE_TIME).and_then(Value::as_i64).unwrap_or(0);
        obj.insert(
            fields::UPDATE_TIME.to_string(),
            Value::from(now_millis().max(previous + 1)),
        );

        let result = conn.execute(
            &format!("UPDATE \"{collection}\" SET body = ?2 WHERE id = ?1"),
            params![id, doc.to_string()],
        );
        match result {
            Ok(_) => Ok(()),
            Err(err) if is_constraint_violation(&err) => Err(StorageError::DuplicateKey(format!(
                "{collection}:{id}"
            ))),
            Err(err) => Err(err.into()),
        }
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
