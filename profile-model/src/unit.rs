use crate::Document;
use profile_types::{DocumentId, Status, now_millis};
use serde::{Deserialize, Serialize};

/// An organization account (a school, clinic, or company).
///
/// Units own users via the users' `unitId` foreign identifier and own at
/// most one pipeline [`Config`](crate::Config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub phone: String,
    /// One-way hash of the sign-in password; hashing happens upstream.
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub level: i32,
    pub status: Status,
    #[serde(rename = "createTime")]
    pub create_time: i64,
    #[serde(rename = "updateTime")]
    pub update_time: i64,
    /// Set when status transitions to Deleted; the record itself stays.
    #[serde(rename = "deleteTime", default, skip_serializing_if = "Option::is_none")]
    pub delete_time: Option<i64>,
}

impl Unit {
    /// Creates an active unit with a fresh identifier and current
    /// timestamps. Optional fields start empty.
    #[must_use]
    pub fn new(
        phone: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let now = now_millis();
        Self {
            id: DocumentId::generate(),
            phone: phone.into(),
            password: password.into(),
            name: name.into(),
            address: String::new(),
            contact: String::new(),
            level: 0,
            status: Status::Active,
            create_time: now,
            update_time: now,
            delete_time: None,
        }
    }
}

impl Document for Unit {
    const COLLECTION: &'static str = "unit";

    fn id(&self) -> DocumentId {
        self.id
    }
}
