use crate::Document;
use profile_codec::{AttrValue, CodecResult, Envelope, decode_map, encode_map};
use profile_types::{CodeType, DocumentId, Gender, Status, now_millis};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An individual account.
///
/// `code` is the sign-in handle, a phone number or a student id,
/// disambiguated by `code_type`. The `options` bag holds open-ended typed
/// attributes; each entry is stored as a `{kind, payload}` envelope so the
/// native kinds survive the storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(rename = "codeType")]
    pub code_type: CodeType,
    pub code: String,
    /// One-way hash of the sign-in password; hashing happens upstream.
    pub password: String,
    #[serde(rename = "unitId", default, skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<DocumentId>,
    pub name: String,
    /// Birth date as Unix milliseconds; 0 when unknown.
    #[serde(default)]
    pub birth: i64,
    pub gender: Gender,
    pub status: Status,
    #[serde(rename = "enrollYear", default)]
    pub enroll_year: i32,
    #[serde(default)]
    pub grade: i32,
    #[serde(default)]
    pub class: i32,
    /// Encoded attribute bag. Use [`User::set_options`] and
    /// [`User::decode_options`] rather than touching the envelopes.
    #[serde(rename = "option", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, Envelope>,
    #[serde(rename = "createTime")]
    pub create_time: i64,
    #[serde(rename = "updateTime")]
    pub update_time: i64,
    #[serde(rename = "deleteTime", default, skip_serializing_if = "Option::is_none")]
    pub delete_time: Option<i64>,
}

impl User {
    /// Creates an active user with a fresh identifier and current
    /// timestamps. Profile fields start at their zero values.
    #[must_use]
    pub fn new(
        code_type: CodeType,
        code: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let now = now_millis();
        Self {
            id: DocumentId::generate(),
            code_type,
            code: code.into(),
            password: password.into(),
            unit_id: None,
            name: name.into(),
            birth: 0,
            gender: Gender::Unknown,
            status: Status::Active,
            enroll_year: 0,
            grade: 0,
            class: 0,
            options: BTreeMap::new(),
            create_time: now,
            update_time: now,
            delete_time: None,
        }
    }

    /// Replaces the attribute bag with the encoded form of `bag`.
    pub fn set_options(&mut self, bag: &BTreeMap<String, AttrValue>) {
        self.options = encode_map(bag);
    }

    /// Decodes the stored attribute bag back to native values.
    ///
    /// Fail-fast: a corrupt envelope rejects the whole bag. An empty bag
    /// decodes to an empty map.
    pub fn decode_options(&self) -> CodecResult<BTreeMap<String, AttrValue>> {
        decode_map(&self.options)
    }
}

impl Document for User {
    const COLLECTION: &'static str = "user";

    fn id(&self) -> DocumentId {
        self.id
    }
}
