//! Wire field-name constants.
//!
//! Filters and partial updates address fields by these names; they must
//! match the serde renames on the entity shapes exactly.

pub const ID: &str = "_id";
pub const STATUS: &str = "status";
pub const PHONE: &str = "phone";
pub const NAME: &str = "name";
pub const ADDRESS: &str = "address";
pub const CONTACT: &str = "contact";
pub const LEVEL: &str = "level";
pub const PASSWORD: &str = "password";
pub const CODE: &str = "code";
pub const CODE_TYPE: &str = "codeType";
pub const UNIT_ID: &str = "unitId";
pub const BIRTH: &str = "birth";
pub const GENDER: &str = "gender";
pub const ENROLL_YEAR: &str = "enrollYear";
pub const GRADE: &str = "grade";
pub const CLASS: &str = "class";
pub const OPTIONS: &str = "option";
pub const TYPE: &str = "type";
pub const CHAT: &str = "chat";
pub const TTS: &str = "tts";
pub const REPORT: &str = "report";
pub const CREATE_TIME: &str = "createTime";
pub const UPDATE_TIME: &str = "updateTime";
pub const DELETE_TIME: &str = "deleteTime";
