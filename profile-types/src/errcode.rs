//! Application error catalog.
//!
//! A static table mapping every user-facing error code to its message
//! template, populated by one explicit list instead of decentralized
//! registration calls. Templates substitute `{key}` placeholders via
//! [`AppCode::render`].
//!
//! Code ranges: 1000+ common, 3000+ user, 4000+ config.

/// A user-facing error code with a message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppCode {
    Unauthorized,
    Unimplemented,
    InvalidParams,
    MissingParams,
    MissingEntity,
    NotFound,
    WrongAccountOrPassword,
    UserNotFound,
    Internal,
    PhoneAlreadyExists,
    StudentIdAlreadyExists,
    NotAdmin,
}

/// The complete catalog. Adding a code means adding one row here.
const CATALOG: &[(AppCode, u32, &str)] = &[
    (AppCode::Unauthorized, 1000, "not signed in"),
    (AppCode::Unimplemented, 1001, "not implemented yet"),
    (AppCode::InvalidParams, 1002, "invalid {field}"),
    (AppCode::MissingParams, 1003, "missing {field}"),
    (AppCode::MissingEntity, 1004, "{entity} must not be empty"),
    (AppCode::NotFound, 1005, "{field} does not exist"),
    (
        AppCode::WrongAccountOrPassword,
        1006,
        "wrong account or password",
    ),
    (AppCode::UserNotFound, 1007, "user is not registered"),
    (AppCode::Internal, 1008, "internal error"),
    (
        AppCode::PhoneAlreadyExists,
        1009,
        "phone number is already registered",
    ),
    (
        AppCode::StudentIdAlreadyExists,
        3000,
        "student id is already registered",
    ),
    (AppCode::NotAdmin, 4000, "administrator permission required"),
];

impl AppCode {
    fn row(self) -> &'static (AppCode, u32, &'static str) {
        // The catalog is total over the enum; a missing row is a programming
        // error caught by the catalog_is_total test.
        CATALOG
            .iter()
            .find(|(code, _, _)| *code == self)
            .expect("error code missing from catalog")
    }

    /// The numeric code crossing the RPC boundary.
    #[must_use]
    pub fn code(self) -> u32 {
        self.row().1
    }

    /// The raw message template, with `{key}` placeholders intact.
    #[must_use]
    pub fn template(self) -> &'static str {
        self.row().2
    }

    /// Renders the message template, substituting `{key}` for each pair.
    /// Placeholders without a matching pair are left as-is.
    #[must_use]
    pub fn render(self, pairs: &[(&str, &str)]) -> String {
        let mut msg = self.template().to_string();
        for (key, value) in pairs {
            msg = msg.replace(&format!("{{{key}}}"), value);
        }
        msg
    }
}
