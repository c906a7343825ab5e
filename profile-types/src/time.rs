//! Wall-clock helpers.

use chrono::Utc;

/// Current wall-clock time as milliseconds since the Unix epoch.
///
/// Document create/update/delete timestamps use this resolution so that
/// "strictly newer" comparisons are meaningful in tests and callers.
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
