// Todo model - an identified, completable checklist item scoped to one file

use serde::{Deserialize, Serialize};

/// A single checklist item attached to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub completed: bool,
    // camelCase on the wire, matching the persisted JSON shape
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Todo {
    pub fn new(id: u32, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: now_iso(),
        }
    }
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// "2026-08-29T10:15:30.123Z".
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
