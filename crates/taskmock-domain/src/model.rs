//! Entity definitions for the mock backend.
//!
//! The wire shape uses camelCase keys to match what the UI client reads:
//! `{"id", "listId", "text", "completed", "touched"}` for tasks and
//! `{"id", "name", "removable"}` for lists.

use serde::{Deserialize, Serialize};

/// A task belonging to exactly one list.
///
/// `id` and `list_id` are fixed at creation. `text` has no edit operation
/// in this service. `completed` is the only field a client can change;
/// `touched` is refreshed on creation and on every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub list_id: u64,
    pub text: String,
    pub completed: bool,
    /// Last-modified timestamp in milliseconds since the Unix epoch.
    pub touched: i64,
}

impl Task {
    /// Builds a freshly created task: not completed, touched now.
    pub fn new(id: u64, list_id: u64, text: impl Into<String>, touched: i64) -> Self {
        Self {
            id,
            list_id,
            text: text.into(),
            completed: false,
            touched,
        }
    }
}

/// A list of tasks.
///
/// Lists created through this service are always removable; a
/// non-removable default list is provisioned by the UI, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: u64,
    pub name: String,
    pub removable: bool,
}

impl List {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            removable: true,
        }
    }
}
