// Per-file metadata record: the {notes, todos} pair for one file path

use serde::{Deserialize, Serialize};

use super::todo::Todo;

/// Everything attached to one file path. Created lazily on first access
/// and kept around even after both lists empty out again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileMetadata {
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub todos: Vec<Todo>,
    /// Highest todo id handed out for this file during the current
    /// session. Not persisted; after a reload ids resume from the
    /// highest id still present in `todos`.
    #[serde(skip)]
    pub(crate) next_todo_id: u32,
}

impl FileMetadata {
    /// Next todo id for this file: strictly increasing within a session,
    /// never reused even after a delete.
    pub(crate) fn next_id(&mut self) -> u32 {
        let max_existing = self.todos.iter().map(|t| t.id).max().unwrap_or(0);
        let id = self.next_todo_id.max(max_existing) + 1;
        self.next_todo_id = id;
        id
    }
}
