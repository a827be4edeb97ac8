// In-memory metadata store: file path -> {notes, todos}
//
// Owns all mutation logic and todo id assignment. Persistence lives in
// storage.rs; nothing here touches the filesystem.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{FileMetadata, Todo};

/// The full mapping from file path to per-file metadata. Paths are used
/// verbatim, exactly as the host reports them; no normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataStore {
    files: BTreeMap<String, FileMetadata>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record for `path`, created empty on first access. A path once
    /// touched always resolves to a record afterwards.
    pub fn get_or_create(&mut self, path: &str) -> &mut FileMetadata {
        self.files.entry(path.to_string()).or_default()
    }

    /// Read-only lookup; does not create a record.
    pub fn get(&self, path: &str) -> Option<&FileMetadata> {
        self.files.get(path)
    }

    /// Number of file paths with a record (empty records count too).
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Append `text` to the path's notes. Text validation (non-empty)
    /// happens at the input collector, not here.
    pub fn add_note(&mut self, path: &str, text: String) {
        self.get_or_create(path).notes.push(text);
    }

    /// Remove and return the note at `index`. Out-of-range indices are a
    /// silent no-op; the panel may race a stale index against a fresh
    /// list, so this must never be an error.
    pub fn delete_note(&mut self, path: &str, index: usize) -> Option<String> {
        let meta = self.get_or_create(path);
        if index < meta.notes.len() {
            Some(meta.notes.remove(index))
        } else {
            None
        }
    }

    /// Append a new open todo and return it.
    pub fn add_todo(&mut self, path: &str, text: String) -> Todo {
        let meta = self.get_or_create(path);
        let todo = Todo::new(meta.next_id(), text);
        meta.todos.push(todo.clone());
        todo
    }

    /// Set the completed flag of the todo with `id`. Unknown ids are a
    /// silent no-op.
    pub fn toggle_todo(&mut self, path: &str, id: u32, completed: bool) -> Option<Todo> {
        let meta = self.get_or_create(path);
        let todo = meta.todos.iter_mut().find(|t| t.id == id)?;
        todo.completed = completed;
        Some(todo.clone())
    }

    /// Remove and return the todo with `id`. Unknown ids are a silent
    /// no-op.
    pub fn delete_todo(&mut self, path: &str, id: u32) -> Option<Todo> {
        let meta = self.get_or_create(path);
        let index = meta.todos.iter().position(|t| t.id == id)?;
        Some(meta.todos.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_path_gets_empty_record() {
        let mut store = MetadataStore::new();
        let meta = store.get_or_create("/a.txt");
        assert!(meta.notes.is_empty());
        assert!(meta.todos.is_empty());
        // the record sticks around after first touch
        assert!(store.get("/a.txt").is_some());
    }

    #[test]
    fn notes_append_in_order_and_delete_by_index() {
        let mut store = MetadataStore::new();
        store.add_note("/a.txt", "hello".to_string());
        store.add_note("/a.txt", "world".to_string());
        assert_eq!(store.get("/a.txt").unwrap().notes, vec!["hello", "world"]);

        let removed = store.delete_note("/a.txt", 0);
        assert_eq!(removed.as_deref(), Some("hello"));
        assert_eq!(store.get("/a.txt").unwrap().notes, vec!["world"]);
    }

    #[test]
    fn delete_note_out_of_range_is_a_no_op() {
        let mut store = MetadataStore::new();
        store.add_note("/a.txt", "only".to_string());
        assert_eq!(store.delete_note("/a.txt", 5), None);
        assert_eq!(store.get("/a.txt").unwrap().notes, vec!["only"]);
    }

    #[test]
    fn todo_lifecycle() {
        let mut store = MetadataStore::new();
        let todo = store.add_todo("/a.txt", "fix bug".to_string());
        assert_eq!(todo.id, 1);
        assert!(!todo.completed);
        assert!(!todo.created_at.is_empty());

        let toggled = store.toggle_todo("/a.txt", 1, true).unwrap();
        assert!(toggled.completed);
        assert!(store.get("/a.txt").unwrap().todos[0].completed);

        let removed = store.delete_todo("/a.txt", 1).unwrap();
        assert_eq!(removed.text, "fix bug");
        assert!(store.get("/a.txt").unwrap().todos.is_empty());
    }

    #[test]
    fn todo_ids_are_never_reused_within_a_session() {
        let mut store = MetadataStore::new();
        assert_eq!(store.add_todo("/a.txt", "A".to_string()).id, 1);
        assert_eq!(store.add_todo("/a.txt", "B".to_string()).id, 2);
        store.delete_todo("/a.txt", 1);
        assert_eq!(store.add_todo("/a.txt", "C".to_string()).id, 3);

        // even when the list empties out completely
        store.delete_todo("/a.txt", 2);
        store.delete_todo("/a.txt", 3);
        assert_eq!(store.add_todo("/a.txt", "D".to_string()).id, 4);
    }

    #[test]
    fn sole_todo_deleted_then_readded_gets_a_fresh_id() {
        let mut store = MetadataStore::new();
        assert_eq!(store.add_todo("/b.txt", "A".to_string()).id, 1);
        store.delete_todo("/b.txt", 1);
        assert_eq!(store.add_todo("/b.txt", "B".to_string()).id, 2);
    }

    #[test]
    fn todo_ids_are_scoped_per_file() {
        let mut store = MetadataStore::new();
        assert_eq!(store.add_todo("/a.txt", "A".to_string()).id, 1);
        assert_eq!(store.add_todo("/b.txt", "B".to_string()).id, 1);
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let mut store = MetadataStore::new();
        store.add_todo("/a.txt", "A".to_string());
        assert_eq!(store.toggle_todo("/a.txt", 99, true), None);
        assert!(!store.get("/a.txt").unwrap().todos[0].completed);
    }

    #[test]
    fn delete_unknown_todo_is_a_no_op() {
        let mut store = MetadataStore::new();
        store.add_todo("/a.txt", "A".to_string());
        assert_eq!(store.delete_todo("/a.txt", 99), None);
        assert_eq!(store.get("/a.txt").unwrap().todos.len(), 1);
    }

    #[test]
    fn ids_resume_from_max_existing_after_reload() {
        // A freshly deserialized store has no in-session high-water mark;
        // the next id comes from the persisted todos alone.
        let json = r#"{"/a.txt":{"notes":[],"todos":[{"id":4,"text":"old","completed":true,"createdAt":"2026-01-01T00:00:00.000Z"}]}}"#;
        let mut store: MetadataStore = serde_json::from_str(json).unwrap();
        assert_eq!(store.add_todo("/a.txt", "new".to_string()).id, 5);
    }
}
