// File Assistant - per-file notes and todos for the editor sidebar
//
// The store maps file paths to {notes, todos} records and persists the
// whole mapping as one JSON document after every mutation. The host
// editor's panel and command registration stay outside this crate, behind
// the Host trait.

pub mod commands;
pub mod host;
pub mod models;
pub mod storage;
pub mod store;

pub use host::Host;
pub use models::{FileMetadata, Todo};
pub use storage::{Storage, StorageState, init_storage};
pub use store::MetadataStore;
