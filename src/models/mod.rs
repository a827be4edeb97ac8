// Models for the per-file annotation store

pub mod metadata;
pub mod todo;

pub use metadata::FileMetadata;
pub use todo::Todo;
