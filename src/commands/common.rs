// Common helpers for command handlers

use std::path::Path;

use crate::host::Host;
use crate::storage::StorageState;

/// Basename the panel shows as its header.
pub fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

/// Flush the store, then push the fresh record for `path` to the panel.
/// A failed flush keeps the mutation in memory and surfaces the error.
pub(crate) fn commit_and_refresh(
    storage: &StorageState,
    host: &dyn Host,
    path: &str,
) -> Result<(), String> {
    storage.flush()?;

    let store = storage.store.read();
    if let Some(meta) = store.get(path) {
        host.update_view(path, &file_name(path), meta);
    }
    Ok(())
}
