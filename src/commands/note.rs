// Note commands

use crate::host::Host;
use crate::storage::StorageState;

use super::common::commit_and_refresh;

/// Prompt for a note and append it to the active file's list.
pub fn add_note(storage: &StorageState, host: &dyn Host) -> Result<(), String> {
    let path = host
        .active_file()
        .ok_or_else(|| "Open a file to add a note.".to_string())?;

    let note = match host.prompt_input(
        "Add a note for this file",
        "E.g. This file manages user authentication",
    ) {
        Some(text) if !text.is_empty() => text,
        // dismissed or empty: abandon the add
        _ => return Ok(()),
    };

    storage.store.write().add_note(&path, note);
    commit_and_refresh(storage, host, &path)?;
    host.show_info("Note added!");
    Ok(())
}

/// Delete the note at `index` from the active file's list. A stale index
/// is ignored without touching anything.
pub fn delete_note(storage: &StorageState, host: &dyn Host, index: usize) -> Result<(), String> {
    let path = host
        .active_file()
        .ok_or_else(|| "Open a file to delete a note.".to_string())?;

    let removed = storage.store.write().delete_note(&path, index);
    let Some(removed) = removed else {
        return Ok(());
    };

    commit_and_refresh(storage, host, &path)?;
    host.show_info(&format!("Note deleted: \"{}\"", removed));
    Ok(())
}
