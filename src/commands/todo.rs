// Todo commands

use crate::host::Host;
use crate::storage::StorageState;

use super::common::commit_and_refresh;

/// Prompt for a todo and append it, open and freshly numbered, to the
/// active file's list.
pub fn add_todo(storage: &StorageState, host: &dyn Host) -> Result<(), String> {
    let path = host
        .active_file()
        .ok_or_else(|| "Open a file to add a todo.".to_string())?;

    let text = match host.prompt_input(
        "Add a todo for this file",
        "E.g. Add error handling mechanism",
    ) {
        Some(text) if !text.is_empty() => text,
        // dismissed or empty: abandon the add
        _ => return Ok(()),
    };

    storage.store.write().add_todo(&path, text);
    commit_and_refresh(storage, host, &path)?;
    host.show_info("Todo added!");
    Ok(())
}

/// Set the completed flag of the todo with `id` (checkbox change).
/// Unknown ids change nothing.
pub fn toggle_todo(
    storage: &StorageState,
    host: &dyn Host,
    id: u32,
    completed: bool,
) -> Result<(), String> {
    let path = host
        .active_file()
        .ok_or_else(|| "Open a file to toggle a todo.".to_string())?;

    let toggled = storage.store.write().toggle_todo(&path, id, completed);
    let Some(todo) = toggled else {
        return Ok(());
    };

    commit_and_refresh(storage, host, &path)?;
    host.show_info(&if completed {
        format!("\"{}\" todo completed!", todo.text)
    } else {
        format!("\"{}\" todo undone!", todo.text)
    });
    Ok(())
}

/// Delete the todo with `id` from the active file's list. Unknown ids
/// change nothing.
pub fn delete_todo(storage: &StorageState, host: &dyn Host, id: u32) -> Result<(), String> {
    let path = host
        .active_file()
        .ok_or_else(|| "Open a file to delete a todo.".to_string())?;

    let removed = storage.store.write().delete_todo(&path, id);
    let Some(removed) = removed else {
        return Ok(());
    };

    commit_and_refresh(storage, host, &path)?;
    host.show_info(&format!("Todo deleted: \"{}\"", removed.text));
    Ok(())
}
