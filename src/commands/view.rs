// View refresh - re-sync the panel with the active file

use crate::host::Host;
use crate::storage::StorageState;

use super::common::file_name;

/// Push the active file's record to the panel. Runs on explicit refresh
/// and on host events (active file changed, file saved). Without an
/// active file this is a quiet no-op.
///
/// First touch of a path creates its empty record in memory; that alone
/// is not flushed, the record becomes durable with the first real
/// mutation.
pub fn refresh_view(storage: &StorageState, host: &dyn Host) {
    let Some(path) = host.active_file() else {
        return;
    };

    let meta = storage.store.write().get_or_create(&path).clone();
    host.update_view(&path, &file_name(&path), &meta);
}
