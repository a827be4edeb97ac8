// Host seam: everything the surrounding editor shell provides
//
// The real sidebar panel, input boxes and command registration live in the
// host editor and are wired up outside this crate; commands only ever see
// this trait.

use crate::models::FileMetadata;

pub trait Host {
    /// Path of the file the user is currently looking at, if any. Every
    /// mutating command requires one.
    fn active_file(&self) -> Option<String>;

    /// Ask the user for one line of text. `None` means the input box was
    /// dismissed and the pending operation must be abandoned.
    fn prompt_input(&self, prompt: &str, placeholder: &str) -> Option<String>;

    /// Short confirmation message after a successful operation.
    fn show_info(&self, message: &str);

    /// Push the fresh record for `path` to the sidebar panel. `file_name`
    /// is the basename the panel shows as its header.
    fn update_view(&self, path: &str, file_name: &str, metadata: &FileMetadata);
}
