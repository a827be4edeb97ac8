// Command handlers - the operations the host shell invokes

pub mod common;
pub mod note;
pub mod todo;
pub mod view;
