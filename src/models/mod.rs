mod entry;
mod state;

pub use entry::{EntryKind, FsEntry};
pub use state::{CONTINUATION_BAR, CONTINUATION_BLANK, RenderState};
