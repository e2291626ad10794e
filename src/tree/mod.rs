pub mod ignore;
pub mod render;
pub mod walk;

pub use ignore::IgnoreSet;
pub use render::{Palette, RenderOptions, TreeRenderer};
pub use walk::{SortMode, WalkOptions, list_children};
