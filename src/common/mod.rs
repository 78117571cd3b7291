//! Shared utilities across makesdk modules.

pub mod files;
pub mod temp;

pub use files::{copy_file, copy_file_with_dirs, copy_tree, copy_tree_with_dirs, mkdir};
pub use temp::Staging;
