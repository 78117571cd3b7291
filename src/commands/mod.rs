//! CLI command handlers.
//!
//! - `build` - Assemble the SDK tarball (default)
//! - `list` - List the contents of an existing SDK tarball

pub mod build;
pub mod list;

pub use build::{cmd_build, BuildReport};
pub use list::cmd_list;
