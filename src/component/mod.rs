//! Declarative component table for assembling the SDK.
//!
//! Components are static data describing WHAT goes into the SDK: where it
//! lives in the Fuchsia tree, where it lands in the SDK, and how it is
//! copied. The executor interprets them.
//!
//! ```text
//! Component Definition (DATA)          Executor (LOGIC)
//! ───────────────────────────          ────────────────
//! SYSROOT = Component {                if enabled(c, selection) {
//!   src: "out/sysroot",                  match c.mode { ... }
//!   dst: "sysroot",                    }
//!   mode: CopyMode::Tree,
//! }
//! ```

pub mod builder;
pub mod definitions;
pub mod executor;

pub use builder::build_sdk;
pub use definitions::COMPONENTS;

use crate::config::Selection;

/// Identifies which selection flag controls a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Toolchain,
    ToolchainLib,
    Sysroot,
    KernelImg,
    KernelDbg,
    Qemu,
    Tools,
}

impl Flag {
    /// Read this flag from a selection.
    pub fn get(self, selection: &Selection) -> bool {
        match self {
            Flag::Toolchain => selection.toolchain,
            Flag::ToolchainLib => selection.toolchain_lib,
            Flag::Sysroot => selection.sysroot,
            Flag::KernelImg => selection.kernel_img,
            Flag::KernelDbg => selection.kernel_dbg,
            Flag::Qemu => selection.qemu,
            Flag::Tools => selection.tools,
        }
    }
}

/// How a component's source is copied into staging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMode {
    /// Recursive copy of a directory.
    Tree,
    /// Single file.
    File,
    /// Only `.elf` files (mirrored paths) plus the `ids.txt` index.
    DebugObjects,
}

/// One independently toggleable unit of SDK content.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    /// Human-readable name for logging; matches the CLI flag.
    pub name: &'static str,
    pub flag: Flag,
    /// Source path relative to the Fuchsia root.
    pub src: &'static str,
    /// Destination path relative to the SDK root.
    pub dst: &'static str,
    pub mode: CopyMode,
}

impl Component {
    /// Whether the selection includes this component.
    pub fn enabled(&self, selection: &Selection) -> bool {
        self.flag.get(selection)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper functions for readable component definitions
// ─────────────────────────────────────────────────────────────────────────────

/// Copy a directory tree.
pub const fn tree(
    name: &'static str,
    flag: Flag,
    src: &'static str,
    dst: &'static str,
) -> Component {
    Component {
        name,
        flag,
        src,
        dst,
        mode: CopyMode::Tree,
    }
}

/// Copy a single file.
pub const fn file(
    name: &'static str,
    flag: Flag,
    src: &'static str,
    dst: &'static str,
) -> Component {
    Component {
        name,
        flag,
        src,
        dst,
        mode: CopyMode::File,
    }
}

/// Copy debug objects (`.elf`) and the `ids.txt` index.
pub const fn debug_objects(
    name: &'static str,
    flag: Flag,
    src: &'static str,
    dst: &'static str,
) -> Component {
    Component {
        name,
        flag,
        src,
        dst,
        mode: CopyMode::DebugObjects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_reads_matching_field() {
        let mut sel = Selection::none();
        assert!(!Flag::Qemu.get(&sel));
        sel.qemu = true;
        assert!(Flag::Qemu.get(&sel));
        assert!(!Flag::Tools.get(&sel));
    }

    #[test]
    fn test_helpers_set_mode() {
        assert_eq!(tree("a", Flag::Tools, "s", "d").mode, CopyMode::Tree);
        assert_eq!(file("a", Flag::Tools, "s", "d").mode, CopyMode::File);
        assert_eq!(
            debug_objects("a", Flag::Tools, "s", "d").mode,
            CopyMode::DebugObjects
        );
    }
}
