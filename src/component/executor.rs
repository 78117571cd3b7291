//! Component executor - interprets copy modes and performs the copies.
//!
//! This is the single place where component contents are moved into the
//! staging tree. Every mutation goes through `common::files` so verbose and
//! dry-run behave the same for all modes.

use anyhow::{bail, Context, Result};
use std::ffi::OsStr;
use std::path::Path;
use walkdir::WalkDir;

use super::definitions::{DEBUG_IDS_FILE, DEBUG_OBJECT_EXT};
use super::{Component, CopyMode};
use crate::common::{copy_file_with_dirs, copy_tree_with_dirs};
use crate::context::BuildContext;

/// Copy one component into staging. Returns the number of entries copied.
///
/// The caller decides whether the component is enabled; this function
/// always performs the copy.
pub fn execute(ctx: &BuildContext<'_>, component: &Component) -> Result<usize> {
    let src = ctx.source(component.src);
    let dst = ctx.dest(component.dst);

    let copied = match component.mode {
        CopyMode::Tree => copy_tree_with_dirs(ctx.config, &src, &dst)?,
        CopyMode::File => {
            copy_file_with_dirs(ctx.config, &src, &dst)?;
            1
        }
        CopyMode::DebugObjects => copy_debug_objects(ctx, &src, &dst)?,
    };

    Ok(copied)
}

/// Whether a path names a kernel debug object.
pub fn is_debug_object(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(DEBUG_OBJECT_EXT))
}

/// Copy every `.elf` under `src` to the mirrored path under `dst`, then the
/// `ids.txt` index. Anything else in the build directory is left behind.
fn copy_debug_objects(ctx: &BuildContext<'_>, src: &Path, dst: &Path) -> Result<usize> {
    if !src.is_dir() {
        bail!("Kernel build directory not found: {}", src.display());
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        if entry.file_type().is_dir() || !is_debug_object(entry.path()) {
            continue;
        }
        let rel = entry.path().strip_prefix(src)?;
        copy_file_with_dirs(ctx.config, entry.path(), &dst.join(rel))?;
        copied += 1;
    }

    copy_file_with_dirs(ctx.config, &src.join(DEBUG_IDS_FILE), &dst.join(DEBUG_IDS_FILE))?;
    Ok(copied + 1)
}
