//! Filesystem actions that honour verbose and dry-run.
//!
//! Every mutation performed while assembling the SDK goes through one of
//! these functions. Each one prints what it is about to do when
//! `config.echo()` is set, does nothing else under dry-run, and otherwise
//! fails the whole run on the first error.

use anyhow::{bail, Context, Result};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use walkdir::WalkDir;

use crate::config::Config;

/// Owner write bit, kept on every staged directory.
const OWNER_WRITE: u32 = 0o200;

/// Create a directory and all of its parents.
pub fn mkdir(config: &Config, dir: &Path) -> Result<()> {
    if config.echo() {
        println!("Making directory {}", dir.display());
    }
    if config.dry_run {
        return Ok(());
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("could not create directory {}", dir.display()))
}

/// Copy a single file. The destination's parent must already exist.
pub fn copy_file(config: &Config, src: &Path, dst: &Path) -> Result<()> {
    if config.echo() {
        println!("Copying {} to {}", src.display(), dst.display());
    }
    if config.dry_run {
        return Ok(());
    }
    if !src.is_file() {
        bail!("cp failed: source file not found: {}", src.display());
    }
    fs::copy(src, dst)
        .with_context(|| format!("cp failed: {} -> {}", src.display(), dst.display()))?;
    Ok(())
}

/// Copy a directory tree to `dst`, preserving symlinks.
///
/// Behaves like `cp -r src dst` with a non-existent `dst`: the contents of
/// `src` end up directly under `dst`. Returns the number of entries copied.
pub fn copy_tree(config: &Config, src: &Path, dst: &Path) -> Result<usize> {
    if config.echo() {
        println!("Copying -r {} to {}", src.display(), dst.display());
    }
    if config.dry_run {
        return Ok(0);
    }
    if !src.exists() && !src.is_symlink() {
        bail!("cp failed: source not found: {}", src.display());
    }

    let mut count = 0;
    let mut dir_modes = Vec::new();
    for entry in WalkDir::new(src).follow_links(false).sort_by_file_name() {
        let entry = entry.with_context(|| format!("cp failed while walking {}", src.display()))?;
        let target = if entry.depth() == 0 {
            dst.to_path_buf()
        } else {
            dst.join(entry.path().strip_prefix(src)?)
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("could not create directory {}", target.display()))?;
            dir_modes.push((target, entry.metadata()?.permissions().mode()));
        } else if file_type.is_symlink() {
            let link = fs::read_link(entry.path())?;
            std::os::unix::fs::symlink(&link, &target).with_context(|| {
                format!(
                    "cp failed: symlink {} -> {}",
                    target.display(),
                    link.display()
                )
            })?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "cp failed: {} -> {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
        count += 1;
    }

    // Applied deepest-first once the tree is filled. The owner keeps write
    // access so the staging tree can always be removed.
    for (dir, mode) in dir_modes.into_iter().rev() {
        fs::set_permissions(&dir, fs::Permissions::from_mode(mode | OWNER_WRITE))
            .with_context(|| format!("could not set mode on {}", dir.display()))?;
    }

    Ok(count)
}

/// Copy a file, creating the destination's parent directory first.
pub fn copy_file_with_dirs(config: &Config, src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        mkdir(config, parent)?;
    }
    copy_file(config, src, dst)
}

/// Copy a directory tree, creating the destination's parent directory first.
pub fn copy_tree_with_dirs(config: &Config, src: &Path, dst: &Path) -> Result<usize> {
    if let Some(parent) = dst.parent() {
        mkdir(config, parent)?;
    }
    copy_tree(config, src, dst)
}
