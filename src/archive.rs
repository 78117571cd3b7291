//! Tarball operations for the SDK.
//!
//! Writes a gzip-compressed tar of the staging directory's contents and
//! lists existing tarballs. Entries are added in sorted order with
//! normalized headers, so the same staging tree always yields the same bytes.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tar::{Archive, Builder, EntryType, HeaderMode};
use walkdir::WalkDir;

use crate::config::Config;

/// One entry read back from an SDK tarball.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl From<EntryType> for EntryKind {
    fn from(t: EntryType) -> Self {
        match t {
            EntryType::Regular | EntryType::Continuous => EntryKind::File,
            EntryType::Directory => EntryKind::Directory,
            EntryType::Symlink => EntryKind::Symlink,
            _ => EntryKind::Other,
        }
    }
}

/// Archive the contents of `staging` into `output`.
///
/// Paths inside the archive are relative to `staging`, so the archive root
/// is the SDK root. Any existing file at `output` is replaced. Returns the
/// size of the written archive, or 0 under dry-run.
pub fn create_tarball(config: &Config, staging: &Path, output: &Path) -> Result<u64> {
    if config.echo() {
        println!("Archiving {} to {}", staging.display(), output.display());
    }
    if config.dry_run {
        return Ok(0);
    }

    let file = File::create(output)
        .with_context(|| format!("tar failed: cannot create {}", output.display()))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = Builder::new(encoder);
    builder.mode(HeaderMode::Deterministic);
    builder.follow_symlinks(false);

    for entry in WalkDir::new(staging).follow_links(false).sort_by_file_name() {
        let entry = entry.with_context(|| format!("tar failed while walking {}", staging.display()))?;
        if entry.depth() == 0 {
            continue;
        }
        let name = entry.path().strip_prefix(staging)?;
        builder
            .append_path_with_name(entry.path(), name)
            .with_context(|| format!("tar failed on {}", entry.path().display()))?;
    }

    let encoder = builder
        .into_inner()
        .with_context(|| format!("tar failed: cannot finish {}", output.display()))?;
    encoder
        .finish()
        .with_context(|| format!("tar failed: cannot flush {}", output.display()))?;

    let size = fs::metadata(output)?.len();
    if config.verbose {
        let size_mb = size as f64 / 1024.0 / 1024.0;
        println!("  Tarball size: {:.2} MB", size_mb);
    }

    Ok(size)
}

/// Read the entry list of an SDK tarball.
pub fn list_tarball(path: &Path) -> Result<Vec<ArchivedEntry>> {
    if !path.exists() {
        anyhow::bail!(
            "Tarball not found: {}\nRun makesdk without --list first to build it.",
            path.display()
        );
    }

    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut archive = Archive::new(GzDecoder::new(file));

    let mut entries = Vec::new();
    for entry in archive
        .entries()
        .with_context(|| format!("Failed to read {}", path.display()))?
    {
        let entry = entry.with_context(|| format!("Corrupt entry in {}", path.display()))?;
        let header = entry.header();
        entries.push(ArchivedEntry {
            path: entry.path()?.into_owned(),
            kind: header.entry_type().into(),
            size: header.size()?,
        });
    }

    Ok(entries)
}
