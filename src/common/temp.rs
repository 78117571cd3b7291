//! The staging directory that collects component outputs before archiving.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::Config;

/// Prefix for the temporary staging directory.
pub const STAGING_PREFIX: &str = "fuchsia-sdk";

/// Staging root for one run.
///
/// A real run owns a [`TempDir`] that is removed when this value is dropped,
/// whether the build succeeded or bailed out. A dry run only carries the
/// path it would have used so the printed plan reads naturally.
#[derive(Debug)]
pub enum Staging {
    Temp(TempDir),
    Planned(PathBuf),
}

impl Staging {
    /// Create the staging directory, or plan one under dry-run.
    pub fn create(config: &Config) -> Result<Self> {
        if config.dry_run {
            return Ok(Staging::Planned(std::env::temp_dir().join(STAGING_PREFIX)));
        }
        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir()
            .context("Could not create temporary directory")?;
        Ok(Staging::Temp(dir))
    }

    pub fn path(&self) -> &Path {
        match self {
            Staging::Temp(dir) => dir.path(),
            Staging::Planned(path) => path,
        }
    }

    /// Remove the staging tree now, reporting any failure.
    pub fn cleanup(self) -> Result<()> {
        match self {
            Staging::Temp(dir) => {
                let path = dir.path().to_path_buf();
                dir.close()
                    .with_context(|| format!("Failed to remove {}", path.display()))
            }
            Staging::Planned(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_staging_is_removed_on_drop() {
        let staging = Staging::create(&Config::new("/unused")).unwrap();
        let path = staging.path().to_path_buf();
        assert!(path.is_dir());
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(STAGING_PREFIX));

        drop(staging);
        assert!(!path.exists());
    }

    #[test]
    fn test_cleanup_removes_populated_tree() {
        let staging = Staging::create(&Config::new("/unused")).unwrap();
        let path = staging.path().to_path_buf();
        std::fs::create_dir_all(path.join("kernel/debug")).unwrap();
        std::fs::write(path.join("kernel/debug/ids.txt"), "ids").unwrap();

        staging.cleanup().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_dry_run_staging_is_not_created() {
        let cfg = Config::new("/unused").with_dry_run(true);
        let staging = Staging::create(&cfg).unwrap();
        assert!(matches!(staging, Staging::Planned(_)));
        assert!(staging.path().ends_with(STAGING_PREFIX));
    }
}
