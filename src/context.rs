//! Build context shared by every component operation.

use std::path::{Path, PathBuf};

use crate::config::Config;

/// Paths and settings for one SDK assembly.
pub struct BuildContext<'a> {
    /// Effective configuration (root, flags, verbosity).
    pub config: &'a Config,
    /// Root of the staging tree that will become the archive root.
    pub staging: &'a Path,
}

impl<'a> BuildContext<'a> {
    pub fn new(config: &'a Config, staging: &'a Path) -> Self {
        Self { config, staging }
    }

    /// Resolve a path relative to the Fuchsia root.
    pub fn source(&self, rel: &str) -> PathBuf {
        self.config.root.join(rel)
    }

    /// Resolve a path relative to the staging root.
    pub fn dest(&self, rel: &str) -> PathBuf {
        self.staging.join(rel)
    }
}
