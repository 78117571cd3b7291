//! Build command - assembles the SDK and archives it.

use anyhow::{bail, Result};
use std::path::PathBuf;

use crate::archive;
use crate::common::Staging;
use crate::component;
use crate::config::Config;
use crate::context::BuildContext;

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    /// Path of the archive (not written under dry-run).
    pub output: PathBuf,
    /// Archive size in bytes, 0 under dry-run.
    pub size_bytes: u64,
    /// Components that were copied, in order.
    pub components: Vec<&'static str>,
}

/// Execute the build: stage every selected component, then archive.
///
/// The staging directory is removed before returning, on success and on
/// error alike.
pub fn cmd_build(config: &Config) -> Result<BuildReport> {
    if !config.has_root() {
        bail!("Fuchsia root not found at \"{}\"", config.root.display());
    }

    let staging = Staging::create(config)?;
    let ctx = BuildContext::new(config, staging.path());

    let components = component::build_sdk(&ctx)?;
    let size_bytes = archive::create_tarball(config, staging.path(), &config.output)?;

    staging.cleanup()?;

    if config.verbose && !config.dry_run {
        println!("SDK tarball created: {}", config.output.display());
    }

    Ok(BuildReport {
        output: config.output.clone(),
        size_bytes,
        components,
    })
}
