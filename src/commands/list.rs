//! List command - shows what an SDK tarball contains.

use anyhow::Result;

use crate::archive::{self, EntryKind};
use crate::config::Config;

/// Print every entry of the tarball at `config.output`, one per line.
pub fn cmd_list(config: &Config) -> Result<()> {
    let entries = archive::list_tarball(&config.output)?;

    for entry in &entries {
        match entry.kind {
            EntryKind::Directory => println!("{}/", entry.path.display()),
            _ if config.verbose => println!("{:>12}  {}", entry.size, entry.path.display()),
            _ => println!("{}", entry.path.display()),
        }
    }

    Ok(())
}
