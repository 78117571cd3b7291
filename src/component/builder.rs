//! Component builder - copies every selected component into staging.

use anyhow::{Context, Result};

use super::definitions::COMPONENTS;
use super::executor;
use crate::context::BuildContext;
use crate::timing::Timer;

/// Copy all enabled components into the staging tree, in table order.
///
/// Disabled components are skipped before their source is touched.
/// Returns the names of the components that were copied.
pub fn build_sdk(ctx: &BuildContext<'_>) -> Result<Vec<&'static str>> {
    let mut included = Vec::new();

    for component in COMPONENTS {
        if !component.enabled(&ctx.config.selection) {
            continue;
        }

        if ctx.config.verbose {
            println!("Adding {}...", component.name);
        }
        let timer = Timer::start(component.name);
        let copied = executor::execute(ctx, component)
            .with_context(|| format!("in component '{}'", component.name))?;
        if ctx.config.verbose {
            println!("  {} entries copied", copied);
            timer.finish();
        }

        included.push(component.name);
    }

    Ok(included)
}
