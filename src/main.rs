//! makesdk - Fuchsia SDK packager.
//!
//! Copies the toolchain, sysroot, kernel image and debug objects, QEMU and
//! host tools out of a Fuchsia build tree into a staging directory, then
//! archives it as a gzip tarball.

use anyhow::{bail, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

use makesdk::commands;
use makesdk::config::{self, Config, Selection};

#[derive(Parser)]
#[command(name = "makesdk")]
#[command(
    about = "Creates a Fuchsia SDK containing the specified features and places it into a tarball."
)]
#[command(override_usage = "makesdk [FLAGS] /path/to/fuchsia/root")]
struct Cli {
    /// Path to the Fuchsia root [env: FUCHSIA_ROOT]
    #[arg(value_name = "FUCHSIA_ROOT")]
    root: Option<PathBuf>,

    /// Output name [default: fuchsia-sdk.tgz] [env: FUCHSIA_SDK_OUTPUT]
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Include toolchain
    #[arg(long, value_name = "BOOL", default_value_t = false, num_args = 0..=1,
          require_equals = true, default_missing_value = "true",
          value_parser = BoolishValueParser::new(), action = ArgAction::Set)]
    toolchain: bool,

    /// Include toolchain libraries in SDK. Typically used when --toolchain is false
    #[arg(long, value_name = "BOOL", default_value_t = true, num_args = 0..=1,
          require_equals = true, default_missing_value = "true",
          value_parser = BoolishValueParser::new(), action = ArgAction::Set)]
    toolchain_lib: bool,

    /// Include sysroot
    #[arg(long, value_name = "BOOL", default_value_t = true, num_args = 0..=1,
          require_equals = true, default_missing_value = "true",
          value_parser = BoolishValueParser::new(), action = ArgAction::Set)]
    sysroot: bool,

    /// Include kernel image
    #[arg(long, value_name = "BOOL", default_value_t = true, num_args = 0..=1,
          require_equals = true, default_missing_value = "true",
          value_parser = BoolishValueParser::new(), action = ArgAction::Set)]
    kernel_img: bool,

    /// Include kernel objects with debug symbols
    #[arg(long, value_name = "BOOL", default_value_t = true, num_args = 0..=1,
          require_equals = true, default_missing_value = "true",
          value_parser = BoolishValueParser::new(), action = ArgAction::Set)]
    kernel_dbg: bool,

    /// Include QEMU binary
    #[arg(long, value_name = "BOOL", default_value_t = true, num_args = 0..=1,
          require_equals = true, default_missing_value = "true",
          value_parser = BoolishValueParser::new(), action = ArgAction::Set)]
    qemu: bool,

    /// Include additional tools
    #[arg(long, value_name = "BOOL", default_value_t = true, num_args = 0..=1,
          require_equals = true, default_missing_value = "true",
          value_parser = BoolishValueParser::new(), action = ArgAction::Set)]
    tools: bool,

    /// Verbose output
    #[arg(short = 'v')]
    verbose: bool,

    /// Dry run - print what would happen but don't actually do it
    #[arg(short = 'n')]
    dry_run: bool,

    /// List the contents of the tarball at --output instead of building
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn selection(&self) -> Selection {
        Selection {
            toolchain: self.toolchain,
            toolchain_lib: self.toolchain_lib,
            sysroot: self.sysroot,
            kernel_img: self.kernel_img,
            kernel_dbg: self.kernel_dbg,
            qemu: self.qemu,
            tools: self.tools,
        }
    }
}

fn main() -> Result<()> {
    // Load .env if present; real environment variables still win.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let output = config::resolve_output(cli.output.clone());
    let root = config::resolve_root(cli.root.clone()).unwrap_or_default();
    let config = Config::new(&root)
        .with_output(output)
        .with_selection(cli.selection())
        .with_verbose(cli.verbose)
        .with_dry_run(cli.dry_run);

    if cli.list {
        return commands::cmd_list(&config);
    }

    if !config.has_root() {
        eprintln!("{}", Cli::command().render_help());
        bail!("Fuchsia root not found at \"{}\"", root.display());
    }

    if config.verbose {
        config.print();
    }

    commands::cmd_build(&config)?;
    Ok(())
}
