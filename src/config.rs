//! Configuration for a makesdk run.
//!
//! Built once from the parsed command line (with environment fallbacks) and
//! passed by reference to every operation. Nothing reads flags globally.

use std::path::{Path, PathBuf};

/// Default archive name when neither `--output` nor `FUCHSIA_SDK_OUTPUT` is set.
pub const DEFAULT_OUTPUT: &str = "fuchsia-sdk.tgz";

/// Environment variable naming the Fuchsia root when no positional is given.
pub const ENV_FUCHSIA_ROOT: &str = "FUCHSIA_ROOT";

/// Environment variable naming the output archive when `--output` is omitted.
pub const ENV_SDK_OUTPUT: &str = "FUCHSIA_SDK_OUTPUT";

/// Which components go into the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub toolchain: bool,
    /// Typically used when `toolchain` is false.
    pub toolchain_lib: bool,
    pub sysroot: bool,
    pub kernel_img: bool,
    pub kernel_dbg: bool,
    pub qemu: bool,
    pub tools: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            toolchain: false,
            toolchain_lib: true,
            sysroot: true,
            kernel_img: true,
            kernel_dbg: true,
            qemu: true,
            tools: true,
        }
    }
}

impl Selection {
    /// A selection with every component disabled.
    pub fn none() -> Self {
        Self {
            toolchain: false,
            toolchain_lib: false,
            sysroot: false,
            kernel_img: false,
            kernel_dbg: false,
            qemu: false,
            tools: false,
        }
    }
}

/// Immutable configuration for one SDK build.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the Fuchsia checkout to read from.
    pub root: PathBuf,
    /// Where the `.tgz` is written.
    pub output: PathBuf,
    pub selection: Selection,
    /// Print every action as it runs.
    pub verbose: bool,
    /// Print actions without touching the filesystem.
    pub dry_run: bool,
}

impl Config {
    /// Create a configuration with default selection and output.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            selection: Selection::default(),
            verbose: false,
            dry_run: false,
        }
    }

    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = output.as_ref().to_path_buf();
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether actions should be echoed to stdout.
    pub fn echo(&self) -> bool {
        self.verbose || self.dry_run
    }

    /// Check that the root exists.
    pub fn has_root(&self) -> bool {
        !self.root.as_os_str().is_empty() && self.root.exists()
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  FUCHSIA_ROOT: {}", self.root.display());
        println!("  OUTPUT: {}", self.output.display());
        println!("  toolchain: {}", self.selection.toolchain);
        println!("  toolchain-lib: {}", self.selection.toolchain_lib);
        println!("  sysroot: {}", self.selection.sysroot);
        println!("  kernel-img: {}", self.selection.kernel_img);
        println!("  kernel-dbg: {}", self.selection.kernel_dbg);
        println!("  qemu: {}", self.selection.qemu);
        println!("  tools: {}", self.selection.tools);
        if self.dry_run {
            println!("  Mode: DRY RUN (nothing will be written)");
        }
    }
}

/// Resolve the input root: the positional argument wins over `FUCHSIA_ROOT`.
pub fn resolve_root(arg: Option<PathBuf>) -> Option<PathBuf> {
    arg.or_else(|| std::env::var_os(ENV_FUCHSIA_ROOT).map(PathBuf::from))
        .filter(|p| !p.as_os_str().is_empty())
}

/// Resolve the output path: `--output` wins over `FUCHSIA_SDK_OUTPUT`.
pub fn resolve_output(arg: Option<PathBuf>) -> PathBuf {
    arg.or_else(|| std::env::var_os(ENV_SDK_OUTPUT).map(PathBuf::from))
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_selection_defaults_match_cli() {
        let sel = Selection::default();
        assert!(!sel.toolchain);
        assert!(sel.toolchain_lib);
        assert!(sel.sysroot);
        assert!(sel.kernel_img);
        assert!(sel.kernel_dbg);
        assert!(sel.qemu);
        assert!(sel.tools);
    }

    #[test]
    fn test_echo_when_verbose_or_dry_run() {
        let base = Config::new("/tmp");
        assert!(!base.echo());
        assert!(base.clone().with_verbose(true).echo());
        assert!(base.with_dry_run(true).echo());
    }

    #[test]
    fn test_empty_root_is_missing() {
        assert!(!Config::new("").has_root());
        assert!(!Config::new("/definitely/not/a/fuchsia/root").has_root());
    }

    #[test]
    #[serial]
    fn test_resolve_root_prefers_argument() {
        std::env::set_var(ENV_FUCHSIA_ROOT, "/from/env");
        assert_eq!(
            resolve_root(Some(PathBuf::from("/from/arg"))),
            Some(PathBuf::from("/from/arg"))
        );
        assert_eq!(resolve_root(None), Some(PathBuf::from("/from/env")));
        std::env::remove_var(ENV_FUCHSIA_ROOT);
        assert_eq!(resolve_root(None), None);
    }

    #[test]
    #[serial]
    fn test_resolve_output_falls_back_to_default() {
        std::env::remove_var(ENV_SDK_OUTPUT);
        assert_eq!(resolve_output(None), PathBuf::from(DEFAULT_OUTPUT));

        std::env::set_var(ENV_SDK_OUTPUT, "custom.tgz");
        assert_eq!(resolve_output(None), PathBuf::from("custom.tgz"));
        assert_eq!(
            resolve_output(Some(PathBuf::from("cli.tgz"))),
            PathBuf::from("cli.tgz")
        );
        std::env::remove_var(ENV_SDK_OUTPUT);
    }
}
