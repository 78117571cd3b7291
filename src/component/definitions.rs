//! Component definitions - the fixed set of SDK contents.
//!
//! Source paths follow the Fuchsia build tree layout; destination paths are
//! the SDK layout consumers expect.

use super::{debug_objects, file, tree, Component, Flag};

/// Magenta kernel build directory for x86-64.
const MAGENTA_X86_64: &str = "out/build-magenta/build-magenta-pc-x86-64";

/// Index file shipped alongside kernel debug objects.
pub const DEBUG_IDS_FILE: &str = "ids.txt";

/// Extension of kernel debug objects.
pub const DEBUG_OBJECT_EXT: &str = "elf";

pub const TOOLCHAIN: Component = tree(
    "toolchain",
    Flag::Toolchain,
    "buildtools/toolchain",
    "toolchain",
);

pub const TOOLCHAIN_LIB: Component = tree(
    "toolchain-lib",
    Flag::ToolchainLib,
    "buildtools/toolchain/clang+llvm-x86_64-linux/lib/clang/5.0.0/lib/fuchsia",
    "toolchain_libs/clang/5.0.0/lib/fuchsia",
);

pub const SYSROOT: Component = tree("sysroot", Flag::Sysroot, "out/sysroot", "sysroot");

pub const KERNEL_IMG: Component = file(
    "kernel-img",
    Flag::KernelImg,
    "out/build-magenta/build-magenta-pc-x86-64/magenta.bin",
    "kernel/magenta.bin",
);

pub const KERNEL_DBG: Component = debug_objects(
    "kernel-dbg",
    Flag::KernelDbg,
    MAGENTA_X86_64,
    "kernel/debug",
);

pub const QEMU: Component = tree("qemu", Flag::Qemu, "buildtools/qemu", "qemu");

pub const TOOLS: Component = tree("tools", Flag::Tools, "out/build-magenta/tools", "tools");

/// Every component, in the order they are copied.
pub const COMPONENTS: &[Component] = &[
    TOOLCHAIN,
    TOOLCHAIN_LIB,
    SYSROOT,
    KERNEL_IMG,
    KERNEL_DBG,
    QEMU,
    TOOLS,
];
