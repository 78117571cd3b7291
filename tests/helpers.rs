//! Shared test utilities for makesdk tests.

#![allow(dead_code)]

use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tar::Archive;
use tempfile::TempDir;

use makesdk::component::definitions::{
    KERNEL_DBG, KERNEL_IMG, QEMU, SYSROOT, TOOLCHAIN, TOOLCHAIN_LIB, TOOLS,
};

/// Test environment with a mock Fuchsia root and a scratch output directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Mock Fuchsia checkout
    pub root: PathBuf,
    /// Where archives are written
    pub out_dir: PathBuf,
    /// Used as TMPDIR so leftover staging directories are visible
    pub tmp_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path();

        let root = base.join("fuchsia");
        let out_dir = base.join("out");
        let tmp_dir = base.join("tmp");

        fs::create_dir_all(&root).expect("Failed to create root dir");
        fs::create_dir_all(&out_dir).expect("Failed to create out dir");
        fs::create_dir_all(&tmp_dir).expect("Failed to create tmp dir");

        Self {
            _temp_dir: temp_dir,
            root,
            out_dir,
            tmp_dir,
        }
    }

    /// Path for an output archive.
    pub fn output(&self, name: &str) -> PathBuf {
        self.out_dir.join(name)
    }

    /// Write a file under the mock root, creating parents.
    pub fn write(&self, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root.join(rel);
        fs::create_dir_all(path.parent().expect("relative path has parent"))
            .expect("Failed to create parent");
        fs::write(&path, content).expect("Failed to write mock file");
        path
    }

    /// Entries left behind in the scratch TMPDIR.
    pub fn tmp_entries(&self) -> Vec<PathBuf> {
        fs::read_dir(&self.tmp_dir)
            .expect("tmp dir readable")
            .map(|e| e.expect("dir entry").path())
            .collect()
    }
}

/// Populate a mock Fuchsia tree with content for every component.
pub fn create_mock_fuchsia_tree(env: &TestEnv) {
    env.write(&format!("{}/bin/clang", TOOLCHAIN.src), "clang");
    env.write(&format!("{}/libclang_rt.builtins.a", TOOLCHAIN_LIB.src), "builtins");
    env.write(&format!("{}/include/zircon/types.h", SYSROOT.src), "types");
    env.write(&format!("{}/lib/libc.so", SYSROOT.src), "libc");
    env.write(KERNEL_IMG.src, b"\x7fMAGENTA\x00\x01\x02");
    env.write(&format!("{}/kernel/kernel.elf", KERNEL_DBG.src), "kernel elf");
    env.write(&format!("{}/kernel/kernel.map", KERNEL_DBG.src), "map");
    env.write(&format!("{}/ids.txt", KERNEL_DBG.src), "abc123 kernel.elf\n");
    env.write(&format!("{}/bin/qemu-system-x86_64", QEMU.src), "qemu");
    env.write(&format!("{}/minfs", TOOLS.src), "minfs");
}

/// Regular-file paths in a `.tgz`.
pub fn tarball_files(archive: &Path) -> Vec<PathBuf> {
    let file = File::open(archive).expect("archive exists");
    let mut archive = Archive::new(GzDecoder::new(file));
    let mut files = Vec::new();
    for entry in archive.entries().expect("readable archive") {
        let entry = entry.expect("valid entry");
        if entry.header().entry_type().is_file() {
            files.push(entry.path().expect("valid path").into_owned());
        }
    }
    files.sort();
    files
}

/// Contents of one file inside a `.tgz`, if present.
pub fn read_tarball_file(archive: &Path, name: &str) -> Option<Vec<u8>> {
    let file = File::open(archive).expect("archive exists");
    let mut archive = Archive::new(GzDecoder::new(file));
    for entry in archive.entries().expect("readable archive") {
        let mut entry = entry.expect("valid entry");
        if entry.path().expect("valid path") == Path::new(name) {
            let mut buf = Vec::new();
            entry.read_to_end(&mut buf).expect("readable entry");
            return Some(buf);
        }
    }
    None
}
