//! Repository root resolution.
//!
//! The root is resolved once at startup and passed explicitly through every
//! operation; the process working directory is never changed.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::project::BUILD_FILE;

/// Resolve the repository root.
///
/// An explicit `--root` override wins. Otherwise the search walks up from the
/// directory containing the running executable (the tool normally lives under
/// `scripts/` inside the repository), and falls back to walking up from the
/// caller's current directory.
pub fn locate_root(overridden: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = overridden {
        if !root.join(BUILD_FILE).is_file() {
            bail!(
                "'{}' does not look like a template repository (no {})",
                root.display(),
                BUILD_FILE
            );
        }
        return Ok(root);
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            if let Some(root) = find_root_above(dir) {
                return Ok(root);
            }
        }
    }

    let cwd = std::env::current_dir().context("resolving current directory")?;
    find_root_above(&cwd).with_context(|| {
        format!(
            "no {} found above '{}'; run from inside the repository or pass --root",
            BUILD_FILE,
            cwd.display()
        )
    })
}

/// Walk up from `start` looking for a directory containing the root
/// build-description file.
fn find_root_above(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(BUILD_FILE).is_file())
        .map(Path::to_path_buf)
}
