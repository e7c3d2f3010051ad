//! Invocation of the platform build-file generator scripts.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

#[cfg(windows)]
const GENERATOR_SCRIPT: &str = "scripts/gen-projects/msvc.bat";
#[cfg(not(windows))]
const GENERATOR_SCRIPT: &str = "scripts/gen-projects/gcc.sh";

/// Run the platform generator script at the repository root, blocking until
/// it exits. The script's exit code is not inspected; only a failure to
/// launch it is an error.
pub fn generate(root: &Path) -> Result<()> {
    let script = root.join(GENERATOR_SCRIPT);
    Command::new(&script)
        .arg("nopause")
        .current_dir(root)
        .status()
        .with_context(|| format!("running generator script '{}'", script.display()))?;
    Ok(())
}
