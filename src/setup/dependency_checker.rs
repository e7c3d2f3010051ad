//! Availability check for the external build-file generator (premake5)

use std::path::PathBuf;
use std::process::Command;

/// Result of probing for the premake executable
#[derive(Debug, Clone, Default)]
pub struct PremakeStatus {
    pub found: bool,
    pub path: Option<PathBuf>,
    pub version: Option<String>,
}

impl PremakeStatus {
    /// Probe for premake5 on the host and return its status
    pub fn check() -> Self {
        check_command("premake5", &["--version"])
    }
}

/// Check if a command exists and get its version
fn check_command(name: &str, args: &[&str]) -> PremakeStatus {
    let result = Command::new(name).args(args).output();

    if let Ok(output) = result {
        if output.status.success() {
            return PremakeStatus {
                found: true,
                path: find_executable_path(name),
                version: extract_version(&output.stdout),
            };
        }
    }

    PremakeStatus::default()
}

/// Extract version from command output.
/// premake prints a bare version string like "5.0.0-beta2" on its first line.
fn extract_version(stdout: &[u8]) -> Option<String> {
    let output = String::from_utf8_lossy(stdout);
    let first_line = output.lines().next()?.trim();
    if first_line.is_empty() {
        None
    } else {
        Some(first_line.to_string())
    }
}

/// Find executable path using 'which', falling back to common install
/// locations
fn find_executable_path(name: &str) -> Option<PathBuf> {
    if let Ok(output) = Command::new("which").arg(name).output() {
        if output.status.success() {
            let path_str = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if !path_str.is_empty() {
                let path = PathBuf::from(&path_str);
                if path.exists() && path.is_absolute() {
                    return Some(path);
                }
            }
        }
    }

    let common_paths = [
        Some(PathBuf::from("/usr/local/bin").join(name)),
        dirs::home_dir().map(|h| h.join(".local/bin").join(name)),
    ];
    common_paths
        .into_iter()
        .flatten()
        .find(|candidate| candidate.exists())
}
