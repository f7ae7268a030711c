//! Go toolchain environment discovery
//!
//! Invoked once at startup, and only when no root override is supplied.
//! Any failure here is fatal before the walk begins.

use crate::error::{Result, ScanError};
use std::path::PathBuf;
use std::process::Command;

/// Discover the Go installation root via `go env GOROOT`
pub fn go_env_root() -> Result<PathBuf> {
    let output = Command::new("go")
        .args(["env", "GOROOT"])
        .output()
        .map_err(|e| ScanError::go_env(format!("failed to run `go env GOROOT`: {e}")))?;
    if !output.status.success() {
        return Err(ScanError::go_env(format!(
            "`go env GOROOT` exited with {}",
            output.status
        )));
    }
    let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if root.is_empty() {
        return Err(ScanError::go_env("`go env GOROOT` returned an empty path"));
    }
    Ok(PathBuf::from(root))
}
