//! Public symbol listing
//!
//! Emits one header line per package followed by one line per exported
//! declaration, in Types, then Funcs, then Values order.

use crate::error::{Result, ScanError};
use crate::models::package::{Declaration, Package};
use crate::output::PackageProcessor;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tracing::warn;

/// Processor that lists every public symbol of every scanned package
pub struct ListProcessor<W: Write> {
    srcdir: PathBuf,
    out: W,
}

impl<W: Write> ListProcessor<W> {
    /// Create a list processor writing to `out`; paths are displayed
    /// relative to `srcdir`
    pub fn new(srcdir: impl Into<PathBuf>, out: W) -> Self {
        Self {
            srcdir: srcdir.into(),
            out,
        }
    }

    /// Consume the processor, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    // Relative-path computation failure is logged and the absolute path is
    // used as-is; it never aborts the run.
    fn display_path(&self, dir: &Path) -> String {
        match dir.strip_prefix(&self.srcdir) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => slash_path(rel),
            Err(err) => {
                warn!(
                    "relative path for {} failed but ignored: {}",
                    dir.display(),
                    err
                );
                dir.display().to_string()
            }
        }
    }

    fn write_kind(&mut self, kind: &str, pkgname: &str, decls: &[Declaration]) -> Result<()> {
        for decl in decls {
            if !decl.public {
                continue;
            }
            writeln!(self.out, "{}: {}.{}", kind, pkgname, decl.name).map_err(ScanError::output)?;
        }
        Ok(())
    }
}

impl<W: Write> PackageProcessor for ListProcessor<W> {
    fn process(&mut self, dir: &Path, pkg: &Package) -> Result<()> {
        let rel = self.display_path(dir);
        writeln!(self.out, "package: {rel}").map_err(ScanError::output)?;
        self.write_kind("type", &pkg.name, &pkg.types)?;
        self.write_kind("func", &pkg.name, &pkg.funcs)?;
        self.write_kind("value", &pkg.name, &pkg.values)?;
        Ok(())
    }
}

/// Join path components with forward slashes for display
fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
