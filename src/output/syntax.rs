//! Vim syntax rule generation
//!
//! Emits one `goExtraType` match rule per package, alternating over its
//! sorted public type names, or a commented-out explanation when a package
//! is skipped.

use crate::error::{Result, ScanError};
use crate::models::package::Package;
use crate::output::PackageProcessor;
use std::io::Write;
use std::path::Path;

// Standard-library packages whose types are not interesting to highlight.
// Keep in sort; should_skip relies on binary search.
const IGNORE_PACKAGES: &[&str] = &[
    "ast",
    "build",
    "builtin",
    "constant",
    "doc",
    "driver",
    "dwarf",
    "elf",
    "heap",
    "importer",
    "macho",
    "parse",
    "parser",
    "pe",
    "plan9obj",
    "printer",
    "runtime",
    "scanner",
    "syscall",
    "token",
    "types",
    "user",
];

/// True if syntax-rule generation ignores this package name
pub fn should_skip(name: &str) -> bool {
    IGNORE_PACKAGES.binary_search(&name).is_ok()
}

/// Processor that generates Vim syntax match rules for public types
pub struct SyntaxProcessor<W: Write> {
    out: W,
}

impl<W: Write> SyntaxProcessor<W> {
    /// Create a syntax processor writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the processor, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PackageProcessor for SyntaxProcessor<W> {
    fn process(&mut self, _dir: &Path, pkg: &Package) -> Result<()> {
        if pkg.types.is_empty() || should_skip(&pkg.name) {
            writeln!(self.out, "\" skipped {} package: mark as IGNORE", pkg.name)
                .map_err(ScanError::output)?;
            return Ok(());
        }
        let mut names = pkg.public_type_names();
        if names.is_empty() {
            writeln!(self.out, "\" skipped {} package: no public symbols", pkg.name)
                .map_err(ScanError::output)?;
            return Ok(());
        }
        names.sort_unstable();
        writeln!(
            self.out,
            r"syn match goExtraType /\<{}\.\({}\)\>/",
            pkg.name,
            names.join(r"\|")
        )
        .map_err(ScanError::output)
    }
}
