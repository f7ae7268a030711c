//! Directory walking and per-directory package resolution
//!
//! The walker traverses the scan root depth-first in filesystem enumeration
//! order, prunes non-library subtrees, selects the one logical package per
//! directory, merges its files into a package model, and hands the model to
//! the active processor. Any parse or scan failure aborts the whole walk.

use crate::error::{Result, ScanError};
use crate::output::PackageProcessor;
use crate::parsers::{GoParser, PackageBuilder, PackageFiles};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

// Recognized non-library locations; the whole subtree is pruned.
const SKIP_DIRS: &[&str] = &["internal", "testdata", "vendor"];

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIP_DIRS.contains(&name))
}

fn is_test_file(name: &str) -> bool {
    name.ends_with("_test.go")
}

/// Sequential walker over one Go source tree
pub struct Walker {
    srcdir: PathBuf,
    cancel: Arc<AtomicBool>,
    parser: GoParser,
}

impl Walker {
    /// Create a walker for the given scan root
    pub fn new(srcdir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            srcdir: srcdir.into(),
            cancel: Arc::new(AtomicBool::new(false)),
            parser: GoParser::new()?,
        })
    }

    /// Cooperative cancellation flag, checked before each directory visit
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Walk the tree, dispatching one package model per eligible directory
    /// to `processor`.
    ///
    /// Output already written before a cancellation or failure stands; no
    /// rollback is attempted.
    pub fn walk(&mut self, processor: &mut dyn PackageProcessor) -> Result<()> {
        let entries = WalkDir::new(&self.srcdir)
            .into_iter()
            .filter_entry(|e| !is_skipped_dir(e));
        for entry in entries {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }
            if self.cancel.load(Ordering::Relaxed) {
                return Err(ScanError::Interrupted);
            }
            self.process_dir(entry.path(), processor)?;
        }
        Ok(())
    }

    // Parse the directory, select its logical package, build the model, and
    // dispatch it. A directory with no eligible package is a no-op.
    fn process_dir(&mut self, dir: &Path, processor: &mut dyn PackageProcessor) -> Result<()> {
        let groups = self.parser.parse_dir(dir, |name| !is_test_file(name))?;
        let Some(group) = select_package(dir, groups) else {
            return Ok(());
        };
        debug!("scanning package {} in {}", group.name, dir.display());
        let mut builder = PackageBuilder::new(&group.name);
        for file in &group.files {
            builder.scan_file(file)?;
        }
        if let Some(pkg) = builder.finalize() {
            processor.process(dir, &pkg)?;
        }
        Ok(())
    }
}

// Discard executable-entry and test-suffixed packages; the first remaining
// candidate wins and every later one is reported as a conflict.
fn select_package(dir: &Path, groups: Vec<PackageFiles>) -> Option<PackageFiles> {
    let mut selected: Option<PackageFiles> = None;
    for group in groups {
        if group.name == "main" || group.name.ends_with("_test") {
            continue;
        }
        match &selected {
            Some(first) => warn!(
                "conflict package names in {}: first={} other={}",
                dir.display(),
                first.name,
                group.name
            ),
            None => selected = Some(group),
        }
    }
    selected
}
