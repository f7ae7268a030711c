//! Output processing strategies
//!
//! Each scanned package model is dispatched to exactly one
//! [`PackageProcessor`], selected once at startup. Both processors write
//! line-oriented text to a single output stream and share no state.

mod list;
mod syntax;

pub use self::list::ListProcessor;
pub use self::syntax::{should_skip, SyntaxProcessor};

use crate::cli::Mode;
use crate::error::Result;
use crate::models::package::Package;
use std::io;
use std::path::Path;

/// Strategy interface consuming one package model per directory
pub trait PackageProcessor {
    /// Process the model produced for `dir`; `pkg.name` is the selected
    /// logical package name
    fn process(&mut self, dir: &Path, pkg: &Package) -> Result<()>;
}

/// Create the processor for the selected mode, writing to stdout
pub fn create_processor(mode: Mode, srcdir: &Path) -> Box<dyn PackageProcessor> {
    match mode {
        Mode::List => Box::new(ListProcessor::new(srcdir, io::stdout())),
        Mode::Syntax => Box::new(SyntaxProcessor::new(io::stdout())),
    }
}
