//! gosyms - public symbol scanner for Go source trees
//!
//! This library walks a Go source tree, selects the one logical library
//! package per directory, merges its files' package-level declarations into
//! a single model, and renders the model through a pluggable output mode:
//! a flat listing of public symbols, or a generated Vim syntax rule.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use error::{Result, ScanError};
pub use models::package::{go_exported, Declaration, Package};
pub use output::{create_processor, ListProcessor, PackageProcessor, SyntaxProcessor};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
