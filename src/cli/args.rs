//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// gosyms - public symbol scanner for Go source trees
#[derive(Parser, Debug)]
#[command(name = "gosyms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan a Go source tree and list public symbols or generate Vim syntax rules")]
#[command(after_help = "EXAMPLES:

    # List public symbols of the standard library (root from `go env GOROOT`)
    gosyms

    # Generate goExtraType Vim syntax rules instead
    gosyms --mode syntax

    # Scan a different Go installation
    gosyms --root /usr/local/go

    # Show per-directory progress on stderr
    gosyms --verbose
")]
pub struct Args {
    /// How to process scanned packages
    #[arg(short, long, value_enum, default_value_t = Mode::List, help = "How to process packages: 'list' prints public symbols, 'syntax' generates Vim syntax rules")]
    pub mode: Mode,

    /// Root directory to scan
    #[arg(short, long, value_name = "PATH", help = "Go installation root to scan; its src subdirectory is walked (defaults to `go env GOROOT`)")]
    pub root: Option<PathBuf>,

    /// Suppress warnings
    #[arg(short, long, help = "Only log fatal errors (suppresses conflict and path warnings)")]
    pub quiet: bool,

    /// Show per-directory progress
    #[arg(short, long, help = "Log each scanned package to stderr")]
    pub verbose: bool,
}

/// Package processing modes
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// List every public symbol of every package
    List,
    /// Generate one Vim syntax rule per package's public types
    Syntax,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
