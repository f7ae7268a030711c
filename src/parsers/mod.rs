//! Go source parsing and package model construction

mod builder;
mod go_source;

pub use self::builder::PackageBuilder;
pub use self::go_source::{GoParser, PackageFiles, SourceFile};
