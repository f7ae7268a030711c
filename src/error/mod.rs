//! Error handling for gosyms

mod types;

pub use self::types::{Result, ScanError};
