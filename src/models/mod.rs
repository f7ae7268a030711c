//! Data models for gosyms

pub mod package;

pub use self::package::{go_exported, Declaration, Package};
