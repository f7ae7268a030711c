//! Command-line interface

mod args;

pub use self::args::{Args, Mode};
