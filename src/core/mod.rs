//! Core walking and environment discovery

mod goenv;
mod walker;

pub use self::goenv::go_env_root;
pub use self::walker::Walker;
