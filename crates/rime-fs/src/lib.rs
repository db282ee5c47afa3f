//! Filesystem layer for rime-deploy
//!
//! Provides the safety primitives the rest of the tool builds on:
//! rename-aside backups, atomic single-visible-write file I/O, and
//! recursive merge-by-overwrite tree copies.

pub mod backup;
pub mod config;
pub mod error;
pub mod io;
pub mod tree;

pub use backup::backup_dir;
pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
pub use tree::copy_tree;
