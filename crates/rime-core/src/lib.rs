//! Core install and sync engine for rime-deploy
//!
//! Two operations do all the work: the [`Installer`] backs up the live
//! config directory and lays down a fresh upstream bundle, and the
//! [`Synchronizer`] overlays the user's override files on top. Both are
//! idempotent; the overrides directory is the durable source of truth and
//! the target directory is always a derived, overwritable projection.

pub mod error;
pub mod install;
pub mod patch;
pub mod settings;
pub mod sync;

pub use error::{Error, Result};
pub use install::{InstallOutcome, Installer};
pub use patch::{MENU_PAGE_SIZE, PATCH_FILE_NAME, RESERVED_STEM};
pub use settings::Settings;
pub use sync::Synchronizer;
