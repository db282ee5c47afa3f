//! Per-OS input-method engine management
//!
//! Each supported OS runs a different Rime front-end (Weasel, Squirrel,
//! fcitx5-rime) with its own installer, service processes, and config
//! directory convention. The [`Platform`] trait captures those four
//! capabilities; [`detect`] selects the single implementation for the
//! current OS once at startup.

pub mod error;
mod fcitx;
mod squirrel;
mod weasel;

use std::path::PathBuf;

pub use error::{Error, Result};
pub use fcitx::Fcitx5;
pub use squirrel::Squirrel;
pub use weasel::Weasel;

/// OS-specific capabilities of a Rime front-end.
pub trait Platform {
    /// Short name of the front-end, for messages and logs.
    fn name(&self) -> &'static str;

    /// Install the input-method engine through the platform's package
    /// manager. A failed install degrades to guidance for a manual
    /// install; only a missing precondition is a hard error.
    fn install_engine(&self) -> Result<()>;

    /// Best-effort stop of the running engine so its config directory can
    /// be renamed. Failures are ignored; the backup step detects a still
    /// running engine as `ResourceBusy`.
    fn stop_engine(&self) {}

    /// The live configuration directory the engine reads at runtime.
    fn config_dir(&self) -> Result<PathBuf>;

    /// Post-deploy hook: trigger or advise a redeploy.
    fn post_deploy(&self) {}
}

/// Select the platform implementation for the current OS.
pub fn detect() -> Result<Box<dyn Platform>> {
    if cfg!(target_os = "windows") {
        Ok(Box::new(Weasel))
    } else if cfg!(target_os = "macos") {
        Ok(Box::new(Squirrel))
    } else if cfg!(target_os = "linux") {
        Ok(Box::new(Fcitx5))
    } else {
        Err(Error::UnsupportedPlatform {
            os: std::env::consts::OS.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_on_supported_hosts() {
        // CI runs on one of the three supported systems.
        let platform = detect().unwrap();
        assert!(!platform.name().is_empty());
    }

    #[test]
    fn test_config_dirs_end_in_rime_convention() {
        assert!(Weasel.config_dir().unwrap().ends_with("Rime"));
        assert!(Squirrel.config_dir().unwrap().ends_with("Library/Rime"));
        assert!(Fcitx5.config_dir().unwrap().ends_with("fcitx5/rime"));
    }
}
