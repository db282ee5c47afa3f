//! Upstream bundle retrieval for rime-deploy
//!
//! Downloads a provider's configuration bundle with mirror fallback and
//! extracts it into a scoped working directory. Everything here is
//! blocking and sequential; this is a human-paced tool.

pub mod archive;
pub mod download;
pub mod error;
pub mod source;

pub use archive::extract_bundle;
pub use download::{FetchedBundle, download_plan, fetch_and_extract};
pub use error::{Error, Result};
pub use source::{ConfigSource, SchemaInfo};
