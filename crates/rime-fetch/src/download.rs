//! Bundle download with mirror fallback
//!
//! GitHub is slow or unreachable for a large share of this tool's users,
//! so a failed primary download falls back to an ordered list of proxy
//! rewrites of the same URL. Attempts are sequential with a fixed delay;
//! there is nothing to gain from concurrency at human pace.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tempfile::TempDir;
use tracing::{debug, info, warn};

use crate::{ConfigSource, Error, Result, archive};

/// Origin the mirror rewrites apply to.
const SLOW_ORIGIN: &str = "https://github.com/";

/// Proxy prefixes tried in order after the primary URL fails.
const MIRROR_PREFIXES: &[&str] = &[
    "https://ghfast.top/",
    "https://mirror.ghproxy.com/",
    "https://gh-proxy.com/",
];

/// Download attempts per mirror URL.
const RETRIES_PER_MIRROR: u32 = 2;

/// Fixed delay between consecutive attempts.
const RETRY_DELAY: Duration = Duration::from_secs(2);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Whole-request timeout; bundles run to ~100 MB on slow links.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// An extracted bundle rooted in a scoped working directory.
///
/// The temp directory lives as long as this value and is removed on drop,
/// whether or not the install that consumes it succeeds.
#[derive(Debug)]
pub struct FetchedBundle {
    workdir: TempDir,
    root: PathBuf,
}

impl FetchedBundle {
    /// Effective source root to copy from (flattened per the bundle rule).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The working directory holding the archive and extraction output.
    pub fn workdir(&self) -> &Path {
        self.workdir.path()
    }
}

/// Ordered attempt list for a bundle URL.
///
/// The primary URL is attempted once. When it belongs to the known slow
/// origin, each mirror rewrite is appended [`RETRIES_PER_MIRROR`] times,
/// so exhausting the plan means `1 + mirrors * retries` attempts.
pub fn download_plan(url: &str) -> Vec<String> {
    let mut plan = vec![url.to_string()];
    if url.starts_with(SLOW_ORIGIN) {
        for prefix in MIRROR_PREFIXES {
            for _ in 0..RETRIES_PER_MIRROR {
                plan.push(format!("{prefix}{url}"));
            }
        }
    }
    plan
}

/// Download and extract a source's bundle into a fresh working directory.
pub fn fetch_and_extract(source: ConfigSource) -> Result<FetchedBundle> {
    let workdir = TempDir::new().map_err(|e| Error::io(std::env::temp_dir(), e))?;
    let zip_path = workdir.path().join("bundle.zip");

    info!(source = source.id(), url = source.bundle_url(), "fetching bundle");
    download_with_mirrors(source.bundle_url(), &zip_path)?;

    let root = archive::extract_bundle(&zip_path, &workdir.path().join("extracted"))?;
    Ok(FetchedBundle { workdir, root })
}

fn download_with_mirrors(url: &str, dest: &Path) -> Result<()> {
    let plan = download_plan(url);
    let attempts = plan.len() as u32;
    let mut last_error = None;

    for (i, candidate) in plan.iter().enumerate() {
        if i > 0 {
            thread::sleep(RETRY_DELAY);
        }
        debug!(url = candidate.as_str(), attempt = i + 1, "download attempt");
        // Local disk errors abort the pass via `?`; only HTTP failures
        // are worth another mirror.
        match download(candidate, dest)? {
            Ok(()) => {
                info!(url = candidate.as_str(), "download complete");
                return Ok(());
            }
            Err(e) => {
                warn!(url = candidate.as_str(), error = %e, "download attempt failed");
                last_error = Some(e);
            }
        }
    }

    // The plan is never empty, so exhaustion implies a recorded error.
    match last_error {
        Some(source) => Err(Error::FetchFailed {
            url: url.to_string(),
            attempts,
            source,
        }),
        None => unreachable!("download plan contained no attempts"),
    }
}

/// One download attempt. The outer error is a local filesystem failure;
/// the inner one is an HTTP failure eligible for mirror fallback.
fn download(url: &str, dest: &Path) -> Result<std::result::Result<(), reqwest::Error>> {
    let client = match reqwest::blocking::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("rime-deploy/", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(client) => client,
        Err(e) => return Ok(Err(e)),
    };

    let mut response = match client.get(url).send().and_then(|r| r.error_for_status()) {
        Ok(response) => response,
        Err(e) => return Ok(Err(e)),
    };

    // Stream straight to disk. `File::create` truncates, so a retry over
    // a partial file from the previous attempt starts clean.
    let file = File::create(dest).map_err(|e| Error::io(dest, e))?;
    let bar = progress_bar(response.content_length());
    let mut writer = bar.wrap_write(file);
    let result = response.copy_to(&mut writer);
    bar.finish_and_clear();
    match result {
        Ok(_) => Ok(Ok(())),
        Err(e) => Ok(Err(e)),
    }
}

/// Byte-count progress bar for the streaming download. Servers that omit
/// `Content-Length` get a spinner-style bar without a total.
fn progress_bar(content_length: Option<u64>) -> ProgressBar {
    let bar = match content_length {
        Some(len) => ProgressBar::new(len),
        None => ProgressBar::no_length(),
    };
    if let Ok(style) =
        ProgressStyle::with_template("  {bar:30} {bytes}/{total_bytes} ({bytes_per_sec})")
    {
        bar.set_style(style);
    }
    bar
}
