//! Blob-fetch fallback download path.
//!
//! When no platform download API is available, fetch the asset body with
//! libcurl into a `.part` file next to the target and rename it into place
//! on completion.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::dispatch::{DownloadRequest, DownloadSink};

/// Sink that writes fetched assets under a base directory (the analog of
/// the user's download directory).
#[derive(Debug, Clone)]
pub struct FetchSink {
    base_dir: PathBuf,
}

impl FetchSink {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Final on-disk path for a request's relative filename.
    pub fn target_path(&self, request: &DownloadRequest) -> PathBuf {
        self.base_dir.join(&request.filename)
    }
}

impl DownloadSink for FetchSink {
    fn download(&self, request: &DownloadRequest) -> Result<()> {
        let target = self.target_path(request);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let body = fetch_bytes(&request.url)?;
        let part = part_path(&target);
        fs::write(&part, &body).with_context(|| format!("failed to write {}", part.display()))?;
        fs::rename(&part, &target).with_context(|| {
            format!("failed to rename {} to {}", part.display(), target.display())
        })?;
        tracing::info!(
            url = %request.url,
            path = %target.display(),
            bytes = body.len(),
            "download complete"
        );
        Ok(())
    }
}

/// Temp path used before the final rename (`file.mp4` → `file.mp4.part`).
pub fn part_path(target: &Path) -> PathBuf {
    let mut os = target.as_os_str().to_owned();
    os.push(".part");
    PathBuf::from(os)
}

/// GET the asset body. Follows redirects; bounded connect/total timeouts.
fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(120))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }
    Ok(body)
}
