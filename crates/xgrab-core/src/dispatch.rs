//! Download dispatch.
//!
//! Resolves the original asset for a located media source, derives the
//! filename, and hands the request to a [`DownloadSink`]. Transport
//! failures are logged here and classified for the caller; nothing is
//! retried.

use crate::classify::MediaType;
use crate::filename::derive_filename;
use crate::resolve::resolve_original;

/// Request handed to a download sink. Mirrors the platform download API
/// shape: URL, filename relative to the user's download directory
/// (including the configured subfolder), and the save-dialog flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub filename: String,
    /// Always `false`: never prompt for a save location.
    pub save_as: bool,
}

/// Performs the actual transfer: the platform download API, or the
/// blob-fetch fallback in [`crate::fetch`].
pub trait DownloadSink {
    fn download(&self, request: &DownloadRequest) -> anyhow::Result<()>;
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no usable download URL for {src:?}")]
    NoUsableUrl { src: String },
    #[error("download transport failed")]
    Transport(#[source] anyhow::Error),
}

/// Resolves `src` and dispatches the download to `sink`. Returns the
/// request that was dispatched so callers can report the target path.
pub fn download(
    src: &str,
    media_type: MediaType,
    save_path: &str,
    sink: &dyn DownloadSink,
) -> Result<DownloadRequest, DispatchError> {
    if src.is_empty() {
        return Err(DispatchError::NoUsableUrl {
            src: src.to_string(),
        });
    }
    let resolved = resolve_original(src, media_type);
    if resolved.is_empty() {
        return Err(DispatchError::NoUsableUrl {
            src: src.to_string(),
        });
    }
    let filename = derive_filename(&resolved, media_type);
    let request = DownloadRequest {
        url: resolved,
        filename: format!("{save_path}{filename}"),
        save_as: false,
    };
    match sink.download(&request) {
        Ok(()) => {
            tracing::debug!(url = %request.url, filename = %request.filename, "download dispatched");
            Ok(request)
        }
        Err(err) => {
            tracing::error!(url = %request.url, error = %err, "download failed");
            Err(DispatchError::Transport(err))
        }
    }
}
