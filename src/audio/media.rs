//! Fetching media bytes for a resolved locator.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::transport::ChannelError;

/// Where a resolved locator points.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum MediaLocation {
    File(PathBuf),
    Remote(Url),
}

/// `file://` URLs become paths, `http(s)` stays remote, anything that is not
/// a URL is taken as a plain path.
pub(super) fn classify(locator: &str) -> Result<MediaLocation, ChannelError> {
    match Url::parse(locator) {
        Ok(url) => match url.scheme() {
            "file" => url
                .to_file_path()
                .map(MediaLocation::File)
                .map_err(|_| fetch_error(locator, "not a local file path")),
            "http" | "https" => Ok(MediaLocation::Remote(url)),
            other => Err(fetch_error(locator, &format!("unsupported scheme `{other}`"))),
        },
        Err(_) => Ok(MediaLocation::File(PathBuf::from(locator))),
    }
}

/// Read the whole media into memory so the sink can be rebuilt for rewinds
/// without touching the disk or the network again.
pub(super) fn fetch(locator: &str, timeout: Duration) -> Result<Arc<[u8]>, ChannelError> {
    let bytes = match classify(locator)? {
        MediaLocation::File(path) => {
            std::fs::read(&path).map_err(|e| fetch_error(locator, &e.to_string()))?
        }
        MediaLocation::Remote(url) => {
            let client = reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| fetch_error(locator, &e.to_string()))?;
            client
                .get(url)
                .send()
                .and_then(|r| r.error_for_status())
                .and_then(|r| r.bytes())
                .map_err(|e| fetch_error(locator, &e.to_string()))?
                .to_vec()
        }
    };
    debug!(locator, len = bytes.len(), "media fetched");
    Ok(Arc::from(bytes))
}

fn fetch_error(locator: &str, reason: &str) -> ChannelError {
    ChannelError::Fetch {
        locator: locator.to_string(),
        reason: reason.to_string(),
    }
}
