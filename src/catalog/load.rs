use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use super::locator::CatalogSource;
use super::model::{CatalogEntry, EntryKind};

/// Key holding the entry list inside a catalog document.
pub const ENTRIES_KEY: &str = "sounds";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog fetch failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid catalog schema: expected an object with a `sounds` list")]
    Schema,
}

/// Where the entries of a loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    Loaded,
    /// The built-in demo catalog replaced a failed load.
    Fallback { reason: String },
}

#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub entries: Vec<CatalogEntry>,
    pub origin: CatalogOrigin,
    /// Base for relative locators.
    pub base: Option<Url>,
}

/// Load the catalog at `source`.
///
/// Never fails: any read, fetch or parse problem is logged and the built-in
/// demo catalog is returned instead.
pub fn load(source: &CatalogSource, fetch_timeout: Duration) -> LoadedCatalog {
    let base = source.base();
    match read_source(source, fetch_timeout).and_then(|text| parse_document(&text, source.is_toml()))
    {
        Ok(entries) => {
            info!(%source, count = entries.len(), "catalog loaded");
            LoadedCatalog {
                entries,
                origin: CatalogOrigin::Loaded,
                base,
            }
        }
        Err(e) => {
            warn!(%source, "using demo catalog because: {e}");
            LoadedCatalog {
                entries: fallback_entries(),
                origin: CatalogOrigin::Fallback {
                    reason: e.to_string(),
                },
                base,
            }
        }
    }
}

fn read_source(source: &CatalogSource, fetch_timeout: Duration) -> Result<String, CatalogError> {
    match source {
        CatalogSource::Path(path) => Ok(std::fs::read_to_string(path)?),
        CatalogSource::Remote(url) => {
            let client = reqwest::blocking::Client::builder()
                .timeout(fetch_timeout)
                .build()?;
            let text = client.get(url.clone()).send()?.error_for_status()?.text()?;
            Ok(text)
        }
    }
}

/// Parse a catalog document and return its entries in document order.
///
/// The document must be an object holding a `sounds` list; otherwise the
/// whole document is rejected. Individual list items that do not look like
/// an entry are skipped.
pub fn parse_document(text: &str, is_toml: bool) -> Result<Vec<CatalogEntry>, CatalogError> {
    let doc: Value = if is_toml {
        toml::from_str(text)?
    } else {
        serde_json::from_str(text)?
    };

    let items = doc
        .get(ENTRIES_KEY)
        .and_then(Value::as_array)
        .ok_or(CatalogError::Schema)?;

    let mut entries = Vec::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        match serde_json::from_value::<CatalogEntry>(item.clone()) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!(pos, "skipping catalog item: {e}"),
        }
    }
    Ok(entries)
}

/// Built-in demo catalog used when the configured one cannot be loaded.
pub fn fallback_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "https://cdn.pixabay.com/download/audio/2022/03/15/audio_8f0c3a.mp3?filename=notification-2-27397.mp3",
            Some("Demo Bell"),
            EntryKind::Sound,
            "Alerts",
        ),
        CatalogEntry::new(
            "https://cdn.pixabay.com/download/audio/2022/03/15/audio_ef6d0f.mp3?filename=lofi-study-112191.mp3",
            Some("Demo Lofi"),
            EntryKind::Song,
            "Music",
        ),
    ]
}
