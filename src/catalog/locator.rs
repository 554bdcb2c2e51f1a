//! Locator resolution against the catalog base.

use std::path::{Path, PathBuf};

use url::Url;

use super::model::CatalogEntry;

/// Where a catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Path(PathBuf),
    Remote(Url),
}

impl CatalogSource {
    /// `http(s)` URLs are fetched remotely; anything else is a local path.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => CatalogSource::Remote(url),
            _ => CatalogSource::Path(PathBuf::from(raw)),
        }
    }

    /// Base URI relative locators resolve against: the catalog URL itself, or
    /// the directory holding the catalog file. `None` when no absolute
    /// directory can be worked out.
    pub fn base(&self) -> Option<Url> {
        match self {
            CatalogSource::Remote(url) => Some(url.clone()),
            CatalogSource::Path(path) => directory_url(path),
        }
    }

    pub fn is_toml(&self) -> bool {
        let path = match self {
            CatalogSource::Remote(url) => url.path(),
            CatalogSource::Path(path) => path.to_str().unwrap_or_default(),
        };
        path.to_ascii_lowercase().ends_with(".toml")
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Path(path) => write!(f, "{}", path.display()),
            CatalogSource::Remote(url) => write!(f, "{url}"),
        }
    }
}

fn directory_url(catalog_path: &Path) -> Option<Url> {
    let absolute = if catalog_path.is_absolute() {
        catalog_path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(catalog_path))
            .unwrap_or_else(|_| catalog_path.to_path_buf())
    };
    let dir = absolute.parent().map(Path::to_path_buf).unwrap_or(absolute);

    Url::from_directory_path(&dir).ok()
}

/// Resolve `path` against `base`.
///
/// Empty input stays empty so callers can reject it. Absolute URLs pass
/// through; without a base, or when the join fails, the input is returned
/// unchanged.
pub fn resolve_locator(path: &str, base: Option<&Url>) -> String {
    if path.is_empty() {
        return String::new();
    }
    let joined = match base {
        Some(base) => base.join(path),
        None => Url::parse(path),
    };
    match joined {
        Ok(url) => url.into(),
        Err(_) => path.to_string(),
    }
}

/// Resolved thumbnail locator, or `placeholder` when the entry has none.
pub fn thumbnail_locator(entry: &CatalogEntry, base: Option<&Url>, placeholder: &str) -> String {
    match entry.thumbnail.as_deref().filter(|t| !t.is_empty()) {
        Some(thumb) => resolve_locator(thumb, base),
        None => placeholder.to_string(),
    }
}
