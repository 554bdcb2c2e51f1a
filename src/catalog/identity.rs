//! Stable entry identifiers derived from catalog fields.
//!
//! There is no backing database, so an entry is identified by its
//! `(category, displayName, filename)` triple. The triple is joined with `|`,
//! base64-encoded from its UTF-8 bytes with the URL-safe alphabet, and the
//! padding is dropped. The result is safe inside URLs, attributes and
//! selector-like keys.
//!
//! Two entries with the same triple get the same id. Catalogs are expected to
//! be curated, so such duplicates are indistinguishable rather than rejected.
//! A missing `displayName` contributes an empty field, so it collides with an
//! explicit `""` for the same category and filename.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

use super::model::CatalogEntry;

const FIELD_SEPARATOR: char = '|';

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(String);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the identifier for a raw triple. An absent display name
/// contributes an empty field.
pub fn derive_id(category: &str, display_name: Option<&str>, filename: &str) -> EntryId {
    let joined = format!(
        "{category}{sep}{name}{sep}{filename}",
        sep = FIELD_SEPARATOR,
        name = display_name.unwrap_or_default(),
    );
    EntryId(URL_SAFE_NO_PAD.encode(joined.as_bytes()))
}

impl CatalogEntry {
    pub fn id(&self) -> EntryId {
        derive_id(&self.category, self.display_name.as_deref(), &self.filename)
    }
}
