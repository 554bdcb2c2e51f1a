use serde::{Deserialize, Deserializer};

/// Title shown for entries without a `displayName`.
pub const UNTITLED: &str = "Untitled";

/// Badge kind of an entry. Purely cosmetic; both kinds play the same way.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum EntryKind {
    #[default]
    Sound,
    Song,
}

impl EntryKind {
    /// Lowercase label used for the badge.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Sound => "sound",
            EntryKind::Song => "song",
        }
    }

    /// Parse a raw `type` value. Matching is case-insensitive and anything
    /// other than `song` is a `sound`.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("song") {
            EntryKind::Song
        } else {
            EntryKind::Sound
        }
    }
}

fn kind_from_optional_tag<'de, D>(de: D) -> Result<EntryKind, D::Error>
where
    D: Deserializer<'de>,
{
    let tag: Option<String> = Option::deserialize(de)?;
    Ok(tag.as_deref().map(EntryKind::from_tag).unwrap_or_default())
}

/// One playable item as declared in the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Media locator, resolved against the catalog base before use.
    pub filename: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "kind_from_optional_tag")]
    pub kind: EntryKind,
    pub category: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl CatalogEntry {
    pub fn new(filename: &str, display_name: Option<&str>, kind: EntryKind, category: &str) -> Self {
        Self {
            filename: filename.to_string(),
            display_name: display_name.map(str::to_string),
            kind,
            category: category.to_string(),
            thumbnail: None,
        }
    }

    /// Display name, or `Untitled` when none was given.
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(UNTITLED)
    }
}
