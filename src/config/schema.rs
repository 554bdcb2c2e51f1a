use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/soundshelf/config.toml` or `~/.config/soundshelf/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SOUNDSHELF__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog document: a local path or an `http(s)` URL.
    /// Relative media locators resolve against its directory.
    pub source: String,
    /// Shown for entries without a thumbnail.
    pub placeholder_thumbnail: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source: "config.json".to_string(),
            placeholder_thumbnail: "https://via.placeholder.com/300x200?text=No+Image".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
    /// Timeout for fetching remote media and remote catalogs (seconds).
    pub fetch_timeout_secs: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            quit_fade_out_ms: 500,
            fetch_timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    pub show_clock: bool,
    /// `chrono` strftime format for the header clock.
    pub clock_format: String,
    /// How long transient notices stay on screen (milliseconds).
    pub notice_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ soundshelf ~ ".to_string(),
            show_clock: true,
            clock_format: "%Y-%m-%d %H:%M:%S".to_string(),
            notice_ms: 3500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive; `RUST_LOG` wins when set.
    pub level: String,
    /// Log file override. Defaults to the XDG state directory.
    pub file: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
