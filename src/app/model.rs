//! Application model types: `App`, `Card`, `Notice`.
//!
//! The `App` struct holds the loaded catalog grouped into tabs, the cursor,
//! and everything the transport pushes into the view: per-entry controls,
//! the now-playing label and transient notices.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use url::Url;

use crate::audio::PlaybackHandle;
use crate::catalog::{
    CatalogEntry, CatalogOrigin, CategoryGroup, EntryId, LoadedCatalog, group_by_category,
    resolve_locator, thumbnail_locator,
};
use crate::transport::{ControlState, Cue, Severity, UiBinder};

/// Render-ready view of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: EntryId,
    pub title: String,
    pub badge: &'static str,
    pub thumbnail: String,
    pub controls: ControlState,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

/// The main application model.
pub struct App {
    pub entries: Vec<CatalogEntry>,
    pub tabs: Vec<CategoryGroup>,
    pub origin: CatalogOrigin,
    base: Option<Url>,
    placeholder_thumbnail: String,

    pub selected_tab: usize,
    pub selected_card: usize,

    pub controls: HashMap<EntryId, ControlState>,
    pub now_playing: String,
    pub notices: Vec<Notice>,

    pub playback_handle: Option<PlaybackHandle>,
}

impl App {
    /// Create a new `App` showing `catalog`.
    pub fn new(catalog: LoadedCatalog, placeholder_thumbnail: &str) -> Self {
        let mut app = Self {
            entries: Vec::new(),
            tabs: Vec::new(),
            origin: CatalogOrigin::Loaded,
            base: None,
            placeholder_thumbnail: placeholder_thumbnail.to_string(),
            selected_tab: 0,
            selected_card: 0,
            controls: HashMap::new(),
            now_playing: String::new(),
            notices: Vec::new(),
            playback_handle: None,
        };
        app.replace_catalog(catalog);
        app
    }

    /// Swap in a freshly loaded catalog. Every control starts stopped and
    /// the cursor returns to the first card.
    pub fn replace_catalog(&mut self, catalog: LoadedCatalog) {
        self.tabs = group_by_category(&catalog.entries);
        self.controls = catalog
            .entries
            .iter()
            .map(|e| (e.id(), ControlState::STOPPED))
            .collect();
        self.entries = catalog.entries;
        self.origin = catalog.origin;
        self.base = catalog.base;
        self.selected_tab = 0;
        self.selected_card = 0;
        self.now_playing.clear();
    }

    /// Attach a `PlaybackHandle` used to observe playback progress.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    /// True when there is nothing to show and the empty state should render.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn current_tab(&self) -> Option<&CategoryGroup> {
        self.tabs.get(self.selected_tab)
    }

    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        self.current_tab()
            .and_then(|tab| tab.entries.get(self.selected_card))
    }

    /// Everything the transport needs to play `entry`.
    pub fn cue(&self, entry: &CatalogEntry) -> Cue {
        Cue {
            entry: entry.id(),
            locator: resolve_locator(&entry.filename, self.base.as_ref()),
            title: entry.title().to_string(),
        }
    }

    pub fn controls_of(&self, id: &EntryId) -> ControlState {
        self.controls.get(id).copied().unwrap_or_default()
    }

    /// Cards of the current tab, in catalog order.
    pub fn current_cards(&self) -> Vec<Card> {
        self.current_tab()
            .map(|tab| {
                tab.entries
                    .iter()
                    .map(|e| self.render_entry(e, self.controls_of(&e.id())))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.selected_tab = (self.selected_tab + 1) % self.tabs.len();
            self.selected_card = 0;
        }
    }

    pub fn prev_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.selected_tab = (self.selected_tab + self.tabs.len() - 1) % self.tabs.len();
            self.selected_card = 0;
        }
    }

    /// Move to the next card in the current tab. Wraps around.
    pub fn next_card(&mut self) {
        let len = self.current_tab().map_or(0, |t| t.entries.len());
        if len > 0 {
            self.selected_card = (self.selected_card + 1) % len;
        }
    }

    /// Move to the previous card in the current tab. Wraps around.
    pub fn prev_card(&mut self) {
        let len = self.current_tab().map_or(0, |t| t.entries.len());
        if len > 0 {
            self.selected_card = (self.selected_card + len - 1) % len;
        }
    }

    /// Drop notices older than `ttl`.
    pub fn expire_notices(&mut self, now: Instant, ttl: Duration) {
        self.notices
            .retain(|n| now.saturating_duration_since(n.shown_at) < ttl);
    }
}

impl UiBinder for App {
    type Card = Card;

    fn render_entry(&self, entry: &CatalogEntry, controls: ControlState) -> Card {
        Card {
            id: entry.id(),
            title: entry.title().to_string(),
            badge: entry.kind.label(),
            thumbnail: thumbnail_locator(entry, self.base.as_ref(), &self.placeholder_thumbnail),
            controls,
        }
    }

    fn update_controls(&mut self, entry: &EntryId, controls: ControlState) {
        if let Some(c) = self.controls.get_mut(entry) {
            *c = controls;
        }
    }

    fn update_all_controls(&mut self, controls: ControlState) {
        for c in self.controls.values_mut() {
            *c = controls;
        }
    }

    fn set_now_playing_label(&mut self, text: &str) {
        self.now_playing = text.to_string();
    }

    fn show_transient_notice(&mut self, message: &str, severity: Severity) {
        self.notices.push(Notice {
            message: message.to_string(),
            severity,
            shown_at: Instant::now(),
        });
    }
}
