use crate::catalog::EntryId;

/// Everything the transport needs to start an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub entry: EntryId,
    /// Resolved media locator. Empty means the entry is not playable.
    pub locator: String,
    pub title: String,
}

/// Playback phase. The active entry lives inside the phase, so there is no
/// way to represent two active entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Stopped,
    Playing(EntryId),
    Paused(EntryId),
}

impl Phase {
    pub fn active(&self) -> Option<&EntryId> {
        match self {
            Phase::Stopped => None,
            Phase::Playing(id) | Phase::Paused(id) => Some(id),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Stopped => "Stopped",
            Phase::Playing(_) => "Playing",
            Phase::Paused(_) => "Paused",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportState {
    pub phase: Phase,
    /// Locator currently bound to the channel. Kept after stop so replaying
    /// the same entry does not rebind.
    pub source: Option<String>,
}

impl TransportState {
    pub fn active(&self) -> Option<&EntryId> {
        self.phase.active()
    }
}
