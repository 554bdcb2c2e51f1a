//! Pure transport transitions.
//!
//! `transition` never touches the channel or the UI; it returns what should
//! happen as a list of [`Effect`]s in the order they must be applied.
//!
//! Play and resume requests are asynchronous. The `Playing` transition is only
//! taken when their confirmation arrives, never when the request is issued.
//! There is no cancellation: a confirmation that arrives after a newer stop is
//! still applied, so a stale success can bring an entry back to `Playing`
//! after the user stopped it. Events are applied in arrival order and the last
//! one wins.

use tracing::{debug, error, warn};

use super::binder::Severity;
use super::channel::{PlayOutcome, PlayRequest};
use super::state::{Cue, Phase, TransportState};
use crate::catalog::EntryId;

pub const NOW_PLAYING_PREFIX: &str = "Now playing: ";
pub const PLAY_FAILED_NOTICE: &str =
    "Unable to play. Check the media location or your audio device.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// User asked to play an entry.
    Play(Cue),
    /// User pressed pause on an entry. Acts on whichever entry is active.
    TogglePause(EntryId),
    /// User pressed stop on an entry. Acts on the channel regardless.
    Stop(EntryId),
    PlayResolved { cue: Cue, outcome: PlayOutcome },
    ResumeResolved { entry: EntryId, outcome: PlayOutcome },
    /// The channel reached the end of its media.
    ChannelEnded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetSource(String),
    RequestPlay(PlayRequest),
    Pause,
    SeekToStart,
    /// Empty text clears the label.
    SetLabel(String),
    Notify { message: String, severity: Severity },
    /// Recompute every entry's controls from the new phase.
    BroadcastControls,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TransportState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: &TransportState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }

    fn to(state: TransportState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }
}

pub fn transition(state: &TransportState, event: TransportEvent) -> Transition {
    match event {
        TransportEvent::Play(cue) => request_play(state, cue),
        TransportEvent::PlayResolved { cue, outcome } => play_resolved(state, cue, outcome),
        TransportEvent::TogglePause(entry) => toggle_pause(state, &entry),
        TransportEvent::ResumeResolved { entry, outcome } => resume_resolved(state, entry, outcome),
        TransportEvent::Stop(_) => Transition::to(
            TransportState {
                phase: Phase::Stopped,
                source: state.source.clone(),
            },
            vec![
                Effect::Pause,
                Effect::SeekToStart,
                Effect::SetLabel(String::new()),
                Effect::BroadcastControls,
            ],
        ),
        // Already at the natural end: no rewind.
        TransportEvent::ChannelEnded => Transition::to(
            TransportState {
                phase: Phase::Stopped,
                source: state.source.clone(),
            },
            vec![Effect::SetLabel(String::new()), Effect::BroadcastControls],
        ),
    }
}

fn play_failed(state: &TransportState) -> Transition {
    Transition::to(
        state.clone(),
        vec![Effect::Notify {
            message: PLAY_FAILED_NOTICE.to_string(),
            severity: Severity::Warning,
        }],
    )
}

fn request_play(state: &TransportState, cue: Cue) -> Transition {
    if cue.locator.is_empty() {
        warn!(entry = %cue.entry, title = %cue.title, "play error: missing filename");
        return play_failed(state);
    }

    let mut next = state.clone();
    let mut effects = Vec::with_capacity(2);
    if next.source.as_deref() != Some(cue.locator.as_str()) {
        effects.push(Effect::SetSource(cue.locator.clone()));
        next.source = Some(cue.locator.clone());
    }
    effects.push(Effect::RequestPlay(PlayRequest::Start(cue)));
    Transition::to(next, effects)
}

fn play_resolved(state: &TransportState, cue: Cue, outcome: PlayOutcome) -> Transition {
    match outcome {
        Ok(()) => Transition::to(
            TransportState {
                phase: Phase::Playing(cue.entry),
                source: state.source.clone(),
            },
            vec![
                Effect::SetLabel(format!("{NOW_PLAYING_PREFIX}{}", cue.title)),
                Effect::BroadcastControls,
            ],
        ),
        Err(e) => {
            error!(entry = %cue.entry, locator = %cue.locator, "play error: {e}");
            play_failed(state)
        }
    }
}

fn toggle_pause(state: &TransportState, pressed: &EntryId) -> Transition {
    if state.active().is_some_and(|active| active != pressed) {
        debug!(%pressed, "pause pressed on an inactive entry; acting on the active one");
    }
    match &state.phase {
        Phase::Playing(active) => Transition::to(
            TransportState {
                phase: Phase::Paused(active.clone()),
                source: state.source.clone(),
            },
            vec![Effect::Pause, Effect::BroadcastControls],
        ),
        Phase::Paused(active) => Transition::to(
            state.clone(),
            vec![Effect::RequestPlay(PlayRequest::Resume(active.clone()))],
        ),
        Phase::Stopped => Transition::unchanged(state),
    }
}

fn resume_resolved(state: &TransportState, entry: EntryId, outcome: PlayOutcome) -> Transition {
    match outcome {
        Ok(()) => Transition::to(
            TransportState {
                phase: Phase::Playing(entry),
                source: state.source.clone(),
            },
            vec![Effect::BroadcastControls],
        ),
        // Resume failures stay silent and the transport stays paused.
        Err(e) => {
            debug!(%entry, "resume failed: {e}");
            Transition::unchanged(state)
        }
    }
}
