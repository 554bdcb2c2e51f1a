//! The playback channel seen from the transport.
//!
//! Commands go in synchronously; results of play requests and end-of-media
//! come back later as [`ChannelEvent`]s.

use thiserror::Error;

use super::machine::TransportEvent;
use super::state::Cue;
use crate::catalog::EntryId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("no audio output device: {0}")]
    NoDevice(String),
    #[error("no media is bound to the channel")]
    NoSource,
    #[error("failed to fetch {locator}: {reason}")]
    Fetch { locator: String, reason: String },
    #[error("failed to decode {locator}: {reason}")]
    Decode { locator: String, reason: String },
    #[error("audio thread is not running")]
    Disconnected,
}

pub type PlayOutcome = Result<(), ChannelError>;

/// What a play request was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayRequest {
    /// Start `cue` from the bound source.
    Start(Cue),
    /// Resume the paused channel on behalf of `entry`.
    Resume(EntryId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    PlayResolved {
        request: PlayRequest,
        outcome: PlayOutcome,
    },
    /// Media ran out naturally.
    Ended,
    /// The channel could not initialise; play requests will be rejected.
    Fault(String),
}

impl ChannelEvent {
    /// The transport event carried by this channel event, if any.
    pub fn into_transport(self) -> Option<TransportEvent> {
        match self {
            ChannelEvent::PlayResolved {
                request: PlayRequest::Start(cue),
                outcome,
            } => Some(TransportEvent::PlayResolved { cue, outcome }),
            ChannelEvent::PlayResolved {
                request: PlayRequest::Resume(entry),
                outcome,
            } => Some(TransportEvent::ResumeResolved { entry, outcome }),
            ChannelEvent::Ended => Some(TransportEvent::ChannelEnded),
            ChannelEvent::Fault(_) => None,
        }
    }
}

/// The single shared audio output.
pub trait PlaybackChannel {
    /// Bind a new source. Playback position resets to the start.
    fn set_source(&mut self, locator: &str);
    /// Ask the channel to play. The outcome arrives as
    /// [`ChannelEvent::PlayResolved`] carrying `request`.
    fn play(&mut self, request: PlayRequest);
    fn pause(&mut self);
    fn seek_to_start(&mut self);
    fn is_paused(&self) -> bool;
    /// Locator the channel is currently bound to, if any.
    fn source(&self) -> Option<String>;
}
