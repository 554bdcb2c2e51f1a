//! Audio-related small types and handles.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::transport::PlayRequest;

#[derive(Debug)]
pub enum AudioCmd {
    /// Bind a new source; the sink is rebuilt paused at the start.
    SetSource(String),
    /// Start or resume the bound source and report the outcome.
    Play(PlayRequest),
    Pause,
    /// Rewind the bound source, keeping the paused/playing state.
    SeekToStart,
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

#[derive(Debug, Clone)]
/// Runtime channel information shared with the UI.
pub struct PlaybackInfo {
    /// Locator bound to the channel (if any).
    pub source: Option<String>,
    /// Elapsed playback time of the bound source.
    pub elapsed: Duration,
    pub paused: bool,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            source: None,
            elapsed: Duration::ZERO,
            paused: true,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
