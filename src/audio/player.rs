use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::warn;

use crate::config::AudioSettings;
use crate::transport::{ChannelError, ChannelEvent, PlayRequest, PlaybackChannel};

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo};

pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    events: Sender<ChannelEvent>,
    playback: PlaybackHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Spawn the audio thread. Play outcomes and end-of-media are posted to
    /// `events`.
    pub fn new(audio_settings: AudioSettings, events: Sender<ChannelEvent>) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let audio_handle =
            spawn_audio_thread(rx, events.clone(), playback_info.clone(), audio_settings);

        Self {
            tx,
            events,
            playback: playback_info,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    pub fn playback_handle(&self) -> PlaybackHandle {
        self.playback.clone()
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }

    fn send_or_warn(&self, cmd: AudioCmd) {
        if let Err(e) = self.send(cmd) {
            warn!(cmd = ?e.0, "audio thread is gone");
        }
    }
}

impl PlaybackChannel for AudioPlayer {
    fn set_source(&mut self, locator: &str) {
        self.send_or_warn(AudioCmd::SetSource(locator.to_string()));
    }

    fn play(&mut self, request: PlayRequest) {
        // Without a thread nobody would answer; reject the request ourselves.
        if let Err(mpsc::SendError(AudioCmd::Play(request))) = self.send(AudioCmd::Play(request)) {
            let _ = self.events.send(ChannelEvent::PlayResolved {
                request,
                outcome: Err(ChannelError::Disconnected),
            });
        }
    }

    fn pause(&mut self) {
        self.send_or_warn(AudioCmd::Pause);
    }

    fn seek_to_start(&mut self) {
        self.send_or_warn(AudioCmd::SeekToStart);
    }

    fn is_paused(&self) -> bool {
        self.playback.lock().map(|info| info.paused).unwrap_or(true)
    }

    fn source(&self) -> Option<String> {
        self.playback.lock().ok().and_then(|info| info.source.clone())
    }
}
