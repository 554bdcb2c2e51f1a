use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, info, warn};

use crate::config::AudioSettings;
use crate::transport::{ChannelError, ChannelEvent, PlayOutcome};

use super::media;
use super::sink::create_sink;
use super::types::{AudioCmd, PlaybackHandle};

type FetchFn = fn(&str, Duration) -> Result<Arc<[u8]>, ChannelError>;

/// Media bound to the channel.
struct Bound {
    locator: String,
    media: Result<Arc<[u8]>, ChannelError>,
    sink: Option<Sink>,
}

/// State owned by the audio thread.
struct Channel {
    stream: Result<OutputStream, ChannelError>,
    bound: Option<Bound>,
    paused: bool,
    started_at: Option<Instant>,
    accumulated: Duration,
    fetch_timeout: Duration,
    fetch: FetchFn,
    info: PlaybackHandle,
}

impl Channel {
    fn new(
        stream: Result<OutputStream, ChannelError>,
        fetch_timeout: Duration,
        info: PlaybackHandle,
    ) -> Self {
        Self {
            stream,
            bound: None,
            paused: true,
            started_at: None,
            accumulated: Duration::ZERO,
            fetch_timeout,
            fetch: media::fetch,
            info,
        }
    }

    fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }

    fn publish(&self) {
        if let Ok(mut info) = self.info.lock() {
            info.source = self.bound.as_ref().map(|b| b.locator.clone());
            info.elapsed = self.elapsed();
            info.paused = self.paused;
        }
    }

    fn set_source(&mut self, locator: String) {
        if let Some(old) = self.bound.take().and_then(|b| b.sink) {
            old.stop();
        }
        self.paused = true;
        self.started_at = None;
        self.accumulated = Duration::ZERO;

        let media = (self.fetch)(&locator, self.fetch_timeout);
        if let Err(e) = &media {
            warn!(%locator, "source not loaded: {e}");
        }
        let mut bound = Bound {
            locator,
            media,
            sink: None,
        };
        // Fetch and decode failures surface on the next play request.
        if bound.media.is_ok() {
            bound.sink = self.build_sink(&mut bound).ok();
        }
        self.bound = Some(bound);
    }

    fn build_sink(&self, bound: &mut Bound) -> Result<Sink, ChannelError> {
        if bound.media.is_err() {
            // Retry a failed fetch once per play request; the source stays bound.
            bound.media = (self.fetch)(&bound.locator, self.fetch_timeout);
        }
        let bytes = bound.media.as_ref().map_err(Clone::clone)?;
        let stream = self.stream.as_ref().map_err(Clone::clone)?;
        create_sink(stream, &bound.locator, bytes)
    }

    fn play(&mut self) -> PlayOutcome {
        let mut bound = self.bound.take().ok_or(ChannelError::NoSource)?;
        // A drained sink restarts from the beginning, like a finished media element.
        let needs_rebuild = bound.sink.as_ref().is_none_or(|s| s.empty());
        if needs_rebuild {
            match self.build_sink(&mut bound) {
                Ok(sink) => {
                    bound.sink = Some(sink);
                    self.accumulated = Duration::ZERO;
                }
                Err(e) => {
                    bound.sink = None;
                    self.bound = Some(bound);
                    return Err(e);
                }
            }
        }
        if let Some(sink) = &bound.sink {
            sink.play();
        }
        self.bound = Some(bound);
        if self.paused {
            self.paused = false;
            self.started_at = Some(Instant::now());
        }
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = self.bound.as_ref().and_then(|b| b.sink.as_ref()) {
            sink.pause();
        }
        if let Some(st) = self.started_at.take() {
            self.accumulated += st.elapsed();
        }
        self.paused = true;
    }

    fn seek_to_start(&mut self) {
        let Some(mut bound) = self.bound.take() else {
            return;
        };
        if let Some(old) = bound.sink.take() {
            old.stop();
        }
        self.accumulated = Duration::ZERO;
        if bound.media.is_err() {
            // Nothing to rewind; the next play retries the fetch.
            self.bound = Some(bound);
            return;
        }
        match self.build_sink(&mut bound) {
            Ok(sink) => {
                if !self.paused {
                    sink.play();
                    self.started_at = Some(Instant::now());
                }
                bound.sink = Some(sink);
            }
            Err(e) => debug!(locator = %bound.locator, "rewind could not rebuild sink: {e}"),
        }
        self.bound = Some(bound);
    }

    /// True once when a playing sink runs dry.
    fn take_ended(&mut self) -> bool {
        let drained = self
            .bound
            .as_ref()
            .and_then(|b| b.sink.as_ref())
            .is_some_and(Sink::empty);
        if !self.paused && drained {
            self.pause();
            return true;
        }
        false
    }

    /// Run one command. Returns `false` once the thread should exit.
    ///
    /// A sink that drained since the last tick is reported before the
    /// command runs, so a following pause cannot hide the end.
    fn handle(&mut self, cmd: AudioCmd, events: &Sender<ChannelEvent>) -> bool {
        if self.take_ended() {
            let _ = events.send(ChannelEvent::Ended);
        }
        match cmd {
            AudioCmd::SetSource(locator) => self.set_source(locator),
            AudioCmd::Play(request) => {
                let outcome = self.play();
                if let Err(e) = &outcome {
                    debug!(?request, "play rejected: {e}");
                }
                let _ = events.send(ChannelEvent::PlayResolved { request, outcome });
            }
            AudioCmd::Pause => self.pause(),
            AudioCmd::SeekToStart => self.seek_to_start(),
            AudioCmd::Quit { fade_out_ms } => {
                self.fade_out(fade_out_ms);
                self.pause();
                return false;
            }
        }
        true
    }

    fn fade_out(&self, fade_out_ms: u64) {
        let Some(sink) = self.bound.as_ref().and_then(|b| b.sink.as_ref()) else {
            return;
        };
        if !self.paused && fade_out_ms > 0 {
            let steps: u64 = 20;
            let step_ms = (fade_out_ms / steps).max(1);
            for step in 1..=steps {
                let t = step as f32 / steps as f32;
                sink.set_volume(1.0 - t);
                thread::sleep(Duration::from_millis(step_ms));
            }
        }
        sink.stop();
    }
}

fn open_stream() -> Result<OutputStream, ChannelError> {
    let mut stream = OutputStreamBuilder::open_default_stream()
        .map_err(|e| ChannelError::NoDevice(e.to_string()))?;
    // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
    // but noisy for a TUI app.
    stream.log_on_drop(false);
    Ok(stream)
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<ChannelEvent>,
    info: PlaybackHandle,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = open_stream();
        match &stream {
            Ok(_) => info!("audio output opened"),
            Err(e) => {
                error!("{e}");
                let _ = events.send(ChannelEvent::Fault(e.to_string()));
            }
        }

        let mut channel = Channel::new(
            stream,
            Duration::from_secs(audio_settings.fetch_timeout_secs),
            info,
        );

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => {
                    if !channel.handle(cmd, &events) {
                        channel.publish();
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    if channel.take_ended() {
                        let _ = events.send(ChannelEvent::Ended);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
            channel.publish();
        }
    })
}
