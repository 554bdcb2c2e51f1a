use std::fmt::Write as _;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::catalog::{self, CatalogOrigin, CatalogSource};
use crate::config;
use crate::transport::{
    ChannelEvent, PlaybackChannel, Severity, TransportController, TransportEvent, UiBinder,
};
use crate::ui;

/// What the loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Reload,
    Quit,
}

/// Main terminal event loop: feeds channel events and key presses through
/// the transport and redraws. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    source: &CatalogSource,
    app: &mut App,
    transport: &mut TransportController<AudioPlayer>,
    events: &Receiver<ChannelEvent>,
) -> Result<(), Box<dyn std::error::Error>> {
    let notice_ttl = Duration::from_millis(settings.ui.notice_ms);
    let mut draw_failed = false;

    loop {
        while let Ok(ev) = events.try_recv() {
            handle_channel_event(ev, app, transport);
        }

        app.expire_notices(Instant::now(), notice_ttl);

        let clock = if settings.ui.show_clock {
            clock_text(&settings.ui.clock_format)
        } else {
            None
        };
        let phase = transport.state().phase.clone();
        if let Err(e) = terminal.draw(|f| ui::draw(f, app, &phase, &settings.ui, clock)) {
            error!(error = %e, "draw failed");
            if !draw_failed {
                draw_failed = true;
                app.show_transient_notice("Display error, see the log for details.", Severity::Error);
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match handle_key_event(key, app, transport) {
                    KeyOutcome::Continue => {}
                    KeyOutcome::Reload => reload(settings, source, app, transport),
                    KeyOutcome::Quit => {
                        info!(
                            source = ?transport.channel().source(),
                            paused = transport.channel().is_paused(),
                            "quit requested"
                        );
                        transport
                            .channel()
                            .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
                        return Ok(());
                    }
                }
            }
        }
    }
}

pub fn handle_channel_event<C: PlaybackChannel>(
    ev: ChannelEvent,
    app: &mut App,
    transport: &mut TransportController<C>,
) {
    if let ChannelEvent::Fault(msg) = &ev {
        app.show_transient_notice(&format!("Audio unavailable: {msg}"), Severity::Error);
        return;
    }
    if let Some(event) = ev.into_transport() {
        transport.dispatch(event, app);
    }
}

/// Apply a key press. Reload and quit need the audio thread and the catalog
/// source, so they are left to the caller.
pub fn handle_key_event<C: PlaybackChannel>(
    key: KeyEvent,
    app: &mut App,
    transport: &mut TransportController<C>,
) -> KeyOutcome {
    // Pause and stop always act on the active entry; the pressed card is
    // only reported.
    let pressed = app
        .selected_entry()
        .map(|e| e.id())
        .or_else(|| transport.state().active().cloned());

    match key.code {
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Char('r') => return KeyOutcome::Reload,
        KeyCode::Char('l') | KeyCode::Right => {
            app.next_tab();
            log_tab(app);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.prev_tab();
            log_tab(app);
        }
        KeyCode::Char('j') | KeyCode::Down => app.next_card(),
        KeyCode::Char('k') | KeyCode::Up => app.prev_card(),
        KeyCode::Enter => {
            // Same as the card's play button: nothing happens while it is disabled.
            if let Some(entry) = app.selected_entry() {
                if app.controls_of(&entry.id()).play {
                    let cue = app.cue(entry);
                    transport.dispatch(TransportEvent::Play(cue), app);
                }
            }
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            if let Some(id) = pressed {
                transport.dispatch(TransportEvent::TogglePause(id), app);
            }
        }
        KeyCode::Char('s') => {
            if let Some(id) = pressed {
                transport.dispatch(TransportEvent::Stop(id), app);
            }
        }
        _ => {}
    }

    KeyOutcome::Continue
}

fn log_tab(app: &App) {
    if let Some(tab) = app.current_tab() {
        debug!(tab = %tab.slug(), entries = tab.entries.len(), "tab selected");
    }
}

/// Stop whatever is playing and swap in a freshly loaded catalog.
fn reload<C: PlaybackChannel>(
    settings: &config::Settings,
    source: &CatalogSource,
    app: &mut App,
    transport: &mut TransportController<C>,
) {
    if let Some(active) = transport.state().active().cloned() {
        transport.dispatch(TransportEvent::Stop(active), app);
    }

    let loaded = catalog::load(
        source,
        Duration::from_secs(settings.audio.fetch_timeout_secs),
    );
    let fell_back = matches!(loaded.origin, CatalogOrigin::Fallback { .. });
    let count = loaded.entries.len();
    app.replace_catalog(loaded);
    info!(%source, count, fell_back, "catalog reloaded");

    if fell_back {
        app.show_transient_notice("Catalog unavailable, showing demo entries.", Severity::Warning);
    } else {
        app.show_transient_notice(&format!("Catalog reloaded: {count} entries."), Severity::Info);
    }
}

/// Format the header clock. An invalid format yields `None` instead of a panic.
pub fn clock_text(format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", chrono::Local::now().format(format)).ok()?;
    Some(out)
}
