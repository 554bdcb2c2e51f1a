use std::env;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::catalog::{self, CatalogSource};
use crate::transport::{ChannelEvent, TransportController};

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_warning) = settings::load_settings();
    let _log_guard = match logging::init(&settings.log) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("soundshelf: logging disabled: {e}");
            None
        }
    };
    if let Some(msg) = settings_warning {
        warn!("{msg}");
    }
    info!("soundshelf v{} starting", env!("CARGO_PKG_VERSION"));

    let raw_source = env::args()
        .nth(1)
        .unwrap_or_else(|| settings.catalog.source.clone());
    let source = CatalogSource::parse(&raw_source);

    let loaded = catalog::load(
        &source,
        Duration::from_secs(settings.audio.fetch_timeout_secs),
    );
    let mut app = App::new(loaded, &settings.catalog.placeholder_thumbnail);

    let (events_tx, events_rx) = mpsc::channel::<ChannelEvent>();
    let audio_player = AudioPlayer::new(settings.audio.clone(), events_tx);
    app.set_playback_handle(audio_player.playback_handle());
    let mut transport = TransportController::new(audio_player);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &source,
        &mut app,
        &mut transport,
        &events_rx,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("soundshelf exiting");
    run_result
}
