//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the `App` view state using `ratatui`: category tabs,
//! entry cards with their control buttons, the now-playing status and
//! transient notices.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Tabs, Wrap},
};
use std::time::Duration;

use crate::app::{App, Card};
use crate::catalog::CatalogOrigin;
use crate::config::UiSettings;
use crate::transport::{ControlState, Phase, Severity};

const CONTROLS_TEXT: &[(&str, &str)] = &[
    ("h/l", "category"),
    ("j/k", "entry"),
    ("enter", "play"),
    ("space/p", "pause/resume"),
    ("s", "stop"),
    ("r", "reload catalog"),
    ("q", "quit"),
];

const EMPTY_TEXT: &str = "No sounds found.";
const TOAST_WIDTH: u16 = 48;

fn controls_text() -> String {
    CONTROLS_TEXT
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn button(symbol: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled(symbol, Style::default().add_modifier(Modifier::BOLD))
    } else {
        Span::styled(symbol, Style::default().fg(Color::DarkGray))
    }
}

fn control_spans(controls: ControlState) -> Vec<Span<'static>> {
    vec![
        button("▶", controls.play),
        Span::raw(" "),
        button("⏸", controls.pause),
        Span::raw(" "),
        button("■", controls.stop),
    ]
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

fn card_item(card: &Card) -> ListItem<'static> {
    let mut head = vec![
        Span::styled(
            format!("[{}] ", card.badge),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw(card.title.clone()),
        Span::raw("  "),
    ];
    head.extend(control_spans(card.controls));

    let thumb = Line::from(Span::styled(
        format!("    {}", card.thumbnail),
        Style::default().add_modifier(Modifier::DIM),
    ));
    ListItem::new(vec![Line::from(head), thumb])
}

/// Text shown in the status box: label, phase and elapsed time.
fn status_text(app: &App, phase: &Phase) -> String {
    let mut parts: Vec<String> = Vec::new();

    if app.now_playing.is_empty() {
        parts.push(phase.label().to_string());
    } else {
        parts.push(app.now_playing.clone());
        parts.push(phase.label().to_string());
    }

    if phase.active().is_some() {
        if let Some(ref h) = app.playback_handle {
            if let Ok(info) = h.lock() {
                parts.push(format_mmss(info.elapsed));
            }
        }
    }

    if let CatalogOrigin::Fallback { .. } = app.origin {
        parts.push("demo catalog".to_string());
    }

    parts.join(" • ")
}

/// Bottom-right stack of transient notices, newest last.
fn draw_notices(frame: &mut Frame, app: &App, area: Rect) {
    let mut bottom = area.y + area.height;
    for notice in app.notices.iter().rev() {
        let width = TOAST_WIDTH.min(area.width);
        let inner = width.saturating_sub(4).max(1) as usize;
        let lines = notice.message.chars().count().div_ceil(inner).max(1) as u16;
        let height = lines + 2;
        if bottom < area.y + height {
            break;
        }
        bottom -= height;

        let rect = Rect {
            x: area.x + area.width - width,
            y: bottom,
            width,
            height,
        };
        let color = severity_color(notice.severity);
        frame.render_widget(Clear, rect);
        let toast = Paragraph::new(notice.message.as_str())
            .block(
                Block::bordered()
                    .border_style(Style::default().fg(color))
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(toast, rect);
    }
}

/// Render the entire UI into `frame`.
///
/// `clock` is the pre-formatted header clock, or `None` when disabled.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    phase: &Phase,
    ui_settings: &UiSettings,
    clock: Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let mut header_block = Block::default()
        .borders(Borders::ALL)
        .title(" soundshelf ")
        .title_alignment(Alignment::Center);
    if let Some(clock) = clock {
        header_block = header_block.title_bottom(Line::from(format!(" {clock} ")).right_aligned());
    }
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(header_block);
    frame.render_widget(header, chunks[0]);

    // Category tabs
    let titles: Vec<String> = app.tabs.iter().map(|t| t.name.clone()).collect();
    let tabs = Tabs::new(titles)
        .block(Block::bordered().title(" categories "))
        .select(app.selected_tab)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(tabs, chunks[1]);

    // Cards
    let list_block = Block::default().borders(Borders::ALL).title(" entries ");
    if app.is_empty() {
        let empty = Paragraph::new(EMPTY_TEXT)
            .alignment(Alignment::Center)
            .italic()
            .block(list_block);
        frame.render_widget(empty, chunks[2]);
    } else {
        let items: Vec<ListItem> = app.current_cards().iter().map(card_item).collect();
        let list = List::new(items)
            .block(list_block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(Some(app.selected_card));
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    // Status
    let status = Paragraph::new(status_text(app, phase))
        .block(
            Block::bordered()
                .padding(Padding::left(1))
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[3]);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::left(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    draw_notices(frame, app, chunks[2]);
}
