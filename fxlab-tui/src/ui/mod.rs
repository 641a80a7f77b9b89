//! Top-level UI layout — header, active panel, one-line status bar.

pub mod chart_panel;
pub mod header;
pub mod help_panel;
pub mod indicators_panel;
pub mod news_panel;
pub mod overlays;
pub mod sentiment_panel;
pub mod signal_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel, RequestState};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: header + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    header::render(f, chunks[0], app);
    draw_panel(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    // Overlays on top.
    match &app.overlay {
        Overlay::ErrorHistory => overlays::render_error_history(f, chunks[1], app),
        Overlay::None => {}
    }
}

/// Draw the active panel with its border. Panels other than Help only have
/// content once a request has resolved; until then the lifecycle placeholder
/// fills the frame.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if panel == Panel::Help {
        help_panel::render(f, inner, app);
        return;
    }

    match &app.request {
        RequestState::Idle => render_placeholder(f, inner, "Press r to analyze.", theme::muted()),
        RequestState::Loading => render_placeholder(
            f,
            inner,
            &format!("Analyzing {}...", app.selection.pair),
            theme::accent(),
        ),
        RequestState::Failure(message) => render_failure(f, inner, message),
        RequestState::Success(result) => match panel {
            Panel::Signal => signal_panel::render(f, inner, result),
            Panel::Indicators => indicators_panel::render(f, inner, result),
            Panel::Sentiment => sentiment_panel::render(f, inner, result),
            Panel::News => news_panel::render(f, inner, app, result),
            Panel::Chart => chart_panel::render(f, inner, result),
            Panel::Help => unreachable!(),
        },
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, message: &str, style: ratatui::style::Style) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), style)),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_failure(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme::negative())),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to retry, or e to open the error history.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
