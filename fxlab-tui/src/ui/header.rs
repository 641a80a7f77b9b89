//! Two-line header: current selection plus the request lifecycle badge.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, RequestState};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" FxLab ")
        .title_style(theme::accent_bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let pair_name = app
        .catalog
        .iter()
        .find(|i| i.symbol == app.selection.pair)
        .map(|i| i.name.as_str())
        .unwrap_or("");

    let selection_line = Line::from(vec![
        Span::styled(app.selection.pair.clone(), theme::accent_bold()),
        Span::styled(format!("  {pair_name}"), theme::text_dim()),
        Span::raw("   "),
        Span::styled(app.selection.interval.label(), theme::neutral()),
        Span::styled(" / ", theme::muted()),
        Span::styled(app.selection.period.label(), theme::neutral()),
    ]);

    let (badge, style) = match &app.request {
        RequestState::Idle => ("IDLE", theme::muted()),
        RequestState::Loading => ("LOADING", theme::warning()),
        RequestState::Success(_) => ("OK", theme::positive()),
        RequestState::Failure(_) => ("FAILED", theme::negative()),
    };
    let updated = app
        .last_updated
        .map(|t| format!("updated {}", t.format("%H:%M:%S")))
        .unwrap_or_default();
    let status_line = Line::from(vec![
        Span::styled(format!("[{badge}]"), style),
        Span::raw("  "),
        Span::styled(updated, theme::text_dim()),
    ]);

    f.render_widget(Paragraph::new(vec![selection_line, status_line]), inner);
}
