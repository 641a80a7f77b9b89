//! Overlay widgets — error history.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// Error history overlay.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(format!(
            " Error History ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(theme::negative());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No errors recorded.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let start = app.error_scroll;
    let end = (start + visible_height).min(app.error_history.len());

    let mut lines: Vec<Line> = Vec::new();
    for i in start..end {
        let err = &app.error_history[i];
        let is_active = i == app.error_scroll;
        let style = if is_active {
            theme::negative().add_modifier(Modifier::BOLD)
        } else {
            theme::text_dim()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", err.timestamp.format("%H:%M:%S")), theme::muted()),
            Span::styled(format!("[{}] ", err.context), theme::neutral()),
            Span::styled(err.message.clone(), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
