//! Panel 4 — News: headline list with expand/collapse descriptions and the
//! one-line summary box.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use fxlab_core::domain::AnalysisResult;
use fxlab_core::view::NewsView;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, result: &AnalysisResult) {
    let view = NewsView::from_result(result);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(area);

    render_headlines(f, chunks[0], app, &view);
    render_summary(f, chunks[1], &view);
}

fn render_headlines(f: &mut Frame, area: Rect, app: &AppState, view: &NewsView) {
    if view.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("  No recent headlines.", theme::muted())),
        ];
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in view.items.iter().enumerate() {
        let selected = i == app.news.cursor;
        let marker = if selected { "▶ " } else { "  " };
        let title_style = if selected {
            theme::accent().add_modifier(Modifier::BOLD)
        } else {
            theme::text()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, theme::accent()),
            Span::styled(item.title.clone(), title_style),
        ]));
        if let Some(desc) = item.display_description(app.news.is_expanded(i)) {
            lines.push(Line::from(Span::styled(
                format!("    {desc}"),
                theme::text_dim(),
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  j/k move   Enter expand/collapse",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_summary(f: &mut Frame, area: Rect, view: &NewsView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Summary ")
        .title_style(theme::muted());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = vec![Span::styled(view.summary.clone(), theme::text_dim())];
    if let Some(overall) = view.overall {
        spans.push(Span::styled(
            format!("  Overall: {overall}"),
            theme::neutral(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}
