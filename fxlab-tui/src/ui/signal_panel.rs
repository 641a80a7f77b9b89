//! Panel 1 — Signal: the combined recommendation at a glance.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use fxlab_core::domain::AnalysisResult;
use fxlab_core::view::SignalView;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, result: &AnalysisResult) {
    let view = SignalView::from_result(result);

    let signal_style = Style::default()
        .fg(theme::signal_color(view.tone))
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {}", view.pair), theme::accent_bold()),
            Span::styled(format!("   as of {}", view.timestamp), theme::text_dim()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Signal      "),
            Span::styled(view.final_signal.to_string(), signal_style),
        ]),
        Line::from(vec![
            Span::raw("  Confidence  "),
            Span::styled(
                view.confidence_pct.clone(),
                Style::default().fg(theme::tier_color(view.tier)),
            ),
            Span::styled(format!("  ({})", view.tier.as_str()), theme::text_dim()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Technical   "),
            Span::styled(
                view.technical_signal.to_string(),
                Style::default().fg(theme::signal_color(view.technical_tone)),
            ),
            Span::styled(format!("  {}", view.technical_pct), theme::text_dim()),
        ]),
        Line::from(vec![
            Span::raw("  Sentiment   "),
            Span::styled(view.sentiment_display.clone(), theme::neutral()),
        ]),
        Line::from(vec![
            Span::raw("  Close       "),
            Span::styled(view.close_display.clone(), theme::text()),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", view.context_line), theme::muted())),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
