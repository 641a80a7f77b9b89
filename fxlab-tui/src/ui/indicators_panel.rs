//! Panel 2 — Indicators: RSI gauge, MACD, moving averages, and the reasons
//! the technical layer gave for its signal.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;

use fxlab_core::domain::AnalysisResult;
use fxlab_core::view::IndicatorsView;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, result: &AnalysisResult) {
    let view = IndicatorsView::from_result(result);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(1),
        ])
        .split(area);

    render_rsi_gauge(f, chunks[0], &view);
    render_readings(f, chunks[1], &view);
    render_reasons(f, chunks[2], &view);
}

fn render_rsi_gauge(f: &mut Frame, area: Rect, view: &IndicatorsView) {
    let color = theme::rsi_zone_color(view.rsi_zone);
    let gauge = Gauge::default()
        .label(format!("RSI {} ({})", view.rsi_display, view.rsi_zone.as_str()))
        .ratio((view.rsi_gauge / 100.0).clamp(0.0, 1.0))
        .gauge_style(Style::default().fg(color));
    f.render_widget(gauge, area);
}

fn render_readings(f: &mut Frame, area: Rect, view: &IndicatorsView) {
    let macd_note = view
        .macd_bias
        .map(|b| {
            Span::styled(
                format!("  ({})", b.as_str()),
                Style::default().fg(theme::ma_trend_color(b)),
            )
        })
        .unwrap_or_else(|| Span::styled("  (N/A)", theme::text_dim()));

    let lines = vec![
        Line::from(vec![
            Span::raw("  MACD   "),
            Span::styled(view.macd_display.clone(), theme::text()),
            macd_note,
        ]),
        Line::from(vec![
            Span::raw("  Close  "),
            Span::styled(view.close_display.clone(), theme::text()),
        ]),
        Line::from(vec![
            Span::raw("  MA50   "),
            Span::styled(view.ma50_display.clone(), theme::text()),
            Span::raw("   MA200  "),
            Span::styled(view.ma200_display.clone(), theme::text()),
        ]),
        Line::from(vec![
            Span::raw("  Trend  "),
            Span::styled(
                view.ma_trend.as_str(),
                Style::default().fg(theme::ma_trend_color(view.ma_trend)),
            ),
        ]),
        Line::from(vec![
            Span::raw("  Signal "),
            Span::styled(
                view.technical_signal.to_string(),
                Style::default().fg(theme::signal_color(view.technical_tone)),
            ),
            Span::styled(
                format!("  {} ({})", view.technical_pct, view.technical_tier.as_str()),
                theme::text_dim(),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_reasons(f: &mut Frame, area: Rect, view: &IndicatorsView) {
    let mut lines = vec![Line::from(Span::styled("  Reasons", theme::accent_bold()))];
    if view.reasons.is_empty() {
        lines.push(Line::from(Span::styled(
            "    (none reported)",
            theme::text_dim(),
        )));
    } else {
        for reason in &view.reasons {
            lines.push(Line::from(vec![
                Span::styled("    • ", theme::muted()),
                Span::styled(reason.clone(), theme::text()),
            ]));
        }
    }
    f.render_widget(Paragraph::new(lines), area);
}
