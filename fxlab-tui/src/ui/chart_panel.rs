//! Panel 5 — Chart: the analysis service renders the chart image server-side,
//! so the terminal shows a framed summary of what the image contains instead
//! of decoding it.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use fxlab_core::classify::signal_tone;
use fxlab_core::domain::AnalysisResult;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, result: &AnalysisResult) {
    if result.chart.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("  Chart not available.", theme::muted())),
        ];
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    // Base64 inflates by 4/3; report the approximate decoded size.
    let approx_bytes = result.chart.len() * 3 / 4;
    let tone = signal_tone(result.final_signal);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(result.pair.clone(), theme::accent_bold()),
            Span::styled(
                format!("   {} / {}", result.interval.label(), result.period.label()),
                theme::neutral(),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Rendered signal overlay: "),
            Span::styled(
                result.final_signal.to_string(),
                Style::default()
                    .fg(theme::signal_color(tone))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  Candles with Close, MA50, MA200 and RSI sub-plot over {} data points", result.data_points),
            theme::text_dim(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  Chart image attached ({approx_bytes} bytes). View it in the web dashboard."),
            theme::muted(),
        )),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
