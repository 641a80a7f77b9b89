//! Panel 3 — Sentiment: mood, score, class counts with a proportional bar.
//!
//! A sentiment `error` renders as a warning banner above whatever counts we
//! do have; sentiment failures are never fatal to the analysis.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use fxlab_core::domain::AnalysisResult;
use fxlab_core::view::SentimentView;

use crate::theme;

const BAR_WIDTH: usize = 40;

pub fn render(f: &mut Frame, area: Rect, result: &AnalysisResult) {
    let view = SentimentView::from_result(result);

    let mut lines: Vec<Line> = vec![Line::from("")];

    if let Some(warning) = &view.warning {
        lines.push(Line::from(Span::styled(
            format!("  ⚠ {warning}"),
            theme::warning(),
        )));
        lines.push(Line::from(""));
    }

    let mood_style = Style::default().fg(theme::mood_color(view.mood));
    lines.push(Line::from(vec![
        Span::raw("  Mood   "),
        Span::styled(format!("{} {}", view.mood.icon(), view.label.as_str()), mood_style),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(view.score_display.clone(), theme::text()),
        Span::styled(format!("   {}", view.impact), theme::text_dim()),
    ]));
    lines.push(Line::from(""));

    if view.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No headlines were classified.",
            theme::muted(),
        )));
    } else {
        lines.push(distribution_bar(&view));
        lines.push(Line::from(""));
        lines.push(count_line("Positive", view.positive, view.positive_frac, theme::POSITIVE));
        lines.push(count_line("Neutral", view.neutral, view.neutral_frac, theme::TEXT_DIM));
        lines.push(count_line("Negative", view.negative, view.negative_frac, theme::NEGATIVE));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} headlines analyzed", view.analyzed),
            theme::muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// One bar, three colored segments sized by class fraction.
fn distribution_bar(view: &SentimentView) -> Line<'static> {
    let (pos, neu, neg) = segment_widths(view.positive_frac, view.negative_frac);

    Line::from(vec![
        Span::raw("  "),
        Span::styled("█".repeat(pos), Style::default().fg(theme::POSITIVE)),
        Span::styled("█".repeat(neu), Style::default().fg(theme::TEXT_DIM)),
        Span::styled("█".repeat(neg), Style::default().fg(theme::NEGATIVE)),
    ])
}

/// Neutral takes the remainder so the three segments always sum to
/// exactly `BAR_WIDTH`, even when the two rounded ends overshoot.
fn segment_widths(positive_frac: f64, negative_frac: f64) -> (usize, usize, usize) {
    let pos = ((positive_frac * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let neg = ((negative_frac * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH - pos);
    (pos, BAR_WIDTH - pos - neg, neg)
}

fn count_line(name: &str, count: u64, frac: f64, color: ratatui::style::Color) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{name:<9}"), Style::default().fg(color)),
        Span::styled(
            format!("{count:>3}  ({:.0}%)", frac * 100.0),
            theme::text(),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_fill_the_bar_exactly() {
        // 41 positive / 39 negative of 80: both halves round up
        // independently (20.5 -> 21, 19.5 -> 20) and would overshoot.
        let (pos, neu, neg) = segment_widths(41.0 / 80.0, 39.0 / 80.0);
        assert_eq!(pos + neu + neg, BAR_WIDTH);
        assert_eq!(neu, 0);

        let (pos, neu, neg) = segment_widths(0.25, 0.25);
        assert_eq!((pos, neu, neg), (10, 20, 10));

        let (pos, neu, neg) = segment_widths(1.0, 0.0);
        assert_eq!((pos, neu, neg), (BAR_WIDTH, 0, 0));

        let (pos, neu, neg) = segment_widths(0.0, 0.0);
        assert_eq!((pos, neu, neg), (0, BAR_WIDTH, 0));
    }
}
