//! Panel 6 — Help: keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-6", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Selection");
    key(&mut lines, "p / P", "Next / previous currency pair");
    key(&mut lines, "i / I", "Next / previous interval");
    key(&mut lines, "o / O", "Next / previous period");
    key(&mut lines, "r", "Re-run the analysis");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 4 — News");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "Enter / Space", "Expand or collapse the description");
    lines.push(Line::from(""));

    section(&mut lines, "Diagnostics");
    key(&mut lines, "e", "Open error history overlay");
    key(&mut lines, "Esc / q (in overlay)", "Close the overlay");
    lines.push(Line::from(""));

    section(&mut lines, "Reading the Signal");
    key(&mut lines, "BUY / SELL / HOLD", "Combined technical + sentiment recommendation");
    key(&mut lines, "Confidence", "High ≥ 70%, Medium ≥ 50%, Low below");
    key(&mut lines, "RSI", "Overbought above 70, oversold below 30");

    f.render_widget(Paragraph::new(lines), area);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
