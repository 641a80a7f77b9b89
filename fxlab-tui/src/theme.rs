//! Neon-on-dark theme tokens for the FxLab TUI.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, highlights)
//! - **Positive**: Neon green (buy signals, positive sentiment)
//! - **Negative**: Hot pink (sell signals, negative sentiment)
//! - **Warning**: Neon orange (hold signals, alerts)
//! - **Neutral**: Cool purple (secondary info)
//! - **Muted**: Steel blue (hints, disabled text)

use ratatui::style::{Color, Modifier, Style};

use fxlab_core::classify::{ConfidenceTier, MaTrend, Mood, RsiZone, Tone};

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT: Color = Color::White;
pub const TEXT_DIM: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Color for a signal tone. Hold renders as a warning orange, not gray,
/// so the headline signal always stands out.
pub fn signal_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => POSITIVE,
        Tone::Negative => NEGATIVE,
        Tone::Neutral => WARNING,
    }
}

/// Color for the three-tier sentiment mood beside the icon.
pub fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Positive => POSITIVE,
        Mood::Negative => NEGATIVE,
        Mood::Neutral => TEXT_DIM,
    }
}

pub fn tier_color(tier: ConfidenceTier) -> Color {
    match tier {
        ConfidenceTier::High => POSITIVE,
        ConfidenceTier::Medium => WARNING,
        ConfidenceTier::Low => NEGATIVE,
    }
}

/// RSI zone: overbought reads as risk, oversold as opportunity.
pub fn rsi_zone_color(zone: RsiZone) -> Color {
    match zone {
        RsiZone::Overbought => NEGATIVE,
        RsiZone::Oversold => POSITIVE,
        RsiZone::Neutral => MUTED,
    }
}

pub fn ma_trend_color(trend: MaTrend) -> Color {
    match trend {
        MaTrend::Bullish => POSITIVE,
        MaTrend::Bearish => NEGATIVE,
        MaTrend::Mixed => WARNING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hold_is_orange_not_gray() {
        assert_eq!(signal_color(Tone::Neutral), WARNING);
    }

    #[test]
    fn neutral_mood_stays_dim() {
        assert_eq!(mood_color(Mood::Neutral), TEXT_DIM);
        assert_ne!(mood_color(Mood::Neutral), signal_color(Tone::Neutral));
    }

    #[test]
    fn rsi_zone_colors() {
        assert_eq!(rsi_zone_color(RsiZone::Overbought), NEGATIVE);
        assert_eq!(rsi_zone_color(RsiZone::Oversold), POSITIVE);
        assert_eq!(rsi_zone_color(RsiZone::Neutral), MUTED);
    }
}
