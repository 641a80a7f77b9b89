//! Classifier functions — raw numbers and counts to categorical labels.
//!
//! Every function here is pure, total, and never panics: absent or
//! non-finite input degrades to the neutral category.
//!
//! Note the deliberate asymmetry in the sentiment classifiers: the label is
//! five-tier (±0.1 and ±0.3 thresholds) while the icon and color use only the
//! coarser ±0.1 split. The upstream product behaves this way; do not "fix" it
//! here without product confirmation.

use std::fmt;

use crate::domain::Signal;

/// Coarse direction used for styling a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

/// BUY styles affirmative, SELL cautionary, everything else (HOLD, unknown
/// wire values) neutral.
pub fn signal_tone(signal: Signal) -> Tone {
    match signal {
        Signal::Buy => Tone::Positive,
        Signal::Sell => Tone::Negative,
        Signal::Hold | Signal::Unknown => Tone::Neutral,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceTier::High => "High",
            ConfidenceTier::Medium => "Medium",
            ConfidenceTier::Low => "Low",
        }
    }
}

/// Tier boundaries are inclusive at the lower bound: 0.70 is High, 0.50 is
/// Medium.
pub fn confidence_tier(confidence: f64) -> ConfidenceTier {
    if confidence >= 0.7 {
        ConfidenceTier::High
    } else if confidence >= 0.5 {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    pub fn as_str(self) -> &'static str {
        match self {
            RsiZone::Overbought => "Overbought",
            RsiZone::Oversold => "Oversold",
            RsiZone::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for RsiZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RSI above 70 is overbought, below 30 oversold; missing reads as neutral.
pub fn rsi_zone(rsi: Option<f64>) -> RsiZone {
    match finite(rsi) {
        Some(v) if v > 70.0 => RsiZone::Overbought,
        Some(v) if v < 30.0 => RsiZone::Oversold,
        _ => RsiZone::Neutral,
    }
}

/// Magnitude for the RSI progress gauge: `min(rsi, 100)`, missing → 0.
pub fn rsi_gauge(rsi: Option<f64>) -> f64 {
    finite(rsi).map_or(0.0, |v| v.min(100.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaTrend {
    Bullish,
    Bearish,
    Mixed,
}

impl MaTrend {
    pub fn as_str(self) -> &'static str {
        match self {
            MaTrend::Bullish => "Bullish",
            MaTrend::Bearish => "Bearish",
            MaTrend::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for MaTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bullish iff close > ma50 > ma200, bearish iff close < ma50 < ma200.
/// Any missing value reads as Mixed.
pub fn ma_trend(close: Option<f64>, ma50: Option<f64>, ma200: Option<f64>) -> MaTrend {
    match (finite(close), finite(ma50), finite(ma200)) {
        (Some(c), Some(m50), Some(m200)) => {
            if c > m50 && m50 > m200 {
                MaTrend::Bullish
            } else if c < m50 && m50 < m200 {
                MaTrend::Bearish
            } else {
                MaTrend::Mixed
            }
        }
        _ => MaTrend::Mixed,
    }
}

/// Direction of the MACD line: positive reads bullish, non-positive bearish.
/// Missing yields None (rendered as N/A).
pub fn macd_bias(macd: Option<f64>) -> Option<MaTrend> {
    finite(macd).map(|v| if v > 0.0 { MaTrend::Bullish } else { MaTrend::Bearish })
}

/// Five-tier sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl SentimentLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "Very Positive",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::VeryNegative => "Very Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn sentiment_label(score: Option<f64>) -> SentimentLabel {
    match finite(score) {
        Some(s) if s > 0.3 => SentimentLabel::VeryPositive,
        Some(s) if s > 0.1 => SentimentLabel::Positive,
        Some(s) if s < -0.3 => SentimentLabel::VeryNegative,
        Some(s) if s < -0.1 => SentimentLabel::Negative,
        _ => SentimentLabel::Neutral,
    }
}

/// Three-tier mood for icon/color styling. This is the coarse ±0.1 split; it
/// intentionally collapses the label's Very Positive/Very Negative tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    pub fn icon(self) -> &'static str {
        match self {
            Mood::Positive => "😊",
            Mood::Negative => "😟",
            Mood::Neutral => "😐",
        }
    }
}

pub fn sentiment_mood(score: Option<f64>) -> Mood {
    match finite(score) {
        Some(s) if s > 0.1 => Mood::Positive,
        Some(s) if s < -0.1 => Mood::Negative,
        _ => Mood::Neutral,
    }
}

/// One-line note on how sentiment feeds the trading signal.
pub fn sentiment_impact(score: Option<f64>) -> &'static str {
    match sentiment_mood(score) {
        Mood::Positive => "Positive sentiment supports bullish signals",
        Mood::Negative => "Negative sentiment supports bearish signals",
        Mood::Neutral => "Neutral sentiment has minimal impact on signals",
    }
}

/// Split a headline of the form "title - description" on the FIRST " - ".
/// The remainder keeps any later separators; an empty remainder reads as no
/// description.
pub fn split_headline(headline: &str) -> (&str, Option<&str>) {
    match headline.split_once(" - ") {
        Some((title, rest)) if !rest.is_empty() => (title, Some(rest)),
        _ => (headline, None),
    }
}

/// Shorten `text` to at most `max_chars` characters plus a trailing ellipsis.
/// Character-based, so multi-byte text never splits a code point.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max_chars).collect();
        out.push_str("...");
        out
    }
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}
