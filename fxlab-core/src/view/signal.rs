//! Signal panel view model — final signal, confidence, and the echo line.

use crate::classify::{confidence_tier, signal_tone, ConfidenceTier, Tone};
use crate::domain::{AnalysisResult, Signal};
use crate::view::{fmt_or_na, percent_1dp};

#[derive(Debug, Clone)]
pub struct SignalView {
    pub final_signal: Signal,
    pub tone: Tone,
    /// Confidence × 100, one decimal, e.g. "72.5%".
    pub confidence_pct: String,
    pub tier: ConfidenceTier,

    /// Secondary display: the technical layer's own signal and confidence.
    pub technical_signal: Signal,
    pub technical_tone: Tone,
    pub technical_pct: String,

    /// Signed sentiment score percentage ("+12.0%"), or "N/A" when absent.
    pub sentiment_display: String,
    /// Current close price at 5 decimals, or "N/A".
    pub close_display: String,

    pub pair: String,
    pub timestamp: String,
    /// Request echo, e.g. "128 data points • 1h • 7d".
    pub context_line: String,
}

impl SignalView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let tech = &result.technical_analysis;
        let score = result.sentiment_analysis.sentiment_score;

        let sentiment_display = match score.filter(|s| s.is_finite()) {
            Some(s) if s > 0.0 => format!("+{:.1}%", s * 100.0),
            Some(s) => format!("{:.1}%", s * 100.0),
            None => "N/A".to_string(),
        };

        Self {
            final_signal: result.final_signal,
            tone: signal_tone(result.final_signal),
            confidence_pct: percent_1dp(result.confidence),
            tier: confidence_tier(result.confidence),
            technical_signal: tech.signal,
            technical_tone: signal_tone(tech.signal),
            technical_pct: percent_1dp(tech.confidence),
            sentiment_display,
            close_display: fmt_or_na(tech.indicators.close_price, 5),
            pair: result.pair.clone(),
            timestamp: result.timestamp.clone(),
            context_line: format!(
                "{} data points • {} • {}",
                result.data_points, result.interval, result.period
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Indicators, SentimentAnalysis, TechnicalAnalysis};

    fn result() -> AnalysisResult {
        AnalysisResult {
            pair: "EURUSD=X".into(),
            final_signal: Signal::Buy,
            confidence: 0.725,
            technical_analysis: TechnicalAnalysis {
                signal: Signal::Hold,
                confidence: 0.4,
                indicators: Indicators {
                    close_price: Some(1.08551),
                    ..Default::default()
                },
                ..Default::default()
            },
            sentiment_analysis: SentimentAnalysis {
                sentiment_score: Some(0.12),
                ..Default::default()
            },
            data_points: 128,
            ..Default::default()
        }
    }

    #[test]
    fn formats_confidence_and_echo() {
        let view = SignalView::from_result(&result());
        assert_eq!(view.confidence_pct, "72.5%");
        assert_eq!(view.tier, ConfidenceTier::High);
        assert_eq!(view.tone, Tone::Positive);
        assert_eq!(view.technical_tone, Tone::Neutral);
        assert_eq!(view.context_line, "128 data points • 1h • 7d");
    }

    #[test]
    fn sentiment_score_signed() {
        let mut r = result();
        let view = SignalView::from_result(&r);
        assert_eq!(view.sentiment_display, "+12.0%");

        r.sentiment_analysis.sentiment_score = Some(-0.05);
        assert_eq!(SignalView::from_result(&r).sentiment_display, "-5.0%");

        r.sentiment_analysis.sentiment_score = None;
        assert_eq!(SignalView::from_result(&r).sentiment_display, "N/A");
    }

    #[test]
    fn missing_close_renders_na() {
        let mut r = result();
        r.technical_analysis.indicators.close_price = None;
        assert_eq!(SignalView::from_result(&r).close_display, "N/A");
    }
}
