//! Indicators panel view model — RSI, MACD, moving averages, and the
//! technical layer's reasons listed verbatim.

use crate::classify::{
    confidence_tier, macd_bias, ma_trend, rsi_gauge, rsi_zone, signal_tone, ConfidenceTier,
    MaTrend, RsiZone, Tone,
};
use crate::domain::{AnalysisResult, Signal};
use crate::view::{fmt_or_na, percent_1dp};

#[derive(Debug, Clone)]
pub struct IndicatorsView {
    pub rsi_display: String,
    pub rsi_zone: RsiZone,
    /// Gauge magnitude in [0, 100].
    pub rsi_gauge: f64,

    pub macd_display: String,
    /// None renders as N/A.
    pub macd_bias: Option<MaTrend>,

    pub close_display: String,
    pub ma50_display: String,
    pub ma200_display: String,
    pub ma_trend: MaTrend,

    pub technical_signal: Signal,
    pub technical_tone: Tone,
    pub technical_pct: String,
    pub technical_tier: ConfidenceTier,
    /// Analysis factors in the order the server gave them.
    pub reasons: Vec<String>,
}

impl IndicatorsView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let tech = &result.technical_analysis;
        let ind = &tech.indicators;

        Self {
            rsi_display: fmt_or_na(ind.rsi, 1),
            rsi_zone: rsi_zone(ind.rsi),
            rsi_gauge: rsi_gauge(ind.rsi),
            macd_display: fmt_or_na(ind.macd, 4),
            macd_bias: macd_bias(ind.macd),
            close_display: fmt_or_na(ind.close_price, 5),
            ma50_display: fmt_or_na(ind.ma50, 5),
            ma200_display: fmt_or_na(ind.ma200, 5),
            ma_trend: ma_trend(ind.close_price, ind.ma50, ind.ma200),
            technical_signal: tech.signal,
            technical_tone: signal_tone(tech.signal),
            technical_pct: percent_1dp(tech.confidence),
            technical_tier: confidence_tier(tech.confidence),
            reasons: tech.details.reasons.clone(),
        }
    }
}
