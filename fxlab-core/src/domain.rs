//! Domain types — selection state and the analysis wire shape.
//!
//! The analysis endpoint is an external collaborator; these types mirror its
//! request/response contract. Every numeric indicator field is optional so a
//! partial server response degrades to an "unknown" rendering instead of a
//! deserialization failure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sampling granularity for the analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Interval {
    #[serde(rename = "1m")]
    M1,
    #[serde(rename = "5m")]
    M5,
    #[serde(rename = "15m")]
    M15,
    #[serde(rename = "30m")]
    M30,
    #[serde(rename = "1h")]
    #[default]
    H1,
    #[serde(rename = "4h")]
    H4,
    #[serde(rename = "1d")]
    D1,
}

impl Interval {
    pub const ALL: [Interval; 7] = [
        Interval::M1,
        Interval::M5,
        Interval::M15,
        Interval::M30,
        Interval::H1,
        Interval::H4,
        Interval::D1,
    ];

    /// Wire value sent to the analysis endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Interval::M1 => "1m",
            Interval::M5 => "5m",
            Interval::M15 => "15m",
            Interval::M30 => "30m",
            Interval::H1 => "1h",
            Interval::H4 => "4h",
            Interval::D1 => "1d",
        }
    }

    /// Human-readable label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            Interval::M1 => "1 Minute",
            Interval::M5 => "5 Minutes",
            Interval::M15 => "15 Minutes",
            Interval::M30 => "30 Minutes",
            Interval::H1 => "1 Hour",
            Interval::H4 => "4 Hours",
            Interval::D1 => "1 Day",
        }
    }

    pub fn next(self) -> Interval {
        let i = Self::ALL.iter().position(|&v| v == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Interval {
        let i = Self::ALL.iter().position(|&v| v == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown interval '{s}' (expected one of 1m 5m 15m 30m 1h 4h 1d)"))
    }
}

/// Lookback window for the analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Period {
    #[serde(rename = "1d")]
    D1,
    #[serde(rename = "5d")]
    D5,
    #[serde(rename = "7d")]
    #[default]
    D7,
    #[serde(rename = "1mo")]
    Mo1,
    #[serde(rename = "3mo")]
    Mo3,
    #[serde(rename = "6mo")]
    Mo6,
    #[serde(rename = "1y")]
    Y1,
}

impl Period {
    pub const ALL: [Period; 7] = [
        Period::D1,
        Period::D5,
        Period::D7,
        Period::Mo1,
        Period::Mo3,
        Period::Mo6,
        Period::Y1,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::D1 => "1d",
            Period::D5 => "5d",
            Period::D7 => "7d",
            Period::Mo1 => "1mo",
            Period::Mo3 => "3mo",
            Period::Mo6 => "6mo",
            Period::Y1 => "1y",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::D1 => "1 Day",
            Period::D5 => "5 Days",
            Period::D7 => "1 Week",
            Period::Mo1 => "1 Month",
            Period::Mo3 => "3 Months",
            Period::Mo6 => "6 Months",
            Period::Y1 => "1 Year",
        }
    }

    pub fn next(self) -> Period {
        let i = Self::ALL.iter().position(|&v| v == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Period {
        let i = Self::ALL.iter().position(|&v| v == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown period '{s}' (expected one of 1d 5d 7d 1mo 3mo 6mo 1y)"))
    }
}

/// What the user has picked. Serializes to the analyze request body as-is.
///
/// Any field change invalidates the current analysis result; the orchestrator
/// tags each outgoing request with a sequence number so responses for a
/// superseded selection are discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub pair: String,
    pub interval: Interval,
    pub period: Period,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            pair: "EURUSD=X".to_string(),
            interval: Interval::default(),
            period: Period::default(),
        }
    }
}

/// A selectable instrument from the pair catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
    /// Display name (wire field is `name`, e.g. "EUR/USD").
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Trading signal as reported by the analysis endpoint.
///
/// Unrecognized wire values land on `Unknown` so a server-side addition never
/// breaks deserialization; classifiers treat it as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    #[default]
    Hold,
    #[serde(other)]
    Unknown,
}

impl Signal {
    pub fn as_str(self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
            Signal::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latest indicator readings. Every field is optional: the classifiers map
/// absent values to a neutral rendering rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Indicators {
    pub close_price: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub ma50: Option<f64>,
    pub ma200: Option<f64>,
}

/// Free-form detail block nested inside the technical analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalDetails {
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalAnalysis {
    pub signal: Signal,
    pub confidence: f64,
    pub details: TechnicalDetails,
    pub indicators: Indicators,
}

/// Sentiment counts plus the aggregate score in [-1, 1].
///
/// `error` is the partial-failure channel: the sentiment layer may fail while
/// the rest of the analysis succeeds, in which case the counts are still
/// rendered and the message becomes a non-fatal warning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentAnalysis {
    pub sentiment_score: Option<f64>,
    pub positive_count: u64,
    pub negative_count: u64,
    pub neutral_count: u64,
    pub total_analyzed: u64,
    pub error: Option<String>,
}

/// The single response object for one selection snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub pair: String,
    /// Server clock echo, displayed verbatim.
    pub timestamp: String,
    pub final_signal: Signal,
    pub confidence: f64,
    pub technical_analysis: TechnicalAnalysis,
    pub sentiment_analysis: SentimentAnalysis,
    pub news_headlines: Vec<String>,
    /// Opaque base64-encoded chart image. Rendered as a placeholder frame in
    /// the terminal, never decoded.
    pub chart: String,
    pub data_points: u64,
    pub period: Period,
    pub interval: Interval,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            pair: String::new(),
            timestamp: String::new(),
            final_signal: Signal::Hold,
            confidence: 0.0,
            technical_analysis: TechnicalAnalysis::default(),
            sentiment_analysis: SentimentAnalysis::default(),
            news_headlines: Vec::new(),
            chart: String::new(),
            data_points: 0,
            period: Period::default(),
            interval: Interval::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_wire_roundtrip() {
        for iv in Interval::ALL {
            let json = serde_json::to_string(&iv).unwrap();
            assert_eq!(json, format!("\"{}\"", iv.as_str()));
            let back: Interval = serde_json::from_str(&json).unwrap();
            assert_eq!(back, iv);
            assert_eq!(iv.as_str().parse::<Interval>().unwrap(), iv);
        }
    }

    #[test]
    fn period_wire_roundtrip() {
        for p in Period::ALL {
            assert_eq!(p.as_str().parse::<Period>().unwrap(), p);
        }
        assert!("2w".parse::<Period>().is_err());
    }

    #[test]
    fn interval_cycles_cover_all_values() {
        let mut iv = Interval::H1;
        for _ in 0..Interval::ALL.len() {
            iv = iv.next();
        }
        assert_eq!(iv, Interval::H1);
        assert_eq!(Interval::M1.prev(), Interval::D1);
    }

    #[test]
    fn default_selection() {
        let sel = Selection::default();
        assert_eq!(sel.pair, "EURUSD=X");
        assert_eq!(sel.interval, Interval::H1);
        assert_eq!(sel.period, Period::D7);
    }

    #[test]
    fn selection_serializes_to_request_body() {
        let body = serde_json::to_value(Selection::default()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"pair": "EURUSD=X", "interval": "1h", "period": "7d"})
        );
    }

    #[test]
    fn unknown_signal_does_not_fail() {
        let sig: Signal = serde_json::from_str("\"STRONG_BUY\"").unwrap();
        assert_eq!(sig, Signal::Unknown);
    }

    #[test]
    fn sparse_result_deserializes() {
        // A minimal response must not fail: every block has defaults.
        let result: AnalysisResult =
            serde_json::from_str(r#"{"pair": "EURUSD=X", "final_signal": "BUY"}"#).unwrap();
        assert_eq!(result.final_signal, Signal::Buy);
        assert!(result.technical_analysis.indicators.rsi.is_none());
        assert!(result.sentiment_analysis.sentiment_score.is_none());
        assert!(result.news_headlines.is_empty());
    }
}
