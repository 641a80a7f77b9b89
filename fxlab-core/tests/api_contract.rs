//! Wire-contract tests: the full analyze response shape, partial responses,
//! and the catalog provider against mock backends.

use fxlab_core::api::{AnalysisApi, ApiError, GENERIC_ANALYZE_ERROR};
use fxlab_core::catalog::load_catalog;
use fxlab_core::domain::{AnalysisResult, Instrument, Interval, Period, Selection, Signal};
use fxlab_core::view::{IndicatorsView, NewsView, SentimentView, SignalView};

/// A representative full response from the analysis service.
const FULL_RESPONSE: &str = r#"{
    "pair": "EURUSD=X",
    "timestamp": "2025-06-02T14:31:07.123456",
    "final_signal": "BUY",
    "confidence": 0.653,
    "technical_analysis": {
        "signal": "BUY",
        "confidence": 0.5,
        "details": {
            "reasons": ["RSI oversold", "MACD bullish crossover"],
            "rsi": 27.4,
            "macd": 0.0012
        },
        "indicators": {
            "rsi": 27.4,
            "macd": 0.0012,
            "close_price": 1.08551,
            "ma50": 1.08213,
            "ma200": 1.07944
        }
    },
    "sentiment_analysis": {
        "sentiment_score": 0.18,
        "positive_count": 3,
        "negative_count": 0,
        "neutral_count": 2,
        "total_analyzed": 5
    },
    "news_headlines": [
        "ECB hints at cuts - Markets react cautiously",
        "Dollar steadies ahead of payrolls - Traders await the jobs report for direction"
    ],
    "chart": "iVBORw0KGgoAAAANSUhEUg==",
    "data_points": 168,
    "period": "7d",
    "interval": "1h"
}"#;

#[test]
fn full_response_deserializes() {
    let result: AnalysisResult = serde_json::from_str(FULL_RESPONSE).unwrap();
    assert_eq!(result.pair, "EURUSD=X");
    assert_eq!(result.final_signal, Signal::Buy);
    assert_eq!(result.interval, Interval::H1);
    assert_eq!(result.period, Period::D7);
    assert_eq!(result.data_points, 168);
    assert_eq!(result.technical_analysis.indicators.rsi, Some(27.4));
    assert_eq!(result.technical_analysis.details.reasons.len(), 2);
    assert_eq!(result.sentiment_analysis.positive_count, 3);
    assert!(!result.chart.is_empty());
}

#[test]
fn views_read_the_same_result() {
    let result: AnalysisResult = serde_json::from_str(FULL_RESPONSE).unwrap();

    let signal = SignalView::from_result(&result);
    assert_eq!(signal.confidence_pct, "65.3%");
    assert_eq!(signal.close_display, "1.08551");

    let indicators = IndicatorsView::from_result(&result);
    assert_eq!(indicators.rsi_display, "27.4");
    assert_eq!(indicators.reasons, result.technical_analysis.details.reasons);

    let sentiment = SentimentView::from_result(&result);
    assert_eq!(sentiment.total, 5);
    assert!(!sentiment.is_empty());
    assert!(sentiment.warning.is_none());

    let news = NewsView::from_result(&result);
    assert_eq!(news.items.len(), 2);
    assert_eq!(news.items[0].title, "ECB hints at cuts");
}

#[test]
fn partial_sentiment_failure_is_not_fatal() {
    let json = r#"{
        "pair": "EURUSD=X",
        "final_signal": "HOLD",
        "sentiment_analysis": {
            "sentiment_score": 0,
            "positive_count": 0,
            "negative_count": 0,
            "neutral_count": 0,
            "error": "news provider quota exceeded"
        }
    }"#;
    let result: AnalysisResult = serde_json::from_str(json).unwrap();
    let view = SentimentView::from_result(&result);
    assert!(view.is_empty());
    assert_eq!(view.warning.as_deref(), Some("news provider quota exceeded"));
}

#[test]
fn failure_messages_extracted_or_generic() {
    let with_detail = ApiError::AnalysisFailed {
        detail: "rate limited".into(),
    };
    assert_eq!(with_detail.user_message(), "rate limited");

    let without_detail = ApiError::Http { status: 502 };
    assert_eq!(without_detail.user_message(), GENERIC_ANALYZE_ERROR);
}

struct UnreachableApi;

impl AnalysisApi for UnreachableApi {
    fn name(&self) -> &str {
        "unreachable"
    }
    fn pairs(&self) -> Result<Vec<Instrument>, ApiError> {
        Err(ApiError::NetworkUnreachable("connection refused".into()))
    }
    fn analyze(&self, _selection: &Selection) -> Result<AnalysisResult, ApiError> {
        Err(ApiError::NetworkUnreachable("connection refused".into()))
    }
}

#[test]
fn catalog_never_empty() {
    let catalog = load_catalog(&UnreachableApi);
    assert!(catalog.len() >= 4);
    let symbols: Vec<_> = catalog.iter().map(|i| i.symbol.as_str()).collect();
    assert!(symbols.contains(&"EURUSD=X"));
}
