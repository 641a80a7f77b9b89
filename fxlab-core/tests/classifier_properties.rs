//! Property tests for classifier totality and boundary behavior.
//!
//! Uses proptest to verify:
//! 1. Classifiers are total — no input panics, including NaN/infinite values
//! 2. The RSI gauge magnitude stays in [0, 100]
//! 3. MA trend categories are mutually exclusive and exhaustive
//! 4. The five-tier sentiment label never disagrees in direction with the
//!    three-tier mood
//! 5. Truncation respects the character budget and marks shortened text

use proptest::prelude::*;

use fxlab_core::classify::{
    confidence_tier, ma_trend, rsi_gauge, rsi_zone, sentiment_label, sentiment_mood,
    split_headline, truncate, MaTrend, Mood, RsiZone, SentimentLabel,
};

fn arb_maybe_f64() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(f64::NAN)),
        Just(Some(f64::INFINITY)),
        Just(Some(f64::NEG_INFINITY)),
        (-1e6..1e6_f64).prop_map(Some),
    ]
}

proptest! {
    /// rsi_zone is total and only ever crosses zones at 30/70.
    #[test]
    fn rsi_zone_total(rsi in arb_maybe_f64()) {
        let zone = rsi_zone(rsi);
        match rsi.filter(|v| v.is_finite()) {
            Some(v) if v > 70.0 => prop_assert_eq!(zone, RsiZone::Overbought),
            Some(v) if v < 30.0 => prop_assert_eq!(zone, RsiZone::Oversold),
            _ => prop_assert_eq!(zone, RsiZone::Neutral),
        }
    }

    /// The gauge magnitude never exceeds 100 for in-domain RSI values and
    /// falls back to 0 for missing input.
    #[test]
    fn rsi_gauge_bounded(rsi in 0.0..150.0_f64) {
        let g = rsi_gauge(Some(rsi));
        prop_assert!((0.0..=100.0).contains(&g));
    }

    /// Bullish and Bearish are mutually exclusive; everything else is Mixed.
    #[test]
    fn ma_trend_exclusive(
        close in arb_maybe_f64(),
        ma50 in arb_maybe_f64(),
        ma200 in arb_maybe_f64(),
    ) {
        let trend = ma_trend(close, ma50, ma200);
        if let (Some(c), Some(m50), Some(m200)) = (
            close.filter(|v| v.is_finite()),
            ma50.filter(|v| v.is_finite()),
            ma200.filter(|v| v.is_finite()),
        ) {
            match trend {
                MaTrend::Bullish => prop_assert!(c > m50 && m50 > m200),
                MaTrend::Bearish => prop_assert!(c < m50 && m50 < m200),
                MaTrend::Mixed => prop_assert!(!(c > m50 && m50 > m200) && !(c < m50 && m50 < m200)),
            }
        } else {
            prop_assert_eq!(trend, MaTrend::Mixed);
        }
    }

    /// The fine-grained label and the coarse mood never point in opposite
    /// directions; the mood only collapses tiers.
    #[test]
    fn label_and_mood_agree_in_direction(score in arb_maybe_f64()) {
        let label = sentiment_label(score);
        let mood = sentiment_mood(score);
        match label {
            SentimentLabel::VeryPositive | SentimentLabel::Positive => {
                prop_assert_eq!(mood, Mood::Positive)
            }
            SentimentLabel::VeryNegative | SentimentLabel::Negative => {
                prop_assert_eq!(mood, Mood::Negative)
            }
            SentimentLabel::Neutral => prop_assert_eq!(mood, Mood::Neutral),
        }
    }

    /// confidence_tier is total over any float.
    #[test]
    fn confidence_tier_total(c in proptest::num::f64::ANY) {
        let _ = confidence_tier(c);
    }

    /// Truncation never exceeds the budget plus the ellipsis, and shortened
    /// text always ends with the ellipsis.
    #[test]
    fn truncate_respects_budget(text in ".{0,200}", max in 0usize..120) {
        let out = truncate(&text, max);
        let in_chars = text.chars().count();
        if in_chars <= max {
            prop_assert_eq!(out, text);
        } else {
            prop_assert_eq!(out.chars().count(), max + 3);
            prop_assert!(out.ends_with("..."));
        }
    }

    /// Splitting then rejoining with the separator reproduces the headline.
    #[test]
    fn split_headline_lossless(title in "[^-]{1,40}", desc in ".{1,80}") {
        prop_assume!(!desc.starts_with(' '));
        prop_assume!(!desc.is_empty());
        let headline = format!("{title} - {desc}");
        let (t, d) = split_headline(&headline);
        prop_assert_eq!(format!("{t} - {}", d.unwrap()), headline);
    }
}
