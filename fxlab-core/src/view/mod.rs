//! Presentation adapters — per-panel view models.
//!
//! Each view is a pure read of one analysis result: no I/O, no mutation of
//! shared state. The rendering layer (TUI panels, CLI report) consumes these
//! and adds colors/layout on top.

pub mod indicators;
pub mod news;
pub mod sentiment;
pub mod signal;

pub use indicators::IndicatorsView;
pub use news::{NewsItem, NewsView, COLLAPSED_DESCRIPTION_CHARS};
pub use sentiment::SentimentView;
pub use signal::SignalView;

/// Format a [0, 1] confidence as a percentage with one decimal, e.g. "72.5%".
pub fn percent_1dp(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Format an optional number with fixed decimals, "N/A" when absent or NaN.
pub fn fmt_or_na(value: Option<f64>, decimals: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:.decimals$}"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(percent_1dp(0.725), "72.5%");
        assert_eq!(percent_1dp(0.0), "0.0%");
        assert_eq!(percent_1dp(1.0), "100.0%");
    }

    #[test]
    fn missing_numbers_render_na() {
        assert_eq!(fmt_or_na(None, 2), "N/A");
        assert_eq!(fmt_or_na(Some(f64::NAN), 2), "N/A");
        assert_eq!(fmt_or_na(Some(1.08551), 5), "1.08551");
        assert_eq!(fmt_or_na(Some(48.237), 1), "48.2");
    }
}
