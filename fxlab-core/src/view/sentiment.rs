//! Sentiment panel view model.
//!
//! A zero total renders the empty-data view; a sentiment-layer error message
//! is a non-fatal warning shown alongside the counts, never instead of them.

use crate::classify::{sentiment_impact, sentiment_label, sentiment_mood, Mood, SentimentLabel};
use crate::domain::AnalysisResult;

#[derive(Debug, Clone)]
pub struct SentimentView {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
    /// positive + neutral + negative (not the server's total_analyzed echo).
    pub total: u64,

    /// Proportional bar segment sizes; each is count/total, 0 when total is 0.
    pub positive_frac: f64,
    pub neutral_frac: f64,
    pub negative_frac: f64,

    /// Five-tier label.
    pub label: SentimentLabel,
    /// Three-tier mood driving icon and color only.
    pub mood: Mood,
    /// "Score: 12.0%", or "Score: N/A" when absent.
    pub score_display: String,
    pub impact: &'static str,
    pub analyzed: u64,
    /// Sentiment-layer error, surfaced as a warning banner.
    pub warning: Option<String>,
}

impl SentimentView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let s = &result.sentiment_analysis;
        let total = s.positive_count + s.neutral_count + s.negative_count;
        let score = s.sentiment_score;

        let score_display = match score.filter(|v| v.is_finite()) {
            Some(v) => format!("Score: {:.1}%", v * 100.0),
            None => "Score: N/A".to_string(),
        };

        Self {
            positive: s.positive_count,
            neutral: s.neutral_count,
            negative: s.negative_count,
            total,
            positive_frac: fraction(s.positive_count, total),
            neutral_frac: fraction(s.neutral_count, total),
            negative_frac: fraction(s.negative_count, total),
            label: sentiment_label(score),
            mood: sentiment_mood(score),
            score_display,
            impact: sentiment_impact(score),
            analyzed: s.total_analyzed,
            warning: s.error.clone(),
        }
    }

    /// True when there is nothing to break down (empty-data view).
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

fn fraction(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
