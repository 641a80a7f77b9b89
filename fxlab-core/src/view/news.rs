//! News panel view model — headline split, truncation, and the summary line.

use crate::classify::{split_headline, truncate};
use crate::domain::AnalysisResult;

/// Collapsed descriptions in the news list are shortened to this many
/// characters. (Other surfaces in the product truncate at 100; the list view
/// uses 80.)
pub const COLLAPSED_DESCRIPTION_CHARS: usize = 80;

#[derive(Debug, Clone)]
pub struct NewsItem {
    pub title: String,
    pub description: Option<String>,
}

impl NewsItem {
    /// Description as shown: full when expanded, truncated when collapsed.
    pub fn display_description(&self, expanded: bool) -> Option<String> {
        self.description.as_ref().map(|d| {
            if expanded {
                d.clone()
            } else {
                truncate(d, COLLAPSED_DESCRIPTION_CHARS)
            }
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewsView {
    /// Headlines in server order.
    pub items: Vec<NewsItem>,
    /// "5 articles analyzed for sentiment impact on EURUSD=X."
    pub summary: String,
    /// Overall market sentiment by score sign, when a score is present.
    pub overall: Option<&'static str>,
}

impl NewsView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let items = result
            .news_headlines
            .iter()
            .map(|headline| {
                let (title, description) = split_headline(headline);
                NewsItem {
                    title: title.to_string(),
                    description: description.map(str::to_string),
                }
            })
            .collect::<Vec<_>>();

        let overall = result
            .sentiment_analysis
            .sentiment_score
            .filter(|s| s.is_finite())
            .map(|s| {
                if s > 0.0 {
                    "Positive"
                } else if s < 0.0 {
                    "Negative"
                } else {
                    "Neutral"
                }
            });

        let summary = format!(
            "{} articles analyzed for sentiment impact on {}.",
            items.len(),
            result.pair
        );

        Self {
            items,
            summary,
            overall,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SentimentAnalysis;

    #[test]
    fn splits_and_truncates() {
        let result = AnalysisResult {
            pair: "EURUSD=X".into(),
            news_headlines: vec![
                "ECB hints at cuts - Markets react cautiously".into(),
                "Plain headline".into(),
            ],
            ..Default::default()
        };
        let view = NewsView::from_result(&result);
        assert_eq!(view.items[0].title, "ECB hints at cuts");
        assert_eq!(
            view.items[0].description.as_deref(),
            Some("Markets react cautiously")
        );
        assert!(view.items[1].description.is_none());
        assert_eq!(view.summary, "2 articles analyzed for sentiment impact on EURUSD=X.");
    }

    #[test]
    fn collapsed_description_is_shortened() {
        let long = "x".repeat(120);
        let item = NewsItem {
            title: "t".into(),
            description: Some(long.clone()),
        };
        let collapsed = item.display_description(false).unwrap();
        assert_eq!(collapsed.chars().count(), COLLAPSED_DESCRIPTION_CHARS + 3);
        assert!(collapsed.ends_with("..."));
        assert_eq!(item.display_description(true).unwrap(), long);
    }

    #[test]
    fn overall_label_follows_score_sign() {
        let mut result = AnalysisResult {
            sentiment_analysis: SentimentAnalysis {
                sentiment_score: Some(0.05),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(NewsView::from_result(&result).overall, Some("Positive"));

        result.sentiment_analysis.sentiment_score = Some(-0.05);
        assert_eq!(NewsView::from_result(&result).overall, Some("Negative"));

        result.sentiment_analysis.sentiment_score = None;
        assert_eq!(NewsView::from_result(&result).overall, None);
    }
}
