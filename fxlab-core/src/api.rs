//! Analysis API client — trait seam plus the reqwest implementation.
//!
//! The `AnalysisApi` trait abstracts over the remote analysis service so the
//! TUI worker and the CLI can swap in mock implementations for tests. The
//! client performs exactly one request per call: no retries and no polling.
//! A transport timeout surfaces as a failure like any other error.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{AnalysisResult, Instrument, Selection};

/// Fallback message shown when a failed analyze call carries no detail field.
pub const GENERIC_ANALYZE_ERROR: &str = "Failed to analyze forex pair";

/// Structured error types for the analysis endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("analysis failed: {detail}")]
    AnalysisFailed { detail: String },

    #[error("response format changed: {0}")]
    ResponseFormat(String),

    #[error("api error: {0}")]
    Other(String),
}

impl ApiError {
    /// The message shown in the dashboard's Failure state: the server's
    /// detail field verbatim when present, else the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::AnalysisFailed { detail } => detail.clone(),
            _ => GENERIC_ANALYZE_ERROR.to_string(),
        }
    }
}

/// Structured error payload from the analysis service.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PairsResponse {
    pairs: Vec<Instrument>,
}

/// Trait seam over the remote analysis service.
pub trait AnalysisApi: Send + Sync {
    /// Human-readable name of this backend.
    fn name(&self) -> &str;

    /// Fetch the instrument catalog in display order.
    fn pairs(&self) -> Result<Vec<Instrument>, ApiError>;

    /// Run one analysis for the given selection snapshot.
    fn analyze(&self, selection: &Selection) -> Result<AnalysisResult, ApiError>;
}

/// HTTP client for the analysis service.
pub struct HttpApi {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpApi {
    /// `base_url` is the API root, e.g. `http://localhost:8000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    fn transport_error(e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout(e.to_string())
        } else if e.is_connect() {
            ApiError::NetworkUnreachable(e.to_string())
        } else {
            ApiError::Other(e.to_string())
        }
    }
}

impl AnalysisApi for HttpApi {
    fn name(&self) -> &str {
        "fx_analysis_http"
    }

    fn pairs(&self) -> Result<Vec<Instrument>, ApiError> {
        let url = format!("{}/fx/pairs", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(Self::transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let body: PairsResponse = resp
            .json()
            .map_err(|e| ApiError::ResponseFormat(e.to_string()))?;
        Ok(body.pairs)
    }

    fn analyze(&self, selection: &Selection) -> Result<AnalysisResult, ApiError> {
        let url = format!("{}/fx/analyze", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(selection)
            .send()
            .map_err(Self::transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            // Pull the human-readable detail out of the structured payload if
            // the server provided one.
            let body: ErrorBody = resp.json().unwrap_or_default();
            return Err(match body.detail {
                Some(detail) => ApiError::AnalysisFailed { detail },
                None => ApiError::Http {
                    status: status.as_u16(),
                },
            });
        }

        resp.json()
            .map_err(|e| ApiError::ResponseFormat(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_message_passes_through_verbatim() {
        let err = ApiError::AnalysisFailed {
            detail: "rate limited".to_string(),
        };
        assert_eq!(err.user_message(), "rate limited");
    }

    #[test]
    fn non_detail_errors_use_generic_fallback() {
        assert_eq!(
            ApiError::Http { status: 500 }.user_message(),
            GENERIC_ANALYZE_ERROR
        );
        assert_eq!(
            ApiError::Timeout("deadline".into()).user_message(),
            GENERIC_ANALYZE_ERROR
        );
        assert_eq!(
            ApiError::NetworkUnreachable("refused".into()).user_message(),
            GENERIC_ANALYZE_ERROR
        );
    }

    #[test]
    fn error_body_tolerates_missing_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Analysis failed: boom"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("Analysis failed: boom"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let api = HttpApi::new("http://localhost:8000/api/");
        assert_eq!(api.base_url, "http://localhost:8000/api");
    }
}
