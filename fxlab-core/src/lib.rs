//! FXLab Core — domain types, classifiers, API client, panel view models.
//!
//! This crate contains everything the dashboard needs that is not rendering:
//! - Domain types (selection, instruments, the analysis result wire shape)
//! - Classifier functions (raw numbers → categorical labels, pure and total)
//! - The analysis API client behind the `AnalysisApi` trait
//! - The pair catalog provider with its built-in fallback list
//! - Per-panel view models that read a single analysis result

pub mod api;
pub mod catalog;
pub mod classify;
pub mod domain;
pub mod view;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: types that cross the worker channel are Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Selection>();
        require_sync::<domain::Selection>();
        require_send::<domain::Instrument>();
        require_sync::<domain::Instrument>();
        require_send::<domain::AnalysisResult>();
        require_sync::<domain::AnalysisResult>();
        require_send::<api::ApiError>();
        require_sync::<api::ApiError>();
    }
}
