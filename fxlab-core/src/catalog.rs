//! Pair catalog provider.
//!
//! Runs once at dashboard mount. A catalog failure is recovered locally with
//! the built-in list — it is never surfaced as an error, and the selector is
//! never empty.

use crate::api::AnalysisApi;
use crate::domain::Instrument;

/// Built-in pairs used when the remote catalog is unavailable.
pub fn fallback_instruments() -> Vec<Instrument> {
    [
        ("EURUSD=X", "EUR/USD", "Euro to US Dollar"),
        ("GBPUSD=X", "GBP/USD", "British Pound to US Dollar"),
        ("USDJPY=X", "USD/JPY", "US Dollar to Japanese Yen"),
        ("AUDUSD=X", "AUD/USD", "Australian Dollar to US Dollar"),
    ]
    .into_iter()
    .map(|(symbol, name, description)| Instrument {
        symbol: symbol.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// Fetch the selectable instrument list, substituting the fallback list on
/// failure or an empty response. Order is preserved; duplicates by symbol are
/// dropped. No retry, no refresh.
pub fn load_catalog(api: &dyn AnalysisApi) -> Vec<Instrument> {
    let fetched = match api.pairs() {
        Ok(pairs) if !pairs.is_empty() => pairs,
        _ => fallback_instruments(),
    };
    dedup_by_symbol(fetched)
}

fn dedup_by_symbol(instruments: Vec<Instrument>) -> Vec<Instrument> {
    let mut seen = std::collections::HashSet::new();
    instruments
        .into_iter()
        .filter(|i| seen.insert(i.symbol.clone()))
        .collect()
}
