//! App state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use fxlab_core::domain::Selection;

use crate::app::{AppState, Panel};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub selection: Selection,
    pub active_panel: Panel,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            active_panel: Panel::Signal,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        selection: app.selection.clone(),
        active_panel: app.active_panel,
    }
}

/// Apply persisted state to AppState.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.selection = state.selection;
    app.active_panel = state.active_panel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxlab_core::domain::{Interval, Period};

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("fxlab_persist_test");
        let path = dir.join("state.json");

        let state = PersistedState {
            selection: Selection {
                pair: "GBPUSD=X".into(),
                interval: Interval::M15,
                period: Period::Mo1,
            },
            active_panel: Panel::News,
        };

        save(&path, &state).unwrap();
        let loaded = load(&path);
        assert_eq!(loaded.selection.pair, "GBPUSD=X");
        assert_eq!(loaded.selection.interval, Interval::M15);
        assert_eq!(loaded.selection.period, Period::Mo1);
        assert_eq!(loaded.active_panel, Panel::News);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let loaded = load(Path::new("/nonexistent/fxlab/state.json"));
        assert_eq!(loaded.selection, Selection::default());
        assert_eq!(loaded.active_panel, Panel::Signal);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = std::env::temp_dir().join("fxlab_persist_corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("state.json");
        std::fs::write(&path, "{not json").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.selection, Selection::default());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
