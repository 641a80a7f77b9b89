//! Keyboard input dispatch — overlays first, then global keys, then the
//! active panel's handler.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Signal; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Indicators; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Sentiment; return; }
        KeyCode::Char('4') => { app.active_panel = Panel::News; return; }
        KeyCode::Char('5') => { app.active_panel = Panel::Chart; return; }
        KeyCode::Char('6') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('r') => {
            app.request_analysis();
            return;
        }
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
            return;
        }
        // Selection cycling re-analyzes immediately.
        KeyCode::Char('p') => { app.cycle_pair(1); return; }
        KeyCode::Char('P') => { app.cycle_pair(-1); return; }
        KeyCode::Char('i') => { app.cycle_interval(true); return; }
        KeyCode::Char('I') => { app.cycle_interval(false); return; }
        KeyCode::Char('o') => { app.cycle_period(true); return; }
        KeyCode::Char('O') => { app.cycle_period(false); return; }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::News => handle_news_key(app, key),
        // The remaining panels are display only.
        _ => {}
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_news_key(app: &mut AppState, key: KeyEvent) {
    let headline_count = app
        .request
        .result()
        .map(|r| r.news_headlines.len())
        .unwrap_or(0);

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if headline_count > 0 && app.news.cursor + 1 < headline_count {
                app.news.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.news.cursor = app.news.cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if headline_count > 0 {
                let cursor = app.news.cursor;
                app.news.toggle(cursor);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::WorkerResponse;
    use fxlab_core::domain::AnalysisResult;
    use std::path::PathBuf;

    fn test_app() -> AppState {
        let (tx, _rx) = std::sync::mpsc::channel();
        let (_tx2, rx2) = std::sync::mpsc::channel();
        AppState::new(tx, rx2, PathBuf::from("."))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_key() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn number_keys_switch_panels() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.active_panel, Panel::News);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.active_panel, Panel::Signal);
    }

    #[test]
    fn release_events_ignored() {
        let mut app = test_app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.running);
    }

    #[test]
    fn refresh_key_requests_analysis() {
        let mut app = test_app();
        let before = app.request_seq;
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.request_seq, before + 1);
    }

    #[test]
    fn interval_keys_cycle_selection() {
        let mut app = test_app();
        let start = app.selection.interval;
        handle_key(&mut app, press(KeyCode::Char('i')));
        assert_eq!(app.selection.interval, start.next());
        handle_key(&mut app, press(KeyCode::Char('I')));
        assert_eq!(app.selection.interval, start);
    }

    #[test]
    fn error_overlay_consumes_input() {
        let mut app = test_app();
        app.overlay = Overlay::ErrorHistory;
        // 'q' closes the overlay instead of quitting.
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn news_cursor_stays_in_bounds() {
        let mut app = test_app();
        app.active_panel = Panel::News;
        app.request_analysis();
        let result = AnalysisResult {
            news_headlines: vec!["a - b".into(), "c - d".into()],
            ..AnalysisResult::default()
        };
        app.handle_worker_response(WorkerResponse::AnalysisComplete {
            seq: app.request_seq,
            result: Box::new(result),
        });

        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.news.cursor, 1);
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.news.cursor, 0);
    }

    #[test]
    fn news_enter_toggles_expansion() {
        let mut app = test_app();
        app.active_panel = Panel::News;
        app.request_analysis();
        let result = AnalysisResult {
            news_headlines: vec!["a - b".into()],
            ..AnalysisResult::default()
        };
        app.handle_worker_response(WorkerResponse::AnalysisComplete {
            seq: app.request_seq,
            result: Box::new(result),
        });

        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.news.is_expanded(0));
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.news.is_expanded(0));
    }
}
