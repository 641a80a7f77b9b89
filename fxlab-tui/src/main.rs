//! FxLab TUI — six-panel terminal dashboard for FX signal analysis.
//!
//! Panels:
//! 1. Signal — combined recommendation with confidence
//! 2. Indicators — RSI, MACD, moving averages, signal reasons
//! 3. Sentiment — news mood, score, class distribution
//! 4. News — headlines with expandable descriptions
//! 5. Chart — summary of the server-rendered chart image
//! 6. Help — keyboard shortcuts

mod app;
mod input;
mod persistence;
mod theme;
mod ui;
mod worker;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use fxlab_core::api::HttpApi;

use crate::app::AppState;
use crate::worker::WorkerCommand;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let api_url = std::env::var("FXLAB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fxlab")
        .join("state.json");

    // Load persisted state
    let persisted = persistence::load(&state_path);

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();

    // Spawn worker over the HTTP backend
    let api = Arc::new(HttpApi::new(&api_url));
    let worker_handle = worker::spawn_worker(cmd_rx, resp_tx, api);

    // Build app state
    let mut app = AppState::new(cmd_tx.clone(), resp_rx, state_path.clone());
    persistence::apply(&mut app, persisted);

    // Catalog first, then an analysis of the restored selection.
    let _ = cmd_tx.send(WorkerCommand::FetchCatalog);
    app.request_analysis();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            app.handle_worker_response(resp);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
