//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The worker thread communicates via channels;
//! every analysis request carries a sequence number so replies that arrive
//! after the selection has moved on are discarded instead of applied.

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use fxlab_core::domain::{AnalysisResult, Instrument, Selection};

use crate::worker::{WorkerCommand, WorkerResponse};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Signal,
    Indicators,
    Sentiment,
    News,
    Chart,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Signal => 0,
            Panel::Indicators => 1,
            Panel::Sentiment => 2,
            Panel::News => 3,
            Panel::Chart => 4,
            Panel::Help => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Signal),
            1 => Some(Panel::Indicators),
            2 => Some(Panel::Sentiment),
            3 => Some(Panel::News),
            4 => Some(Panel::Chart),
            5 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Signal => "Signal",
            Panel::Indicators => "Indicators",
            Panel::Sentiment => "Sentiment",
            Panel::News => "News",
            Panel::Chart => "Chart",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 6).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 5) % 6).unwrap()
    }
}

/// Lifecycle of the in-flight analysis request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Success(Box<AnalysisResult>),
    Failure(String),
}

impl RequestState {
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub context: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    ErrorHistory,
}

/// News panel cursor and per-headline expansion.
#[derive(Debug, Default)]
pub struct NewsPanelState {
    pub cursor: usize,
    expanded: HashMap<usize, bool>,
}

impl NewsPanelState {
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(&index).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, index: usize) {
        let entry = self.expanded.entry(index).or_insert(false);
        *entry = !*entry;
    }

    /// New headlines: cursor back to the top, everything collapsed.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.expanded.clear();
    }
}

const ERROR_HISTORY_CAP: usize = 50;

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Current selection and the instrument catalog
    pub selection: Selection,
    pub catalog: Vec<Instrument>,

    // Analysis request lifecycle
    pub request: RequestState,
    pub request_seq: u64,
    pub last_updated: Option<NaiveDateTime>,

    // Panel extras
    pub news: NewsPanelState,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,

    #[allow(dead_code)]
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        state_path: PathBuf,
    ) -> Self {
        Self {
            active_panel: Panel::Signal,
            running: true,
            selection: Selection::default(),
            catalog: Vec::new(),
            request: RequestState::Idle,
            request_seq: 0,
            last_updated: None,
            news: NewsPanelState::default(),
            worker_tx,
            worker_rx,
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
            overlay: Overlay::None,
            state_path,
        }
    }

    /// Kick off an analysis for the current selection. Bumps the sequence
    /// number first, so any reply still in flight for the previous selection
    /// arrives stale and is dropped.
    pub fn request_analysis(&mut self) {
        self.request_seq += 1;
        self.request = RequestState::Loading;
        self.set_status(format!(
            "Analyzing {} ({} / {})...",
            self.selection.pair,
            self.selection.interval.label(),
            self.selection.period.label()
        ));
        let _ = self.worker_tx.send(WorkerCommand::Analyze {
            seq: self.request_seq,
            selection: self.selection.clone(),
        });
    }

    /// Move the pair selection by `step` through the catalog and re-analyze.
    pub fn cycle_pair(&mut self, step: i64) {
        if self.catalog.is_empty() {
            return;
        }
        let len = self.catalog.len() as i64;
        let current = self
            .catalog
            .iter()
            .position(|i| i.symbol == self.selection.pair)
            .unwrap_or(0) as i64;
        let next = (current + step).rem_euclid(len) as usize;
        self.selection.pair = self.catalog[next].symbol.clone();
        self.request_analysis();
    }

    pub fn cycle_interval(&mut self, forward: bool) {
        self.selection.interval = if forward {
            self.selection.interval.next()
        } else {
            self.selection.interval.prev()
        };
        self.request_analysis();
    }

    pub fn cycle_period(&mut self, forward: bool) {
        self.selection.period = if forward {
            self.selection.period.next()
        } else {
            self.selection.period.prev()
        };
        self.request_analysis();
    }

    /// Apply a worker response. Analysis replies whose sequence number does
    /// not match the latest request are stale and ignored entirely.
    pub fn handle_worker_response(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::Catalog { instruments } => {
                let count = instruments.len();
                self.catalog = instruments;
                self.set_status(format!("Loaded {count} currency pairs"));
                if !self.catalog.iter().any(|i| i.symbol == self.selection.pair) {
                    if let Some(first) = self.catalog.first() {
                        // Snapping the pair changes the Selection, so the
                        // analysis in flight for the old pair must be
                        // invalidated like any other selection change.
                        self.selection.pair = first.symbol.clone();
                        self.request_analysis();
                    }
                }
            }
            WorkerResponse::AnalysisComplete { seq, result } => {
                if seq != self.request_seq {
                    return;
                }
                self.news.reset();
                self.last_updated = Some(chrono::Local::now().naive_local());
                // A sentiment-layer failure is non-fatal but worth flagging.
                if let Some(err) = &result.sentiment_analysis.error {
                    self.set_warning(format!("{}: sentiment degraded ({err})", result.pair));
                } else {
                    self.set_status(format!(
                        "{}: {} ({:.1}% confidence)",
                        result.pair,
                        result.final_signal,
                        result.confidence * 100.0
                    ));
                }
                self.request = RequestState::Success(result);
            }
            WorkerResponse::AnalysisFailed { seq, message } => {
                if seq != self.request_seq {
                    return;
                }
                self.push_error(message.clone(), self.selection.pair.clone());
                self.request = RequestState::Failure(message);
            }
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
