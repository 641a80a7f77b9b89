//! Background worker thread — all blocking HTTP runs here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. Each
//! analysis command carries the sequence number of the request that spawned
//! it; the reply echoes it back so the main thread can detect stale results.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use fxlab_core::api::AnalysisApi;
use fxlab_core::catalog::load_catalog;
use fxlab_core::domain::{AnalysisResult, Instrument, Selection};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    FetchCatalog,
    Analyze { seq: u64, selection: Selection },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug)]
pub enum WorkerResponse {
    Catalog {
        instruments: Vec<Instrument>,
    },
    AnalysisComplete {
        seq: u64,
        result: Box<AnalysisResult>,
    },
    AnalysisFailed {
        seq: u64,
        message: String,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    api: Arc<dyn AnalysisApi>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("fxlab-worker".into())
        .spawn(move || {
            worker_loop(rx, tx, api);
        })
        .expect("failed to spawn worker thread")
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>, api: Arc<dyn AnalysisApi>) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::FetchCatalog) => {
                // load_catalog falls back to the built-in pair list, so the
                // catalog is never empty and never surfaces an error.
                let instruments = load_catalog(api.as_ref());
                let _ = tx.send(WorkerResponse::Catalog { instruments });
            }
            Ok(WorkerCommand::Analyze { seq, selection }) => {
                match api.analyze(&selection) {
                    Ok(result) => {
                        let _ = tx.send(WorkerResponse::AnalysisComplete {
                            seq,
                            result: Box::new(result),
                        });
                    }
                    Err(e) => {
                        let _ = tx.send(WorkerResponse::AnalysisFailed {
                            seq,
                            message: e.user_message(),
                        });
                    }
                }
            }
        }
    }
}
