//! Initial-plus-manual sheet sync loop.
//!
//! Syncs once on start, then once per trigger received on a broadcast
//! channel. There is no periodic timer: the sheet is only re-fetched when
//! someone asks for it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use tokio::sync::broadcast::{self, error::RecvError};

use super::coordinator::{SheetSync, SyncOutcome};

/// Background sync loop around a [`SheetSync`].
pub struct SyncScheduler {
    sync: Arc<SheetSync>,
    shutdown: Arc<AtomicBool>,
    outcomes: Option<broadcast::Sender<SyncOutcome>>,
}

impl SyncScheduler {
    pub fn new(sync: Arc<SheetSync>) -> Self {
        Self {
            sync,
            shutdown: Arc::new(AtomicBool::new(false)),
            outcomes: None,
        }
    }

    /// Publish the outcome of every sync on `tx`.
    pub fn with_outcomes(mut self, tx: broadcast::Sender<SyncOutcome>) -> Self {
        self.outcomes = Some(tx);
        self
    }

    /// Start the sync loop in a background thread.
    ///
    /// The loop exits once `stop` has been called and the next trigger
    /// arrives, or when every trigger sender is dropped.
    pub fn start(&self, mut trigger_rx: broadcast::Receiver<()>) -> JoinHandle<()> {
        let sync = Arc::clone(&self.sync);
        let shutdown = Arc::clone(&self.shutdown);
        let outcomes = self.outcomes.clone();

        std::thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to start sheet sync runtime: {}", e);
                    return;
                }
            };

            rt.block_on(async {
                loop {
                    if shutdown.load(Ordering::Acquire) {
                        break;
                    }

                    let outcome = sync.sync().await;
                    if let Some(tx) = &outcomes {
                        // no subscribers is fine
                        let _ = tx.send(outcome);
                    }

                    match trigger_rx.recv().await {
                        Ok(()) => log::info!("Manual sheet sync triggered"),
                        Err(RecvError::Lagged(skipped)) => {
                            log::debug!("Coalesced {} queued sync triggers", skipped)
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            });
        })
    }

    /// Signals the scheduler to stop.
    pub fn stop(&self) {
        self.shutdown.store(true, Ordering::Release);
    }
}
