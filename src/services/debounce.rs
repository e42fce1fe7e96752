//! Trailing-edge debouncer for background analysis refreshes.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

struct Scheduled {
    handle: JoinHandle<()>,
    started: Arc<AtomicBool>,
}

/// Runs a job once a quiet period has passed since the last trigger.
/// A new trigger cancels a run still waiting out its quiet period, so a
/// burst of writes collapses into a single refresh. A run that has
/// already started is left to finish.
#[derive(Clone)]
pub struct Debouncer {
    quiet: Duration,
    pending: Arc<Mutex<Option<Scheduled>>>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    pub fn trigger<F>(&self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let quiet = self.quiet;
        let started = Arc::new(AtomicBool::new(false));
        let flag = started.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            flag.store(true, Ordering::SeqCst);
            job.await;
        });

        if let Ok(mut pending) = self.pending.lock() {
            if let Some(previous) = pending.replace(Scheduled { handle, started }) {
                if !previous.started.load(Ordering::SeqCst) {
                    previous.handle.abort();
                }
            }
        }
    }
}
