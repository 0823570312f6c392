//! The background poll worker.
//!
//! One dedicated thread owns a tokio runtime for the network calls and
//! the persisted-record IO. Detections cross to the UI thread as immutable
//! [`FeedEvent`] snapshots over an mpsc channel; nothing else is shared.

use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::diff::{self, PollOutcome};
use crate::record::RecordStore;
use crate::source::FeedSource;
use crate::types::FeedEvent;

/// How often the feed is polled.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Poll worker configuration.
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub feed_url: String,
    pub interval: Duration,
    pub record_path: PathBuf,
}

impl PollConfig {
    pub fn new(feed_url: impl Into<String>, record_path: impl Into<PathBuf>) -> Self {
        Self {
            feed_url: feed_url.into(),
            interval: POLL_INTERVAL,
            record_path: record_path.into(),
        }
    }
}

/// Handle to the background poll thread. A stop request interrupts the
/// inter-poll wait promptly instead of sleeping it out; dropping the
/// handle stops the worker too.
pub struct PollWorker {
    stop_tx: mpsc::Sender<()>,
    handle: Option<thread::JoinHandle<()>>,
}

impl PollWorker {
    /// Spawn the worker thread and start polling immediately.
    pub fn spawn(
        config: PollConfig,
        source: Arc<dyn FeedSource>,
        events: mpsc::Sender<FeedEvent>,
    ) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel();
        let handle = thread::spawn(move || run_loop(config, source, events, stop_rx));
        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Request a stop and wait for the thread to finish.
    pub fn stop(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for PollWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop(
    config: PollConfig,
    source: Arc<dyn FeedSource>,
    events: mpsc::Sender<FeedEvent>,
    stop_rx: mpsc::Receiver<()>,
) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            log::error!("poll worker could not start a runtime: {err}");
            return;
        }
    };
    let store = RecordStore::new(config.record_path.clone());

    log::info!(
        "poll worker watching {} every {:?}",
        config.feed_url,
        config.interval
    );
    loop {
        poll_once(&runtime, &config.feed_url, source.as_ref(), &store, &events);
        match stop_rx.recv_timeout(config.interval) {
            Err(RecvTimeoutError::Timeout) => continue,
            // Stop requested, or the handle is gone.
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    log::info!("poll worker stopped");
}

/// One poll: fetch, diff against the stored record, persist, signal.
/// Failures are logged and retried on the next scheduled poll.
fn poll_once(
    runtime: &tokio::runtime::Runtime,
    url: &str,
    source: &dyn FeedSource,
    store: &RecordStore,
    events: &mpsc::Sender<FeedEvent>,
) {
    let snapshot = match runtime.block_on(source.fetch(url)) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            log::warn!("feed poll failed: {err}");
            return;
        }
    };

    let previous = store.load();
    let outcome = diff::evaluate(previous.as_ref(), &snapshot);
    let found = matches!(outcome, PollOutcome::Updated(_));
    let record = outcome.into_record();

    if let Err(err) = store.store(&record) {
        log::error!("failed to persist update record: {err}");
    }
    if found {
        log::info!("feed update detected: {}", record.last_update_date);
        let _ = events.send(FeedEvent::UpdateFound(record));
    }
}
