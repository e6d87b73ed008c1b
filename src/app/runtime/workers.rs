use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::Fetcher;
use crate::state::{FetchResult, QueryInput};

/// What: Spawn the background worker that performs search requests.
///
/// Inputs:
/// - `query_rx`: Requests queued by the event loop
/// - `result_tx`: Channel receiving one [`FetchResult`] per request
/// - `fetcher`: Performs the GET
///
/// Details:
/// - Every request runs in its own task; nothing is debounced or cancelled.
/// - Results are sent in completion order, which may differ from request order.
pub fn spawn_fetch_worker(
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    result_tx: mpsc::UnboundedSender<FetchResult>,
    fetcher: Fetcher,
) {
    tokio::spawn(async move {
        while let Some(query) = query_rx.recv().await {
            let tx = result_tx.clone();
            let fetch = Arc::clone(&fetcher);
            tokio::spawn(async move {
                let QueryInput { id, url, page } = query;
                tracing::debug!(id, url = %url, "[Fetch] GET");
                let outcome = fetch(url).await.map_err(|e| e.to_string());
                if tx.send(FetchResult { id, page, outcome }).is_err() {
                    tracing::debug!(id, "[Fetch] Result receiver dropped");
                }
            });
        }
        tracing::debug!("[Runtime] Fetch worker stopped");
    });
}

/// What: Spawn the blocking thread that forwards terminal events.
///
/// Inputs:
/// - `headless`: Skip the thread entirely when `true`
/// - `event_tx`: Destination for crossterm events
/// - `cancelled`: Set on shutdown to stop the thread
///
/// Details:
/// - Polls with a short timeout so the cancellation flag is checked regularly.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    // ignore transient read errors
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
