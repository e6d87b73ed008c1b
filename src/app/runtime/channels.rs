use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::Fetcher;
use crate::state::{FetchResult, QueryInput};

use super::workers::spawn_fetch_worker;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Terminal events flow from the input thread to the event loop.
/// - Requests flow from the event loop to the fetch worker; results flow back.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub query_tx: mpsc::UnboundedSender<QueryInput>,
    pub result_rx: mpsc::UnboundedReceiver<FetchResult>,
}

impl Channels {
    /// What: Create the runtime channels and start the fetch worker.
    ///
    /// Inputs:
    /// - `fetcher`: Performs the GET for each request
    ///
    /// Output:
    /// - `Channels` with every sender and receiver initialized.
    ///
    /// Details:
    /// - Must be called from within a Tokio runtime.
    pub fn new(fetcher: Fetcher) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (query_tx, query_rx) = mpsc::unbounded_channel::<QueryInput>();
        let (result_tx, result_rx) = mpsc::unbounded_channel::<FetchResult>();

        spawn_fetch_worker(query_rx, result_tx, fetcher);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            query_tx,
            result_rx,
        }
    }
}
