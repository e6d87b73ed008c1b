use ratatui::{Terminal, backend::Backend};
use tokio::select;

use crate::logic::apply_fetch_result;
use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;

/// What: Drive rendering, input handling, and fetch results until the user quits.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `channels`: Runtime channels
/// - `terminal`: Render target; `None` in headless mode
///
/// Details:
/// - Redraws once per handled message.
/// - Fetch results are applied in arrival order.
pub async fn run_event_loop<B: Backend>(
    app: &mut AppState,
    channels: &mut Channels,
    terminal: &mut Option<Terminal<B>>,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, app, &channels.query_tx) {
                    break;
                }
            }
            Some(result) = channels.result_rx.recv() => {
                apply_fetch_result(app, result);
            }
            else => break,
        }
    }
    tracing::debug!("[Runtime] Main loop exited");
}
