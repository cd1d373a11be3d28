//! Event types for the TUI event loop.

use crate::state::BackendStatus;
use cinerec_core::{HistoryEntry, RequestId, SubmitOutcome};
use crossterm::event::KeyEvent;
use tokio::sync::mpsc;
use tokio::time::Interval;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Resize { width: u16, height: u16 },
    SubmitFinished {
        request: RequestId,
        outcome: SubmitOutcome,
    },
    HistoryFinished {
        request: RequestId,
        result: Result<Vec<HistoryEntry>, String>,
    },
    Health(BackendStatus),
}

/// Wait for the next queued event or the next tick.
///
/// `None` means the tick fired and the caller should redraw. Ticks never go
/// through the channel, so a full channel cannot stall the loop that drains it.
pub async fn next_event(
    events: &mut mpsc::Receiver<TuiEvent>,
    ticker: &mut Interval,
) -> Option<TuiEvent> {
    tokio::select! {
        _ = ticker.tick() => None,
        Some(event) = events.recv() => Some(event),
    }
}
