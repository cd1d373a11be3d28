//! The loop's wait step must keep draining a full channel.

use cinerec_tui::events::{next_event, TuiEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 256;

#[tokio::test]
async fn burst_larger_than_channel_is_fully_drained() {
    let (tx, mut rx) = mpsc::channel::<TuiEvent>(CHANNEL_CAPACITY);
    let burst = CHANNEL_CAPACITY * 4;

    let producer = std::thread::spawn(move || {
        for _ in 0..burst {
            let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
            if tx.blocking_send(TuiEvent::Input(key)).is_err() {
                break;
            }
        }
    });

    // A fast ticker makes tick arms win often while the channel is full.
    let mut ticker = tokio::time::interval(Duration::from_millis(1));
    let mut handled = 0;
    let drained = tokio::time::timeout(Duration::from_secs(10), async {
        while handled < burst {
            if next_event(&mut rx, &mut ticker).await.is_some() {
                handled += 1;
            }
        }
    })
    .await;

    assert!(drained.is_ok(), "loop stalled after {} events", handled);
    producer.join().unwrap();
}

#[tokio::test]
async fn tick_yields_no_event() {
    let (_tx, mut rx) = mpsc::channel::<TuiEvent>(1);
    let mut ticker = tokio::time::interval(Duration::from_millis(5));

    let step = tokio::time::timeout(Duration::from_secs(1), next_event(&mut rx, &mut ticker)).await;

    assert!(matches!(step, Ok(None)));
}
