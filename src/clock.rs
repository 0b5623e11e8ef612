use std::sync::mpsc::{SyncSender, TrySendError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::debug;

/// Fires a tick every `period` into a size-1 channel. If the previous tick
/// has not been taken yet the new one is dropped, so a stalled consumer
/// never sees a burst of catch-up ticks. Stops once the receiver is gone.
pub fn spawn_ticker(period: Duration, tx: SyncSender<()>) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut next = Instant::now() + period;
        loop {
            thread::sleep(next.saturating_duration_since(Instant::now()));
            next += period;
            match tx.try_send(()) {
                Ok(()) | Err(TrySendError::Full(())) => {}
                Err(TrySendError::Disconnected(())) => {
                    debug!("tick receiver gone, clock stopping");
                    return;
                }
            }
        }
    })
}
