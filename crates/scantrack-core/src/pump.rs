//! Cross-thread delivery of tracking updates
//!
//! The external feed calls back on its own worker thread. The pump
//! carries those callbacks onto whichever thread owns the session's
//! read side, preserving delivery order: a frame's records are ingested
//! before the next frame's begin.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::error::FeedError;
use crate::feed::{NotificationSink, TrackingFeed};
use crate::session::ScanSession;
use crate::types::TrackingUpdate;

/// Producer handle for the feed's callback thread. Cheap to clone.
#[derive(Debug, Clone)]
pub struct UpdateSender {
    tx: Sender<TrackingUpdate>,
}

impl UpdateSender {
    /// Queue one update for the session.
    ///
    /// Returns [`FeedError::Disconnected`] once the pump has shut down;
    /// a trailing SDK callback should drop the event on that.
    pub fn send(&self, update: TrackingUpdate) -> Result<(), FeedError> {
        self.tx.send(update).map_err(|_| FeedError::Disconnected)
    }
}

/// Consumer half of the delivery channel, fed to [`run`].
#[derive(Debug)]
pub struct UpdateReceiver {
    rx: Receiver<TrackingUpdate>,
}

/// Create a delivery channel between the feed's callback thread and the
/// session's thread.
pub fn channel() -> (UpdateSender, UpdateReceiver) {
    let (tx, rx) = unbounded();
    (UpdateSender { tx }, UpdateReceiver { rx })
}

/// Drain updates into the session in delivery order until every sender
/// has been dropped. Returns the total number of notifications fired.
pub fn run<F, N>(session: &ScanSession<F, N>, receiver: UpdateReceiver) -> usize
where
    F: TrackingFeed,
    N: NotificationSink,
{
    let mut fired = 0;
    for update in receiver.rx.iter() {
        fired += session.on_update(update);
    }
    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{CountingSink, RecordingFeed};
    use crate::types::BarcodeRecord;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_send_after_shutdown_reports_disconnected() {
        let (sender, receiver) = channel();
        drop(receiver);

        let result = sender.send(TrackingUpdate::default());
        assert_eq!(result, Err(FeedError::Disconnected));
    }

    #[test]
    fn test_run_drains_in_delivery_order() {
        let session = ScanSession::new(RecordingFeed::default(), CountingSink::default());
        session.start().unwrap();

        let (sender, receiver) = channel();
        for (frame, payload) in [(1, "A"), (2, "B"), (3, "A")] {
            sender
                .send(TrackingUpdate::new(
                    frame,
                    vec![BarcodeRecord::new(payload, "qr")],
                ))
                .unwrap();
        }
        drop(sender);

        let fired = run(&session, receiver);
        assert_eq!(fired, 2);
        assert_eq!(session.snapshot().len(), 2);
    }
}
