//! Collaborator boundaries around the external tracking SDK
//!
//! Camera capture, symbol decoding, and multi-object tracking all live
//! behind [`TrackingFeed`]; this crate only steers that feed and consumes
//! its deliveries.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::error::FeedError;
use crate::types::{BarcodeRecord, CameraPower};

/// Outbound control surface of the external tracking feed.
///
/// # Contract
/// - Calls are fire-and-forget: the feed completes them asynchronously
///   and the session never waits on that completion. An `Err` carries
///   only a synchronous rejection (camera busy, handle dead).
/// - Disabling an already-disabled feed and powering off an off camera
///   must be no-ops; the session may issue both during a stop that was
///   never preceded by a start.
pub trait TrackingFeed {
    /// Enable or disable tracking-update delivery.
    fn set_enabled(&self, enabled: bool) -> Result<(), FeedError>;

    /// Switch the camera feeding the tracker.
    fn set_camera(&self, power: CameraPower) -> Result<(), FeedError>;
}

/// Receives the once-per-new-payload cue (haptic, audio).
///
/// Called exactly once for every record whose ingest fired; never called
/// for repeats or empty payloads.
pub trait NotificationSink {
    fn emit(&self);
}

/// Receives the final result set for presentation.
pub trait ResultsDisplay {
    fn show(&self, records: Vec<BarcodeRecord>);
}

/// A control call recorded by [`RecordingFeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedCall {
    Enabled(bool),
    Camera(CameraPower),
}

/// Recording feed for tests and diagnostics.
///
/// Accepts every control call and remembers the order it arrived in.
#[derive(Debug, Default)]
pub struct RecordingFeed {
    calls: Mutex<Vec<FeedCall>>,
}

impl RecordingFeed {
    /// Control calls received so far, in order.
    pub fn calls(&self) -> Vec<FeedCall> {
        self.calls.lock().clone()
    }
}

impl TrackingFeed for RecordingFeed {
    fn set_enabled(&self, enabled: bool) -> Result<(), FeedError> {
        self.calls.lock().push(FeedCall::Enabled(enabled));
        Ok(())
    }

    fn set_camera(&self, power: CameraPower) -> Result<(), FeedError> {
        self.calls.lock().push(FeedCall::Camera(power));
        Ok(())
    }
}

/// Counting sink for tests and diagnostics.
#[derive(Debug, Default)]
pub struct CountingSink {
    fired: AtomicUsize,
}

impl CountingSink {
    /// Number of cues emitted so far.
    pub fn fired(&self) -> usize {
        self.fired.load(Ordering::SeqCst)
    }
}

impl NotificationSink for CountingSink {
    fn emit(&self) {
        self.fired.fetch_add(1, Ordering::SeqCst);
    }
}

/// Collecting display for tests and diagnostics.
#[derive(Debug, Default)]
pub struct CollectingDisplay {
    shown: Mutex<Vec<Vec<BarcodeRecord>>>,
}

impl CollectingDisplay {
    /// Result sets shown so far, one entry per `show` call.
    pub fn shown(&self) -> Vec<Vec<BarcodeRecord>> {
        self.shown.lock().clone()
    }
}

impl ResultsDisplay for CollectingDisplay {
    fn show(&self, records: Vec<BarcodeRecord>) {
        self.shown.lock().push(records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recording_feed_preserves_call_order() {
        let feed = RecordingFeed::default();

        feed.set_enabled(true).unwrap();
        feed.set_camera(CameraPower::On).unwrap();
        feed.set_enabled(false).unwrap();

        assert_eq!(
            feed.calls(),
            vec![
                FeedCall::Enabled(true),
                FeedCall::Camera(CameraPower::On),
                FeedCall::Enabled(false),
            ]
        );
    }

    #[test]
    fn test_counting_sink() {
        let sink = CountingSink::default();
        sink.emit();
        sink.emit();
        assert_eq!(sink.fired(), 2);
    }
}
