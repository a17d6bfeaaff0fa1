//! Session lifecycle gating the accumulator around tracking enablement
//!
//! A session is the interval between `start` and `stop`. Updates arriving
//! outside that window are dropped, not errors: the feed shuts down
//! asynchronously and trailing callbacks are expected.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::{debug, info, trace};

use crate::accumulator::ResultAccumulator;
use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::feed::{NotificationSink, ResultsDisplay, TrackingFeed};
use crate::types::{BarcodeRecord, CameraPower, NotifyDecision, TrackingUpdate};

/// Thread-safe scanning session.
///
/// Owns the deduplicating result store and steers the external feed.
/// `on_update` may be called from the feed's worker thread while another
/// thread reads `snapshot` or drives the lifecycle: all access to the
/// store goes through one mutex, and the active flag gates deliveries
/// without taking it.
pub struct ScanSession<F, N> {
    feed: F,
    sink: N,
    config: SessionConfig,
    results: Mutex<ResultAccumulator>,
    active: AtomicBool,
}

impl<F: TrackingFeed, N: NotificationSink> ScanSession<F, N> {
    /// Create a session with the default configuration.
    pub fn new(feed: F, sink: N) -> Self {
        Self::with_config(feed, sink, SessionConfig::default())
    }

    pub fn with_config(feed: F, sink: N, config: SessionConfig) -> Self {
        Self {
            feed,
            sink,
            results: Mutex::new(ResultAccumulator::with_capacity(config.expected_results)),
            config,
            active: AtomicBool::new(false),
        }
    }

    /// Start a scanning session.
    ///
    /// The store is reset before tracking is enabled, so no delivery can
    /// race the clear; the gate opens before the enable call for the same
    /// reason (an event arriving during the call must not be lost). If
    /// the feed rejects the enable or camera call the gate is closed
    /// again and the error propagates.
    pub fn start(&self) -> SessionResult<()> {
        self.results.lock().reset();
        self.active.store(true, Ordering::Release);

        let enabled = self
            .feed
            .set_enabled(true)
            .and_then(|_| self.feed.set_camera(CameraPower::On));
        if let Err(err) = enabled {
            self.active.store(false, Ordering::Release);
            return Err(err.into());
        }

        info!("scan session started");
        Ok(())
    }

    /// Stop the session and return the final result set.
    ///
    /// The gate closes first (deliveries stop being accepted), then the
    /// feed is disabled, then the camera is powered off if configured.
    /// Safe to call when tracking was never started; never blocks on
    /// in-flight deliveries.
    pub fn stop(&self) -> SessionResult<Vec<BarcodeRecord>> {
        self.active.store(false, Ordering::Release);

        self.feed.set_enabled(false)?;
        if self.config.release_camera_on_stop {
            self.feed.set_camera(CameraPower::Off)?;
        }

        let snapshot = self.results.lock().snapshot();
        info!(results = snapshot.len(), "scan session stopped");
        Ok(snapshot)
    }

    /// Stop the session and hand the result set to a display.
    pub fn stop_and_show(&self, display: &impl ResultsDisplay) -> SessionResult<()> {
        let records = self.stop()?;
        display.show(records);
        Ok(())
    }

    /// Inbound path for one tracking update; the frame-cadence hot path.
    ///
    /// Records are ingested in delivery order under a single lock
    /// acquisition; the notification sink is then cued once per newly
    /// seen payload, in that same order, with the lock released. Returns
    /// the number of cues emitted.
    pub fn on_update(&self, update: TrackingUpdate) -> usize {
        if !self.active.load(Ordering::Acquire) {
            trace!(frame = update.frame_id, "update dropped, session inactive");
            return 0;
        }

        let fired = {
            let mut results = self.results.lock();
            update
                .records
                .into_iter()
                .map(|record| results.ingest(record))
                .filter(|decision| *decision == NotifyDecision::Fire)
                .count()
        };

        for _ in 0..fired {
            self.sink.emit();
        }
        if fired > 0 {
            debug!(new = fired, "new payloads observed");
        }
        fired
    }

    /// Current result set, one record per distinct payload.
    pub fn snapshot(&self) -> Vec<BarcodeRecord> {
        self.results.lock().snapshot()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FeedError, SessionError};
    use crate::feed::{CollectingDisplay, CountingSink, FeedCall, RecordingFeed};
    use pretty_assertions::assert_eq;

    fn update(frame_id: u64, payloads: &[&str]) -> TrackingUpdate {
        TrackingUpdate::new(
            frame_id,
            payloads
                .iter()
                .map(|p| BarcodeRecord::new(*p, "qr"))
                .collect(),
        )
    }

    /// Feed whose enable call is rejected, as a dead SDK handle would.
    struct RejectingFeed;

    impl TrackingFeed for RejectingFeed {
        fn set_enabled(&self, _enabled: bool) -> Result<(), FeedError> {
            Err(FeedError::Rejected("handle closed".into()))
        }

        fn set_camera(&self, _power: CameraPower) -> Result<(), FeedError> {
            Ok(())
        }
    }

    #[test]
    fn test_update_before_start_is_dropped() {
        let session = ScanSession::new(RecordingFeed::default(), CountingSink::default());

        assert_eq!(session.on_update(update(1, &["A"])), 0);
        assert!(session.snapshot().is_empty());
    }

    #[test]
    fn test_fires_once_per_new_payload() {
        let session = ScanSession::new(RecordingFeed::default(), CountingSink::default());
        session.start().unwrap();

        assert_eq!(session.on_update(update(1, &["A", "B"])), 2);
        assert_eq!(session.on_update(update(2, &["A", "C", "B"])), 1);

        assert_eq!(session.snapshot().len(), 3);
    }

    #[test]
    fn test_sink_cued_once_per_fire() {
        let session = ScanSession::new(RecordingFeed::default(), CountingSink::default());
        session.start().unwrap();

        session.on_update(update(1, &["A", "A", "B", ""]));
        session.on_update(update(2, &["B"]));

        assert_eq!(session.sink.fired(), 2);
        let stopped = session.stop().unwrap();
        assert_eq!(stopped.len(), 2);
    }

    #[test]
    fn test_start_resets_previous_session() {
        let session = ScanSession::new(RecordingFeed::default(), CountingSink::default());

        session.start().unwrap();
        session.on_update(update(1, &["A"]));
        session.stop().unwrap();

        session.start().unwrap();
        assert!(session.snapshot().is_empty());
        // Same payload fires again in the new session.
        assert_eq!(session.on_update(update(2, &["A"])), 1);
    }

    #[test]
    fn test_updates_after_stop_are_dropped() {
        let session = ScanSession::new(RecordingFeed::default(), CountingSink::default());
        session.start().unwrap();
        session.on_update(update(1, &["A"]));
        session.stop().unwrap();

        assert_eq!(session.on_update(update(2, &["B"])), 0);
        assert_eq!(session.snapshot().len(), 1);
    }

    #[test]
    fn test_stop_without_start_is_safe() {
        let session = ScanSession::new(RecordingFeed::default(), CountingSink::default());

        let records = session.stop().unwrap();
        assert!(records.is_empty());
        assert!(!session.is_active());
    }

    #[test]
    fn test_lifecycle_call_order() {
        let session = ScanSession::new(RecordingFeed::default(), CountingSink::default());
        session.start().unwrap();
        session.stop().unwrap();

        assert_eq!(
            session.feed.calls(),
            vec![
                FeedCall::Enabled(true),
                FeedCall::Camera(CameraPower::On),
                FeedCall::Enabled(false),
                FeedCall::Camera(CameraPower::Off),
            ]
        );
    }

    #[test]
    fn test_camera_left_warm_when_configured() {
        let config = SessionConfig {
            release_camera_on_stop: false,
            ..Default::default()
        };
        let session =
            ScanSession::with_config(RecordingFeed::default(), CountingSink::default(), config);
        session.start().unwrap();
        session.stop().unwrap();

        assert_eq!(
            session.feed.calls(),
            vec![
                FeedCall::Enabled(true),
                FeedCall::Camera(CameraPower::On),
                FeedCall::Enabled(false),
            ]
        );
    }

    #[test]
    fn test_rejected_start_closes_the_gate() {
        let session = ScanSession::new(RejectingFeed, CountingSink::default());

        let result = session.start();
        assert_eq!(
            result,
            Err(SessionError::Feed(FeedError::Rejected(
                "handle closed".into()
            )))
        );
        assert!(!session.is_active());
        assert_eq!(session.on_update(update(1, &["A"])), 0);
    }

    #[test]
    fn test_stop_and_show_hands_off_snapshot() {
        let session = ScanSession::new(RecordingFeed::default(), CountingSink::default());
        let display = CollectingDisplay::default();

        session.start().unwrap();
        session.on_update(update(1, &["A", "B"]));
        session.stop_and_show(&display).unwrap();

        let shown = display.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].len(), 2);
    }
}
