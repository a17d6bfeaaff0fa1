//! scantrack core — session-scoped barcode result accumulation
//!
//! Deduplicates the barcodes an external tracking feed reports while a
//! scanning session is active, cues a notification exactly once per
//! newly seen payload, and hands the result set off at session end.
//! Camera capture, symbol decoding, and multi-object tracking all stay
//! behind the [`TrackingFeed`] boundary.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐     ┌─────────────┐     ┌───────────────────┐
//! │ TrackingFeed  │────▶│ ScanSession │────▶│ NotificationSink  │
//! │ (worker ctx)  │     │ (dedup map) │     │ / ResultsDisplay  │
//! └───────────────┘     └─────────────┘     └───────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use scantrack_core::feed::{CountingSink, RecordingFeed};
//! use scantrack_core::{BarcodeRecord, ScanSession, TrackingUpdate};
//!
//! let session = ScanSession::new(RecordingFeed::default(), CountingSink::default());
//! session.start().unwrap();
//!
//! // The feed reports the same code across consecutive frames.
//! session.on_update(TrackingUpdate::new(1, vec![BarcodeRecord::new("0901234123457", "ean13")]));
//! session.on_update(TrackingUpdate::new(2, vec![BarcodeRecord::new("0901234123457", "ean13")]));
//!
//! let results = session.stop().unwrap();
//! assert_eq!(results.len(), 1);
//! ```

pub mod accumulator;
pub mod config;
pub mod error;
pub mod feed;
pub mod pump;
pub mod session;
pub mod types;

// Re-export main types at crate root
pub use accumulator::ResultAccumulator;
pub use config::SessionConfig;
pub use error::{FeedError, SessionError, SessionResult};
pub use feed::{NotificationSink, ResultsDisplay, TrackingFeed};
pub use session::ScanSession;
pub use types::{
    BarcodeRecord, BoundingBox, CameraPower, NotifyDecision, TrackingUpdate,
};
