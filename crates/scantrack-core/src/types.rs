//! Core types for session-scoped barcode scanning
//!
//! Everything the feed reports about a barcode besides its payload is
//! treated as opaque metadata: it is stored and handed off unmodified,
//! never interpreted locally.

use serde::{Deserialize, Serialize};

/// On-frame location of a tracked barcode, as reported by the feed's
/// tracker. Pure metadata; not used for any local computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// X coordinate of top-left corner (pixels)
    pub x: f32,
    /// Y coordinate of top-left corner (pixels)
    pub y: f32,
    /// Width of bounding box (pixels)
    pub width: f32,
    /// Height of bounding box (pixels)
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Calculate area
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// One decoded barcode observed in a frame.
///
/// Records are owned values: the feed may recycle or discard its own
/// instances once a callback returns, so ingestion always takes the
/// record by value rather than borrowing into feed-owned memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarcodeRecord {
    /// Decoded content; may be empty (empty records are never stored)
    pub payload: String,
    /// Symbology tag from the feed ("ean13", "qr", ...), passed through
    /// without local interpretation
    pub symbology: String,
    /// Last known on-frame location, if the feed reported one
    pub bounds: Option<BoundingBox>,
    /// Capture timestamp of the frame this record came from (microseconds)
    pub timestamp_us: u64,
}

impl BarcodeRecord {
    pub fn new(payload: impl Into<String>, symbology: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            symbology: symbology.into(),
            bounds: None,
            timestamp_us: 0,
        }
    }

    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_timestamp(mut self, timestamp_us: u64) -> Self {
        self.timestamp_us = timestamp_us;
        self
    }
}

/// One delivery from the external feed: zero or more records decoded in
/// a single frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackingUpdate {
    /// Monotonic frame counter assigned by the feed
    pub frame_id: u64,
    /// Records for this frame, in the feed's delivery order
    pub records: Vec<BarcodeRecord>,
}

impl TrackingUpdate {
    pub fn new(frame_id: u64, records: Vec<BarcodeRecord>) -> Self {
        Self { frame_id, records }
    }
}

/// Outcome of ingesting a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyDecision {
    /// First observation of this payload in the current session; the
    /// caller must trigger exactly one notification cue
    Fire,
    /// Payload already seen (or empty); no notification
    Suppress,
}

/// Camera power state for the outbound feed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraPower {
    On,
    Off,
}
