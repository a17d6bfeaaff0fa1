//! Session-scoped deduplication of decoded barcodes
//!
//! A map keyed by payload, cleared at each session boundary. The first
//! observation of a payload fires a notification decision; repeats only
//! refresh the stored metadata.

use ahash::AHashMap;

use crate::types::{BarcodeRecord, NotifyDecision};

/// Deduplicating store for one scanning session.
///
/// Holds the most recently observed record per distinct payload.
/// Single-threaded by itself; [`ScanSession`](crate::session::ScanSession)
/// layers the lock on top, so `ingest` stays a plain map probe on the
/// frame-processing hot path.
#[derive(Debug, Default)]
pub struct ResultAccumulator {
    seen: AHashMap<String, BarcodeRecord>,
}

impl ResultAccumulator {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self {
            seen: AHashMap::new(),
        }
    }

    /// Create an accumulator pre-sized for the expected number of
    /// distinct payloads, so `ingest` does not rehash mid-session.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: AHashMap::with_capacity(capacity),
        }
    }

    /// Clear all entries. Allocated capacity is retained for the next
    /// session. Must run before a session's first ingest.
    pub fn reset(&mut self) {
        self.seen.clear();
    }

    /// Ingest one record.
    ///
    /// Empty payloads are discarded silently: no state change, no
    /// notification. A payload not yet in the map is a new observation
    /// and returns [`NotifyDecision::Fire`]; a known payload overwrites
    /// the stored record (latest metadata wins) and returns
    /// [`NotifyDecision::Suppress`]. Between two `reset` calls each
    /// distinct non-empty payload fires exactly once, however often it
    /// recurs.
    pub fn ingest(&mut self, record: BarcodeRecord) -> NotifyDecision {
        if record.payload.is_empty() {
            return NotifyDecision::Suppress;
        }
        match self.seen.insert(record.payload.clone(), record) {
            None => NotifyDecision::Fire,
            Some(_) => NotifyDecision::Suppress,
        }
    }

    /// All currently stored records, one per distinct payload, as owned
    /// copies. The internal map is never handed out for mutation.
    pub fn snapshot(&self) -> Vec<BarcodeRecord> {
        self.seen.values().cloned().collect()
    }

    /// Number of distinct payloads observed this session.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
