//! Session configuration

use serde::{Deserialize, Serialize};

/// Configuration for a scanning session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Expected number of distinct payloads per session. The result map
    /// is pre-sized to this, keeping ingest allocation-free on the frame
    /// cadence.
    pub expected_results: usize,
    /// Power the camera off on stop, or leave it warm for the next
    /// session (common when sessions follow view visibility).
    pub release_camera_on_stop: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expected_results: 32,
            release_camera_on_stop: true,
        }
    }
}
