//! Error types for the session boundary
//!
//! The only fallible surface is the external feed: empty payloads and
//! post-stop deliveries are defined no-ops, not errors.

use thiserror::Error;

/// Errors reported synchronously by the external tracking feed.
///
/// The feed completes its control calls asynchronously and that
/// completion is never observed here; these variants cover only the
/// immediate rejections an SDK binding can return.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedError {
    /// Camera hardware could not be acquired
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),

    /// The feed rejected a control call
    #[error("feed rejected control call: {0}")]
    Rejected(String),

    /// The feed or its update pump is no longer running
    #[error("feed disconnected")]
    Disconnected,
}

/// Errors that can occur during session lifecycle transitions
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The external feed rejected an enable/disable or camera call
    #[error(transparent)]
    Feed(#[from] FeedError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
