//! Error types for the camera frame pipeline.
//!
//! Neither error is fatal. An [`OpenError`] leaves the channel closed and is
//! surfaced to the lifecycle sink; a [`ReadError`] only means this acquisition
//! tick produced no frame, so the last displayed frame stays on screen.

use alloc::string::String;

/// Why a video input could not be acquired.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpenFailure {
    #[error("source not found")]
    NotFound,

    #[error("unsupported source scheme")]
    Unsupported,

    #[error("invalid frame geometry {0}x{1}")]
    InvalidGeometry(u32, u32),

    #[error("malformed source identifier: {0}")]
    Malformed(String),

    #[error("device unavailable: {0}")]
    Unavailable(String),
}

/// A video input could not be acquired. The channel stays closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unable to open video source `{source_id}`: {reason}")]
pub struct OpenError {
    pub source_id: String,
    #[source]
    pub reason: OpenFailure,
}

impl OpenError {
    pub fn new(
        source_id: &str,
        reason: OpenFailure,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            reason,
        }
    }
}

/// A single frame read failed. Transient: nothing changes, nothing is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("end of stream")]
    EndOfStream,

    #[error("short frame: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("device read failed")]
    Device,
}
