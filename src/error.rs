//! Error types for pagesift.
//!
//! Errors never cross the public extraction boundary: the orchestrator
//! converts them into a degraded [`crate::ExtractionResult`] instead.
//! They are exposed so tests and embedders can match on the reason.

use std::time::Duration;

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unexpected failure while walking the document tree.
    #[error("tree traversal failed during {stage}: {message}")]
    Traversal {
        /// Pipeline stage that was running when the failure surfaced.
        stage: &'static str,
        /// Human-readable description of the failure.
        message: String,
    },

    /// Extraction did not complete before the caller's deadline.
    #[error("timeout: extraction exceeded {0:?}")]
    Timeout(Duration),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
