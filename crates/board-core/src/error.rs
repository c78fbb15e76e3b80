//! Board Builder Errors
//!
//! Only host-side failures (record query, record save) surface as errors.
//! Configuration and data-shape problems degrade with a log entry instead,
//! so a misconfigured view renders an empty board rather than a 500.

use thiserror::Error;

/// Errors that abort a build or update operation
#[derive(Debug, Error)]
pub enum BoardError {
    /// The host record source failed while fetching a chunk
    #[error("record source failed: {0}")]
    Source(String),

    /// The host record store rejected a field update
    #[error("record store failed: {0}")]
    Store(String),

    /// Update request referenced no record or carried no field values
    #[error("invalid update request: {0}")]
    InvalidRequest(String),
}

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;
