//! Error types.
//!
//! The core boundary has a single failure: an element set that cannot form a
//! schedule. The remaining variants belong to the collaborators around it
//! (the interval primitive, the JSON codecs, the worker running range queries).

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised while building, decoding or querying a schedule.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The candidate elements share a start or end instant, or overlap.
    ///
    /// Deliberately not parameterized; see
    /// [`diagnose_elements`](crate::validation::diagnose_elements) for details.
    #[error("one or more invalid elements")]
    InvalidElements,

    /// An interval whose start comes after its end.
    #[error("interval start {start} is after its end {end}")]
    InvertedInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// An interval end that cannot be represented as an instant.
    #[error("interval starting {start} with duration {duration} ends out of range")]
    InstantOutOfRange {
        start: DateTime<Utc>,
        duration: Duration,
    },

    /// The runtime carrying an asynchronous query shut down before the
    /// query produced a result.
    #[error("runtime shut down before the query completed")]
    Shutdown,

    /// The payload could not be read or written as JSON.
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// The worker running an asynchronous query failed.
    #[error("dispatch failed: {0}")]
    Dispatch(#[from] tokio::task::JoinError),
}

impl ScheduleError {
    /// Whether this is the element-set validation failure.
    pub fn is_invalid_elements(&self) -> bool {
        matches!(self, Self::InvalidElements)
    }
}
