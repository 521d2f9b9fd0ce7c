//! Time interval primitive.
//!
//! # Time Model
//! Instants are `DateTime<Utc>`; no calendar or time-zone semantics are
//! attached. An interval is a closed span [start, end] for containment
//! purposes, with `start <= end` guaranteed at construction.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A time interval [start, end].
///
/// Zero-length intervals (start == end) are representable; inverted
/// ones are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Unchecked serde shape of an [`Interval`].
#[derive(Deserialize)]
struct RawInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawInterval> for Interval {
    type Error = ScheduleError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl Interval {
    /// Creates a new interval.
    ///
    /// Fails with [`ScheduleError::InvertedInterval`] if `start > end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(ScheduleError::InvertedInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates an interval starting at `start` and lasting `duration`.
    ///
    /// Fails with [`ScheduleError::InstantOutOfRange`] if the end falls
    /// outside the representable range of instants.
    pub fn with_duration(start: DateTime<Utc>, duration: Duration) -> Result<Self> {
        let end = start
            .checked_add_signed(duration)
            .ok_or(ScheduleError::InstantOutOfRange { start, duration })?;
        Self::new(start, end)
    }

    /// Interval start (inclusive).
    #[inline]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Interval end (inclusive).
    #[inline]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Duration of this interval.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether an instant falls within this interval, both ends included.
    #[inline]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Whether two intervals share more than a boundary instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}
