//! Queries over a sliced schedule.
//!
//! All lookups exploit the sorted, disjoint layout: a binary search on
//! starts (or ends) locates the candidate slice, so every query is
//! `O(log n)` plus the size of its result.
//!
//! # Boundaries
//! Containment is closed on both ends. Where two slices touch, the shared
//! instant belongs to the later slice.
//!
//! # Usage
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use sliced_schedule::models::{Interval, SlicedSchedule};
//! use sliced_schedule::query::MatchDirection;
//!
//! let t0 = Utc.with_ymd_and_hms(2020, 3, 27, 9, 0, 0).unwrap();
//! let schedule = SlicedSchedule::try_new(vec![
//!     Interval::with_duration(t0, Duration::hours(1)).unwrap(),
//!     Interval::with_duration(t0 + Duration::minutes(65), Duration::hours(1)).unwrap(),
//! ])
//! .unwrap();
//!
//! let gap = t0 + Duration::minutes(62);
//! assert!(!schedule.contains(gap));
//! let next = schedule.matching(gap, MatchDirection::FirstAfter).unwrap();
//! assert_eq!(next.start(), t0 + Duration::minutes(65));
//! ```

mod range;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Interval, SlicedSchedule};

/// Direction of a [`SlicedSchedule::matching`] lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchDirection {
    /// The slice containing the instant.
    On,
    /// The next slice strictly after the instant (or after the slice
    /// containing it).
    FirstAfter,
    /// The previous slice strictly before the instant (or before the slice
    /// containing it).
    FirstBefore,
}

impl SlicedSchedule {
    /// Index of the latest slice containing `instant`.
    fn index_on(&self, instant: DateTime<Utc>) -> Option<usize> {
        let span = self.span()?;
        if !span.contains(instant) {
            return None;
        }
        let elements = self.elements();
        let idx = elements
            .partition_point(|e| e.start() <= instant)
            .checked_sub(1)?;
        elements[idx].contains(instant).then_some(idx)
    }

    /// Whether any slice contains `instant`.
    ///
    /// Always `false` for an empty schedule or outside the overall span.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.index_on(instant).is_some()
    }

    /// Directional slice lookup.
    ///
    /// - [`On`](MatchDirection::On): the slice containing `instant`.
    /// - [`FirstAfter`](MatchDirection::FirstAfter): the first slice if
    ///   `instant` precedes the schedule; the slice following the one
    ///   containing `instant`; otherwise the earliest slice starting after
    ///   it. `None` once `instant` reaches the last slice's start.
    /// - [`FirstBefore`](MatchDirection::FirstBefore): the last slice if
    ///   `instant` follows the schedule; the slice preceding the one
    ///   containing `instant`; otherwise the latest slice ending before it.
    ///   `None` while `instant` is before the first slice's end, or at it
    ///   unless a later slice starts there.
    pub fn matching(&self, instant: DateTime<Utc>, direction: MatchDirection) -> Option<&Interval> {
        let elements = self.elements();
        let (first, last) = (elements.first()?, elements.last()?);

        match direction {
            MatchDirection::On => self.index_on(instant).map(|i| &elements[i]),

            MatchDirection::FirstAfter => {
                if instant >= last.start() {
                    return None;
                }
                if instant < first.start() {
                    return Some(first);
                }
                match self.index_on(instant) {
                    Some(i) => elements.get(i + 1),
                    None => elements.get(elements.partition_point(|e| e.start() <= instant)),
                }
            }

            MatchDirection::FirstBefore => {
                if instant < first.end() {
                    return None;
                }
                if instant > last.end() {
                    return Some(last);
                }
                let idx = match self.index_on(instant) {
                    Some(i) => i,
                    None => elements.partition_point(|e| e.end() < instant),
                };
                idx.checked_sub(1).map(|i| &elements[i])
            }
        }
    }

    /// Slices lying entirely within `span`, in order.
    ///
    /// Empty when the schedule is empty or `span` does not reach into the
    /// schedule's overall span. Synchronous; see
    /// [`in_range_async`](Self::in_range_async) for the off-thread variant.
    pub fn in_range(&self, span: &Interval) -> Vec<Interval> {
        let Some(bounds) = self.span() else {
            return Vec::new();
        };
        if span.end() <= bounds.start() || span.start() >= bounds.end() {
            return Vec::new();
        }

        let elements = self.elements();
        let from = elements.partition_point(|e| e.start() < span.start());
        let to = elements.partition_point(|e| e.end() <= span.end());
        if from >= to {
            return Vec::new();
        }
        elements[from..to].to_vec()
    }
}
