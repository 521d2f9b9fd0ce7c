//! Sliced schedule store.
//!
//! A sliced schedule is an immutable, ordered sequence of disjoint
//! intervals. Invariants (enforced once, at construction):
//! - No two slices share a start instant or an end instant.
//! - Slices are sorted ascending by start.
//! - Each slice ends at or before its successor starts.
//!
//! Any "change" means building a new schedule from a new element set.

use std::slice;
use std::sync::Arc;

use log::debug;

use super::Interval;
use crate::error::{Result, ScheduleError};
use crate::validation::validate_elements;

/// An immutable schedule of sorted, non-overlapping time slices.
///
/// Cloning is cheap: the sequence is shared, never copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlicedSchedule {
    elements: Arc<[Interval]>,
}

impl Default for SlicedSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl SlicedSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self {
            elements: Arc::from(Vec::<Interval>::new()),
        }
    }

    /// Creates a schedule from candidate elements, in any order.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidElements`] if two elements start or end on the
    /// same instant, or if any element overlaps another.
    pub fn try_new<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = Interval>,
    {
        let sorted = validate_elements(elements)?;
        debug!("built sliced schedule with {} elements", sorted.len());
        Ok(Self {
            elements: Arc::from(sorted),
        })
    }

    /// The slices, sorted by start.
    #[inline]
    pub fn elements(&self) -> &[Interval] {
        &self.elements
    }

    /// Iterates over the slices in order.
    pub fn iter(&self) -> slice::Iter<'_, Interval> {
        self.elements.iter()
    }

    /// Number of slices.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the schedule has no slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Earliest slice.
    pub fn first(&self) -> Option<&Interval> {
        self.elements.first()
    }

    /// Latest slice.
    pub fn last(&self) -> Option<&Interval> {
        self.elements.last()
    }

    /// Overall span: first slice's start to last slice's end.
    ///
    /// Returns `None` for an empty schedule.
    pub fn span(&self) -> Option<Interval> {
        let (first, last) = (self.first()?, self.last()?);
        Interval::new(first.start(), last.end()).ok()
    }
}

impl TryFrom<Vec<Interval>> for SlicedSchedule {
    type Error = ScheduleError;

    fn try_from(elements: Vec<Interval>) -> Result<Self> {
        Self::try_new(elements)
    }
}

impl<'a> IntoIterator for &'a SlicedSchedule {
    type Item = &'a Interval;
    type IntoIter = slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn sample_schedule() -> SlicedSchedule {
        SlicedSchedule::try_new(vec![
            Interval::new(at(7200), at(9000)).unwrap(),
            Interval::new(at(0), at(3600)).unwrap(),
            Interval::new(at(3600), at(5400)).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_schedule() {
        let s = SlicedSchedule::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert!(s.span().is_none());
        assert_eq!(s, SlicedSchedule::default());
        assert!(SlicedSchedule::try_new(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_elements_sorted() {
        let s = sample_schedule();
        assert!(!s.is_empty());
        let starts: Vec<_> = s.iter().map(|e| e.start()).collect();
        assert_eq!(starts, vec![at(0), at(3600), at(7200)]);
    }

    #[test]
    fn test_span() {
        let s = sample_schedule();
        let span = s.span().unwrap();
        assert_eq!(span.start(), at(0));
        assert_eq!(span.end(), at(9000));
    }

    #[test]
    fn test_try_from_rejects_overlap() {
        let elements = vec![
            Interval::with_duration(at(0), Duration::hours(2)).unwrap(),
            Interval::with_duration(at(3600), Duration::hours(2)).unwrap(),
        ];
        let err = SlicedSchedule::try_from(elements).unwrap_err();
        assert!(err.is_invalid_elements());
    }

    #[test]
    fn test_clone_shares_elements() {
        let s = sample_schedule();
        let c = s.clone();
        assert_eq!(s, c);
        assert!(std::ptr::eq(s.elements(), c.elements()));
    }

    #[test]
    fn test_into_iterator() {
        let s = sample_schedule();
        let mut n = 0;
        for e in &s {
            assert!(e.duration() > Duration::zero());
            n += 1;
        }
        assert_eq!(n, 3);
    }
}
