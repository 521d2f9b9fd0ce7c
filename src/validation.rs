//! Element-set validation for sliced schedules.
//!
//! Turns an arbitrary collection of intervals into the canonical sequence
//! a [`SlicedSchedule`](crate::models::SlicedSchedule) stores, or rejects it.
//! Detects:
//! - Intervals sharing a start instant
//! - Intervals sharing an end instant
//! - Overlap between neighbours once sorted by start (touching is allowed)

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::warn;

use crate::error::{Result, ScheduleError};
use crate::models::Interval;

/// Validates and normalizes candidate schedule elements.
///
/// # Algorithm
/// 1. Keep an interval only if its start is unseen and then its end is
///    unseen (the end is not recorded when the start already collided).
/// 2. Fail unless the unique starts, unique ends and input count agree.
/// 3. Sort the kept intervals by start.
/// 4. Fail if any interval ends after its successor starts.
///
/// # Returns
/// The sorted sequence, or [`ScheduleError::InvalidElements`].
pub fn validate_elements<I>(elements: I) -> Result<Vec<Interval>>
where
    I: IntoIterator<Item = Interval>,
{
    let mut unique_starts: HashSet<DateTime<Utc>> = HashSet::new();
    let mut unique_ends: HashSet<DateTime<Utc>> = HashSet::new();
    let mut count = 0usize;

    let mut kept: Vec<Interval> = elements
        .into_iter()
        .inspect(|_| count += 1)
        .filter(|e| unique_starts.insert(e.start()) && unique_ends.insert(e.end()))
        .collect();

    if unique_starts.len() != unique_ends.len() || unique_starts.len() != count {
        warn!(
            "rejecting {count} schedule elements: {} unique starts, {} unique ends",
            unique_starts.len(),
            unique_ends.len()
        );
        return Err(ScheduleError::InvalidElements);
    }

    kept.sort_by_key(|e| e.start());

    if kept.windows(2).any(|pair| pair[0].overlaps(&pair[1])) {
        warn!("rejecting {count} schedule elements: overlapping intervals");
        return Err(ScheduleError::InvalidElements);
    }

    Ok(kept)
}

/// A single problem found in a candidate element set.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementIssue {
    /// Issue category.
    pub kind: ElementIssueKind,
    /// Position of the offending interval in the input slice.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of element issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementIssueKind {
    /// Start instant already used by an earlier interval.
    DuplicateStart,
    /// End instant already used by an earlier interval.
    DuplicateEnd,
    /// Interval begins before its predecessor (by start) ends.
    Overlap,
}

impl ElementIssue {
    fn new(kind: ElementIssueKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

/// Lists every issue in a candidate element set.
///
/// Empty exactly when [`validate_elements`] accepts the same input.
/// Overlaps are reported only when there are no duplicates, mirroring the
/// order in which construction fails.
pub fn diagnose_elements(elements: &[Interval]) -> Vec<ElementIssue> {
    let mut issues = Vec::new();
    let mut starts = HashSet::new();
    let mut ends = HashSet::new();

    for (index, e) in elements.iter().enumerate() {
        if !starts.insert(e.start()) {
            issues.push(ElementIssue::new(
                ElementIssueKind::DuplicateStart,
                index,
                format!("Duplicate start instant: {}", e.start()),
            ));
        }
        if !ends.insert(e.end()) {
            issues.push(ElementIssue::new(
                ElementIssueKind::DuplicateEnd,
                index,
                format!("Duplicate end instant: {}", e.end()),
            ));
        }
    }

    if !issues.is_empty() {
        return issues;
    }

    let mut order: Vec<usize> = (0..elements.len()).collect();
    order.sort_by_key(|&i| elements[i].start());

    for pair in order.windows(2) {
        let (prev, next) = (&elements[pair[0]], &elements[pair[1]]);
        if prev.overlaps(next) {
            issues.push(ElementIssue::new(
                ElementIssueKind::Overlap,
                pair[1],
                format!(
                    "Interval starting {} overlaps interval ending {}",
                    next.start(),
                    prev.end()
                ),
            ));
        }
    }

    issues
}
