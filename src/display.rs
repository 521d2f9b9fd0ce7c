//! Human-readable rendering of schedules.
//!
//! Dates use the US English long style (`March 27, 2020`) in UTC. An
//! interval within a single day renders as that date alone; otherwise as
//! `start – end`.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::models::{Interval, SlicedSchedule};

/// Renders one interval as a long-style date range.
pub fn format_interval(interval: &Interval) -> String {
    let (start, end) = (interval.start(), interval.end());
    if start.date_naive() == end.date_naive() {
        long_date(start)
    } else {
        format!("{} – {}", long_date(start), long_date(end))
    }
}

/// Renders a whole schedule, e.g.
/// `Schedule elements: ["March 27, 2020", "March 27, 2020 – March 28, 2020"]`.
pub fn describe(schedule: &SlicedSchedule) -> String {
    let ranges: Vec<String> = schedule.iter().map(format_interval).collect();
    format!("Schedule elements: {ranges:?}")
}

fn long_date(instant: DateTime<Utc>) -> String {
    instant.format("%B %-d, %Y").to_string()
}

impl fmt::Display for SlicedSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self))
    }
}
