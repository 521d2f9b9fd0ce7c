//! Web API v1 wire encoding.
//!
//! Instants travel as ISO-8601 extended strings with fractional seconds in
//! UTC (`2020-03-27T09:00:00.000Z`). Millisecond precision is the minimum;
//! finer digits are written only when the instant carries them.
//!
//! # Lenient decoding
//! Entries whose start or end does not parse, or whose start is after its
//! end, are dropped before validation rather than failing the decode.

use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Interval, SlicedSchedule};

/// A schedule in web API v1 shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireScheduleV1 {
    schedule: Vec<WireElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct WireElement {
    start: String,
    end: String,
}

impl From<&SlicedSchedule> for WireScheduleV1 {
    fn from(schedule: &SlicedSchedule) -> Self {
        let schedule = schedule
            .iter()
            .map(|e| WireElement {
                start: format_instant(e.start()),
                end: format_instant(e.end()),
            })
            .collect();
        Self { schedule }
    }
}

impl WireScheduleV1 {
    /// Number of entries in the payload, valid or not.
    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    /// Whether the payload has no entries.
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }

    /// The well-formed entries as intervals, in payload order.
    pub fn elements(&self) -> Vec<Interval> {
        self.schedule
            .iter()
            .filter_map(|e| {
                let parsed = parse_instant(&e.start)
                    .zip(parse_instant(&e.end))
                    .and_then(|(start, end)| Interval::new(start, end).ok());
                if parsed.is_none() {
                    debug!("dropping wire element {:?} .. {:?}", e.start, e.end);
                }
                parsed
            })
            .collect()
    }

    /// Validates the well-formed entries into a schedule.
    pub fn into_schedule(self) -> Result<SlicedSchedule> {
        SlicedSchedule::try_new(self.elements())
    }
}

fn format_instant(instant: DateTime<Utc>) -> String {
    let nanos = instant.timestamp_subsec_nanos();
    let precision = if nanos % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else if nanos % 1_000 == 0 {
        SecondsFormat::Micros
    } else {
        SecondsFormat::Nanos
    };
    instant.to_rfc3339_opts(precision, true)
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let has_fraction = s
        .split_once('T')
        .is_some_and(|(_, time)| time.contains('.'));
    if !has_fraction {
        return None;
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
