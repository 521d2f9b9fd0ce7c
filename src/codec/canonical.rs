//! Canonical encoding: serde impls on `SlicedSchedule`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::models::{Interval, SlicedSchedule};

#[derive(Serialize)]
struct CanonicalRef<'a> {
    schedule: &'a [Interval],
}

#[derive(Deserialize)]
struct CanonicalOwned {
    schedule: Vec<Interval>,
}

impl Serialize for SlicedSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        CanonicalRef {
            schedule: self.elements(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SlicedSchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = CanonicalOwned::deserialize(deserializer)?;
        SlicedSchedule::try_new(raw.schedule).map_err(D::Error::custom)
    }
}

/// Decodes canonical JSON, keeping validation failures distinct from
/// malformed payloads.
pub(super) fn decode(bytes: &[u8]) -> Result<SlicedSchedule> {
    let raw: CanonicalOwned = serde_json::from_slice(bytes)?;
    SlicedSchedule::try_new(raw.schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn sample_schedule() -> SlicedSchedule {
        let t0 = Utc.with_ymd_and_hms(2020, 3, 27, 9, 0, 0).unwrap();
        SlicedSchedule::try_new(vec![
            Interval::with_duration(t0, Duration::hours(1)).unwrap(),
            Interval::with_duration(t0 + Duration::hours(2), Duration::minutes(30)).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_serialize_shape() {
        let value = serde_json::to_value(sample_schedule()).unwrap();
        let elements = value["schedule"].as_array().unwrap();
        assert_eq!(elements.len(), 2);
        assert!(elements[0]["start"].is_string());
        assert!(elements[0]["end"].is_string());
    }

    #[test]
    fn test_serde_round_trip() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: SlicedSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let json = r#"{"schedule":[
            {"start":"2020-03-27T09:00:00Z","end":"2020-03-27T10:00:00Z"},
            {"start":"2020-03-27T09:00:00Z","end":"2020-03-27T10:00:00Z"}
        ]}"#;
        assert!(serde_json::from_str::<SlicedSchedule>(json).is_err());
        assert!(decode(json.as_bytes()).unwrap_err().is_invalid_elements());
    }

    #[test]
    fn test_decode_rejects_inverted_element() {
        let json = r#"{"schedule":[
            {"start":"2020-03-27T10:00:00Z","end":"2020-03-27T09:00:00Z"}
        ]}"#;
        let err = decode(json.as_bytes()).unwrap_err();
        assert!(matches!(err, crate::ScheduleError::Codec(_)));
    }
}
