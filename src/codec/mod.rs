//! JSON codecs for sliced schedules.
//!
//! Two encodings of the same content, selected out-of-band through
//! [`CodingOptions`]; the payload itself carries no version tag.
//!
//! | Mode | Payload |
//! |------|---------|
//! | canonical (no version) | `{"schedule":[{"start":<instant>,"end":<instant>}, ...]}` with chrono's native instant form |
//! | web API v1 | `{"schedule":[{"start":"2020-03-27T09:00:00.000Z","end":"..."}, ...]}` |
//!
//! Decoding never trusts the payload: the decoded elements always go
//! through full construction validation.
//!
//! # Usage
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use sliced_schedule::codec::{self, ApiVersion, CodingOptions};
//! use sliced_schedule::models::{Interval, SlicedSchedule};
//!
//! let t0 = Utc.with_ymd_and_hms(2020, 3, 27, 9, 0, 0).unwrap();
//! let schedule =
//!     SlicedSchedule::try_new(vec![Interval::with_duration(t0, Duration::hours(1)).unwrap()])
//!         .unwrap();
//!
//! let options = CodingOptions::web_api(ApiVersion::V1);
//! let json = codec::encode_to_string(&schedule, &options).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"schedule":[{"start":"2020-03-27T09:00:00.000Z","end":"2020-03-27T10:00:00.000Z"}]}"#
//! );
//! assert_eq!(codec::decode_str(&json, &options).unwrap(), schedule);
//! ```

mod canonical;
mod wire;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::SlicedSchedule;

pub use wire::WireScheduleV1;

/// Versions of the web API wire encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiVersion {
    /// ISO-8601 strings with fractional seconds, UTC.
    V1,
}

/// Out-of-band selection of the encoding.
///
/// `version: None` (the default) selects the canonical encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingOptions {
    /// Web API version, if any.
    pub version: Option<ApiVersion>,
}

impl CodingOptions {
    /// Canonical encoding.
    pub fn canonical() -> Self {
        Self::default()
    }

    /// Web API wire encoding of the given version.
    pub fn web_api(version: ApiVersion) -> Self {
        Self {
            version: Some(version),
        }
    }
}

/// Encodes a schedule as JSON bytes.
pub fn encode(schedule: &SlicedSchedule, options: &CodingOptions) -> Result<Vec<u8>> {
    let bytes = match options.version {
        None => serde_json::to_vec(schedule)?,
        Some(ApiVersion::V1) => serde_json::to_vec(&WireScheduleV1::from(schedule))?,
    };
    Ok(bytes)
}

/// Encodes a schedule as a JSON string.
pub fn encode_to_string(schedule: &SlicedSchedule, options: &CodingOptions) -> Result<String> {
    let json = match options.version {
        None => serde_json::to_string(schedule)?,
        Some(ApiVersion::V1) => serde_json::to_string(&WireScheduleV1::from(schedule))?,
    };
    Ok(json)
}

/// Decodes a schedule from JSON bytes.
///
/// # Errors
/// - [`ScheduleError::Codec`](crate::ScheduleError::Codec) if the payload
///   does not have the selected shape.
/// - [`ScheduleError::InvalidElements`](crate::ScheduleError::InvalidElements)
///   if the decoded elements cannot form a schedule.
pub fn decode(bytes: &[u8], options: &CodingOptions) -> Result<SlicedSchedule> {
    match options.version {
        None => canonical::decode(bytes),
        Some(ApiVersion::V1) => {
            let wire: WireScheduleV1 = serde_json::from_slice(bytes)?;
            wire.into_schedule()
        }
    }
}

/// Decodes a schedule from a JSON string.
pub fn decode_str(json: &str, options: &CodingOptions) -> Result<SlicedSchedule> {
    decode(json.as_bytes(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interval;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Random valid schedule with sub-millisecond instants.
    fn random_schedule(rng: &mut StdRng) -> SlicedSchedule {
        let count: i32 = rng.random_range(1..100);
        let duration = Duration::minutes(rng.random_range(60..121));
        let shift = Duration::nanoseconds(rng.random_range(0..3_600_000_000_000));
        let origin = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();

        let elements = (0..count).map(|i| {
            Interval::with_duration(origin + duration * i + shift, duration).unwrap()
        });
        SlicedSchedule::try_new(elements).unwrap()
    }

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(CodingOptions::default(), CodingOptions::canonical());
        assert!(CodingOptions::default().version.is_none());
    }

    #[test]
    fn test_round_trip_canonical() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = CodingOptions::canonical();
        for _ in 0..20 {
            let s = random_schedule(&mut rng);
            let bytes = encode(&s, &options).unwrap();
            assert_eq!(decode(&bytes, &options).unwrap(), s);
        }
    }

    #[test]
    fn test_round_trip_v1() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = CodingOptions::web_api(ApiVersion::V1);
        for _ in 0..20 {
            let s = random_schedule(&mut rng);
            let bytes = encode(&s, &options).unwrap();
            assert_eq!(decode(&bytes, &options).unwrap(), s);
        }
    }

    #[test]
    fn test_round_trip_empty() {
        let s = SlicedSchedule::new();
        for options in [CodingOptions::canonical(), CodingOptions::web_api(ApiVersion::V1)] {
            let json = encode_to_string(&s, &options).unwrap();
            assert_eq!(json, r#"{"schedule":[]}"#);
            assert!(decode_str(&json, &options).unwrap().is_empty());
        }
    }

    #[test]
    fn test_decode_revalidates() {
        let overlapping = r#"{"schedule":[
            {"start":"2020-03-27T09:00:00.000Z","end":"2020-03-27T11:00:00.000Z"},
            {"start":"2020-03-27T10:00:00.000Z","end":"2020-03-27T12:00:00.000Z"}
        ]}"#;
        for options in [CodingOptions::canonical(), CodingOptions::web_api(ApiVersion::V1)] {
            let err = decode_str(overlapping, &options).unwrap_err();
            assert!(err.is_invalid_elements());
        }
    }

    #[test]
    fn test_decode_sorts() {
        let unsorted = r#"{"schedule":[
            {"start":"2020-03-27T10:00:00.000Z","end":"2020-03-27T11:00:00.000Z"},
            {"start":"2020-03-27T09:00:00.000Z","end":"2020-03-27T10:00:00.000Z"}
        ]}"#;
        let s = decode_str(unsorted, &CodingOptions::web_api(ApiVersion::V1)).unwrap();
        let first: DateTime<Utc> = Utc.with_ymd_and_hms(2020, 3, 27, 9, 0, 0).unwrap();
        assert_eq!(s.first().unwrap().start(), first);
    }

    #[test]
    fn test_decode_wrong_shape() {
        let err = decode_str(r#"{"slots":[]}"#, &CodingOptions::canonical()).unwrap_err();
        assert!(matches!(err, crate::ScheduleError::Codec(_)));

        let err = decode_str("not json", &CodingOptions::web_api(ApiVersion::V1)).unwrap_err();
        assert!(matches!(err, crate::ScheduleError::Codec(_)));
    }
}
