//! Sliced schedules: immutable timelines of disjoint time slices.
//!
//! A [`SlicedSchedule`](models::SlicedSchedule) answers "which slot covers
//! this instant" and "what is the next/previous slot" without re-sorting or
//! re-validating on every query. Element sets are validated once, at
//! construction; the result never changes afterwards.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Interval`, `SlicedSchedule`
//! - **`validation`**: Element-set checks (duplicate starts/ends, overlap)
//! - **`query`**: Containment, directional matching, range extraction
//!   (synchronous and off-thread)
//! - **`codec`**: Canonical and web API v1 JSON encodings
//! - **`display`**: Human-readable rendering
//!
//! # Architecture
//!
//! Data flows one way: raw intervals → validation → schedule → queries or
//! codecs. Decoding feeds back into validation, so no invariant is ever
//! trusted from external input. The schedule is `Send + Sync` and shares its
//! sequence between clones.

pub mod codec;
pub mod display;
pub mod error;
pub mod models;
pub mod query;
pub mod validation;

pub use error::{Result, ScheduleError};
