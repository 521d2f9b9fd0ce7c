//! Sliced schedule domain models.
//!
//! Provides the interval primitive and the immutable schedule store built
//! from it. Domain-agnostic within calendaring: applicable to booking slots,
//! shift plans, opening hours and any single-timeline slot layout.
//!
//! # Domain Mappings
//!
//! | sliced-schedule | Booking | Clinic | Broadcasting |
//! |-----------------|---------|--------|--------------|
//! | Interval | Bookable slot | Appointment slot | Programme slot |
//! | SlicedSchedule | Slot plan | Daily roster | Channel grid |

mod interval;
mod schedule;

pub use interval::Interval;
pub use schedule::SlicedSchedule;
