//! The `period_rs` crate computes unions of overlapping time intervals.
//!
//! Given a base interval and a pool of candidate intervals, the
//! [`IntervalMerger`] absorbs every candidate that is connected to the base
//! through a chain of overlaps, and reports the bounding interval of the
//! result.
//!
//! ```rust
//! use period_rs::{Interval, IntervalMerger, MaxTimePeriod};
//!
//! let base = Interval::try_new(1, 5).unwrap();
//! let mut pool = vec![
//!     Interval::try_new(4, 8).unwrap(),
//!     Interval::try_new(9, 12).unwrap(),
//!     Interval::try_new(20, 25).unwrap(),
//! ];
//!
//! let merger = IntervalMerger::try_new(base).unwrap();
//!
//! // `max_time_period` leaves the pool alone.
//! let period = merger.max_time_period(&pool).unwrap();
//! assert_eq!(period, MaxTimePeriod::Merged(Interval::try_new(1, 8).unwrap()));
//!
//! // `union_set` moves the absorbed intervals out of the pool.
//! let union = merger.union_set(&mut pool).unwrap();
//! assert_eq!(union.matched(), &[Interval::try_new(4, 8).unwrap()]);
//! assert_eq!(pool.len(), 2);
//! ```
//!
//! Intervals are closed: `[10, 20]` and `[20, 30]` overlap. Any totally
//! ordered value can serve as the time point; [`time::EpochNanoseconds`] is
//! provided as a UTC instant for callers without one of their own.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod host;
pub mod interval;
pub mod merge;
pub mod options;

#[cfg(feature = "sys")]
mod sys;

mod epoch_nanoseconds;

#[doc(inline)]
pub use error::PeriodError;

/// The `period_rs` result type
pub type PeriodResult<T> = Result<T, PeriodError>;

pub mod time {
    pub use crate::epoch_nanoseconds::EpochNanoseconds;
}

pub use crate::{
    interval::Interval,
    merge::{max_time_period, union_set, IntervalMerger, MaxTimePeriod, UnionSet},
    options::RangeMode,
};

#[cfg(feature = "sys")]
pub use crate::sys::SystemClock;

#[doc(hidden)]
#[macro_export]
macro_rules! period_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::PeriodError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::PeriodError::assert());
        }
    };
}

// Relevant numeric constants
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: u64 = MS_PER_DAY as u64 * 1_000_000;
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
/// Max instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MAX_INSTANT: i128 = NS_PER_DAY as i128 * 100_000_000i128;
/// Min instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MIN_INSTANT: i128 = -NS_MAX_INSTANT;
