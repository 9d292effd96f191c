//! The closed `Interval` type.

use core::fmt;

use crate::{
    error::ErrorMessage, host::HostClock, options::RangeMode, time::EpochNanoseconds, PeriodError,
    PeriodResult,
};

/// A closed interval `[start, end]` over a totally ordered time value.
///
/// A valid interval upholds `start <= end`. Use [`Interval::try_new`] to
/// construct a checked interval; [`Interval::new_unchecked`] and the tuple
/// conversion skip validation and leave it to the consumer, e.g.
/// [`IntervalMerger`](crate::IntervalMerger), which rejects inverted
/// intervals before doing any work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: Ord> Interval<T> {
    /// Creates a new interval, rejecting `start > end`.
    pub fn try_new(start: T, end: T) -> PeriodResult<Self> {
        let interval = Self::new_unchecked(start, end);
        interval.validate()?;
        Ok(interval)
    }

    /// Creates a new interval without checking the `start <= end` invariant.
    #[inline]
    #[must_use]
    pub const fn new_unchecked(start: T, end: T) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> &T {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &T {
        &self.end
    }

    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.start, self.end)
    }

    /// Returns whether `start <= end` holds.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    pub(crate) fn validate(&self) -> PeriodResult<()> {
        if !self.is_valid() {
            return Err(PeriodError::range().with_enum(ErrorMessage::InvalidInterval));
        }
        Ok(())
    }

    /// Returns whether the two intervals share at least one point.
    ///
    /// Touching boundaries count as overlapping, so `[10, 20]` overlaps
    /// `[20, 30]`.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.start > other.end || self.end < other.start)
    }

    /// Returns whether `value` lies within this interval under `mode`.
    pub fn contains(&self, value: &T, mode: RangeMode) -> bool {
        let after_start = if mode.includes_start() {
            self.start <= *value
        } else {
            self.start < *value
        };
        let before_end = if mode.includes_end() {
            *value <= self.end
        } else {
            *value < self.end
        };
        after_start && before_end
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// Returns the smallest interval containing both `self` and `other`.
    #[must_use]
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            start: self.start.clone().min(other.start.clone()),
            end: self.end.clone().max(other.end.clone()),
        }
    }

    /// Reduces a collection of intervals to their bounding interval.
    ///
    /// Returns `None` when `intervals` is empty.
    pub fn bounding<'a, I>(intervals: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        let mut iter = intervals.into_iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, |bound, next| bound.hull(next)))
    }
}

impl Interval<EpochNanoseconds> {
    /// Creates the interval spanning `start` up to the current time of `clock`.
    pub fn until_now(start: EpochNanoseconds, clock: &impl HostClock) -> PeriodResult<Self> {
        let now = clock.get_host_epoch_nanoseconds()?;
        Self::try_new(start, now)
    }
}

impl<T> From<(T, T)> for Interval<T> {
    fn from(value: (T, T)) -> Self {
        Self {
            start: value.0,
            end: value.1,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::Interval;
    use crate::{error::ErrorKind, options::RangeMode, time::EpochNanoseconds};
    use alloc::{string::ToString, vec, vec::Vec};

    #[test]
    fn inverted_interval_rejected() {
        let err = Interval::try_new(5, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let unchecked = Interval::new_unchecked(5, 1);
        assert!(!unchecked.is_valid());

        let point = Interval::try_new(3, 3).unwrap();
        assert!(point.is_valid());
    }

    #[test]
    fn closed_overlap() {
        let a = Interval::from((10, 20));
        assert!(a.overlaps(&Interval::from((20, 30))));
        assert!(a.overlaps(&Interval::from((0, 10))));
        assert!(a.overlaps(&Interval::from((12, 15))));
        assert!(a.overlaps(&Interval::from((0, 40))));
        assert!(!a.overlaps(&Interval::from((21, 30))));
        assert!(!a.overlaps(&Interval::from((0, 9))));
    }

    #[test]
    fn range_mode_containment() {
        let interval = Interval::from((10, 20));

        assert!(interval.contains(&10, RangeMode::Closed));
        assert!(interval.contains(&20, RangeMode::Closed));
        assert!(!interval.contains(&10, RangeMode::Open));
        assert!(!interval.contains(&20, RangeMode::Open));
        assert!(interval.contains(&15, RangeMode::Open));
        assert!(!interval.contains(&10, RangeMode::OpenClosed));
        assert!(interval.contains(&20, RangeMode::OpenClosed));
        assert!(interval.contains(&10, RangeMode::ClosedOpen));
        assert!(!interval.contains(&20, RangeMode::ClosedOpen));
        assert!(!interval.contains(&21, RangeMode::Closed));
    }

    #[test]
    fn hull_and_bounding() {
        let a = Interval::from((4, 8));
        let b = Interval::from((1, 5));
        assert_eq!(a.hull(&b), Interval::from((1, 8)));

        let intervals = vec![
            Interval::from((9, 12)),
            Interval::from((20, 25)),
            Interval::from((4, 8)),
        ];
        assert_eq!(
            Interval::bounding(&intervals),
            Some(Interval::from((4, 25)))
        );

        let empty: Vec<Interval<i32>> = Vec::new();
        assert_eq!(Interval::bounding(&empty), None);
    }

    #[test]
    fn until_now_with_fixed_clock() {
        // `()` is a clock stuck at the epoch.
        let start = EpochNanoseconds::from_seconds(-60);
        let interval = Interval::until_now(start, &()).unwrap();
        assert_eq!(interval.start(), &start);
        assert_eq!(interval.end(), &EpochNanoseconds::UNIX_EPOCH);

        let future = EpochNanoseconds::from_seconds(60);
        assert!(Interval::until_now(future, &()).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Interval::from((1, 5)).to_string(), "[1, 5]");
    }
}
