//! The interval union engine.
//!
//! Given a base interval and a pool of candidates, [`IntervalMerger`] absorbs
//! every candidate that overlaps the growing union until no candidate is left
//! that touches it. The result is the connected component of the base within
//! the pool, along with its bounding interval.

use alloc::vec::Vec;
use core::mem;

use crate::{error::ErrorMessage, period_assert, Interval, PeriodError, PeriodResult};


/// Computes the transitive overlap closure of a base interval against a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalMerger<T> {
    base: Interval<T>,
}

impl<T: Ord + Clone> IntervalMerger<T> {
    /// Creates a merger around `base`, rejecting an inverted base.
    pub fn try_new(base: Interval<T>) -> PeriodResult<Self> {
        base.validate()?;
        Ok(Self { base })
    }

    #[inline]
    pub fn base(&self) -> &Interval<T> {
        &self.base
    }

    /// Moves every interval of `pool` that is transitively connected to the
    /// base through overlaps into the returned [`UnionSet`].
    ///
    /// `pool` is mutated: absorbed intervals are removed, the rest keep their
    /// relative order. If any interval in `pool` is inverted, an error is
    /// returned and `pool` is left untouched.
    ///
    /// ## Algorithm
    ///
    ///   1. Scan the remaining pool for intervals overlapping the current bound.
    ///   2. If the scan found nothing, stop.
    ///   3. Otherwise, move the hits into the result and widen the bound to
    ///      cover them, then go back to 1.
    ///
    /// Every productive round shrinks the pool, so the loop runs at most
    /// `pool.len()` productive rounds.
    pub fn union_set(&self, pool: &mut Vec<Interval<T>>) -> PeriodResult<UnionSet<T>> {
        if let Some(_index) = pool.iter().position(|candidate| !candidate.is_valid()) {
            #[cfg(feature = "log")]
            log::debug!("rejecting pool: interval at index {_index} is inverted");
            return Err(PeriodError::range().with_enum(ErrorMessage::InvalidInterval));
        }

        let pool_len = pool.len();
        let mut bound = self.base.clone();
        let mut matched = Vec::new();
        let mut rounds = Vec::new();

        loop {
            let (absorbed, remaining): (Vec<_>, Vec<_>) = mem::take(pool)
                .into_iter()
                .partition(|candidate| bound.overlaps(candidate));
            *pool = remaining;

            if absorbed.is_empty() {
                break;
            }

            bound = absorbed.iter().fold(bound, |bound, next| bound.hull(next));

            #[cfg(feature = "log")]
            log::trace!(
                "union round {}: absorbed {} intervals, {} left in pool",
                rounds.len() + 1,
                absorbed.len(),
                pool.len()
            );

            rounds.push(bound.clone());
            matched.extend(absorbed);
        }

        period_assert!(
            pool.len() + matched.len() == pool_len,
            "union lost intervals: {} in, {} out",
            pool_len,
            pool.len() + matched.len()
        );

        Ok(UnionSet { matched, rounds })
    }

    /// Returns the bounding interval of the base and everything in `pool`
    /// connected to it.
    ///
    /// `pool` is cloned before merging and is never mutated. When no interval
    /// overlaps the base, the base itself is returned as
    /// [`MaxTimePeriod::Isolated`].
    pub fn max_time_period(&self, pool: &[Interval<T>]) -> PeriodResult<MaxTimePeriod<T>> {
        let mut candidates = pool.to_vec();
        let union = self.union_set(&mut candidates)?;
        Ok(match union.into_bound() {
            Some(bound) => MaxTimePeriod::Merged(bound),
            None => MaxTimePeriod::Isolated(self.base.clone()),
        })
    }
}

/// Absorbs every interval of `pool` connected to `base`.
///
/// See [`IntervalMerger::union_set`].
pub fn union_set<T: Ord + Clone>(
    base: Interval<T>,
    pool: &mut Vec<Interval<T>>,
) -> PeriodResult<UnionSet<T>> {
    IntervalMerger::try_new(base)?.union_set(pool)
}

/// Returns the bounding interval of `base` and everything in `pool` connected
/// to it, without mutating `pool`.
///
/// See [`IntervalMerger::max_time_period`].
pub fn max_time_period<T: Ord + Clone>(
    base: Interval<T>,
    pool: &[Interval<T>],
) -> PeriodResult<MaxTimePeriod<T>> {
    IntervalMerger::try_new(base)?.max_time_period(pool)
}

/// The intervals absorbed by a union, with the bound reached after each round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionSet<T> {
    matched: Vec<Interval<T>>,
    rounds: Vec<Interval<T>>,
}

impl<T> UnionSet<T> {
    /// The absorbed intervals, in absorption order.
    #[inline]
    pub fn matched(&self) -> &[Interval<T>] {
        &self.matched
    }

    /// The bounding interval after each productive round. Each entry contains
    /// the previous one.
    #[inline]
    pub fn rounds(&self) -> &[Interval<T>] {
        &self.rounds
    }

    /// The final bounding interval of the base and every absorbed interval,
    /// or `None` if nothing was absorbed.
    #[inline]
    pub fn bound(&self) -> Option<&Interval<T>> {
        self.rounds.last()
    }

    #[inline]
    pub fn into_bound(mut self) -> Option<Interval<T>> {
        self.rounds.pop()
    }

    #[inline]
    pub fn into_matched(self) -> Vec<Interval<T>> {
        self.matched
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

impl<T> IntoIterator for UnionSet<T> {
    type Item = Interval<T>;
    type IntoIter = alloc::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matched.into_iter()
    }
}

/// The outcome of [`IntervalMerger::max_time_period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxTimePeriod<T> {
    /// At least one pool interval overlapped; holds the bounding interval.
    Merged(Interval<T>),
    /// Nothing overlapped; holds the unchanged base.
    Isolated(Interval<T>),
}

impl<T> MaxTimePeriod<T> {
    #[inline]
    pub fn interval(&self) -> &Interval<T> {
        match self {
            Self::Merged(interval) | Self::Isolated(interval) => interval,
        }
    }

    #[inline]
    pub fn into_interval(self) -> Interval<T> {
        match self {
            Self::Merged(interval) | Self::Isolated(interval) => interval,
        }
    }

    #[inline]
    pub fn is_merged(&self) -> bool {
        matches!(self, Self::Merged(_))
    }
}
