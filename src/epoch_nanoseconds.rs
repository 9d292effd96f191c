use crate::{error::ErrorMessage, PeriodError, PeriodResult};

const NS_PER_MICROSECOND: i128 = 1_000;
const NS_PER_MILLISECOND: i128 = 1_000_000;
const NS_PER_SECOND: i128 = 1_000_000_000;

/// A UTC instant, counted in nanoseconds since `1970-01-01T00:00:00Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EpochNanoseconds(pub(crate) i128);

impl From<i64> for EpochNanoseconds {
    fn from(value: i64) -> Self {
        Self(i128::from(value))
    }
}

impl TryFrom<i128> for EpochNanoseconds {
    type Error = PeriodError;
    fn try_from(value: i128) -> Result<Self, Self::Error> {
        let nanos = Self(value);
        nanos.check_validity()?;
        Ok(nanos)
    }
}

impl TryFrom<u128> for EpochNanoseconds {
    type Error = PeriodError;
    fn try_from(value: u128) -> Result<Self, Self::Error> {
        let value = i128::try_from(value)
            .map_err(|_| PeriodError::range().with_enum(ErrorMessage::InstantOutOfRange))?;
        Self::try_from(value)
    }
}

impl EpochNanoseconds {
    /// The Unix epoch.
    pub const UNIX_EPOCH: Self = Self(0);

    pub fn from_seconds(seconds: i64) -> Self {
        Self(i128::from(seconds) * NS_PER_SECOND)
    }

    pub fn from_milliseconds(millis: i64) -> Self {
        Self(i128::from(millis) * NS_PER_MILLISECOND)
    }

    pub fn from_microseconds(micros: i64) -> Self {
        Self(i128::from(micros) * NS_PER_MICROSECOND)
    }

    #[inline]
    pub fn as_i128(&self) -> i128 {
        self.0
    }

    /// Returns whole seconds since the epoch, truncated toward zero.
    #[inline]
    pub fn as_seconds(&self) -> i64 {
        (self.0 / NS_PER_SECOND) as i64
    }

    /// Returns whole milliseconds since the epoch, truncated toward zero.
    #[inline]
    pub fn as_milliseconds(&self) -> i64 {
        (self.0 / NS_PER_MILLISECOND) as i64
    }

    /// Returns whole microseconds since the epoch, truncated toward zero.
    #[inline]
    pub fn as_microseconds(&self) -> i64 {
        (self.0 / NS_PER_MICROSECOND) as i64
    }

    pub fn check_validity(&self) -> PeriodResult<()> {
        if !is_valid_epoch_nanos(&self.0) {
            return Err(PeriodError::range().with_enum(ErrorMessage::InstantOutOfRange));
        }
        Ok(())
    }
}

/// Utility for determining if the nanos are within a valid range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    (crate::NS_MIN_INSTANT..=crate::NS_MAX_INSTANT).contains(nanos)
}
