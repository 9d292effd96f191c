//! Options for working with intervals.
//!
//! Interval containment can be evaluated under several boundary rules, see
//! [`RangeMode`].

use core::{fmt, str::FromStr};

/// The boundary rule used when testing whether a point lies within an interval.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    /// Both ends excluded: `start < value < end`.
    Open,
    /// Both ends included: `start <= value <= end`.
    #[default]
    Closed,
    /// Start excluded, end included: `start < value <= end`.
    OpenClosed,
    /// Start included, end excluded: `start <= value < end`.
    ClosedOpen,
}

impl RangeMode {
    /// Returns whether the mode includes the interval's start point.
    #[inline]
    pub fn includes_start(self) -> bool {
        matches!(self, Self::Closed | Self::ClosedOpen)
    }

    /// Returns whether the mode includes the interval's end point.
    #[inline]
    pub fn includes_end(self) -> bool {
        matches!(self, Self::Closed | Self::OpenClosed)
    }
}

/// A parsing error for `RangeMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRangeModeError;

impl fmt::Display for ParseRangeModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid range mode")
    }
}

impl FromStr for RangeMode {
    type Err = ParseRangeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "open-closed" => Ok(Self::OpenClosed),
            "closed-open" => Ok(Self::ClosedOpen),
            _ => Err(ParseRangeModeError),
        }
    }
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::OpenClosed => "open-closed",
            Self::ClosedOpen => "closed-open",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ParseRangeModeError, RangeMode};
    use alloc::string::ToString;
    use core::str::FromStr;

    #[test]
    fn range_mode_parsing() {
        for mode in [
            RangeMode::Open,
            RangeMode::Closed,
            RangeMode::OpenClosed,
            RangeMode::ClosedOpen,
        ] {
            assert_eq!(RangeMode::from_str(&mode.to_string()), Ok(mode));
        }
        assert_eq!(RangeMode::from_str("half-open"), Err(ParseRangeModeError));
        assert_eq!(RangeMode::from_str("Closed"), Err(ParseRangeModeError));
        assert_eq!(RangeMode::default(), RangeMode::Closed);
    }

    #[test]
    fn range_mode_boundaries() {
        assert!(!RangeMode::Open.includes_start());
        assert!(!RangeMode::Open.includes_end());
        assert!(RangeMode::ClosedOpen.includes_start());
        assert!(!RangeMode::ClosedOpen.includes_end());
        assert!(RangeMode::OpenClosed.includes_end());
    }
}
