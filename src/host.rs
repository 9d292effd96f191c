//! Trait definitions for accessing values from the host environment.
//!
//! The merge engine never reads the clock itself. Callers that build
//! intervals relative to "now" go through a [`HostClock`].

use crate::{time::EpochNanoseconds, PeriodResult};

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    fn get_host_epoch_nanoseconds(&self) -> PeriodResult<EpochNanoseconds>;
}

// Implement empty providers

impl HostClock for () {
    fn get_host_epoch_nanoseconds(&self) -> PeriodResult<EpochNanoseconds> {
        Ok(EpochNanoseconds::UNIX_EPOCH)
    }
}

impl<C: HostClock + ?Sized> HostClock for &C {
    fn get_host_epoch_nanoseconds(&self) -> PeriodResult<EpochNanoseconds> {
        (**self).get_host_epoch_nanoseconds()
    }
}
