use alloc::string::String;

use crate::host::HostClock;
use crate::time::EpochNanoseconds;
use crate::{PeriodError, PeriodResult};

use web_time::{SystemTime, UNIX_EPOCH};

/// A host clock backed by the operating system's wall clock.
///
/// This implementation is backed by [`std::time::SystemTime`] (through
/// `web_time` on wasm targets) and [`iana_time_zone`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    /// Returns the host's IANA time zone identifier, e.g. `"Europe/Berlin"`.
    ///
    /// Intervals compare raw instants, so callers holding local times must
    /// normalize them with this zone before building intervals.
    pub fn time_zone_identifier() -> PeriodResult<String> {
        get_system_timezone()
    }
}

impl HostClock for SystemClock {
    fn get_host_epoch_nanoseconds(&self) -> PeriodResult<EpochNanoseconds> {
        get_system_nanoseconds()
    }
}

#[inline]
pub(crate) fn get_system_timezone() -> PeriodResult<String> {
    iana_time_zone::get_timezone()
        .map_err(|_| PeriodError::general("Error fetching system time zone"))
}

/// Returns the system time in nanoseconds.
pub(crate) fn get_system_nanoseconds() -> PeriodResult<EpochNanoseconds> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| PeriodError::general("Error fetching system time"))?
        .as_nanos();
    EpochNanoseconds::try_from(nanos)
}
