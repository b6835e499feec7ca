//! Exact points on a timeline, counted in seconds from the Unix epoch.

use core::convert::TryFrom;
use core::fmt;

use crate::cal::datetime::CivilDateTime;
#[cfg(feature = "std")] use crate::system::sys_time;


/// An **epoch value** is an exact point on the timeline, irrespective of
/// calendar format: the number of seconds since midnight, 1st January,
/// 1970, UTC, ignoring leap seconds.
///
/// Internally, this is a 64-bit signed integer. Firmware that stores
/// timestamps in 32 bits can narrow it with `to_i32`, which refuses
/// instead of wrapping.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EpochSeconds(i64);

impl EpochSeconds {

    /// Creates a new epoch value set to the given number of seconds since
    /// the Unix epoch.
    pub fn at(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Creates a new epoch value set to the Unix epoch itself.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Creates a new epoch value set to the computer’s current time.
    #[cfg(feature = "std")]
    #[cfg_attr(not(any(unix, windows)), allow(unused_unsafe))]
    pub fn now() -> Self {
        let (seconds, _milliseconds) = unsafe { sys_time() };
        Self(seconds)
    }

    /// Returns the number of seconds since the Unix epoch.
    pub fn seconds(self) -> i64 {
        self.0
    }

    /// Returns the number of seconds as a 32-bit value, if it fits.
    ///
    /// ```
    /// use timeutils::EpochSeconds;
    ///
    /// assert_eq!(EpochSeconds::at(1483228800).to_i32(), Some(1483228800));
    /// assert_eq!(EpochSeconds::at(1 << 40).to_i32(), None);
    /// ```
    pub fn to_i32(self) -> Option<i32> {
        i32::try_from(self.0).ok()
    }

    /// Splits this value into a UTC date and time.
    pub fn to_civil(self) -> CivilDateTime {
        CivilDateTime::from_epoch(self)
    }
}

impl fmt::Debug for EpochSeconds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EpochSeconds({})", self.0)
    }
}

impl From<i64> for EpochSeconds {
    fn from(seconds: i64) -> Self {
        Self(seconds)
    }
}

impl From<i32> for EpochSeconds {
    fn from(seconds: i32) -> Self {
        Self(i64::from(seconds))
    }
}

impl From<EpochSeconds> for i64 {
    fn from(epoch: EpochSeconds) -> Self {
        epoch.0
    }
}
