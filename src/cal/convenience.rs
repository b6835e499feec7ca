//! Free-standing conversion functions, for callers that have the fields
//! of a date-time to hand rather than a `CivilDateTime` value.
//!
//! # Example
//! ```
//! use timeutils::{civil_to_epoch, epoch_to_civil, DatePiece};
//!
//! let epoch = civil_to_epoch(2017, 1, 1, 0, 0, 0);
//! assert_eq!(epoch.seconds(), 1483228800);
//! assert_eq!(epoch_to_civil(epoch).year(), 2017);
//! ```

use crate::cal::datetime::{civil_to_epoch_seconds, CivilDateTime};
use crate::epoch::EpochSeconds;


/// Converts the given date and time, in UTC, to seconds since the Unix
/// epoch.
///
/// The year is a full year (such as 2017) and the month runs from 1 to 12.
/// Nothing is checked: fields outside their usual ranges roll over into
/// the neighbouring period, so the 30th of February is the 1st or 2nd of
/// March.
pub fn civil_to_epoch(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> EpochSeconds {
    EpochSeconds::at(civil_to_epoch_seconds(year, month, day, hour, minute, second))
}

/// Converts the given date and time to seconds since the Unix epoch, and
/// also returns the normalized date-time, with its weekday and day of the
/// year filled in.
///
/// ```
/// use timeutils::{civil_to_epoch_filled, DatePiece};
///
/// let (epoch, when) = civil_to_epoch_filled(2017, 1, 32, 0, 0, 0);
/// assert_eq!(epoch.seconds(), 1485907200);
/// assert_eq!((when.month(), when.day(), when.weekday()), (2, 1, 3));
/// ```
pub fn civil_to_epoch_filled(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> (EpochSeconds, CivilDateTime) {
    let epoch = civil_to_epoch(year, month, day, hour, minute, second);
    (epoch, CivilDateTime::from_epoch(epoch))
}

/// Converts seconds since the Unix epoch into a date and time in UTC.
pub fn epoch_to_civil(epoch: EpochSeconds) -> CivilDateTime {
    CivilDateTime::from_epoch(epoch)
}
