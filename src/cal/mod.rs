//! Gregorian calendar calculations, which convert between years, months,
//! days, hours, minutes, and seconds and a count of seconds since the
//! Unix epoch.

pub(crate) mod datetime;
pub(crate) mod iso;
#[cfg(feature="parse")] pub mod parse;
pub mod convenience;


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
///
/// All values are returned as plain numbers, exactly as stored, so that
/// a value that was never checked can still be printed.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year, from 1 (January) to 12 (December).
    fn month(&self) -> i8;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 0 (the 1st of January) to 365.
    fn yearday(&self) -> i16;

    /// The day of the week, from 0 (Sunday) to 6 (Saturday).
    fn weekday(&self) -> i8;
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;
}
