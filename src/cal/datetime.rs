//! Civil date-times, years, months, and weekdays, and the conversions
//! between civil date-times and seconds since the Unix epoch.

use core::fmt;

use log::debug;

use crate::cal::{DatePiece, TimePiece};
use crate::epoch::EpochSeconds;
use crate::util::{split_cycles, RangeExt};

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use timeutils::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.leap_year_calculations().1
    }

    /// Returns the number of days in this year: 366 for leap years, 365
    /// for the rest.
    pub fn day_count(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Returns the number of days in the given month of this year.
    ///
    /// ```
    /// use timeutils::{Year, Month};
    ///
    /// assert_eq!(Year(2016).month_length(Month::February), 29);
    /// assert_eq!(Year(2017).month_length(Month::February), 28);
    /// ```
    pub fn month_length(self, month: Month) -> i8 {
        month.days_in_month(self.is_leap_year())
    }

    /// Performs two related calculations for leap years, returning the
    /// results as a two-part tuple:
    ///
    /// 1. The number of leap years that have elapsed prior to this year,
    ///    counted from 2000 (so 2000 itself gives -1);
    /// 2. Whether this year is a leap year or not.
    fn leap_year_calculations(self) -> (i64, bool) {

        // This calculation is the reverse of `from_days_since_reference`.
        // 2000 starts a 400-year cycle, so the cycles can be counted from
        // year 0 and moved along by five, without subtracting 2000 from a
        // year that might be near the bottom of `i64`.
        let (cycles_since_year_0, mut remainder) = split_cycles(self.0, 400);
        let num_400y_cycles = cycles_since_year_0 - 5;

        let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let num_100y_cycles = remainder / 100;
        remainder -= num_100y_cycles * 100;

        let leap_years_elapsed = remainder / 4
            + 97 * num_400y_cycles  // There are 97 leap years in 400 years
            + 24 * num_100y_cycles  // There are 24 leap years in 100 years
            - if currently_leap_year { 1 } else { 0 };

        (leap_years_elapsed, currently_leap_year)
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. Leap seconds are ignored, as POSIX does.
const SECONDS_IN_DAY: i64 = 86400;

/// The year the private broken-down form counts its years from.
const BROKEN_DOWN_BASE_YEAR: i64 = 1900;

/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// The inverse calculation works from this reference point rather than
/// from the epoch itself. With the reference immediately after a possible
/// leap day, at the start of a 400-year Gregorian cycle, working out the
/// year, month, and day of an instant is reduced to repeated division:
/// February, the only month of varying length, always comes last.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.

/// Number of days between **1st January, 1970** and **1st January, 2000**,
/// plus one for the leap day that `leap_year_calculations` subtracts for
/// the year 2000 itself.
const DAYS_TO_2000: i64 = 10958;

/// The number of days elapsed at the end of each month, starting at the
/// beginning of March (the first month after the reference point above),
/// going backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March


/// A **civil date-time** is a calendar date and a time of day, with no
/// time zone attached. Everything in this crate treats it as UTC.
///
/// Values produced by this crate’s conversions always carry a matching
/// weekday and day-of-year. The fields are private, so the only way to
/// end up with fields that disagree with each other is to ask for it by
/// name, with `with_prefilled_values`.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CivilDateTime {
    year:    i64,
    month:   i8,
    day:     i8,
    hour:    i8,
    minute:  i8,
    second:  i8,
    weekday: i8,
    yearday: i16,
}

impl CivilDateTime {

    /// Creates a new civil date-time from the given fields, checking each
    /// of them for validity first.
    ///
    /// The month must be between 1 and 12, the day must exist in that
    /// month of that year, and the time must be between 00:00:00 and
    /// 23:59:59. Anything else returns an error, rather than rolling over.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use timeutils::{CivilDateTime, DatePiece};
    ///
    /// let date = CivilDateTime::new(2016, 2, 29, 12, 0, 0).unwrap();
    /// assert_eq!(date.weekday(), 1);
    ///
    /// assert!(CivilDateTime::new(1900, 2, 29, 12, 0, 0).is_err());
    /// ```
    pub fn new(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        let valid_day = match Month::from_one(month) {
            Ok(m)   => day.is_within(1 .. Year(year).month_length(m) + 1),
            Err(_)  => false,
        };

        if valid_day && hour.is_within(0..24) && minute.is_within(0..60) && second.is_within(0..60) {
            Ok(Self::normalized(year, month, day, hour, minute, second))
        }
        else {
            debug!("rejected civil date-time {}-{}-{} {}:{}:{}", year, month, day, hour, minute, second);
            Err(Error::OutOfRange)
        }
    }

    /// Creates a new civil date-time from the given fields, rolling any
    /// out-of-range values over into the neighbouring period, the way C’s
    /// `mktime` does: the 32nd of January becomes the 1st of February,
    /// month 13 becomes January of the next year, and day 0 becomes the
    /// last day of the previous month.
    ///
    /// The weekday and day-of-year are worked out for the resulting date.
    ///
    /// ```rust
    /// use timeutils::{CivilDateTime, DatePiece};
    ///
    /// let date = CivilDateTime::normalized(1900, 2, 29, 0, 0, 0);
    /// assert_eq!((date.month(), date.day()), (3, 1));
    /// ```
    pub fn normalized(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> Self {
        Self::at(civil_to_epoch_seconds(year, month, day, hour, minute, second))
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, UTC.
    ///
    /// Every `i64` has a date-time, even the ones hundreds of billions of
    /// years away.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {

        // Split the input value into days and seconds, then let the day
        // count do the hard work. The reference point moves in whole days,
        // after the split, so it can't overflow.
        let (days, secs) = split_cycles(seconds_since_1970_epoch, SECONDS_IN_DAY);
        let date = from_days_since_reference(days - EPOCH_DIFFERENCE);

        Self {
            year:    date.year,
            month:   date.month,
            day:     date.day,
            hour:    (secs / 60 / 60) as i8,
            minute:  (secs / 60 % 60) as i8,
            second:  (secs % 60) as i8,
            weekday: date.weekday,
            yearday: date.yearday,
        }
    }

    /// Computes a complete date-time from the given epoch value.
    pub fn from_epoch(epoch: EpochSeconds) -> Self {
        Self::at(epoch.seconds())
    }

    /// Returns the number of seconds between the Unix epoch and this
    /// date-time.
    ///
    /// Only the year, month, day, hour, minute, and second are used; the
    /// weekday and day-of-year are ignored. Fields out of their usual
    /// ranges roll over, as with `normalized`.
    pub fn to_epoch(&self) -> EpochSeconds {
        EpochSeconds::at(civil_to_epoch_seconds(self.year, self.month, self.day, self.hour, self.minute, self.second))
    }

    /// Creates a new civil date-time with exactly the given field values.
    ///
    /// **The values are not checked for validity**, and the weekday and
    /// day-of-year are taken as given rather than worked out. This exists
    /// so that arbitrary values, such as those read back from a clock
    /// chip, can be passed to the formatter unchanged.
    #[allow(clippy::too_many_arguments)]
    pub fn with_prefilled_values(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8, weekday: i8, yearday: i16) -> Self {
        Self { year, month, day, hour, minute, second, weekday, yearday }
    }

    /// Creates a new date-time set to the current time, according to the
    /// operating system.
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        Self::from_epoch(EpochSeconds::now())
    }

    /// Returns the day of the week as a named value.
    pub fn day_of_week(&self) -> Result<Weekday, Error> {
        Weekday::from_zero(self.weekday)
    }

    /// Returns the month as a named value.
    pub fn month_of_year(&self) -> Result<Month, Error> {
        Month::from_one(self.month)
    }
}

impl DatePiece for CivilDateTime {
    fn year(&self) -> i64 { self.year }
    fn month(&self) -> i8 { self.month }
    fn day(&self) -> i8 { self.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> i8 { self.weekday }
}

impl TimePiece for CivilDateTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
}


/// Converts the given civil fields into seconds since the Unix epoch,
/// rolling over any out-of-range fields.
///
/// Years more than about 292 billion years from 1970 have no `i64` epoch
/// value; for those the count wraps around instead of panicking.
pub(crate) fn civil_to_epoch_seconds(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> i64 {
    BrokenDown::from_civil(year, month, day, hour, minute, second).to_epoch_seconds()
}


/// A **broken-down time** is the working form used on the way to an
/// epoch value. It counts years from 1900 and months from zero, the way
/// C’s `struct tm` does, and holds every field as a wide integer so that
/// out-of-range values can be carried into the next field up.
///
/// None of this leaks out: `from_civil` is the only way in, and it takes
/// the same full years and one-based months as the rest of the crate.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
struct BrokenDown {
    years_since_1900:    i64,
    months_from_january: i64,
    day:    i64,
    hour:   i64,
    minute: i64,
    second: i64,
}

impl BrokenDown {
    fn from_civil(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> Self {
        Self {
            years_since_1900:    year.wrapping_sub(BROKEN_DOWN_BASE_YEAR),
            months_from_january: i64::from(month) - 1,
            day:    i64::from(day),
            hour:   i64::from(hour),
            minute: i64::from(minute),
            second: i64::from(second),
        }
    }

    /// Calculates the number of seconds that have elapsed since the 1st
    /// January, 1970.
    ///
    /// Months outside 0–11 get folded into the year first; everything
    /// smaller than a month is linear, so days, hours, minutes, and
    /// seconds roll over without any special treatment.
    fn to_epoch_seconds(&self) -> i64 {
        let (extra_years, month_index) = split_cycles(self.months_from_january, 12);
        let year = self.years_since_1900
                       .wrapping_add(BROKEN_DOWN_BASE_YEAR)
                       .wrapping_add(extra_years);

        // `split_cycles` keeps the index within 0 .. 12.
        let month = MONTHS[month_index as usize];

        // Wrapping arithmetic is exact whenever the final answer fits in
        // an `i64`, whatever happens on the way there.
        let days = days_to_month_start(year, month).wrapping_add(self.day - 1);
        days.wrapping_mul(SECONDS_IN_DAY)
            .wrapping_add(self.hour * 3600 + self.minute * 60 + self.second)
    }
}

/// Calculates the number of days between the 1st January, 1970 and the
/// first day of the given month, wrapping if that doesn't fit.
fn days_to_month_start(year: i64, month: Month) -> i64 {
    let (leap_days_elapsed, is_leap_year) = Year(year).leap_year_calculations();

    // Work out the number of days from the start of 1970 to now,
    // which is a multiple of the number of years since 2000...
    year.wrapping_sub(2000).wrapping_mul(365)

        // Plus the number of days between the start of 1970 and the
        // start of 2000...
        .wrapping_add(DAYS_TO_2000)

        // Plus the number of leap years that have elapsed between
        // now and the start of 2000...
        .wrapping_add(leap_days_elapsed)

        // Plus the number of days in all the months leading up to
        // the current month...
        .wrapping_add(i64::from(month.days_before_start()))

        // Plus an extra leap day for *this* year.
        .wrapping_add(if is_leap_year && month >= March { 1 } else { 0 })
}


/// The date fields worked out from a number of days.
struct DayFields {
    year:    i64,
    month:   i8,
    day:     i8,
    yearday: i16,
    weekday: i8,
}

/// Computes the year, month, day, weekday, and day-of-year given the
/// number of days that have passed since the 1st March, 2000.
fn from_days_since_reference(days: i64) -> DayFields {

    // The Gregorian calendar works in 400-year cycles, which repeat
    // themselves ever after.
    //
    // This calculation works by finding the number of 400-year,
    // 100-year, and 4-year cycles, then constantly subtracting the
    // number of leftover days.
    let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

    // The last 100-year cycle of the 400 has the extra leap day, so it
    // can be one day longer than `DAYS_IN_100Y`; `min` keeps that day in
    // the fourth cycle instead of spilling into a fifth.
    let num_100y_cycles = core::cmp::min(remainder / DAYS_IN_100Y, 3);
    remainder -= num_100y_cycles * DAYS_IN_100Y;

    let num_4y_cycles = remainder / DAYS_IN_4Y;
    remainder -= num_4y_cycles * DAYS_IN_4Y;

    let mut years = core::cmp::min(remainder / 365, 3);
    remainder -= years * 365;  // remainder is now days left in this year

    // Leap year calculation goes thusly:
    //
    // 1. If the year is a multiple of 400, it’s a leap year.
    // 2. Else, if the year is a multiple of 100, it’s *not* a leap year.
    // 3. Else, if the year is a multiple of 4, it’s a leap year again!
    //
    // The year counted here starts in March, so "this year" is the one
    // its January and February belong to.
    let days_this_year =
        if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                  else { 365 };

    // Find out which number day of the year it is.
    // The 306 here refers to the number of days in a year excluding
    // January and February.
    let mut day_of_year = remainder + days_this_year - 306;
    if day_of_year >= days_this_year {
        day_of_year -= days_this_year;  // wrap around for January and February
    }

    years +=   4 * num_4y_cycles
           + 100 * num_100y_cycles
           + 400 * num_400y_cycles;

    // Work out the month and number of days into the month by scanning
    // the time triangle, finding the month that has the correct number
    // of days elapsed at the end of it.
    // (it’s “11 - index” below because the triangle goes backwards)
    let result = TIME_TRIANGLE.iter()
                              .enumerate()
                              .find(|&(_, days)| *days <= remainder);

    let (mut month, month_days) = match result {
        Some((index, days)) => (11 - index as i64, remainder - *days),
        None => (0, remainder),  // No month found? Then it’s March.
    };

    // Month 0 is March here, so move it along to January-based counting.
    month += 2;

    if month >= 12 {
        years += 1;   // wrap around for January and February
        month -= 12;
    }

    DayFields {
        year:    years + 2000,
        month:   (month + 1) as i8,
        day:     (month_days + 1) as i8,
        yearday: day_of_year as i16,
        weekday: days_to_weekday(days),
    }
}

/// Computes the weekday, with Sunday as 0, given the number of days that
/// have passed since the 1st March, 2000.
fn days_to_weekday(days: i64) -> i8 {
    // March 1st, 2000 was a Wednesday, so add 3 to the number of days.
    split_cycles(days + 3, 7).1 as i8
}


/// The error returned by the checked constructors when a field is outside
/// the range allowed for it.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "datetime field out of range")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
}


/// A month of the year, starting with January, and ending with December.
///
/// This is 1-indexed, to have January become 1 when you use `as i8`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

static MONTHS: [Month; 12] = [
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use timeutils::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        if month.is_within(1..13) {
            Ok(MONTHS[month as usize - 1])
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    ///
    /// ```rust
    /// use timeutils::Month;
    /// assert_eq!(Month::from_zero(5), Ok(Month::June));
    /// assert!(Month::from_zero(12).is_err());
    /// ```
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        Self::from_one(month.wrapping_add(1))
    }
}


/// A named day of the week.
///
/// Sunday is Day 0, following POSIX `tm_wday`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

impl Weekday {

    /// Returns the number of days this weekday comes after Sunday.
    pub fn days_from_sunday(self) -> i8 {
        self as i8
    }

    /// Returns the ISO 8601 weekday number, from Monday as 1 to Sunday
    /// as 7.
    pub fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday => 7,
            other  => other as i8,
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use timeutils::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        Ok(match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::OutOfRange),
        })
    }

    /// Return the weekday based on an ISO 8601 number, with Monday as
    /// Day 1 and Sunday as Day 7.
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        match weekday {
            7 => Ok(Sunday),
            1 ..= 6 => Self::from_zero(weekday),
            _ => Err(Error::OutOfRange),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn some_leap_years() {
        for year in [2004, 2008, 2012, 2016].iter() {
            assert!(CivilDateTime::new(*year, 2, 29, 0, 0, 0).is_ok());
            assert!(CivilDateTime::new(*year + 1, 2, 29, 0, 0, 0).is_err());
        }
        assert!(CivilDateTime::new(1600, 2, 29, 0, 0, 0).is_ok());
        assert!(CivilDateTime::new(1601, 2, 29, 0, 0, 0).is_err());
        assert!(CivilDateTime::new(1602, 2, 29, 0, 0, 0).is_err());
    }

    #[test]
    fn new() {
        for year in 1..3000 {
            assert!(CivilDateTime::new(year,  1, 32, 0, 0, 0).is_err()); assert!(CivilDateTime::new(year,  2, 30, 0, 0, 0).is_err()); assert!(CivilDateTime::new(year,  3, 32, 0, 0, 0).is_err());
            assert!(CivilDateTime::new(year,  4, 31, 0, 0, 0).is_err()); assert!(CivilDateTime::new(year,  5, 32, 0, 0, 0).is_err()); assert!(CivilDateTime::new(year,  6, 31, 0, 0, 0).is_err());
            assert!(CivilDateTime::new(year,  7, 32, 0, 0, 0).is_err()); assert!(CivilDateTime::new(year,  8, 32, 0, 0, 0).is_err()); assert!(CivilDateTime::new(year,  9, 31, 0, 0, 0).is_err());
            assert!(CivilDateTime::new(year, 10, 32, 0, 0, 0).is_err()); assert!(CivilDateTime::new(year, 11, 31, 0, 0, 0).is_err()); assert!(CivilDateTime::new(year, 12, 32, 0, 0, 0).is_err());
        }
    }

    #[test]
    fn time_fields_checked() {
        assert!(CivilDateTime::new(2017, 1, 1, 24, 0, 0).is_err());
        assert!(CivilDateTime::new(2017, 1, 1, 0, 60, 0).is_err());
        assert!(CivilDateTime::new(2017, 1, 1, 0, 0, 60).is_err());
        assert!(CivilDateTime::new(2017, 1, 1, -1, 0, 0).is_err());
        assert!(CivilDateTime::new(2017, 13, 1, 0, 0, 0).is_err());
        assert!(CivilDateTime::new(2017, 0, 1, 0, 0, 0).is_err());
    }

    #[test]
    fn to_from_days_since_reference() {
        for &(year, month, day) in [
            (1970,  1,  1), (   1,  1,  1), (1971,  1,  1),
            (1973,  1,  1), (1977,  1,  1), (1989, 11, 10),
            (1990,  7,  8), (2014,  7, 13), (2001,  2,  3),
            (2000,  2, 29), (2100,  3,  1), (2400, 12, 31),
        ].iter() {
            let days = days_to_month_start(year, MONTHS[month as usize - 1]) + i64::from(day) - 1;
            let fields = from_days_since_reference(days - EPOCH_DIFFERENCE);

            assert_eq!((fields.year, fields.month, fields.day), (year, month, day));
        }
    }

    #[test]
    fn broken_down_encoding() {
        let tm = BrokenDown::from_civil(2017, 1, 1, 0, 0, 0);
        assert_eq!(tm.years_since_1900, 117);
        assert_eq!(tm.months_from_january, 0);
    }

    #[test]
    fn month_carries_into_year() {
        let december = BrokenDown::from_civil(2016, 12, 1, 0, 0, 0).to_epoch_seconds();
        let thirteenth = BrokenDown::from_civil(2015, 24, 1, 0, 0, 0).to_epoch_seconds();
        assert_eq!(december, thirteenth);

        let zeroth = BrokenDown::from_civil(2017, 0, 1, 0, 0, 0).to_epoch_seconds();
        assert_eq!(zeroth, december);
    }

    #[test]
    fn leap_years_far_from_2000() {
        assert!(Year(i64::MIN).is_leap_year());
        assert!(!Year(i64::MAX).is_leap_year());
        assert!(Year(-400).is_leap_year());
        assert!(!Year(-100).is_leap_year());
        assert_eq!(Year(2400).leap_year_calculations(), (96, true));
        assert_eq!(Year(1600).leap_year_calculations(), (-98, true));
    }

    #[test]
    fn huge_years_wrap() {
        let year = i64::max_value() / 100;
        let first  = civil_to_epoch_seconds(year, 1, 1, 0, 0, 0);
        let second = civil_to_epoch_seconds(year, 1, 2, 0, 0, 0);
        assert_eq!(second.wrapping_sub(first), SECONDS_IN_DAY);

        let _ = civil_to_epoch_seconds(i64::min_value(), 1, 1, 0, 0, 0);
    }

    #[test]
    fn yearday_is_zero_based() {
        assert_eq!(CivilDateTime::at(0).yearday, 0);
        assert_eq!(CivilDateTime::normalized(2016, 12, 31, 0, 0, 0).yearday, 365);
        assert_eq!(CivilDateTime::normalized(2017, 12, 31, 0, 0, 0).yearday, 364);
        assert_eq!(CivilDateTime::normalized(2016, 3, 1, 0, 0, 0).yearday, 60);
    }

    #[test]
    fn weekdays() {
        assert_eq!(Weekday::from_one(7), Ok(Weekday::Sunday));
        assert_eq!(Weekday::from_one(1), Ok(Weekday::Monday));
        assert!(Weekday::from_one(0).is_err());
        assert_eq!(Weekday::Sunday.days_from_monday_as_one(), 7);
        assert_eq!(Weekday::Saturday.days_from_sunday(), 6);
    }
}
