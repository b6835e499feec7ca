//! Parsing ISO 8601 date-time strings, such as a clock setting typed
//! into a serial console.

use std::error;
use std::fmt;

use iso8601::Date;
use log::debug;

use crate::cal::datetime::{self, CivilDateTime, Weekday, Year};
use crate::cal::DatePiece;


impl CivilDateTime {

    /// Parses an ISO 8601 date-time string, such as
    /// `2017-01-01T10:00:00Z`, into a civil date-time in UTC.
    ///
    /// Calendar, ordinal, and week dates are all accepted. If the string
    /// carries a UTC offset, it is taken off, so `12:00:00+02:00` comes
    /// out as ten o’clock.
    ///
    /// ```rust
    /// use timeutils::{CivilDateTime, TimePiece};
    ///
    /// let when = CivilDateTime::parse("2017-01-01T12:00:00+02:00").unwrap();
    /// assert_eq!(when.hour(), 10);
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        parse_iso_8601(input)
    }
}


/// Parses an ISO 8601 date-time string into a civil date-time in UTC.
pub fn parse_iso_8601(string: &str) -> Result<CivilDateTime, Error> {
    let parsed = match iso8601::datetime(string) {
        Ok(p)  => p,
        Err(e) => {
            debug!("unparsable date-time {:?}: {:?}", string, e);
            return Err(Error::InvalidCharacter);
        }
    };

    let hour   = narrow(parsed.time.hour)?;
    let minute = narrow(parsed.time.minute)?;
    let second = narrow(parsed.time.second)?;

    let local = match parsed.date {
        Date::YMD { year, month, day } => {
            CivilDateTime::new(i64::from(year), narrow(month)?, narrow(day)?, hour, minute, second)
        },
        Date::Week { year, ww, d } => {
            from_week_date(i64::from(year), i64::from(ww), narrow(d)?, hour, minute, second)
        },
        Date::Ordinal { year, ddd } => {
            from_ordinal_date(i64::from(year), i64::from(ddd), hour, minute, second)
        },
    }.map_err(Error::InvalidDate)?;

    let offset = i64::from(parsed.time.tz_offset_hours) * 3600
               + i64::from(parsed.time.tz_offset_minutes) * 60;

    if offset == 0 {
        Ok(local)
    }
    else {
        Ok(CivilDateTime::at(local.to_epoch().seconds() - offset))
    }
}

/// Builds a date-time from a year and a 1-based day of that year.
fn from_ordinal_date(year: i64, yearday: i64, hour: i8, minute: i8, second: i8) -> Result<CivilDateTime, datetime::Error> {
    if yearday < 1 || yearday > i64::from(Year(year).day_count()) {
        return Err(datetime::Error::OutOfRange);
    }

    let start = CivilDateTime::new(year, 1, 1, hour, minute, second)?;
    Ok(CivilDateTime::at(start.to_epoch().seconds() + (yearday - 1) * 86400))
}

/// Builds a date-time from an ISO week-numbering year, week, and weekday
/// (Monday as 1).
///
/// Week 1 is the week with the year’s first Thursday in it, which is
/// always the week the 4th of January falls in. Dates early in week 1 or
/// late in week 52 or 53 can belong to the neighbouring calendar year.
fn from_week_date(year: i64, week: i64, weekday: i8, hour: i8, minute: i8, second: i8) -> Result<CivilDateTime, datetime::Error> {
    let weekday = Weekday::from_one(weekday)?;
    if week < 1 || week > 53 {
        return Err(datetime::Error::OutOfRange);
    }

    let jan_4 = CivilDateTime::new(year, 1, 4, hour, minute, second)?;
    let correction = i64::from(Weekday::from_zero(jan_4.weekday())?.days_from_monday_as_one()) + 3;

    // 1-based day of the year, which can fall outside the year itself.
    let yearday = 7 * week + i64::from(weekday.days_from_monday_as_one()) - correction;
    Ok(CivilDateTime::at(jan_4.to_epoch().seconds() + (yearday - 4) * 86400))
}

fn narrow<N: Into<i64>>(value: N) -> Result<i8, Error> {
    let value = value.into();
    if value >= 0 && value <= i64::from(i8::MAX) {
        Ok(value as i8)
    }
    else {
        Err(Error::InvalidDate(datetime::Error::OutOfRange))
    }
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    InvalidCharacter,
    InvalidDate(datetime::Error),
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::InvalidCharacter     => None,
            Error::InvalidDate(ref err) => Some(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidCharacter     => write!(f, "an invalid character was found"),
            Error::InvalidDate(ref err) => err.fmt(f),
        }
    }
}
