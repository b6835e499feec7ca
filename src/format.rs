//! # Diagnostic time formatting
//!
//! Firmware that talks over a serial console usually wants one thing from
//! a clock: a short, fixed line it can print to show what time it thinks
//! it is. This module renders exactly one layout:
//!
//! ```text
//! HH:MM:SS D/M/YYYY W [TZ]
//! ```
//!
//! The hour, minute, and second are zero-padded to two digits. The day,
//! month, and year are printed as plain numbers, so the 5th of March is
//! `5/3`. The weekday is printed as its number, with Sunday as 0, and
//! never as a name, so there are no name tables to keep in memory.
//!
//! A formatter object holds the two options:
//!
//! ```rust
//! use timeutils::{CivilDateTime, TimeFormat};
//!
//! let when = CivilDateTime::new(2017, 3, 5, 5, 30, 9).unwrap();
//!
//! let mut line = timeutils::format::TimeLine::new();
//! TimeFormat::new().timezone("UTC").trailing_newline(false).format(&when, &mut line).unwrap();
//! assert_eq!(line.as_str(), "05:30:09 5/3/2017 0 UTC");
//! ```
//!
//! ## Sinks
//!
//! Output goes to anything that implements `Sink`, which is
//! `core::fmt::Write` plus a few serial-console style methods with
//! default implementations. A UART driver that already implements
//! `fmt::Write` only needs an empty `impl Sink for Uart {}`.

use core::fmt::{self, Write};

use num_traits::Zero;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::CivilDateTime;
use crate::epoch::EpochSeconds;


/// Something characters can be written to, such as a serial port.
///
/// Only `write_str` (from `fmt::Write`) has to be implemented.
pub trait Sink: Write {

    /// Writes an integer as decimal text.
    fn write_int(&mut self, value: i64) -> fmt::Result {
        write!(self, "{}", value)
    }

    /// Writes a fractional number as decimal text, with two digits after
    /// the point.
    fn write_fraction(&mut self, value: f64) -> fmt::Result {
        write!(self, "{:.2}", value)
    }

    /// Ends the current line. The default is a carriage return and line
    /// feed, as serial terminals expect.
    fn write_line_end(&mut self) -> fmt::Result {
        self.write_str("\r\n")
    }
}

#[cfg(feature = "std")]
impl Sink for String {}

impl<const N: usize> Sink for heapless::String<N> {}


/// A numeric type that can be printed by `print_digits`.
pub trait Digits: Copy + PartialOrd + Zero + num_traits::NumCast {

    /// Writes this value, unpadded, to the sink.
    fn print<S: Sink + ?Sized>(self, sink: &mut S) -> fmt::Result;
}

macro_rules! integer_digits {
    ($($t:ty),*) => {
        $(
            impl Digits for $t {
                fn print<S: Sink + ?Sized>(self, sink: &mut S) -> fmt::Result {
                    sink.write_int(i64::from(self))
                }
            }
        )*
    };
}

integer_digits!(i8, i16, i32, i64, u8, u16, u32);

impl Digits for f32 {
    fn print<S: Sink + ?Sized>(self, sink: &mut S) -> fmt::Result {
        sink.write_fraction(f64::from(self))
    }
}

impl Digits for f64 {
    fn print<S: Sink + ?Sized>(self, sink: &mut S) -> fmt::Result {
        sink.write_fraction(self)
    }
}

/// Writes the given value, with a leading zero if it is at least 0 and
/// less than 10. The same rule covers integers and fractions, so `9.5`
/// gets a zero and `10.0` does not.
///
/// ```rust
/// use timeutils::print_digits;
///
/// let mut out = timeutils::format::TimeLine::new();
/// print_digits(&mut out, 7).unwrap();
/// print_digits(&mut out, 9.5).unwrap();
/// assert_eq!(out.as_str(), "0709.50");
/// ```
pub fn print_digits<S: Sink + ?Sized, N: Digits>(sink: &mut S, value: N) -> fmt::Result {
    if is_single_digit(value) {
        sink.write_char('0')?;
    }

    value.print(sink)
}

fn is_single_digit<N: Digits>(value: N) -> bool {
    match num_traits::cast::<u8, N>(10) {
        Some(ten) => value >= N::zero() && value < ten,
        None      => false,
    }
}


/// One piece of the output line.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field {
    Literal(&'static str),

    Hour,
    Minute,
    Second,

    Day,
    Month,
    Year,
    Weekday,
}

impl Field {
    fn format<T, S>(self, when: &T, sink: &mut S) -> fmt::Result
    where T: DatePiece + TimePiece + ?Sized,
          S: Sink + ?Sized,
    {
        match self {
            Field::Literal(s)  => sink.write_str(s),
            Field::Hour        => print_digits(sink, when.hour()),
            Field::Minute      => print_digits(sink, when.minute()),
            Field::Second      => print_digits(sink, when.second()),
            Field::Day         => sink.write_int(i64::from(when.day())),
            Field::Month       => sink.write_int(i64::from(when.month())),
            Field::Year        => sink.write_int(when.year()),
            Field::Weekday     => sink.write_int(i64::from(when.weekday())),
        }
    }
}

/// The fields of the output line, in order, up to and including the
/// weekday.
pub const LAYOUT: &[Field] = &[
    Field::Hour, Field::Literal(":"), Field::Minute, Field::Literal(":"), Field::Second,
    Field::Literal(" "),
    Field::Day, Field::Literal("/"), Field::Month, Field::Literal("/"), Field::Year,
    Field::Literal(" "),
    Field::Weekday,
];

/// The longest line `to_line` can produce: 64 bytes is enough for any
/// date in the years 0 to 9999 and a timezone label of 40 characters.
pub type TimeLine = heapless::String<64>;


/// A **time formatter** writes date-times in the diagnostic layout, with
/// an optional timezone label and an optional line ending.
///
/// The default has no label and does end the line.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TimeFormat<'a> {

    /// Text written after the weekday, separated by a space. Nothing at
    /// all is written for `None`.
    pub timezone_label: Option<&'a str>,

    /// Whether to end the line after the last field.
    pub trailing_newline: bool,
}

impl<'a> Default for TimeFormat<'a> {
    fn default() -> Self {
        Self { timezone_label: None, trailing_newline: true }
    }
}

impl<'a> TimeFormat<'a> {

    /// Creates a formatter with no timezone label, which ends the line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timezone label written after the weekday.
    pub fn timezone(mut self, label: &'a str) -> Self {
        self.timezone_label = Some(label);
        self
    }

    /// Sets whether to end the line after the last field.
    pub fn trailing_newline(mut self, newline: bool) -> Self {
        self.trailing_newline = newline;
        self
    }

    /// Writes the given date-time to the sink.
    ///
    /// The values are written exactly as they are, with no checks, so a
    /// clock that reports the 45th of the month gets it printed.
    pub fn format<T, S>(&self, when: &T, sink: &mut S) -> fmt::Result
    where T: DatePiece + TimePiece + ?Sized,
          S: Sink + ?Sized,
    {
        for field in LAYOUT {
            field.format(when, sink)?;
        }

        if let Some(label) = self.timezone_label {
            sink.write_char(' ')?;
            sink.write_str(label)?;
        }

        if self.trailing_newline {
            sink.write_line_end()?;
        }

        Ok(())
    }

    /// Splits the given epoch value into a UTC date-time, then writes it
    /// to the sink.
    pub fn format_epoch<S: Sink + ?Sized>(&self, epoch: EpochSeconds, sink: &mut S) -> fmt::Result {
        self.format(&CivilDateTime::from_epoch(epoch), sink)
    }

    /// Renders the given date-time into a fixed-size buffer, failing if
    /// it doesn’t fit.
    pub fn to_line<T>(&self, when: &T) -> Result<TimeLine, fmt::Error>
    where T: DatePiece + TimePiece + ?Sized,
    {
        let mut line = TimeLine::new();
        self.format(when, &mut line)?;
        Ok(line)
    }
}


/// Lets a `fmt::Formatter` act as a sink, so `Display` can share the
/// layout code.
struct FormatterSink<'f, 'a>(&'f mut fmt::Formatter<'a>);

impl<'f, 'a> Write for FormatterSink<'f, 'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s)
    }
}

impl<'f, 'a> Sink for FormatterSink<'f, 'a> {}

/// Displays the diagnostic layout, without a timezone label or a line
/// ending.
impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        TimeFormat::new().trailing_newline(false).format(self, &mut FormatterSink(f))
    }
}
