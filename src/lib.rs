#![crate_name = "timeutils"]
#![cfg_attr(not(feature = "std"), no_std)]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Time and power utilities for small [microcontroller](https://en.wikipedia.org/wiki/Microcontroller)
//! firmware: civil date-time to Unix epoch conversion, a fixed diagnostic
//! time layout for serial consoles, and sleep/watchdog control.
//!
//! # Examples
//!
//! ```
//! use timeutils::{civil_to_epoch, epoch_to_civil, DatePiece, TimeFormat};
//!
//! let epoch = civil_to_epoch(2017, 1, 1, 0, 0, 0);
//! assert_eq!(epoch.seconds(), 1_483_228_800);
//!
//! let when = epoch_to_civil(epoch);
//! assert_eq!(when.weekday(), 0);
//!
//! let line = TimeFormat::new().timezone("UTC").to_line(&when).unwrap();
//! assert_eq!(line.as_str(), "00:00:00 1/1/2017 0 UTC\r\n");
//! ```

mod cal;
pub use cal::{DatePiece, TimePiece};
pub use cal::datetime::{CivilDateTime, Year, Month, Weekday, Error};
pub use cal::convenience::{civil_to_epoch, civil_to_epoch_filled, epoch_to_civil};
#[cfg(feature = "parse")] pub use cal::parse;

mod epoch;
pub use epoch::EpochSeconds;

pub mod format;
pub use format::{TimeFormat, Sink, print_digits};

pub mod power;
pub use power::{HardwareControl, SleepMode, WatchdogTimeout};

#[cfg(feature = "std")] mod system;
mod util;
