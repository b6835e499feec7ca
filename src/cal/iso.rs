//! ISO 8601 rendering, used for `Debug` output.

use core::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::CivilDateTime;
use crate::util::RangeExt;


impl fmt::Debug for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.year();
        if year.is_within(0 .. 10000) {
            write!(f, "CivilDateTime({:04}-{:02}-{:02}T", year, self.month(), self.day())?;
        }
        else {
            write!(f, "CivilDateTime({:+05}-{:02}-{:02}T", year, self.month(), self.day())?;
        }

        write!(f, "{:02}:{:02}:{:02})", self.hour(), self.minute(), self.second())
    }
}
