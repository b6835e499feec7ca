#![cfg(feature = "parse")]

extern crate timeutils;
use timeutils::{CivilDateTime, DatePiece, TimePiece};
use timeutils::parse::Error;


#[test]
fn calendar_date() {
    let date = CivilDateTime::parse("2009-02-13T23:31:30Z").unwrap();
    assert_eq!(date.to_epoch().seconds(), 1_234_567_890);
    assert_eq!(date.weekday(), 5);
}

#[test]
fn negative_offset() {
    let date = CivilDateTime::parse("2016-12-31T19:00:00-05:00").unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2017, 1, 1));
    assert_eq!(date.hour(), 0);
}

#[test]
fn week_date() {
    let date = CivilDateTime::parse("2001-W05-6T04:05:06Z").unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2001, 2, 3));
    assert_eq!(date.weekday(), 6);
}

#[test]
fn thirteenth_month() {
    assert!(CivilDateTime::parse("2017-13-01T00:00:00Z").is_err());
}

#[test]
fn rubbish() {
    assert_eq!(CivilDateTime::parse("half past eight"), Err(Error::InvalidCharacter));
}
