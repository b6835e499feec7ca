extern crate timeutils;
use timeutils::{civil_to_epoch, CivilDateTime};
use timeutils::{DatePiece, TimePiece};


#[test]
fn thirty_second_of_january() {
    assert_eq!(civil_to_epoch(2017, 1, 32, 0, 0, 0).seconds(), 1_485_907_200);
    assert_eq!(civil_to_epoch(2017, 1, 32, 0, 0, 0), civil_to_epoch(2017, 2, 1, 0, 0, 0));
}

#[test]
fn thirteenth_month() {
    assert_eq!(civil_to_epoch(2016, 13, 1, 0, 0, 0), civil_to_epoch(2017, 1, 1, 0, 0, 0));
}

#[test]
fn month_zero() {
    assert_eq!(civil_to_epoch(2017, 0, 1, 0, 0, 0).seconds(), 1_480_550_400);
}

#[test]
fn negative_month() {
    assert_eq!(civil_to_epoch(2017, -1, 1, 0, 0, 0), civil_to_epoch(2016, 11, 1, 0, 0, 0));
}

#[test]
fn day_zero() {
    let date = CivilDateTime::normalized(2017, 3, 0, 0, 0, 0);
    assert_eq!((date.year(), date.month(), date.day()), (2017, 2, 28));
}

#[test]
fn sixtieth_second() {
    let date = CivilDateTime::normalized(2016, 12, 31, 23, 59, 60);
    assert_eq!((date.year(), date.month(), date.day()), (2017, 1, 1));
    assert_eq!((date.hour(), date.minute(), date.second()), (0, 0, 0));
}

#[test]
fn negative_second() {
    assert_eq!(civil_to_epoch(2017, 1, 1, 0, 0, -1).seconds(), 1_483_228_799);
}

#[test]
fn twenty_fifth_hour() {
    let date = CivilDateTime::normalized(2017, 1, 1, 24, 0, 0);
    assert_eq!((date.day(), date.hour()), (2, 0));
    assert_eq!(date.weekday(), 1);
}

#[test]
fn everything_at_once() {
    // 14th month, 0th day, 25th hour, 61st minute.
    let date = CivilDateTime::normalized(2016, 14, 0, 24, 60, 0);
    assert_eq!((date.year(), date.month(), date.day()), (2017, 2, 1));
    assert_eq!((date.hour(), date.minute()), (1, 0));
}
