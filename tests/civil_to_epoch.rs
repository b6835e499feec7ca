extern crate timeutils;
use timeutils::{civil_to_epoch, civil_to_epoch_filled, CivilDateTime};
use timeutils::{DatePiece, TimePiece};


#[test]
fn unix_epoch() {
    assert_eq!(civil_to_epoch(1970, 1, 1, 0, 0, 0).seconds(), 0);
}

#[test]
fn new_year_2017() {
    assert_eq!(civil_to_epoch(2017, 1, 1, 0, 0, 0).seconds(), 1_483_228_800);
}

#[test]
fn billennium() {
    assert_eq!(civil_to_epoch(2001, 9, 9, 1, 46, 40).seconds(), 1_000_000_000);
}

#[test]
fn one_two_three_four() {
    assert_eq!(civil_to_epoch(2009, 2, 13, 23, 31, 30).seconds(), 1_234_567_890);
}

#[test]
fn last_32_bit_second() {
    let epoch = civil_to_epoch(2038, 1, 19, 3, 14, 7);
    assert_eq!(epoch.seconds(), 2_147_483_647);
    assert_eq!(epoch.to_i32(), Some(i32::max_value()));
}

#[test]
fn one_second_too_many() {
    let epoch = civil_to_epoch(2038, 1, 19, 3, 14, 8);
    assert_eq!(epoch.to_i32(), None);
}

#[test]
fn before_the_epoch() {
    assert_eq!(civil_to_epoch(1969, 12, 31, 23, 59, 59).seconds(), -1);
    assert_eq!(civil_to_epoch(1938, 4, 24, 22, 13, 20).seconds(), -1_000_000_000);
}

#[test]
fn filled_values() {
    let (epoch, date) = civil_to_epoch_filled(2017, 1, 1, 0, 0, 0);

    assert_eq!(epoch.seconds(), 1_483_228_800);
    assert_eq!(date.weekday(), 0);
    assert_eq!(date.yearday(), 0);
}

#[test]
fn filled_values_are_normalized() {
    let (epoch, date) = civil_to_epoch_filled(2016, 12, 31, 23, 59, 60);

    assert_eq!(epoch.seconds(), 1_483_228_800);
    assert_eq!((date.year(), date.month(), date.day()), (2017, 1, 1));
    assert_eq!((date.hour(), date.minute(), date.second()), (0, 0, 0));
}

#[test]
fn method_agrees_with_function() {
    let date = CivilDateTime::new(2024, 7, 4, 12, 30, 0).unwrap();
    assert_eq!(date.to_epoch(), civil_to_epoch(2024, 7, 4, 12, 30, 0));
}

#[test]
fn years_past_the_end_of_time() {
    let year = i64::max_value() / 100;
    let new_year = civil_to_epoch(year, 1, 1, 0, 0, 0).seconds();
    let next_day = civil_to_epoch(year, 1, 2, 0, 0, 0).seconds();

    assert_eq!(next_day.wrapping_sub(new_year), 86_400);
}

#[test]
fn years_before_the_start_of_time() {
    let year = i64::min_value();
    let new_year = civil_to_epoch(year, 1, 1, 0, 0, 0).seconds();
    let next_hour = civil_to_epoch(year, 1, 1, 1, 0, 0).seconds();

    assert_eq!(next_hour.wrapping_sub(new_year), 3_600);
}
