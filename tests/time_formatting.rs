#![cfg(feature = "std")]

extern crate timeutils;
use timeutils::{print_digits, CivilDateTime, EpochSeconds, Sink, TimeFormat};


#[test]
fn padded_fields() {
    let date = CivilDateTime::normalized(2017, 3, 5, 5, 30, 9);
    let mut out = String::new();
    TimeFormat::new().format(&date, &mut out).unwrap();

    assert_eq!(out, "05:30:09 5/3/2017 0\r\n");
}

#[test]
fn timezone_label() {
    let mut out = String::new();
    TimeFormat::new().timezone("UTC").format_epoch(EpochSeconds::at(1_234_567_890), &mut out).unwrap();

    assert_eq!(out, "23:31:30 13/2/2009 5 UTC\r\n");
}

#[test]
fn no_line_ending() {
    let date = CivilDateTime::normalized(2016, 12, 31, 23, 59, 58);
    let line = TimeFormat::new().trailing_newline(false).to_line(&date).unwrap();

    assert_eq!(line.as_str(), "23:59:58 31/12/2016 6");
}

#[test]
fn label_without_line_ending() {
    let date = CivilDateTime::normalized(1970, 1, 1, 0, 0, 0);
    let line = TimeFormat::new().timezone("GMT").trailing_newline(false).to_line(&date).unwrap();

    assert_eq!(line.as_str(), "00:00:00 1/1/1970 4 GMT");
}

#[test]
fn display_matches_layout() {
    let date = CivilDateTime::normalized(2001, 9, 9, 1, 46, 40);
    assert_eq!(date.to_string(), "01:46:40 9/9/2001 0");
}

#[test]
fn values_from_a_clock_chip() {
    let garbage = CivilDateTime::with_prefilled_values(2017, 14, 45, 25, 61, 99, 9, 400);
    let mut out = String::new();
    TimeFormat::new().format(&garbage, &mut out).unwrap();

    assert_eq!(out, "25:61:99 45/14/2017 9\r\n");
}

#[test]
fn earliest_epoch() {
    let mut out = String::new();
    TimeFormat::new().format_epoch(EpochSeconds::at(i64::min_value()), &mut out).unwrap();

    assert_eq!(out, "08:29:52 27/1/-292277022657 0\r\n");
}

#[test]
fn digits() {
    let mut out = String::new();
    print_digits(&mut out, 7_u8).unwrap();
    out.push(' ');
    print_digits(&mut out, 42_i32).unwrap();
    out.push(' ');
    print_digits(&mut out, 2.5_f64).unwrap();

    assert_eq!(out, "07 42 02.50");
}


struct Serial {
    sent: Vec<u8>,
}

impl std::fmt::Write for Serial {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.sent.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

impl Sink for Serial {
    fn write_line_end(&mut self) -> std::fmt::Result {
        self.sent.push(b'\n');
        Ok(())
    }
}

#[test]
fn custom_sink() {
    let mut serial = Serial { sent: Vec::new() };
    TimeFormat::new().format_epoch(EpochSeconds::at_epoch(), &mut serial).unwrap();

    assert_eq!(serial.sent, b"00:00:00 1/1/1970 4\n".to_vec());
}
