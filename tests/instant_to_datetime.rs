use picotime::{UtcTime, TimeDelta, Month};
use picotime::{DatePiece, TimePiece};


fn at(seconds: i64) -> UtcTime {
    UtcTime::from_time_since_epoch(TimeDelta::seconds(seconds)).unwrap()
}


#[test]
fn a_long_time_ago() {
    let date = at(-1_000_000_000);

    assert_eq!(date.year(),   1938);
    assert_eq!(date.month(),  Month::April);
    assert_eq!(date.day(),    24);
    assert_eq!(date.hour(),   22);
    assert_eq!(date.minute(), 13);
    assert_eq!(date.second(), 20);
}


#[test]
fn unix_epoch() {
    let date = at(0);

    assert_eq!(date.year(),   1970);
    assert_eq!(date.month(),  Month::January);
    assert_eq!(date.day(),    1);
    assert_eq!(date.hour(),   0);
    assert_eq!(date.minute(), 0);
    assert_eq!(date.second(), 0);
}


#[test]
fn billennium() {
    let date = at(1_000_000_000);

    assert_eq!(date.year(),   2001);
    assert_eq!(date.month(),  Month::September);
    assert_eq!(date.day(),    9);
    assert_eq!(date.hour(),   1);
    assert_eq!(date.minute(), 46);
    assert_eq!(date.second(), 40);
}


#[test]
fn numbers() {
    let date = at(1_234_567_890);

    assert_eq!(date.year(),   2009);
    assert_eq!(date.month(),  Month::February);
    assert_eq!(date.day(),    13);
    assert_eq!(date.hour(),   23);
    assert_eq!(date.minute(), 31);
    assert_eq!(date.second(), 30);
}


#[test]
fn year_2038_problem() {
    let date = at(0x7FFF_FFFF);

    assert_eq!(date.year(),   2038);
    assert_eq!(date.month(),  Month::January);
    assert_eq!(date.day(),    19);
    assert_eq!(date.hour(),   3);
    assert_eq!(date.minute(), 14);
    assert_eq!(date.second(), 7);
}


#[test]
fn just_some_date() {
    let date = at(146_096 * 86_400);

    assert_eq!(date.year(),   2369);
    assert_eq!(date.month(),  Month::December);
    assert_eq!(date.day(),    31);
    assert_eq!(date.hour(),   0);
}


#[test]
fn leap_year_29th_feb() {
    let date = at(1_456_704_000);

    assert_eq!(date.year(),   2016);
    assert_eq!(date.month(),  Month::February);
    assert_eq!(date.day(),    29);
}


#[test]
fn leap_year_some_date() {
    let date = at(1_459_468_800);

    assert_eq!(date.year(),   2016);
    assert_eq!(date.month(),  Month::April);
    assert_eq!(date.day(),    1);
}


#[test]
fn subsecond_groups() {
    let date = UtcTime::from_time_since_epoch(TimeDelta::picoseconds(1_006_007_008_009_i64)).unwrap();

    assert_eq!(date.second(),      1);
    assert_eq!(date.millisecond(), 6);
    assert_eq!(date.microsecond(), 7);
    assert_eq!(date.nanosecond(),  8);
    assert_eq!(date.picosecond(),  9);
    assert_eq!(date.subsecond().micro_groups(), (6_007, 8_009));
}


#[test]
fn the_distant_past() {
    let date = at(-54_321_234_567);

    assert_eq!(date.year(), 248);
    assert_eq!(date.time_since_epoch(), TimeDelta::seconds(-54_321_234_567_i64));
}
