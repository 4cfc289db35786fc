use picotime::{UtcTime, DateTime, GpsTime, TimeDelta};


#[test]
fn test_1970() {
    let date = UtcTime::ymd_hms(1970, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(date.time_since_epoch(), TimeDelta::ZERO)
}

#[test]
fn test_1971() {
    let date = UtcTime::ymd_hms(1970, 1, 2, 0, 0, 0).unwrap();
    assert_eq!(date.time_since_epoch(), TimeDelta::seconds(86_400))
}

#[test]
fn test_1973() {
    let date = UtcTime::ymd_hms(1973, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(date.time_since_epoch(), TimeDelta::days(365 * 3 + 1))
}

#[test]
fn some_date() {
    let date = UtcTime::ymd_hms(2009, 2, 13, 23, 31, 30).unwrap();
    assert_eq!(date.time_since_epoch(), TimeDelta::seconds(1_234_567_890))
}

#[test]
fn gregorian_ticks() {
    let date = DateTime::ymd_hms(2000, 1, 2, 3, 4, 5).unwrap();
    let expected = TimeDelta::days(730_120) + TimeDelta::hours(3) + TimeDelta::minutes(4) + TimeDelta::seconds(5);
    assert_eq!(date.time_since_epoch(), expected)
}

#[test]
fn gps_week_rollover() {
    let date = GpsTime::ymd_hms(1999, 8, 22, 0, 0, 0).unwrap();
    assert_eq!(date.time_since_epoch(), TimeDelta::days(7 * 1024))
}
