use picotime::{Date, DateTime, Month};
use picotime::DatePiece;


#[test]
fn start_of_year_day() {
    let date = Date::ymd(2015, Month::January, 1).unwrap();
    assert_eq!(date.yearday(), 1);
}


#[test]
fn end_of_year_day() {
    let date = Date::ymd(2015, Month::December, 31).unwrap();
    assert_eq!(date.yearday(), 365);
}


#[test]
fn end_of_leap_year_day() {
    let date = Date::ymd(2016, Month::December, 31).unwrap();
    assert_eq!(date.yearday(), 366);
}


#[test]
fn yearday() {
    for year in 1..2058 {
        assert_eq!( Date::ymd(year, Month::January, 31).unwrap().yearday() + 1,
                    Date::ymd(year, Month::February, 1).unwrap().yearday());
        assert_eq!( Date::ymd(year, Month::March, 31).unwrap().yearday() + 1,
                    Date::ymd(year, Month::April, 1).unwrap().yearday());
        assert_eq!( Date::ymd(year, Month::April, 30).unwrap().yearday() + 1,
                    Date::ymd(year, Month::May, 1).unwrap().yearday());
        assert!(    Date::ymd(year, Month::December, 31).unwrap().yearday() > 0);
    }
}


#[test]
fn instant_yearday() {
    let instant = DateTime::ymd_hms(2016, 3, 1, 12, 0, 0).unwrap();
    assert_eq!(instant.yearday(), 61);
    assert_eq!(instant.date(), Date::ymd(2016, Month::March, 1).unwrap());
}


#[test]
fn year_of_century() {
    assert_eq!(Date::ymd(2015, Month::June, 26).unwrap().year_of_century(), 15);
    assert_eq!(Date::ymd(1900, Month::June, 26).unwrap().year_of_century(), 0);
    assert_eq!(Date::ymd(9999, Month::June, 26).unwrap().year_of_century(), 99);
    assert_eq!(DateTime::ymd_hms(1, 1, 1, 0, 0, 0).unwrap().year_of_century(), 1);
}
