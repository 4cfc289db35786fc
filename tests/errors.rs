use picotime::{DateTime, Date, Month, Subsecond, Category, ErrorKind};


#[test]
fn invalid_fields() {
    let checks = [
        (DateTime::ymd_hms(2000, 13, 1, 0, 0, 0),  ErrorKind::Month),
        (DateTime::ymd_hms(2000, 0, 1, 0, 0, 0),   ErrorKind::Month),
        (DateTime::ymd_hms(2000, 4, 31, 0, 0, 0),  ErrorKind::Day),
        (DateTime::ymd_hms(2000, 4, 0, 0, 0, 0),   ErrorKind::Day),
        (DateTime::ymd_hms(2000, 4, 1, -1, 0, 0),  ErrorKind::Hour),
        (DateTime::ymd_hms(2000, 4, 1, 0, 60, 0),  ErrorKind::Minute),
        (DateTime::ymd_hms(2000, 4, 1, 0, 0, 60),  ErrorKind::Second),
        (DateTime::ymd_hms_ms_us_ns_ps(2000, 4, 1, 0, 0, 0, 0, 1_000, 0, 0), ErrorKind::Subsecond),
        (DateTime::ymd_hms_us_ps(2000, 4, 1, 0, 0, 0, -1, 0), ErrorKind::Subsecond),
    ];

    for (result, kind) in checks.iter() {
        let error = result.unwrap_err();
        assert_eq!(error.kind(), *kind);
        assert_eq!(error.category(), Category::InvalidArgument);
    }
}

#[test]
fn origin_is_the_call_site() {
    let line = line!() + 1;
    let error = DateTime::ymd_hms(2001, 2, 29, 0, 0, 0).unwrap_err();

    assert!(error.origin().file().ends_with("errors.rs"), "{}", error.origin());
    assert_eq!(error.origin().line(), line);
}

#[test]
fn origin_through_month_validation() {
    let line = line!() + 1;
    let error = Month::from_one(13).unwrap_err();

    assert!(error.origin().file().ends_with("errors.rs"));
    assert_eq!(error.origin().line(), line);
}

#[test]
fn messages() {
    let error = Date::ymd(2001, Month::February, 29).unwrap_err();
    assert_eq!(error.to_string(), "invalid day");

    let error = Subsecond::from_picoseconds(-1).unwrap_err();
    assert_eq!(error.to_string(), "invalid subsecond");
}

#[test]
fn is_a_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}

    let error = Date::ymd(0, Month::January, 1).unwrap_err();
    takes_error(&error);
}

#[cfg(feature = "parse")]
mod parse_origin {
    use std::str::FromStr;

    use picotime::{DateTime, GpsTime, Date, Components, ErrorKind};

    #[test]
    fn bad_format() {
        let line = line!() + 1;
        let error = DateTime::parse("2000-1-1").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Format);
        assert!(error.origin().file().ends_with("errors.rs"), "{}", error.origin());
        assert_eq!(error.origin().line(), line);
    }

    #[test]
    fn bad_field() {
        let line = line!() + 1;
        let error = GpsTime::parse("2000-02-30T00:00:00").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Day);
        assert!(error.origin().file().ends_with("errors.rs"), "{}", error.origin());
        assert_eq!(error.origin().line(), line);
    }

    #[test]
    fn bad_date() {
        let line = line!() + 1;
        let error = Date::parse("2000-02-30").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Day);
        assert!(error.origin().file().ends_with("errors.rs"), "{}", error.origin());
        assert_eq!(error.origin().line(), line);
    }

    #[test]
    fn from_str_called_directly() {
        let line = line!() + 1;
        let error = Date::from_str("2000-02-30").unwrap_err();
        assert_eq!(error.origin().line(), line);

        let line = line!() + 1;
        let error = Components::from_str("2000-13-01T00:00:00").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Month);
        assert_eq!(error.origin().line(), line);

        let line = line!() + 1;
        let error = DateTime::from_str("2000-01-01T24:00:00").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Hour);
        assert_eq!(error.origin().line(), line);
    }

    #[test]
    fn too_many_digits() {
        let line = line!() + 1;
        let error = DateTime::parse("2000-01-01T00:00:00.0000000000001").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::SubsecondDigits);
        assert_eq!(error.origin().line(), line);
    }
}
