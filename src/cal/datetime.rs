//! Years, months, weekdays, and the conversion between a linear count of
//! ticks and a calendar date and time.
//!
//! Tick zero is midnight at the start of 0001-01-01 in the proleptic
//! Gregorian calendar, and the calendar runs up to the end of 9999-12-31.

use std::fmt;

use tracing::debug;

use crate::cal::{DatePiece, TimePiece};
use crate::duration::TICKS_PER_SECOND;
use crate::error::{Error, ErrorKind, Result};
use crate::util::RangeExt;

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use picotime::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        let year = self.0;
        year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
    }

    /// The number of days in this year.
    pub fn days_in_year(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }
}


/// The first year the calendar supports.
pub const MIN_YEAR: i64 = 1;

/// The last year the calendar supports.
pub const MAX_YEAR: i64 = 9999;

pub(crate) const TICKS_PER_MINUTE: i128 = 60 * TICKS_PER_SECOND;
pub(crate) const TICKS_PER_HOUR: i128 = 60 * TICKS_PER_MINUTE;
pub(crate) const TICKS_PER_DAY: i128 = 24 * TICKS_PER_HOUR;

/// Number of days in a 400-year cycle.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of days from 0000-03-01 to 0001-01-01.
///
/// The day-counting arithmetic below works on years that start in March,
/// so that the leap day falls at the very end of the year.
const MARCH_SHIFT: i64 = 306;

/// Number of days from 0001-01-01 up to and including 9999-12-31.
const DAYS_IN_CALENDAR: i64 = days_from_civil(MAX_YEAR + 1, January, 1);

/// The first tick of 0001-01-01.
pub const MIN_TICKS: i128 = 0;

/// The last tick of 9999-12-31.
pub const MAX_TICKS: i128 = DAYS_IN_CALENDAR as i128 * TICKS_PER_DAY - 1;

pub(crate) static MONTHS: [Month; 12] = [
    January, February, March, April, May, June,
    July, August, September, October, November, December,
];

static WEEKDAYS: [Weekday; 7] = [
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];


/// Returns the number of days from 0001-01-01 to the given date, which
/// is negative for dates before it.
///
/// The date is not checked: the day may be past the end of the month,
/// in which case the result runs on into the next one.
pub const fn days_from_civil(year: i64, month: Month, day: i8) -> i64 {
    let month = month as i64;
    let year = if month <= 2 { year - 1 } else { year };

    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let month_from_march = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * month_from_march + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * DAYS_IN_400Y + day_of_era - MARCH_SHIFT
}

/// Returns the date that is the given number of days after 0001-01-01.
pub fn civil_from_days(days: i64) -> (i64, Month, i8) {
    let days = days + MARCH_SHIFT;

    let (era, day_of_era) = split_cycles(days as i128, DAYS_IN_400Y as i128);
    let (era, day_of_era) = (era as i64, day_of_era as i64);

    let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_from_march = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
    let month = if month_from_march < 10 { month_from_march + 3 } else { month_from_march - 9 };

    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, MONTHS[(month - 1) as usize], day as i8)
}

/// Returns the number of days in the given month of the given year.
pub fn days_in_month(year: i64, month: Month) -> i8 {
    month.days_in_month(Year(year).is_leap_year())
}

/// Computes the weekday, given the number of days that have passed
/// since 0001-01-01.
pub(crate) fn days_to_weekday(days: i64) -> Weekday {
    // 0001-01-01 was a Monday, so add 1 to the number of days.
    WEEKDAYS[(days + 1).rem_euclid(7) as usize]
}

/// Split a number of periods into a number of whole cycles, and the
/// number of periods left over that don’t fit into a cycle.
///
/// This is a floored division: a negative value gets ‘wrapped around’ to
/// a positive remainder and one fewer cycle.
pub(crate) fn split_cycles(number_of_periods: i128, cycle_length: i128) -> (i128, i128) {
    (number_of_periods.div_euclid(cycle_length), number_of_periods.rem_euclid(cycle_length))
}


/// The fraction of a second, in picoseconds.
///
/// This is always less than one whole second. It can be built from, and
/// read back as, either four groups of three digits (milliseconds,
/// microseconds, nanoseconds, and picoseconds) or two groups of six
/// (microseconds and picoseconds).
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash, Default)]
pub struct Subsecond(i64);

impl Subsecond {

    /// The start of a second.
    pub const ZERO: Self = Self(0);

    /// Creates a subsecond from a number of picoseconds, which must be
    /// less than one second.
    #[track_caller]
    pub fn from_picoseconds(picoseconds: i64) -> Result<Self> {
        if !picoseconds.is_within(0 .. TICKS_PER_SECOND as i64) {
            debug!(picoseconds, "rejecting subsecond outside one second");
            return Err(Error::new(ErrorKind::Subsecond));
        }

        Ok(Self(picoseconds))
    }

    /// Creates a subsecond from milliseconds, microseconds, nanoseconds
    /// and picoseconds, each of which must be between 0 and 999.
    #[track_caller]
    pub fn from_milli_groups(ms: i16, us: i16, ns: i16, ps: i16) -> Result<Self> {
        for group in [ms, us, ns, ps] {
            if !group.is_within(0 .. 1_000) {
                debug!(group, "rejecting subsecond group outside 0..1000");
                return Err(Error::new(ErrorKind::Subsecond));
            }
        }

        Ok(Self(((ms as i64 * 1_000 + us as i64) * 1_000 + ns as i64) * 1_000 + ps as i64))
    }

    /// Creates a subsecond from microseconds and picoseconds, each of
    /// which must be between 0 and 999,999.
    #[track_caller]
    pub fn from_micro_groups(us: i32, ps: i32) -> Result<Self> {
        for group in [us, ps] {
            if !group.is_within(0 .. 1_000_000) {
                debug!(group, "rejecting subsecond group outside 0..1000000");
                return Err(Error::new(ErrorKind::Subsecond));
            }
        }

        Ok(Self(us as i64 * 1_000_000 + ps as i64))
    }

    /// The whole number of picoseconds into the second.
    pub fn picoseconds(self) -> i64 {
        self.0
    }

    /// The millisecond, microsecond, nanosecond, and picosecond groups.
    pub fn milli_groups(self) -> (i16, i16, i16, i16) {
        let ps = self.0;
        ((ps / 1_000_000_000) as i16,
         (ps / 1_000_000 % 1_000) as i16,
         (ps / 1_000 % 1_000) as i16,
         (ps % 1_000) as i16)
    }

    /// The microsecond and picosecond groups.
    pub fn micro_groups(self) -> (i32, i32) {
        ((self.0 / 1_000_000) as i32, (self.0 % 1_000_000) as i32)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}


/// An instant broken down into calendar fields.
///
/// Nothing here is checked until it gets turned into ticks. The derived
/// ordering compares fields from the year downwards, which for valid
/// components is the same as comparing the instants they describe.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub struct Components {
    pub year: i64,
    pub month: Month,
    pub day: i8,
    pub hour: i8,
    pub minute: i8,
    pub second: i8,
    pub subsecond: Subsecond,
}

impl Components {

    /// Components for midnight at the start of the given date.
    pub fn midnight(year: i64, month: Month, day: i8) -> Self {
        Self { year, month, day, hour: 0, minute: 0, second: 0, subsecond: Subsecond::ZERO }
    }

    /// The date part of these components.
    pub fn date(&self) -> Date {
        Date { year: self.year, month: self.month, day: self.day }
    }
}

/// Breaks a number of ticks since 0001-01-01T00:00:00 into calendar
/// fields.
///
/// Tick counts outside the supported calendar are still broken down, as
/// long as the day count fits in an `i64`.
pub fn to_components(ticks: i128) -> Components {
    let (days, tick_of_day) = split_cycles(ticks, TICKS_PER_DAY);
    let (year, month, day) = civil_from_days(days as i64);

    let hour = tick_of_day / TICKS_PER_HOUR;
    let minute = tick_of_day % TICKS_PER_HOUR / TICKS_PER_MINUTE;
    let second = tick_of_day % TICKS_PER_MINUTE / TICKS_PER_SECOND;
    let subsecond = Subsecond((tick_of_day % TICKS_PER_SECOND) as i64);

    Components {
        year, month, day,
        hour: hour as i8,
        minute: minute as i8,
        second: second as i8,
        subsecond,
    }
}

/// Checks every field and turns the components into a number of ticks
/// since 0001-01-01T00:00:00.
#[track_caller]
pub fn from_components(components: &Components) -> Result<i128> {
    let Components { year, month, day, hour, minute, second, subsecond } = *components;

    if !year.is_within(MIN_YEAR .. MAX_YEAR + 1) {
        debug!(year, "rejecting year outside 1..=9999");
        return Err(Error::new(ErrorKind::Year));
    }

    if !day.is_within(1 .. days_in_month(year, month) + 1) {
        debug!(year, month = month as i8, day, "rejecting day outside month");
        return Err(Error::new(ErrorKind::Day));
    }

    if !hour.is_within(0 .. 24) {
        debug!(hour, "rejecting hour");
        return Err(Error::new(ErrorKind::Hour));
    }

    if !minute.is_within(0 .. 60) {
        debug!(minute, "rejecting minute");
        return Err(Error::new(ErrorKind::Minute));
    }

    if !second.is_within(0 .. 60) {
        debug!(second, "rejecting second");
        return Err(Error::new(ErrorKind::Second));
    }

    if !subsecond.0.is_within(0 .. TICKS_PER_SECOND as i64) {
        debug!(picoseconds = subsecond.0, "rejecting subsecond");
        return Err(Error::new(ErrorKind::Subsecond));
    }

    let days = days_from_civil(year, month, day) as i128;
    Ok(days * TICKS_PER_DAY
        + hour as i128 * TICKS_PER_HOUR
        + minute as i128 * TICKS_PER_MINUTE
        + second as i128 * TICKS_PER_SECOND
        + subsecond.0 as i128)
}

/// The day of the week the given tick falls on.
pub fn weekday(ticks: i128) -> Weekday {
    let (days, _) = split_cycles(ticks, TICKS_PER_DAY);
    days_to_weekday(days as i64)
}


/// A **date** is a day in the calendar, with no time of day attached.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Date {
    year: i64,
    month: Month,
    day: i8,
}

impl Date {

    /// Creates a new date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```
    /// use picotime::{Date, Month, DatePiece};
    ///
    /// let date = Date::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(Date::ymd(2100, Month::February, 29).is_err());
    /// ```
    #[track_caller]
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self> {
        let _ = from_components(&Components::midnight(year, month, day))?;
        Ok(Self { year, month, day })
    }

    /// The number of days from 0001-01-01 to this date.
    pub fn days_since_epoch(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// The date a given number of days after 0001-01-01, or an error if
    /// that lies outside the calendar.
    #[track_caller]
    pub fn from_days_since_epoch(days: i64) -> Result<Self> {
        if !days.is_within(0 .. DAYS_IN_CALENDAR) {
            debug!(days, "rejecting day count outside the calendar");
            return Err(Error::new(ErrorKind::OutOfRange));
        }

        let (year, month, day) = civil_from_days(days);
        Ok(Self { year, month, day })
    }
}

impl DatePiece for Date {
    fn year(&self) -> i64 { self.year }
    fn month(&self) -> Month { self.month }
    fn day(&self) -> i8 { self.day }

    fn yearday(&self) -> i16 {
        (self.days_since_epoch() - days_from_civil(self.year, January, 1) + 1) as i16
    }

    fn weekday(&self) -> Weekday {
        days_to_weekday(self.days_since_epoch())
    }
}

impl DatePiece for Components {
    fn year(&self) -> i64 { self.year }
    fn month(&self) -> Month { self.month }
    fn day(&self) -> i8 { self.day }
    fn yearday(&self) -> i16 { self.date().yearday() }
    fn weekday(&self) -> Weekday { self.date().weekday() }
}

impl TimePiece for Components {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn millisecond(&self) -> i16 { self.subsecond.milli_groups().0 }
    fn microsecond(&self) -> i16 { self.subsecond.milli_groups().1 }
    fn nanosecond(&self) -> i16 { self.subsecond.milli_groups().2 }
    fn picosecond(&self) -> i16 { self.subsecond.milli_groups().3 }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Date({:04}-{:02}-{:02})", self.year, self.month as i8, self.day)
    }
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use picotime::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    #[track_caller]
    pub fn from_one(month: i8) -> Result<Self> {
        if !month.is_within(1 .. 13) {
            debug!(month, "rejecting month");
            return Err(Error::new(ErrorKind::Month));
        }

        Ok(MONTHS[(month - 1) as usize])
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    #[track_caller]
    pub fn from_zero(month: i8) -> Result<Self> {
        Self::from_one(month.saturating_add(1))
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 0, as in the C library. There’s no Ord instance because
// there’s no real agreement on which day a week starts with.

impl Weekday {

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use picotime::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    #[track_caller]
    pub fn from_zero(weekday: i8) -> Result<Self> {
        if !weekday.is_within(0 .. 7) {
            return Err(Error::new(ErrorKind::OutOfRange));
        }

        Ok(WEEKDAYS[weekday as usize])
    }

    /// Return the weekday based on a number, with Monday as Day 1 and
    /// Sunday as Day 7.
    #[track_caller]
    pub fn from_one(weekday: i8) -> Result<Self> {
        if !weekday.is_within(1 .. 8) {
            return Err(Error::new(ErrorKind::OutOfRange));
        }

        Ok(WEEKDAYS[(weekday % 7) as usize])
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn some_leap_years() {
        for year in [2004, 2008, 2012, 2016].iter() {
            assert!(Date::ymd(*year, February, 29).is_ok());
            assert!(Date::ymd(*year + 1, February, 29).is_err());
        }
        assert!(Date::ymd(1600, February, 29).is_ok());
        assert!(Date::ymd(1601, February, 29).is_err());
        assert!(Date::ymd(1700, February, 29).is_err());
    }

    #[test]
    fn month_lengths() {
        for year in 1 .. 3000 {
            for month in MONTHS.iter() {
                let last = days_in_month(year, *month);
                assert!(Date::ymd(year, *month, last).is_ok());
                assert!(Date::ymd(year, *month, last + 1).is_err());
                assert!(Date::ymd(year, *month, 0).is_err());
            }
        }
    }

    mod days {
        use super::*;

        #[test]
        fn first_day() {
            assert_eq!(days_from_civil(1, January, 1), 0);
            assert_eq!(civil_from_days(0), (1, January, 1));
        }

        #[test]
        fn unix_epoch() {
            assert_eq!(days_from_civil(1970, January, 1), 719_162);
            assert_eq!(civil_from_days(719_162), (1970, January, 1));
        }

        #[test]
        fn last_day() {
            assert_eq!(days_from_civil(9999, December, 31), 3_652_058);
            assert_eq!(civil_from_days(3_652_058), (9999, December, 31));
        }

        #[test]
        fn before_the_calendar() {
            assert_eq!(civil_from_days(-1), (0, December, 31));
            assert_eq!(days_from_civil(0, December, 31), -1);
        }

        #[test]
        fn every_day_round_trips() {
            let mut expected = (1, January, 1);
            for days in 0 .. DAYS_IN_CALENDAR {
                let date = civil_from_days(days);
                assert_eq!(date, expected);
                assert_eq!(days_from_civil(date.0, date.1, date.2), days);

                expected = if date.2 < days_in_month(date.0, date.1) {
                    (date.0, date.1, date.2 + 1)
                }
                else if date.1 == December {
                    (date.0 + 1, January, 1)
                }
                else {
                    (date.0, MONTHS[date.1 as usize], 1)
                };
            }
        }
    }

    mod components {
        use super::*;

        #[test]
        fn zero_ticks() {
            assert_eq!(to_components(0), Components::midnight(1, January, 1));
        }

        #[test]
        fn last_tick() {
            let components = to_components(MAX_TICKS);
            assert_eq!(components.year, 9999);
            assert_eq!(components.month, December);
            assert_eq!(components.day, 31);
            assert_eq!((components.hour, components.minute, components.second), (23, 59, 59));
            assert_eq!(components.subsecond.picoseconds(), 999_999_999_999);
        }

        #[test]
        fn round_trip() {
            let components = Components {
                year: 2001, month: February, day: 3,
                hour: 4, minute: 5, second: 6,
                subsecond: Subsecond::from_milli_groups(7, 8, 9, 10).unwrap(),
            };

            let ticks = from_components(&components).unwrap();
            assert_eq!(to_components(ticks), components);
        }

        #[test]
        fn bad_fields() {
            let good = Components::midnight(2000, February, 29);
            assert!(from_components(&good).is_ok());

            let checks = [
                (Components { year: 0, ..good },       ErrorKind::Year),
                (Components { year: 10_000, ..good },  ErrorKind::Year),
                (Components { day: 30, ..good },       ErrorKind::Day),
                (Components { hour: 24, ..good },      ErrorKind::Hour),
                (Components { minute: 60, ..good },    ErrorKind::Minute),
                (Components { second: -1, ..good },    ErrorKind::Second),
            ];

            for (components, kind) in checks.iter() {
                assert_eq!(from_components(components).unwrap_err().kind(), *kind);
            }
        }
    }

    mod subseconds {
        use super::*;

        #[test]
        fn milli_groups() {
            let subsecond = Subsecond::from_milli_groups(6, 7, 8, 9).unwrap();
            assert_eq!(subsecond.picoseconds(), 6_007_008_009);
            assert_eq!(subsecond.milli_groups(), (6, 7, 8, 9));
            assert_eq!(subsecond.micro_groups(), (6_007, 8_009));
        }

        #[test]
        fn micro_groups() {
            let subsecond = Subsecond::from_micro_groups(6, 7).unwrap();
            assert_eq!(subsecond.picoseconds(), 6_000_007);
            assert_eq!(subsecond.milli_groups(), (0, 6, 0, 7));
        }

        #[test]
        fn out_of_range() {
            assert!(Subsecond::from_milli_groups(1000, 0, 0, 0).is_err());
            assert!(Subsecond::from_milli_groups(0, 0, 0, -1).is_err());
            assert!(Subsecond::from_micro_groups(0, 1_000_000).is_err());
            assert!(Subsecond::from_picoseconds(TICKS_PER_SECOND as i64).is_err());
        }
    }

    mod weekdays {
        use super::*;

        fn weekday_of(year: i64, month: Month, day: i8) -> Weekday {
            Date::ymd(year, month, day).unwrap().weekday()
        }

        #[test]
        fn known_days() {
            assert_eq!(weekday_of(1, January, 1), Monday);
            assert_eq!(weekday_of(1970, January, 1), Thursday);
            assert_eq!(weekday_of(1969, December, 31), Wednesday);
            assert_eq!(weekday_of(1920, February, 29), Sunday);
            assert_eq!(weekday_of(1920, March, 1), Monday);
            assert_eq!(weekday_of(2021, April, 3), Saturday);
        }

        #[test]
        fn from_ticks() {
            assert_eq!(weekday(TICKS_PER_DAY - 1), Monday);
            assert_eq!(weekday(TICKS_PER_DAY), Tuesday);
        }
    }

    #[test]
    fn yeardays() {
        assert_eq!(Date::ymd(2000, January, 1).unwrap().yearday(), 1);
        assert_eq!(Date::ymd(2000, December, 31).unwrap().yearday(), 366);
        assert_eq!(Date::ymd(2001, December, 31).unwrap().yearday(), 365);
        assert_eq!(Date::ymd(2001, March, 1).unwrap().yearday(), 60);
    }

    mod debug {
        use super::*;

        #[test]
        fn recently() {
            let date = Date::ymd(1600, February, 28).unwrap();
            let debugged = format!("{:?}", date);

            assert_eq!(debugged, "Date(1600-02-28)");
        }

        #[test]
        fn first_year() {
            let date = Date::ymd(1, January, 1).unwrap();
            let debugged = format!("{:?}", date);

            assert_eq!(debugged, "Date(0001-01-01)");
        }
    }
}
