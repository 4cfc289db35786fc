//! Proleptic Gregorian date and time calculations, which use years,
//! months, days, hours, minutes, seconds and fractions of a second.

pub(crate) mod datetime;
pub(crate) mod fmt;
#[cfg(feature="parse")] pub(crate) mod parse;
pub mod convenience;

use self::datetime::{Month, Weekday};


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;

    /// The number of years into the century.
    /// This is the same as the last two digits of the year.
    fn year_of_century(&self) -> i64 { self.year() % 100 }
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
///
/// The fraction of the second is split into four groups of three digits,
/// so an instant at `12:00:00.001002003004` has a millisecond of 1, a
/// microsecond of 2, a nanosecond of 3, and a picosecond of 4.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;

    /// The millisecond of the second.
    fn millisecond(&self) -> i16;

    /// The microsecond of the millisecond.
    fn microsecond(&self) -> i16;

    /// The nanosecond of the microsecond.
    fn nanosecond(&self) -> i16;

    /// The picosecond of the nanosecond.
    fn picosecond(&self) -> i16;
}
