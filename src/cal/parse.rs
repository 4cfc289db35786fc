//! Reading dates and times in from text.
//!
//! The accepted form is `YYYY-MM-DD`, a `T` or a single space, then
//! `hh:mm:ss`, optionally followed by a `.` and between one and twelve
//! digits of fraction. Every field must be written with exactly as many
//! digits as shown.

use std::str::FromStr;

use lazy_static::lazy_static;
use pad::{Alignment, PadStr};
use regex::Regex;
use tracing::debug;

use crate::cal::datetime::{Components, Date, Month, Subsecond};
use crate::error::{Error, ErrorKind, Result};


/// The most fraction digits there can be: one per picosecond.
const MAX_SUBSECOND_DIGITS: usize = 12;

lazy_static! {
    static ref DATETIME: Regex = Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})[T ]([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]+))?$"
    ).expect("datetime pattern compiles");

    static ref DATE: Regex = Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$"
    ).expect("date pattern compiles");
}


/// Parses a date and time into unchecked calendar fields.
///
/// A string that doesn’t match the form, or that has more than twelve
/// fraction digits, is rejected here; whether the fields make a real
/// date is only checked once they get turned into an instant.
///
/// ```
/// use picotime::parse_components;
///
/// let components = parse_components("2001-02-03 04:05:06.78").unwrap();
/// assert_eq!(components.second, 6);
/// assert_eq!(components.subsecond.milli_groups(), (780, 0, 0, 0));
/// ```
#[track_caller]
pub fn parse_components(input: &str) -> Result<Components> {
    let caps = match DATETIME.captures(input) {
        Some(caps) => caps,
        None => {
            debug!(input, "input does not match YYYY-MM-DDThh:mm:ss[.f]");
            return Err(Error::new(ErrorKind::Format));
        }
    };

    let subsecond = match caps.get(7) {
        Some(fraction) => subsecond(fraction.as_str())?,
        None => Subsecond::ZERO,
    };

    Ok(Components {
        year:   digits(&caps[1]),
        month:  Month::from_one(digits(&caps[2]) as i8)?,
        day:    digits(&caps[3]) as i8,
        hour:   digits(&caps[4]) as i8,
        minute: digits(&caps[5]) as i8,
        second: digits(&caps[6]) as i8,
        subsecond,
    })
}

/// Parses a bare `YYYY-MM-DD` date.
#[track_caller]
pub fn parse_date(input: &str) -> Result<Date> {
    let caps = match DATE.captures(input) {
        Some(caps) => caps,
        None => {
            debug!(input, "input does not match YYYY-MM-DD");
            return Err(Error::new(ErrorKind::Format));
        }
    };

    let month = Month::from_one(digits(&caps[2]) as i8)?;
    Date::ymd(digits(&caps[1]), month, digits(&caps[3]) as i8)
}

/// Turns up to twelve digits of fraction into a subsecond, as though the
/// missing digits on the right were zeros.
#[track_caller]
fn subsecond(fraction: &str) -> Result<Subsecond> {
    if fraction.len() > MAX_SUBSECOND_DIGITS {
        debug!(digits = fraction.len(), "too many subsecond digits");
        return Err(Error::new(ErrorKind::SubsecondDigits));
    }

    let padded = fraction.pad(MAX_SUBSECOND_DIGITS, '0', Alignment::Left, false);
    Subsecond::from_milli_groups(
        digits(&padded[0 .. 3]) as i16,
        digits(&padded[3 .. 6]) as i16,
        digits(&padded[6 .. 9]) as i16,
        digits(&padded[9 .. 12]) as i16,
    )
}

/// Reads a run of ASCII digits that the pattern has already matched.
fn digits(input: &str) -> i64 {
    input.bytes().fold(0, |acc, b| acc * 10 + i64::from(b - b'0'))
}


impl Date {

    /// Parses a bare `YYYY-MM-DD` date.
    ///
    /// Going through `str::parse` records the error’s origin inside the
    /// standard library; calling this directly records the caller.
    #[track_caller]
    pub fn parse(input: &str) -> Result<Self> {
        parse_date(input)
    }
}


impl FromStr for Date {
    type Err = Error;

    #[track_caller]
    fn from_str(input: &str) -> Result<Self> {
        parse_date(input)
    }
}

impl FromStr for Components {
    type Err = Error;

    #[track_caller]
    fn from_str(input: &str) -> Result<Self> {
        parse_components(input)
    }
}
