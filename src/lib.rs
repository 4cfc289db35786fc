#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Picosecond-precision lengths of time, and dates and times in the
//! proleptic Gregorian calendar from year 1 to year 9999.
//!
//! # Examples
//!
//! ```
//! use picotime::{GpsTime, TimeDelta, DatePiece, Weekday};
//!
//! let launch: GpsTime = "2000-01-02T03:04:05.006007008009".parse().unwrap();
//! let later = launch + TimeDelta::days(12) + TimeDelta::minutes(34);
//!
//! assert_eq!(later.to_string(), "2000-01-14T03:38:05.006007008009");
//! assert_eq!(later.weekday(), Weekday::Friday);
//! assert_eq!((later - launch).to_string(), "12d0h34m0s");
//! ```

pub mod error;
pub mod duration;
pub mod instant;
pub mod scale;
mod cal;
mod system;
mod util;

pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::convenience;
pub use crate::cal::datetime::{
    Components, Date, Month, Subsecond, Weekday, Year,
    civil_from_days, days_from_civil, days_in_month, from_components, to_components, weekday,
    MAX_TICKS, MAX_YEAR, MIN_TICKS, MIN_YEAR,
};
pub use crate::cal::fmt::{ISO, ISOString};
#[cfg(feature = "parse")]
pub use crate::cal::parse::{parse_components, parse_date};

pub use crate::duration::{TimeDelta, Period, Scalar, Unit, TICKS_PER_SECOND};
pub use crate::duration::{Days, Hours, Minutes, Seconds, Milliseconds, Microseconds, Nanoseconds, Picoseconds};
pub use crate::error::{Category, Error, ErrorKind, Result};
pub use crate::instant::Instant;
pub use crate::scale::{TimeScale, Gregorian, Utc, Gps, DateTime, UtcTime, GpsTime};
