//! Adds convenience functions to some structs.
//!
//! # Example
//! ```
//! # use picotime::Date;
//! # use picotime::DatePiece;
//! use picotime::convenience::Today;
//! let today: Date = Date::today();
//! assert!(today.year() >= 2020);
//! ```
use crate::cal::datetime::Date;
use crate::scale::DateTime;

/// Adds `Date::today() -> Date`
pub trait Today {
    fn today() -> Date;
}

impl Today for Date {
    fn today() -> Date {
        DateTime::now().date()
    }
}
