use std::fmt;

use crate::cal::datetime::{Components, Date};


/// Values that have a canonical ISO 8601 text form.
///
/// ```
/// use picotime::{Date, Month, ISO};
///
/// let date = Date::ymd(1969, Month::July, 20).unwrap();
/// assert_eq!(date.iso().to_string(), "1969-07-20");
/// ```
pub trait ISO: Sized {
    fn iso(&self) -> ISOString<'_, Self>;
}

/// A value borrowed for formatting in its ISO 8601 form.
#[derive(Debug, Clone, Copy)]
pub struct ISOString<'a, T>(pub(crate) &'a T);

impl ISO for Date {
    fn iso(&self) -> ISOString<'_, Self> {
        ISOString(self)
    }
}

impl ISO for Components {
    fn iso(&self) -> ISOString<'_, Self> {
        ISOString(self)
    }
}

impl<'a> fmt::Display for ISOString<'a, Date> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_date(f, self.0)
    }
}

/// Writes `YYYY-MM-DDThh:mm:ss`, then the fraction of the second with its
/// trailing zeros removed, or nothing at all if the fraction is zero.
impl<'a> fmt::Display for ISOString<'a, Components> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = self.0;
        write_date(f, &c.date())?;
        write!(f, "T{:02}:{:02}:{:02}", c.hour, c.minute, c.second)?;

        if !c.subsecond.is_zero() {
            let digits = format!("{:012}", c.subsecond.picoseconds());
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }

        Ok(())
    }
}

fn write_date(f: &mut fmt::Formatter, date: &Date) -> fmt::Result {
    use crate::cal::DatePiece;
    write!(f, "{:04}-{:02}-{:02}", date.year(), date.month() as i8, date.day())
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.iso(), f)
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.iso(), f)
    }
}
