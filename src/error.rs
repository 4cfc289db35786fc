//! Errors returned when a value cannot be built.

use std::fmt;
use std::panic::Location;


/// The broad class an error falls into.
///
/// Every failure this library reports is an argument the caller passed in
/// that cannot be turned into a value, so there is only the one category.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Category {
    InvalidArgument,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Category::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}


/// The specific reason a value was rejected.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, thiserror::Error)]
pub enum ErrorKind {
    #[error("invalid year")]
    Year,

    #[error("invalid month")]
    Month,

    #[error("invalid day")]
    Day,

    #[error("invalid hour")]
    Hour,

    #[error("invalid minute")]
    Minute,

    #[error("invalid second")]
    Second,

    #[error("invalid subsecond")]
    Subsecond,

    #[error("input string did not match the expected format")]
    Format,

    #[error("too many subsecond digits (at most 12 are allowed)")]
    SubsecondDigits,

    #[error("value lies outside the supported calendar range")]
    OutOfRange,

    #[error("negative durations cannot be converted")]
    NegativeDuration,
}

impl ErrorKind {

    /// Returns the category this kind of error belongs to.
    pub fn category(self) -> Category {
        Category::InvalidArgument
    }
}


/// An error, along with the place in the caller’s code where the failing
/// call was made.
#[derive(Clone, Copy, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    kind: ErrorKind,
    origin: &'static Location<'static>,
}

impl Error {

    /// Creates a new error of the given kind, recording the location of
    /// the outermost `#[track_caller]` function in the call chain.
    #[track_caller]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, origin: Location::caller() }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// The source file, line and column the error was raised from.
    pub fn origin(&self) -> &'static Location<'static> {
        self.origin
    }
}

impl From<ErrorKind> for Error {
    #[track_caller]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

// Two errors are the same error if they are the same kind, wherever
// they came from.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Error {}

impl PartialEq<ErrorKind> for Error {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind == *other
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?} at {}:{})", self.kind, self.origin.file(), self.origin.line())
    }
}

/// Shorthand for results carrying this library’s error.
pub type Result<T, E = Error> = std::result::Result<T, E>;


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn message() {
        assert_eq!(Error::new(ErrorKind::Month).to_string(), "invalid month");
    }

    #[test]
    fn category() {
        assert_eq!(Error::new(ErrorKind::Format).category(), Category::InvalidArgument);
    }

    #[test]
    fn origin_is_this_file() {
        let error = Error::new(ErrorKind::Day);
        assert!(error.origin().file().ends_with("error.rs"));
    }

    #[test]
    fn compares_by_kind() {
        assert_eq!(Error::new(ErrorKind::Hour), ErrorKind::Hour);
        assert_ne!(Error::new(ErrorKind::Hour), Error::new(ErrorKind::Minute));
    }
}
