//! Misc stuff.

use std::ops::Range;


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given half-open range
    /// of values.
    fn is_within(&self, range: Range<Self>) -> bool where Self: Sized;
}

// Defined on anything that can be compared, though it’s only ever used
// for the numeric fields of dates and times.

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: Range<Self>) -> bool {
        range.contains(self)
    }
}


#[cfg(test)]
mod test {
    use super::RangeExt;

    #[test]
    fn half_open() {
        assert!(0_i8.is_within(0 .. 24));
        assert!(23_i8.is_within(0 .. 24));
        assert!(!24_i8.is_within(0 .. 24));
        assert!(!(-1_i8).is_within(0 .. 24));
    }
}
