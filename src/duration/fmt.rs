use std::fmt;

use super::TimeDelta;
use super::units::Unit;


/// Formats a delta as days, hours and minutes, followed by the rest in
/// the largest of seconds, milliseconds, microseconds, nanoseconds or
/// picoseconds that is at least one whole unit, with any fraction
/// written out in decimal and trailing zeros removed.
///
/// Once a leading component has been written, every smaller one down
/// to seconds is written too, even when it is zero. The `+` flag writes
/// a sign for non-negative deltas, and the `#` flag writes `.0` after a
/// final component that has no fraction.
///
/// ```
/// use picotime::TimeDelta;
///
/// assert_eq!(TimeDelta::seconds(754).to_string(), "12m34s");
/// assert_eq!(TimeDelta::picoseconds(1230).to_string(), "1.23ns");
/// assert_eq!(format!("{:+}", TimeDelta::seconds(10)), "+10s");
/// assert_eq!(format!("{:#}", TimeDelta::seconds(-10)), "-10.0s");
/// ```
impl fmt::Display for TimeDelta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.ticks < 0 {
            f.write_str("-")?;
        }
        else if f.sign_plus() {
            f.write_str("+")?;
        }

        let magnitude = self.ticks.unsigned_abs();
        let mut rest = magnitude;

        for unit in [Unit::Day, Unit::Hour, Unit::Minute] {
            let size = unit.ticks() as u128;
            if magnitude >= size {
                write!(f, "{}{}", rest / size, unit)?;
                rest %= size;
            }
        }

        let (unit, digits) = final_unit(magnitude);
        let size = unit.ticks() as u128;
        let (whole, frac) = (rest / size, rest % size);

        write!(f, "{}", whole)?;
        if frac != 0 {
            let fraction = format!("{:0>width$}", frac, width = digits);
            write!(f, ".{}", fraction.trim_end_matches('0'))?;
        }
        else if f.alternate() {
            f.write_str(".0")?;
        }

        write!(f, "{}", unit)
    }
}

/// The unit the last component of a delta with this magnitude gets
/// written in, and the number of decimal places a picosecond is in it.
fn final_unit(magnitude: u128) -> (Unit, usize) {
    let candidates = [
        (Unit::Second, 12),
        (Unit::Millisecond, 9),
        (Unit::Microsecond, 6),
        (Unit::Nanosecond, 3),
    ];

    candidates.iter()
              .copied()
              .find(|(unit, _)| magnitude >= unit.ticks() as u128)
              .unwrap_or((Unit::Picosecond, 0))
}

impl fmt::Debug for TimeDelta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TimeDelta({})", self)
    }
}
