//! Lengths of time on the timeline.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use std::time::Duration as StdDuration;

use num_traits::{Bounded, CheckedAdd, CheckedNeg, CheckedSub, Zero};

use crate::error::{Error, ErrorKind};

pub(crate) mod units;
mod round;
mod fmt;

pub use self::units::{Period, Scalar, Unit, TICKS_PER_SECOND};
pub use self::units::{Days, Hours, Minutes, Seconds, Milliseconds, Microseconds, Nanoseconds, Picoseconds};


/// A **time delta** is a signed length of time on the timeline, counted
/// in whole picoseconds.
///
/// Internally this is a single 128-bit integer of ticks, which covers
/// some 5.4 × 10<sup>18</sup> years in either direction, so arithmetic
/// over the range of dates this library supports never loses precision.
/// Arithmetic that overflows the tick count is a caller error: it panics
/// in debug builds, and the `checked_*` methods exist for when that has
/// to be handled.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct TimeDelta {
    ticks: i128,
}

impl TimeDelta {

    /// A zero-length delta.
    pub const ZERO: Self = Self { ticks: 0 };

    /// The most negative representable delta.
    pub const MIN: Self = Self { ticks: i128::MIN };

    /// The most positive representable delta.
    pub const MAX: Self = Self { ticks: i128::MAX };

    /// The smallest positive delta: one picosecond.
    pub const RESOLUTION: Self = Self { ticks: 1 };

    /// Creates a delta from a raw count of picoseconds.
    pub const fn from_ticks(ticks: i128) -> Self {
        Self { ticks }
    }

    /// Returns the raw count of picoseconds.
    pub const fn ticks(self) -> i128 {
        self.ticks
    }

    /// Creates a delta from a count of some period.
    ///
    /// Integer counts convert exactly, except that a period finer than a
    /// picosecond truncates towards zero. Float counts are scaled to
    /// picoseconds and truncated towards zero; NaN gives a zero delta
    /// and infinities saturate to `MIN` or `MAX`.
    ///
    /// ```
    /// use picotime::{TimeDelta, Milliseconds, Seconds};
    ///
    /// assert_eq!(TimeDelta::from_units::<Milliseconds, i32>(1500),
    ///            TimeDelta::from_units::<Seconds, f64>(1.5));
    /// ```
    pub fn from_units<P: Period, T: Scalar>(count: T) -> Self {
        let (num, den) = P::TICKS;
        if T::IS_FLOAT {
            Self::from_ticks((count.as_f64() * num as f64 / den as f64) as i128)
        }
        else {
            Self::from_ticks(count.as_ticks() * num / den)
        }
    }

    /// Returns this delta as a count of some period.
    ///
    /// Integer results are truncated towards zero. Float results are
    /// computed from the tick count converted to `f64`.
    pub fn to_units<P: Period, T: Scalar>(self) -> T {
        let (num, den) = P::TICKS;
        if T::IS_FLOAT {
            T::from_f64(self.ticks as f64 * den as f64 / num as f64)
        }
        else {
            T::from_ticks(self.ticks * den / num)
        }
    }

    /// Creates a delta from a whole count of one of the built-in units.
    pub const fn from_unit(unit: Unit, count: i128) -> Self {
        Self::from_ticks(count * unit.ticks())
    }

    pub fn days<T: Scalar>(count: T) -> Self {
        Self::from_units::<Days, T>(count)
    }

    pub fn hours<T: Scalar>(count: T) -> Self {
        Self::from_units::<Hours, T>(count)
    }

    pub fn minutes<T: Scalar>(count: T) -> Self {
        Self::from_units::<Minutes, T>(count)
    }

    pub fn seconds<T: Scalar>(count: T) -> Self {
        Self::from_units::<Seconds, T>(count)
    }

    pub fn milliseconds<T: Scalar>(count: T) -> Self {
        Self::from_units::<Milliseconds, T>(count)
    }

    pub fn microseconds<T: Scalar>(count: T) -> Self {
        Self::from_units::<Microseconds, T>(count)
    }

    pub fn nanoseconds<T: Scalar>(count: T) -> Self {
        Self::from_units::<Nanoseconds, T>(count)
    }

    pub fn picoseconds<T: Scalar>(count: T) -> Self {
        Self::from_units::<Picoseconds, T>(count)
    }

    /// Returns the length of this delta in seconds, as a float.
    ///
    /// The whole seconds and the fraction are converted separately, so
    /// short deltas keep their sub-nanosecond digits.
    pub fn total_seconds(self) -> f64 {
        let whole = self.ticks / TICKS_PER_SECOND;
        let frac = self.ticks % TICKS_PER_SECOND;
        whole as f64 + frac as f64 / TICKS_PER_SECOND as f64
    }

    /// Creates a delta from a float number of seconds, rounded to the
    /// nearest tick. NaN is zero and infinities saturate.
    fn nearest_from_seconds(seconds: f64) -> Self {
        Self::from_ticks((seconds * TICKS_PER_SECOND as f64).round() as i128)
    }

    /// Returns the magnitude of this delta.
    ///
    /// `TimeDelta::MIN` has no positive counterpart: taking its absolute
    /// value overflows, just like `i128::MIN.abs()`.
    pub fn abs(self) -> Self {
        Self::from_ticks(self.ticks.abs())
    }

    /// Whether this delta is shorter than zero.
    pub const fn is_negative(self) -> bool {
        self.ticks < 0
    }

    /// Returns the delta one picosecond longer than this one.
    pub fn next_tick(self) -> Self {
        self + Self::RESOLUTION
    }

    /// Returns the delta one picosecond shorter than this one.
    pub fn prev_tick(self) -> Self {
        self - Self::RESOLUTION
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.ticks.checked_add(rhs.ticks).map(Self::from_ticks)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.ticks.checked_sub(rhs.ticks).map(Self::from_ticks)
    }

    pub fn checked_neg(self) -> Option<Self> {
        self.ticks.checked_neg().map(Self::from_ticks)
    }

    pub fn checked_mul(self, rhs: i128) -> Option<Self> {
        self.ticks.checked_mul(rhs).map(Self::from_ticks)
    }
}


impl Add for TimeDelta {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_ticks(self.ticks + rhs.ticks)
    }
}

impl Sub for TimeDelta {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_ticks(self.ticks - rhs.ticks)
    }
}

impl AddAssign for TimeDelta {
    fn add_assign(&mut self, rhs: Self) {
        self.ticks += rhs.ticks;
    }
}

impl SubAssign for TimeDelta {
    fn sub_assign(&mut self, rhs: Self) {
        self.ticks -= rhs.ticks;
    }
}

impl Neg for TimeDelta {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_ticks(-self.ticks)
    }
}

/// The remainder after dividing by another delta, truncated towards zero
/// so it takes the sign of the dividend.
impl Rem for TimeDelta {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        Self::from_ticks(self.ticks % rhs.ticks)
    }
}

/// The remainder after dividing by a raw tick count.
impl Rem<i128> for TimeDelta {
    type Output = Self;

    fn rem(self, rhs: i128) -> Self {
        Self::from_ticks(self.ticks % rhs)
    }
}

impl RemAssign for TimeDelta {
    fn rem_assign(&mut self, rhs: Self) {
        self.ticks %= rhs.ticks;
    }
}

/// How many whole times another delta fits into this one, truncated
/// towards zero.
impl Div for TimeDelta {
    type Output = i128;

    fn div(self, rhs: Self) -> i128 {
        self.ticks / rhs.ticks
    }
}

impl Sum for TimeDelta {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a TimeDelta> for TimeDelta {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, b| a + *b)
    }
}


// Scaling by an integer is exact; the tick count is multiplied or divided
// directly.
macro_rules! integer_scaling {
    ($( $t:ty ),*) => {
        $(
            impl Mul<$t> for TimeDelta {
                type Output = TimeDelta;

                fn mul(self, rhs: $t) -> TimeDelta {
                    TimeDelta::from_ticks(self.ticks * rhs.as_ticks())
                }
            }

            impl Mul<TimeDelta> for $t {
                type Output = TimeDelta;

                fn mul(self, rhs: TimeDelta) -> TimeDelta {
                    rhs * self
                }
            }

            impl Div<$t> for TimeDelta {
                type Output = TimeDelta;

                fn div(self, rhs: $t) -> TimeDelta {
                    TimeDelta::from_ticks(self.ticks / rhs.as_ticks())
                }
            }

            impl MulAssign<$t> for TimeDelta {
                fn mul_assign(&mut self, rhs: $t) {
                    *self = *self * rhs;
                }
            }

            impl DivAssign<$t> for TimeDelta {
                fn div_assign(&mut self, rhs: $t) {
                    *self = *self / rhs;
                }
            }
        )*
    };
}

// Scaling by a float goes through the number of seconds, and the result
// is rounded back to the nearest picosecond.
macro_rules! float_scaling {
    ($( $t:ty ),*) => {
        $(
            impl Mul<$t> for TimeDelta {
                type Output = TimeDelta;

                fn mul(self, rhs: $t) -> TimeDelta {
                    TimeDelta::nearest_from_seconds(self.total_seconds() * rhs.as_f64())
                }
            }

            impl Mul<TimeDelta> for $t {
                type Output = TimeDelta;

                fn mul(self, rhs: TimeDelta) -> TimeDelta {
                    rhs * self
                }
            }

            impl Div<$t> for TimeDelta {
                type Output = TimeDelta;

                fn div(self, rhs: $t) -> TimeDelta {
                    TimeDelta::nearest_from_seconds(self.total_seconds() / rhs.as_f64())
                }
            }

            impl MulAssign<$t> for TimeDelta {
                fn mul_assign(&mut self, rhs: $t) {
                    *self = *self * rhs;
                }
            }

            impl DivAssign<$t> for TimeDelta {
                fn div_assign(&mut self, rhs: $t) {
                    *self = *self / rhs;
                }
            }
        )*
    };
}

integer_scaling!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
float_scaling!(f32, f64);


impl Zero for TimeDelta {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.ticks == 0
    }
}

impl Bounded for TimeDelta {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl CheckedAdd for TimeDelta {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        TimeDelta::checked_add(*self, *rhs)
    }
}

impl CheckedSub for TimeDelta {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        TimeDelta::checked_sub(*self, *rhs)
    }
}

impl CheckedNeg for TimeDelta {
    fn checked_neg(&self) -> Option<Self> {
        TimeDelta::checked_neg(*self)
    }
}


impl From<StdDuration> for TimeDelta {
    fn from(duration: StdDuration) -> Self {
        Self::from_ticks(duration.as_nanos() as i128 * 1_000)
    }
}

/// Converts to a standard-library duration, dropping anything finer than
/// a nanosecond. Negative deltas have no standard equivalent.
impl TryFrom<TimeDelta> for StdDuration {
    type Error = Error;

    #[track_caller]
    fn try_from(delta: TimeDelta) -> Result<Self, Error> {
        if delta.is_negative() {
            return Err(Error::new(ErrorKind::NegativeDuration));
        }

        let seconds = match u64::try_from(delta.ticks / TICKS_PER_SECOND) {
            Ok(seconds) => seconds,
            Err(_) => return Err(Error::new(ErrorKind::OutOfRange)),
        };
        let nanos = (delta.ticks % TICKS_PER_SECOND / 1_000) as u32;
        Ok(StdDuration::new(seconds, nanos))
    }
}
