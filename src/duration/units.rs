//! Units of time, and the numeric types durations can be counted in.

use std::fmt;

use num_traits::{Num, NumCast};


/// The number of ticks (picoseconds) in one second.
pub const TICKS_PER_SECOND: i128 = 1_000_000_000_000;

const fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.abs()
}

/// Reduces `num / den` seconds to a `(numerator, denominator)` pair that
/// converts a count of that period into ticks.
const fn tick_ratio(num: i128, den: i128) -> (i128, i128) {
    let ticks = num * TICKS_PER_SECOND;
    let divisor = gcd(ticks, den);
    (ticks / divisor, den / divisor)
}


/// A **period** is a length of time expressed as a rational number of
/// seconds, `NUM / DEN`, that values can be counted in.
///
/// Any positive ratio is allowed, including ones finer than a tick:
/// converting a count of them to ticks truncates towards zero.
///
/// ```
/// use picotime::{Period, TimeDelta};
///
/// struct Fortnights;
/// impl Period for Fortnights {
///     const NUM: i128 = 14 * 86_400;
///     const DEN: i128 = 1;
/// }
///
/// assert_eq!(TimeDelta::from_units::<Fortnights, i64>(1), TimeDelta::days(14));
/// ```
pub trait Period {
    const NUM: i128;
    const DEN: i128;

    #[doc(hidden)]
    const TICKS: (i128, i128) = tick_ratio(Self::NUM, Self::DEN);
}

macro_rules! periods {
    ($( $(#[$attr:meta])* $name:ident = $num:expr, $den:expr; )*) => {
        $(
            $(#[$attr])*
            #[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Default)]
            pub struct $name;

            impl Period for $name {
                const NUM: i128 = $num;
                const DEN: i128 = $den;
            }
        )*
    };
}

periods! {
    /// 86 400 seconds.
    Days = 86_400, 1;
    Hours = 3_600, 1;
    Minutes = 60, 1;
    Seconds = 1, 1;
    Milliseconds = 1, 1_000;
    Microseconds = 1, 1_000_000;
    Nanoseconds = 1, 1_000_000_000;
    /// One tick.
    Picoseconds = 1, 1_000_000_000_000;
}


/// The built-in periods, chosen at runtime.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Unit {
    Picosecond, Nanosecond, Microsecond, Millisecond,
    Second, Minute, Hour, Day,
}

impl Unit {

    /// The number of ticks in one of this unit.
    pub const fn ticks(self) -> i128 {
        match self {
            Unit::Picosecond  => 1,
            Unit::Nanosecond  => 1_000,
            Unit::Microsecond => 1_000_000,
            Unit::Millisecond => 1_000_000_000,
            Unit::Second      => TICKS_PER_SECOND,
            Unit::Minute      => 60 * TICKS_PER_SECOND,
            Unit::Hour        => 3_600 * TICKS_PER_SECOND,
            Unit::Day         => 86_400 * TICKS_PER_SECOND,
        }
    }

    /// The suffix used when formatting a duration in this unit.
    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Picosecond  => "ps",
            Unit::Nanosecond  => "ns",
            Unit::Microsecond => "us",
            Unit::Millisecond => "ms",
            Unit::Second      => "s",
            Unit::Minute      => "m",
            Unit::Hour        => "h",
            Unit::Day         => "d",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.suffix())
    }
}


/// A numeric type a duration can be counted in.
///
/// Integer scalars convert exactly and truncate towards zero when a unit
/// doesn’t divide evenly. Float scalars go through `f64` and truncate
/// towards zero when turned back into ticks; NaN becomes zero and
/// anything too large saturates.
pub trait Scalar: Num + NumCast + PartialOrd + Copy {
    const IS_FLOAT: bool;

    #[doc(hidden)]
    fn as_ticks(self) -> i128;

    #[doc(hidden)]
    fn as_f64(self) -> f64;

    #[doc(hidden)]
    fn from_ticks(ticks: i128) -> Self;

    #[doc(hidden)]
    fn from_f64(value: f64) -> Self;
}

macro_rules! scalars {
    ($is_float:expr => $( $t:ty ),*) => {
        $(
            impl Scalar for $t {
                const IS_FLOAT: bool = $is_float;

                #[allow(trivial_numeric_casts)]
                fn as_ticks(self) -> i128 { self as i128 }

                #[allow(trivial_numeric_casts)]
                fn as_f64(self) -> f64 { self as f64 }

                #[allow(trivial_numeric_casts)]
                fn from_ticks(ticks: i128) -> Self { ticks as $t }

                #[allow(trivial_numeric_casts)]
                fn from_f64(value: f64) -> Self { value as $t }
            }
        )*
    };
}

scalars!(false => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
scalars!(true => f32, f64);
