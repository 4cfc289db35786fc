//! Time scales: where an instant’s tick count starts from, and how the
//! scale’s clock relates to the computer’s UTC clock.

use std::fmt;
use std::hash::Hash;

use crate::cal::datetime::{days_from_civil, Month, TICKS_PER_DAY};
use crate::duration::{TimeDelta, TICKS_PER_SECOND};
use crate::instant::Instant;


/// A **time scale** fixes the epoch an [`Instant`] counts its ticks from,
/// and the constant difference between the scale’s clock and UTC.
///
/// Scales are zero-sized marker types, so instants on different scales
/// are different types and can’t be mixed up in arithmetic.
///
/// The offset is a single fixed value. Nothing here knows about leap
/// seconds, so a scale that drifts against UTC, such as GPS time, only
/// reads the clock correctly for the period its offset was chosen for.
pub trait TimeScale: Copy + Eq + Ord + Hash + Default + fmt::Debug + Send + Sync + 'static {

    /// A short name for the scale, used when debugging.
    const NAME: &'static str;

    /// The date whose midnight is tick zero.
    const EPOCH: (i64, Month, i8);

    /// How far this scale’s clock runs ahead of UTC.
    const OFFSET_FROM_UTC: TimeDelta;
}

/// The number of ticks from 0001-01-01T00:00:00 to the scale’s epoch.
pub(crate) fn epoch_ticks<S: TimeScale>() -> i128 {
    let (year, month, day) = S::EPOCH;
    days_from_civil(year, month, day) as i128 * TICKS_PER_DAY
}


/// The proleptic Gregorian calendar, counted from the first day of it.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Default)]
pub struct Gregorian;

impl TimeScale for Gregorian {
    const NAME: &'static str = "DateTime";
    const EPOCH: (i64, Month, i8) = (1, Month::January, 1);
    const OFFSET_FROM_UTC: TimeDelta = TimeDelta::ZERO;
}

/// UTC, counted from the Unix epoch.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Default)]
pub struct Utc;

impl TimeScale for Utc {
    const NAME: &'static str = "UtcTime";
    const EPOCH: (i64, Month, i8) = (1970, Month::January, 1);
    const OFFSET_FROM_UTC: TimeDelta = TimeDelta::ZERO;
}

/// GPS time, counted from 1980-01-06.
///
/// GPS time has no leap seconds; it has been 18 seconds ahead of UTC
/// since the start of 2017.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Default)]
pub struct Gps;

impl TimeScale for Gps {
    const NAME: &'static str = "GpsTime";
    const EPOCH: (i64, Month, i8) = (1980, Month::January, 6);
    const OFFSET_FROM_UTC: TimeDelta = TimeDelta::from_ticks(18 * TICKS_PER_SECOND);
}


/// A date and time in the proleptic Gregorian calendar.
pub type DateTime = Instant<Gregorian>;

/// A UTC date and time, counted from 1970-01-01.
pub type UtcTime = Instant<Utc>;

/// A GPS date and time, counted from 1980-01-06.
pub type GpsTime = Instant<Gps>;


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn gregorian_epoch_is_tick_zero() {
        assert_eq!(epoch_ticks::<Gregorian>(), 0);
    }

    #[test]
    fn unix_epoch() {
        assert_eq!(epoch_ticks::<Utc>(), 719_162 * TICKS_PER_DAY);
    }

    #[test]
    fn gps_epoch() {
        assert_eq!(epoch_ticks::<Gps>() - epoch_ticks::<Utc>(), 3_657 * TICKS_PER_DAY);
    }
}
