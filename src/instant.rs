//! Exact points on a timeline.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use tracing::{debug, trace};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{self, Components, Date, Month, Subsecond, Weekday, MAX_TICKS, MIN_TICKS, TICKS_PER_DAY};
use crate::cal::fmt::{ISO, ISOString};
use crate::duration::TimeDelta;
use crate::error::{Error, ErrorKind, Result};
use crate::scale::{epoch_ticks, TimeScale, Utc};
use crate::system::sys_time;


/// An **instant** is an exact point on the timeline of some time scale,
/// with picosecond precision.
///
/// Internally this is the number of ticks since the scale’s epoch. The
/// calendar fields are worked out from that whenever they’re asked for,
/// so arithmetic and comparison never touch the calendar at all.
///
/// Every instant lies between the start of 0001-01-01 and the end of
/// 9999-12-31. Everything that builds an instant from outside input
/// checks this; the plain `+` and `-` operators leave it to the caller,
/// and `checked_add` and `checked_sub` exist for when they can’t.
pub struct Instant<S> {
    ticks: i128,
    scale: PhantomData<S>,
}

impl<S: TimeScale> Instant<S> {

    const fn new(ticks: i128) -> Self {
        Self { ticks, scale: PhantomData }
    }

    fn calendar_ticks(self) -> i128 {
        self.ticks + epoch_ticks::<S>()
    }

    fn from_calendar_ticks(ticks: i128) -> Self {
        Self::new(ticks - epoch_ticks::<S>())
    }

    /// The scale’s epoch: the instant with a tick count of zero.
    pub const fn epoch() -> Self {
        Self::new(0)
    }

    /// The earliest supported instant, 0001-01-01T00:00:00.
    pub fn min() -> Self {
        Self::from_calendar_ticks(MIN_TICKS)
    }

    /// The latest supported instant, 9999-12-31T23:59:59.999999999999.
    pub fn max() -> Self {
        Self::from_calendar_ticks(MAX_TICKS)
    }

    /// The smallest step between two instants.
    pub fn resolution() -> TimeDelta {
        TimeDelta::RESOLUTION
    }

    /// Creates an instant from calendar fields, checking each of them.
    #[track_caller]
    pub fn from_components(components: &Components) -> Result<Self> {
        datetime::from_components(components).map(Self::from_calendar_ticks)
    }

    /// Creates an instant at a whole second.
    ///
    /// ```
    /// use picotime::DateTime;
    ///
    /// let instant = DateTime::ymd_hms(2000, 1, 2, 3, 4, 5).unwrap();
    /// assert_eq!(instant.to_string(), "2000-01-02T03:04:05");
    ///
    /// assert!(DateTime::ymd_hms(2000, 2, 30, 0, 0, 0).is_err());
    /// ```
    #[track_caller]
    pub fn ymd_hms(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> Result<Self> {
        Self::with_subsecond(year, month, day, hour, minute, second, Subsecond::ZERO)
    }

    /// Creates an instant with the fraction of the second given as
    /// milliseconds, microseconds, nanoseconds and picoseconds.
    #[allow(clippy::too_many_arguments)]
    #[track_caller]
    pub fn ymd_hms_ms_us_ns_ps(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8,
                               ms: i16, us: i16, ns: i16, ps: i16) -> Result<Self> {
        let subsecond = Subsecond::from_milli_groups(ms, us, ns, ps)?;
        Self::with_subsecond(year, month, day, hour, minute, second, subsecond)
    }

    /// Creates an instant with the fraction of the second given as
    /// microseconds and picoseconds.
    ///
    /// ```
    /// use picotime::GpsTime;
    ///
    /// let instant = GpsTime::ymd_hms_us_ps(2000, 1, 2, 3, 4, 5, 6, 7).unwrap();
    /// assert_eq!(instant.to_string(), "2000-01-02T03:04:05.000006000007");
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[track_caller]
    pub fn ymd_hms_us_ps(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8,
                         us: i32, ps: i32) -> Result<Self> {
        let subsecond = Subsecond::from_micro_groups(us, ps)?;
        Self::with_subsecond(year, month, day, hour, minute, second, subsecond)
    }

    #[allow(clippy::too_many_arguments)]
    #[track_caller]
    fn with_subsecond(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8,
                      subsecond: Subsecond) -> Result<Self> {
        let month = Month::from_one(month)?;
        Self::from_components(&Components { year, month, day, hour, minute, second, subsecond })
    }

    /// Creates an instant a given length of time after the scale’s epoch,
    /// or an error if that falls outside the calendar.
    #[track_caller]
    pub fn from_time_since_epoch(delta: TimeDelta) -> Result<Self> {
        let instant = Self::new(delta.ticks());

        if !(Self::min() ..= Self::max()).contains(&instant) {
            debug!(ticks = delta.ticks(), scale = S::NAME, "rejecting instant outside the calendar");
            return Err(Error::new(ErrorKind::OutOfRange));
        }

        Ok(instant)
    }

    /// The length of time since the scale’s epoch.
    pub fn time_since_epoch(self) -> TimeDelta {
        TimeDelta::from_ticks(self.ticks)
    }

    /// Creates a new instant set to the computer’s current time, read
    /// from its UTC clock and shifted onto this scale.
    pub fn now() -> Self {
        let (seconds, nanos) = unsafe { sys_time() };
        trace!(seconds, nanos, scale = S::NAME, "read system clock");

        let since_unix = TimeDelta::seconds(seconds) + TimeDelta::nanoseconds(nanos);
        Self::from_calendar_ticks(epoch_ticks::<Utc>() + since_unix.ticks() + S::OFFSET_FROM_UTC.ticks())
    }

    /// The same moment on another time scale, allowing for the difference
    /// between the two scales’ clocks.
    ///
    /// ```
    /// use picotime::{GpsTime, UtcTime};
    ///
    /// let utc = UtcTime::ymd_hms(2020, 1, 1, 0, 0, 0).unwrap();
    /// let gps = utc.to_scale().unwrap();
    /// assert_eq!(gps, GpsTime::ymd_hms(2020, 1, 1, 0, 0, 18).unwrap());
    /// ```
    #[track_caller]
    pub fn to_scale<T: TimeScale>(self) -> Result<Instant<T>> {
        let utc = self.calendar_ticks() - S::OFFSET_FROM_UTC.ticks();
        let ticks = utc + T::OFFSET_FROM_UTC.ticks() - epoch_ticks::<T>();
        Instant::from_time_since_epoch(TimeDelta::from_ticks(ticks))
    }

    /// All the calendar fields of this instant.
    pub fn components(self) -> Components {
        datetime::to_components(self.calendar_ticks())
    }

    /// The calendar date this instant falls on.
    pub fn date(self) -> Date {
        self.components().date()
    }

    /// The length of time since midnight.
    pub fn time_of_day(self) -> TimeDelta {
        TimeDelta::from_ticks(self.calendar_ticks().rem_euclid(TICKS_PER_DAY))
    }

    /// The fraction of the second.
    pub fn subsecond(self) -> Subsecond {
        self.components().subsecond
    }

    /// The instant one tick later.
    pub fn next_tick(self) -> Self {
        self + TimeDelta::RESOLUTION
    }

    /// The instant one tick earlier.
    pub fn prev_tick(self) -> Self {
        self - TimeDelta::RESOLUTION
    }

    /// Adds a delta, returning `None` if the result would fall outside
    /// the calendar.
    pub fn checked_add(self, delta: TimeDelta) -> Option<Self> {
        let ticks = self.ticks.checked_add(delta.ticks())?;
        Self::from_time_since_epoch(TimeDelta::from_ticks(ticks)).ok()
    }

    /// Subtracts a delta, returning `None` if the result would fall
    /// outside the calendar.
    pub fn checked_sub(self, delta: TimeDelta) -> Option<Self> {
        let ticks = self.ticks.checked_sub(delta.ticks())?;
        Self::from_time_since_epoch(TimeDelta::from_ticks(ticks)).ok()
    }
}

impl<S: TimeScale> DatePiece for Instant<S> {
    fn year(&self) -> i64 { self.components().year }
    fn month(&self) -> Month { self.components().month }
    fn day(&self) -> i8 { self.components().day }
    fn yearday(&self) -> i16 { self.date().yearday() }
    fn weekday(&self) -> Weekday { datetime::weekday(self.calendar_ticks()) }
}

impl<S: TimeScale> TimePiece for Instant<S> {
    fn hour(&self) -> i8 { self.components().hour }
    fn minute(&self) -> i8 { self.components().minute }
    fn second(&self) -> i8 { self.components().second }
    fn millisecond(&self) -> i16 { self.subsecond().milli_groups().0 }
    fn microsecond(&self) -> i16 { self.subsecond().milli_groups().1 }
    fn nanosecond(&self) -> i16 { self.subsecond().milli_groups().2 }
    fn picosecond(&self) -> i16 { self.subsecond().milli_groups().3 }
}


// Written out by hand so that none of them need `S` itself to implement
// the trait.

impl<S> Clone for Instant<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Instant<S> {}

impl<S> PartialEq for Instant<S> {
    fn eq(&self, other: &Self) -> bool {
        self.ticks == other.ticks
    }
}

impl<S> Eq for Instant<S> {}

impl<S> PartialOrd for Instant<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Instant<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ticks.cmp(&other.ticks)
    }
}

impl<S> Hash for Instant<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ticks.hash(state);
    }
}


impl<S: TimeScale> Add<TimeDelta> for Instant<S> {
    type Output = Self;

    fn add(self, delta: TimeDelta) -> Self {
        Self::new(self.ticks + delta.ticks())
    }
}

impl<S: TimeScale> Add<Instant<S>> for TimeDelta {
    type Output = Instant<S>;

    fn add(self, instant: Instant<S>) -> Instant<S> {
        instant + self
    }
}

impl<S: TimeScale> Sub<TimeDelta> for Instant<S> {
    type Output = Self;

    fn sub(self, delta: TimeDelta) -> Self {
        Self::new(self.ticks - delta.ticks())
    }
}

impl<S: TimeScale> AddAssign<TimeDelta> for Instant<S> {
    fn add_assign(&mut self, delta: TimeDelta) {
        *self = *self + delta;
    }
}

impl<S: TimeScale> SubAssign<TimeDelta> for Instant<S> {
    fn sub_assign(&mut self, delta: TimeDelta) {
        *self = *self - delta;
    }
}

impl<S: TimeScale> Sub for Instant<S> {
    type Output = TimeDelta;

    fn sub(self, other: Self) -> TimeDelta {
        TimeDelta::from_ticks(self.ticks - other.ticks)
    }
}


impl<S: TimeScale> ISO for Instant<S> {
    fn iso(&self) -> ISOString<'_, Self> {
        ISOString(self)
    }
}

impl<'a, S: TimeScale> fmt::Display for ISOString<'a, Instant<S>> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0.components(), f)
    }
}

impl<S: TimeScale> fmt::Display for Instant<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.iso(), f)
    }
}

impl<S: TimeScale> fmt::Debug for Instant<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", S::NAME, self.components())
    }
}

#[cfg(feature = "parse")]
impl<S: TimeScale> Instant<S> {

    /// Parses an instant written as `YYYY-MM-DDThh:mm:ss[.f]`.
    ///
    /// Errors from `str::parse` have their origin somewhere inside the
    /// standard library, as that is what calls `from_str`. Use this
    /// instead to have the error point at your own code.
    ///
    /// ```
    /// use picotime::{GpsTime, ErrorKind};
    ///
    /// let error = GpsTime::parse("2000-02-30T00:00:00").unwrap_err();
    /// assert_eq!(error.kind(), ErrorKind::Day);
    /// assert!(error.origin().file().ends_with(".rs"));
    /// ```
    #[track_caller]
    pub fn parse(input: &str) -> Result<Self> {
        let components = crate::cal::parse::parse_components(input)?;
        Self::from_components(&components)
    }
}

#[cfg(feature = "parse")]
impl<S: TimeScale> std::str::FromStr for Instant<S> {
    type Err = Error;

    #[track_caller]
    fn from_str(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}
