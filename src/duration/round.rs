//! Rounding a delta to a multiple of some period.
//!
//! Every mode is built on `trunc`, which uses the truncating remainder.
//! A period of zero panics, as any division by zero does.

use super::TimeDelta;


impl TimeDelta {

    /// Rounds towards zero to a multiple of `period`.
    ///
    /// ```
    /// use picotime::TimeDelta;
    ///
    /// let delta = TimeDelta::milliseconds(-2500);
    /// assert_eq!(delta.trunc(TimeDelta::seconds(1)), TimeDelta::seconds(-2));
    /// ```
    pub fn trunc(self, period: Self) -> Self {
        self - self % period
    }

    /// Rounds towards negative infinity to a multiple of `period`.
    pub fn floor(self, period: Self) -> Self {
        let t = self.trunc(period);
        if t <= self { t } else { t - period.abs() }
    }

    /// Rounds towards positive infinity to a multiple of `period`.
    pub fn ceil(self, period: Self) -> Self {
        let t = self.trunc(period);
        if t >= self { t } else { t + period.abs() }
    }

    /// Rounds to the nearest multiple of `period`. A delta exactly halfway
    /// between two multiples goes to the even one.
    ///
    /// ```
    /// use picotime::TimeDelta;
    ///
    /// let second = TimeDelta::seconds(1);
    /// assert_eq!(TimeDelta::milliseconds(2500).round(second), TimeDelta::seconds(2));
    /// assert_eq!(TimeDelta::milliseconds(3500).round(second), TimeDelta::seconds(4));
    /// ```
    pub fn round(self, period: Self) -> Self {
        let lower = self.floor(period);
        let upper = lower + period.abs();

        let below = self - lower;
        let above = upper - self;

        if below < above {
            lower
        }
        else if above < below {
            upper
        }
        else if (lower / period) % 2 == 0 {
            lower
        }
        else {
            upper
        }
    }
}
