//! Lengths of time on the timeline.

use std::ops::{Add, Sub, Mul, Neg};

use crate::cal::datetime::SECONDS_IN_DAY;


/// A **duration** is a length of time on the timeline, irrespective of
/// time zone or calendar format, with millisecond precision.
///
/// Durations are signed. The milliseconds portion is always kept between
/// 0 and 999, so a negative duration has a negative seconds portion: one
/// and a half seconds backwards is `(-2, 500)`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Copy)]
pub struct Duration {
    seconds: i64,
    milliseconds: i16,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { seconds: 0, milliseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { seconds, milliseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds and
    /// milliseconds long. Milliseconds outside 0 to 999 carry over into
    /// the seconds.
    ///
    /// ```rust
    /// use calendar_week::Duration;
    /// assert_eq!(Duration::of_ms(0, 1500), Duration::of_ms(1, 500));
    /// assert_eq!(Duration::of_ms(0, -500).lengths(), (-1, 500));
    /// ```
    pub fn of_ms(seconds: i64, milliseconds: i16) -> Self {
        let ms = i64::from(milliseconds);
        Self {
            seconds: seconds + ms.div_euclid(1000),
            milliseconds: ms.rem_euclid(1000) as i16,
        }
    }

    /// Create a new duration that’s the given number of whole days long.
    pub fn of_days(days: i64) -> Self {
        Self::of(days * SECONDS_IN_DAY)
    }

    /// Create a new duration that’s the given number of whole weeks long.
    pub fn of_weeks(weeks: i64) -> Self {
        Self::of_days(weeks * 7)
    }

    /// Return the seconds and milliseconds portions of the duration as
    /// a 2-element tuple.
    pub fn lengths(&self) -> (i64, i16) {
        (self.seconds, self.milliseconds)
    }

    // This returns a tuple instead of separate seconds() and milliseconds()
    // functions, so nobody mistakes milliseconds() for the *total* length
    // in milliseconds.
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::of_ms(self.seconds + rhs.seconds, self.milliseconds + rhs.milliseconds)
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::of_ms(self.seconds - rhs.seconds, self.milliseconds - rhs.milliseconds)
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        let ms = i64::from(self.milliseconds) * amount;
        Self {
            seconds: self.seconds * amount + ms.div_euclid(1000),
            milliseconds: ms.rem_euclid(1000) as i16,
        }
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::zero() - self
    }
}
