//! Exact points on a timeline.

use std::fmt;
use std::ops::{Add, Sub};

use crate::duration::Duration;
use crate::system::sys_time;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with millisecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds, and a
/// 16-bit integer of milliseconds that is kept between 0 and 999.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    milliseconds: i16,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero milliseconds.
    pub fn at(seconds: i64) -> Self {
        Self::at_ms(seconds, 0)
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, along with the number of milliseconds so far this
    /// second.
    pub fn at_ms(seconds: i64, milliseconds: i16) -> Self {
        let (seconds, milliseconds) = Duration::of_ms(seconds, milliseconds).lengths();
        Self { seconds, milliseconds }
    }

    /// Creates a new Instant set to the computer’s current time.
    #[cfg_attr(target_os = "redox", allow(unused_unsafe))]
    pub fn now() -> Self {
        let (seconds, milliseconds) = unsafe { sys_time() };
        Self::at_ms(seconds, milliseconds)
    }

    /// Returns the number of seconds at this instant
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of milliseconds at this instant
    pub fn milliseconds(&self) -> i16 {
        self.milliseconds
    }

    fn since_epoch(self) -> Duration {
        Duration::of_ms(self.seconds, self.milliseconds)
    }

    fn from_epoch(duration: Duration) -> Self {
        let (seconds, milliseconds) = duration.lengths();
        Self { seconds, milliseconds }
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({}s/{}ms)", self.seconds, self.milliseconds)
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        Self::from_epoch(self.since_epoch() + duration)
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        Self::from_epoch(self.since_epoch() - duration)
    }
}


#[cfg(test)]
mod test {
    use super::Instant;
    use crate::duration::Duration;

    #[test]
    fn carries_milliseconds() {
        let instant = Instant::at_ms(10, 900) + Duration::of_ms(0, 200);
        assert_eq!(instant, Instant::at_ms(11, 100));
    }

    #[test]
    fn borrows_milliseconds() {
        let instant = Instant::at_ms(10, 100) - Duration::of_ms(0, 200);
        assert_eq!(instant, Instant::at_ms(9, 900));
    }

    #[test]
    fn before_the_epoch() {
        let instant = Instant::at(0) - Duration::of_ms(0, 1);
        assert_eq!(instant.seconds(), -1);
        assert_eq!(instant.milliseconds(), 999);
    }
}
