//! Calendar weeks, numbered under a week convention.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Add, Sub, Range};

use log::debug;

use crate::cal::convention::{WeekConvention, ConventionSource, HostLocale};
use crate::cal::datetime::{LocalDate, SECONDS_IN_DAY};
use crate::cal::fmt::ISO;
use crate::duration::Duration;
use crate::util::RangeExt;


/// A **calendar week** is week *W* of week-numbering year *Y*, as counted
/// by the convention it carries.
///
/// The week-numbering year is the year that owns the week. It is usually
/// the calendar year of every day in it, but a week that straddles New
/// Year belongs to exactly one of the two years, as decided by the
/// convention’s rule.
///
/// Two weeks are *equal* only if their years, weeks, and conventions all
/// match. They are *ordered* by year and week alone, so weeks from
/// different conventions can be ordered as equal, yet be unequal under
/// `==`.
#[derive(Clone, Copy)]
pub struct CalendarWeek {
    year: i64,
    week: i64,
    convention: WeekConvention,
}

impl CalendarWeek {

    /// Returns the week that contains the given date.
    ///
    /// This never fails. A date outside the weeks of the convention’s
    /// calendar gives the first or last week the calendar has, so
    /// `contains` is false for it.
    ///
    /// ```rust
    /// use calendar_week::{CalendarWeek, LocalDate, Month, WeekConvention};
    ///
    /// let date = LocalDate::ymd(2017, Month::May, 24).unwrap();
    /// let week = CalendarWeek::from_date(date, WeekConvention::iso_8601());
    /// assert_eq!(week.year(), 2017);
    /// assert_eq!(week.week(), 21);
    /// ```
    pub fn from_date(date: LocalDate, convention: WeekConvention) -> Self {
        Self::from_day_number(date.days_since_1970(), convention)
    }

    /// Returns the week containing the given day since 1970, saturating
    /// at the first and last weeks of the convention’s calendar.
    fn from_day_number(days: i64, convention: WeekConvention) -> Self {
        let (first, last) = representable_days(convention);
        let date = LocalDate::from_days_since_1970(days.clamp(first, last));
        let (year, week) = convention.year_week(date);
        Self { year, week, convention }
    }

    /// Returns week `week` of the week-numbering year `year`, if the
    /// convention’s calendar has that year and the year has that many
    /// weeks.
    ///
    /// ```rust
    /// use calendar_week::{CalendarWeek, WeekConvention, Error};
    ///
    /// let iso = WeekConvention::iso_8601();
    /// assert!(CalendarWeek::from_year_week(1998, 53, iso).is_ok());
    /// assert_eq!(CalendarWeek::from_year_week(1998, 54, iso).unwrap_err(), Error::OutOfRange("week"));
    /// ```
    pub fn from_year_week(year: i64, week: i64, convention: WeekConvention) -> Result<Self, Error> {
        let calendar = convention.calendar();
        if !calendar.contains_year(year) {
            debug!("Rejecting year {}: outside {} to {}", year, calendar.min_year(), calendar.max_year());
            return Err(Error::OutOfRange("year"));
        }

        let max_week = convention.weeks_in_year(year);
        if !week.is_within(1 .. max_week + 1) {
            debug!("Rejecting week {}: {} has {} weeks under {}", week, year, max_week, convention);
            return Err(Error::OutOfRange("week"));
        }

        Ok(Self { year, week, convention })
    }

    /// Returns the week containing the given date, under the host’s
    /// convention.
    pub fn containing(date: LocalDate) -> Self {
        Self::from_date(date, HostLocale.week_convention())
    }

    /// Returns the given week of the given year, under the host’s
    /// convention.
    pub fn yw(year: i64, week: i64) -> Result<Self, Error> {
        Self::from_year_week(year, week, HostLocale.week_convention())
    }

    /// The week-numbering year that owns this week.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// The number of this week within its year, from 1.
    pub fn week(&self) -> i64 {
        self.week
    }

    pub fn convention(&self) -> WeekConvention {
        self.convention
    }

    /// The first day of this week, which always falls on the convention’s
    /// first day of the week.
    pub fn first_day(&self) -> LocalDate {
        let first = self.convention.first_day_of_week().first_in_year(self.year);

        // `first` sits in week 1 or week 2, depending on whether the days
        // before it were counted as a week of their own.
        let anchor = self.convention.week_of_year(first);
        let offset = if anchor <= 1 { self.week - 1 } else { self.week - anchor };
        first.add_days(offset * 7)
    }

    /// The last day of this week, six days after the first.
    pub fn last_day(&self) -> LocalDate {
        self.first_day().add_days(6)
    }

    /// Returns whether the given date falls within this week.
    pub fn contains(&self, date: LocalDate) -> bool {
        self.first_day() <= date && date <= self.last_day()
    }

    /// Moves forwards or backwards a number of weeks, crossing into other
    /// years as needed. Stops at the first or last week of the calendar.
    pub fn add_weeks(&self, weeks: i64) -> Self {
        let days = self.first_day().days_since_1970().saturating_add(weeks.saturating_mul(7));
        Self::from_day_number(days, self.convention)
    }

    /// The week after this one.
    pub fn following(&self) -> Self {
        self.add_weeks(1)
    }

    /// The week before this one.
    pub fn preceding(&self) -> Self {
        self.add_weeks(-1)
    }

    /// Returns the number of weeks from this week’s start to the other
    /// week’s start, which is negative if the other week is earlier.
    pub fn weeks_until(&self, other: &Self) -> i64 {
        (other.first_day().days_since_1970() - self.first_day().days_since_1970()).div_euclid(7)
    }

    /// Returns an iterator over the seven days of this week.
    ///
    /// ```rust
    /// use calendar_week::{CalendarWeek, WeekConvention, Weekday, DatePiece};
    ///
    /// let week = CalendarWeek::from_year_week(2017, 1, WeekConvention::north_american()).unwrap();
    /// let weekdays: Vec<Weekday> = week.days().map(|d| d.weekday()).collect();
    /// assert_eq!(weekdays[0], Weekday::Sunday);
    /// assert_eq!(weekdays[6], Weekday::Saturday);
    /// ```
    pub fn days(&self) -> WeekDays {
        WeekDays {
            first_day: self.first_day(),
            range: 0 .. 7,
        }
    }
}

/// The first and last days, counted from 1970, of the weeks owned by the
/// years of the convention’s calendar.
fn representable_days(convention: WeekConvention) -> (i64, i64) {
    let calendar = convention.calendar();
    let first = convention.week_one_start(calendar.min_year());
    let after = convention.week_one_start(calendar.max_year() + 1);
    (first.days_since_1970(), after.days_since_1970() - 1)
}

impl PartialEq for CalendarWeek {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year
            && self.week == other.week
            && self.convention == other.convention
    }
}

impl Eq for CalendarWeek {}

impl PartialOrd for CalendarWeek {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarWeek {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.week).cmp(&(other.year, other.week))
    }
}

impl Hash for CalendarWeek {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut code = self.convention.code();
        code = code.wrapping_mul(397) ^ (self.year as u64);
        code = code.wrapping_mul(397) ^ (self.week as u64);
        state.write_u64(code);
    }
}

impl Add<Duration> for CalendarWeek {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        // Milliseconds are never negative, so they can't reach the next day.
        let (seconds, _) = duration.lengths();
        let days = seconds.div_euclid(SECONDS_IN_DAY);
        Self::from_day_number(self.first_day().days_since_1970().saturating_add(days), self.convention)
    }
}

impl Sub<Duration> for CalendarWeek {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        let (seconds, milliseconds) = duration.lengths();
        let back = 0_i64.saturating_sub(seconds).saturating_sub(if milliseconds > 0 { 1 } else { 0 });
        let days = back.div_euclid(SECONDS_IN_DAY);
        Self::from_day_number(self.first_day().days_since_1970().saturating_add(days), self.convention)
    }
}

impl fmt::Display for CalendarWeek {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ISO::fmt(self, f)
    }
}

impl fmt::Debug for CalendarWeek {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CalendarWeek({} {})", self.iso(), self.convention)
    }
}


/// An iterator over the days of a `CalendarWeek`, in order.
#[derive(PartialEq, Debug, Clone)]
pub struct WeekDays {
    first_day: LocalDate,
    range: Range<i64>,
}

impl Iterator for WeekDays {
    type Item = LocalDate;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|offset| self.first_day.add_days(offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for WeekDays {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(|offset| self.first_day.add_days(offset))
    }
}

impl ExactSizeIterator for WeekDays {}

impl FusedIterator for WeekDays {}


/// Something that went wrong while creating a week or a convention.
#[derive(PartialEq, Eq, Debug, Copy, Clone, thiserror::Error)]
pub enum Error {

    /// A year or week number was outside its allowed range. The value
    /// names the offending parameter.
    #[error("{0} out of range")]
    OutOfRange(&'static str),

    /// A convention was missing a part, or its text could not be read.
    /// The value names the part.
    #[error("invalid week convention: bad or missing {0}")]
    InvalidConvention(&'static str),
}
