//! Dates, times, datetimes, months, and weekdays.

use std::cmp::{min, Ordering};
use std::fmt;
use std::ops::{Add, Sub};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::fmt::ISO;
use crate::duration::Duration;
use crate::instant::Instant;
use crate::util::RangeExt;

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendar_week::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.leap_year_calculations().1
    }

    /// Returns the number of days in this year: 365, or 366 in a leap year.
    pub fn day_count(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Performs two related calculations for leap years, returning the
    /// results as a two-part tuple:
    ///
    /// 1. The number of leap years that have elapsed between the year
    ///    2000 and this year, counting neither of them;
    /// 2. Whether this year is a leap year or not.
    fn leap_year_calculations(self) -> (i64, bool) {
        let (num_400y_cycles, mut remainder) = split_cycles(self.0 - 2000, 400);
        let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let num_100y_cycles = remainder / 100;
        remainder -= num_100y_cycles * 100;

        let leap_years_elapsed = remainder / 4
            + 97 * num_400y_cycles  // There are 97 leap years in 400 years
            + 24 * num_100y_cycles  // There are 24 leap years in 100 years
            - if currently_leap_year { 1 } else { 0 };

        (leap_years_elapsed, currently_leap_year)
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;

/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// Day counts inside this module start on the 1st of March 2000, right
/// after a leap day that closes a 400-year cycle. With the leap day at the
/// very end of every cycle, splitting a day count into years is plain
/// division. Everything exposed to users counts from the Unix epoch
/// instead.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.

/// Number of days between the 1st of January, 1970, and the 1st of
/// January, 2000, plus the leap day of 2000 itself, which
/// `leap_year_calculations` does not count.
const DAYS_1970_TO_2000: i64 = 30 * 365 + 7 + 1;

/// The months of a year that starts in March, paired with the number of
/// days elapsed in that year before each one begins.
const MONTHS_FROM_MARCH: [(Month, i64); 12] = [
    (March,       0), (April,      31), (May,        61),
    (June,       92), (July,      122), (August,    153),
    (September, 184), (October,   214), (November,  245),
    (December,  275), (January,   306), (February,  337),
];


/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
#[derive(Eq, Clone, Copy)]
pub struct LocalDate {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
    millisecond: i16,
}

/// A **local date-time** is an exact instant on the timeline, *without a
/// time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}


impl LocalDate {

    /// Creates a new local date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use calendar_week::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        let ymd = YMD { year, month, day };
        if ymd.is_valid(Year(year).is_leap_year()) {
            Ok(Self::from_days_since_1970(ymd.days_since_1970()))
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Creates a new local date instance from the given year and day-of-year
    /// values.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use calendar_week::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2015, 0x100).unwrap();
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    ///
    /// assert!(LocalDate::yd(2015, 366).is_err());
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        if yearday.is_within(1 .. i64::from(Year(year).day_count()) + 1) {
            Ok(Self::jan_1(year).add_days(yearday - 1))
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Creates a new local date instance from the given ISO-8601 year,
    /// week-of-year, and weekday values. Week 1 is the week that contains
    /// the 4th of January.
    ///
    /// The year will change when working with dates early in week 1, or
    /// late in week 53:
    ///
    /// ```rust
    /// use calendar_week::{LocalDate, Weekday, Month, DatePiece};
    ///
    /// let date = LocalDate::ywd(2015, 37, Weekday::Friday).unwrap();
    /// assert_eq!(date, LocalDate::ymd(2015, Month::September, 11).unwrap());
    ///
    /// let date = LocalDate::ywd(2009, 1, Weekday::Monday).unwrap();
    /// assert_eq!(date, LocalDate::ymd(2008, Month::December, 29).unwrap());
    ///
    /// let date = LocalDate::ywd(2009, 53, Weekday::Sunday).unwrap();
    /// assert_eq!(date, LocalDate::ymd(2010, Month::January, 3).unwrap());
    ///
    /// assert!(LocalDate::ywd(2010, 53, Weekday::Monday).is_err());
    /// ```
    pub fn ywd(year: i64, week: i64, weekday: Weekday) -> Result<Self, Error> {
        let week_one = iso_week_one_monday(year);
        let weeks_in_year = (iso_week_one_monday(year + 1).days_since_1970() - week_one.days_since_1970()) / 7;

        if week.is_within(1 .. weeks_in_year + 1) {
            let days_into_week = i64::from(weekday.days_from_monday_as_one()) - 1;
            Ok(week_one.add_days((week - 1) * 7 + days_into_week))
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Returns the date that is the given number of days after this one.
    /// Negative numbers go backwards.
    ///
    /// ```rust
    /// use calendar_week::{LocalDate, Month};
    ///
    /// let date = LocalDate::ymd(2016, Month::December, 26).unwrap();
    /// assert_eq!(date.add_days(7), LocalDate::ymd(2017, Month::January, 2).unwrap());
    /// assert_eq!(date.add_days(-26), LocalDate::ymd(2016, Month::November, 30).unwrap());
    /// ```
    pub fn add_days(self, days: i64) -> Self {
        Self::from_days_since_1970(self.days_since_1970() + days)
    }

    /// The 1st of January of the given year. Always valid, so this never
    /// needs to return a `Result`.
    pub(crate) fn jan_1(year: i64) -> Self {
        Self::from_days_since_1970(YMD { year, month: January, day: 1 }.days_since_1970())
    }

    /// The number of days between the 1st of January 1970 and this date.
    pub(crate) fn days_since_1970(&self) -> i64 {
        self.ymd.days_since_1970()
    }

    pub(crate) fn from_days_since_1970(days: i64) -> Self {
        Self::from_days_since_epoch(days - EPOCH_DIFFERENCE)
    }

    /// Computes a LocalDate - year, month, day, weekday, and yearday -
    /// given the number of days that have passed since the 1st of March
    /// 2000.
    fn from_days_since_epoch(days: i64) -> Self {

        // The Gregorian calendar repeats every 400 years. Inside a cycle,
        // peel off whole centuries, then whole four-year spans, then
        // whole years. The final century and the final year of a span are
        // one day longer, because they end on a leap day, hence the `min`s.
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        let num_100y_cycles = min(remainder / DAYS_IN_100Y, 3);
        remainder -= num_100y_cycles * DAYS_IN_100Y;

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;

        let years = min(remainder / 365, 3);
        remainder -= years * 365;

        // `remainder` is now the number of days since the 1st of March of
        // this year.
        let march_year = 2000 + 400 * num_400y_cycles + 100 * num_100y_cycles + 4 * num_4y_cycles + years;

        let index = MONTHS_FROM_MARCH.iter()
                                     .rposition(|&(_, before)| before <= remainder)
                                     .unwrap_or(0);
        let (month, days_before) = MONTHS_FROM_MARCH[index];

        // January and February belong to the next calendar year.
        let (year, yearday) = if month >= March {
            let leap_day = if Year(march_year).is_leap_year() { 1 } else { 0 };
            (march_year, remainder + 31 + 28 + leap_day + 1)
        }
        else {
            (march_year + 1, remainder - MONTHS_FROM_MARCH[10].1 + 1)
        };

        Self {
            yearday: yearday as i16,
            weekday: days_to_weekday(days),
            ymd: YMD {
                year,
                month,
                day: (remainder - days_before + 1) as i8,
            },
        }
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate({})", self.iso())
    }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}


/// The Monday that starts ISO-8601 week 1 of the given year.
fn iso_week_one_monday(year: i64) -> LocalDate {
    let jan_4 = LocalDate::jan_1(year).add_days(3);
    jan_4.add_days(1 - i64::from(jan_4.weekday.days_from_monday_as_one()))
}


impl LocalTime {

    /// Computes the number of hours, minutes, and seconds, based on the
    /// number of seconds that have elapsed since midnight.
    pub fn from_seconds_and_milliseconds_since_midnight(seconds: i64, millisecond_of_second: i16) -> Self {
        Self {
            hour:   (seconds / 60 / 60) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
            millisecond: millisecond_of_second,
        }
    }

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, millisecond: 0 }
    }

    /// Creates a new timestamp instance with the given hour, minute, and
    /// second fields. The millisecond field is set to 0.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_ms(hour, minute, second, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute,
    /// second, and millisecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms_ms(hour: i8, minute: i8, second: i8, millisecond: i16) -> Result<Self, Error> {
        if hour.is_within(0..24)   && minute.is_within(0..60)
        && second.is_within(0..60) && millisecond.is_within(0..1000)
        {
            Ok(Self { hour, minute, second, millisecond })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Calculate the number of seconds since midnight this time is at,
    /// ignoring milliseconds.
    pub fn to_seconds(self) -> i64 {
        i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn millisecond(&self) -> i16 { self.millisecond }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime({})", self.iso())
    }
}


impl LocalDateTime {

    /// Computes a complete date-time based on the values in the given
    /// Instant parameter.
    pub fn from_instant(instant: Instant) -> Self {
        Self::at_ms(instant.seconds(), instant.milliseconds())
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, setting the
    /// number of milliseconds to 0.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        Self::at_ms(seconds_since_1970_epoch, 0)
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**,
    pub fn at_ms(seconds_since_1970_epoch: i64, millisecond_of_second: i16) -> Self {
        let (days, secs) = split_cycles(seconds_since_1970_epoch, SECONDS_IN_DAY);

        Self {
            date: LocalDate::from_days_since_1970(days),
            time: LocalTime::from_seconds_and_milliseconds_since_midnight(secs, millisecond_of_second),
        }
    }

    /// Creates a new local date time from a local date and a local time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// Creates a new date-time stamp set to the current time.
    pub fn now() -> Self {
        Self::from_instant(Instant::now())
    }

    pub fn to_instant(&self) -> Instant {
        let seconds = self.date.days_since_1970() * SECONDS_IN_DAY + self.time.to_seconds();
        Instant::at_ms(seconds, self.time.millisecond)
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.ymd.year }
    fn month(&self) -> Month { self.date.ymd.month }
    fn day(&self) -> i8 { self.date.ymd.day }
    fn yearday(&self) -> i16 { self.date.yearday }
    fn weekday(&self) -> Weekday { self.date.weekday }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
    fn millisecond(&self) -> i16 { self.time.millisecond }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime({})", self.iso())
    }
}

impl Add<Duration> for LocalDateTime {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        Self::from_instant(self.to_instant() + duration)
    }
}

impl Sub<Duration> for LocalDateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        Self::from_instant(self.to_instant() - duration)
    }
}


/// A **YMD** is an implementation detail of `LocalDate`.
///
/// While every `LocalDate` is checked for validity, a `YMD` is not: the
/// 74th of March is a perfectly good `YMD`. For this reason, it is not
/// exposed to users of this library.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Debug, Copy)]
struct YMD {
    year:    i64,
    month:   Month,
    day:     i8,
}

impl YMD {

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970, without checking whether the day exists.
    fn days_since_1970(&self) -> i64 {
        let (leap_days_elapsed, is_leap_year) = Year(self.year).leap_year_calculations();

        (self.year - 2000) * 365
            + DAYS_1970_TO_2000
            + leap_days_elapsed
            + i64::from(self.month.days_before_start())
            + if is_leap_year && self.month >= March { 1 } else { 0 }
            + i64::from(self.day - 1)
    }

    /// Returns whether the day is in the range allowed by the month.
    fn is_valid(&self, is_leap_year: bool) -> bool {
        self.day >= 1 && self.day <= self.month.days_in_month(is_leap_year)
    }
}

/// Computes the weekday, given the number of days that have passed
/// since the 1st of March 2000, which was a Wednesday.
fn days_to_weekday(days: i64) -> Weekday {
    WEEKDAYS[(days + 3).rem_euclid(7) as usize]
}

/// Split a number of periods into a number of whole cycles, and the
/// number of periods left over that don’t fit into a cycle.
///
/// This is division with a remainder that is never negative: a negative
/// value gets ‘wrapped around’ into the previous cycle.
fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    (number_of_periods.div_euclid(cycle_length), number_of_periods.rem_euclid(cycle_length))
}


#[derive(PartialEq, Debug, Copy, Clone, thiserror::Error)]
pub enum Error {
    #[error("datetime field out of range")]
    OutOfRange,
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use calendar_week::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        Ok(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return Err(Error::OutOfRange),
        })
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 0, which is what `days_to_weekday` and the locale name
// tables both expect.
//
// Weekdays get no Ord instance: which day starts the week is exactly
// what a `WeekConvention` decides, so there is no single right answer.

static WEEKDAYS: [Weekday; 7] = [
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];

impl Weekday {
    pub(crate) fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Returns how many days after `start` this weekday falls, from 0 to 6.
    ///
    /// ```rust
    /// use calendar_week::Weekday;
    /// assert_eq!(Weekday::Monday.days_since(Weekday::Monday), 0);
    /// assert_eq!(Weekday::Sunday.days_since(Weekday::Monday), 6);
    /// assert_eq!(Weekday::Monday.days_since(Weekday::Sunday), 1);
    /// ```
    pub fn days_since(self, start: Weekday) -> i64 {
        (self as i64 - start as i64).rem_euclid(7)
    }

    /// Returns the first date in the given year that falls on this
    /// weekday. This is the 1st of January shifted forward by zero to six
    /// days.
    ///
    /// ```rust
    /// use calendar_week::{LocalDate, Month, Weekday};
    ///
    /// // The 1st of January 2017 was a Sunday.
    /// assert_eq!(Weekday::Sunday.first_in_year(2017), LocalDate::ymd(2017, Month::January, 1).unwrap());
    /// assert_eq!(Weekday::Monday.first_in_year(2017), LocalDate::ymd(2017, Month::January, 2).unwrap());
    /// assert_eq!(Weekday::Saturday.first_in_year(2017), LocalDate::ymd(2017, Month::January, 7).unwrap());
    /// ```
    pub fn first_in_year(self, year: i64) -> LocalDate {
        let jan_1 = LocalDate::jan_1(year);
        jan_1.add_days(self.days_since(jan_1.weekday))
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use calendar_week::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        match weekday {
            0 ..= 6 => Ok(WEEKDAYS[weekday as usize]),
            _       => Err(Error::OutOfRange),
        }
    }

    /// Return the weekday based on its ISO-8601 number, with Monday as
    /// Day 1 and Sunday as Day 7.
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        match weekday {
            7       => Ok(Sunday),
            1 ..= 6 => Ok(WEEKDAYS[weekday as usize]),
            _       => Err(Error::OutOfRange),
        }
    }
}
