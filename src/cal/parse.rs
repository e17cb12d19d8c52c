//! Reading dates and weeks from ISO-8601 text.

use std::error::Error as ErrorTrait;
use std::str::FromStr;

use crate::cal::convention::WeekConvention;
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Error as DateError};
use crate::cal::week::CalendarWeek;


impl FromStr for LocalDate {
    type Err = Error<DateError>;

    /// Reads a calendar date (`2017-05-24`), an ordinal date
    /// (`2017-144`), or an ISO week date (`2017-W21-3`).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match iso8601::date(input) {
            Ok(fields)  => fields_to_date(fields).map_err(Error::Date),
            Err(e)      => Err(Error::Parse(e)),
        }
    }
}

impl FromStr for LocalDateTime {
    type Err = Error<DateError>;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::datetime(input).map_err(Error::Parse)?;
        let date = fields_to_date(fields.date).map_err(Error::Date)?;
        let time = fields_to_time(fields.time).map_err(Error::Date)?;
        Ok(Self::new(date, time))
    }
}

impl CalendarWeek {

    /// Reads a date in any form `LocalDate` accepts, and returns the week
    /// that contains it under the given convention.
    ///
    /// ```rust
    /// use calendar_week::{CalendarWeek, WeekConvention};
    ///
    /// let week = CalendarWeek::parse("2017-01-01", WeekConvention::iso_8601()).unwrap();
    /// assert_eq!((week.year(), week.week()), (2016, 52));
    /// ```
    pub fn parse(input: &str, convention: WeekConvention) -> Result<Self, Error<DateError>> {
        let date: LocalDate = input.parse()?;
        Ok(Self::from_date(date, convention))
    }
}


fn fields_to_date(fields: iso8601::Date) -> Result<LocalDate, DateError> {
    match fields {
        iso8601::Date::YMD { year, month, day } => {
            let month = Month::from_one(small(month))?;
            LocalDate::ymd(i64::from(year), month, small(day))
        }
        iso8601::Date::Week { year, ww, d } => {
            let weekday = Weekday::from_one(small(d))?;
            LocalDate::ywd(i64::from(year), i64::from(ww), weekday)
        }
        iso8601::Date::Ordinal { year, ddd } => {
            LocalDate::yd(i64::from(year), i64::from(ddd))
        }
    }
}

fn fields_to_time(fields: iso8601::Time) -> Result<LocalTime, DateError> {
    let millisecond = if fields.millisecond < 1000 { fields.millisecond as i16 } else { -1 };
    LocalTime::hms_ms(small(fields.hour), small(fields.minute), small(fields.second), millisecond)
}

/// Narrows a parsed field, mapping anything too big to a value every
/// range check rejects.
fn small(field: u32) -> i8 {
    if field <= i8::MAX as u32 { field as i8 } else { -1 }
}


/// Something that went wrong while reading a date.
#[derive(PartialEq, Debug, Clone, thiserror::Error)]
pub enum Error<E: ErrorTrait + 'static> {

    /// The text was well-formed, but named a date that doesn’t exist.
    #[error("parsing resulted in an invalid date: {0}")]
    Date(#[source] E),

    /// The text wasn’t ISO-8601.
    #[error("parse error: {0}")]
    Parse(String),
}
