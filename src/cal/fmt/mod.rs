//! Rendering dates and weeks as text.

use std::fmt;

mod iso;
#[cfg(feature="format")] pub mod custom;


/// Values with a standard ISO-8601 text form.
///
/// ```rust
/// use calendar_week::{CalendarWeek, LocalDate, Month, WeekConvention, ISO};
///
/// let date = LocalDate::ymd(2017, Month::May, 24).unwrap();
/// assert_eq!(date.iso().to_string(), "2017-05-24");
///
/// let week = CalendarWeek::from_date(date, WeekConvention::iso_8601());
/// assert_eq!(week.iso().to_string(), "2017-W21");
/// ```
pub trait ISO: Sized {

    /// Wraps this value so that displaying it writes its ISO form.
    fn iso(&self) -> ISOString<'_, Self> {
        ISOString(self)
    }

    /// Writes the ISO form of this value to the formatter.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result;
}

/// A value borrowed for display in its ISO form.
#[derive(Debug)]
pub struct ISOString<'a, T: 'a>(&'a T);

impl<'a, T> fmt::Display for ISOString<'a, T>
where T: ISO
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ISO::fmt(self.0, f)
    }
}
