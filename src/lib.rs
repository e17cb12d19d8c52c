#![crate_name = "calendar_week"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Calendar weeks: “week *W* of year *Y*” under a configurable
//! week-numbering convention.
//!
//! # Examples
//!
//! ```
//! use calendar_week::{CalendarWeek, LocalDate, Month, WeekConvention};
//!
//! let iso = WeekConvention::iso_8601();
//!
//! let week = CalendarWeek::from_year_week(2017, 21, iso).unwrap();
//! assert_eq!(week.first_day(), LocalDate::ymd(2017, Month::May, 22).unwrap());
//! assert_eq!(week.last_day(),  LocalDate::ymd(2017, Month::May, 28).unwrap());
//!
//! let new_year = LocalDate::ymd(2017, Month::January, 1).unwrap();
//! let week = CalendarWeek::from_date(new_year, iso);
//! assert_eq!((week.year(), week.week()), (2016, 52));
//! ```

mod cal;
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Year};
pub use crate::cal::datetime::Error as DateError;
pub use crate::cal::convention::{WeekConvention, WeekRule, Calendar, ConventionBuilder, ConventionSource, HostLocale};
pub use crate::cal::week::{CalendarWeek, WeekDays, Error};
pub use crate::cal::fmt::ISO;
pub use crate::cal::convenience;

#[cfg(feature="format")] pub use crate::cal::fmt::custom as format;
#[cfg(feature="parse")] pub use crate::cal::parse;

mod duration;
pub use crate::duration::Duration;

mod instant;
pub use crate::instant::Instant;

mod system;
mod util;
