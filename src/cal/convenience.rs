//! Adds convenience functions to some structs.
//!
//! # Example
//! ```
//! use calendar_week::{CalendarWeek, LocalDate};
//! use calendar_week::convenience::{Today, ThisWeek};
//!
//! let today = LocalDate::today();
//! assert!(CalendarWeek::this_week().contains(today));
//! ```

use crate::cal::convention::{ConventionSource, HostLocale};
use crate::cal::datetime::{LocalDate, LocalDateTime};
use crate::cal::week::CalendarWeek;

/// Adds `LocalDate::today() -> LocalDate`
pub trait Today {
    fn today() -> LocalDate;
}

impl Today for LocalDate {
    fn today() -> LocalDate {
        LocalDateTime::now().date()
    }
}

/// Adds `CalendarWeek::this_week()`, the week containing today under the
/// host’s convention, and `CalendarWeek::this_week_in` for any other
/// source of conventions.
pub trait ThisWeek {
    fn this_week() -> CalendarWeek;
    fn this_week_in<S: ConventionSource>(source: &S) -> CalendarWeek;
}

impl ThisWeek for CalendarWeek {
    fn this_week() -> CalendarWeek {
        Self::this_week_in(&HostLocale)
    }

    fn this_week_in<S: ConventionSource>(source: &S) -> CalendarWeek {
        CalendarWeek::from_date(LocalDate::today(), source.week_convention())
    }
}
