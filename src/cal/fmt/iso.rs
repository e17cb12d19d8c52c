use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime};
use crate::cal::fmt::ISO;
use crate::cal::week::CalendarWeek;
use crate::util::RangeExt;


/// Years outside 0 to 9999 get an explicit sign and as many digits as
/// they need.
fn write_year(f: &mut fmt::Formatter, year: i64) -> fmt::Result {
    if year.is_within(0 .. 10000) {
        write!(f, "{:04}", year)
    }
    else {
        write!(f, "{:+05}", year)
    }
}

impl ISO for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_year(f, self.year())?;
        write!(f, "-{:02}-{:02}", self.month() as usize, self.day())
    }
}

impl ISO for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}.{:03}", self.hour(), self.minute(), self.second(), self.millisecond())
    }
}

impl ISO for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.date().iso(), self.time().iso())
    }
}

impl ISO for CalendarWeek {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_year(f, self.year())?;
        write!(f, "-W{:02}", self.week())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::convention::WeekConvention;
    use crate::cal::datetime::Month;

    #[test]
    fn recently() {
        let date = LocalDate::ymd(1600, Month::February, 28).unwrap();
        assert_eq!(date.iso().to_string(), "1600-02-28");
    }

    #[test]
    fn just_then() {
        let date = LocalDate::ymd(-753, Month::December, 1).unwrap();
        assert_eq!(date.iso().to_string(), "-0753-12-01");
    }

    #[test]
    fn far_far_future() {
        let date = LocalDate::ymd(10601, Month::January, 31).unwrap();
        assert_eq!(date.iso().to_string(), "+10601-01-31");
    }

    #[test]
    fn midday() {
        let time = LocalTime::hms_ms(12, 0, 0, 5).unwrap();
        assert_eq!(time.iso().to_string(), "12:00:00.005");
    }

    #[test]
    fn week_of_the_first_year() {
        let week = CalendarWeek::from_year_week(1, 5, WeekConvention::iso_8601()).unwrap();
        assert_eq!(week.iso().to_string(), "0001-W05");
    }
}
