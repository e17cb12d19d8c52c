#![cfg(feature = "parse")]

use calendar_week::{CalendarWeek, WeekConvention, LocalDate, Month, DateError};
use calendar_week::parse::Error;


#[test]
fn week_containing_a_date() {
    let week = CalendarWeek::parse("2017-05-24", WeekConvention::iso_8601()).unwrap();
    assert_eq!(week, CalendarWeek::from_year_week(2017, 21, WeekConvention::iso_8601()).unwrap());
}

#[test]
fn week_containing_an_ordinal_date() {
    let week = CalendarWeek::parse("2017-001", WeekConvention::iso_8601()).unwrap();
    assert_eq!((week.year(), week.week()), (2016, 52));
}

#[test]
fn week_date_under_another_convention() {
    // ISO week 1 of 2017 starts on Monday the 2nd of January, which is
    // in the Sunday-started week 1 of 2017.
    let week = CalendarWeek::parse("2017-W01-1", WeekConvention::north_american()).unwrap();
    assert_eq!((week.year(), week.week()), (2017, 1));
}

#[test]
fn impossible_date() {
    let result = CalendarWeek::parse("2017-02-30", WeekConvention::iso_8601());
    assert_eq!(result, Err(Error::Date(DateError::OutOfRange)));
}

#[test]
fn impossible_iso_week() {
    assert!("2017-W53-1".parse::<LocalDate>().is_err());
}

#[test]
fn not_a_date() {
    match CalendarWeek::parse("last week", WeekConvention::iso_8601()) {
        Err(Error::Parse(_)) => {},
        other                => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn date() {
    let date: LocalDate = "1998-12-31".parse().unwrap();
    assert_eq!(date, LocalDate::ymd(1998, Month::December, 31).unwrap());
}
