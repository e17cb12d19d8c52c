#![cfg(feature = "format")]

use calendar_week::{CalendarWeek, WeekConvention, ISO};
use calendar_week::format::{WeekFormat, FormatError};


fn iso_week(year: i64, week: i64) -> CalendarWeek {
    CalendarWeek::from_year_week(year, week, WeekConvention::iso_8601()).unwrap()
}

fn render(pattern: &str, week: &CalendarWeek) -> String {
    WeekFormat::parse(pattern).unwrap().format(week)
}


#[test]
fn iso_form() {
    assert_eq!(iso_week(2017, 21).iso().to_string(), "2017-W21");
    assert_eq!(iso_week(2017, 21).to_string(), "2017-W21");
}

#[test]
fn iso_form_pads_week() {
    assert_eq!(iso_week(2017, 1).to_string(), "2017-W01");
}

#[test]
fn custom_matches_iso() {
    let week = iso_week(2015, 53);
    assert_eq!(render("{:Y}-W{>02:W}", &week), week.to_string());
}

#[test]
fn week_spanning_two_years() {
    let week = iso_week(2016, 52);
    assert_eq!(render("{:D}/{:M} to {:d}/{:m}", &week), "26/12 to 1/1");
}

#[test]
fn right_aligned_day() {
    let week = iso_week(2017, 21);
    assert_eq!(render("[{>4:D}]", &week), "[  22]");
}

#[test]
fn centred_week() {
    let week = iso_week(2017, 21);
    assert_eq!(render("[{^6:W}]", &week), "[  21  ]");
}

#[test]
fn bad_pattern() {
    assert_eq!(WeekFormat::parse("{:Q}"), Err(FormatError::InvalidChar { c: 'Q', colon: true, pos: 2 }));
}

// Names of months and weekdays aren't available, only numbers.
#[test]
fn no_names() {
    assert_eq!(WeekFormat::parse("{:e}"), Err(FormatError::InvalidChar { c: 'e', colon: true, pos: 2 }));
}

#[test]
fn error_message() {
    let error = WeekFormat::parse("week {").unwrap_err();
    assert_eq!(error.to_string(), "unclosed brace at position 5");
}
