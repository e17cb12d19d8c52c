use calendar_week::{CalendarWeek, WeekConvention, WeekRule, Weekday, Calendar, LocalDate, Month, DatePiece};


fn every_convention() -> Vec<WeekConvention> {
    let weekdays = [
        Weekday::Sunday, Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday,
        Weekday::Thursday, Weekday::Friday, Weekday::Saturday,
    ];
    let rules = [WeekRule::FirstDay, WeekRule::FirstFullWeek, WeekRule::FirstFourDayWeek];

    let mut conventions = Vec::new();
    for &weekday in weekdays.iter() {
        for &rule in rules.iter() {
            conventions.push(WeekConvention::new(weekday, rule, Calendar::Gregorian));
        }
    }
    conventions
}

/// Every day from late 1999 to early 2030, which covers every weekday
/// the 1st of January can fall on, in leap and common years.
fn every_day() -> impl Iterator<Item=LocalDate> {
    let start = LocalDate::ymd(1999, Month::December, 20).unwrap();
    (0 .. 11_000).map(move |offset| start.add_days(offset))
}


#[test]
fn every_date_is_in_its_own_week() {
    for convention in every_convention() {
        for date in every_day() {
            let week = CalendarWeek::from_date(date, convention);
            assert!(week.contains(date), "{:?} not in {:?}", date, week);
        }
    }
}

#[test]
fn weeks_survive_a_round_trip() {
    for convention in every_convention() {
        for year in 2000 .. 2030 {
            for number in 1 ..= convention.weeks_in_year(year) {
                let week = CalendarWeek::from_year_week(year, number, convention).unwrap();
                assert_eq!(week.year(), year);
                assert_eq!(week.week(), number);
                assert_eq!(CalendarWeek::from_date(week.first_day(), convention), week);
                assert_eq!(CalendarWeek::from_date(week.last_day(), convention), week);
            }
        }
    }
}

#[test]
fn weeks_are_seven_days_long() {
    for convention in every_convention() {
        for year in 2000 .. 2030 {
            for number in 1 ..= convention.weeks_in_year(year) {
                let week = CalendarWeek::from_year_week(year, number, convention).unwrap();
                assert_eq!(week.last_day(), week.first_day().add_days(6));
                assert_eq!(week.first_day().weekday(), convention.first_day_of_week());
                assert_eq!(week.days().count(), 7);
            }
        }
    }
}

#[test]
fn consecutive_weeks_are_consecutive() {
    for convention in every_convention() {
        let mut week = CalendarWeek::from_date(LocalDate::ymd(2000, Month::January, 1).unwrap(), convention);
        for _ in 0 .. 1500 {
            let next = week.add_weeks(1);
            assert_eq!(next.first_day(), week.first_day().add_days(7));
            assert!(week < next);
            assert_eq!(week.weeks_until(&next), 1);
            week = next;
        }
    }
}

#[test]
fn years_have_52_or_53_weeks() {
    for convention in every_convention() {
        for year in 1 .. 2100 {
            let weeks = convention.weeks_in_year(year);
            assert!(weeks == 52 || weeks == 53, "{} has {} weeks under {}", year, weeks, convention);
        }
    }
}

#[test]
fn adding_and_subtracting_weeks() {
    let convention = WeekConvention::iso_8601();
    let week = CalendarWeek::from_year_week(2020, 30, convention).unwrap();

    for n in -200 .. 200 {
        let moved = week.add_weeks(n);
        assert_eq!(week.weeks_until(&moved), n);
        assert_eq!(moved.add_weeks(-n), week);
    }
}

/// The days around both ends of the calendar, with some to spare.
fn edge_days() -> impl Iterator<Item=LocalDate> {
    let low = LocalDate::ymd(0, Month::December, 1).unwrap();
    let high = LocalDate::ymd(9999, Month::December, 1).unwrap();
    (0 .. 70).map(move |offset| low.add_days(offset))
        .chain((0 .. 70).map(move |offset| high.add_days(offset)))
}

#[test]
fn weeks_at_the_edges_can_be_rebuilt() {
    for convention in every_convention() {
        for date in edge_days() {
            let from_date = CalendarWeek::from_date(date, convention);
            for week in [from_date, from_date.following(), from_date.preceding(), from_date.add_weeks(-3), from_date.add_weeks(3)] {
                assert_eq!(CalendarWeek::from_year_week(week.year(), week.week(), convention), Ok(week), "{:?} from {:?}", week, date);
            }
        }
    }
}
