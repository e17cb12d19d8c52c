//! Week-numbering conventions: which weekday starts a week, and which
//! week of a year counts as its first.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::cal::DatePiece;
use crate::cal::datetime::{LocalDate, Weekday};
use crate::cal::week::Error;
use crate::system::{sys_env_var, LOCALE_VARIABLES};
use crate::util::RangeExt;


/// How week 1 of a year is anchored.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum WeekRule {

    /// Week 1 is the week that contains the 1st of January, however few
    /// of its days fall in the new year.
    FirstDay,

    /// Week 1 is the first week that lies entirely in the new year.
    FirstFullWeek,

    /// Week 1 is the first week with at least four days in the new year.
    /// With Monday as the first day of the week, this is ISO-8601.
    FirstFourDayWeek,
}

impl WeekRule {

    /// The number of days a week needs in the new year before it can be
    /// that year’s week 1.
    pub fn min_days(self) -> i64 {
        match self {
            WeekRule::FirstDay          => 1,
            WeekRule::FirstFourDayWeek  => 4,
            WeekRule::FirstFullWeek     => 7,
        }
    }

    fn name(self) -> &'static str {
        match self {
            WeekRule::FirstDay          => "first-day",
            WeekRule::FirstFourDayWeek  => "first-four-day-week",
            WeekRule::FirstFullWeek     => "first-full-week",
        }
    }
}


/// The day-counting calendar underneath a convention.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Calendar {

    /// The proleptic Gregorian calendar, limited to the years 1 to 9999.
    Gregorian,
}

impl Calendar {

    /// The earliest year this calendar can represent.
    pub fn min_year(self) -> i64 {
        match self {
            Calendar::Gregorian => 1,
        }
    }

    /// The latest year this calendar can represent.
    pub fn max_year(self) -> i64 {
        match self {
            Calendar::Gregorian => 9999,
        }
    }

    /// Returns whether the given year lies within this calendar’s range.
    pub fn contains_year(self, year: i64) -> bool {
        year.is_within(self.min_year() .. self.max_year() + 1)
    }

    fn name(self) -> &'static str {
        match self {
            Calendar::Gregorian => "gregorian",
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Calendar::Gregorian
    }
}


/// A **week convention** is the combination of the weekday a week starts
/// on, the rule for anchoring week 1, and the calendar these apply to.
///
/// Conventions are plain values. Every `CalendarWeek` carries its own, so
/// two weeks can only be equal if they were numbered the same way.
///
/// ### Examples
///
/// ```rust
/// use calendar_week::{WeekConvention, LocalDate, Month};
///
/// let iso = WeekConvention::iso_8601();
/// let date = LocalDate::ymd(2017, Month::January, 1).unwrap();
/// assert_eq!(iso.year_week(date), (2016, 52));
///
/// let us = WeekConvention::north_american();
/// assert_eq!(us.year_week(date), (2017, 1));
/// ```
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct WeekConvention {
    first_day_of_week: Weekday,
    week_rule: WeekRule,
    calendar: Calendar,
}

impl WeekConvention {

    /// Creates a convention from all three of its parts.
    pub fn new(first_day_of_week: Weekday, week_rule: WeekRule, calendar: Calendar) -> Self {
        Self { first_day_of_week, week_rule, calendar }
    }

    /// Weeks start on Monday, and week 1 is the first week with four days
    /// in the new year.
    pub fn iso_8601() -> Self {
        Self::new(Weekday::Monday, WeekRule::FirstFourDayWeek, Calendar::Gregorian)
    }

    /// Weeks start on Sunday, and week 1 is the week with the 1st of
    /// January in it.
    pub fn north_american() -> Self {
        Self::new(Weekday::Sunday, WeekRule::FirstDay, Calendar::Gregorian)
    }

    /// The host environment’s convention, read afresh on every call.
    ///
    /// See `HostLocale` for where it comes from.
    pub fn current() -> Self {
        HostLocale.week_convention()
    }

    /// Starts building a convention one part at a time.
    pub fn builder() -> ConventionBuilder {
        ConventionBuilder::default()
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn week_rule(&self) -> WeekRule {
        self.week_rule
    }

    pub fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Returns the first day of week 1 of the given year. Depending on the
    /// rule, this can be up to six days before the 1st of January.
    ///
    /// ```rust
    /// use calendar_week::{WeekConvention, LocalDate, Month};
    ///
    /// let iso = WeekConvention::iso_8601();
    /// assert_eq!(iso.week_one_start(2017), LocalDate::ymd(2017, Month::January, 2).unwrap());
    /// assert_eq!(iso.week_one_start(2015), LocalDate::ymd(2014, Month::December, 29).unwrap());
    /// ```
    pub fn week_one_start(&self, year: i64) -> LocalDate {
        let first = self.first_day_of_week.first_in_year(year);

        // The days of the year before `first` form a partial week, which
        // is week 1 only if it is long enough.
        let lead = i64::from(first.yearday()) - 1;
        if lead != 0 && lead >= self.week_rule.min_days() {
            first.add_days(-7)
        }
        else {
            first
        }
    }

    /// Returns the week-numbering year that owns the week containing the
    /// given date, paired with that week’s number.
    ///
    /// The week year is the date’s own year except for a few days around
    /// the turn of the year, which may belong to the last week of the
    /// previous year or to the first week of the next.
    pub fn year_week(&self, date: LocalDate) -> (i64, i64) {
        let year = date.year();
        let start = self.week_one_start(year);

        let (week_year, start) = if date < start {
            (year - 1, self.week_one_start(year - 1))
        }
        else {
            let next = self.week_one_start(year + 1);
            if date >= next { (year + 1, next) } else { (year, start) }
        };

        (week_year, (date.days_since_1970() - start.days_since_1970()) / 7 + 1)
    }

    /// Returns the number of the week containing the given date.
    pub fn week_of_year(&self, date: LocalDate) -> i64 {
        self.year_week(date).1
    }

    /// Returns the number of weeks the given year owns, which is the
    /// number of its last week: 52 or 53.
    pub fn weeks_in_year(&self, year: i64) -> i64 {
        let days = self.week_one_start(year + 1).days_since_1970()
                 - self.week_one_start(year).days_since_1970();
        days / 7
    }

    /// A small number that is different for every convention.
    pub(crate) fn code(&self) -> u64 {
        (self.first_day_of_week as u64)
            | (self.week_rule as u64) << 3
            | (self.calendar as u64) << 5
    }
}

impl fmt::Display for WeekConvention {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", weekday_name(self.first_day_of_week), self.week_rule.name(), self.calendar.name())
    }
}

/// Reads a convention written as `weekday:rule`, optionally followed by
/// `:calendar`, such as `monday:first-four-day-week` or
/// `sun:first-day:gregorian`. `iso` and `iso-8601` are accepted as
/// shorthands. Case is ignored.
///
/// ```rust
/// use calendar_week::{WeekConvention, Error};
///
/// let convention: WeekConvention = "Sunday:first-day".parse().unwrap();
/// assert_eq!(convention, WeekConvention::north_american());
///
/// let result = "sunday:second-day".parse::<WeekConvention>();
/// assert_eq!(result, Err(Error::InvalidConvention("week rule")));
/// ```
impl FromStr for WeekConvention {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_ascii_lowercase();
        if input == "iso" || input == "iso-8601" {
            return Ok(Self::iso_8601());
        }

        let mut parts = input.split(':');

        let first_day_of_week = parts.next().and_then(parse_weekday)
                                     .ok_or(Error::InvalidConvention("first day of week"))?;

        let week_rule = parts.next().and_then(parse_week_rule)
                             .ok_or(Error::InvalidConvention("week rule"))?;

        let calendar = match parts.next() {
            Some(name) => parse_calendar(name).ok_or(Error::InvalidConvention("calendar"))?,
            None       => Calendar::default(),
        };

        if parts.next().is_some() {
            return Err(Error::InvalidConvention("calendar"));
        }

        Ok(Self::new(first_day_of_week, week_rule, calendar))
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday    => "sunday",     Weekday::Monday    => "monday",
        Weekday::Tuesday   => "tuesday",    Weekday::Wednesday => "wednesday",
        Weekday::Thursday  => "thursday",   Weekday::Friday    => "friday",
        Weekday::Saturday  => "saturday",
    }
}

fn parse_weekday(input: &str) -> Option<Weekday> {
    Some(match input {
        "sunday"    | "sun"  => Weekday::Sunday,
        "monday"    | "mon"  => Weekday::Monday,
        "tuesday"   | "tue"  => Weekday::Tuesday,
        "wednesday" | "wed"  => Weekday::Wednesday,
        "thursday"  | "thu"  => Weekday::Thursday,
        "friday"    | "fri"  => Weekday::Friday,
        "saturday"  | "sat"  => Weekday::Saturday,
        _                    => return None,
    })
}

fn parse_week_rule(input: &str) -> Option<WeekRule> {
    [WeekRule::FirstDay, WeekRule::FirstFullWeek, WeekRule::FirstFourDayWeek]
        .iter()
        .copied()
        .find(|rule| rule.name() == input)
}

fn parse_calendar(input: &str) -> Option<Calendar> {
    if input == Calendar::Gregorian.name() { Some(Calendar::Gregorian) } else { None }
}


/// Builds a `WeekConvention` from parts that may not all be known yet.
///
/// ```rust
/// use calendar_week::{WeekConvention, WeekRule, Weekday, Calendar, Error};
///
/// let convention = WeekConvention::builder()
///     .first_day_of_week(Weekday::Monday)
///     .week_rule(WeekRule::FirstFourDayWeek)
///     .calendar(Calendar::Gregorian)
///     .build();
/// assert_eq!(convention, Ok(WeekConvention::iso_8601()));
///
/// let missing = WeekConvention::builder().first_day_of_week(Weekday::Monday).build();
/// assert_eq!(missing, Err(Error::InvalidConvention("week rule")));
/// ```
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub struct ConventionBuilder {
    first_day_of_week: Option<Weekday>,
    week_rule: Option<WeekRule>,
    calendar: Option<Calendar>,
}

impl ConventionBuilder {
    pub fn first_day_of_week(mut self, weekday: Weekday) -> Self {
        self.first_day_of_week = Some(weekday);
        self
    }

    pub fn week_rule(mut self, rule: WeekRule) -> Self {
        self.week_rule = Some(rule);
        self
    }

    pub fn calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Returns the finished convention, or an error naming the first part
    /// that was never set.
    pub fn build(self) -> Result<WeekConvention, Error> {
        let first_day_of_week = self.first_day_of_week.ok_or(Error::InvalidConvention("first day of week"))?;
        let week_rule = self.week_rule.ok_or(Error::InvalidConvention("week rule"))?;
        let calendar = self.calendar.ok_or(Error::InvalidConvention("calendar"))?;
        Ok(WeekConvention::new(first_day_of_week, week_rule, calendar))
    }
}


/// Anything that can supply a default week convention.
pub trait ConventionSource {
    fn week_convention(&self) -> WeekConvention;
}

impl ConventionSource for WeekConvention {
    fn week_convention(&self) -> WeekConvention {
        *self
    }
}


/// The environment variable that overrides the locale-derived convention.
const OVERRIDE_VARIABLE: &str = "WEEK_CONVENTION";

/// The host’s week convention, taken from the environment each time it
/// is asked for:
///
/// 1. `WEEK_CONVENTION`, in the form `WeekConvention::from_str` reads;
/// 2. the territory of the first locale named by `LC_ALL`, `LC_TIME`, or
///    `LANG`;
/// 3. ISO-8601, if none of these says anything useful.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct HostLocale;

impl HostLocale {

    /// Works out a convention using the given function to look up
    /// environment variables.
    ///
    /// ```rust
    /// use calendar_week::{HostLocale, WeekConvention};
    ///
    /// let convention = HostLocale::resolve(|key| match key {
    ///     "LANG" => Some("en_US.UTF-8".to_string()),
    ///     _      => None,
    /// });
    /// assert_eq!(convention, WeekConvention::north_american());
    /// ```
    pub fn resolve<F>(lookup: F) -> WeekConvention
    where F: Fn(&str) -> Option<String>
    {
        if let Some(value) = lookup(OVERRIDE_VARIABLE) {
            match value.parse() {
                Ok(convention) => {
                    debug!("Week convention {} from {}", convention, OVERRIDE_VARIABLE);
                    return convention;
                }
                Err(e) => {
                    warn!("Ignoring {}={:?}: {}", OVERRIDE_VARIABLE, value, e);
                }
            }
        }

        for &key in LOCALE_VARIABLES {
            if let Some(name) = lookup(key) {
                let convention = Self::for_locale_name(&name);
                debug!("Week convention {} from {}={:?}", convention, key, name);
                return convention;
            }
        }

        debug!("No locale set, using ISO-8601 weeks");
        WeekConvention::iso_8601()
    }

    /// Returns the convention used in the territory of a POSIX locale
    /// name such as `de_DE.UTF-8` or `en-US`. Names without a known
    /// territory, such as `C`, get ISO-8601.
    pub fn for_locale_name(name: &str) -> WeekConvention {
        let name = name.split(|c: char| c == '.' || c == '@').next().unwrap_or("");
        let territory = match name.split(|c: char| c == '_' || c == '-').nth(1) {
            Some(t) => t.to_ascii_uppercase(),
            None    => return WeekConvention::iso_8601(),
        };

        let territory = territory.as_str();
        if SUNDAY_FIRST_DAY.contains(&territory) {
            WeekConvention::new(Weekday::Sunday, WeekRule::FirstDay, Calendar::Gregorian)
        }
        else if SATURDAY_FIRST_DAY.contains(&territory) {
            WeekConvention::new(Weekday::Saturday, WeekRule::FirstDay, Calendar::Gregorian)
        }
        else if MONDAY_FIRST_DAY.contains(&territory) {
            WeekConvention::new(Weekday::Monday, WeekRule::FirstDay, Calendar::Gregorian)
        }
        else {
            WeekConvention::iso_8601()
        }
    }
}

impl ConventionSource for HostLocale {
    fn week_convention(&self) -> WeekConvention {
        Self::resolve(sys_env_var)
    }
}

// Territories that don’t use ISO-8601 weeks. Everywhere else, including
// most of Europe, gets Monday and the four-day rule.

static SUNDAY_FIRST_DAY: &[&str] = &[
    "US", "CA", "MX", "BR", "JP", "KR", "TW", "HK", "MO", "PH",
    "IL", "IN", "ZA", "SA", "PE", "CO", "VE", "GT", "HN", "PA",
];

static SATURDAY_FIRST_DAY: &[&str] = &[
    "AE", "EG", "IQ", "JO", "KW", "LY", "OM", "QA", "SY", "SD",
];

static MONDAY_FIRST_DAY: &[&str] = &[
    "AU", "NZ", "CN", "UA", "TR", "KZ", "VN", "AR", "CL", "SG",
];


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::datetime::Month;

    fn date(year: i64, month: Month, day: i8) -> LocalDate {
        LocalDate::ymd(year, month, day).unwrap()
    }

    mod week_one {
        use super::*;

        #[test]
        fn iso_short_lead_week() {
            // 1st January 2017 was a Sunday: one day is not enough.
            assert_eq!(WeekConvention::iso_8601().week_one_start(2017), date(2017, Month::January, 2));
        }

        #[test]
        fn iso_long_lead_week() {
            // 1st January 2015 was a Thursday: four days are enough.
            assert_eq!(WeekConvention::iso_8601().week_one_start(2015), date(2014, Month::December, 29));
        }

        #[test]
        fn first_day_always_reaches_back() {
            let us = WeekConvention::north_american();
            assert_eq!(us.week_one_start(2016), date(2015, Month::December, 27));
            assert_eq!(us.week_one_start(2017), date(2017, Month::January, 1));
        }

        #[test]
        fn full_week_never_reaches_back() {
            let convention = WeekConvention::new(Weekday::Monday, WeekRule::FirstFullWeek, Calendar::Gregorian);
            assert_eq!(convention.week_one_start(2015), date(2015, Month::January, 5));
            assert_eq!(convention.week_one_start(2018), date(2018, Month::January, 1));
        }
    }

    mod year_week {
        use super::*;

        #[test]
        fn end_of_year_into_next() {
            let iso = WeekConvention::iso_8601();
            assert_eq!(iso.year_week(date(2014, Month::December, 31)), (2015, 1));
        }

        #[test]
        fn start_of_year_into_previous() {
            let iso = WeekConvention::iso_8601();
            assert_eq!(iso.year_week(date(2016, Month::January, 3)), (2015, 53));
            assert_eq!(iso.year_week(date(2016, Month::January, 4)), (2016, 1));
        }

        #[test]
        fn full_week_leaves_stragglers_behind() {
            let convention = WeekConvention::new(Weekday::Monday, WeekRule::FirstFullWeek, Calendar::Gregorian);
            assert_eq!(convention.year_week(date(2015, Month::January, 4)), (2014, 52));
        }

        #[test]
        fn middle_of_year() {
            let iso = WeekConvention::iso_8601();
            assert_eq!(iso.week_of_year(date(2017, Month::May, 24)), 21);
        }
    }

    mod weeks_in_year {
        use super::*;

        #[test]
        fn long_and_short_iso_years() {
            let iso = WeekConvention::iso_8601();
            assert_eq!(iso.weeks_in_year(2015), 53);
            assert_eq!(iso.weeks_in_year(2016), 52);
            assert_eq!(iso.weeks_in_year(2017), 52);
            assert_eq!(iso.weeks_in_year(1998), 53);
            assert_eq!(iso.weeks_in_year(1974), 52);
        }

        #[test]
        fn matches_the_week_of_the_last_owned_day() {
            let conventions = [
                WeekConvention::iso_8601(),
                WeekConvention::north_american(),
                WeekConvention::new(Weekday::Saturday, WeekRule::FirstFullWeek, Calendar::Gregorian),
            ];

            for convention in conventions.iter() {
                for year in 1990 .. 2040 {
                    let last = convention.week_one_start(year + 1).add_days(-1);
                    assert_eq!(convention.year_week(last), (year, convention.weeks_in_year(year)));
                }
            }
        }
    }

    mod parsing {
        use super::*;

        #[test]
        fn iso_shorthand() {
            assert_eq!("ISO-8601".parse(), Ok(WeekConvention::iso_8601()));
        }

        #[test]
        fn abbreviated_weekday() {
            let convention: WeekConvention = "sat:first-full-week".parse().unwrap();
            assert_eq!(convention.first_day_of_week(), Weekday::Saturday);
            assert_eq!(convention.week_rule(), WeekRule::FirstFullWeek);
        }

        #[test]
        fn display_round_trip() {
            let convention = WeekConvention::new(Weekday::Wednesday, WeekRule::FirstFourDayWeek, Calendar::Gregorian);
            assert_eq!(convention.to_string().parse(), Ok(convention));
        }

        #[test]
        fn bad_weekday() {
            assert_eq!("moonday:first-day".parse::<WeekConvention>(), Err(Error::InvalidConvention("first day of week")));
        }

        #[test]
        fn missing_rule() {
            assert_eq!("monday".parse::<WeekConvention>(), Err(Error::InvalidConvention("week rule")));
        }

        #[test]
        fn unknown_calendar() {
            assert_eq!("monday:first-day:julian".parse::<WeekConvention>(), Err(Error::InvalidConvention("calendar")));
        }
    }

    mod builder {
        use super::*;

        #[test]
        fn missing_calendar() {
            let result = WeekConvention::builder()
                .first_day_of_week(Weekday::Sunday)
                .week_rule(WeekRule::FirstDay)
                .build();
            assert_eq!(result, Err(Error::InvalidConvention("calendar")));
        }

        #[test]
        fn nothing_set() {
            assert_eq!(ConventionBuilder::default().build(), Err(Error::InvalidConvention("first day of week")));
        }
    }

    mod host {
        use super::*;

        fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
            move |key: &str| vars.iter().find(|&&(k, _)| k == key).map(|&(_, v)| v.to_string())
        }

        #[test]
        fn german() {
            assert_eq!(HostLocale::for_locale_name("de_DE.UTF-8"), WeekConvention::iso_8601());
        }

        #[test]
        fn american() {
            assert_eq!(HostLocale::for_locale_name("en_US"), WeekConvention::north_american());
        }

        #[test]
        fn egyptian() {
            let convention = HostLocale::for_locale_name("ar-EG");
            assert_eq!(convention.first_day_of_week(), Weekday::Saturday);
        }

        #[test]
        fn posix() {
            assert_eq!(HostLocale::for_locale_name("C"), WeekConvention::iso_8601());
        }

        #[test]
        fn lc_all_beats_lang() {
            let vars = [("LC_ALL", "en_US.UTF-8"), ("LANG", "de_DE.UTF-8")];
            assert_eq!(HostLocale::resolve(lookup(&vars)), WeekConvention::north_american());
        }

        #[test]
        fn override_beats_locale() {
            let vars = [("WEEK_CONVENTION", "iso"), ("LANG", "en_US.UTF-8")];
            assert_eq!(HostLocale::resolve(lookup(&vars)), WeekConvention::iso_8601());
        }

        #[test]
        fn broken_override_is_ignored() {
            let vars = [("WEEK_CONVENTION", "whenever"), ("LANG", "en_CA")];
            assert_eq!(HostLocale::resolve(lookup(&vars)), WeekConvention::north_american());
        }

        #[test]
        fn nothing_set() {
            assert_eq!(HostLocale::resolve(|_| None), WeekConvention::iso_8601());
        }

        #[test]
        fn fixed_source() {
            let us = WeekConvention::north_american();
            assert_eq!(us.week_convention(), us);
        }
    }
}
