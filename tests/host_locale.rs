use calendar_week::{HostLocale, WeekConvention, WeekRule, Weekday, Calendar, ConventionSource};


fn resolve(vars: &[(&str, &str)]) -> WeekConvention {
    HostLocale::resolve(|key| {
        vars.iter().find(|&&(k, _)| k == key).map(|&(_, v)| v.to_string())
    })
}


#[test]
fn nothing_set() {
    assert_eq!(resolve(&[]), WeekConvention::iso_8601());
}

#[test]
fn lang_only() {
    assert_eq!(resolve(&[ ("LANG", "en_US.UTF-8") ]), WeekConvention::north_american());
}

#[test]
fn lc_time_beats_lang() {
    let convention = resolve(&[ ("LC_TIME", "en_AU.UTF-8"), ("LANG", "en_US.UTF-8") ]);
    assert_eq!(convention, WeekConvention::new(Weekday::Monday, WeekRule::FirstDay, Calendar::Gregorian));
}

#[test]
fn lc_all_beats_everything() {
    let convention = resolve(&[ ("LC_ALL", "fr_FR.UTF-8"), ("LC_TIME", "ja_JP.UTF-8"), ("LANG", "en_US") ]);
    assert_eq!(convention, WeekConvention::iso_8601());
}

#[test]
fn explicit_override() {
    let convention = resolve(&[ ("WEEK_CONVENTION", "saturday:first-full-week"), ("LANG", "en_US") ]);
    assert_eq!(convention, WeekConvention::new(Weekday::Saturday, WeekRule::FirstFullWeek, Calendar::Gregorian));
}

#[test]
fn unreadable_override() {
    let convention = resolve(&[ ("WEEK_CONVENTION", "every other tuesday"), ("LANG", "ar_EG.UTF-8") ]);
    assert_eq!(convention.first_day_of_week(), Weekday::Saturday);
}

#[test]
fn locale_with_modifier() {
    assert_eq!(HostLocale::for_locale_name("de_AT@euro"), WeekConvention::iso_8601());
}

#[test]
fn unknown_territory() {
    assert_eq!(HostLocale::for_locale_name("xx_ZZ"), WeekConvention::iso_8601());
}

#[test]
fn language_without_territory() {
    assert_eq!(HostLocale::for_locale_name("en"), WeekConvention::iso_8601());
}

#[test]
fn conventions_are_their_own_source() {
    let us = WeekConvention::north_american();
    assert_eq!(us.week_convention(), us);
}
