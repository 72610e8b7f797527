use chrono::Weekday;
use rbells::config::{Config, DayConfig, Preset};
use rbells::core::day::Lookup;
use rbells::core::week::WeekSchedule;
use rbells::errors::AppError;
use rbells::models::clock::ClockValue;
use rbells::models::weekday::{WEEK, parse_weekday};
use std::collections::BTreeMap;

mod common;
use common::{at, standard_week};

fn hm(h: i32, m: i32) -> ClockValue {
    ClockValue::from_hm(h, m)
}

fn config_with(days: Vec<(&str, Option<&str>, Vec<i32>)>) -> Config {
    let schedule = days
        .into_iter()
        .map(|(name, start, breaks)| {
            (
                name.to_string(),
                DayConfig {
                    start: start.map(str::to_string),
                    breaks,
                },
            )
        })
        .collect::<BTreeMap<_, _>>();

    Config {
        lesson_minutes: 45,
        notification_ms: 5000,
        language: Default::default(),
        schedule,
    }
}

#[test]
fn test_standard_preset_has_monday_to_saturday() {
    let week = standard_week();

    assert_eq!(week.configured_days(), 6);
    assert!(week.day(Weekday::Sun).is_none());
    for day in &WEEK[..6] {
        let d = week.day(*day).unwrap();
        assert_eq!(d.lessons().count(), 7);
        assert_eq!(d.start(), Some(hm(9, 0)));
        assert_eq!(d.end(), Some(hm(15, 35)));
        assert!(d.is_contiguous());
    }
}

#[test]
fn test_days_are_built_independently() {
    let cfg = config_with(vec![
        ("monday", Some("8:30"), vec![10, 15]),
        ("friday", None, vec![]),
    ]);
    let week = WeekSchedule::from_config(&cfg).unwrap();

    let mon = week.day(Weekday::Mon).unwrap();
    assert_eq!(mon.start(), Some(hm(8, 30)));
    assert_eq!(mon.len(), 9);
    assert_eq!(mon.end(), Some(hm(8, 30).add(7 * 45 + 25)));

    let fri = week.day(Weekday::Fri).unwrap();
    assert_eq!(fri.start(), Some(hm(9, 0)));
    assert_eq!(fri.len(), 7);

    assert!(week.day(Weekday::Tue).is_none());
}

#[test]
fn test_unconfigured_day_behaves_as_empty() {
    let week = standard_week();

    assert_eq!(week.locate(Weekday::Sun, hm(10, 0)), Lookup::Empty);
    assert!(matches!(
        week.locate(Weekday::Mon, hm(10, 0)),
        Lookup::InPeriod { .. }
    ));
}

#[test]
fn test_today_uses_the_weekday_of_the_given_instant() {
    let week = standard_week();

    assert!(week.today(&at(18, 10, 0, 0)).is_none());
    assert_eq!(week.today(&at(19, 10, 0, 0)), week.day(Weekday::Mon));
}

#[test]
fn test_first_period_of_a_weekday() {
    let week = standard_week();

    assert_eq!(week.first_period(Weekday::Tue).map(|p| p.start), Some(hm(9, 0)));
    assert_eq!(week.first_period(Weekday::Sun), None);
}

#[test]
fn test_russian_weekday_names() {
    let cfg = config_with(vec![
        ("понедельник", Some("9:30"), vec![10]),
        ("Суббота", Some("8:30"), vec![]),
    ]);
    let week = WeekSchedule::from_config(&cfg).unwrap();

    assert_eq!(week.day(Weekday::Mon).unwrap().start(), Some(hm(9, 30)));
    assert_eq!(week.day(Weekday::Sat).unwrap().start(), Some(hm(8, 30)));
    assert_eq!(parse_weekday("воскресенье").unwrap(), Weekday::Sun);
    assert_eq!(parse_weekday("Wed").unwrap(), Weekday::Wed);
}

#[test]
fn test_bad_start_time_aborts_construction() {
    let cfg = config_with(vec![
        ("monday", Some("9:00"), vec![]),
        ("tuesday", Some("nine"), vec![]),
    ]);

    match WeekSchedule::from_config(&cfg) {
        Err(AppError::InvalidTime(s)) => assert_eq!(s, "nine"),
        other => panic!("expected InvalidTime, got {other:?}"),
    }
}

#[test]
fn test_unknown_weekday_aborts_construction() {
    let cfg = config_with(vec![("funday", None, vec![])]);

    assert!(matches!(
        WeekSchedule::from_config(&cfg),
        Err(AppError::UnknownWeekday(_))
    ));
}

#[test]
fn test_same_weekday_twice_is_rejected() {
    let cfg = config_with(vec![("monday", None, vec![]), ("понедельник", None, vec![])]);

    assert!(matches!(
        WeekSchedule::from_config(&cfg),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_legacy_preset_start_times_and_breaks() {
    let week = WeekSchedule::from_config(&Preset::Legacy.config()).unwrap();

    assert_eq!(week.configured_days(), 6);
    let starts: Vec<_> = WEEK[..6]
        .iter()
        .map(|d| week.day(*d).unwrap().start().unwrap())
        .collect();
    assert_eq!(
        starts,
        vec![hm(9, 30), hm(9, 0), hm(9, 0), hm(9, 30), hm(9, 0), hm(8, 30)]
    );

    // Monday breaks start one slot later in the break table: 10, 20, 20, 10, 10, 10
    let mon_breaks: Vec<i32> = week
        .day(Weekday::Mon)
        .unwrap()
        .iter()
        .filter(|p| p.is_break())
        .map(|p| p.duration)
        .collect();
    assert_eq!(mon_breaks, vec![10, 20, 20, 10, 10, 10]);
    assert_eq!(week.day(Weekday::Mon).unwrap().end(), Some(hm(16, 5)));

    let tue_breaks: Vec<i32> = week
        .day(Weekday::Tue)
        .unwrap()
        .iter()
        .filter(|p| p.is_break())
        .map(|p| p.duration)
        .collect();
    assert_eq!(tue_breaks, vec![10, 10, 20, 20, 10, 10]);
    assert_eq!(week.day(Weekday::Sat).unwrap().end(), Some(hm(15, 5)));
    assert!(week.day(Weekday::Sun).is_none());
}

#[test]
fn test_huge_start_hour_is_an_invalid_time() {
    let cfg = config_with(vec![("monday", Some("99999999:00"), vec![])]);

    match WeekSchedule::from_config(&cfg) {
        Err(AppError::InvalidTime(s)) => assert_eq!(s, "99999999:00"),
        other => panic!("expected InvalidTime, got {other:?}"),
    }
}

#[test]
fn test_huge_breaks_do_not_overflow() {
    let cfg = config_with(vec![("monday", Some("23:00"), vec![i32::MAX; 6])]);
    let week = WeekSchedule::from_config(&cfg).unwrap();

    let day = week.day(Weekday::Mon).unwrap();
    assert_eq!(day.end(), Some(ClockValue::from_minutes(i32::MAX)));
}
