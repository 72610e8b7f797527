use chrono::NaiveTime;
use rbells::errors::AppError;
use rbells::models::clock::{ClockValue, MINUTES_PER_DAY};

#[test]
fn test_from_hm_normalizes_to_minutes() {
    assert_eq!(ClockValue::from_hm(9, 30).value(), 570);
    assert_eq!(ClockValue::from_hm(0, 0).value(), 0);
    assert_eq!(ClockValue::from_hm(23, 59).value(), 1439);
}

#[test]
fn test_from_wall_clock_drops_seconds() {
    let t = NaiveTime::from_hms_opt(14, 7, 59).unwrap();
    let c = ClockValue::from_wall_clock(&t);
    assert_eq!(c, ClockValue::from_hm(14, 7));
    assert_eq!(c.second(), 0);
}

#[test]
fn test_parse_accepts_short_and_long_hours() {
    assert_eq!(ClockValue::parse("9:00").unwrap(), ClockValue::from_hm(9, 0));
    assert_eq!(ClockValue::parse("09:05").unwrap(), ClockValue::from_hm(9, 5));
    assert_eq!(ClockValue::parse("8:30:45").unwrap(), ClockValue::from_hm(8, 30));
    assert_eq!(ClockValue::parse(" 8: 30").unwrap(), ClockValue::from_hm(8, 30));
}

#[test]
fn test_parse_rejects_missing_or_non_numeric_components() {
    for bad in ["9", "", "nine:00", "9:xx", ":30"] {
        match ClockValue::parse(bad) {
            Err(AppError::InvalidTime(s)) => assert_eq!(s, bad),
            other => panic!("{bad:?} parsed as {other:?}"),
        }
    }
}

#[test]
fn test_format_is_zero_padded() {
    let c = ClockValue::from_hm(7, 5);
    assert_eq!(c.format(false), "07:05");
    assert_eq!(c.format(true), "07:05:00");
    assert_eq!(c.to_string(), "07:05");
}

#[test]
fn test_format_then_parse_is_identity_over_a_day() {
    for v in 0..MINUTES_PER_DAY {
        let c = ClockValue::from_minutes(v);
        assert_eq!(ClockValue::parse(&c.format(false)).unwrap(), c);
    }
}

#[test]
fn test_add_does_not_clamp() {
    let c = ClockValue::from_hm(23, 50);
    assert_eq!(c.add(20).value(), 1450);
    assert_eq!(c.add(-1500).value(), -70);
    assert_eq!(ClockValue::from_hm(9, 0).add_hm(24, 0).value(), 540 + 1440);
}

#[test]
fn test_sub_keeps_negative_results() {
    let d = ClockValue::from_hm(8, 0).sub(ClockValue::from_hm(9, 0));
    assert_eq!(d.value(), -60);

    let d = ClockValue::from_hm(9, 45).sub(ClockValue::from_hm(9, 0));
    assert_eq!(d.value(), 45);
    assert_eq!(d.to_string(), "00:45");
}

#[test]
fn test_ordering_follows_minute_count() {
    assert!(ClockValue::from_hm(8, 59) < ClockValue::from_hm(9, 0));
    assert!(ClockValue::from_minutes(-1) < ClockValue::from_minutes(0));
    assert_eq!(ClockValue::from_hm(1, 0), ClockValue::from_minutes(60));
}

#[test]
fn test_parse_rejects_hours_that_overflow() {
    for bad in ["2000000000:00", "99999999:00", "35791394:59"] {
        match ClockValue::parse(bad) {
            Err(AppError::InvalidTime(s)) => assert_eq!(s, bad),
            other => panic!("{bad:?} parsed as {other:?}"),
        }
    }
}

#[test]
fn test_arithmetic_saturates_instead_of_wrapping() {
    let big = ClockValue::from_minutes(i32::MAX - 10);
    assert_eq!(big.add(60).value(), i32::MAX);
    assert_eq!(big.add_hm(1_000_000_000, 0).value(), i32::MAX);
    assert_eq!(ClockValue::from_minutes(i32::MIN).sub(big).value(), i32::MIN);
}

#[test]
fn test_format_duration_keeps_hours_past_a_day() {
    assert_eq!(ClockValue::from_minutes(32 * 60 + 30).format_duration(), "32:30");
    assert_eq!(ClockValue::from_minutes(5).format_duration(), "00:05");
    assert_eq!(ClockValue::from_minutes(-75).format_duration(), "-01:15");
}
