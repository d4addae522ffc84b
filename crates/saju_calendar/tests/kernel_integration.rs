//! End-to-end tests: lunar month table → `saju_base::calculate`.

use std::path::PathBuf;

use saju_base::{CalculationError, Stem, calculate, four_pillars};
use saju_calendar::{CalendarError, LunarCalendarKernel, gregorian_to_jdn};

fn table_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/lunar_2023_2024.txt")
}

fn kernel() -> LunarCalendarKernel {
    LunarCalendarKernel::load(&table_path()).expect("fixture table loads")
}

#[test]
fn fixture_covers_two_lunar_years() {
    let k = kernel();
    assert_eq!(k.data().len(), 25);
    let (first, last) = k.solar_range();
    assert_eq!(first.to_string(), "2023-01-22");
    assert_eq!(last.to_string(), "2025-01-28");
}

#[test]
fn lunar_new_year_2024() {
    let k = kernel();
    let solar = k.resolve_solar(2024, 2, 10).unwrap();
    let lunar = k.to_lunar(&solar).unwrap();
    assert_eq!((lunar.year, lunar.month, lunar.leap, lunar.day), (2024, 1, false, 1));
    assert_eq!(lunar.jdn, gregorian_to_jdn(2024, 2, 10));
}

#[test]
fn new_year_pillars_from_solar_input() {
    let k = kernel();
    let chart = calculate(&k, 2024, 2, 10, 0, false).unwrap();
    assert_eq!(chart.to_string(), "甲辰 丙寅 甲辰 甲子");
}

#[test]
fn last_day_of_previous_lunar_year() {
    let k = kernel();
    let chart = calculate(&k, 2024, 2, 9, 13, false).unwrap();
    // lunar 2023-12-30: 癸卯 year, 乙丑 month, 癸卯 day, 己未 hour
    assert_eq!(chart.to_string(), "癸卯 乙丑 癸卯 己未");
}

#[test]
fn lunar_input_matches_solar_input() {
    let k = kernel();
    let from_lunar = calculate(&k, 2024, 1, 1, 7, true).unwrap();
    let from_solar = calculate(&k, 2024, 2, 10, 7, false).unwrap();
    assert_eq!(from_lunar, from_solar);
}

#[test]
fn leap_month_repeats_regular_month_pillar() {
    let k = kernel();
    let leap = k.resolve_lunar_leap(2023, 2, 1).unwrap();
    assert_eq!(leap.to_solar().to_string(), "2023-03-22");
    let leap_chart = four_pillars(&leap, 12).unwrap();
    let regular_chart = calculate(&k, 2023, 2, 1, 12, true).unwrap();
    assert_eq!(leap_chart.month, regular_chart.month);
    assert_eq!(leap_chart.month.to_string(), "乙卯");
    assert_ne!(leap_chart.day, regular_chart.day);
}

#[test]
fn day_thirty_of_short_leap_month_is_invalid() {
    let k = kernel();
    assert!(matches!(
        k.resolve_lunar_leap(2023, 2, 30),
        Err(CalendarError::InvalidLunarDate { .. })
    ));
    // The regular second month has 30 days.
    assert!(calculate(&k, 2023, 2, 30, 0, true).is_ok());
}

#[test]
fn day_thirty_of_short_month_is_calculation_error() {
    let k = kernel();
    // 2024 month 1 has 29 days
    assert_eq!(
        calculate(&k, 2024, 1, 30, 0, true),
        Err(CalculationError::InvalidDate)
    );
}

#[test]
fn nonexistent_solar_date_is_calculation_error() {
    let k = kernel();
    assert_eq!(
        calculate(&k, 2023, 2, 29, 0, false),
        Err(CalculationError::InvalidDate)
    );
}

#[test]
fn date_outside_table_is_calculation_error() {
    let k = kernel();
    assert_eq!(
        k.to_lunar(&k.resolve_solar(2022, 6, 1).unwrap()),
        Err(CalendarError::OutOfRange)
    );
    assert_eq!(
        k.resolve_lunar_month(2030, 1, false, 1),
        Err(CalendarError::OutOfRange)
    );
    assert_eq!(
        calculate(&k, 2022, 6, 1, 0, false),
        Err(CalculationError::InvalidDate)
    );
}

#[test]
fn every_day_in_table_yields_valid_pillars() {
    let k = kernel();
    let (first, last) = k.data().range();
    for jdn in first..=last {
        let lunar = k.lunar_for_jdn(jdn).unwrap();
        let chart = four_pillars(&lunar, 0).unwrap();
        for p in chart.pillars() {
            assert!(p.sexagenary_index().is_some(), "{p} at JDN {jdn}");
        }
        // Round trip through the lunar coordinates.
        let back = k
            .resolve_lunar_month(lunar.year, lunar.month, lunar.leap, lunar.day)
            .unwrap();
        assert_eq!(back.jdn, jdn);
    }
}

#[test]
fn day_stems_advance_daily() {
    let k = kernel();
    let a = calculate(&k, 2024, 3, 1, 0, false).unwrap();
    let b = calculate(&k, 2024, 3, 2, 0, false).unwrap();
    assert_eq!((a.day.stem_index() + 1) % 10, b.day.stem_index());
    assert_eq!((a.day.branch_index() + 1) % 12, b.day.branch_index());
}

#[test]
fn gap_day_midnight_hour_is_gapja() {
    let k = kernel();
    // 2024-02-10 is a 甲 day
    let chart = calculate(&k, 2024, 2, 10, 23, false).unwrap();
    assert_eq!(chart.day.stem, Stem::Gap);
    assert_eq!(chart.hour.to_string(), "甲子");
}

#[test]
fn missing_file_is_io_error() {
    let err = LunarCalendarKernel::load(&table_path().with_file_name("missing.txt")).unwrap_err();
    assert!(matches!(err, CalendarError::Io(_)));
}
