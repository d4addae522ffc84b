//! Sexagenary indices for lunar years, lunar months and days.
//!
//! - Year: 甲子 year is lunar year 4 CE, so stem = (year - 4) mod 10 and
//!   branch = (year - 4) mod 12.
//! - Month: month 1 is always 寅; its stem follows the year stem
//!   (甲/己 years start at 丙寅, 乙/庚 at 戊寅, ...).
//! - Day: continuous count from JDN; 2000-01-01 (JDN 2451545) is 戊午.

/// `(stem, branch)` of a lunar year.
pub fn year_indices(lunar_year: i32) -> (u8, u8) {
    let offset = lunar_year as i64 - 4;
    (offset.rem_euclid(10) as u8, offset.rem_euclid(12) as u8)
}

/// `(stem, branch)` of lunar month `month` (1-12) in a year with `year_stem`.
///
/// Leap months use the indices of the month number they repeat. Month
/// numbers outside 1-12 are clamped: 0 is read as 1 and 13 or more as 12.
pub fn month_indices(year_stem: u8, month: u32) -> (u8, u8) {
    let m = (month.clamp(1, 12) - 1) as u8;
    let first_stem = (year_stem % 5) * 2 + 2;
    ((first_stem + m) % 10, (m + 2) % 12)
}

/// `(stem, branch)` of the day with Julian Day Number `jdn`.
pub fn day_indices_for_jdn(jdn: i64) -> (u8, u8) {
    ((jdn + 9).rem_euclid(10) as u8, (jdn + 1).rem_euclid(12) as u8)
}
