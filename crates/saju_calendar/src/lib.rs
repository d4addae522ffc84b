//! Table-driven calendar provider for `saju_base`.
//!
//! This crate provides:
//! - Proleptic Gregorian ↔ Julian Day Number conversion
//! - A lunar month table (one line per month) loaded from a text file
//! - Solar → lunar resolution by table lookup
//! - Sexagenary year/month/day indices for a resolved lunar date
//!
//! No astronomy is done here. Leap-month placement and month lengths
//! come entirely from the loaded table.

pub mod cycle;
pub mod error;
pub mod julian;
pub mod lunar_table;

use std::path::Path;

use saju_base::{Calendar, CycleIndices};
use tracing::debug;

pub use cycle::{day_indices_for_jdn, month_indices, year_indices};
pub use error::CalendarError;
pub use julian::{
    J2000_JDN, days_in_month, gregorian_to_jdn, is_leap_year, is_valid_gregorian,
    jdn_to_gregorian,
};
pub use lunar_table::{LunarMonth, LunarMonthTable};

/// A validated Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Julian Day Number.
    pub jdn: i64,
}

impl SolarDate {
    /// Validate and build a Gregorian date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !is_valid_gregorian(year, month, day) {
            return Err(CalendarError::InvalidSolarDate { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            jdn: gregorian_to_jdn(year, month, day),
        })
    }
}

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A lunar date resolved against a [`LunarMonthTable`].
///
/// Values built by the kernel always hold a month in 1-12. For a
/// hand-built value, [`CycleIndices`] clamps the month into that range
/// (see [`month_indices`]), so month 0 reads as month 1 and 13 as 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    pub year: i32,
    /// Lunar month number, 1-12.
    pub month: u32,
    pub leap: bool,
    pub day: u32,
    /// Julian Day Number.
    pub jdn: i64,
}

impl LunarDate {
    /// The Gregorian date of the same day.
    pub fn to_solar(&self) -> SolarDate {
        jdn_to_solar(self.jdn)
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let l = if self.leap { "L" } else { "" };
        write!(f, "{:04}-{:02}{l}-{:02}", self.year, self.month, self.day)
    }
}

impl CycleIndices for LunarDate {
    fn year_stem_index(&self) -> u8 {
        year_indices(self.year).0
    }

    fn year_branch_index(&self) -> u8 {
        year_indices(self.year).1
    }

    fn month_stem_index(&self) -> u8 {
        month_indices(self.year_stem_index(), self.month).0
    }

    fn month_branch_index(&self) -> u8 {
        month_indices(self.year_stem_index(), self.month).1
    }

    fn day_stem_index(&self) -> u8 {
        day_indices_for_jdn(self.jdn).0
    }

    fn day_branch_index(&self) -> u8 {
        day_indices_for_jdn(self.jdn).1
    }
}

/// A loaded lunar month table, ready for date resolution.
#[derive(Debug, Clone)]
pub struct LunarCalendarKernel {
    table: LunarMonthTable,
}

impl LunarCalendarKernel {
    /// Load a lunar month table from a path.
    pub fn load(path: &Path) -> Result<Self, CalendarError> {
        let content = std::fs::read_to_string(path)?;
        let kernel = Self::parse(&content)?;
        debug!(path = %path.display(), "lunar month table loaded");
        Ok(kernel)
    }

    /// Parse a lunar month table from its text content.
    pub fn parse(content: &str) -> Result<Self, CalendarError> {
        let table = LunarMonthTable::parse(content)?;
        let (first, last) = table.range();
        debug!(
            months = table.len(),
            first_jdn = first,
            last_jdn = last,
            "lunar month table parsed"
        );
        Ok(Self { table })
    }

    /// Access the parsed month table.
    pub fn data(&self) -> &LunarMonthTable {
        &self.table
    }

    /// Gregorian date range covered by the table, inclusive.
    pub fn solar_range(&self) -> (SolarDate, SolarDate) {
        let (first, last) = self.table.range();
        (jdn_to_solar(first), jdn_to_solar(last))
    }

    /// Validate a Gregorian date.
    pub fn resolve_solar(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<SolarDate, CalendarError> {
        SolarDate::new(year, month, day)
    }

    /// Lunar date of the day `solar`.
    pub fn to_lunar(&self, solar: &SolarDate) -> Result<LunarDate, CalendarError> {
        self.lunar_for_jdn(solar.jdn)
    }

    /// Lunar date of the day with Julian Day Number `jdn`.
    pub fn lunar_for_jdn(&self, jdn: i64) -> Result<LunarDate, CalendarError> {
        let m = self.table.month_containing(jdn)?;
        Ok(LunarDate {
            year: m.year,
            month: m.month,
            leap: m.leap,
            day: (jdn - m.start_jdn) as u32 + 1,
            jdn,
        })
    }

    /// Resolve a lunar date in a regular or leap month.
    pub fn resolve_lunar_month(
        &self,
        year: i32,
        month: u32,
        leap: bool,
        day: u32,
    ) -> Result<LunarDate, CalendarError> {
        let invalid = CalendarError::InvalidLunarDate {
            year,
            month,
            leap,
            day,
        };
        let m = match self.table.find(year, month, leap) {
            Some(m) => m,
            None => {
                let (first, last) = self.table.range();
                let first_year = self.table.month_containing(first)?.year;
                let last_year = self.table.month_containing(last)?.year;
                if year < first_year || year > last_year {
                    return Err(CalendarError::OutOfRange);
                }
                return Err(invalid);
            }
        };
        if day == 0 || day > m.days {
            return Err(invalid);
        }
        Ok(LunarDate {
            year,
            month,
            leap,
            day,
            jdn: m.start_jdn + day as i64 - 1,
        })
    }

    /// Resolve a lunar date in the leap month `month` of `year`.
    pub fn resolve_lunar_leap(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<LunarDate, CalendarError> {
        self.resolve_lunar_month(year, month, true, day)
    }
}

impl Calendar for LunarCalendarKernel {
    type Solar = SolarDate;
    type Lunar = LunarDate;
    type Error = CalendarError;

    fn resolve_solar(&self, year: i32, month: u32, day: u32) -> Result<SolarDate, CalendarError> {
        LunarCalendarKernel::resolve_solar(self, year, month, day)
    }

    fn resolve_lunar(&self, year: i32, month: u32, day: u32) -> Result<LunarDate, CalendarError> {
        self.resolve_lunar_month(year, month, false, day)
    }

    fn to_lunar(&self, solar: &SolarDate) -> Result<LunarDate, CalendarError> {
        LunarCalendarKernel::to_lunar(self, solar)
    }
}

fn jdn_to_solar(jdn: i64) -> SolarDate {
    let (year, month, day) = jdn_to_gregorian(jdn);
    SolarDate {
        year,
        month,
        day,
        jdn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solar_date_validates() {
        assert!(SolarDate::new(2024, 2, 29).is_ok());
        assert_eq!(
            SolarDate::new(2023, 2, 29),
            Err(CalendarError::InvalidSolarDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn lunar_date_display_marks_leap() {
        let d = LunarDate {
            year: 2023,
            month: 2,
            leap: true,
            day: 5,
            jdn: 0,
        };
        assert_eq!(d.to_string(), "2023-02L-05");
    }

    #[test]
    fn lunar_date_indices() {
        // 2000-01-01 lies in lunar 1999 month 11 (己卯 year, 丙子 month, 戊午 day)
        let d = LunarDate {
            year: 1999,
            month: 11,
            leap: false,
            day: 25,
            jdn: J2000_JDN,
        };
        assert_eq!((d.year_stem_index(), d.year_branch_index()), (5, 3));
        assert_eq!((d.month_stem_index(), d.month_branch_index()), (2, 0));
        assert_eq!((d.day_stem_index(), d.day_branch_index()), (4, 6));
        assert_eq!(d.to_solar().to_string(), "2000-01-01");
    }

    #[test]
    fn hand_built_month_is_clamped() {
        let base = LunarDate {
            year: 2024,
            month: 1,
            leap: false,
            day: 1,
            jdn: J2000_JDN,
        };
        let zero = LunarDate { month: 0, ..base };
        let thirteen = LunarDate { month: 13, ..base };
        let twelve = LunarDate { month: 12, ..base };
        assert_eq!(zero.month_stem_index(), base.month_stem_index());
        assert_eq!(zero.month_branch_index(), base.month_branch_index());
        assert_eq!(thirteen.month_stem_index(), twelve.month_stem_index());
        assert_eq!(thirteen.month_branch_index(), twelve.month_branch_index());
    }
}
