//! Lunar month table parser and lookup.
//!
//! The table lists every lunar month in the covered range, one per line:
//!
//! ```text
//! # lunar_year  month  days  gregorian_start
//! 2023          2      29    2023-02-20
//! 2023          2L     29    2023-03-22
//! ```
//!
//! `L` marks a leap (intercalary) month. Blank lines and `#` comments are
//! ignored. Months must be contiguous: each starts on the day after the
//! previous one ends. Each month must also follow the previous one in
//! sequence: the next month number, a leap month repeating the month just
//! before it, or month 1 of the next year after month 12.

use crate::error::CalendarError;
use crate::julian::{gregorian_to_jdn, is_valid_gregorian};

/// One lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    /// Lunar year the month belongs to.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// Intercalary month repeating `month`.
    pub leap: bool,
    /// Length in days (29 or 30).
    pub days: u32,
    /// JDN of day 1.
    pub start_jdn: i64,
}

impl LunarMonth {
    /// JDN of the last day of the month.
    pub fn end_jdn(&self) -> i64 {
        self.start_jdn + self.days as i64 - 1
    }

    fn key(&self) -> (i32, u32, bool) {
        (self.year, self.month, self.leap)
    }

    /// Whether `self` is a valid successor of `prev`: the leap month
    /// repeating `prev`, the next month number of the same year, or
    /// month 1 of the next year after month 12.
    fn follows(&self, prev: &LunarMonth) -> bool {
        if self.year == prev.year {
            if self.leap {
                !prev.leap && self.month == prev.month
            } else {
                self.month == prev.month + 1
            }
        } else {
            self.year == prev.year + 1 && self.month == 1 && !self.leap && prev.month == 12
        }
    }
}

/// Parsed lunar month table, sorted by start day.
#[derive(Debug, Clone)]
pub struct LunarMonthTable {
    months: Vec<LunarMonth>,
}

impl LunarMonthTable {
    /// Parse a lunar month table from its text content.
    pub fn parse(content: &str) -> Result<Self, CalendarError> {
        let mut months: Vec<LunarMonth> = Vec::new();

        for (i, line) in content.lines().enumerate() {
            let line_no = i + 1;
            let text = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            }
            .trim();
            if text.is_empty() {
                continue;
            }

            let month = parse_line(text)
                .map_err(|msg| CalendarError::TableParse(format!("line {line_no}: {msg}")))?;

            if let Some(prev) = months.last() {
                if month.start_jdn != prev.end_jdn() + 1 {
                    return Err(CalendarError::TableParse(format!(
                        "line {line_no}: month does not start the day after the previous month"
                    )));
                }
                if !month.follows(prev) {
                    return Err(CalendarError::TableParse(format!(
                        "line {line_no}: month {}{} of {} does not follow the previous month",
                        month.month,
                        if month.leap { "L" } else { "" },
                        month.year
                    )));
                }
            }
            months.push(month);
        }

        if months.is_empty() {
            return Err(CalendarError::TableParse(
                "no lunar months found".to_string(),
            ));
        }

        Ok(Self { months })
    }

    /// Number of months in the table.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// All months, in order.
    pub fn months(&self) -> &[LunarMonth] {
        &self.months
    }

    /// JDN range covered by the table: (first day, last day), inclusive.
    pub fn range(&self) -> (i64, i64) {
        (
            self.months[0].start_jdn,
            self.months[self.months.len() - 1].end_jdn(),
        )
    }

    /// The month containing day `jdn`.
    pub fn month_containing(&self, jdn: i64) -> Result<&LunarMonth, CalendarError> {
        let (first, last) = self.range();
        if jdn < first || jdn > last {
            return Err(CalendarError::OutOfRange);
        }
        let idx = self
            .months
            .partition_point(|m| m.start_jdn <= jdn)
            .saturating_sub(1);
        Ok(&self.months[idx])
    }

    /// Look up a month by lunar year, number and leap flag.
    pub fn find(&self, year: i32, month: u32, leap: bool) -> Option<&LunarMonth> {
        self.months
            .binary_search_by_key(&(year, month, leap), LunarMonth::key)
            .ok()
            .map(|idx| &self.months[idx])
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn parse_line(text: &str) -> Result<LunarMonth, String> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(format!("expected 4 fields, got {}", fields.len()));
    }

    let year: i32 = fields[0]
        .parse()
        .map_err(|e| format!("lunar year {:?}: {e}", fields[0]))?;

    let (month_str, leap) = match fields[1].strip_suffix(['L', 'l']) {
        Some(m) => (m, true),
        None => (fields[1], false),
    };
    let month: u32 = month_str
        .parse()
        .map_err(|e| format!("month {:?}: {e}", fields[1]))?;
    if !(1..=12).contains(&month) {
        return Err(format!("month {month} outside 1-12"));
    }

    let days: u32 = fields[2]
        .parse()
        .map_err(|e| format!("days {:?}: {e}", fields[2]))?;
    if days != 29 && days != 30 {
        return Err(format!("month length {days} is not 29 or 30"));
    }

    let start_jdn = parse_iso_date(fields[3])?;

    Ok(LunarMonth {
        year,
        month,
        leap,
        days,
        start_jdn,
    })
}

/// Parse `YYYY-MM-DD` into a JDN.
fn parse_iso_date(s: &str) -> Result<i64, String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s:?}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{s:?}: {e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{s:?}: {e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{s:?}: {e}"))?;
    if !is_valid_gregorian(year, month, day) {
        return Err(format!("{s:?} is not a valid Gregorian date"));
    }
    Ok(gregorian_to_jdn(year, month, day))
}
