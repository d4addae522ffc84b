//! Error types for calendar resolution and table parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date resolution or lunar table loading.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Not a valid proleptic Gregorian date.
    InvalidSolarDate { year: i32, month: u32, day: u32 },
    /// No such lunar month in the table, or day past the month's length.
    InvalidLunarDate {
        year: i32,
        month: u32,
        leap: bool,
        day: u32,
    },
    /// Date lies outside the range covered by the lunar table.
    OutOfRange,
    /// Lunar month table parsing failed.
    TableParse(String),
    /// I/O error.
    Io(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSolarDate { year, month, day } => {
                write!(f, "invalid solar date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidLunarDate {
                year,
                month,
                leap,
                day,
            } => {
                let l = if *leap { " (leap)" } else { "" };
                write!(f, "invalid lunar date: {year} month {month}{l} day {day}")
            }
            Self::OutOfRange => write!(f, "date outside lunar table range"),
            Self::TableParse(msg) => write!(f, "lunar table parse error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for CalendarError {}

impl From<std::io::Error> for CalendarError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
