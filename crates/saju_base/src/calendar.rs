//! Calendar collaborator capability.
//!
//! The deriver never converts calendars itself. A [`Calendar`] resolves
//! civil dates to a lunar handle, and the handle exposes its position in
//! the 60-cycle through [`CycleIndices`].

use std::fmt::Display;

/// Sexagenary indices of a resolved lunar date (all 0-based).
///
/// Stem indices must be in `[0, 10)` and branch indices in `[0, 12)`.
pub trait CycleIndices {
    /// Stem of the lunar year.
    fn year_stem_index(&self) -> u8;
    /// Branch of the lunar year.
    fn year_branch_index(&self) -> u8;
    /// Stem of the lunar month.
    fn month_stem_index(&self) -> u8;
    /// Branch of the lunar month (寅 = 2 for month 1).
    fn month_branch_index(&self) -> u8;
    /// Stem of the day.
    fn day_stem_index(&self) -> u8;
    /// Branch of the day.
    fn day_branch_index(&self) -> u8;
}

/// Resolves civil dates into lunar handles.
pub trait Calendar {
    /// A resolved Gregorian date.
    type Solar;
    /// A resolved lunar date.
    type Lunar: CycleIndices;
    /// Resolution failure. Only its `Display` form is logged; callers of
    /// the facade see [`crate::CalculationError::InvalidDate`].
    type Error: Display;

    /// Resolve a Gregorian `(year, month, day)`.
    fn resolve_solar(&self, year: i32, month: u32, day: u32) -> Result<Self::Solar, Self::Error>;

    /// Resolve a lunar `(year, month, day)` (regular, non-leap month).
    fn resolve_lunar(&self, year: i32, month: u32, day: u32) -> Result<Self::Lunar, Self::Error>;

    /// Convert a resolved Gregorian date to its lunar equivalent.
    fn to_lunar(&self, solar: &Self::Solar) -> Result<Self::Lunar, Self::Error>;
}
