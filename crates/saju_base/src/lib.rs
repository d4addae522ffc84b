//! Four Pillars (사주) derivation.
//!
//! This crate provides:
//! - The 10 heavenly stems, 12 earthly branches and five elements
//! - Year/month/day pillars read from a calendar's sexagenary indices
//! - The hour pillar from civil hour and day stem
//! - A [`calculate`] entry point over an injected [`Calendar`]
//!
//! Calendar conversion itself (solar ↔ lunar, cycle positions) is not
//! done here; see the `saju_calendar` crate for a table-driven provider.

pub mod branch;
pub mod calendar;
pub mod chart;
pub mod deriver;
pub mod element;
pub mod error;
pub mod pillar;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use calendar::{Calendar, CycleIndices};
pub use chart::{
    BirthInput, CalendarKind, ElementCounts, FourPillars, calculate, calculate_input,
    four_pillars,
};
pub use deriver::{
    day_pillar, hour_branch_index, hour_pillar, hour_stem_index, month_pillar, year_pillar,
};
pub use element::{ALL_ELEMENTS, Element, Polarity, element_of};
pub use error::CalculationError;
pub use pillar::Pillar;
pub use stem::{ALL_STEMS, Stem};
