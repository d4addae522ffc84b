//! Pillar derivation from sexagenary indices.
//!
//! Year, month and day pillars are read straight off the calendar handle.
//! The hour pillar is computed from the civil hour and the day stem:
//!
//! - branch = floor((hour + 1) / 2) mod 12, so 23:00 and 00:00 both land on 子
//! - stem = (day_stem * 2 + branch) mod 10
//!
//! None of these functions fail. Hour range checking happens in
//! [`crate::chart`]. Pass-through indices outside the cycle trip a debug
//! assertion; release builds reduce them modulo the cycle length.

use crate::calendar::CycleIndices;
use crate::pillar::Pillar;

/// Year pillar, passed through from the calendar.
pub fn year_pillar(date: &impl CycleIndices) -> Pillar {
    passthrough(date.year_stem_index(), date.year_branch_index())
}

/// Month pillar, passed through from the calendar.
pub fn month_pillar(date: &impl CycleIndices) -> Pillar {
    passthrough(date.month_stem_index(), date.month_branch_index())
}

/// Day pillar, passed through from the calendar.
pub fn day_pillar(date: &impl CycleIndices) -> Pillar {
    passthrough(date.day_stem_index(), date.day_branch_index())
}

fn passthrough(stem_index: u8, branch_index: u8) -> Pillar {
    debug_assert!(stem_index < 10, "stem index {stem_index} out of range");
    debug_assert!(branch_index < 12, "branch index {branch_index} out of range");
    Pillar::from_indices(stem_index, branch_index)
}

/// Branch index of the two-hour window containing `civil_hour`.
pub const fn hour_branch_index(civil_hour: u32) -> u8 {
    // ceil(h / 2) == floor((h + 1) / 2), without the overflow at u32::MAX
    (civil_hour.div_ceil(2) % 12) as u8
}

/// Hour stem index for a day stem and hour branch.
///
/// The sequence restarts every five days: day stems 甲 and 己 both begin
/// the 子 hour at 甲, 乙 and 庚 at 丙, and so on.
pub const fn hour_stem_index(day_stem_index: u8, branch_index: u8) -> u8 {
    ((day_stem_index as u16 * 2 + branch_index as u16) % 10) as u8
}

/// Hour pillar for `civil_hour` on the day described by `date`.
pub fn hour_pillar(date: &impl CycleIndices, civil_hour: u32) -> Pillar {
    let branch = hour_branch_index(civil_hour);
    let stem = hour_stem_index(date.day_stem_index(), branch);
    Pillar::from_indices(stem, branch)
}
