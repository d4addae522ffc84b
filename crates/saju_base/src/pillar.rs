//! A pillar (주): one stem paired with one branch.

use std::fmt::{Display, Formatter};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::stem::{ALL_STEMS, Stem};

/// Stem/branch pair for one chart position.
///
/// The pair is not required to be a member of the 60-cycle; see
/// [`Pillar::sexagenary_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pair a stem with a branch.
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Build from raw indices, each reduced modulo its cycle length.
    pub const fn from_indices(stem_index: u8, branch_index: u8) -> Self {
        Self {
            stem: ALL_STEMS[(stem_index % 10) as usize],
            branch: ALL_BRANCHES[(branch_index % 12) as usize],
        }
    }

    /// Pillar at position `n` of the 60-cycle (甲子 = 0), `n` reduced mod 60.
    pub const fn from_sexagenary(n: u8) -> Self {
        let n = n % 60;
        Self::from_indices(n % 10, n % 12)
    }

    /// 0-based stem index.
    pub const fn stem_index(self) -> u8 {
        self.stem.index()
    }

    /// 0-based branch index.
    pub const fn branch_index(self) -> u8 {
        self.branch.index()
    }

    /// Position in the 60-cycle, or `None` for a mixed-parity pair.
    pub fn sexagenary_index(self) -> Option<u8> {
        let s = self.stem_index() as i32;
        let b = self.branch_index() as i32;
        if s % 2 != b % 2 {
            return None;
        }
        // 6s ≡ s (mod 10) and, for equal parity, 6s ≡ 6b (mod 12).
        Some((6 * s - 5 * b).rem_euclid(60) as u8)
    }

    /// Two-syllable hangul form, e.g. "갑자".
    pub fn hangul(self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}
