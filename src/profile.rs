//! Engine / Interface / SafeMode profile selection.
//!
//! The eight dimensions are ranked by score (descending, stable). Each OS kind
//! takes a fixed pair of ranks:
//!
//! ```text
//! rank:     1   2 │ 3   4 │ 5   6 │ 7   8
//!           Engine│Interface│ ─── │SafeMode
//! ```
//!
//! The higher-ranked dimension of the pair becomes the upper trigram, the other
//! the lower trigram, and the category id comes from [`crate::catalog::lookup`].
//! For SafeMode the "higher-ranked" of the two lowest is rank 7.
//!
//! # Invariants
//!
//! - The three kinds consume disjoint rank pairs, so no dimension is reused
//!   across kinds.
//! - Ties keep declaration order (see [`TraitVector::ranked`]).

use core::fmt;

use tracing::debug;

use crate::catalog::lookup;
use crate::trigram::Trigram;
use crate::vector::{Dimension, TraitVector};

/// Which of the three profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OsKind {
    /// Core motivation: the two strongest dimensions.
    Engine,
    /// Social presentation: ranks 3 and 4.
    Interface,
    /// Stress fallback: the two weakest dimensions.
    SafeMode,
}

impl OsKind {
    /// All kinds in report order.
    pub const ALL: [OsKind; 3] = [OsKind::Engine, OsKind::Interface, OsKind::SafeMode];

    /// Zero-based positions in the descending ranking used as (upper, lower).
    pub const fn rank_pair(self) -> (usize, usize) {
        match self {
            OsKind::Engine => (0, 1),
            OsKind::Interface => (2, 3),
            OsKind::SafeMode => (6, 7),
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            OsKind::Engine => "Engine OS",
            OsKind::Interface => "Interface OS",
            OsKind::SafeMode => "SafeMode OS",
        }
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One derived profile.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OsProfile {
    /// Which OS this is.
    pub kind: OsKind,
    /// Category from the canonical lookup.
    pub category_id: u8,
    /// Trigram of the primary dimension.
    pub upper: Trigram,
    /// Trigram of the secondary dimension.
    pub lower: Trigram,
    /// Higher-ranked dimension of the pair.
    pub primary: Dimension,
    /// Lower-ranked dimension of the pair.
    pub secondary: Dimension,
    /// Raw score of the primary dimension.
    pub score: f64,
}

/// Select the profile for one OS kind.
pub fn select_profile(vector: &TraitVector, kind: OsKind) -> OsProfile {
    let ranked = vector.ranked();
    from_ranked(&ranked, kind)
}

/// Select all three profiles from one vector, ranking once.
pub fn select_all(vector: &TraitVector) -> [OsProfile; 3] {
    let ranked = vector.ranked();
    OsKind::ALL.map(|k| from_ranked(&ranked, k))
}

/// Profile from an explicit ranking.
///
/// The ranking must hold all eight dimensions; anything shorter is a caller bug.
pub fn from_ranked(ranked: &[(Dimension, f64)], kind: OsKind) -> OsProfile {
    debug_assert_eq!(ranked.len(), 8, "ranking must cover all eight dimensions");
    let (hi, lo) = kind.rank_pair();
    let (primary, score) = ranked[hi];
    let (secondary, _) = ranked[lo];
    let upper = primary.trigram();
    let lower = secondary.trigram();
    let category_id = lookup(upper, lower);
    debug!(os = %kind, %upper, %lower, category_id, "profile selected");
    OsProfile {
        kind,
        category_id,
        upper,
        lower,
        primary,
        secondary,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TraitVector {
        // qian 9, dui 4, li 8, zhen 7, xun 3, kan 5, gen 6, kun 1
        TraitVector::from_values([9.0, 4.0, 8.0, 7.0, 3.0, 5.0, 6.0, 1.0])
    }

    #[test]
    fn test_engine_takes_top_two() {
        let p = select_profile(&sample(), OsKind::Engine);
        assert_eq!((p.upper, p.lower), (Trigram::Qian, Trigram::Li));
        assert_eq!(p.score, 9.0);
        assert_eq!(p.category_id, lookup(Trigram::Qian, Trigram::Li));
    }

    #[test]
    fn test_interface_takes_ranks_three_four() {
        let p = select_profile(&sample(), OsKind::Interface);
        assert_eq!((p.primary, p.secondary), (Dimension::Action, Dimension::Stability));
        assert_eq!(p.score, 7.0);
    }

    #[test]
    fn test_safemode_takes_bottom_two() {
        let p = select_profile(&sample(), OsKind::SafeMode);
        assert_eq!((p.upper, p.lower), (Trigram::Xun, Trigram::Kun));
        assert_eq!(p.score, 3.0);
    }

    #[test]
    fn test_select_all_matches_individual() {
        let v = sample();
        let all = select_all(&v);
        for (p, k) in all.iter().zip(OsKind::ALL) {
            assert_eq!(*p, select_profile(&v, k));
        }
    }

    #[test]
    fn test_all_equal_uses_declaration_order() {
        let v = TraitVector::default();
        let [e, i, s] = select_all(&v);
        assert_eq!((e.upper, e.lower), (Trigram::Qian, Trigram::Dui));
        assert_eq!((i.upper, i.lower), (Trigram::Li, Trigram::Zhen));
        assert_eq!((s.upper, s.lower), (Trigram::Gen, Trigram::Kun));
    }

    #[test]
    #[should_panic]
    fn test_short_ranking_is_a_programming_error() {
        let short = [(Dimension::Creativity, 1.0), (Dimension::Harmony, 0.5)];
        let _ = from_ranked(&short, OsKind::SafeMode);
    }
}
