//! Pairwise trigram compatibility via Wu-Xing relations.
//!
//! The pair is first put in canonical order (lower rank first), then the first
//! matching rule fires:
//!
//! | Rule | Score |
//! |------|-------|
//! | same trigram | 1.0 |
//! | element(a) generates element(b) | 0.8 |
//! | element(b) generates element(a) | 0.7 |
//! | element(a) destroys element(b) | 0.3 |
//! | element(b) destroys element(a) | 0.2 |
//! | yang-strength gap 0 / 1 / 2 / ≥3 | 0.6 / 0.7 / 0.5 / 0.4 |
//!
//! Opposite pairs are then dampened: {乾, 坤} × 0.8, {坎, 離} × 0.7. The result
//! is clamped to [0.1, 1.0].
//!
//! # Invariants
//!
//! - `compatibility(a, b) == compatibility(b, a)` for every pair, by construction.
//! - `compatibility(a, a) == 1.0`.

use crate::trigram::Trigram;

/// Lower bound of every compatibility score.
pub const MIN_COMPATIBILITY: f64 = 0.1;
/// Upper bound of every compatibility score.
pub const MAX_COMPATIBILITY: f64 = 1.0;

const HEAVEN_EARTH_DAMPENER: f64 = 0.8;
const WATER_FIRE_DAMPENER: f64 = 0.7;

/// Put a pair in canonical order so every rule sees the same orientation.
#[inline]
fn canonical(a: Trigram, b: Trigram) -> (Trigram, Trigram) {
    if a.rank() <= b.rank() {
        (a, b)
    } else {
        (b, a)
    }
}

fn base_score(a: Trigram, b: Trigram) -> f64 {
    if a == b {
        return 1.0;
    }
    let (ea, eb) = (a.element(), b.element());
    if ea.generates(eb) {
        0.8
    } else if eb.generates(ea) {
        0.7
    } else if ea.destroys(eb) {
        0.3
    } else if eb.destroys(ea) {
        0.2
    } else {
        match a.yang_strength().abs_diff(b.yang_strength()) {
            0 => 0.6,
            1 => 0.7,
            2 => 0.5,
            _ => 0.4,
        }
    }
}

fn dampener(a: Trigram, b: Trigram) -> f64 {
    match (a, b) {
        (Trigram::Qian, Trigram::Kun) => HEAVEN_EARTH_DAMPENER,
        (Trigram::Li, Trigram::Kan) => WATER_FIRE_DAMPENER,
        _ => 1.0,
    }
}

/// Compatibility of two trigrams in [0.1, 1.0]. Symmetric.
pub fn compatibility(a: Trigram, b: Trigram) -> f64 {
    let (a, b) = canonical(a, b);
    (base_score(a, b) * dampener(a, b)).clamp(MIN_COMPATIBILITY, MAX_COMPATIBILITY)
}

/// Full 8×8 compatibility table in canonical order.
pub fn compatibility_matrix() -> [[f64; 8]; 8] {
    Trigram::ALL.map(|a| Trigram::ALL.map(|b| compatibility(a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_is_one() {
        for t in Trigram::ALL {
            assert_eq!(compatibility(t, t), 1.0, "{t}");
        }
    }

    #[test]
    fn test_heaven_earth() {
        // metal/earth: earth generates metal, so canonical (乾, 坤) hits "b generates a" = 0.7
        let c = compatibility(Trigram::Qian, Trigram::Kun);
        assert!((c - 0.56).abs() < 1e-12, "got {}", c);
        assert_eq!(c, compatibility(Trigram::Kun, Trigram::Qian));
    }

    #[test]
    fn test_water_fire() {
        // canonical (離, 坎): water destroys fire → "b destroys a" = 0.2, × 0.7 = 0.14
        let c = compatibility(Trigram::Kan, Trigram::Li);
        assert!((c - 0.14).abs() < 1e-12, "got {}", c);
    }

    #[test]
    fn test_same_element_falls_to_yang_gap() {
        // 乾 (3) and 兌 (2), both metal: gap 1 → 0.7
        assert!((compatibility(Trigram::Qian, Trigram::Dui) - 0.7).abs() < 1e-12);
        // 艮 (1) and 坤 (0), both earth: gap 1 → 0.7
        assert!((compatibility(Trigram::Gen, Trigram::Kun) - 0.7).abs() < 1e-12);
        // 震 (1) and 巽 (2), both wood: gap 1 → 0.7
        assert!((compatibility(Trigram::Zhen, Trigram::Xun) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_is_symmetric_and_bounded() {
        let m = compatibility_matrix();
        for i in 0..8 {
            for j in 0..8 {
                assert_eq!(m[i][j], m[j][i]);
                assert!((MIN_COMPATIBILITY..=MAX_COMPATIBILITY).contains(&m[i][j]));
            }
        }
    }
}
