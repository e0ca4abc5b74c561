//! Energy-balance optimizer: an alternative category choice per OS.
//!
//! The core profile selector takes the two dimensions at fixed ranks. An
//! optimizer instead searches all 64 (upper, lower) pairs for the one whose
//! trigrams best fit the user's whole energy distribution. It is an add-on:
//! the pipeline reports its choice next to the core profile and never
//! replaces the core profile with it.
//!
//! The trait and its result types are always available. The reference
//! implementation [`AuthenticBalanceOptimizer`] is gated behind the
//! `energy-balance` feature.
//!
//! # Scoring (reference implementation)
//!
//! | Term | Weight | Range |
//! |------|--------|-------|
//! | polar harmony | 0.25 | 0–100 |
//! | elemental flow | 0.20 | 0–100 |
//! | familial balance | 0.15 | 0–100 |
//! | spatial stability | 0.10 | 50–80 |
//! | OS pattern fit | 0.25 | 0–100 |
//! | energy utilization | 0.05 | 0–100 |
//!
//! Category ids come from [`crate::catalog::authentic_id`], not from
//! [`crate::catalog::lookup`].

use crate::energy::TrigramEnergyProfile;
use crate::profile::OsKind;
use crate::trigram::Trigram;

// ─── result types ────────────────────────────────────────────────────────────

/// One scored (upper, lower) pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Category id for the pair.
    pub category_id: u8,
    /// Upper trigram.
    pub upper: Trigram,
    /// Lower trigram.
    pub lower: Trigram,
    /// Opposite-pair harmony.
    pub polar_harmony: f64,
    /// Five-element flow between the two trigrams.
    pub elemental_flow: f64,
    /// Family-role relation.
    pub familial_balance: f64,
    /// Compass opposition.
    pub spatial_stability: f64,
    /// Fit with the OS kind's preferred trigrams.
    pub os_compatibility: f64,
    /// Share of total energy the pair draws on.
    pub energy_utilization: f64,
    /// Weighted total in [0, 100].
    pub harmony_score: f64,
}

/// How the chosen pair splits its energy between upper and lower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnergySplit {
    /// upper / lower > 2.
    UpperDominant,
    /// upper / lower in [1.2, 2].
    UpperLeaning,
    /// Everything else.
    Balanced,
    /// upper / lower in [0.5, 0.8].
    LowerLeaning,
    /// upper / lower < 0.5.
    LowerDominant,
}

impl EnergySplit {
    /// Classify an (upper, lower) energy pair.
    pub fn classify(upper: f64, lower: f64) -> Self {
        if upper + lower == 0.0 {
            return EnergySplit::Balanced;
        }
        let ratio = upper / lower;
        if ratio > 2.0 {
            EnergySplit::UpperDominant
        } else if ratio < 0.5 {
            EnergySplit::LowerDominant
        } else if (1.2..=2.0).contains(&ratio) {
            EnergySplit::UpperLeaning
        } else if (0.5..=0.8).contains(&ratio) {
            EnergySplit::LowerLeaning
        } else {
            EnergySplit::Balanced
        }
    }
}

/// A suggested change to the user's energy distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Improvement {
    /// A trigram sits below half the mean energy.
    EnergyBoost {
        /// The weak trigram.
        trigram: Trigram,
        /// Its current energy.
        current: f64,
        /// 0.7 × mean energy.
        target: f64,
    },
    /// A preferred trigram of the OS kind is below its ideal share.
    OsOptimization {
        /// The preferred trigram.
        trigram: Trigram,
        /// Its current share of total energy.
        current_ratio: f64,
        /// Ideal (low, high) share.
        target_range: (f64, f64),
    },
}

/// The optimizer's choice for one OS kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimalSelection {
    /// OS kind this selection was made for.
    pub kind: OsKind,
    /// Highest-scoring candidate.
    pub best: Candidate,
    /// Energy split of the best candidate.
    pub split: EnergySplit,
    /// Up to three runners-up, best first.
    pub alternatives: Vec<Candidate>,
    /// Suggestions for the user's energy distribution.
    pub recommendations: Vec<Improvement>,
}

// ─── trait ───────────────────────────────────────────────────────────────────

/// Chooses a category for an OS kind from a full energy distribution.
pub trait EnergyBalanceOptimizer {
    /// Best category for `kind`, or `None` when there is nothing to optimize.
    fn select_optimal(&self, energies: &TrigramEnergyProfile, kind: OsKind) -> Option<OptimalSelection>;
}

// ─── OS patterns ─────────────────────────────────────────────────────────────

/// Preferred trigrams and ideal energy shares for one OS kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OsPattern {
    /// Trigrams the kind leans on most.
    pub primary: [Trigram; 2],
    /// Trigrams that support the primary pair.
    pub supportive: [Trigram; 2],
    /// Ideal (low, high) share of total energy, canonical trigram order.
    pub ideal_ratios: [(f64, f64); 8],
}

impl OsPattern {
    /// Pattern for an OS kind.
    pub const fn of(kind: OsKind) -> OsPattern {
        use Trigram::*;
        match kind {
            OsKind::Engine => OsPattern {
                primary: [Qian, Gen],
                supportive: [Zhen, Kan],
                //             乾            兌            離            震
                ideal_ratios: [(0.25, 0.30), (0.08, 0.12), (0.10, 0.15), (0.20, 0.25),
                //             巽            坎            艮            坤
                               (0.10, 0.15), (0.15, 0.20), (0.20, 0.25), (0.15, 0.20)],
            },
            OsKind::Interface => OsPattern {
                primary: [Dui, Li],
                supportive: [Xun, Kun],
                ideal_ratios: [(0.10, 0.15), (0.25, 0.30), (0.20, 0.25), (0.08, 0.12),
                               (0.20, 0.25), (0.08, 0.12), (0.10, 0.15), (0.15, 0.20)],
            },
            OsKind::SafeMode => OsPattern {
                primary: [Gen, Kun],
                supportive: [Kan, Xun],
                ideal_ratios: [(0.08, 0.12), (0.10, 0.15), (0.08, 0.12), (0.08, 0.12),
                               (0.15, 0.20), (0.15, 0.20), (0.25, 0.30), (0.20, 0.25)],
            },
        }
    }

    /// Ideal share range of `t`.
    pub fn ideal(&self, t: Trigram) -> (f64, f64) {
        self.ideal_ratios[t.index()]
    }
}

/// Improvement suggestions for a distribution and OS kind.
///
/// Empty when total energy is not positive.
pub fn improvements(energies: &TrigramEnergyProfile, kind: OsKind) -> Vec<Improvement> {
    let total = energies.sum();
    if !(total > 0.0) {
        return Vec::new();
    }
    let mean = total / 8.0;
    let mut out: Vec<Improvement> = energies
        .iter()
        .filter(|&(_, e)| e < mean * 0.5)
        .map(|(trigram, current)| Improvement::EnergyBoost {
            trigram,
            current,
            target: mean * 0.7,
        })
        .collect();

    let pattern = OsPattern::of(kind);
    for trigram in pattern.primary {
        let current_ratio = energies.get(trigram) / total;
        let target_range = pattern.ideal(trigram);
        if current_ratio < target_range.0 {
            out.push(Improvement::OsOptimization {
                trigram,
                current_ratio,
                target_range,
            });
        }
    }
    out
}

// ─── reference implementation ────────────────────────────────────────────────

#[cfg(feature = "energy-balance")]
pub use authentic::{score_candidate, AuthenticBalanceOptimizer};

#[cfg(feature = "energy-balance")]
mod authentic {
    use heapless::Vec as HVec;
    use tracing::debug;

    use super::{Candidate, EnergyBalanceOptimizer, EnergySplit, OptimalSelection, OsPattern};
    use crate::catalog::authentic_id;
    use crate::energy::TrigramEnergyProfile;
    use crate::profile::OsKind;
    use crate::trigram::{FamilyRole, Trigram};

    const POLAR_WEIGHT: f64 = 0.25;
    const ELEMENTAL_WEIGHT: f64 = 0.20;
    const FAMILIAL_WEIGHT: f64 = 0.15;
    const SPATIAL_WEIGHT: f64 = 0.10;
    const OS_WEIGHT: f64 = 0.25;
    const UTILIZATION_WEIGHT: f64 = 0.05;

    const GOLDEN_RATIO: f64 = 1.618;

    /// Best candidate plus this many runners-up.
    const TOP_K: usize = 4;

    /// Opposite pairs and their weights.
    const POLAR_PAIRS: [(Trigram, Trigram, f64); 4] = [
        (Trigram::Qian, Trigram::Kun, 0.3),
        (Trigram::Dui, Trigram::Gen, 0.25),
        (Trigram::Li, Trigram::Kan, 0.25),
        (Trigram::Zhen, Trigram::Xun, 0.2),
    ];

    fn polar_weight(upper: Trigram, lower: Trigram) -> Option<f64> {
        POLAR_PAIRS
            .iter()
            .find(|&&(a, b, _)| (upper == a && lower == b) || (upper == b && lower == a))
            .map(|&(_, _, w)| w)
    }

    fn polar_harmony(upper: Trigram, lower: Trigram, e: &TrigramEnergyProfile) -> f64 {
        let (eu, el) = (e.get(upper), e.get(lower));
        match polar_weight(upper, lower) {
            Some(weight) => {
                let ratio = if eu > el { eu / el.max(1.0) } else { el / eu.max(1.0) };
                let harmony = 100.0 - (ratio - GOLDEN_RATIO).abs() / GOLDEN_RATIO * 50.0;
                (harmony * weight * 100.0).clamp(0.0, 100.0)
            }
            None if eu + el > 0.0 => eu.min(el) / eu.max(el) * 60.0,
            None => 0.0,
        }
    }

    fn elemental_flow(upper: Trigram, lower: Trigram, e: &TrigramEnergyProfile) -> f64 {
        let (ue, le) = (upper.element(), lower.element());
        let (eu, el) = (e.get(upper), e.get(lower));
        let mut score: f64 = 50.0;
        if ue.generates(le) {
            score += 25.0;
        }
        if le.generates(ue) {
            score += 25.0;
        }
        if ue.destroys(le) {
            if eu < el * 1.5 {
                score += 15.0;
            }
            if eu > el * 2.0 {
                score -= 20.0;
            }
        }
        if le.destroys(ue) {
            if el < eu * 1.5 {
                score += 15.0;
            }
            if el > eu * 2.0 {
                score -= 20.0;
            }
        }
        score.clamp(0.0, 100.0)
    }

    fn is_son(r: FamilyRole) -> bool {
        matches!(r, FamilyRole::EldestSon | FamilyRole::MiddleSon | FamilyRole::YoungestSon)
    }

    fn is_daughter(r: FamilyRole) -> bool {
        matches!(
            r,
            FamilyRole::EldestDaughter | FamilyRole::MiddleDaughter | FamilyRole::YoungestDaughter
        )
    }

    fn familial_balance(upper: Trigram, lower: Trigram) -> f64 {
        use FamilyRole::{Father, Mother};
        let (u, l) = (upper.family(), lower.family());
        let mut score: f64 = 50.0;
        if matches!((u, l), (Father, Mother) | (Mother, Father)) {
            score += 30.0;
        }
        if u == Father && is_son(l) {
            score += 20.0;
        }
        if u == Mother && is_daughter(l) {
            score += 20.0;
        }
        if l == Father && is_son(u) {
            score += 15.0;
        }
        if l == Mother && is_daughter(u) {
            score += 15.0;
        }
        if (is_son(u) && is_son(l)) || (is_daughter(u) && is_daughter(l)) {
            score += 10.0;
        }
        score.clamp(0.0, 100.0)
    }

    fn spatial_stability(upper: Trigram, lower: Trigram) -> f64 {
        // Direction variants are declared clockwise from north.
        let steps = (upper.direction() as i32 - lower.direction() as i32).abs();
        match steps {
            4 => 80.0,
            2 | 6 => 70.0,
            0 => 50.0,
            _ => 60.0,
        }
    }

    fn os_compatibility(upper: Trigram, lower: Trigram, kind: OsKind, e: &TrigramEnergyProfile) -> f64 {
        let pattern = OsPattern::of(kind);
        let mut score: f64 = 0.0;
        if pattern.primary.contains(&upper) {
            score += 30.0;
        }
        if pattern.primary.contains(&lower) {
            score += 25.0;
        }
        if pattern.supportive.contains(&upper) {
            score += 20.0;
        }
        if pattern.supportive.contains(&lower) {
            score += 15.0;
        }
        let total = e.sum();
        if total > 0.0 {
            for t in [upper, lower] {
                let (lo, hi) = pattern.ideal(t);
                let share = e.get(t) / total;
                if (lo..=hi).contains(&share) {
                    score += 10.0;
                }
            }
        }
        score.clamp(0.0, 100.0)
    }

    fn energy_utilization(upper: Trigram, lower: Trigram, e: &TrigramEnergyProfile) -> f64 {
        let total = e.sum();
        if total == 0.0 {
            return 0.0;
        }
        let ratio = (e.get(upper) + e.get(lower)) / total;
        if (0.3..=0.7).contains(&ratio) {
            100.0
        } else if (0.2..=0.8).contains(&ratio) {
            80.0
        } else if (0.15..=0.85).contains(&ratio) {
            60.0
        } else {
            (ratio * 100.0).max(20.0)
        }
    }

    /// Score one (upper, lower) pair for an OS kind.
    pub fn score_candidate(
        upper: Trigram,
        lower: Trigram,
        energies: &TrigramEnergyProfile,
        kind: OsKind,
    ) -> Candidate {
        let polar_harmony = polar_harmony(upper, lower, energies);
        let elemental_flow = elemental_flow(upper, lower, energies);
        let familial_balance = familial_balance(upper, lower);
        let spatial_stability = spatial_stability(upper, lower);
        let os_compatibility = os_compatibility(upper, lower, kind, energies);
        let energy_utilization = energy_utilization(upper, lower, energies);

        let harmony_score = (polar_harmony * POLAR_WEIGHT
            + elemental_flow * ELEMENTAL_WEIGHT
            + familial_balance * FAMILIAL_WEIGHT
            + spatial_stability * SPATIAL_WEIGHT
            + os_compatibility * OS_WEIGHT
            + energy_utilization * UTILIZATION_WEIGHT)
            .clamp(0.0, 100.0);

        Candidate {
            category_id: authentic_id(upper, lower),
            upper,
            lower,
            polar_harmony,
            elemental_flow,
            familial_balance,
            spatial_stability,
            os_compatibility,
            energy_utilization,
            harmony_score,
        }
    }

    /// Insert keeping descending score; equal scores keep arrival order.
    fn push_ranked(top: &mut HVec<Candidate, TOP_K>, c: Candidate) {
        let pos = top
            .iter()
            .position(|t| c.harmony_score > t.harmony_score)
            .unwrap_or(top.len());
        if pos >= TOP_K {
            return;
        }
        if top.is_full() {
            top.pop();
        }
        // Cannot fail: a slot was freed above.
        let _ = top.insert(pos, c);
    }

    /// Reference optimizer scoring all 64 pairs.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct AuthenticBalanceOptimizer;

    impl AuthenticBalanceOptimizer {
        /// New optimizer.
        pub fn new() -> Self {
            Self
        }
    }

    impl EnergyBalanceOptimizer for AuthenticBalanceOptimizer {
        fn select_optimal(
            &self,
            energies: &TrigramEnergyProfile,
            kind: OsKind,
        ) -> Option<OptimalSelection> {
            if !(energies.sum() > 0.0) {
                debug!(os = kind.label(), "no energy to balance");
                return None;
            }

            let mut top: HVec<Candidate, TOP_K> = HVec::new();
            for upper in Trigram::ALL {
                for lower in Trigram::ALL {
                    push_ranked(&mut top, score_candidate(upper, lower, energies, kind));
                }
            }

            let mut ranked = top.into_iter();
            let best = ranked.next()?;
            debug!(
                os = kind.label(),
                category_id = best.category_id,
                harmony = best.harmony_score,
                "optimizer selection"
            );
            Some(OptimalSelection {
                kind,
                best,
                split: EnergySplit::classify(energies.get(best.upper), energies.get(best.lower)),
                alternatives: ranked.collect(),
                recommendations: super::improvements(energies, kind),
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn flat() -> TrigramEnergyProfile {
            TrigramEnergyProfile::UNIFORM
        }

        #[test]
        fn test_familial_rules() {
            assert_eq!(familial_balance(Trigram::Qian, Trigram::Kun), 80.0);
            assert_eq!(familial_balance(Trigram::Qian, Trigram::Zhen), 70.0);
            assert_eq!(familial_balance(Trigram::Zhen, Trigram::Qian), 65.0);
            assert_eq!(familial_balance(Trigram::Zhen, Trigram::Kan), 60.0);
            assert_eq!(familial_balance(Trigram::Xun, Trigram::Li), 60.0);
            assert_eq!(familial_balance(Trigram::Zhen, Trigram::Xun), 50.0);
        }

        #[test]
        fn test_spatial_rules() {
            // 乾 northwest / 巽 southeast
            assert_eq!(spatial_stability(Trigram::Qian, Trigram::Xun), 80.0);
            // 離 south / 坎 north
            assert_eq!(spatial_stability(Trigram::Li, Trigram::Kan), 80.0);
            // 震 east / 坎 north
            assert_eq!(spatial_stability(Trigram::Zhen, Trigram::Kan), 70.0);
            assert_eq!(spatial_stability(Trigram::Qian, Trigram::Qian), 50.0);
        }

        #[test]
        fn test_elemental_flow() {
            let e = flat();
            // fire generates earth
            assert_eq!(elemental_flow(Trigram::Li, Trigram::Gen, &e), 75.0);
            // water controls fire, moderately
            assert_eq!(elemental_flow(Trigram::Kan, Trigram::Li, &e), 65.0);
            assert_eq!(elemental_flow(Trigram::Qian, Trigram::Dui, &e), 50.0);

            let mut v = [12.5; 8];
            v[Trigram::Kan.index()] = 100.0;
            v[Trigram::Li.index()] = 10.0;
            let strong = TrigramEnergyProfile::from_values(v);
            assert_eq!(elemental_flow(Trigram::Kan, Trigram::Li, &strong), 30.0);
        }

        #[test]
        fn test_utilization_tiers() {
            let e = flat();
            // two of eight equal trigrams → 0.25
            assert_eq!(energy_utilization(Trigram::Qian, Trigram::Kun, &e), 80.0);
            let mut v = [0.0; 8];
            v[0] = 50.0;
            v[7] = 50.0;
            let e = TrigramEnergyProfile::from_values(v);
            assert_eq!(energy_utilization(Trigram::Qian, Trigram::Kun, &e), 100.0);
            assert_eq!(energy_utilization(Trigram::Li, Trigram::Kan, &e), 20.0);
        }

        #[test]
        fn test_os_compatibility() {
            let e = flat();
            assert_eq!(os_compatibility(Trigram::Qian, Trigram::Gen, OsKind::Engine, &e), 55.0);
            assert_eq!(os_compatibility(Trigram::Zhen, Trigram::Kan, OsKind::Engine, &e), 35.0);
            // 離 at 0.125 sits inside its Engine ideal share
            assert_eq!(os_compatibility(Trigram::Dui, Trigram::Li, OsKind::Engine, &e), 10.0);
        }

        #[test]
        fn test_polar_score_bounded() {
            for u in Trigram::ALL {
                for l in Trigram::ALL {
                    let p = polar_harmony(u, l, &flat());
                    assert!((0.0..=100.0).contains(&p), "{u}{l}: {p}");
                }
            }
            // equal energies: non-polar pair scores the 60 ceiling
            assert_eq!(polar_harmony(Trigram::Qian, Trigram::Dui, &flat()), 60.0);
        }

        #[test]
        fn test_selection_is_ranked() {
            let opt = AuthenticBalanceOptimizer::new();
            let e = TrigramEnergyProfile::from_values([100.0, 20.0, 35.0, 60.0, 15.0, 45.0, 80.0, 25.0]);
            for kind in OsKind::ALL {
                let sel = opt.select_optimal(&e, kind).unwrap();
                assert_eq!(sel.kind, kind);
                assert_eq!(sel.alternatives.len(), 3);
                let mut prev = sel.best.harmony_score;
                for alt in &sel.alternatives {
                    assert!(alt.harmony_score <= prev);
                    prev = alt.harmony_score;
                }
                // no pair beats the reported best
                for u in Trigram::ALL {
                    for l in Trigram::ALL {
                        assert!(score_candidate(u, l, &e, kind).harmony_score <= sel.best.harmony_score);
                    }
                }
                assert_eq!(sel.best.category_id, authentic_id(sel.best.upper, sel.best.lower));
            }
        }

        #[test]
        fn test_zero_energy_selects_nothing() {
            let opt = AuthenticBalanceOptimizer::new();
            let e = TrigramEnergyProfile::from_values([0.0; 8]);
            assert!(opt.select_optimal(&e, OsKind::Engine).is_none());
        }

        #[test]
        fn test_deterministic() {
            let opt = AuthenticBalanceOptimizer::new();
            let e = TrigramEnergyProfile::from_values([10.0, 90.0, 30.0, 60.0, 45.0, 5.0, 70.0, 20.0]);
            assert_eq!(
                opt.select_optimal(&e, OsKind::Interface),
                opt.select_optimal(&e, OsKind::Interface)
            );
        }
    }
}
