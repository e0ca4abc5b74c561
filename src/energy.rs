//! Trait vector → normalised trigram energies.
//!
//! Raw energy for each trigram is the score of its dimension. Energies are
//! scaled so the strongest trigram sits at 100. A vector with no positive
//! value carries no signal, so every trigram gets the uniform share 12.5.

use core::ops::Index;

use crate::profile::OsProfile;
use crate::trigram::Trigram;
use crate::vector::{Dimension, TraitVector};

/// Energy given to every trigram when the source vector has no positive value.
pub const UNIFORM_ENERGY: f64 = 100.0 / 8.0;

/// Normalised energy per trigram, each in [0, 100].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrigramEnergyProfile([f64; 8]);

impl TrigramEnergyProfile {
    /// The uniform 12.5 profile.
    pub const UNIFORM: TrigramEnergyProfile = TrigramEnergyProfile([UNIFORM_ENERGY; 8]);

    /// Energy of one trigram.
    #[inline]
    pub fn get(&self, t: Trigram) -> f64 {
        self.0[t.index()]
    }

    /// `(trigram, energy)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Trigram, f64)> + '_ {
        Trigram::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    /// Sum of all eight energies.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Mean energy.
    pub fn mean(&self) -> f64 {
        self.sum() / 8.0
    }

    /// Energy values in canonical order.
    pub fn values(&self) -> &[f64; 8] {
        &self.0
    }

    /// Construct from energies in canonical order, clamping each into [0, 100].
    /// Non-finite values become 0.
    pub fn from_values(values: [f64; 8]) -> Self {
        Self(values.map(|v| if v.is_finite() { v.clamp(0.0, 100.0) } else { 0.0 }))
    }
}

impl Default for TrigramEnergyProfile {
    fn default() -> Self {
        Self::UNIFORM
    }
}

impl Index<Trigram> for TrigramEnergyProfile {
    type Output = f64;

    fn index(&self, t: Trigram) -> &f64 {
        &self.0[t.index()]
    }
}

/// Map a trait vector to trigram energies.
///
/// Iterates in canonical order, so identical vectors give bit-identical output.
pub fn map_energies(vector: &TraitVector) -> TrigramEnergyProfile {
    let raw = Trigram::ALL.map(|t| {
        let r = vector.get(Dimension::from_trigram(t));
        if r.is_finite() { r } else { 0.0 }
    });
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max > 0.0 {
        TrigramEnergyProfile(raw.map(|r| (r / max * 100.0).clamp(0.0, 100.0)))
    } else {
        TrigramEnergyProfile::UNIFORM
    }
}

/// Energy intensity of one OS: mean of its two trigram energies plus 0.3 of
/// their spread, clamped to [0, 100].
pub fn os_energy_intensity(profile: &OsProfile, energies: &TrigramEnergyProfile) -> f64 {
    let a = energies.get(profile.upper);
    let b = energies.get(profile.lower);
    let avg = (a + b) / 2.0;
    let spread = a.max(b) - a.min(b);
    (avg + spread * 0.3).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strongest_trigram_scales_to_100() {
        let v = TraitVector::from_values([4.0, 2.0, 1.0, 0.0, -3.0, 0.0, 0.0, 0.0]);
        let e = map_energies(&v);
        assert_eq!(e.get(Trigram::Qian), 100.0);
        assert!((e.get(Trigram::Dui) - 50.0).abs() < 1e-9);
        assert!((e.get(Trigram::Li) - 25.0).abs() < 1e-9);
        assert_eq!(e.get(Trigram::Xun), 0.0, "negative raw clamps to 0");
    }

    #[test]
    fn test_non_finite_raw_counts_as_zero() {
        let v = TraitVector::from_values([f64::NAN, 2.0, f64::INFINITY, 1.0, 0.0, 0.0, 0.0, 0.0]);
        let e = map_energies(&v);
        assert_eq!(e.get(Trigram::Qian), 0.0);
        assert_eq!(e.get(Trigram::Dui), 100.0);
        assert_eq!(e.get(Trigram::Li), 0.0);
        assert!((e.get(Trigram::Zhen) - 50.0).abs() < 1e-9);
        for (_, x) in e.iter() {
            assert!((0.0..=100.0).contains(&x));
        }

        let all_nan = TraitVector::from_values([f64::NAN; 8]);
        assert_eq!(map_energies(&all_nan), TrigramEnergyProfile::UNIFORM);
    }

    #[test]
    fn test_non_positive_vector_is_uniform() {
        for v in [
            TraitVector::default(),
            TraitVector::from_values([-1.0; 8]),
            TraitVector::from_values([0.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5]),
        ] {
            let e = map_energies(&v);
            for (_, x) in e.iter() {
                assert_eq!(x, 12.5);
            }
        }
    }

    #[test]
    fn test_uses_dimension_bijection() {
        let v = TraitVector::from_values([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 7.0]);
        let e = map_energies(&v);
        assert_eq!(e.get(Trigram::Kun), 100.0);
        assert_eq!(e.get(Trigram::Qian), 0.0);
    }

    #[test]
    fn test_os_energy_intensity() {
        use crate::profile::{OsKind, OsProfile};
        let p = OsProfile {
            kind: OsKind::Engine,
            category_id: 1,
            upper: Trigram::Qian,
            lower: Trigram::Dui,
            primary: Dimension::Creativity,
            secondary: Dimension::Harmony,
            score: 1.0,
        };
        let e = TrigramEnergyProfile::from_values([100.0, 40.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        // avg 70, spread 60 → 70 + 18 = 88
        assert!((os_energy_intensity(&p, &e) - 88.0).abs() < 1e-9);
    }
}
