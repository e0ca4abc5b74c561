//! Dynamic balance across the three OS profiles.
//!
//! Strictly downstream of consistency: the caller computes the
//! [`ConsistencyReport`] first and passes it in. Nothing here calls back into
//! the consistency analyzer.
//!
//! ```text
//! energy_distribution = 100 · Σ engine energies / Σ all three profiles' energies
//! complementarity     = 100 · distinct upper trigrams / 3
//! stability           = mean(consistency score, mean trigram stability)
//! adaptability        = mean(complementarity, 100 − stability)
//! balance             = 0.3·ED + 0.25·C + 0.25·S + 0.2·A, clamped to [0, 100]
//! ```
//!
//! Failure (no energy at all, non-finite values) yields the neutral 50.

use tracing::warn;

use crate::config::BalanceConfig;
use crate::consistency::ConsistencyReport;
use crate::energy::TrigramEnergyProfile;
use crate::error::{finite, ScoringError};
use crate::profile::OsProfile;

/// One OS profile together with the energies it was derived from.
#[derive(Clone, Copy, Debug)]
pub struct OsEnergy<'a> {
    /// The profile.
    pub profile: &'a OsProfile,
    /// Energies of the vector the profile was selected from.
    pub energies: &'a TrigramEnergyProfile,
}

/// The four terms behind a balance score.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceComponents {
    /// Share of total energy held by the Engine profile, 0–100.
    pub energy_distribution: f64,
    /// Distinctness of the three upper trigrams, 0–100.
    pub complementarity: f64,
    /// Consistency blended with structural trigram stability, 0–100.
    pub stability: f64,
    /// Room to adapt, 0–100.
    pub adaptability: f64,
}

/// Balance score with its breakdown.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceBreakdown {
    /// Score in [0, 100].
    pub balance: f64,
    /// `None` for the neutral fallback.
    pub components: Option<BalanceComponents>,
}

impl BalanceBreakdown {
    /// Neutral result used on failure.
    pub fn neutral(cfg: &BalanceConfig) -> Self {
        Self {
            balance: cfg.fallback_score,
            components: None,
        }
    }
}

/// Mean structural stability of the upper and lower trigrams of all three profiles.
fn trigram_stability(os: &[OsEnergy<'_>; 3]) -> f64 {
    os.iter()
        .map(|o| (o.profile.upper.stability() + o.profile.lower.stability()) / 2.0)
        .sum::<f64>()
        / 3.0
}

/// Fallible evaluation. `os` is (engine, interface, safe mode).
pub fn try_evaluate_balance(
    os: &[OsEnergy<'_>; 3],
    consistency: &ConsistencyReport,
    cfg: &BalanceConfig,
) -> Result<BalanceBreakdown, ScoringError> {
    let engine_sum = os[0].energies.sum();
    let total: f64 = os.iter().map(|o| o.energies.sum()).sum();
    if total <= 0.0 {
        return Err(ScoringError::NonFinite {
            stage: "energy distribution",
        });
    }
    let energy_distribution = finite(100.0 * engine_sum / total, "energy distribution")?;

    let uppers = [os[0].profile.upper, os[1].profile.upper, os[2].profile.upper];
    let distinct = uppers
        .iter()
        .enumerate()
        .filter(|&(i, t)| !uppers[..i].contains(t))
        .count();
    let complementarity = 100.0 * distinct as f64 / 3.0;

    let stability = (finite(consistency.score, "consistency input")? + trigram_stability(os)) / 2.0;
    let adaptability = (complementarity + (100.0 - stability)) / 2.0;

    let raw = cfg.energy_distribution_weight * energy_distribution
        + cfg.complementarity_weight * complementarity
        + cfg.stability_weight * stability
        + cfg.adaptability_weight * adaptability;
    let balance = finite(raw, "balance")?.clamp(0.0, 100.0);

    Ok(BalanceBreakdown {
        balance,
        components: Some(BalanceComponents {
            energy_distribution,
            complementarity,
            stability,
            adaptability,
        }),
    })
}

/// Balance with breakdown. Never fails.
pub fn evaluate_balance_detailed(
    os: &[OsEnergy<'_>; 3],
    consistency: &ConsistencyReport,
    cfg: &BalanceConfig,
) -> BalanceBreakdown {
    try_evaluate_balance(os, consistency, cfg).unwrap_or_else(|e| {
        warn!(error = %e, "balance evaluation failed, using neutral score");
        BalanceBreakdown::neutral(cfg)
    })
}

/// Balance score in [0, 100]. Never fails.
pub fn evaluate_balance(
    os: &[OsEnergy<'_>; 3],
    consistency: &ConsistencyReport,
    cfg: &BalanceConfig,
) -> f64 {
    evaluate_balance_detailed(os, consistency, cfg).balance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consistency::ConsistencyKind;
    use crate::profile::OsKind;
    use crate::trigram::Trigram;
    use crate::vector::Dimension;

    fn profile(kind: OsKind, upper: Trigram, lower: Trigram) -> OsProfile {
        OsProfile {
            kind,
            category_id: crate::catalog::lookup(upper, lower),
            upper,
            lower,
            primary: Dimension::from_trigram(upper),
            secondary: Dimension::from_trigram(lower),
            score: 1.0,
        }
    }

    fn report(score: f64) -> ConsistencyReport {
        ConsistencyReport {
            score,
            kind: ConsistencyKind::Harmony,
            components: None,
        }
    }

    #[test]
    fn test_uniform_energies_and_distinct_uppers() {
        let e = profile(OsKind::Engine, Trigram::Gen, Trigram::Kun);
        let i = profile(OsKind::Interface, Trigram::Kun, Trigram::Gen);
        let s = profile(OsKind::SafeMode, Trigram::Qian, Trigram::Kun);
        let u = TrigramEnergyProfile::UNIFORM;
        let os = [
            OsEnergy { profile: &e, energies: &u },
            OsEnergy { profile: &i, energies: &u },
            OsEnergy { profile: &s, energies: &u },
        ];
        let b = evaluate_balance_detailed(&os, &report(80.0), &BalanceConfig::default());
        let c = b.components.unwrap();
        assert!((c.energy_distribution - 100.0 / 3.0).abs() < 1e-9);
        assert!((c.complementarity - 100.0).abs() < 1e-9);
        // trigram stability: (90+95)/2, (95+90)/2, (85+95)/2 → mean 91.6667
        let ts = (92.5 + 92.5 + 90.0) / 3.0;
        assert!((c.stability - (80.0 + ts) / 2.0).abs() < 1e-9);
        assert!((c.adaptability - (100.0 + 100.0 - c.stability) / 2.0).abs() < 1e-9);
        let expected = 0.3 * c.energy_distribution
            + 0.25 * c.complementarity
            + 0.25 * c.stability
            + 0.2 * c.adaptability;
        assert!((b.balance - expected).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_uppers_lower_complementarity() {
        let p = profile(OsKind::Engine, Trigram::Li, Trigram::Kan);
        let u = TrigramEnergyProfile::UNIFORM;
        let os = [
            OsEnergy { profile: &p, energies: &u },
            OsEnergy { profile: &p, energies: &u },
            OsEnergy { profile: &p, energies: &u },
        ];
        let b = evaluate_balance_detailed(&os, &report(50.0), &BalanceConfig::default());
        let c = b.components.unwrap();
        assert!((c.complementarity - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_energy_is_neutral() {
        let p = profile(OsKind::Engine, Trigram::Li, Trigram::Kan);
        let z = TrigramEnergyProfile::from_values([0.0; 8]);
        let os = [
            OsEnergy { profile: &p, energies: &z },
            OsEnergy { profile: &p, energies: &z },
            OsEnergy { profile: &p, energies: &z },
        ];
        assert_eq!(evaluate_balance(&os, &report(50.0), &BalanceConfig::default()), 50.0);
    }

    #[test]
    fn test_nan_consistency_is_neutral() {
        let p = profile(OsKind::Engine, Trigram::Li, Trigram::Kan);
        let u = TrigramEnergyProfile::UNIFORM;
        let os = [
            OsEnergy { profile: &p, energies: &u },
            OsEnergy { profile: &p, energies: &u },
            OsEnergy { profile: &p, energies: &u },
        ];
        let b = evaluate_balance_detailed(&os, &report(f64::NAN), &BalanceConfig::default());
        assert_eq!(b, BalanceBreakdown::neutral(&BalanceConfig::default()));
    }
}
