//! Tunable weights and constants for every scorer.
//!
//! [`ScoringConfig::default`] reproduces the reference behaviour. Each weight
//! group must sum to 1; [`ScoringConfig::validate`] enforces it.

use crate::error::ScoringError;

const WEIGHT_TOLERANCE: f64 = 1e-6;

// ─── Consistency ─────────────────────────────────────────────────────────────

/// Weights and constants for the consistency analyzer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConsistencyConfig {
    /// Weight of the category-distance term. Default 0.4.
    pub distance_weight: f64,
    /// Weight of the upper-trigram compatibility term. Default 0.35.
    pub trigram_weight: f64,
    /// Weight of the yin/yang philosophical term. Default 0.25.
    pub philosophical_weight: f64,
    /// Penalty per unit of mean id distance. Default 1.5.
    pub distance_multiplier: f64,
    /// Philosophical score when all three polarities agree. Default 95.
    pub harmony_score: f64,
    /// Philosophical score for the alternating pattern. Default 78.
    pub complement_score: f64,
    /// Philosophical score otherwise. Default 50.
    pub conflict_score: f64,
    /// Score returned when the computation fails. Default 33.
    pub fallback_score: f64,
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            distance_weight: 0.4,
            trigram_weight: 0.35,
            philosophical_weight: 0.25,
            distance_multiplier: 1.5,
            harmony_score: 95.0,
            complement_score: 78.0,
            conflict_score: 50.0,
            fallback_score: 33.0,
        }
    }
}

// ─── Balance ─────────────────────────────────────────────────────────────────

/// Weights for the dynamic balance evaluator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BalanceConfig {
    /// Default 0.3.
    pub energy_distribution_weight: f64,
    /// Default 0.25.
    pub complementarity_weight: f64,
    /// Default 0.25.
    pub stability_weight: f64,
    /// Default 0.2.
    pub adaptability_weight: f64,
    /// Score returned when the computation fails. Default 50.
    pub fallback_score: f64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            energy_distribution_weight: 0.3,
            complementarity_weight: 0.25,
            stability_weight: 0.25,
            adaptability_weight: 0.2,
            fallback_score: 50.0,
        }
    }
}

// ─── Synergy ─────────────────────────────────────────────────────────────────

/// Top-level blend of the four synergy sub-scores.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SynergyConfig {
    /// Default 0.3.
    pub keyword_weight: f64,
    /// Default 0.25.
    pub energy_weight: f64,
    /// Default 0.25.
    pub elemental_weight: f64,
    /// Default 0.2.
    pub philosophical_weight: f64,
    /// Sub-score used when reference data is missing. Default 0.5.
    pub neutral_score: f64,
    /// Bonus per synonym group hit by both keyword sets. Default 0.1.
    pub synonym_bonus: f64,
    /// Cap on the total synonym bonus. Default 0.3.
    pub synonym_bonus_cap: f64,
}

impl Default for SynergyConfig {
    fn default() -> Self {
        Self {
            keyword_weight: 0.3,
            energy_weight: 0.25,
            elemental_weight: 0.25,
            philosophical_weight: 0.2,
            neutral_score: 0.5,
            synonym_bonus: 0.1,
            synonym_bonus_cap: 0.3,
        }
    }
}

// ─── Recommendations ─────────────────────────────────────────────────────────

/// Thresholds below which the pipeline emits a recommendation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecommendationConfig {
    /// Default 70.
    pub consistency_threshold: f64,
    /// Default 65.
    pub balance_threshold: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: 70.0,
            balance_threshold: 65.0,
        }
    }
}

// ─── ScoringConfig ───────────────────────────────────────────────────────────

/// All scorer configuration in one value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringConfig {
    /// Consistency analyzer settings.
    pub consistency: ConsistencyConfig,
    /// Balance evaluator settings.
    pub balance: BalanceConfig,
    /// Synergy analyzer settings.
    pub synergy: SynergyConfig,
    /// Recommendation thresholds.
    pub recommendations: RecommendationConfig,
}

fn check_sum(group: &str, weights: &[f64]) -> Result<(), ScoringError> {
    if let Some(w) = weights.iter().find(|w| !(0.0..=1.0).contains(*w)) {
        return Err(ScoringError::InvalidConfig(format!(
            "{group} weight {w} outside [0, 1]"
        )));
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(ScoringError::InvalidConfig(format!(
            "{group} weights sum to {sum}, expected 1"
        )));
    }
    Ok(())
}

fn check_range(name: &str, value: f64, lo: f64, hi: f64) -> Result<(), ScoringError> {
    if (lo..=hi).contains(&value) {
        Ok(())
    } else {
        Err(ScoringError::InvalidConfig(format!(
            "{name} must be in [{lo}, {hi}], got {value}"
        )))
    }
}

impl ScoringConfig {
    /// Validate every group.
    pub fn validate(&self) -> Result<(), ScoringError> {
        let c = &self.consistency;
        check_sum(
            "consistency",
            &[c.distance_weight, c.trigram_weight, c.philosophical_weight],
        )?;
        check_range("consistency.distance_multiplier", c.distance_multiplier, 0.0, 100.0)?;
        check_range("consistency.harmony_score", c.harmony_score, 0.0, 100.0)?;
        check_range("consistency.complement_score", c.complement_score, 0.0, 100.0)?;
        check_range("consistency.conflict_score", c.conflict_score, 0.0, 100.0)?;
        check_range("consistency.fallback_score", c.fallback_score, 0.0, 100.0)?;
        if !(c.harmony_score > c.complement_score && c.complement_score > c.conflict_score) {
            return Err(ScoringError::InvalidConfig(
                "philosophical scores must order harmony > complement > conflict".into(),
            ));
        }

        let b = &self.balance;
        check_sum(
            "balance",
            &[
                b.energy_distribution_weight,
                b.complementarity_weight,
                b.stability_weight,
                b.adaptability_weight,
            ],
        )?;
        check_range("balance.fallback_score", b.fallback_score, 0.0, 100.0)?;

        let s = &self.synergy;
        check_sum(
            "synergy",
            &[s.keyword_weight, s.energy_weight, s.elemental_weight, s.philosophical_weight],
        )?;
        check_range("synergy.neutral_score", s.neutral_score, 0.0, 1.0)?;
        check_range("synergy.synonym_bonus", s.synonym_bonus, 0.0, 1.0)?;
        check_range("synergy.synonym_bonus_cap", s.synonym_bonus_cap, 0.0, 1.0)?;

        let r = &self.recommendations;
        check_range("recommendations.consistency_threshold", r.consistency_threshold, 0.0, 100.0)?;
        check_range("recommendations.balance_threshold", r.balance_threshold, 0.0, 100.0)?;
        Ok(())
    }

    /// Parse from JSON and validate. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let cfg: ScoringConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
