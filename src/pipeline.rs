//! End-to-end analysis: answers in, [`TripleOsReport`] out.
//!
//! ```text
//! answers ──► build_vector ──► select_all ──► [engine, interface, safe mode]
//!    │                                              │
//!    └─► separate_answers ─► section vectors ─► map_energies (per OS)
//!                                                   │
//!        analyze_consistency ──► evaluate_balance ──► recommendations
//! ```
//!
//! Consistency is computed once and handed to the balance evaluator; nothing is
//! recomputed or re-entered.
//!
//! # Invariants
//!
//! - Profiles always come from the full vector, so they consume disjoint
//!   rank pairs.
//! - An optimizer, when installed, only adds to the report. The core profiles
//!   are never replaced.
//! - `analyze` never fails and never panics on well-formed answers.

use std::sync::Arc;

use tracing::debug;

use crate::balance::{evaluate_balance_detailed, BalanceBreakdown, OsEnergy};
use crate::catalog::{Category, ReferenceData};
use crate::config::{RecommendationConfig, ScoringConfig};
use crate::consistency::{analyze_consistency, ConsistencyReport};
use crate::energy::{map_energies, os_energy_intensity, TrigramEnergyProfile};
use crate::error::ScoringError;
use crate::optimizer::{EnergyBalanceOptimizer, Improvement, OptimalSelection};
use crate::profile::{select_all, OsKind, OsProfile};
use crate::synergy::SynergyAnalyzer;
use crate::vector::{build_from_deltas, build_vector, separate_answers, Answer, TraitVector};

// ─── report types ────────────────────────────────────────────────────────────

/// Everything computed for one OS kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OsResult {
    /// Core profile from the full vector.
    pub profile: OsProfile,
    /// Energies from this OS's questionnaire section.
    pub energies: TrigramEnergyProfile,
    /// [`os_energy_intensity`] of the profile under those energies.
    pub intensity: f64,
    /// Optimizer choice, when an optimizer is installed and found one.
    pub optimized: Option<OptimalSelection>,
}

/// Something the user could work on.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Recommendation {
    /// Consistency fell below its threshold.
    ImproveConsistency {
        /// The consistency score.
        score: f64,
    },
    /// Balance fell below its threshold.
    ImproveBalance {
        /// The balance score.
        score: f64,
    },
    /// An optimizer suggestion for one OS kind.
    Energy {
        /// OS kind the suggestion came from.
        kind: OsKind,
        /// The suggestion.
        improvement: Improvement,
    },
}

/// Full result of one analysis run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripleOsReport {
    /// Vector over all answers.
    pub vector: TraitVector,
    /// Energies of the full vector.
    pub energies: TrigramEnergyProfile,
    /// Engine result.
    pub engine: OsResult,
    /// Interface result.
    pub interface: OsResult,
    /// SafeMode result.
    pub safe_mode: OsResult,
    /// Consistency of the three profiles.
    pub consistency: ConsistencyReport,
    /// Balance of the three profiles.
    pub balance: BalanceBreakdown,
    /// Synergy of (engine, interface), (interface, safe mode), (engine, safe mode).
    pub synergy: [f64; 3],
    /// Threshold and optimizer recommendations.
    pub recommendations: Vec<Recommendation>,
}

impl TripleOsReport {
    /// Result for one OS kind.
    pub fn os(&self, kind: OsKind) -> &OsResult {
        match kind {
            OsKind::Engine => &self.engine,
            OsKind::Interface => &self.interface,
            OsKind::SafeMode => &self.safe_mode,
        }
    }
}

/// Threshold recommendations for a consistency and balance score.
pub fn recommendations(consistency: f64, balance: f64, cfg: &RecommendationConfig) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if consistency < cfg.consistency_threshold {
        out.push(Recommendation::ImproveConsistency { score: consistency });
    }
    if balance < cfg.balance_threshold {
        out.push(Recommendation::ImproveBalance { score: balance });
    }
    out
}

// ─── section vectors ─────────────────────────────────────────────────────────

/// Per-OS vectors from the questionnaire sections, in OS order.
///
/// A scenario answer without an explicit inner or outer delta contributes its
/// `scoring` delta to that side. A section that is empty, or whose deltas
/// cancel to the all-zero vector, falls back to `full`.
pub fn section_vectors(answers: &[Answer], full: &TraitVector) -> [TraitVector; 3] {
    let sections = separate_answers(answers);
    let or_full = |empty: bool, v: TraitVector| {
        if empty || v == TraitVector::default() {
            *full
        } else {
            v
        }
    };

    let engine = or_full(sections.worldview.is_empty(), build_vector(sections.worldview.iter().copied()));
    let scenario_empty = sections.scenario.is_empty();
    let interface = or_full(
        scenario_empty,
        build_from_deltas(sections.scenario.iter().map(|a| a.outer.unwrap_or(a.scoring))),
    );
    let safe_mode = or_full(
        scenario_empty,
        build_from_deltas(sections.scenario.iter().map(|a| a.inner.unwrap_or(a.scoring))),
    );
    [engine, interface, safe_mode]
}

// ─── analyzer ────────────────────────────────────────────────────────────────

/// Shared, thread-safe optimizer handle.
pub type SharedOptimizer = Arc<dyn EnergyBalanceOptimizer + Send + Sync>;

/// Runs the whole scoring pipeline against one reference-data snapshot.
#[derive(Clone)]
pub struct TripleOsAnalyzer {
    reference: Arc<ReferenceData>,
    config: ScoringConfig,
    optimizer: Option<SharedOptimizer>,
}

impl TripleOsAnalyzer {
    /// Analyzer with default configuration and no optimizer.
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self {
            reference,
            config: ScoringConfig::default(),
            optimizer: None,
        }
    }

    /// Analyzer with an explicit configuration, validated first.
    pub fn with_config(reference: Arc<ReferenceData>, config: ScoringConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        Ok(Self {
            reference,
            config,
            optimizer: None,
        })
    }

    /// Install an energy-balance optimizer.
    pub fn with_optimizer(mut self, optimizer: SharedOptimizer) -> Self {
        self.optimizer = Some(optimizer);
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Catalog record behind a profile.
    pub fn category(&self, profile: &OsProfile) -> &Category {
        self.reference.catalog.get_category(profile.category_id)
    }

    /// Synergy analyzer over the same reference data and weights.
    pub fn synergy(&self) -> SynergyAnalyzer {
        SynergyAnalyzer::with_config(Arc::clone(&self.reference), self.config.synergy.clone())
    }

    /// Analyze one respondent.
    pub fn analyze(&self, answers: &[Answer]) -> TripleOsReport {
        let vector = build_vector(answers);
        let energies = map_energies(&vector);
        let profiles = select_all(&vector);
        let sections = section_vectors(answers, &vector);
        let os_energies = sections.map(|v| map_energies(&v));

        let [engine, interface, safe_mode] = &profiles;
        let consistency = analyze_consistency(engine, interface, safe_mode, &self.config.consistency);
        let os: [OsEnergy<'_>; 3] = [0, 1, 2].map(|i| OsEnergy {
            profile: &profiles[i],
            energies: &os_energies[i],
        });
        let balance = evaluate_balance_detailed(&os, &consistency, &self.config.balance);

        let synergy_analyzer = self.synergy();
        let synergy = [
            synergy_analyzer.compute_synergy(engine.category_id, interface.category_id),
            synergy_analyzer.compute_synergy(interface.category_id, safe_mode.category_id),
            synergy_analyzer.compute_synergy(engine.category_id, safe_mode.category_id),
        ];

        let mut results = [0, 1, 2].map(|i| OsResult {
            profile: profiles[i].clone(),
            energies: os_energies[i],
            intensity: os_energy_intensity(&profiles[i], &os_energies[i]),
            optimized: None,
        });

        let mut recs = recommendations(consistency.score, balance.balance, &self.config.recommendations);
        if let Some(optimizer) = &self.optimizer {
            for result in results.iter_mut() {
                let kind = result.profile.kind;
                result.optimized = optimizer.select_optimal(&result.energies, kind);
                if let Some(sel) = &result.optimized {
                    recs.extend(
                        sel.recommendations
                            .iter()
                            .map(|&improvement| Recommendation::Energy { kind, improvement }),
                    );
                }
            }
        }

        debug!(
            engine = engine.category_id,
            interface = interface.category_id,
            safe_mode = safe_mode.category_id,
            consistency = consistency.score,
            balance = balance.balance,
            "analysis complete"
        );

        let [engine, interface, safe_mode] = results;
        TripleOsReport {
            vector,
            energies,
            engine,
            interface,
            safe_mode,
            consistency,
            balance,
            synergy,
            recommendations: recs,
        }
    }
}
