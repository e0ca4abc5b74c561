//! Synergy between any two categories.
//!
//! ```text
//! synergy = 0.3 · keyword + 0.25 · energy + 0.25 · elemental + 0.2 · philosophical
//! ```
//!
//! | Sub-score | Reads | Without its data |
//! |-----------|-------|------------------|
//! | [`keyword`] | catalog keywords ∪ analytics keywords | 0.5 when both sets are empty |
//! | [`energy`] | analytics energy fields, trigram lines, static matrix | 0.5 |
//! | [`elemental`] | trigram elements, seasons, directions | always available |
//! | [`philosophical`] | analytics stance/sentiment/trend, line counts | 0.5 |
//!
//! Category trigrams are the catalog record's own (upper, lower) pair.
//!
//! # Invariants
//!
//! - Every sub-score and the blend lie in [0, 1].
//! - `compute_synergy(a, b) == compute_synergy(b, a)` exactly.

pub mod elemental;
pub mod energy;
pub mod keyword;
pub mod philosophical;

use std::sync::Arc;

use crate::catalog::{Category, ReferenceData};
use crate::config::SynergyConfig;
use crate::trigram::Trigram;

/// The four sub-scores and their blend.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynergyBreakdown {
    /// Keyword overlap.
    pub keyword: f64,
    /// Energy-profile synergy.
    pub energy: f64,
    /// Wu-Xing synergy.
    pub elemental: f64,
    /// Stance / sentiment / trend synergy.
    pub philosophical: f64,
    /// Weighted blend in [0, 1].
    pub total: f64,
}

/// Synergy scorer over a shared [`ReferenceData`] snapshot.
#[derive(Clone, Debug)]
pub struct SynergyAnalyzer {
    reference: Arc<ReferenceData>,
    config: SynergyConfig,
}

impl SynergyAnalyzer {
    /// Analyzer with default weights.
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self::with_config(reference, SynergyConfig::default())
    }

    /// Analyzer with explicit weights.
    pub fn with_config(reference: Arc<ReferenceData>, config: SynergyConfig) -> Self {
        Self { reference, config }
    }

    /// The reference data this analyzer reads.
    pub fn reference(&self) -> &Arc<ReferenceData> {
        &self.reference
    }

    fn keywords<'a>(&'a self, c: &'a Category) -> Vec<&'a str> {
        let mut out: Vec<&str> = c.keywords.iter().map(String::as_str).collect();
        if let Some(s) = self.reference.analytics.summary(c.id) {
            out.extend(s.keywords.iter().map(String::as_str));
        }
        out
    }

    /// All four sub-scores and the blend. Unknown ids resolve to category #1.
    pub fn breakdown(&self, id_a: u8, id_b: u8) -> SynergyBreakdown {
        let catalog = &self.reference.catalog;
        let analytics = &self.reference.analytics;
        let neutral = self.config.neutral_score;

        let ca = catalog.get_category(id_a);
        let cb = catalog.get_category(id_b);
        let ta: (Trigram, Trigram) = (ca.upper, ca.lower);
        let tb: (Trigram, Trigram) = (cb.upper, cb.lower);
        let sa = analytics.summary(ca.id);
        let sb = analytics.summary(cb.id);

        let keyword = keyword::keyword_score(&self.keywords(ca), &self.keywords(cb), &self.config)
            .unwrap_or(neutral);
        let energy = energy::energy_score(ta, tb, sa, sb).unwrap_or(neutral);
        let elemental = elemental::elemental_score(ta, tb);
        let philosophical = philosophical::philosophical_score(ta, tb, sa, sb).unwrap_or(neutral);

        let w = &self.config;
        let total = (w.keyword_weight * keyword
            + w.energy_weight * energy
            + w.elemental_weight * elemental
            + w.philosophical_weight * philosophical)
            .clamp(0.0, 1.0);

        SynergyBreakdown {
            keyword,
            energy,
            elemental,
            philosophical,
            total,
        }
    }

    /// Synergy of two categories in [0, 1].
    pub fn compute_synergy(&self, id_a: u8, id_b: u8) -> f64 {
        self.breakdown(id_a, id_b).total
    }

    /// Full 64×64 synergy table, row/column index = id − 1.
    pub fn matrix(&self) -> Vec<[f64; 64]> {
        (1..=64u8)
            .map(|a| {
                let mut row = [0.0; 64];
                for (j, slot) in row.iter_mut().enumerate() {
                    *slot = self.compute_synergy(a, j as u8 + 1);
                }
                row
            })
            .collect()
    }
}
