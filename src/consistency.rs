//! Consistency across the three OS profiles.
//!
//! Three terms, each on a 0–100 scale:
//!
//! - **distance**: `max(0, 100 − mean |Δ category id| · 1.5)` over the three pairs;
//! - **trigram**: `100 ×` mean pairwise compatibility of the upper trigrams;
//! - **philosophical**: from the yin/yang polarity pattern of the upper trigrams.
//!
//! Final score `0.4·distance + 0.35·trigram + 0.25·philosophical`, clamped.
//! [`analyze_consistency`] never fails: any internal error yields
//! `{score: 33, kind: Conflict}` and a `warn!`.

use tracing::{debug, warn};

use crate::compatibility::compatibility;
use crate::config::ConsistencyConfig;
use crate::error::{finite, ScoringError};
use crate::profile::OsProfile;
use crate::trigram::Polarity;

/// Polarity pattern classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsistencyKind {
    /// All three upper trigrams share a polarity.
    Harmony,
    /// Interface and SafeMode both oppose Engine.
    Complement,
    /// Any other pattern.
    Conflict,
}

/// The three weighted terms behind a score.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsistencyComponents {
    /// Category-distance term.
    pub distance: f64,
    /// Upper-trigram compatibility term.
    pub trigram: f64,
    /// Polarity term.
    pub philosophical: f64,
}

/// Result of the consistency analysis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsistencyReport {
    /// Score in [0, 100].
    pub score: f64,
    /// Polarity classification.
    pub kind: ConsistencyKind,
    /// Term breakdown; `None` for the fallback report.
    pub components: Option<ConsistencyComponents>,
}

impl ConsistencyReport {
    /// Safe default returned when the analysis fails.
    pub fn fallback(cfg: &ConsistencyConfig) -> Self {
        Self {
            score: cfg.fallback_score,
            kind: ConsistencyKind::Conflict,
            components: None,
        }
    }
}

/// Classify the polarity pattern of (engine, interface, safe mode).
pub fn classify(engine: Polarity, interface: Polarity, safe_mode: Polarity) -> ConsistencyKind {
    if engine == interface && interface == safe_mode {
        ConsistencyKind::Harmony
    } else if engine != safe_mode && interface != engine {
        ConsistencyKind::Complement
    } else {
        ConsistencyKind::Conflict
    }
}

fn check_id(p: &OsProfile) -> Result<i32, ScoringError> {
    if (1..=64).contains(&p.category_id) {
        Ok(i32::from(p.category_id))
    } else {
        Err(ScoringError::InvalidCategoryId(p.category_id))
    }
}

/// Fallible analysis. Rejects category ids outside 1..=64 and non-finite results.
pub fn try_analyze_consistency(
    engine: &OsProfile,
    interface: &OsProfile,
    safe_mode: &OsProfile,
    cfg: &ConsistencyConfig,
) -> Result<ConsistencyReport, ScoringError> {
    let (e, i, s) = (check_id(engine)?, check_id(interface)?, check_id(safe_mode)?);

    let mean_gap = f64::from((e - i).abs() + (i - s).abs() + (e - s).abs()) / 3.0;
    let distance = (100.0 - mean_gap * cfg.distance_multiplier).max(0.0);

    let (eu, iu, su) = (engine.upper, interface.upper, safe_mode.upper);
    let trigram = 100.0 * (compatibility(eu, iu) + compatibility(iu, su) + compatibility(eu, su)) / 3.0;

    let kind = classify(eu.polarity(), iu.polarity(), su.polarity());
    let philosophical = match kind {
        ConsistencyKind::Harmony => cfg.harmony_score,
        ConsistencyKind::Complement => cfg.complement_score,
        ConsistencyKind::Conflict => cfg.conflict_score,
    };

    let raw = cfg.distance_weight * distance
        + cfg.trigram_weight * trigram
        + cfg.philosophical_weight * philosophical;
    let score = finite(raw, "consistency")?.clamp(0.0, 100.0);

    Ok(ConsistencyReport {
        score,
        kind,
        components: Some(ConsistencyComponents {
            distance,
            trigram,
            philosophical,
        }),
    })
}

/// Consistency of the three profiles. Never fails.
pub fn analyze_consistency(
    engine: &OsProfile,
    interface: &OsProfile,
    safe_mode: &OsProfile,
    cfg: &ConsistencyConfig,
) -> ConsistencyReport {
    match try_analyze_consistency(engine, interface, safe_mode, cfg) {
        Ok(report) => {
            debug!(score = report.score, kind = ?report.kind, "consistency analyzed");
            report
        }
        Err(e) => {
            warn!(error = %e, "consistency analysis failed, using fallback");
            ConsistencyReport::fallback(cfg)
        }
    }
}
