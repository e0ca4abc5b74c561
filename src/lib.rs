//! # triple-os-core
//!
//! Deterministic scoring core for a Triple OS self-assessment.
//!
//! ---
//!
//! ## Three profiles from one set of answers
//!
//! A respondent's answers fold into one eight-dimension trait vector. Each
//! dimension belongs to one of the eight trigrams. Ranking the dimensions and
//! cutting the ranking at fixed points yields three profiles:
//!
//! **Engine**: the two strongest dimensions. What drives the person.
//!
//! **Interface**: ranks three and four. How the person presents to others.
//!
//! **SafeMode**: the two weakest dimensions. Where the person retreats under
//! stress.
//!
//! Each profile is an ordered (upper, lower) trigram pair and therefore one of
//! 64 catalog categories. Consistency, balance and synergy are then computed
//! over the three.
//!
//! Identical answers give bit-identical reports. Reference data is built once
//! and only ever read afterwards.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! Answers → TraitVector → ranked dimensions → OsProfile ×3 → ConsistencyReport
//!               ↓                                 ↓               ↓
//!     TrigramEnergyProfile ─────────────────────────────────► BalanceBreakdown
//!                                                 ↓
//!                                   Catalog ─► SynergyAnalyzer
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`trigram`] | [`Trigram`], [`Element`] | The eight trigrams and their fixed attributes |
//! | [`vector`] | [`TraitVector`], [`Answer`], [`ScoringDelta`] | Answers → raw score per dimension |
//! | [`energy`] | [`TrigramEnergyProfile`] | Raw scores → energies in [0, 100] |
//! | [`catalog`] | [`Catalog`], [`Category`], [`ReferenceData`] | 64-category table and pair lookup |
//! | [`analytics`] | [`AnalyticsStore`] | Optional per-category line records |
//! | [`profile`] | [`OsProfile`], [`OsKind`] | Engine / Interface / SafeMode selection |
//! | [`compatibility`] | [`compatibility()`] | Five-element trigram compatibility |
//! | [`consistency`] | [`ConsistencyReport`] | Agreement of the three profiles |
//! | [`balance`] | [`BalanceBreakdown`] | Energy distribution, complementarity, stability |
//! | [`synergy`] | [`SynergyAnalyzer`] | Synergy between any two categories |
//! | [`optimizer`] | [`EnergyBalanceOptimizer`] | Optional whole-distribution category search |
//! | [`pipeline`] | [`TripleOsAnalyzer`], [`TripleOsReport`] | Everything above in one call |
//! | [`config`] | [`ScoringConfig`] | Weights, constants and thresholds |
//! | [`error`] | [`ScoringError`] | Error taxonomy for the fallible paths |
//!
//! ## Features
//!
//! | Feature | Adds |
//! |---------|------|
//! | `serde` | `Serialize`/`Deserialize` on public data; JSON loading of catalog, analytics and config |
//! | `energy-balance` | `optimizer::AuthenticBalanceOptimizer` |
//! | `python-ffi` | PyO3 bindings in `ffi` |
//!
//! ## Logging
//!
//! Diagnostics go through [`tracing`]. The crate never installs a subscriber.
//! Recovered failures log at `warn`, per-stage results at `debug`.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod analytics;
pub mod balance;
pub mod catalog;
pub mod compatibility;
pub mod config;
pub mod consistency;
pub mod energy;
pub mod error;
pub mod optimizer;
pub mod pipeline;
pub mod profile;
pub mod synergy;
pub mod trigram;
pub mod vector;

#[cfg(feature = "python-ffi")]
pub mod ffi;

// ─── Top-level re-exports ────────────────────────────────────────────────────

pub use analytics::{AnalyticsStore, AnalyticsSummary, LineRecord, Stance};
pub use balance::{evaluate_balance, evaluate_balance_detailed, BalanceBreakdown, OsEnergy};
pub use catalog::{lookup, Catalog, Category, ReferenceData, ReferenceHandle};
pub use compatibility::compatibility;
pub use config::ScoringConfig;
pub use consistency::{analyze_consistency, ConsistencyKind, ConsistencyReport};
pub use energy::{map_energies, TrigramEnergyProfile};
pub use error::ScoringError;
pub use optimizer::{EnergyBalanceOptimizer, OptimalSelection};
pub use pipeline::{Recommendation, TripleOsAnalyzer, TripleOsReport};
pub use profile::{select_all, select_profile, OsKind, OsProfile};
pub use synergy::{SynergyAnalyzer, SynergyBreakdown};
pub use trigram::{Element, Trigram};
pub use vector::{build_vector, separate_answers, Answer, Dimension, ScoringDelta, TraitVector};
