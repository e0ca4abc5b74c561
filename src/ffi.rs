//! Python FFI bindings via PyO3.
//!
//! Exposes the scoring operations to Python. Scoring maps are plain dicts keyed
//! by dimension (`"乾_創造性"`, `"creativity"`, `"qian"` …); trigrams are
//! accepted by name, image, romanised name or symbol.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from triple_os_core import Answer, TripleOsAnalyzer, build_vector, compatibility
//!
//! answers = [
//!     Answer("q1", {"乾_創造性": 3.0, "離_表現性": 1.0}),
//!     Answer("q25", {}, inner={"坤_受容性": 2.0}, outer={"兌_調和性": 1.0}),
//! ]
//! analyzer = TripleOsAnalyzer()
//! report = analyzer.analyze(answers)
//! print(report.engine.category_id, report.consistency_type)
//! print(compatibility("乾", "坤"))  # 0.56
//! ```

use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::catalog::ReferenceData;
use crate::compatibility::compatibility as rust_compatibility;
use crate::energy::map_energies as rust_map_energies;
use crate::pipeline::{Recommendation, TripleOsAnalyzer as RustAnalyzer, TripleOsReport};
use crate::profile::{select_profile as rust_select_profile, OsKind, OsProfile};
use crate::synergy::SynergyAnalyzer;
use crate::trigram::Trigram;
use crate::vector::{build_vector as rust_build_vector, Answer as RustAnswer, Dimension, ScoringDelta, TraitVector};

// ── conversions ──────────────────────────────────────────────────────────────

fn delta(map: &HashMap<String, f64>) -> ScoringDelta {
    ScoringDelta::from_pairs(map.iter().map(|(k, v)| (k.as_str(), *v)))
}

fn vector_from_dict(map: &HashMap<String, f64>) -> TraitVector {
    TraitVector::from(delta(map))
}

fn vector_to_dict(v: &TraitVector) -> HashMap<String, f64> {
    v.iter().map(|(d, x)| (d.key().to_string(), x)).collect()
}

fn parse_trigram(s: &str) -> PyResult<Trigram> {
    Trigram::parse(s).ok_or_else(|| PyValueError::new_err(format!("unknown trigram: {s:?}")))
}

fn parse_kind(s: &str) -> PyResult<OsKind> {
    let norm: String = s
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match norm.trim_end_matches("os") {
        "engine" => Ok(OsKind::Engine),
        "interface" => Ok(OsKind::Interface),
        "safemode" => Ok(OsKind::SafeMode),
        _ => Err(PyValueError::new_err(format!("unknown OS kind: {s:?}"))),
    }
}

// ── Answer ───────────────────────────────────────────────────────────────────

/// One survey answer.
///
/// Args:
///     question_id: e.g. "q7"
///     scoring:     dict of dimension → delta
///     inner:       scenario inner-choice dict (optional)
///     outer:       scenario outer-choice dict (optional)
#[pyclass(name = "Answer")]
#[derive(Clone)]
pub struct PyAnswer {
    inner: RustAnswer,
}

#[pymethods]
impl PyAnswer {
    /// Create an answer. When both `inner` and `outer` are given, `scoring`
    /// is ignored and replaced by their sum.
    #[new]
    #[pyo3(signature = (question_id, scoring, inner=None, outer=None))]
    pub fn new(
        question_id: String,
        scoring: HashMap<String, f64>,
        inner: Option<HashMap<String, f64>>,
        outer: Option<HashMap<String, f64>>,
    ) -> Self {
        let answer = match (inner, outer) {
            (Some(i), Some(o)) => RustAnswer::scenario(question_id, delta(&i), delta(&o)),
            (i, o) => RustAnswer {
                inner: i.as_ref().map(delta),
                outer: o.as_ref().map(delta),
                ..RustAnswer::new(question_id, delta(&scoring))
            },
        };
        Self { inner: answer }
    }

    /// Question identifier.
    #[getter]
    pub fn question_id(&self) -> &str {
        &self.inner.question_id
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!("Answer({:?})", self.inner.question_id)
    }
}

fn answers(list: &[PyAnswer]) -> Vec<RustAnswer> {
    list.iter().map(|a| a.inner.clone()).collect()
}

// ── OsProfile ────────────────────────────────────────────────────────────────

/// One derived profile.
#[pyclass(name = "OsProfile")]
#[derive(Clone)]
pub struct PyOsProfile {
    inner: OsProfile,
}

#[pymethods]
impl PyOsProfile {
    /// "Engine OS", "Interface OS" or "SafeMode OS".
    #[getter]
    pub fn kind(&self) -> &'static str {
        self.inner.kind.label()
    }
    /// Category id in 1..=64.
    #[getter]
    pub fn category_id(&self) -> u8 {
        self.inner.category_id
    }
    /// Upper trigram name.
    #[getter]
    pub fn upper(&self) -> &'static str {
        self.inner.upper.name()
    }
    /// Lower trigram name.
    #[getter]
    pub fn lower(&self) -> &'static str {
        self.inner.lower.name()
    }
    /// Dimension key of the upper trigram.
    #[getter]
    pub fn primary(&self) -> &'static str {
        self.inner.primary.key()
    }
    /// Dimension key of the lower trigram.
    #[getter]
    pub fn secondary(&self) -> &'static str {
        self.inner.secondary.key()
    }
    /// Score of the primary dimension.
    #[getter]
    pub fn score(&self) -> f64 {
        self.inner.score
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "OsProfile(kind={:?}, category_id={}, upper={}, lower={})",
            self.inner.kind.label(),
            self.inner.category_id,
            self.inner.upper,
            self.inner.lower,
        )
    }
}

// ── Report ───────────────────────────────────────────────────────────────────

fn recommendation_code(r: &Recommendation) -> String {
    match r {
        Recommendation::ImproveConsistency { .. } => "improve_consistency".into(),
        Recommendation::ImproveBalance { .. } => "improve_balance".into(),
        Recommendation::Energy { kind, .. } => format!("energy:{}", kind.label()),
    }
}

/// Result of `TripleOsAnalyzer.analyze`.
#[pyclass(name = "Report")]
pub struct PyReport {
    inner: TripleOsReport,
}

#[pymethods]
impl PyReport {
    /// Engine profile.
    #[getter]
    pub fn engine(&self) -> PyOsProfile {
        PyOsProfile {
            inner: self.inner.engine.profile.clone(),
        }
    }
    /// Interface profile.
    #[getter]
    pub fn interface(&self) -> PyOsProfile {
        PyOsProfile {
            inner: self.inner.interface.profile.clone(),
        }
    }
    /// SafeMode profile.
    #[getter]
    pub fn safe_mode(&self) -> PyOsProfile {
        PyOsProfile {
            inner: self.inner.safe_mode.profile.clone(),
        }
    }
    /// Trait vector over all answers.
    #[getter]
    pub fn vector(&self) -> HashMap<String, f64> {
        vector_to_dict(&self.inner.vector)
    }
    /// Consistency score in [0, 100].
    #[getter]
    pub fn consistency_score(&self) -> f64 {
        self.inner.consistency.score
    }
    /// "Harmony", "Complement" or "Conflict".
    #[getter]
    pub fn consistency_type(&self) -> String {
        format!("{:?}", self.inner.consistency.kind)
    }
    /// Balance score in [0, 100].
    #[getter]
    pub fn balance(&self) -> f64 {
        self.inner.balance.balance
    }
    /// Pairwise synergy: (engine, interface), (interface, safe mode), (engine, safe mode).
    #[getter]
    pub fn synergy(&self) -> [f64; 3] {
        self.inner.synergy
    }
    /// Recommendation codes.
    #[getter]
    pub fn recommendations(&self) -> Vec<String> {
        self.inner.recommendations.iter().map(recommendation_code).collect()
    }
}

// ── Analyzer ─────────────────────────────────────────────────────────────────

/// Full pipeline over the built-in catalog.
#[pyclass(name = "TripleOsAnalyzer")]
pub struct PyAnalyzer {
    inner: RustAnalyzer,
    synergy: SynergyAnalyzer,
}

#[pymethods]
impl PyAnalyzer {
    /// Analyzer with default configuration.
    #[new]
    pub fn new() -> Self {
        let inner = RustAnalyzer::new(ReferenceData::builtin().shared());
        let synergy = inner.synergy();
        Self { inner, synergy }
    }

    /// Analyze a list of `Answer`s.
    pub fn analyze(&self, answers_list: Vec<PyAnswer>) -> PyReport {
        PyReport {
            inner: self.inner.analyze(&answers(&answers_list)),
        }
    }

    /// Synergy of two category ids in [0, 1].
    pub fn synergy(&self, id_a: u8, id_b: u8) -> f64 {
        self.synergy.compute_synergy(id_a, id_b)
    }

    /// Python repr string.
    pub fn __repr__(&self) -> &'static str {
        "TripleOsAnalyzer()"
    }
}

// ── Free functions ───────────────────────────────────────────────────────────

/// Sum answer deltas into a dict of the eight dimension keys.
#[pyfunction]
pub fn build_vector(answers_list: Vec<PyAnswer>) -> HashMap<String, f64> {
    vector_to_dict(&rust_build_vector(&answers(&answers_list)))
}

/// Normalised trigram energies (keyed by trigram name) for a vector dict.
#[pyfunction]
pub fn map_energies(vector: HashMap<String, f64>) -> HashMap<String, f64> {
    rust_map_energies(&vector_from_dict(&vector))
        .iter()
        .map(|(t, e)| (t.name().to_string(), e))
        .collect()
}

/// Profile for one OS kind ("engine", "interface" or "safe_mode").
#[pyfunction]
pub fn select_profile(vector: HashMap<String, f64>, kind: &str) -> PyResult<PyOsProfile> {
    let kind = parse_kind(kind)?;
    Ok(PyOsProfile {
        inner: rust_select_profile(&vector_from_dict(&vector), kind),
    })
}

/// Trigram compatibility in [0.1, 1.0].
#[pyfunction]
pub fn compatibility(a: &str, b: &str) -> PyResult<f64> {
    Ok(rust_compatibility(parse_trigram(a)?, parse_trigram(b)?))
}

// ── Module entry point ───────────────────────────────────────────────────────

/// Triple OS scoring core Python bindings.
#[pymodule]
pub fn triple_os_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAnswer>()?;
    m.add_class::<PyOsProfile>()?;
    m.add_class::<PyReport>()?;
    m.add_class::<PyAnalyzer>()?;
    m.add_function(wrap_pyfunction!(build_vector, m)?)?;
    m.add_function(wrap_pyfunction!(map_energies, m)?)?;
    m.add_function(wrap_pyfunction!(select_profile, m)?)?;
    m.add_function(wrap_pyfunction!(compatibility, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add(
        "DIMENSIONS",
        Dimension::ALL.iter().map(|d| d.key()).collect::<Vec<_>>(),
    )?;
    Ok(())
}
