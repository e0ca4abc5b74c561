//! Trait vector construction from survey answers.
//!
//! Each answer carries a [`ScoringDelta`]: a closed record with exactly one slot
//! per [`Dimension`]. Arbitrary string-keyed scoring maps are folded into that
//! record by [`ScoringDelta::from_pairs`], which silently drops keys that do not
//! name one of the eight dimensions.
//!
//! # Invariants
//!
//! - A [`TraitVector`] always has exactly 8 entries; the type cannot express fewer.
//! - Empty input yields the all-zero vector.
//! - Summation order is the answer order, so identical input gives bit-identical output.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Index};

use crate::trigram::Trigram;

// ─── Dimension ───────────────────────────────────────────────────────────────

/// One of the eight trait dimensions.
///
/// Declaration order is the tie-break order when ranking, and matches the
/// canonical trigram order through [`Dimension::trigram`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// 乾_創造性
    Creativity = 0,
    /// 兌_調和性
    Harmony = 1,
    /// 離_表現性
    Expression = 2,
    /// 震_行動性
    Action = 3,
    /// 巽_適応性
    Adaptability = 4,
    /// 坎_探求性
    Exploration = 5,
    /// 艮_安定性
    Stability = 6,
    /// 坤_受容性
    Receptivity = 7,
}

impl Dimension {
    /// All eight dimensions in declaration order.
    pub const ALL: [Dimension; 8] = [
        Dimension::Creativity,
        Dimension::Harmony,
        Dimension::Expression,
        Dimension::Action,
        Dimension::Adaptability,
        Dimension::Exploration,
        Dimension::Stability,
        Dimension::Receptivity,
    ];

    /// Zero-based declaration index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Scoring key as it appears in answer data, e.g. `"乾_創造性"`.
    pub const fn key(self) -> &'static str {
        match self {
            Dimension::Creativity => "乾_創造性",
            Dimension::Harmony => "兌_調和性",
            Dimension::Expression => "離_表現性",
            Dimension::Action => "震_行動性",
            Dimension::Adaptability => "巽_適応性",
            Dimension::Exploration => "坎_探求性",
            Dimension::Stability => "艮_安定性",
            Dimension::Receptivity => "坤_受容性",
        }
    }

    /// English label.
    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Creativity => "creativity",
            Dimension::Harmony => "harmony",
            Dimension::Expression => "expression",
            Dimension::Action => "action",
            Dimension::Adaptability => "adaptability",
            Dimension::Exploration => "exploration",
            Dimension::Stability => "stability",
            Dimension::Receptivity => "receptivity",
        }
    }

    /// The trigram this dimension maps to. The mapping is a bijection.
    pub const fn trigram(self) -> Trigram {
        match self {
            Dimension::Creativity => Trigram::Qian,
            Dimension::Harmony => Trigram::Dui,
            Dimension::Expression => Trigram::Li,
            Dimension::Action => Trigram::Zhen,
            Dimension::Adaptability => Trigram::Xun,
            Dimension::Exploration => Trigram::Kan,
            Dimension::Stability => Trigram::Gen,
            Dimension::Receptivity => Trigram::Kun,
        }
    }

    /// Inverse of [`Dimension::trigram`].
    pub const fn from_trigram(t: Trigram) -> Dimension {
        Self::ALL[t.index()]
    }

    /// Resolve a scoring key. Accepts the data key (`"乾_創造性"`), the English
    /// label, or the romanised trigram name. Anything else is `None`.
    pub fn from_key(key: &str) -> Option<Dimension> {
        let key = key.trim();
        Self::ALL.into_iter().find(|d| {
            key == d.key()
                || key.eq_ignore_ascii_case(d.label())
                || key.eq_ignore_ascii_case(d.trigram().romanized())
        })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ─── ScoringDelta ────────────────────────────────────────────────────────────

/// Per-answer score contribution: one signed delta per dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoringDelta([f64; 8]);

impl ScoringDelta {
    /// All-zero delta.
    pub const ZERO: ScoringDelta = ScoringDelta([0.0; 8]);

    /// Build from string-keyed pairs, dropping unrecognised keys.
    ///
    /// Repeated keys accumulate.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut out = Self::ZERO;
        for (key, value) in pairs {
            if let Some(dim) = Dimension::from_key(key.as_ref()) {
                out.0[dim.index()] += value;
            }
        }
        out
    }

    /// Builder-style setter.
    pub fn with(mut self, dim: Dimension, value: f64) -> Self {
        self.0[dim.index()] = value;
        self
    }

    /// Delta for one dimension.
    pub fn get(&self, dim: Dimension) -> f64 {
        self.0[dim.index()]
    }

    /// `true` when every slot is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }
}

impl Add for ScoringDelta {
    type Output = ScoringDelta;

    fn add(mut self, rhs: ScoringDelta) -> ScoringDelta {
        self += rhs;
        self
    }
}

impl AddAssign for ScoringDelta {
    fn add_assign(&mut self, rhs: ScoringDelta) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ScoringDelta {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(8))?;
        for dim in Dimension::ALL {
            map.serialize_entry(dim.key(), &self.get(dim))?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ScoringDelta {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: std::collections::BTreeMap<String, f64> =
            serde::Deserialize::deserialize(deserializer)?;
        Ok(ScoringDelta::from_pairs(raw))
    }
}

// ─── Answer ──────────────────────────────────────────────────────────────────

/// A single survey answer.
///
/// Worldview questions carry only `scoring`. Scenario questions additionally
/// split their contribution into an `inner` (private reaction) and an `outer`
/// (social behaviour) delta.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Answer {
    /// Question identifier, e.g. `"q7"`.
    pub question_id: String,
    /// Contribution added by [`build_vector`].
    pub scoring: ScoringDelta,
    /// Inner-choice delta for scenario questions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inner: Option<ScoringDelta>,
    /// Outer-choice delta for scenario questions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub outer: Option<ScoringDelta>,
}

impl Answer {
    /// Worldview-style answer with one scoring delta.
    pub fn new(question_id: impl Into<String>, scoring: ScoringDelta) -> Self {
        Self {
            question_id: question_id.into(),
            scoring,
            inner: None,
            outer: None,
        }
    }

    /// Scenario-style answer. `scoring` is the sum of both choices.
    pub fn scenario(question_id: impl Into<String>, inner: ScoringDelta, outer: ScoringDelta) -> Self {
        Self {
            question_id: question_id.into(),
            scoring: inner + outer,
            inner: Some(inner),
            outer: Some(outer),
        }
    }

    /// Numeric part of the question id (`"q12"`, `"Q12"` and `"12"` all give 12).
    pub fn question_number(&self) -> Option<u32> {
        let id = self.question_id.trim();
        let digits = id.strip_prefix(['q', 'Q']).unwrap_or(id);
        digits.parse().ok()
    }
}

/// Question numbers answered with worldview questions.
pub const WORLDVIEW_QUESTIONS: core::ops::RangeInclusive<u32> = 1..=24;
/// Question numbers answered with scenario questions.
pub const SCENARIO_QUESTIONS: core::ops::RangeInclusive<u32> = 25..=30;

/// Answers split by questionnaire section.
#[derive(Debug, Default)]
pub struct SeparatedAnswers<'a> {
    /// Answers to q1–q24.
    pub worldview: Vec<&'a Answer>,
    /// Answers to q25–q30.
    pub scenario: Vec<&'a Answer>,
}

/// Split answers into worldview and scenario sections, preserving order.
///
/// Answers whose id does not parse, or falls outside both ranges, are dropped.
pub fn separate_answers(answers: &[Answer]) -> SeparatedAnswers<'_> {
    let mut out = SeparatedAnswers::default();
    for answer in answers {
        match answer.question_number() {
            Some(n) if WORLDVIEW_QUESTIONS.contains(&n) => out.worldview.push(answer),
            Some(n) if SCENARIO_QUESTIONS.contains(&n) => out.scenario.push(answer),
            _ => {}
        }
    }
    out
}

// ─── TraitVector ─────────────────────────────────────────────────────────────

/// Accumulated raw score per dimension. Immutable once built.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitVector([f64; 8]);

impl TraitVector {
    /// Construct directly from per-dimension values in declaration order.
    pub const fn from_values(values: [f64; 8]) -> Self {
        Self(values)
    }

    /// Score for one dimension.
    #[inline]
    pub fn get(&self, dim: Dimension) -> f64 {
        self.0[dim.index()]
    }

    /// Raw values in declaration order.
    pub fn values(&self) -> &[f64; 8] {
        &self.0
    }

    /// `(dimension, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Dimensions sorted by score, descending. The sort is stable, so equal
    /// scores keep declaration order. Non-comparable values (NaN) compare equal.
    pub fn ranked(&self) -> [(Dimension, f64); 8] {
        let mut out = Dimension::ALL.map(|d| (d, self.get(d)));
        out.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        out
    }
}

impl Index<Dimension> for TraitVector {
    type Output = f64;

    fn index(&self, dim: Dimension) -> &f64 {
        &self.0[dim.index()]
    }
}

impl From<ScoringDelta> for TraitVector {
    fn from(d: ScoringDelta) -> Self {
        Self(d.0)
    }
}

/// Fold answers into a [`TraitVector`] by summing each answer's `scoring` delta.
pub fn build_vector<'a, I>(answers: I) -> TraitVector
where
    I: IntoIterator<Item = &'a Answer>,
{
    build_from_deltas(answers.into_iter().map(|a| a.scoring))
}

/// Fold raw deltas into a [`TraitVector`].
pub fn build_from_deltas<I>(deltas: I) -> TraitVector
where
    I: IntoIterator<Item = ScoringDelta>,
{
    let mut acc = ScoringDelta::ZERO;
    for d in deltas {
        acc += d;
    }
    TraitVector::from(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_zero_vector() {
        let v = build_vector(&[] as &[Answer]);
        assert_eq!(v, TraitVector::default());
        assert_eq!(v.iter().count(), 8);
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let d = ScoringDelta::from_pairs([("乾_創造性", 2.0), ("bogus", 5.0), ("kun", -1.0)]);
        assert_eq!(d.get(Dimension::Creativity), 2.0);
        assert_eq!(d.get(Dimension::Receptivity), -1.0);
        let total: f64 = Dimension::ALL.iter().map(|&x| d.get(x)).sum();
        assert!((total - 1.0).abs() < 1e-12, "bogus key leaked: {}", total);
    }

    #[test]
    fn test_build_vector_sums_in_order() {
        let answers = [
            Answer::new("q1", ScoringDelta::ZERO.with(Dimension::Action, 1.5)),
            Answer::new("q2", ScoringDelta::ZERO.with(Dimension::Action, -0.5)),
            Answer::new("q3", ScoringDelta::ZERO.with(Dimension::Harmony, 3.0)),
        ];
        let v = build_vector(&answers);
        assert_eq!(v[Dimension::Action], 1.0);
        assert_eq!(v[Dimension::Harmony], 3.0);
        assert_eq!(v[Dimension::Creativity], 0.0);
    }

    #[test]
    fn test_ranked_ties_keep_declaration_order() {
        let v = TraitVector::from_values([1.0, 1.0, 2.0, 1.0, 0.0, 0.0, 0.0, 2.0]);
        let order: Vec<Dimension> = v.ranked().iter().map(|p| p.0).collect();
        assert_eq!(
            order,
            vec![
                Dimension::Expression,
                Dimension::Receptivity,
                Dimension::Creativity,
                Dimension::Harmony,
                Dimension::Action,
                Dimension::Adaptability,
                Dimension::Exploration,
                Dimension::Stability,
            ]
        );
    }

    #[test]
    fn test_separate_answers_by_question_number() {
        let answers = [
            Answer::new("q1", ScoringDelta::ZERO),
            Answer::new("q24", ScoringDelta::ZERO),
            Answer::scenario("q25", ScoringDelta::ZERO, ScoringDelta::ZERO),
            Answer::new("30", ScoringDelta::ZERO),
            Answer::new("q31", ScoringDelta::ZERO),
            Answer::new("intro", ScoringDelta::ZERO),
        ];
        let split = separate_answers(&answers);
        assert_eq!(split.worldview.len(), 2);
        assert_eq!(split.scenario.len(), 2);
        assert_eq!(split.scenario[1].question_id, "30");
    }

    #[test]
    fn test_dimension_trigram_bijection() {
        for d in Dimension::ALL {
            assert_eq!(Dimension::from_trigram(d.trigram()), d);
        }
    }

    #[test]
    fn test_scenario_answer_scoring_is_sum() {
        let inner = ScoringDelta::ZERO.with(Dimension::Stability, 2.0);
        let outer = ScoringDelta::ZERO.with(Dimension::Stability, 1.0).with(Dimension::Harmony, 1.0);
        let a = Answer::scenario("q26", inner, outer);
        assert_eq!(a.scoring.get(Dimension::Stability), 3.0);
        assert_eq!(a.scoring.get(Dimension::Harmony), 1.0);
    }
}
