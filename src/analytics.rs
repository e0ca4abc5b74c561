//! Optional per-category analytics records.
//!
//! Each category may carry up to six line records (one per line position) with
//! numeric fields, a recommended stance, and a free-text interpretation. The
//! synergy analyzer reads per-category [`AnalyticsSummary`] values derived here.
//! A category without records simply has no summary; callers degrade to
//! neutral scores.

use hashbrown::HashMap;

use crate::error::ScoringError;

/// Number of line positions per category.
pub const LINES_PER_CATEGORY: usize = 6;

// ─── Stance ──────────────────────────────────────────────────────────────────

/// Recommended stance for a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stance {
    /// 能動
    #[cfg_attr(feature = "serde", serde(alias = "能動", alias = "active"))]
    Active,
    /// 受動
    #[cfg_attr(feature = "serde", serde(alias = "受動", alias = "passive"))]
    Passive,
    /// 中立
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "中立", alias = "neutral"))]
    Neutral,
}

impl Stance {
    /// Slot in a stance distribution array.
    pub const fn index(self) -> usize {
        match self {
            Stance::Active => 0,
            Stance::Passive => 1,
            Stance::Neutral => 2,
        }
    }
}

// ─── LineRecord ──────────────────────────────────────────────────────────────

/// Analytics for one line of one category.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineRecord {
    /// Category id, 1..=64.
    #[cfg_attr(feature = "serde", serde(alias = "卦番号"))]
    pub category_id: u8,
    /// Line position, 1 (bottom) ..= 6 (top).
    pub position: u8,
    /// Extra keywords for the keyword synergy term.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            alias = "キーワード",
            deserialize_with = "crate::catalog::keywords_from_list_or_csv"
        )
    )]
    pub keywords: Vec<String>,
    /// Modern interpretation summary.
    #[cfg_attr(feature = "serde", serde(default, alias = "現代解釈の要約"))]
    pub interpretation: String,
    /// S1 basic score.
    #[cfg_attr(feature = "serde", serde(default = "neutral_score", alias = "S1_基本スコア"))]
    pub basic: f64,
    /// S2 potential.
    #[cfg_attr(feature = "serde", serde(default = "neutral_score", alias = "S2_ポテンシャル"))]
    pub potential: f64,
    /// S3 stability.
    #[cfg_attr(feature = "serde", serde(default = "neutral_score", alias = "S3_安定性スコア"))]
    pub stability: f64,
    /// S4 risk. May be negative in source data; only the magnitude is used.
    #[cfg_attr(feature = "serde", serde(default, alias = "S4_リスク"))]
    pub risk: f64,
    /// S5 recommended stance.
    #[cfg_attr(feature = "serde", serde(default, alias = "S5_主体性推奨スタンス"))]
    pub stance: Stance,
    /// S6 variability.
    #[cfg_attr(feature = "serde", serde(default = "neutral_score", alias = "S6_変動性スコア"))]
    pub variability: f64,
    /// S7 overall evaluation.
    #[cfg_attr(feature = "serde", serde(default = "neutral_score", alias = "S7_総合評価スコア"))]
    pub overall: f64,
}

#[cfg(feature = "serde")]
fn neutral_score() -> f64 {
    50.0
}

// ─── Summary ─────────────────────────────────────────────────────────────────

/// Per-category aggregate over its line records.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyticsSummary {
    /// Mean [potential, stability, |risk|, variability, overall].
    pub energy: [f64; 5],
    /// Fraction of lines per stance, indexed by [`Stance::index`]. Sums to 1.
    pub stance_distribution: [f64; 3],
    /// Mean interpretation sentiment in [-1, 1].
    pub sentiment: f64,
    /// Least-squares slope of `overall` against line position.
    pub growth_trend: f64,
    /// Population standard deviation of `overall`.
    pub volatility: f64,
    /// Union of all line keywords, in first-seen order.
    pub keywords: Vec<String>,
}

// Small fixed lexicon. Matches are substring counts over the interpretation.
const POSITIVE_TERMS: [&str; 12] = [
    "成功", "発展", "吉", "喜", "調和", "成長", "繁栄", "達成", "協力", "安定", "信頼", "好機",
];
const NEGATIVE_TERMS: [&str; 10] = [
    "困難", "危険", "凶", "失敗", "衰退", "対立", "損", "障害", "苦", "迷",
];

/// Lexicon sentiment of a text in [-1, 1]. Text with no lexicon hits is 0.
pub fn sentiment(text: &str) -> f64 {
    let pos: usize = POSITIVE_TERMS.iter().map(|t| text.matches(t).count()).sum();
    let neg: usize = NEGATIVE_TERMS.iter().map(|t| text.matches(t).count()).sum();
    if pos + neg == 0 {
        0.0
    } else {
        (pos as f64 - neg as f64) / (pos + neg) as f64
    }
}

fn summarize(records: &[LineRecord]) -> Option<AnalyticsSummary> {
    if records.is_empty() {
        return None;
    }
    let n = records.len() as f64;

    let mut energy = [0.0; 5];
    let mut stances = [0.0; 3];
    let mut sentiment_sum = 0.0;
    let mut keywords: Vec<String> = Vec::new();
    for r in records {
        let fields = [r.potential, r.stability, r.risk.abs(), r.variability, r.overall];
        for (acc, v) in energy.iter_mut().zip(fields) {
            *acc += v;
        }
        stances[r.stance.index()] += 1.0;
        sentiment_sum += sentiment(&r.interpretation);
        for k in &r.keywords {
            if !keywords.contains(k) {
                keywords.push(k.clone());
            }
        }
    }
    for e in energy.iter_mut() {
        *e /= n;
    }
    for s in stances.iter_mut() {
        *s /= n;
    }

    let mean_x = records.iter().map(|r| f64::from(r.position)).sum::<f64>() / n;
    let mean_y = records.iter().map(|r| r.overall).sum::<f64>() / n;
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for r in records {
        let dx = f64::from(r.position) - mean_x;
        let dy = r.overall - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    let growth_trend = if sxx > 0.0 { sxy / sxx } else { 0.0 };

    Some(AnalyticsSummary {
        energy,
        stance_distribution: stances,
        sentiment: sentiment_sum / n,
        growth_trend,
        volatility: (syy / n).sqrt(),
        keywords,
    })
}

// ─── AnalyticsStore ──────────────────────────────────────────────────────────

/// Read-only analytics keyed by category id.
///
/// Records are kept sorted by line position so the `overall` series is time-ordered.
/// Summaries are computed once at construction.
#[derive(Clone, Debug, Default)]
pub struct AnalyticsStore {
    records: HashMap<u8, Vec<LineRecord>>,
    summaries: HashMap<u8, AnalyticsSummary>,
}

impl AnalyticsStore {
    /// Empty store: every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records.
    ///
    /// Records with a category id outside 1..=64 or a position outside 1..=6
    /// are rejected. A repeated (category, position) replaces the earlier record.
    pub fn from_records<I>(records: I) -> Result<Self, ScoringError>
    where
        I: IntoIterator<Item = LineRecord>,
    {
        let mut by_category: HashMap<u8, Vec<LineRecord>> = HashMap::new();
        for r in records {
            if !(1..=64).contains(&r.category_id) {
                return Err(ScoringError::InvalidCategoryId(r.category_id));
            }
            if !(1..=LINES_PER_CATEGORY as u8).contains(&r.position) {
                return Err(ScoringError::InvalidLinePosition {
                    category_id: r.category_id,
                    position: r.position,
                });
            }
            let lines = by_category.entry(r.category_id).or_default();
            lines.retain(|l| l.position != r.position);
            lines.push(r);
        }
        let mut summaries = HashMap::with_capacity(by_category.len());
        for (id, lines) in by_category.iter_mut() {
            lines.sort_by_key(|l| l.position);
            if let Some(s) = summarize(lines) {
                summaries.insert(*id, s);
            }
        }
        Ok(Self {
            records: by_category,
            summaries,
        })
    }

    /// Parse a JSON array of line records.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let records: Vec<LineRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Line records for a category, sorted by position. Empty if none.
    pub fn records_for(&self, category_id: u8) -> &[LineRecord] {
        self.records.get(&category_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Aggregate for a category, if it has any records.
    pub fn summary(&self, category_id: u8) -> Option<&AnalyticsSummary> {
        self.summaries.get(&category_id)
    }

    /// Strict form of [`AnalyticsStore::summary`].
    pub fn try_summary(&self, category_id: u8) -> Result<&AnalyticsSummary, ScoringError> {
        self.summary(category_id)
            .ok_or_else(|| ScoringError::MissingReferenceData {
                what: "analytics",
                key: category_id.to_string(),
            })
    }

    /// Number of categories with at least one record.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if no category has records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
