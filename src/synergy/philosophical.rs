//! Philosophical synergy from analytics summaries and line structure.
//!
//! | Term | Weight |
//! |------|--------|
//! | stance distribution alignment | 0.3 |
//! | interpretation sentiment similarity | 0.25 |
//! | growth trend / volatility similarity | 0.25 |
//! | life-philosophy label | 0.2 |

use crate::analytics::AnalyticsSummary;
use crate::trigram::Trigram;

// Differences at or beyond these scales count as fully dissimilar.
const TREND_SCALE: f64 = 20.0;
const VOLATILITY_SCALE: f64 = 50.0;

/// Coarse life-philosophy label from the count of yang lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifePhilosophy {
    /// Four or more yang lines.
    Pioneering,
    /// Exactly three yang lines.
    Balancing,
    /// Two or fewer yang lines.
    Nurturing,
}

impl LifePhilosophy {
    /// Label for an (upper, lower) figure.
    pub fn of(upper: Trigram, lower: Trigram) -> Self {
        match upper.yang_strength() + lower.yang_strength() {
            0..=2 => LifePhilosophy::Nurturing,
            3 => LifePhilosophy::Balancing,
            _ => LifePhilosophy::Pioneering,
        }
    }

    /// Label affinity: same 1.0, either Balancing 0.7, Pioneering–Nurturing 0.6.
    pub fn affinity(self, other: LifePhilosophy) -> f64 {
        if self == other {
            1.0
        } else if self == LifePhilosophy::Balancing || other == LifePhilosophy::Balancing {
            0.7
        } else {
            0.6
        }
    }
}

/// `1 −` total-variation distance of two stance distributions.
pub fn stance_alignment(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let tv: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum::<f64>() / 2.0;
    (1.0 - tv).clamp(0.0, 1.0)
}

/// Similarity of two sentiments in [-1, 1].
pub fn sentiment_similarity(a: f64, b: f64) -> f64 {
    (1.0 - (a - b).abs() / 2.0).clamp(0.0, 1.0)
}

/// Mean of trend similarity and volatility similarity.
pub fn growth_similarity(a: &AnalyticsSummary, b: &AnalyticsSummary) -> f64 {
    let trend = 1.0 - ((a.growth_trend - b.growth_trend).abs() / TREND_SCALE).min(1.0);
    let vol = 1.0 - ((a.volatility - b.volatility).abs() / VOLATILITY_SCALE).min(1.0);
    (trend + vol) / 2.0
}

/// Philosophical score in [0, 1], or `None` when either side lacks analytics.
pub fn philosophical_score(
    a: (Trigram, Trigram),
    b: (Trigram, Trigram),
    summary_a: Option<&AnalyticsSummary>,
    summary_b: Option<&AnalyticsSummary>,
) -> Option<f64> {
    let (sa, sb) = (summary_a?, summary_b?);
    let label = LifePhilosophy::of(a.0, a.1).affinity(LifePhilosophy::of(b.0, b.1));
    let score = 0.3 * stance_alignment(&sa.stance_distribution, &sb.stance_distribution)
        + 0.25 * sentiment_similarity(sa.sentiment, sb.sentiment)
        + 0.25 * growth_similarity(sa, sb)
        + 0.2 * label;
    Some(score.clamp(0.0, 1.0))
}
