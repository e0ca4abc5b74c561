//! Energy synergy: analytics correlation, yin/yang balance and the static
//! trigram synergy matrix.
//!
//! `0.3 · correlation + 0.4 · yin_yang + 0.3 · matrix`

use crate::analytics::AnalyticsSummary;
use crate::trigram::Trigram;

const CORRELATION_WEIGHT: f64 = 0.3;
const YIN_YANG_WEIGHT: f64 = 0.4;
const MATRIX_WEIGHT: f64 = 0.3;

/// Static trigram synergy, canonical order. Symmetric with a unit diagonal.
pub const TRIGRAM_SYNERGY: [[f64; 8]; 8] = [
    //乾   兌   離   震   巽   坎   艮   坤
    [1.0, 0.7, 0.6, 0.8, 0.6, 0.5, 0.7, 0.9], // 乾
    [0.7, 1.0, 0.6, 0.5, 0.7, 0.6, 0.8, 0.7], // 兌
    [0.6, 0.6, 1.0, 0.7, 0.8, 0.9, 0.5, 0.6], // 離
    [0.8, 0.5, 0.7, 1.0, 0.9, 0.6, 0.5, 0.6], // 震
    [0.6, 0.7, 0.8, 0.9, 1.0, 0.5, 0.6, 0.5], // 巽
    [0.5, 0.6, 0.9, 0.6, 0.5, 1.0, 0.7, 0.6], // 坎
    [0.7, 0.8, 0.5, 0.5, 0.6, 0.7, 1.0, 0.8], // 艮
    [0.9, 0.7, 0.6, 0.6, 0.5, 0.6, 0.8, 1.0], // 坤
];

#[inline]
fn m(a: Trigram, b: Trigram) -> f64 {
    TRIGRAM_SYNERGY[a.index()][b.index()]
}

/// Matrix term: `0.4·M[ua][ub] + 0.4·M[la][lb] + 0.2·mean(M[ua][lb], M[la][ub])`.
pub fn matrix_term(a: (Trigram, Trigram), b: (Trigram, Trigram)) -> f64 {
    let (ua, la) = a;
    let (ub, lb) = b;
    0.4 * m(ua, ub) + 0.4 * m(la, lb) + 0.2 * (m(ua, lb) + m(la, ub)) / 2.0
}

/// Share of yang lines in a six-line figure, 0–1.
pub fn yang_ratio(upper: Trigram, lower: Trigram) -> f64 {
    f64::from(upper.yang_strength() + lower.yang_strength()) / 6.0
}

/// Yin/yang term: the better of harmony (similar ratios) and complementarity
/// (ratios summing to one).
pub fn yin_yang_term(a: (Trigram, Trigram), b: (Trigram, Trigram)) -> f64 {
    let ya = yang_ratio(a.0, a.1);
    let yb = yang_ratio(b.0, b.1);
    let harmony = 1.0 - (ya - yb).abs();
    let complementarity = 1.0 - (ya + yb - 1.0).abs();
    harmony.max(complementarity)
}

/// Pearson correlation of two analytics energy vectors, mapped to [0, 1].
///
/// When either vector has zero variance the correlation is undefined; the
/// score is then `1 − mean |difference| / 100`.
pub fn correlation_term(a: &[f64; 5], b: &[f64; 5]) -> f64 {
    let n = a.len() as f64;
    let ma = a.iter().sum::<f64>() / n;
    let mb = b.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut va = 0.0;
    let mut vb = 0.0;
    for (x, y) in a.iter().zip(b) {
        cov += (x - ma) * (y - mb);
        va += (x - ma) * (x - ma);
        vb += (y - mb) * (y - mb);
    }
    if va > 0.0 && vb > 0.0 {
        let r = (cov / (va.sqrt() * vb.sqrt())).clamp(-1.0, 1.0);
        (r + 1.0) / 2.0
    } else {
        let mad = a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum::<f64>() / n;
        (1.0 - mad / 100.0).clamp(0.0, 1.0)
    }
}

/// Energy score in [0, 1], or `None` when either side lacks analytics.
pub fn energy_score(
    a: (Trigram, Trigram),
    b: (Trigram, Trigram),
    summary_a: Option<&AnalyticsSummary>,
    summary_b: Option<&AnalyticsSummary>,
) -> Option<f64> {
    let (sa, sb) = (summary_a?, summary_b?);
    let score = CORRELATION_WEIGHT * correlation_term(&sa.energy, &sb.energy)
        + YIN_YANG_WEIGHT * yin_yang_term(a, b)
        + MATRIX_WEIGHT * matrix_term(a, b);
    Some(score.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_symmetric_unit_diagonal() {
        for i in 0..8 {
            assert_eq!(TRIGRAM_SYNERGY[i][i], 1.0);
            for j in 0..8 {
                assert_eq!(TRIGRAM_SYNERGY[i][j], TRIGRAM_SYNERGY[j][i], "({i},{j})");
            }
        }
    }

    #[test]
    fn test_correlation_identical_is_one() {
        let v = [60.0, 40.0, 20.0, 30.0, 55.0];
        assert!((correlation_term(&v, &v) - 1.0).abs() < 1e-12);
        let flat = [50.0; 5];
        assert_eq!(correlation_term(&flat, &flat), 1.0);
    }

    #[test]
    fn test_correlation_anti_is_zero() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [5.0, 4.0, 3.0, 2.0, 1.0];
        assert!(correlation_term(&a, &b).abs() < 1e-12);
    }

    #[test]
    fn test_yin_yang_complement() {
        // 乾乾 (ratio 1) vs 坤坤 (ratio 0): harmony 0, complementarity 1
        let t = yin_yang_term((Trigram::Qian, Trigram::Qian), (Trigram::Kun, Trigram::Kun));
        assert_eq!(t, 1.0);
    }

    #[test]
    fn test_matrix_term_self_is_high() {
        for u in Trigram::ALL {
            for l in Trigram::ALL {
                assert!(matrix_term((u, l), (u, l)) >= 0.9 - 1e-12, "{u}{l}");
            }
        }
    }
}
