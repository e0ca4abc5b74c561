//! Integration tests for the synergy analyzer over the full 64×64 category grid.

use triple_os_core::analytics::{AnalyticsStore, LineRecord, Stance, LINES_PER_CATEGORY};
use triple_os_core::catalog::ReferenceData;
use triple_os_core::synergy::SynergyAnalyzer;

// ─── helpers ─────────────────────────────────────────────────────────────────

const TEXTS: [&str; 4] = [
    "成功と発展の兆し",
    "困難を越えて成長する",
    "調和を保ち協力する時",
    "迷いを捨てて待つ",
];

/// Six line records for every category, values varying by id and position.
fn complete_analytics() -> AnalyticsStore {
    let mut records = Vec::with_capacity(64 * LINES_PER_CATEGORY);
    for id in 1..=64u8 {
        for pos in 1..=LINES_PER_CATEGORY as u8 {
            let seed = f64::from(id) * 7.0 + f64::from(pos) * 3.0;
            records.push(LineRecord {
                category_id: id,
                position: pos,
                keywords: vec![format!("線{pos}"), format!("卦{id}")],
                interpretation: TEXTS[usize::from(id + pos) % TEXTS.len()].to_owned(),
                basic: 50.0,
                potential: 30.0 + seed % 50.0,
                stability: 20.0 + (seed * 1.3) % 60.0,
                risk: -(seed % 40.0),
                stance: match (id + pos) % 3 {
                    0 => Stance::Active,
                    1 => Stance::Passive,
                    _ => Stance::Neutral,
                },
                variability: 10.0 + (seed * 0.7) % 70.0,
                overall: 25.0 + (seed * 1.9) % 65.0,
            });
        }
    }
    AnalyticsStore::from_records(records).expect("generated records are valid")
}

fn analyzers() -> [SynergyAnalyzer; 2] {
    [
        SynergyAnalyzer::new(ReferenceData::builtin().shared()),
        SynergyAnalyzer::new(ReferenceData::with_analytics(complete_analytics()).shared()),
    ]
}

// ─── tests ───────────────────────────────────────────────────────────────────

/// With complete reference data, a category against itself scores at least
/// 0.8 on every sub-score.
#[test]
fn test_self_synergy_with_complete_data() {
    let analyzer = SynergyAnalyzer::new(ReferenceData::with_analytics(complete_analytics()).shared());
    for id in 1..=64u8 {
        let b = analyzer.breakdown(id, id);
        assert!(b.keyword >= 0.8, "{id}: keyword {}", b.keyword);
        assert!(b.energy >= 0.8, "{id}: energy {}", b.energy);
        assert!(b.elemental >= 0.8, "{id}: elemental {}", b.elemental);
        assert!(b.philosophical >= 0.8, "{id}: philosophical {}", b.philosophical);
        assert!(b.total >= 0.8, "{id}: total {}", b.total);
    }
}

/// Every pair scores in [0, 1] and synergy(a, b) == synergy(b, a) exactly,
/// with and without analytics.
#[test]
fn test_synergy_symmetric_and_bounded() {
    for analyzer in analyzers() {
        let m = analyzer.matrix();
        assert_eq!(m.len(), 64);
        for i in 0..64 {
            for j in 0..64 {
                let s = m[i][j];
                assert!((0.0..=1.0).contains(&s), "({}, {}): {s}", i + 1, j + 1);
                assert_eq!(s.to_bits(), m[j][i].to_bits(), "({}, {})", i + 1, j + 1);
            }
        }
    }
}

/// Sub-scores are symmetric too, not just the blend.
#[test]
fn test_breakdown_symmetric() {
    let [_, analyzer] = analyzers();
    for a in (1..=64u8).step_by(5) {
        for b in 1..=64u8 {
            assert_eq!(analyzer.breakdown(a, b), analyzer.breakdown(b, a), "({a}, {b})");
        }
    }
}

/// Missing analytics degrade the energy and philosophical terms to 0.5
/// instead of failing.
#[test]
fn test_missing_analytics_degrades_to_neutral() {
    let [plain, _] = analyzers();
    for a in 1..=64u8 {
        let b = plain.breakdown(a, 65 - a);
        assert_eq!(b.energy, 0.5);
        assert_eq!(b.philosophical, 0.5);
    }
}

/// Results are a pure function of the two ids.
#[test]
fn test_synergy_deterministic() {
    let [_, analyzer] = analyzers();
    let first = analyzer.matrix();
    let second = analyzer.matrix();
    assert_eq!(first, second);
}
