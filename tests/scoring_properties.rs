//! Integration tests for the scoring pipeline's guaranteed properties.
//!
//! The input domains are small and finite (8 trigrams, 64 ordered pairs,
//! 8! rank orders), so every property is checked exhaustively rather than by
//! random sampling.

use triple_os_core::catalog::{authentic_id, Catalog};
use triple_os_core::compatibility::compatibility;
use triple_os_core::config::ConsistencyConfig;
use triple_os_core::consistency::analyze_consistency;
use triple_os_core::energy::{map_energies, UNIFORM_ENERGY};
use triple_os_core::profile::{select_all, select_profile, OsKind};
use triple_os_core::vector::{build_vector, Answer, Dimension, ScoringDelta, TraitVector};
use triple_os_core::{lookup, Trigram};

// ─── helpers ─────────────────────────────────────────────────────────────────

/// All permutations of `items`, in lexicographic index order.
fn permutations(items: &[f64]) -> Vec<Vec<f64>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

fn to_array(v: &[f64]) -> [f64; 8] {
    let mut a = [0.0; 8];
    a.copy_from_slice(v);
    a
}

/// Every vector whose entries are drawn from {-2, 0, 3}: 3⁸ = 6561 vectors.
fn grid_vectors() -> Vec<TraitVector> {
    const LEVELS: [f64; 3] = [-2.0, 0.0, 3.0];
    (0..3usize.pow(8))
        .map(|mut n| {
            let mut v = [0.0; 8];
            for slot in v.iter_mut() {
                *slot = LEVELS[n % 3];
                n /= 3;
            }
            TraitVector::from_values(v)
        })
        .collect()
}

/// {qian 9, li 8, zhen 7, gen 6, kan 5, dui 4, xun 3, kun 1}, canonical order.
fn example_vector() -> TraitVector {
    TraitVector::from_values([9.0, 4.0, 8.0, 7.0, 3.0, 5.0, 6.0, 1.0])
}

// ─── vector ──────────────────────────────────────────────────────────────────

/// Empty input folds to the all-zero vector with all eight dimensions present.
#[test]
fn test_empty_answers_give_zero_vector() {
    let v = build_vector(&[] as &[Answer]);
    assert_eq!(v.values(), &[0.0; 8]);
    assert_eq!(v.iter().count(), 8);
}

/// Unknown keys are dropped; known keys accumulate across answers.
#[test]
fn test_unknown_keys_are_dropped() {
    let answers = vec![
        Answer::new(
            "q1",
            ScoringDelta::from_pairs([("乾_創造性", 2.0), ("謎_不明", 99.0)]),
        ),
        Answer::new("q2", ScoringDelta::from_pairs([("乾_創造性", 1.5), ("坤_受容性", -1.0)])),
    ];
    let v = build_vector(&answers);
    assert_eq!(v.get(Dimension::Creativity), 3.5);
    assert_eq!(v.get(Dimension::Receptivity), -1.0);
    assert_eq!(v.values().iter().sum::<f64>(), 2.5);
}

// ─── energy ──────────────────────────────────────────────────────────────────

/// Energies always lie in [0, 100]; a vector with no positive entry maps to
/// exactly 12.5 everywhere.
#[test]
fn test_energies_bounded_and_uniform_fallback() {
    for v in grid_vectors() {
        let e = map_energies(&v);
        for (t, x) in e.iter() {
            assert!((0.0..=100.0).contains(&x), "{t}: {x} for {:?}", v);
        }
        let max = v.values().iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max <= 0.0 {
            assert!(e.values().iter().all(|&x| x == UNIFORM_ENERGY), "{:?}", v);
        } else {
            assert!(e.values().contains(&100.0), "strongest trigram sits at 100");
        }
    }
}

/// Identical vectors give bit-identical energies.
#[test]
fn test_energies_deterministic() {
    let v = example_vector();
    let a = map_energies(&v);
    let b = map_energies(&v);
    for (x, y) in a.values().iter().zip(b.values()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

// ─── lookup ──────────────────────────────────────────────────────────────────

/// Lookup is total over all 64 ordered pairs and stays inside 1..=64.
#[test]
fn test_lookup_total() {
    for u in Trigram::ALL {
        for l in Trigram::ALL {
            let id = lookup(u, l);
            assert!((1..=64).contains(&id), "{u}{l} → {id}");
        }
    }
}

/// The lookup table and the catalog's own trigram attribution are allowed to
/// disagree. This pins the known disagreement so it is never assumed away.
#[test]
fn test_lookup_catalog_discrepancy_is_known() {
    let catalog = Catalog::builtin();

    let id = lookup(Trigram::Qian, Trigram::Dui);
    assert_eq!(id, 2);
    let rec = catalog.get_category(id);
    assert_ne!((rec.upper, rec.lower), (Trigram::Qian, Trigram::Dui));
    assert_eq!((rec.upper, rec.lower), (Trigram::Kun, Trigram::Kun));
    assert_eq!(catalog.find_by_trigrams(Trigram::Qian, Trigram::Dui).map(|c| c.id), Some(10));

    let mismatches = Trigram::ALL
        .iter()
        .flat_map(|&u| Trigram::ALL.iter().map(move |&l| (u, l)))
        .filter(|&(u, l)| {
            let rec = catalog.get_category(lookup(u, l));
            (rec.upper, rec.lower) != (u, l)
        })
        .count();
    assert!(mismatches > 0);

    // The optimizer's matrix is a third, separate table.
    assert_eq!(authentic_id(Trigram::Dui, Trigram::Qian), 58);
    assert_eq!(lookup(Trigram::Dui, Trigram::Qian), 9);
}

/// Every catalog record owns a distinct (upper, lower) pair.
#[test]
fn test_catalog_pairs_are_a_bijection() {
    let catalog = Catalog::builtin();
    for u in Trigram::ALL {
        for l in Trigram::ALL {
            let hits = catalog.iter().filter(|c| c.upper == u && c.lower == l).count();
            assert_eq!(hits, 1, "{u}{l}");
        }
    }
}

// ─── compatibility ───────────────────────────────────────────────────────────

/// Self-compatibility is 1, every value lies in [0.1, 1], and the function
/// is exactly symmetric.
#[test]
fn test_compatibility_properties() {
    for a in Trigram::ALL {
        assert_eq!(compatibility(a, a), 1.0, "{a}");
        for b in Trigram::ALL {
            let ab = compatibility(a, b);
            assert!((0.1..=1.0).contains(&ab), "{a}{b}: {ab}");
            assert_eq!(ab.to_bits(), compatibility(b, a).to_bits(), "{a}{b}");
        }
    }
}

/// 乾 (metal) is generated by 坤 (earth): 0.7, then the opposite-pair
/// dampener 0.8, whichever order the pair is given in.
#[test]
fn test_compatibility_heaven_earth() {
    assert!((compatibility(Trigram::Qian, Trigram::Kun) - 0.56).abs() < 1e-12);
    assert!((compatibility(Trigram::Kun, Trigram::Qian) - 0.56).abs() < 1e-12);
}

// ─── profiles ────────────────────────────────────────────────────────────────

/// The documented example ranking.
#[test]
fn test_example_profiles() {
    let v = example_vector();
    let ranked: Vec<Dimension> = v.ranked().iter().map(|&(d, _)| d).collect();
    assert_eq!(
        ranked,
        vec![
            Dimension::Creativity,
            Dimension::Expression,
            Dimension::Action,
            Dimension::Stability,
            Dimension::Exploration,
            Dimension::Harmony,
            Dimension::Adaptability,
            Dimension::Receptivity,
        ]
    );

    let [engine, interface, safe_mode] = select_all(&v);
    assert_eq!((engine.upper, engine.lower), (Trigram::Qian, Trigram::Li));
    assert_eq!((interface.upper, interface.lower), (Trigram::Zhen, Trigram::Gen));
    assert_eq!((safe_mode.upper, safe_mode.lower), (Trigram::Xun, Trigram::Kun));
    assert_eq!(engine.category_id, lookup(Trigram::Qian, Trigram::Li));
    assert_eq!(engine.score, 9.0);
    assert_eq!(safe_mode, select_profile(&v, OsKind::SafeMode));
}

/// With distinct scores no dimension is used by two OS kinds. Checked over
/// all 8! rank orders.
#[test]
fn test_profiles_never_share_a_dimension() {
    let scores = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let perms = permutations(&scores);
    assert_eq!(perms.len(), 40_320);
    for p in perms {
        let v = TraitVector::from_values(to_array(&p));
        let profiles = select_all(&v);
        let mut used: Vec<Dimension> = profiles
            .iter()
            .flat_map(|o| [o.primary, o.secondary])
            .collect();
        used.sort();
        used.dedup();
        assert_eq!(used.len(), 6, "{:?}", p);
        // Engine holds the top two scores, SafeMode the bottom two.
        assert_eq!(profiles[0].score, 8.0);
        assert_eq!(v.get(profiles[2].secondary), 1.0);
    }
}

/// Ties keep declaration order.
#[test]
fn test_ties_break_by_declaration_order() {
    let [engine, interface, safe_mode] = select_all(&TraitVector::from_values([5.0; 8]));
    assert_eq!((engine.upper, engine.lower), (Trigram::Qian, Trigram::Dui));
    assert_eq!((interface.upper, interface.lower), (Trigram::Li, Trigram::Zhen));
    assert_eq!((safe_mode.upper, safe_mode.lower), (Trigram::Gen, Trigram::Kun));
}

// ─── consistency ─────────────────────────────────────────────────────────────

/// Same three profiles, same report, for every grid vector.
#[test]
fn test_consistency_idempotent_and_bounded() {
    let cfg = ConsistencyConfig::default();
    for v in grid_vectors().into_iter().step_by(7) {
        let [e, i, s] = select_all(&v);
        let first = analyze_consistency(&e, &i, &s, &cfg);
        let second = analyze_consistency(&e, &i, &s, &cfg);
        assert_eq!(first, second);
        assert!((0.0..=100.0).contains(&first.score));
    }
}
