//! # Triple OS walkthrough
//!
//! Scores three sample respondents end to end and prints their profiles,
//! consistency, balance and the strongest synergy partners of each Engine
//! category.

use triple_os_core::catalog::ReferenceData;
use triple_os_core::pipeline::{Recommendation, TripleOsAnalyzer, TripleOsReport};
use triple_os_core::profile::OsKind;
use triple_os_core::vector::{Answer, Dimension, ScoringDelta};

// ── Respondents ──────────────────────────────────────────────────────────────

fn respondent(worldview: [(Dimension, f64); 3], inner: Dimension, outer: Dimension) -> Vec<Answer> {
    let mut answers = Vec::new();
    for q in 1..=24u32 {
        let (dim, weight) = worldview[q as usize % 3];
        answers.push(Answer::new(format!("q{q}"), ScoringDelta::ZERO.with(dim, weight)));
    }
    for q in 25..=30u32 {
        answers.push(Answer::scenario(
            format!("q{q}"),
            ScoringDelta::ZERO.with(inner, 2.0),
            ScoringDelta::ZERO.with(outer, 2.0),
        ));
    }
    answers
}

fn pioneer() -> Vec<Answer> {
    respondent(
        [(Dimension::Creativity, 3.0), (Dimension::Action, 2.0), (Dimension::Expression, 1.0)],
        Dimension::Stability,
        Dimension::Harmony,
    )
}

fn caretaker() -> Vec<Answer> {
    respondent(
        [(Dimension::Receptivity, 3.0), (Dimension::Harmony, 2.0), (Dimension::Adaptability, 1.5)],
        Dimension::Exploration,
        Dimension::Receptivity,
    )
}

fn scholar() -> Vec<Answer> {
    respondent(
        [(Dimension::Exploration, 3.0), (Dimension::Stability, 2.5), (Dimension::Creativity, 0.5)],
        Dimension::Adaptability,
        Dimension::Expression,
    )
}

// ── Output ───────────────────────────────────────────────────────────────────

fn print_report(name: &str, analyzer: &TripleOsAnalyzer, report: &TripleOsReport) {
    println!("▶  {name}\n");
    for kind in OsKind::ALL {
        let os = report.os(kind);
        let category = analyzer.category(&os.profile);
        println!(
            "  {:<13} #{:<2} {:<6} {}{}  intensity {:>5.1}",
            kind.label(),
            os.profile.category_id,
            category.name,
            os.profile.upper.symbol(),
            os.profile.lower.symbol(),
            os.intensity,
        );
    }
    println!(
        "\n  consistency {:>5.1} ({:?})   balance {:>5.1}",
        report.consistency.score, report.consistency.kind, report.balance.balance
    );
    println!(
        "  synergy  E↔I {:.2}   I↔S {:.2}   E↔S {:.2}",
        report.synergy[0], report.synergy[1], report.synergy[2]
    );
    for r in &report.recommendations {
        match r {
            Recommendation::ImproveConsistency { score } => {
                println!("  • consistency {score:.1} is low: the three profiles pull apart")
            }
            Recommendation::ImproveBalance { score } => {
                println!("  • balance {score:.1} is low: energy sits mostly in one OS")
            }
            Recommendation::Energy { kind, improvement } => {
                println!("  • {kind}: {improvement:?}")
            }
        }
    }
    println!();
}

fn main() {
    let analyzer = TripleOsAnalyzer::new(ReferenceData::builtin().shared());
    let synergy = analyzer.synergy();

    println!("\n╔══════════════════════════════════════════════════════════════════════╗");
    println!("║  Triple OS: three respondents                                        ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");

    let respondents = [("Pioneer", pioneer()), ("Caretaker", caretaker()), ("Scholar", scholar())];
    let reports: Vec<TripleOsReport> = respondents
        .iter()
        .map(|(name, answers)| {
            let report = analyzer.analyze(answers);
            print_report(name, &analyzer, &report);
            report
        })
        .collect();

    println!("▶  Best synergy partners of each Engine category\n");
    for ((name, _), report) in respondents.iter().zip(&reports) {
        let id = report.engine.profile.category_id;
        let mut partners: Vec<(u8, f64)> = (1..=64u8)
            .filter(|&other| other != id)
            .map(|other| (other, synergy.compute_synergy(id, other)))
            .collect();
        partners.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(core::cmp::Ordering::Equal));
        let top: Vec<String> = partners
            .iter()
            .take(3)
            .map(|(other, s)| format!("#{other} ({s:.2})"))
            .collect();
        println!("  {:<10} #{:<2} → {}", name, id, top.join(", "));
    }
    println!();
}
