use criterion::{criterion_group, criterion_main, Criterion};
use opforge::batch::{evaluate_roster, RosterEntry};
use opforge::calculator::MetricsCalculator;
use opforge::stats::StatsInput;
use std::hint::black_box;

fn sample_sheet(seed: u32) -> StatsInput {
    StatsInput {
        rounds_played: 60 + seed % 40,
        damage_dealt: 9000 + seed * 13,
        targets_assassinated: 10 + seed % 7,
        target_survival: 4,
        free_for_all_kills: 20,
        free_for_all_wins: 3,
        infected_killed: 12,
        infection_survival: 2,
        infections: 5,
        escapes: 2,
        final_shots: 15,
        targets_protected: 8,
        epidemic: 1,
        xpb_minus_xpa: 4200,
    }
}

fn bench_single(c: &mut Criterion) {
    let calculator = MetricsCalculator::default();
    let sheet = sample_sheet(0);

    c.bench_function("calculate_single", |b| {
        b.iter(|| calculator.calculate(black_box(&sheet), black_box(1.3), black_box("console")))
    });
}

fn bench_roster(c: &mut Criterion) {
    let calculator = MetricsCalculator::default();
    let entries: Vec<RosterEntry> = (0..10_000)
        .map(|i| RosterEntry {
            player: format!("p{}", i),
            stats: sample_sheet(i),
            sdi: 1.0,
            device: "pc".to_string(),
        })
        .collect();

    c.bench_function("evaluate_roster_10k", |b| {
        b.iter(|| evaluate_roster(&calculator, black_box(&entries)))
    });
}

criterion_group!(benches, bench_single, bench_roster);
criterion_main!(benches);
