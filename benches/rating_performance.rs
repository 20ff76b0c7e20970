//! Performance benchmarks for rating calculations and match recording

use babyfoot_league::config::AppConfig;
use babyfoot_league::league::{apply_match, MatchRecorder};
use babyfoot_league::rating::{expected_score, team_adjustment, update_pair, K_FACTOR};
use babyfoot_league::store::InMemoryRosterStore;
use babyfoot_league::{MatchSubmission, Player, PlayerRegistry};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn create_bench_roster(size: usize) -> Vec<Player> {
    (0..size)
        .map(|i| Player {
            id: format!("player_{}", i),
            rating: 800 + (i as i32 * 7) % 600,
            wins: (i % 13) as u32,
            losses: (i % 11) as u32,
        })
        .collect()
}

fn bench_rating_calculations(c: &mut Criterion) {
    c.bench_function("expected_score", |b| {
        b.iter(|| expected_score(black_box(1000.0), black_box(1200.0)))
    });

    c.bench_function("update_pair", |b| {
        b.iter(|| update_pair(black_box(1000), black_box(1200), black_box(1.0), K_FACTOR))
    });

    c.bench_function("team_adjustment", |b| {
        b.iter(|| {
            team_adjustment(
                black_box((900, 1100)),
                black_box((1000, 1050)),
                K_FACTOR,
            )
        })
    });
}

fn bench_apply_match(c: &mut Criterion) {
    let registry: PlayerRegistry = create_bench_roster(200).into_iter().collect();
    let solo = MatchSubmission::solo("player_3", "player_150");
    let duo = MatchSubmission::duo(["player_1", "player_2"], ["player_10", "player_20"]);

    c.bench_function("apply_solo_match_200_players", |b| {
        b.iter(|| apply_match(black_box(&registry), black_box(&solo)))
    });

    c.bench_function("apply_duo_match_200_players", |b| {
        b.iter(|| apply_match(black_box(&registry), black_box(&duo)))
    });

    c.bench_function("standings_200_players", |b| {
        b.iter(|| black_box(&registry).all())
    });
}

fn bench_record_match(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = Arc::new(InMemoryRosterStore::with_players(create_bench_roster(50)));
    let recorder = MatchRecorder::new(store, &AppConfig::default());
    let submission = MatchSubmission::solo("player_0", "player_1");

    c.bench_function("record_match_in_memory", |b| {
        b.iter(|| {
            rt.block_on(async {
                recorder
                    .record_match(black_box(&submission))
                    .await
                    .unwrap()
            })
        })
    });
}

criterion_group!(
    benches,
    bench_rating_calculations,
    bench_apply_match,
    bench_record_match
);
criterion_main!(benches);
