//! Criterion benchmarks measure time of the clearly separated pieces of code.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quarto_search::evaluation::evaluate_placement;
use quarto_search::quarto::{Cell, Game};
use quarto_search::search::local;
use quarto_search::search::minimax::Search;
use quarto_search::set_cover;
use rand::rngs::StdRng;
use rand::SeedableRng;

const POSITIONS: [&str; 5] = [
    "..../..../..../.... -",
    "0.../.1../..2./.... 5",
    "8.../9.../a.../.... -",
    "01../23../..45/..67 8",
    "0f1e/3c2d/5a4b/.... 6",
];

fn games() -> Vec<Game> {
    POSITIONS
        .iter()
        .map(|notation| Game::from_notation(notation).expect("benchmarks are given valid games"))
        .collect()
}

fn evaluation_bench(c: &mut Criterion) {
    let games = games();
    let mut group = c.benchmark_group("Evaluation");
    group.throughput(criterion::Throughput::Elements(
        (games.len() * Cell::all().count()) as u64,
    ));
    group.bench_with_input(
        BenchmarkId::new("placements", format!("{} games", games.len())),
        &games,
        |b, games| {
            b.iter(|| {
                for game in games {
                    let piece = game.available_pieces().next();
                    for cell in Cell::all() {
                        let _ = std::hint::black_box(evaluate_placement(game, cell, piece));
                    }
                }
            });
        },
    );
    group.finish();
}

fn search_bench(c: &mut Criterion) {
    let games = games();
    let mut group = c.benchmark_group("Search");
    group.bench_with_input(
        BenchmarkId::new("hill climbing", format!("{} games", games.len())),
        &games,
        |b, games| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| {
                for game in games {
                    let _ = std::hint::black_box(local::choose_piece(game, &mut rng));
                    let _ = std::hint::black_box(local::place_piece(game, &mut rng));
                }
            });
        },
    );
    group.bench_with_input(
        BenchmarkId::new("minimax", format!("{} games", games.len())),
        &games,
        |b, games| {
            let mut search = Search::default();
            b.iter(|| {
                for game in games {
                    let _ = std::hint::black_box(search.choose_piece(game));
                    let _ = std::hint::black_box(search.place_piece(game));
                }
            });
        },
    );
    group.finish();
}

fn set_cover_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Set cover");
    for n in [20, 100] {
        let sets = set_cover::problem(n, 42);
        group.bench_with_input(BenchmarkId::new("greedy", n), &sets, |b, sets| {
            b.iter(|| std::hint::black_box(set_cover::search(n, sets, set_cover::greedy_priority)));
        });
    }
    group.finish();
}

criterion_group! {
    name = search;
    config = Criterion::default().sample_size(10);
    targets = evaluation_bench, search_bench, set_cover_bench
}

criterion_main!(search);
