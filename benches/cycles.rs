//! iai benchmarks are measuring projected processor cycles spent on executing a
//! piece of code. They are less noisy and give a better understanding of
//! whether the performance is "objectively" changing between different
//! versions.
//!
//! It doesn't eliminate the necessity of measuring the time, though, because
//! knowing the absolute values is very important, too. Hence, the two sets of
//! benchmarks are very similar but complement each other.

use quarto_search::quarto::{Cell, Game};
use quarto_search::search::minimax::Search;
use quarto_search::{evaluation, set_cover};

fn evaluate_placements() {
    let game =
        Game::from_notation("01../23../..45/..67 8").expect("benchmarks are given valid games");
    for cell in Cell::all() {
        let _ = iai::black_box(evaluation::evaluate_placement(&game, cell, None));
    }
}

fn minimax_from_empty_board() {
    let _ = iai::black_box(Search::default().choose_piece(&Game::new()));
}

fn greedy_set_cover() {
    let sets = set_cover::problem(100, 42);
    let _ = iai::black_box(set_cover::search(100, &sets, set_cover::greedy_priority));
}

iai::main!(evaluate_placements, minimax_from_empty_board, greedy_set_cover);
