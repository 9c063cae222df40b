#![no_main]
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use quarto_search::evaluation::evaluate_placement;
use quarto_search::quarto::{Cell, Game, Piece};

// Every byte pair is a move: the low nibble of the first byte selects a piece,
// the second byte picks a cell.
fuzz_target!(|data: &[u8]| {
    let mut game = Game::new();
    for chunk in data.chunks_exact(2) {
        if game.check_finished() {
            break;
        }
        let Some(piece) = Piece::from_index(chunk[0] & 0xf) else {
            continue;
        };
        let Some(cell) = Cell::new(chunk[1] & 0b11, (chunk[1] >> 2) & 0b11) else {
            continue;
        };
        let placement = evaluate_placement(&game, cell, Some(piece));
        if !game.select(piece) {
            continue;
        }
        if !game.place(cell) {
            continue;
        }
        assert_eq!(placement.is_quarto(), game.check_winner(), "{game}");
    }
});
