//! Implementation of the Quarto board, its pieces and rules.
//!
//! Quarto is played on a 4x4 board with 16 distinct pieces. Each piece is
//! either tall or short, colored or neutral, solid or hollow, square or round.
//! Instead of picking their own piece, players choose the piece the
//! *opponent* has to place. Whoever completes a line (row, column or
//! diagonal) of four pieces sharing at least one attribute wins.

pub mod board;
pub mod game;
pub mod piece;

pub use board::{Board, Cell, Line, BOARD_SIZE, BOARD_WIDTH};
pub use game::Game;
pub use piece::{Attributes, Piece};
